//! 语言切换

use log::{error, info, warn};

use crate::model::App;

/// 切换当前界面的语言并持久化
///
/// 写入失败时仍然切换内存中的语言，并在状态栏提示。
pub fn toggle(app: &mut App) {
    let next = app.surface.language().next();
    app.surface.set_language(next);
    info!("Language switched to {}", next.code());

    match app.ctx.language.save(next) {
        Ok(()) => app.clear_status(),
        Err(e) => {
            if e.is_expected() {
                warn!("Failed to save language preference: {e}");
            } else {
                error!("Failed to save language preference: {e}");
            }
            app.set_status("languageSaveFailed");
        }
    }
}
