//! 隐私政策界面状态

use url_viewer_core::types::Language;

use super::ScrollState;
use crate::backend::AppContext;

/// 隐私政策界面状态（除语言和滚动外无其他状态）
pub struct PolicyState {
    pub language: Language,
    pub scroll: ScrollState,
}

impl PolicyState {
    pub fn new(ctx: &AppContext) -> Self {
        Self {
            language: ctx.language.load(),
            scroll: ScrollState::default(),
        }
    }
}
