//! 终端初始化和清理
//!
//! 除了进入/离开备用屏幕外，还负责：
//! - 窗口标题跟随当前界面与语言
//! - panic 时先恢复终端再输出信息，避免终端停留在 raw mode

use std::io::{self, Stdout};
use std::panic;
use std::sync::Once;

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, SetTitle, disable_raw_mode, enable_raw_mode},
};
use log::error;
use ratatui::{Terminal, backend::CrosstermBackend};

/// 终端类型别名
pub type Term = Terminal<CrosstermBackend<Stdout>>;

/// 初始化终端（raw mode + 备用屏幕）
pub fn init_terminal() -> Result<Term> {
    install_panic_hook();

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;
    terminal.clear()?;

    Ok(terminal)
}

/// 恢复终端
pub fn restore_terminal(terminal: &mut Term) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

/// 设置终端窗口标题
pub fn set_window_title(terminal: &mut Term, title: &str) -> Result<()> {
    execute!(terminal.backend_mut(), SetTitle(title))?;
    Ok(())
}

/// panic 时恢复终端并记录日志，然后交给原来的 hook 打印
fn install_panic_hook() {
    static HOOK: Once = Once::new();
    HOOK.call_once(|| {
        let previous = panic::take_hook();
        panic::set_hook(Box::new(move |info| {
            // 此时终端句柄不可用，只能尽力恢复
            let _ = disable_raw_mode();
            let _ = execute!(io::stdout(), LeaveAlternateScreen);

            let location = info
                .location()
                .map(|loc| format!("{}:{}", loc.file(), loc.line()))
                .unwrap_or_else(|| "unknown".to_string());
            error!("Panic at {location}: {info}");

            previous(info);
        }));
    });
}
