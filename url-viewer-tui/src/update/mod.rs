//!
//! src/update/mod.rs
//! Update 层：状态更新
//!
//! 接收 Message，修改 Model。
//!     - viewer.rs     地址输入、提交、刷新、预览框架信号
//!     - language.rs   语言切换与持久化
//!
//! 路由切换、终端大小与滚动在此就地处理。
//! 滚动范围取决于折行后的行数，由 View 层按当前终端大小计算。
//!

mod language;
mod viewer;

use log::debug;
use ratatui::layout::Rect;

use crate::message::{AppMessage, ScrollMessage};
use crate::model::{App, Surface};
use crate::view;

/// 处理应用消息，更新状态
pub fn update(app: &mut App, msg: AppMessage) {
    match msg {
        AppMessage::Quit => {
            app.should_quit = true;
        }

        AppMessage::Navigate(route) => {
            // 已在该路由上时不重新挂载
            if app.surface.route() != route {
                debug!("[Route] {} -> {}", app.surface.route().path(), route.path());
                app.clear_status();
                app.navigate(route);
            }
        }

        AppMessage::ToggleLanguage => language::toggle(app),

        AppMessage::Submit => viewer::submit(app),

        AppMessage::Refresh => viewer::refresh(app),

        AppMessage::Input(input_msg) => viewer::input(app, input_msg),

        AppMessage::Scroll(scroll_msg) => scroll(app, scroll_msg),

        AppMessage::Frame(signal) => viewer::frame_signal(app, signal),

        AppMessage::Resize(width, height) => {
            app.viewport = Rect::new(0, 0, width, height);
        }

        AppMessage::Noop => {}
    }
}

/// 滚动当前界面的内容
fn scroll(app: &mut App, msg: ScrollMessage) {
    let max = view::max_scroll(app);
    match &mut app.surface {
        Surface::Viewer(state) => state.scroll.apply(msg, max),
        Surface::Privacy(state) => state.scroll.apply(msg, max),
    }
}
