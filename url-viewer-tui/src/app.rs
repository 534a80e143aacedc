//!
//! app.rs
//! 应用主循环
//!
//!
//! 在应用启动时，挂载查看器界面：
//!
//! App {
//!
//!     should_quit: bool = false,                      // 决定应用是否应该退出
//!     surface: Surface::Viewer(..),                   // 当前挂载的界面，语言从偏好读取
//!     status_message: None,                           // 状态栏消息
//!
//! }
//!
//!
//! 主循环大约每 100 ms 执行一次（取决于有无事件）
//! 进入循环前先记录终端大小（之后由 Resize 事件更新），滚动范围依赖它。
//! 应用的主循环中有：
//! loop {
//!
//!     terminal.draw(|f| view::render(&app , f))       // 渲染 UI
//!     set_window_title(..)                            // 界面或语言变化时更新窗口标题
//!     if app.should_quit{ break }                     // 检查 APP 是否应该退出
//!     while let Some(signal) = app.next_frame_signal() {
//!         update::update(&mut app , Frame(signal))    // 处理预览框架送回的加载结果
//!     }
//!     if let Some(event) = poll_event() {             // 轮询获取输入，在此等待 100ms
//!         let msg = handle_event(event , &app);           // 接收原始事件并分发消息
//!         update::update(&mut app , msg)                  // 更新终端状态
//!     }
//! }

use std::time::Duration;

use anyhow::Result;

use crate::event;
use crate::message::AppMessage;
use crate::model::App;
use crate::update;
use crate::util::{Term, set_window_title};
use crate::view;

/// 运行应用主循环
pub fn run(terminal: &mut Term, app: &mut App) -> Result<()> {
    let size = terminal.size()?;
    update::update(app, AppMessage::Resize(size.width, size.height));

    let mut window_title = "";

    loop {
        // 1. 渲染 UI
        terminal.draw(|frame| {
            view::render(app, frame);
        })?;

        // 2. 同步窗口标题
        let title = app.surface.window_title();
        if title != window_title {
            set_window_title(terminal, title)?;
            window_title = title;
        }

        // 3. 检查是否应该退出
        if app.should_quit {
            break;
        }

        // 4. 处理预览框架的信号
        while let Some(signal) = app.next_frame_signal() {
            update::update(app, AppMessage::Frame(signal));
        }

        // 5. 轮询事件（100ms 超时）
        if let Some(event) = event::poll_event(Duration::from_millis(100))? {
            let msg = event::handle_event(event, app);
            update::update(app, msg);
        }
    }

    Ok(())
}
