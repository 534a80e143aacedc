//!
//! src/event/mod.rs
//! Event 层：事件处理
//!
//! 负责将键盘输入事件转换为 Message。
//!
//!
//! 有模块结构：
//!     src/event/mod.rs
//!         mod handler;        // 事件处理器
//!         mod keymap;         // 快捷键映射
//!
//!     其中有：
//!         · poll_event      事件轮询，受 ~/app.rs 调用，最长等待 timeout
//!         · handle_event    事件分发：
//!             - 全局快捷键（退出、语言、路由、滚动），就地处理
//!             - 查看器界面：刷新、提交、输入框编辑
//!             - 隐私政策界面：除全局快捷键外不响应
//!

mod handler;
mod keymap;

pub use handler::{handle_event, poll_event};
