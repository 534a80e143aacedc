//!
//! src/message/mod.rs
//! Message 层：事件消息定义
//!
//! 作为 Event → Update 之间的桥梁。
//! 按键被翻译成 Message，预览框架的加载信号也被包装成 Message，
//! Update 层只根据 Message 来更新 Model。
//!
//!
//! 有模块结构：
//!     src/message/mod.rs
//!         mod app;        // 主消息 AppMessage
//!         mod input;      // 地址输入框子消息
//!         mod scroll;     // 滚动子消息
//!

mod app;
mod input;
mod scroll;

pub use app::AppMessage;
pub use input::InputMessage;
pub use scroll::ScrollMessage;
