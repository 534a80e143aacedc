//! 可复用的 UI 组件

pub mod language_selector;
pub mod statusbar;
