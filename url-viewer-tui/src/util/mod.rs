//!
//! src/util/mod.rs
//! Util 层：基础设施和工具函数
//!
//! 与业务逻辑无关的基础设施代码：
//!     - terminal      终端初始化、恢复与窗口标题
//!     - logging       文件日志
//!     - paths         配置目录下的文件位置
//!     - text          按显示宽度折行
//!

mod logging;
pub mod paths;
mod terminal;
pub mod text;

pub use logging::init_logging;
pub use terminal::{Term, init_terminal, restore_terminal, set_window_title};
