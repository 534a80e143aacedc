//!
//! src/model/mod.rs
//! Model 层：应用状态定义
//!
//! Model 层是应用状态的 “唯一真相来源”，所有状态变更都通过 Update 层来触发。
//!
//!
//! 有模块结构：
//!     src/model/mod.rs
//!         mod app;            // 主应用状态
//!         mod surface;        // 当前挂载的界面
//!
//!         pub mod state;      // 界面数据状态（输入框、滚动、查看器、隐私政策）
//!
//!     Route 与 Surface 的区别：
//!         - Route 是一个简单的枚举（来自 url-viewer-core），只标识位置；
//!         - Surface 是挂载在该位置上的界面，存储输入、加载状态、语言等数据。
//!           每次切换路由都会重新挂载，旧界面的状态随之丢弃。
//!

mod app;
mod surface;
pub mod state;

pub use app::App;
pub use surface::Surface;
