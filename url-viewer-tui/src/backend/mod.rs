//!
//! src/backend/mod.rs
//! Backend 层：业务服务
//!
//! 为 UI 层提供 url-viewer-core 的具体实现：
//!     - JsonPreferenceStore   偏好文件存储（PreferenceStore）
//!     - FrameHost             预览框架宿主，异步加载页面并回传带序号的信号
//!     - AppContext            各界面共用的服务实例
//!

mod context;
mod frame_host;
mod preference_store;

#[cfg(test)]
pub mod test_utils;

pub use context::AppContext;
pub use frame_host::FrameHost;
pub use preference_store::JsonPreferenceStore;
