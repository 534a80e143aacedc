//! 类型定义模块

mod frame;
mod language;
mod route;
mod sandbox;
mod target_url;
mod view;

pub use frame::{FramePage, FrameSignal, LoadOutcome};
pub use language::Language;
pub use route::Route;
pub use sandbox::{PREVIEW_SANDBOX, SandboxPermission, sandbox_attribute};
pub use target_url::TargetUrl;
pub use view::{NavigationRequest, ViewPhase};
