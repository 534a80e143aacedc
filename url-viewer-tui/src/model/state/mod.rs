//! 页面数据状态

mod input;
mod policy;
mod scroll;
mod viewer;

pub use input::InputField;
pub use policy::PolicyState;
pub use scroll::ScrollState;
pub use viewer::ViewerState;
