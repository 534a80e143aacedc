//! 各界面的视图

pub mod privacy;
pub mod viewer;
