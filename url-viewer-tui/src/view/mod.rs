//!
//! src/view/mod.rs
//! View 层：UI 渲染
//!
//! 只读取 Model，不修改任何状态。
//!
//! 有模块结构：
//!     src/view/mod.rs
//!         mod layout;         // 主布局：标题栏 + 页面 + 状态栏
//!         mod components;     // 标题栏、语言选择器、状态栏
//!         mod pages;          // 查看器页面、隐私政策页面
//!         pub mod theme;      // 颜色与样式
//!

mod components;
mod layout;
mod pages;
pub mod theme;

pub use layout::render;

use crate::model::{App, Surface};

/// 当前界面在当前终端大小下的最大滚动偏移（按折行后的行数计算）
pub fn max_scroll(app: &App) -> usize {
    let area = layout::page_area(app.viewport);
    match &app.surface {
        Surface::Viewer(state) => pages::viewer::max_scroll(state, area),
        Surface::Privacy(state) => pages::privacy::max_scroll(state, area),
    }
}
