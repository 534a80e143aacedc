//! 当前挂载的界面
//!
//! 路由（`Route`）只是门牌号；`Surface` 是挂载在该路由上的界面及其全部状态。
//! 切换路由即丢弃旧界面、挂载新界面。

use url_viewer_core::types::{Language, Route};

use super::state::{PolicyState, ViewerState};
use crate::backend::AppContext;

/// 已挂载的界面
pub enum Surface {
    Viewer(Box<ViewerState>),
    Privacy(PolicyState),
}

impl Surface {
    /// 为路由挂载全新的界面（语言重新从偏好读取）
    pub fn mount(route: Route, ctx: &AppContext) -> Self {
        match route {
            Route::Viewer => Surface::Viewer(Box::new(ViewerState::new(ctx))),
            Route::Privacy => Surface::Privacy(PolicyState::new(ctx)),
        }
    }

    pub fn route(&self) -> Route {
        match self {
            Surface::Viewer(_) => Route::Viewer,
            Surface::Privacy(_) => Route::Privacy,
        }
    }

    pub fn language(&self) -> Language {
        match self {
            Surface::Viewer(state) => state.language,
            Surface::Privacy(state) => state.language,
        }
    }

    pub fn set_language(&mut self, language: Language) {
        match self {
            Surface::Viewer(state) => state.language = language,
            Surface::Privacy(state) => state.language = language,
        }
    }

    /// 终端窗口标题
    pub fn window_title(&self) -> &'static str {
        self.route().document_title(self.language())
    }
}
