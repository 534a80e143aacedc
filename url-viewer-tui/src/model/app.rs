//! 应用主状态结构

use ratatui::layout::Rect;
use url_viewer_core::types::{FrameSignal, Route};

use super::Surface;
use crate::backend::AppContext;

/// 应用主状态
pub struct App {
    /// 是否应该退出
    pub should_quit: bool,

    /// 当前挂载的界面
    pub surface: Surface,

    /// 状态栏消息（`HINTS` 翻译键）
    pub status_message: Option<&'static str>,

    /// 终端区域（用于计算滚动范围）
    pub viewport: Rect,

    /// 服务上下文
    pub ctx: AppContext,
}

impl App {
    /// 创建新的应用实例，挂载查看器界面
    pub fn new(ctx: AppContext) -> Self {
        Self {
            should_quit: false,
            surface: Surface::mount(Route::Viewer, &ctx),
            status_message: None,
            viewport: Rect::default(),
            ctx,
        }
    }

    /// 切换路由：丢弃当前界面（连同其预览框架）并挂载新界面
    pub fn navigate(&mut self, route: Route) {
        self.surface = Surface::mount(route, &self.ctx);
    }

    /// 取出当前界面预览框架的一个信号
    pub fn next_frame_signal(&mut self) -> Option<FrameSignal> {
        match &mut self.surface {
            Surface::Viewer(state) => state.frame.try_next_signal(),
            Surface::Privacy(_) => None,
        }
    }

    /// 设置状态消息
    pub fn set_status(&mut self, key: &'static str) {
        self.status_message = Some(key);
    }

    /// 清除状态消息
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }
}
