//! 查看器界面状态

use log::debug;
use url_viewer_core::types::{FramePage, FrameSignal, Language, LoadOutcome};
use url_viewer_core::ViewerService;

use super::{InputField, ScrollState};
use crate::backend::{AppContext, FrameHost};

/// 查看器界面状态
///
/// 每次挂载都是全新的实例：输入、加载状态与预览框架都不跨路由保留。
pub struct ViewerState {
    /// 本界面的语言（挂载时从偏好读取）
    pub language: Language,
    /// 地址输入框
    pub input: InputField,
    /// 加载状态机
    pub viewer: ViewerService,
    /// 预览框架
    pub frame: FrameHost,
    /// 框架当前显示的页面
    pub page: Option<FramePage>,
    /// 页面滚动位置
    pub scroll: ScrollState,
}

impl ViewerState {
    pub fn new(ctx: &AppContext) -> Self {
        Self {
            language: ctx.language.load(),
            input: InputField::new(),
            viewer: ViewerService::new(),
            frame: ctx.frame_host(),
            page: None,
            scroll: ScrollState::default(),
        }
    }

    /// 提交输入；规范化失败时只更新错误
    pub fn submit(&mut self) {
        if let Ok(request) = self.viewer.submit(&self.input.value) {
            self.frame.navigate(request);
        }
    }

    /// 重新加载当前地址（尚无地址时无操作）
    pub fn refresh(&mut self) {
        if let Some(request) = self.viewer.refresh() {
            self.frame.navigate(request);
        }
    }

    /// 处理预览框架的信号，过期信号被忽略
    pub fn on_frame_signal(&mut self, signal: FrameSignal) {
        match signal.outcome {
            LoadOutcome::Loaded(page) => {
                if self.viewer.on_frame_loaded(signal.seq) {
                    self.page = Some(page);
                    self.scroll.reset();
                }
            }
            LoadOutcome::Failed(reason) => {
                if self.viewer.on_frame_failed(signal.seq) {
                    debug!("[Viewer] Frame #{} failed: {reason}", signal.seq);
                    self.page = None;
                    self.scroll.reset();
                }
            }
        }
    }
}
