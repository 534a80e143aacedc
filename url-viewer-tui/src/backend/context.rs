//! 后端服务上下文
//!
//! 持有各界面共用的服务实例，提供给 UI 层调用

use std::sync::Arc;

use tokio::runtime::Handle;
use url_viewer_core::traits::{PageLoader, PreferenceStore};
use url_viewer_core::LanguageService;

use super::FrameHost;

/// TUI 服务上下文
#[derive(Clone)]
pub struct AppContext {
    /// 语言偏好服务
    pub language: LanguageService,
    /// 预览框架使用的页面加载器
    loader: Arc<dyn PageLoader>,
    /// 执行页面加载的运行时
    runtime: Handle,
}

impl AppContext {
    pub fn new(
        preferences: Arc<dyn PreferenceStore>,
        loader: Arc<dyn PageLoader>,
        runtime: Handle,
    ) -> Self {
        Self {
            language: LanguageService::new(preferences),
            loader,
            runtime,
        }
    }

    /// 为新挂载的界面创建独立的预览框架
    pub fn frame_host(&self) -> FrameHost {
        FrameHost::new(Arc::clone(&self.loader), self.runtime.clone())
    }
}
