//! 测试辅助模块
//!
//! 提供 mock 实现和便捷的测试工厂方法。

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::runtime::Handle;
use url_viewer_core::traits::{PageLoader, PreferenceStore};
use url_viewer_core::types::{FramePage, NavigationRequest};
use url_viewer_core::{CoreError, CoreResult};

use super::AppContext;

/// 按主机名决定结果的加载器
///
/// - 主机名以 `hang.` 开头：永不完成（开始时置位 `hang_started`，被中止时置位 `hang_dropped`）
/// - 主机名以 `fail.` 开头：加载失败
/// - 主机名以 `long.` 开头：只有一行很长的文本，以 `ENDMARKER` 结尾
/// - 其他：成功，页面标题为主机名
pub struct ScriptedLoader {
    pub hang_started: Arc<AtomicBool>,
    pub hang_dropped: Arc<AtomicBool>,
}

impl ScriptedLoader {
    pub fn new() -> Self {
        Self {
            hang_started: Arc::new(AtomicBool::new(false)),
            hang_dropped: Arc::new(AtomicBool::new(false)),
        }
    }
}

/// 被丢弃时置位标志
struct DropFlag(Arc<AtomicBool>);

impl Drop for DropFlag {
    fn drop(&mut self) {
        self.0.store(true, Ordering::SeqCst);
    }
}

#[async_trait]
impl PageLoader for ScriptedLoader {
    async fn load(&self, request: &NavigationRequest) -> CoreResult<FramePage> {
        let host = request.url.host().unwrap_or_default().to_string();

        if host.starts_with("hang.") {
            let _flag = DropFlag(Arc::clone(&self.hang_dropped));
            self.hang_started.store(true, Ordering::SeqCst);
            std::future::pending::<()>().await;
        }

        if host.starts_with("fail.") {
            return Err(CoreError::NetworkError("connection refused".to_string()));
        }

        let line = if host.starts_with("long.") {
            let words: Vec<String> = (0..300).map(|i| format!("word{i}")).collect();
            format!("{} ENDMARKER", words.join(" "))
        } else {
            format!("Welcome to {host}")
        };

        Ok(FramePage {
            final_url: request.url.as_str().to_string(),
            status: 200,
            title: Some(host.clone()),
            lines: vec![line],
        })
    }
}

/// 使用 `ScriptedLoader` 和当前运行时的服务上下文
pub fn test_context(preferences: Arc<dyn PreferenceStore>) -> AppContext {
    AppContext::new(preferences, Arc::new(ScriptedLoader::new()), Handle::current())
}
