//! 预览框架宿主
//!
//! 每个查看器界面持有一个 `FrameHost`。它在 tokio 运行时上执行页面加载，
//! 并通过通道把带序号的加载结果送回主循环。
//!
//! - 新的加载会中止上一个尚未完成的加载任务
//! - 宿主被丢弃时（切换路由、退出）中止进行中的加载

use std::sync::Arc;

use log::debug;
use tokio::runtime::Handle;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio::task::JoinHandle;
use url_viewer_core::traits::PageLoader;
use url_viewer_core::types::{FrameSignal, LoadOutcome, NavigationRequest};

/// 预览框架宿主
pub struct FrameHost {
    loader: Arc<dyn PageLoader>,
    runtime: Handle,
    tx: UnboundedSender<FrameSignal>,
    rx: UnboundedReceiver<FrameSignal>,
    /// 进行中的加载任务
    current: Option<JoinHandle<()>>,
}

impl FrameHost {
    pub fn new(loader: Arc<dyn PageLoader>, runtime: Handle) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            loader,
            runtime,
            tx,
            rx,
            current: None,
        }
    }

    /// 让框架导航到请求的地址
    pub fn navigate(&mut self, request: NavigationRequest) {
        self.abort_current();

        let loader = Arc::clone(&self.loader);
        let tx = self.tx.clone();
        self.current = Some(self.runtime.spawn(async move {
            let seq = request.seq;
            let outcome = match loader.load(&request).await {
                Ok(page) => LoadOutcome::Loaded(page),
                Err(e) => {
                    debug!("[Frame] Load #{seq} failed: {e}");
                    LoadOutcome::Failed(e.to_string())
                }
            };
            // 接收端已关闭说明界面已卸载
            let _ = tx.send(FrameSignal { seq, outcome });
        }));
    }

    /// 取出一个已到达的信号（非阻塞）
    pub fn try_next_signal(&mut self) -> Option<FrameSignal> {
        self.rx.try_recv().ok()
    }

    /// 是否有加载任务仍在运行
    pub fn is_busy(&self) -> bool {
        self.current.as_ref().is_some_and(|task| !task.is_finished())
    }

    fn abort_current(&mut self) {
        if self.is_busy() {
            debug!("[Frame] Aborting in-flight load");
        }
        if let Some(task) = self.current.take() {
            task.abort();
        }
    }
}

impl Drop for FrameHost {
    fn drop(&mut self) {
        self.abort_current();
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::time::Duration;

    use url_viewer_core::types::FramePage;
    use url_viewer_core::ViewerService;

    use super::*;
    use crate::backend::test_utils::ScriptedLoader;

    fn request_for(viewer: &mut ViewerService, input: &str) -> NavigationRequest {
        viewer.submit(input).unwrap()
    }

    async fn next_signal(host: &mut FrameHost) -> FrameSignal {
        tokio::time::timeout(Duration::from_secs(5), host.rx.recv())
            .await
            .expect("signal within timeout")
            .expect("channel open")
    }

    /// 让出执行权直到标志被置位
    async fn wait_for(flag: &AtomicBool) {
        for _ in 0..100 {
            if flag.load(Ordering::SeqCst) {
                return;
            }
            tokio::task::yield_now().await;
        }
        panic!("flag never set");
    }

    #[tokio::test]
    async fn successful_load_is_signalled_with_its_sequence() {
        let loader = Arc::new(ScriptedLoader::new());
        let mut host = FrameHost::new(loader, Handle::current());
        let mut viewer = ViewerService::new();

        let request = request_for(&mut viewer, "example.com");
        let seq = request.seq;
        host.navigate(request);

        let signal = next_signal(&mut host).await;
        assert_eq!(signal.seq, seq);
        match signal.outcome {
            LoadOutcome::Loaded(FramePage { title, .. }) => {
                assert_eq!(title.as_deref(), Some("example.com"));
            }
            LoadOutcome::Failed(reason) => panic!("unexpected failure: {reason}"),
        }
    }

    #[tokio::test]
    async fn failed_load_is_signalled() {
        let loader = Arc::new(ScriptedLoader::new());
        let mut host = FrameHost::new(loader, Handle::current());
        let mut viewer = ViewerService::new();

        host.navigate(request_for(&mut viewer, "fail.example.com"));
        let signal = next_signal(&mut host).await;
        assert!(matches!(signal.outcome, LoadOutcome::Failed(_)));
    }

    #[tokio::test]
    async fn superseding_load_aborts_the_previous_one() {
        let loader = Arc::new(ScriptedLoader::new());
        let started = loader.hang_started.clone();
        let aborted = loader.hang_dropped.clone();
        let mut host = FrameHost::new(loader, Handle::current());
        let mut viewer = ViewerService::new();

        host.navigate(request_for(&mut viewer, "hang.example.com"));
        wait_for(&started).await;
        assert!(host.is_busy());

        let second = request_for(&mut viewer, "example.com");
        let second_seq = second.seq;
        host.navigate(second);

        let signal = next_signal(&mut host).await;
        assert_eq!(signal.seq, second_seq);
        wait_for(&aborted).await;
        assert!(host.try_next_signal().is_none());
    }

    #[tokio::test]
    async fn dropping_the_host_aborts_in_flight_load() {
        let loader = Arc::new(ScriptedLoader::new());
        let started = loader.hang_started.clone();
        let aborted = loader.hang_dropped.clone();
        let mut host = FrameHost::new(loader, Handle::current());
        let mut viewer = ViewerService::new();

        host.navigate(request_for(&mut viewer, "hang.example.com"));
        wait_for(&started).await;
        drop(host);

        wait_for(&aborted).await;
    }

    #[tokio::test]
    async fn nothing_pending_without_navigation() {
        let mut host = FrameHost::new(Arc::new(ScriptedLoader::new()), Handle::current());
        assert!(!host.is_busy());
        assert!(host.try_next_signal().is_none());
    }
}
