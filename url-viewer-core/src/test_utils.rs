//! 测试辅助模块
//!
//! 提供 mock 实现和便捷的测试工厂方法。
//! `FailingPreferenceStore` 通过 `test-utils` feature 提供给前端的测试使用，
//! 其余辅助只在本 crate 的测试中编译。

#[cfg(test)]
use std::sync::Arc;

#[cfg(test)]
use tokio::io::{AsyncReadExt, AsyncWriteExt};
#[cfg(test)]
use tokio::net::TcpListener;
#[cfg(test)]
use url::Url;

use crate::error::{CoreError, CoreResult};
#[cfg(test)]
use crate::services::LANGUAGE_STORAGE_KEY;
#[cfg(test)]
use crate::traits::InMemoryPreferenceStore;
use crate::traits::PreferenceStore;
#[cfg(test)]
use crate::types::{NavigationRequest, TargetUrl};

// ===== PreferenceStore =====

/// 预置语言偏好的内存存储
#[cfg(test)]
pub fn store_with_language(code: &str) -> Arc<InMemoryPreferenceStore> {
    let store = InMemoryPreferenceStore::new();
    store
        .set(LANGUAGE_STORAGE_KEY, code)
        .expect("in-memory store write");
    Arc::new(store)
}

/// 读写都失败的存储
pub struct FailingPreferenceStore;

impl PreferenceStore for FailingPreferenceStore {
    fn get(&self, _key: &str) -> CoreResult<Option<String>> {
        Err(CoreError::StorageError("storage unavailable".to_string()))
    }

    fn set(&self, _key: &str, _value: &str) -> CoreResult<()> {
        Err(CoreError::StorageError("storage unavailable".to_string()))
    }
}

// ===== PageLoader =====

/// 指向任意地址的导航请求（绕过规范化，便于指向本地测试服务）
#[cfg(test)]
pub fn navigation_to(address: &str) -> NavigationRequest {
    let parsed = Url::parse(address).expect("test address");
    NavigationRequest::new(1, TargetUrl::new(address.to_string(), parsed))
}

/// 启动只应答一次的本地 HTTP 服务，返回其地址
///
/// `head` 为状态行加额外响应头（每行以 `\r\n` 结尾），
/// `Content-Length` 与 `Connection: close` 自动补上。
#[cfg(test)]
pub async fn serve_once(head: &str, body: &str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind test listener");
    let addr = listener.local_addr().expect("listener address");
    let response = format!(
        "{head}Content-Length: {}\r\nConnection: close\r\n\r\n{body}",
        body.len()
    );

    tokio::spawn(async move {
        let Ok((mut socket, _)) = listener.accept().await else {
            return;
        };
        let mut received = Vec::new();
        let mut buf = [0u8; 4096];
        loop {
            match socket.read(&mut buf).await {
                Ok(0) | Err(_) => break,
                Ok(n) => {
                    received.extend_from_slice(&buf[..n]);
                    if received.windows(4).any(|w| w == b"\r\n\r\n") {
                        break;
                    }
                }
            }
        }
        let _ = socket.write_all(response.as_bytes()).await;
        let _ = socket.shutdown().await;
    });

    format!("http://{addr}")
}
