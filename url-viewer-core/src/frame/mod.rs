//! Preview frame page loading
//!
//! The frame is the only component that touches the network. It fetches the
//! requested address, refuses pages that forbid being framed, and reduces the
//! rest to text. Every failure is reported the same way; the caller never
//! learns more than "the page could not be embedded".

mod extract;
mod framing;

use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;

use crate::error::{CoreError, CoreResult};
use crate::traits::PageLoader;
use crate::types::{FramePage, NavigationRequest, sandbox_attribute};

pub use extract::{decode_entities, extract_title, html_to_lines, text_to_lines};
pub use framing::framing_refusal;

const REQUEST_TIMEOUT_SECS: u64 = 10;
const MAX_REDIRECTS: usize = 5;
const MAX_BODY_BYTES: usize = 2 * 1024 * 1024;
const USER_AGENT: &str = concat!("url-viewer/", env!("CARGO_PKG_VERSION"));

/// Loader settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameConfig {
    pub timeout: Duration,
    pub max_redirects: usize,
    pub user_agent: String,
    /// Bytes of body read before the rest is discarded
    pub max_body_bytes: usize,
}

impl Default for FrameConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(REQUEST_TIMEOUT_SECS),
            max_redirects: MAX_REDIRECTS,
            user_agent: USER_AGENT.to_string(),
            max_body_bytes: MAX_BODY_BYTES,
        }
    }
}

/// `PageLoader` backed by reqwest
pub struct HttpPageLoader {
    client: Client,
    config: FrameConfig,
}

impl HttpPageLoader {
    /// Build a loader with its own HTTP client
    pub fn new(config: FrameConfig) -> CoreResult<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .redirect(reqwest::redirect::Policy::limited(config.max_redirects))
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| CoreError::NetworkError(format!("HTTP client initialization failed: {e}")))?;
        Ok(Self { client, config })
    }

    pub fn config(&self) -> &FrameConfig {
        &self.config
    }

    async fn read_body(&self, mut response: reqwest::Response) -> CoreResult<Vec<u8>> {
        let mut body = Vec::new();
        while let Some(chunk) = response
            .chunk()
            .await
            .map_err(|e| CoreError::NetworkError(format!("Failed to read response body: {e}")))?
        {
            let room = self.config.max_body_bytes.saturating_sub(body.len());
            if chunk.len() >= room {
                body.extend_from_slice(&chunk[..room]);
                debug!("[Frame] Body truncated at {} bytes", self.config.max_body_bytes);
                break;
            }
            body.extend_from_slice(&chunk);
        }
        Ok(body)
    }
}

#[async_trait]
impl PageLoader for HttpPageLoader {
    async fn load(&self, request: &NavigationRequest) -> CoreResult<FramePage> {
        debug!(
            "[Frame] Load #{} {} (sandbox: {})",
            request.seq,
            request.url,
            sandbox_attribute(request.sandbox)
        );

        let response = self
            .client
            .get(request.url.as_str())
            .send()
            .await
            .map_err(|e| CoreError::NetworkError(format!("HTTP request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(CoreError::NetworkError(format!("HTTP status {status}")));
        }
        if let Some(reason) = framing_refusal(response.headers()) {
            return Err(CoreError::NetworkError(format!("framing refused: {reason}")));
        }

        let final_url = response.url().to_string();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();
        let body = self.read_body(response).await?;
        let text = String::from_utf8_lossy(&body);

        let (title, lines) = if content_type.is_empty() || content_type.contains("html") {
            (extract_title(&text), html_to_lines(&text))
        } else if content_type.starts_with("text/") {
            (None, text_to_lines(&text))
        } else {
            (None, Vec::new())
        };

        debug!(
            "[Frame] Load #{} done: status={}, lines={}, final={final_url}",
            request.seq,
            status.as_u16(),
            lines.len()
        );

        Ok(FramePage {
            final_url,
            status: status.as_u16(),
            title,
            lines,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{navigation_to, serve_once};

    fn loader() -> HttpPageLoader {
        HttpPageLoader::new(FrameConfig::default()).unwrap()
    }

    #[test]
    fn default_config() {
        let config = FrameConfig::default();
        assert_eq!(config.timeout, Duration::from_secs(10));
        assert_eq!(config.max_redirects, 5);
        assert!(config.user_agent.starts_with("url-viewer/"));
    }

    #[tokio::test]
    async fn html_page_is_reduced_to_text() {
        let addr = serve_once(
            "HTTP/1.1 200 OK\r\nContent-Type: text/html; charset=utf-8\r\n",
            "<html><head><title>Hello</title></head><body><p>Merhaba d&#252;nya</p><p>second</p></body></html>",
        )
        .await;

        let page = loader().load(&navigation_to(&addr)).await.unwrap();
        assert_eq!(page.status, 200);
        assert_eq!(page.title.as_deref(), Some("Hello"));
        assert_eq!(page.lines, vec!["Merhaba dünya", "second"]);
        assert!(page.final_url.starts_with("http://127.0.0.1:"));
    }

    #[tokio::test]
    async fn plain_text_page() {
        let addr = serve_once(
            "HTTP/1.1 200 OK\r\nContent-Type: text/plain\r\n",
            "line one\n\nline two\n",
        )
        .await;

        let page = loader().load(&navigation_to(&addr)).await.unwrap();
        assert_eq!(page.title, None);
        assert_eq!(page.lines, vec!["line one", "line two"]);
    }

    #[tokio::test]
    async fn non_success_status_fails() {
        let addr = serve_once(
            "HTTP/1.1 404 Not Found\r\nContent-Type: text/html\r\n",
            "<p>missing</p>",
        )
        .await;

        let err = loader().load(&navigation_to(&addr)).await.unwrap_err();
        assert!(matches!(err, CoreError::NetworkError(_)));
    }

    #[tokio::test]
    async fn frame_refusal_fails() {
        let addr = serve_once(
            "HTTP/1.1 200 OK\r\nContent-Type: text/html\r\nX-Frame-Options: DENY\r\n",
            "<p>secret</p>",
        )
        .await;

        let err = loader().load(&navigation_to(&addr)).await.unwrap_err();
        assert!(err.to_string().contains("framing refused"));
    }

    #[tokio::test]
    async fn body_is_capped() {
        let addr = serve_once(
            "HTTP/1.1 200 OK\r\nContent-Type: text/plain\r\n",
            "abcdefghij",
        )
        .await;

        let loader = HttpPageLoader::new(FrameConfig {
            max_body_bytes: 4,
            ..FrameConfig::default()
        })
        .unwrap();
        let page = loader.load(&navigation_to(&addr)).await.unwrap();
        assert_eq!(page.lines, vec!["abcd"]);
    }

    #[tokio::test]
    async fn connection_refused_fails() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let err = loader()
            .load(&navigation_to(&format!("http://{addr}")))
            .await
            .unwrap_err();
        assert!(err.is_expected());
    }
}
