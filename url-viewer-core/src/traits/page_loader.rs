//! Embedded frame page loader abstract Trait

use async_trait::async_trait;

use crate::error::CoreResult;
use crate::types::{FramePage, NavigationRequest};

/// Performs the frame's own navigation.
///
/// The viewer never fetches anything itself; it hands a `NavigationRequest`
/// to the frame, whose loader resolves it to a page or a generic failure.
///
/// Platform implementations:
/// - `HttpPageLoader` (reqwest, text rendering)
#[async_trait]
pub trait PageLoader: Send + Sync {
    /// Load the requested address
    ///
    /// # Returns
    /// * `Ok(page)` - the frame has something to show
    /// * `Err(_)` - any failure; the caller reports it as a single generic failure signal
    async fn load(&self, request: &NavigationRequest) -> CoreResult<FramePage>;
}
