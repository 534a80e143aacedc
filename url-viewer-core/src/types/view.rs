//! Viewer state types

use super::{PREVIEW_SANDBOX, SandboxPermission, TargetUrl};

/// Load phase of the viewer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewPhase {
    /// No URL loaded yet
    #[default]
    Idle,
    /// A load has been requested and no signal for it has arrived
    Loading,
    /// The frame reported a successful load
    Loaded,
    /// The frame reported a load failure
    Errored,
}

impl ViewPhase {
    pub fn is_loading(self) -> bool {
        matches!(self, ViewPhase::Loading)
    }
}

/// Instruction for the embedded frame to navigate.
///
/// `seq` tags the load; the frame echoes it back with its success or failure
/// signal so superseded loads can be told apart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationRequest {
    pub seq: u64,
    pub url: TargetUrl,
    pub sandbox: &'static [SandboxPermission],
}

impl NavigationRequest {
    pub(crate) fn new(seq: u64, url: TargetUrl) -> Self {
        Self {
            seq,
            url,
            sandbox: PREVIEW_SANDBOX,
        }
    }
}
