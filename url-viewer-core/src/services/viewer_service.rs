//! Viewer load state machine
//!
//! `Idle → Loading → {Loaded, Errored}`. Every load the viewer asks the frame
//! to perform is tagged with a fresh sequence number; frame signals carrying
//! any other number belong to a superseded load and are ignored.

use log::debug;

use super::url_service;
use crate::error::ViewError;
use crate::types::{NavigationRequest, TargetUrl, ViewPhase};

/// State of one viewer surface
#[derive(Debug, Default)]
pub struct ViewerService {
    phase: ViewPhase,
    current_url: Option<TargetUrl>,
    error: Option<ViewError>,
    /// Sequence number of the load awaiting a signal
    pending: Option<u64>,
    /// Last issued sequence number
    last_seq: u64,
}

impl ViewerService {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> ViewPhase {
        self.phase
    }

    pub fn is_loading(&self) -> bool {
        self.phase.is_loading()
    }

    /// Last successfully normalized address (the frame's address)
    pub fn current_url(&self) -> Option<&TargetUrl> {
        self.current_url.as_ref()
    }

    /// Error currently shown, if any
    pub fn error(&self) -> Option<ViewError> {
        self.error
    }

    /// Sequence number of the load in flight
    pub fn pending_seq(&self) -> Option<u64> {
        self.pending
    }

    /// Submit raw input.
    ///
    /// On success the viewer enters `Loading` against the normalized address
    /// and returns the request the frame must perform. On failure only the
    /// error changes; phase and current URL stay as they were.
    pub fn submit(&mut self, raw: &str) -> Result<NavigationRequest, ViewError> {
        match url_service::normalize(raw) {
            Ok(url) => {
                self.error = None;
                self.current_url = Some(url.clone());
                Ok(self.begin_load(url))
            }
            Err(err) => {
                debug!("[Viewer] Submission rejected: {err}");
                self.error = Some(err);
                Err(err)
            }
        }
    }

    /// Reload the current address.
    ///
    /// Returns `None` when no URL has been submitted yet. The error, if any,
    /// stays until the next successful load.
    pub fn refresh(&mut self) -> Option<NavigationRequest> {
        let url = self.current_url.clone()?;
        Some(self.begin_load(url))
    }

    /// The frame reports a successful load.
    ///
    /// Returns whether the signal was applied.
    pub fn on_frame_loaded(&mut self, seq: u64) -> bool {
        if !self.accept_signal(seq) {
            return false;
        }
        self.phase = ViewPhase::Loaded;
        self.error = None;
        true
    }

    /// The frame reports a load failure.
    ///
    /// Returns whether the signal was applied.
    pub fn on_frame_failed(&mut self, seq: u64) -> bool {
        if !self.accept_signal(seq) {
            return false;
        }
        self.phase = ViewPhase::Errored;
        self.error = Some(ViewError::EmbedRejected);
        true
    }

    fn begin_load(&mut self, url: TargetUrl) -> NavigationRequest {
        self.last_seq += 1;
        if let Some(superseded) = self.pending.replace(self.last_seq) {
            debug!("[Viewer] Load #{superseded} superseded by #{}", self.last_seq);
        }
        self.phase = ViewPhase::Loading;
        debug!("[Viewer] Load #{} -> {url}", self.last_seq);
        NavigationRequest::new(self.last_seq, url)
    }

    fn accept_signal(&mut self, seq: u64) -> bool {
        if self.pending == Some(seq) {
            self.pending = None;
            true
        } else {
            debug!("[Viewer] Ignoring stale frame signal #{seq} (pending: {:?})", self.pending);
            false
        }
    }
}
