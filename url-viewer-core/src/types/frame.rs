//! Embedded frame results

/// What the frame shows after a successful load
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FramePage {
    /// Address after redirects
    pub final_url: String,
    /// HTTP status code
    pub status: u16,
    /// Contents of `<title>`, if present
    pub title: Option<String>,
    /// Page text, one entry per rendered line
    pub lines: Vec<String>,
}

/// Terminal result of one frame navigation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    Loaded(FramePage),
    /// Generic failure; the reason is diagnostic only
    Failed(String),
}

/// A tagged frame signal, delivered back to the surface that issued the load
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameSignal {
    pub seq: u64,
    pub outcome: LoadOutcome,
}
