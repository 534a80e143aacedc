//! Normalized target address

use std::fmt;

use url::Url;

/// A normalized, validated preview address.
///
/// Keeps the formatted string exactly as the frame is pointed at
/// (`https://example.com`, no trailing slash added) next to its parsed form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetUrl {
    formatted: String,
    parsed: Url,
}

impl TargetUrl {
    pub(crate) fn new(formatted: String, parsed: Url) -> Self {
        Self { formatted, parsed }
    }

    /// The frame address
    pub fn as_str(&self) -> &str {
        &self.formatted
    }

    /// Parsed form (always `http` or `https`)
    pub fn url(&self) -> &Url {
        &self.parsed
    }

    /// Host name, if any
    pub fn host(&self) -> Option<&str> {
        self.parsed.host_str()
    }
}

impl fmt::Display for TargetUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.formatted)
    }
}

impl AsRef<str> for TargetUrl {
    fn as_ref(&self) -> &str {
        &self.formatted
    }
}
