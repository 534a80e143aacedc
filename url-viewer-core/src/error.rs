//! Unified error type definition

use serde::Serialize;
use thiserror::Error;

/// Errors the viewer surface shows to the user.
///
/// None of these are fatal: each one is rendered through its translation
/// message key and cleared by the next successful load.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewError {
    /// Submission with blank or whitespace-only text
    #[error("empty input")]
    EmptyInput,

    /// Submission that fails normalization or validation
    #[error("invalid URL")]
    InvalidUrl,

    /// The embedded frame signalled a load failure
    ///
    /// Usually the target refuses to be framed, but the signal is generic and
    /// also covers transport failures.
    #[error("page could not be embedded")]
    EmbedRejected,
}

impl ViewError {
    /// Translation key of the message shown for this error.
    #[must_use]
    pub fn message_key(self) -> &'static str {
        match self {
            Self::EmptyInput => "errorEmpty",
            Self::InvalidUrl => "errorInvalid",
            Self::EmbedRejected => "errorIframe",
        }
    }
}

/// Core layer error type
#[derive(Error, Debug, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum CoreError {
    /// Storage layer error
    #[error("Storage error: {0}")]
    StorageError(String),

    /// serialization error
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// network error
    #[error("Network error: {0}")]
    NetworkError(String),
}

impl CoreError {
    /// Whether it is expected behavior (refused or unreachable pages), used for log classification.
    ///
    /// Level `warn` should be used when returning `true` and level `error` when returning `false`.
    /// **Please update this method simultaneously when new variants are added. **
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::NetworkError(_) => true,
            Self::StorageError(_) | Self::SerializationError(_) => false,
        }
    }
}

/// Core layer Result type alias
pub type CoreResult<T> = std::result::Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_keys_match_translation_table() {
        assert_eq!(ViewError::EmptyInput.message_key(), "errorEmpty");
        assert_eq!(ViewError::InvalidUrl.message_key(), "errorInvalid");
        assert_eq!(ViewError::EmbedRejected.message_key(), "errorIframe");
    }

    #[test]
    fn network_errors_are_expected() {
        assert!(CoreError::NetworkError("connection refused".to_string()).is_expected());
        assert!(!CoreError::SerializationError("bad json".to_string()).is_expected());
        assert!(!CoreError::StorageError("disk full".to_string()).is_expected());
    }
}
