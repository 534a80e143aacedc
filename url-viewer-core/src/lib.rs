//! URL Viewer Core Library
//!
//! Provides the platform-independent logic of the URL viewer:
//! - URL normalization and validation
//! - The viewer load state machine and its sequence-tagged frame signals
//! - Turkish/English translation tables and the persisted language preference
//! - Privacy policy content
//! - The HTTP page loader behind the preview frame
//!
//! Storage and page loading are abstracted through traits so front ends can
//! supply their own implementations.

pub mod error;
pub mod frame;
pub mod i18n;
pub mod policy;
pub mod services;
pub mod traits;
pub mod types;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

// Re-export common types
pub use error::{CoreError, CoreResult, ViewError};
pub use frame::{FrameConfig, HttpPageLoader};
pub use i18n::TranslationTable;
pub use services::{LanguageService, ViewerService};
pub use traits::{InMemoryPreferenceStore, PageLoader, PreferenceStore};
pub use types::{FramePage, FrameSignal, Language, LoadOutcome, NavigationRequest, Route, ViewPhase};
