//! Preference storage abstract Trait

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::error::{CoreError, CoreResult};

/// Local key-value storage Trait
///
/// Synchronous on purpose: it stands in for browser-local storage, which the
/// surfaces read once at initialization and write on change.
///
/// Platform implementations:
/// - TUI: `JsonPreferenceStore` (JSON file in the user config directory)
/// - Tests / embedding: `InMemoryPreferenceStore`
pub trait PreferenceStore: Send + Sync {
    /// Read a value
    ///
    /// # Returns
    /// * `Ok(Some(value))` - key present
    /// * `Ok(None)` - key absent
    fn get(&self, key: &str) -> CoreResult<Option<String>>;

    /// Write a value, overwriting any previous one
    fn set(&self, key: &str, value: &str) -> CoreResult<()>;
}

/// In-memory preference store
///
/// Clones share the same map.
#[derive(Clone, Default)]
pub struct InMemoryPreferenceStore {
    values: Arc<RwLock<HashMap<String, String>>>,
}

impl InMemoryPreferenceStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for InMemoryPreferenceStore {
    fn get(&self, key: &str) -> CoreResult<Option<String>> {
        let values = self
            .values
            .read()
            .map_err(|e| CoreError::StorageError(e.to_string()))?;
        Ok(values.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> CoreResult<()> {
        self.values
            .write()
            .map_err(|e| CoreError::StorageError(e.to_string()))?
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}
