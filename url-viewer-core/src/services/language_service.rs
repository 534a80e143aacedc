//! Language preference service

use std::sync::Arc;

use log::{error, info, warn};

use crate::error::CoreResult;
use crate::traits::PreferenceStore;
use crate::types::Language;

/// Storage key of the language preference
pub const LANGUAGE_STORAGE_KEY: &str = "url-viewer-language";

/// Reads and writes the persisted UI language.
///
/// There is no cross-surface notification: each surface calls `load` once
/// when it is created and `save` when the user picks a language.
#[derive(Clone)]
pub struct LanguageService {
    store: Arc<dyn PreferenceStore>,
}

impl LanguageService {
    #[must_use]
    pub fn new(store: Arc<dyn PreferenceStore>) -> Self {
        Self { store }
    }

    /// Persisted language, or Turkish when absent, unrecognised or unreadable
    pub fn load(&self) -> Language {
        match self.store.get(LANGUAGE_STORAGE_KEY) {
            Ok(Some(code)) => Language::from_code(&code).unwrap_or_else(|| {
                warn!("Ignoring unrecognised language preference {code:?}");
                Language::default()
            }),
            Ok(None) => Language::default(),
            Err(e) => {
                if e.is_expected() {
                    warn!("Failed to read language preference: {e}");
                } else {
                    error!("Failed to read language preference: {e}");
                }
                Language::default()
            }
        }
    }

    /// Persist a language, overwriting the previous value
    pub fn save(&self, language: Language) -> CoreResult<()> {
        self.store.set(LANGUAGE_STORAGE_KEY, language.code())?;
        info!("Language preference set to {}", language.code());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{FailingPreferenceStore, store_with_language};
    use crate::traits::InMemoryPreferenceStore;

    #[test]
    fn absent_preference_defaults_to_turkish() {
        let service = LanguageService::new(Arc::new(InMemoryPreferenceStore::new()));
        assert_eq!(service.load(), Language::Turkish);
    }

    #[test]
    fn stored_english_is_loaded() {
        let service = LanguageService::new(store_with_language("en"));
        assert_eq!(service.load(), Language::English);
    }

    #[test]
    fn unrecognised_value_defaults_to_turkish() {
        for code in ["xx", "EN", "", "english"] {
            let service = LanguageService::new(store_with_language(code));
            assert_eq!(service.load(), Language::Turkish, "{code:?}");
        }
    }

    #[test]
    fn save_overwrites_code() {
        let store = Arc::new(InMemoryPreferenceStore::new());
        let service = LanguageService::new(store.clone());

        service.save(Language::English).unwrap();
        assert_eq!(store.get(LANGUAGE_STORAGE_KEY).unwrap().as_deref(), Some("en"));

        service.save(Language::Turkish).unwrap();
        assert_eq!(store.get(LANGUAGE_STORAGE_KEY).unwrap().as_deref(), Some("tr"));
    }

    #[test]
    fn unreadable_store_defaults_and_write_fails() {
        let service = LanguageService::new(Arc::new(FailingPreferenceStore));
        assert_eq!(service.load(), Language::Turkish);
        assert!(service.save(Language::English).is_err());
    }

    #[test]
    fn surfaces_only_see_value_at_their_own_load() {
        let store = Arc::new(InMemoryPreferenceStore::new());
        let viewer = LanguageService::new(store.clone());
        let policy = LanguageService::new(store);

        let viewer_lang = viewer.load();
        policy.save(Language::English).unwrap();

        // 已初始化的界面不会被通知
        assert_eq!(viewer_lang, Language::Turkish);
        assert_eq!(viewer.load(), Language::English);
    }
}
