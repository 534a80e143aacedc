//! Translation lookup
//!
//! Static, compiled-in tables mapping string keys to Turkish and English
//! text. Unknown keys are echoed back unchanged, in every language.

mod policy;
mod viewer;

pub use policy::POLICY;
pub use viewer::VIEWER;

use crate::types::Language;

/// One translated string
#[derive(Debug, Clone, Copy)]
pub struct Entry {
    pub key: &'static str,
    pub tr: &'static str,
    pub en: &'static str,
}

impl Entry {
    pub const fn new(key: &'static str, tr: &'static str, en: &'static str) -> Self {
        Self { key, tr, en }
    }

    pub fn text(&self, language: Language) -> &'static str {
        match language {
            Language::Turkish => self.tr,
            Language::English => self.en,
        }
    }
}

/// A read-only translation table
#[derive(Debug, Clone, Copy)]
pub struct TranslationTable {
    entries: &'static [Entry],
}

impl TranslationTable {
    pub const fn new(entries: &'static [Entry]) -> Self {
        Self { entries }
    }

    /// Text of `key` in `language`, or `key` itself if the table lacks it
    pub fn lookup<'a>(&self, key: &'a str, language: Language) -> &'a str {
        self.entries
            .iter()
            .find(|entry| entry.key == key)
            .map_or(key, |entry| entry.text(language))
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.iter().any(|entry| entry.key == key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &'static str> {
        self.entries.iter().map(|entry| entry.key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn lookup_by_language() {
        assert_eq!(VIEWER.lookup("view", Language::Turkish), "Görüntüle");
        assert_eq!(VIEWER.lookup("view", Language::English), "View");
        assert_eq!(POLICY.lookup("title", Language::English), "Privacy Policy");
    }

    #[test]
    fn unknown_key_is_echoed() {
        for lang in Language::all() {
            assert_eq!(VIEWER.lookup("noSuchKey", *lang), "noSuchKey");
            assert_eq!(POLICY.lookup("", *lang), "");
            assert_eq!(POLICY.lookup("view", *lang), "view");
        }
    }

    #[test]
    fn keys_are_unique() {
        for table in [VIEWER, POLICY] {
            let mut seen = HashSet::new();
            for key in table.keys() {
                assert!(seen.insert(key), "duplicate key {key}");
            }
        }
    }

    #[test]
    fn error_message_keys_exist() {
        use crate::error::ViewError;
        for err in [ViewError::EmptyInput, ViewError::InvalidUrl, ViewError::EmbedRejected] {
            assert!(VIEWER.contains(err.message_key()));
        }
    }

    #[test]
    fn language_labels_exist_in_both_tables() {
        for lang in Language::all() {
            assert!(VIEWER.contains(lang.label_key()));
            assert!(POLICY.contains(lang.label_key()));
        }
    }
}
