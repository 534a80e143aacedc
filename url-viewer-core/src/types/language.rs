//! UI language definitions

/// Supported UI languages
///
/// Turkish is the first language and the default whenever no usable
/// preference is stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    /// Turkish (`tr`)
    #[default]
    Turkish,
    /// English (`en`)
    English,
}

impl Language {
    /// All supported languages, in selector order
    pub fn all() -> &'static [Language] {
        &[Language::Turkish, Language::English]
    }

    /// Two-letter code, also the persisted value
    pub fn code(self) -> &'static str {
        match self {
            Language::Turkish => "tr",
            Language::English => "en",
        }
    }

    /// Parses a persisted code. Only the exact two codes are recognised.
    pub fn from_code(code: &str) -> Option<Language> {
        match code {
            "tr" => Some(Language::Turkish),
            "en" => Some(Language::English),
            _ => None,
        }
    }

    /// Translation key of this language's name in the selector
    pub fn label_key(self) -> &'static str {
        match self {
            Language::Turkish => "turkish",
            Language::English => "english",
        }
    }

    /// The other language (used for toggling)
    #[must_use]
    pub fn next(self) -> Language {
        match self {
            Language::Turkish => Language::English,
            Language::English => Language::Turkish,
        }
    }
}
