//! Addressable views

use super::Language;

/// The two addressable views of the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Route {
    /// Root path: the URL viewer
    #[default]
    Viewer,
    /// Privacy policy sub-path
    Privacy,
}

impl Route {
    /// Route path
    pub fn path(self) -> &'static str {
        match self {
            Route::Viewer => "/",
            Route::Privacy => "/privacy",
        }
    }

    /// Window title of the view in the given language
    pub fn document_title(self, language: Language) -> &'static str {
        match (self, language) {
            (Route::Viewer, Language::Turkish) => "URL Viewer - Link Önizleyici",
            (Route::Viewer, Language::English) => "URL Viewer - Link Preview Tool",
            (Route::Privacy, Language::Turkish) => "Gizlilik Politikası - URL Viewer",
            (Route::Privacy, Language::English) => "Privacy Policy - URL Viewer",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths() {
        assert_eq!(Route::Viewer.path(), "/");
        assert_eq!(Route::Privacy.path(), "/privacy");
        assert_eq!(Route::default(), Route::Viewer);
    }

    #[test]
    fn titles_follow_language() {
        assert_eq!(
            Route::Viewer.document_title(Language::English),
            "URL Viewer - Link Preview Tool"
        );
        assert_eq!(
            Route::Privacy.document_title(Language::Turkish),
            "Gizlilik Politikası - URL Viewer"
        );
    }
}
