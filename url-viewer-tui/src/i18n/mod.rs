//! 终端界面专用文本
//!
//! 界面本身的文本（标题、提示、错误消息）来自 url-viewer-core 的
//! `VIEWER` / `POLICY` 翻译表；这里只放终端特有的按键提示和状态消息。

use url_viewer_core::i18n::{Entry, TranslationTable};

pub use url_viewer_core::i18n::{POLICY, VIEWER};

/// 按键提示与状态栏文本
pub const HINTS: TranslationTable = TranslationTable::new(&[
    Entry::new("submit", "Görüntüle", "View"),
    Entry::new("refresh", "Yenile", "Refresh"),
    Entry::new("language", "Dil", "Language"),
    Entry::new("privacy", "Gizlilik", "Privacy"),
    Entry::new("back", "Geri", "Back"),
    Entry::new("scroll", "Kaydır", "Scroll"),
    Entry::new("quit", "Çıkış", "Quit"),
    Entry::new(
        "languageSaveFailed",
        "Dil tercihi kaydedilemedi",
        "Could not save language preference",
    ),
    Entry::new(
        "emptyPage",
        "Bu sayfada gösterilecek metin yok",
        "This page has no text to show",
    ),
]);

#[cfg(test)]
mod tests {
    use url_viewer_core::types::Language;

    use super::*;

    #[test]
    fn hints_are_translated() {
        assert_eq!(HINTS.lookup("quit", Language::Turkish), "Çıkış");
        assert_eq!(HINTS.lookup("quit", Language::English), "Quit");
    }

    #[test]
    fn hint_texts_are_not_empty() {
        for key in HINTS.keys() {
            for lang in Language::all() {
                assert!(!HINTS.lookup(key, *lang).is_empty(), "{key}");
            }
        }
    }
}
