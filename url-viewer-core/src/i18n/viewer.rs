//! Viewer surface texts

use super::{Entry, TranslationTable};

pub const VIEWER: TranslationTable = TranslationTable::new(&[
    Entry::new("title", "URL Viewer", "URL Viewer"),
    Entry::new(
        "subtitle",
        "Web sitelerini anında önizleyin ve mobil uyumlu görüntüleyin",
        "Preview websites instantly and view them in mobile-friendly format",
    ),
    Entry::new("urlInput", "URL Girin", "Enter URL"),
    Entry::new(
        "placeholder",
        "Örn: google.com, github.com, youtube.com",
        "e.g: google.com, github.com, youtube.com",
    ),
    Entry::new("loading", "Yükleniyor...", "Loading..."),
    Entry::new("view", "Görüntüle", "View"),
    Entry::new("currentSite", "Görüntülenen Site", "Current Site"),
    Entry::new("loadingSite", "Site yükleniyor...", "Loading site..."),
    Entry::new("howToUseTitle", "🚀 Nasıl Kullanılır?", "🚀 How to Use?"),
    Entry::new(
        "step1",
        "Yukarıdaki alana görüntülemek istediğiniz web sitesinin URL'sini yazın",
        "Enter the URL of the website you want to preview in the field above",
    ),
    Entry::new(
        "step2",
        "\"Görüntüle\" butonuna tıklayın veya Enter tuşuna basın",
        "Click the \"View\" button or press Enter",
    ),
    Entry::new(
        "step3",
        "Web sitesi aşağıda mobil uyumlu şekilde görüntülenecek",
        "The website will be displayed below in mobile-friendly format",
    ),
    Entry::new(
        "footer",
        "Made with ❤️ using Rust + Ratatui",
        "Made with ❤️ using Rust + Ratatui",
    ),
    Entry::new("errorEmpty", "Lütfen bir URL girin", "Please enter a URL"),
    Entry::new(
        "errorInvalid",
        "Geçerli bir URL girin (örn: google.com veya https://google.com)",
        "Enter a valid URL (e.g: google.com or https://google.com)",
    ),
    Entry::new(
        "errorIframe",
        "Bu site iframe içinde gösterilemiyor. Güvenlik nedeniyle bazı siteler bu özelliği desteklemez.",
        "This site cannot be displayed in iframe. Some sites don't support this feature for security reasons.",
    ),
    Entry::new("language", "Dil", "Language"),
    Entry::new("turkish", "Türkçe", "Turkish"),
    Entry::new("english", "İngilizce", "English"),
    Entry::new("privacyPolicy", "Gizlilik Politikası", "Privacy Policy"),
]);
