//! Privacy policy surface texts

use super::{Entry, TranslationTable};

pub const POLICY: TranslationTable = TranslationTable::new(&[
    Entry::new("title", "Gizlilik Politikası", "Privacy Policy"),
    Entry::new(
        "lastUpdated",
        "Son Güncelleme: 12 Temmuz 2025",
        "Last Updated: July 12, 2025",
    ),
    Entry::new("backToHome", "Ana Sayfaya Dön", "Back to Home"),
    Entry::new(
        "introduction",
        "URL Viewer uygulamasını kullandığınız için teşekkür ederiz. Bu gizlilik politikası, uygulamımızı kullanırken kişisel bilgilerinizin nasıl toplandığı, kullanıldığı ve korunduğu hakkında bilgi vermektedir.",
        "Thank you for using the URL Viewer application. This privacy policy provides information about how your personal information is collected, used, and protected when using our application.",
    ),
    Entry::new("dataCollectionTitle", "1. Toplanan Veriler", "1. Data Collection"),
    Entry::new(
        "dataCollectionContent",
        "URL Viewer uygulaması minimal veri toplama prensibini benimser:\n\n• Dil Tercihi: Seçtiğiniz dil bilgisi yerel tercih dosyanızda saklanır\n• URL Geçmişi: Girdiğiniz URL'ler yalnızca geçici olarak bellekte tutulur ve sunucularımıza gönderilmez\n• Teknik Veriler: Uygulama performansı için temel kullanım istatistikleri\n• Kişisel kimlik bilgilerinizi (ad, e-posta, telefon vb.) toplamayız",
        "The URL Viewer application follows a minimal data collection principle:\n\n• Language Preference: Your selected language is stored in your local preferences file\n• URL History: URLs you enter are only temporarily stored in memory and are not sent to our servers\n• Technical Data: Basic usage statistics for application performance\n• We do not collect personal identification information (name, email, phone, etc.)",
    ),
    Entry::new("dataUsageTitle", "2. Verilerin Kullanımı", "2. Data Usage"),
    Entry::new(
        "dataUsageContent",
        "Toplanan veriler şu amaçlarla kullanılır:\n\n• Dil tercihlerinizi hatırlamak ve uygun dilde hizmet sunmak\n• Uygulama performansını iyileştirmek\n• Teknik sorunları tespit etmek ve çözmek\n• Kullanıcı deneyimini geliştirmek",
        "Collected data is used for:\n\n• Remembering your language preferences and providing service in the appropriate language\n• Improving application performance\n• Detecting and solving technical issues\n• Enhancing user experience",
    ),
    Entry::new("thirdPartyTitle", "3. Üçüncü Taraf Siteler", "3. Third Party Websites"),
    Entry::new(
        "thirdPartyContent",
        "URL Viewer, girdiğiniz web sitelerini gömülü bir çerçeve içinde görüntüler. Bu siteler:\n\n• Kendi gizlilik politikalarına tabidir\n• Bizim kontrolümüzde değildir\n• Kendi çerezlerini ve izleme sistemlerini kullanabilir\n• Bu sitelerin gizlilik uygulamalarından sorumlu değiliz",
        "URL Viewer displays websites you enter within an embedded frame. These websites:\n\n• Are subject to their own privacy policies\n• Are not under our control\n• May use their own cookies and tracking systems\n• We are not responsible for the privacy practices of these sites",
    ),
    Entry::new("dataSecurityTitle", "4. Veri Güvenliği", "4. Data Security"),
    Entry::new(
        "dataSecurityContent",
        "• Verilerinizi korumak için endüstri standardı güvenlik önlemleri alıyoruz\n• URL'ler sunucularımızda saklanmaz, yalnızca cihazınızda işlenir\n• HTTPS şifrelemesi kullanılarak güvenli bağlantı sağlanır\n• Hassas bilgilerinizi kaydetmeyiz veya üçüncü taraflarla paylaşmayız",
        "• We implement industry-standard security measures to protect your data\n• URLs are not stored on our servers, only processed on your device\n• Secure connection is provided using HTTPS encryption\n• We do not record or share your sensitive information with third parties",
    ),
    Entry::new("userRightsTitle", "5. Kullanıcı Hakları", "5. User Rights"),
    Entry::new(
        "userRightsContent",
        "• Dil tercihlerinizi istediğiniz zaman değiştirebilirsiniz\n• Tercih dosyasını silerek kayıtlı verileri temizleyebilirsiniz\n• Uygulamayı kullanmayı bırakarak veri işlemeyi sonlandırabilirsiniz\n• Sorularınız için bizimle iletişime geçebilirsiniz",
        "• You can change your language preferences at any time\n• You can clear stored data by deleting the preferences file\n• You can stop data processing by discontinuing use of the application\n• You can contact us with any questions",
    ),
    Entry::new("contactTitle", "6. İletişim", "6. Contact"),
    Entry::new(
        "contactContent",
        "Bu gizlilik politikası hakkında sorularınız varsa, lütfen bizimle iletişime geçin:\n\nE-posta: privacy@urlviewer.app\n\nBu politika gerektiğinde güncellenebilir. Değişiklikler bu sayfada yayınlanacaktır.",
        "If you have questions about this privacy policy, please contact us:\n\nEmail: privacy@urlviewer.app\n\nThis policy may be updated as necessary. Changes will be published on this page.",
    ),
    Entry::new("turkish", "Türkçe", "Turkish"),
    Entry::new("english", "İngilizce", "English"),
]);
