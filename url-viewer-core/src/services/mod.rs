//! 业务逻辑服务层

mod language_service;
pub mod url_service;
mod viewer_service;

pub use language_service::{LANGUAGE_STORAGE_KEY, LanguageService};
pub use url_service::{format_url, is_valid_url, normalize};
pub use viewer_service::ViewerService;
