//! 文件位置

use std::path::PathBuf;

const APP_DIR: &str = "url-viewer";

/// 获取配置目录路径
pub fn config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR)
}

/// 偏好文件路径
pub fn preferences_file() -> PathBuf {
    config_dir().join("preferences.json")
}

/// 日志文件路径
pub fn log_file() -> PathBuf {
    config_dir().join("url-viewer.log")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn files_live_in_app_dir() {
        assert!(preferences_file().starts_with(config_dir()));
        assert!(log_file().starts_with(config_dir()));
        assert!(config_dir().ends_with(APP_DIR));
    }
}
