//! 偏好仓库
//!
//! 使用 JSON 文件存储偏好（扁平的字符串键值对）
//! 实现 url-viewer-core 的 PreferenceStore trait

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use log::warn;
use url_viewer_core::traits::PreferenceStore;
use url_viewer_core::{CoreError, CoreResult};

use crate::util::paths;

type Preferences = BTreeMap<String, String>;

/// 基于 JSON 文件的偏好仓库
pub struct JsonPreferenceStore {
    path: PathBuf,
    /// 内存缓存，首次读取时从文件加载
    cache: Mutex<Option<Preferences>>,
}

impl JsonPreferenceStore {
    /// 使用默认位置 `<config_dir>/url-viewer/preferences.json`
    pub fn new() -> Self {
        Self::with_path(paths::preferences_file())
    }

    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            cache: Mutex::new(None),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// 从文件加载偏好，文件不存在时为空
    fn load_from_file(&self) -> CoreResult<Preferences> {
        if !self.path.exists() {
            return Ok(Preferences::new());
        }

        let content =
            fs::read_to_string(&self.path).map_err(|e| CoreError::StorageError(e.to_string()))?;
        if content.trim().is_empty() {
            return Ok(Preferences::new());
        }

        serde_json::from_str(&content).map_err(|e| CoreError::SerializationError(e.to_string()))
    }

    /// 保存偏好到文件
    fn save_to_file(&self, prefs: &Preferences) -> CoreResult<()> {
        if let Some(dir) = self.path.parent() {
            if !dir.as_os_str().is_empty() && !dir.exists() {
                fs::create_dir_all(dir).map_err(|e| CoreError::StorageError(e.to_string()))?;
            }
        }

        let content = serde_json::to_string_pretty(prefs)
            .map_err(|e| CoreError::SerializationError(e.to_string()))?;
        fs::write(&self.path, content).map_err(|e| CoreError::StorageError(e.to_string()))
    }

    fn lock(&self) -> CoreResult<std::sync::MutexGuard<'_, Option<Preferences>>> {
        self.cache
            .lock()
            .map_err(|e| CoreError::StorageError(format!("preference cache poisoned: {e}")))
    }
}

impl Default for JsonPreferenceStore {
    fn default() -> Self {
        Self::new()
    }
}

impl PreferenceStore for JsonPreferenceStore {
    fn get(&self, key: &str) -> CoreResult<Option<String>> {
        let mut cache = self.lock()?;
        if cache.is_none() {
            *cache = Some(self.load_from_file()?);
        }
        Ok(cache.as_ref().and_then(|prefs| prefs.get(key).cloned()))
    }

    fn set(&self, key: &str, value: &str) -> CoreResult<()> {
        let mut cache = self.lock()?;
        let mut prefs = match cache.take() {
            Some(prefs) => prefs,
            None => self.load_from_file().unwrap_or_else(|e| {
                // 损坏的文件直接覆盖
                warn!("Overwriting unreadable preferences file {}: {e}", self.path.display());
                Preferences::new()
            }),
        };

        prefs.insert(key.to_string(), value.to_string());
        let result = self.save_to_file(&prefs);
        *cache = Some(prefs);
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_in(dir: &tempfile::TempDir) -> JsonPreferenceStore {
        JsonPreferenceStore::with_path(dir.path().join("url-viewer").join("preferences.json"))
    }

    #[test]
    fn missing_file_reads_as_empty() {
        let tmp = tempfile::tempdir().unwrap();
        let store = store_in(&tmp);
        assert_eq!(store.get("url-viewer-language").unwrap(), None);
    }

    #[test]
    fn set_creates_directory_and_persists() {
        let tmp = tempfile::tempdir().unwrap();
        store_in(&tmp).set("url-viewer-language", "en").unwrap();

        // 新实例从文件读取
        let reopened = store_in(&tmp);
        assert_eq!(
            reopened.get("url-viewer-language").unwrap().as_deref(),
            Some("en")
        );
    }

    #[test]
    fn set_overwrites_and_keeps_other_keys() {
        let tmp = tempfile::tempdir().unwrap();
        let store = store_in(&tmp);
        store.set("other", "kept").unwrap();
        store.set("url-viewer-language", "en").unwrap();
        store.set("url-viewer-language", "tr").unwrap();

        let content = fs::read_to_string(store.path()).unwrap();
        let prefs: Preferences = serde_json::from_str(&content).unwrap();
        assert_eq!(prefs.get("url-viewer-language").map(String::as_str), Some("tr"));
        assert_eq!(prefs.get("other").map(String::as_str), Some("kept"));
    }

    #[test]
    fn corrupt_file_fails_read_but_write_recovers() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("preferences.json");
        fs::write(&path, "{not json").unwrap();

        let store = JsonPreferenceStore::with_path(&path);
        assert!(matches!(
            store.get("url-viewer-language"),
            Err(CoreError::SerializationError(_))
        ));

        store.set("url-viewer-language", "en").unwrap();
        assert_eq!(
            store.get("url-viewer-language").unwrap().as_deref(),
            Some("en")
        );
    }

    #[test]
    fn write_failure_is_storage_error() {
        let tmp = tempfile::tempdir().unwrap();
        // 目标路径是目录，写入必然失败
        let store = JsonPreferenceStore::with_path(tmp.path());
        assert!(matches!(
            store.set("url-viewer-language", "en"),
            Err(CoreError::StorageError(_))
        ));
    }
}
