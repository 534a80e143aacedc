//! 日志初始化
//!
//! 终端由界面占用，日志写入 `<config_dir>/url-viewer/url-viewer.log`。
//! 级别由 `RUST_LOG` 控制，默认 `info`。

use std::fs::{self, OpenOptions};

use anyhow::{Context, Result};

use super::paths;

/// 初始化文件日志
pub fn init_logging() -> Result<()> {
    let path = paths::log_file();
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)
            .with_context(|| format!("creating log directory {}", dir.display()))?;
    }

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("opening log file {}", path.display()))?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .try_init()?;

    Ok(())
}
