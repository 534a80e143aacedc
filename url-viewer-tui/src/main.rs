//! URL Viewer TUI
//!
//! ## 架构
//!
//! 采用 Elm Architecture (TEA) 模式：
//! - **Model**: 应用状态 (`model/`)
//! - **Message**: 事件消息 (`message/`)
//! - **Update**: 状态更新 (`update/`)
//! - **View**: UI 渲染 (`view/`)
//! - **Event**: 输入处理 (`event/`)
//! - **Backend**: 偏好存储与预览框架 (`backend/`)
//!
//!
//! main.rs
//! URL Viewer TUI 的程序入口
//!
//! 其执行：
//! fn `main()` {
//!
//!     init_logging()          // 文件日志，失败时仅提示
//!     Runtime::new()          // 页面加载在 tokio 运行时上执行
//!     AppContext::new()       // 偏好仓库 + 页面加载器
//!     init_terminal()         // 初始化终端
//!     model::App::new()       // 创建 APP 实例，挂载查看器界面
//!     app::run()              // 运行 app.rs 主循环
//!     restore_terminal()      // 无论成功与否，都恢复终端
//!
//! }

mod app;
mod backend;
mod event;
mod i18n;
mod message;
mod model;
mod update;
mod util;
mod view;

use std::sync::Arc;

use anyhow::Result;
use log::info;
use url_viewer_core::{FrameConfig, HttpPageLoader};

use backend::{AppContext, JsonPreferenceStore};
use util::{init_logging, init_terminal, restore_terminal};

fn main() -> Result<(), anyhow::Error> {
    // 1. 初始化日志
    if let Err(e) = init_logging() {
        eprintln!("Logging disabled: {e:#}");
    }

    // 2. 创建运行时与服务
    let runtime = tokio::runtime::Runtime::new()?;
    let store = JsonPreferenceStore::new();
    let loader = HttpPageLoader::new(FrameConfig::default())?;
    info!(
        "URL Viewer v{} starting, preferences at {}",
        env!("CARGO_PKG_VERSION"),
        store.path().display()
    );
    let ctx = AppContext::new(Arc::new(store), Arc::new(loader), runtime.handle().clone());

    // 3. 初始化终端
    let mut terminal = init_terminal()?;

    // 4. 创建应用实例
    let mut app = model::App::new(ctx);

    // 5. 运行主循环
    let result = app::run(&mut terminal, &mut app);

    // 6. 恢复终端（无论成功失败都执行）
    restore_terminal(&mut terminal)?;

    // 界面（及其预览框架）先于运行时释放
    drop(app);
    info!("URL Viewer exited");

    result
}
