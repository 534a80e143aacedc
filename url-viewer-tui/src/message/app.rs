//! 应用主消息枚举

use url_viewer_core::types::{FrameSignal, Route};

use super::{InputMessage, ScrollMessage};

/// 应用主消息
#[derive(Debug, Clone)]
pub enum AppMessage {
    /// 退出应用
    Quit,

    /// 切换到指定路由（重新挂载目标界面）
    Navigate(Route),

    /// 切换界面语言
    ToggleLanguage,

    /// 提交输入框中的地址
    Submit,

    /// 重新加载当前地址
    Refresh,

    /// 地址输入框编辑
    Input(InputMessage),

    /// 内容滚动
    Scroll(ScrollMessage),

    /// 预览框架的加载信号
    Frame(FrameSignal),

    /// 终端大小改变（宽, 高）
    Resize(u16, u16),

    /// 无操作（用于忽略未处理的事件）
    Noop,
}
