//! 地址输入框消息

/// 输入框编辑操作
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMessage {
    /// 在光标处插入字符
    Insert(char),
    /// 删除光标前的字符
    Backspace,
    /// 删除光标处的字符
    Delete,
    /// 光标左移
    Left,
    /// 光标右移
    Right,
    /// 光标移到行首
    Home,
    /// 光标移到行尾
    End,
    /// 清空输入
    Clear,
}
