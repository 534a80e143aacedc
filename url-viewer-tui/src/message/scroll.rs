//! 滚动消息

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollMessage {
    Up,
    Down,
    PageUp,
    PageDown,
    Top,
    Bottom,
}
