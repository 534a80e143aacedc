//! 滚动状态

use crate::message::ScrollMessage;

/// PageUp / PageDown 的步长（行）
pub const PAGE_STEP: usize = 10;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScrollState {
    pub offset: usize,
}

impl ScrollState {
    /// 应用滚动消息，偏移量限制在 `0..=max`
    pub fn apply(&mut self, msg: ScrollMessage, max: usize) {
        self.offset = match msg {
            ScrollMessage::Up => self.offset.saturating_sub(1),
            ScrollMessage::Down => self.offset.saturating_add(1),
            ScrollMessage::PageUp => self.offset.saturating_sub(PAGE_STEP),
            ScrollMessage::PageDown => self.offset.saturating_add(PAGE_STEP),
            ScrollMessage::Top => 0,
            ScrollMessage::Bottom => max,
        }
        .min(max);
    }

    pub fn reset(&mut self) {
        self.offset = 0;
    }
}
