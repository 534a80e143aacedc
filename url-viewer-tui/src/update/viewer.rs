//! 查看器界面的状态更新

use url_viewer_core::types::FrameSignal;

use crate::message::InputMessage;
use crate::model::{App, Surface};

/// 输入框编辑
pub fn input(app: &mut App, msg: InputMessage) {
    let Surface::Viewer(state) = &mut app.surface else {
        return;
    };
    let input = &mut state.input;
    match msg {
        InputMessage::Insert(ch) => input.insert(ch),
        InputMessage::Backspace => input.backspace(),
        InputMessage::Delete => input.delete(),
        InputMessage::Left => input.move_left(),
        InputMessage::Right => input.move_right(),
        InputMessage::Home => input.move_home(),
        InputMessage::End => input.move_end(),
        InputMessage::Clear => input.clear(),
    }
}

/// 提交地址（加载中也允许，新的加载取代旧的）
pub fn submit(app: &mut App) {
    if let Surface::Viewer(state) = &mut app.surface {
        state.submit();
    }
}

/// 重新加载
pub fn refresh(app: &mut App) {
    if let Surface::Viewer(state) = &mut app.surface {
        state.refresh();
    }
}

/// 预览框架信号
pub fn frame_signal(app: &mut App, signal: FrameSignal) {
    if let Surface::Viewer(state) = &mut app.surface {
        state.on_frame_signal(signal);
    }
}
