//! 事件处理器

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use url_viewer_core::types::Route;

use crate::event::keymap::{DefaultKeymap, matches_any};
use crate::message::{AppMessage, InputMessage, ScrollMessage};
use crate::model::{App, Surface};

/// 轮询事件
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// 处理事件，返回对应的消息
pub fn handle_event(event: Event, app: &App) -> AppMessage {
    match event {
        Event::Key(key_event) => handle_key_event(key_event, app),
        // 终端窗口大小改变：重绘并重新计算滚动范围
        Event::Resize(width, height) => AppMessage::Resize(width, height),
        _ => AppMessage::Noop,
    }
}

/// 处理键盘事件
fn handle_key_event(key: KeyEvent, app: &App) -> AppMessage {
    // 只处理 Press 事件，忽略 Release 和 Repeat
    if key.kind != KeyEventKind::Press {
        return AppMessage::Noop;
    }

    // 全局快捷键
    if DefaultKeymap::FORCE_QUIT.matches(&key) || DefaultKeymap::QUIT.matches(&key) {
        return AppMessage::Quit;
    }
    if matches_any(DefaultKeymap::TOGGLE_LANGUAGE, &key) {
        return AppMessage::ToggleLanguage;
    }
    if DefaultKeymap::OPEN_PRIVACY.matches(&key) {
        return AppMessage::Navigate(Route::Privacy);
    }
    if matches_any(DefaultKeymap::BACK_HOME, &key) {
        return AppMessage::Navigate(Route::Viewer);
    }
    if let Some(scroll) = scroll_message(&key) {
        return AppMessage::Scroll(scroll);
    }

    match &app.surface {
        Surface::Viewer(_) => handle_viewer_keys(key),
        Surface::Privacy(_) => AppMessage::Noop,
    }
}

/// 滚动按键（两个界面通用）
///
/// Home/End 留给输入框，跳到顶部/底部使用 Ctrl+Home/Ctrl+End
fn scroll_message(key: &KeyEvent) -> Option<ScrollMessage> {
    match (key.modifiers, key.code) {
        (KeyModifiers::NONE, KeyCode::Up) => Some(ScrollMessage::Up),
        (KeyModifiers::NONE, KeyCode::Down) => Some(ScrollMessage::Down),
        (KeyModifiers::NONE, KeyCode::PageUp) => Some(ScrollMessage::PageUp),
        (KeyModifiers::NONE, KeyCode::PageDown) => Some(ScrollMessage::PageDown),
        (KeyModifiers::CONTROL, KeyCode::Home) => Some(ScrollMessage::Top),
        (KeyModifiers::CONTROL, KeyCode::End) => Some(ScrollMessage::Bottom),
        _ => None,
    }
}

/// 查看器界面的按键：刷新、提交与输入框编辑
fn handle_viewer_keys(key: KeyEvent) -> AppMessage {
    if matches_any(DefaultKeymap::REFRESH, &key) {
        return AppMessage::Refresh;
    }
    if DefaultKeymap::SUBMIT.matches(&key) {
        return AppMessage::Submit;
    }
    if DefaultKeymap::CLEAR_INPUT.matches(&key) {
        return AppMessage::Input(InputMessage::Clear);
    }

    let input = match key.code {
        KeyCode::Backspace => InputMessage::Backspace,
        KeyCode::Delete => InputMessage::Delete,
        KeyCode::Left => InputMessage::Left,
        KeyCode::Right => InputMessage::Right,
        KeyCode::Home => InputMessage::Home,
        KeyCode::End => InputMessage::End,
        // 字符输入（允许 Shift，拒绝 Ctrl/Alt 组合）
        KeyCode::Char(ch)
            if !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            InputMessage::Insert(ch)
        }
        _ => return AppMessage::Noop,
    };
    AppMessage::Input(input)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use url_viewer_core::traits::InMemoryPreferenceStore;

    use super::*;
    use crate::backend::test_utils::test_context;

    fn app_on(route: Route) -> App {
        let mut app = App::new(test_context(Arc::new(InMemoryPreferenceStore::new())));
        app.navigate(route);
        app
    }

    fn press(code: KeyCode, modifiers: KeyModifiers) -> Event {
        Event::Key(KeyEvent::new(code, modifiers))
    }

    #[tokio::test]
    async fn global_keys() {
        let app = app_on(Route::Viewer);
        assert!(matches!(
            handle_event(press(KeyCode::Char('c'), KeyModifiers::CONTROL), &app),
            AppMessage::Quit
        ));
        assert!(matches!(
            handle_event(press(KeyCode::Char('q'), KeyModifiers::ALT), &app),
            AppMessage::Quit
        ));
        assert!(matches!(
            handle_event(press(KeyCode::F(2), KeyModifiers::NONE), &app),
            AppMessage::ToggleLanguage
        ));
        assert!(matches!(
            handle_event(press(KeyCode::Char('p'), KeyModifiers::ALT), &app),
            AppMessage::Navigate(Route::Privacy)
        ));
        assert!(matches!(
            handle_event(press(KeyCode::PageDown, KeyModifiers::NONE), &app),
            AppMessage::Scroll(ScrollMessage::PageDown)
        ));
    }

    #[tokio::test]
    async fn viewer_keys_edit_and_submit() {
        let app = app_on(Route::Viewer);
        assert!(matches!(
            handle_event(press(KeyCode::Char('q'), KeyModifiers::NONE), &app),
            AppMessage::Input(InputMessage::Insert('q'))
        ));
        assert!(matches!(
            handle_event(press(KeyCode::Char('A'), KeyModifiers::SHIFT), &app),
            AppMessage::Input(InputMessage::Insert('A'))
        ));
        assert!(matches!(
            handle_event(press(KeyCode::Enter, KeyModifiers::NONE), &app),
            AppMessage::Submit
        ));
        assert!(matches!(
            handle_event(press(KeyCode::F(5), KeyModifiers::NONE), &app),
            AppMessage::Refresh
        ));
        assert!(matches!(
            handle_event(press(KeyCode::Char('x'), KeyModifiers::ALT), &app),
            AppMessage::Noop
        ));
    }

    #[tokio::test]
    async fn privacy_keys() {
        let app = app_on(Route::Privacy);
        assert!(matches!(
            handle_event(press(KeyCode::Char('a'), KeyModifiers::NONE), &app),
            AppMessage::Noop
        ));
        assert!(matches!(
            handle_event(press(KeyCode::Esc, KeyModifiers::NONE), &app),
            AppMessage::Navigate(Route::Viewer)
        ));
        assert!(matches!(
            handle_event(press(KeyCode::Char('b'), KeyModifiers::ALT), &app),
            AppMessage::Navigate(Route::Viewer)
        ));
        assert!(matches!(
            handle_event(press(KeyCode::Enter, KeyModifiers::NONE), &app),
            AppMessage::Noop
        ));
        assert!(matches!(
            handle_event(press(KeyCode::End, KeyModifiers::CONTROL), &app),
            AppMessage::Scroll(ScrollMessage::Bottom)
        ));
    }

    #[tokio::test]
    async fn home_edits_input_and_ctrl_home_scrolls() {
        let app = app_on(Route::Viewer);
        assert!(matches!(
            handle_event(press(KeyCode::Home, KeyModifiers::NONE), &app),
            AppMessage::Input(InputMessage::Home)
        ));
        assert!(matches!(
            handle_event(press(KeyCode::Home, KeyModifiers::CONTROL), &app),
            AppMessage::Scroll(ScrollMessage::Top)
        ));
    }

    #[tokio::test]
    async fn resize_is_forwarded() {
        let app = app_on(Route::Viewer);
        assert!(matches!(
            handle_event(Event::Resize(100, 30), &app),
            AppMessage::Resize(100, 30)
        ));
    }

    #[tokio::test]
    async fn key_release_is_ignored() {
        let app = app_on(Route::Viewer);
        let mut key = KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE);
        key.kind = KeyEventKind::Release;
        assert!(matches!(handle_event(Event::Key(key), &app), AppMessage::Noop));
    }
}
