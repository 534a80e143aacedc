//! 快捷键配置

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// 快捷键绑定
#[derive(Debug, Clone)]
pub struct KeyBinding {
    pub modifiers: KeyModifiers,
    pub code: KeyCode,
}

impl KeyBinding {
    pub const fn new(modifiers: KeyModifiers, code: KeyCode) -> Self {
        Self { modifiers, code }
    }

    pub const fn key(code: KeyCode) -> Self {
        Self::new(KeyModifiers::NONE, code)
    }

    pub const fn alt(code: KeyCode) -> Self {
        Self::new(KeyModifiers::ALT, code)
    }

    pub const fn ctrl(code: KeyCode) -> Self {
        Self::new(KeyModifiers::CONTROL, code)
    }

    /// 检查按键事件是否匹配此快捷键绑定
    pub fn matches(&self, key: &KeyEvent) -> bool {
        key.modifiers == self.modifiers && key.code == self.code
    }
}

/// 默认快捷键配置
pub struct DefaultKeymap;

impl DefaultKeymap {
    // 全局
    pub const QUIT: KeyBinding = KeyBinding::alt(KeyCode::Char('q'));
    pub const FORCE_QUIT: KeyBinding = KeyBinding::ctrl(KeyCode::Char('c'));
    pub const REFRESH: &'static [KeyBinding] = &[
        KeyBinding::key(KeyCode::F(5)),
        KeyBinding::alt(KeyCode::Char('r')),
    ];
    pub const TOGGLE_LANGUAGE: &'static [KeyBinding] = &[
        KeyBinding::key(KeyCode::F(2)),
        KeyBinding::alt(KeyCode::Char('l')),
    ];

    // 路由
    pub const OPEN_PRIVACY: KeyBinding = KeyBinding::alt(KeyCode::Char('p'));
    pub const BACK_HOME: &'static [KeyBinding] = &[
        KeyBinding::key(KeyCode::Esc),
        KeyBinding::alt(KeyCode::Char('b')),
    ];

    // 输入框
    pub const SUBMIT: KeyBinding = KeyBinding::key(KeyCode::Enter);
    pub const CLEAR_INPUT: KeyBinding = KeyBinding::ctrl(KeyCode::Char('u'));
}

/// 是否匹配任一绑定
pub fn matches_any(bindings: &[KeyBinding], key: &KeyEvent) -> bool {
    bindings.iter().any(|binding| binding.matches(key))
}
