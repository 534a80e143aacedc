//! 主题和样式定义

use ratatui::style::{Color, Modifier, Style};

/// 获取颜色方案
pub fn colors() -> ThemeColors {
    ThemeColors::dark()
}

/// 主题颜色
#[derive(Debug, Clone)]
pub struct ThemeColors {
    pub fg: Color,
    pub border: Color,
    pub border_focused: Color,
    pub highlight: Color,
    pub selected_fg: Color,
    pub error: Color,
    pub muted: Color,
}

impl ThemeColors {
    /// 深色主题
    pub fn dark() -> Self {
        Self {
            fg: Color::Rgb(212, 212, 212),
            border: Color::Rgb(62, 62, 62),
            border_focused: Color::Rgb(0, 122, 204),
            highlight: Color::Rgb(0, 122, 204),
            selected_fg: Color::White,
            error: Color::Rgb(244, 135, 113),
            muted: Color::Rgb(128, 128, 128),
        }
    }
}

/// 常用样式
pub struct Styles;

impl Styles {
    /// 标题样式
    pub fn title() -> Style {
        Style::default()
            .fg(colors().highlight)
            .add_modifier(Modifier::BOLD)
    }

    /// 次要文本
    pub fn muted() -> Style {
        Style::default().fg(colors().muted)
    }

    /// 链接样式
    pub fn link() -> Style {
        Style::default()
            .fg(colors().highlight)
            .add_modifier(Modifier::UNDERLINED)
    }

    /// 按钮样式
    pub fn button(enabled: bool) -> Style {
        let c = colors();
        if enabled {
            Style::default()
                .bg(c.highlight)
                .fg(c.selected_fg)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().bg(c.border).fg(c.muted)
        }
    }

    /// 状态栏样式
    pub fn statusbar() -> Style {
        Style::default()
            .bg(Color::Rgb(0, 122, 204))
            .fg(Color::White)
    }

    /// 快捷键提示样式
    pub fn hint_key() -> Style {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    }

    /// 快捷键说明样式
    pub fn hint_desc() -> Style {
        Style::default().fg(Color::Rgb(220, 220, 220))
    }
}
