//! 底部状态栏组件

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
};
use url_viewer_core::types::Language;

use crate::i18n::HINTS;
use crate::model::{App, Surface};
use crate::view::theme::Styles;

/// 渲染状态栏
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let lang = app.surface.language();
    let hints = get_hints(&app.surface, lang);

    let mut spans = Vec::new();

    for (i, (key, desc)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(*key, Styles::hint_key()));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(*desc, Styles::hint_desc()));
    }

    // 状态消息显示在最后
    if let Some(key) = app.status_message {
        spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        spans.push(Span::styled(
            HINTS.lookup(key, lang),
            Style::default().fg(Color::Yellow),
        ));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Styles::statusbar());
    frame.render_widget(paragraph, area);
}

/// 根据当前界面生成快捷键提示
fn get_hints(surface: &Surface, lang: Language) -> Vec<(&'static str, &'static str)> {
    let mut hints = Vec::new();

    match surface {
        Surface::Viewer(_) => {
            hints.push(("Enter", HINTS.lookup("submit", lang)));
            hints.push(("F5", HINTS.lookup("refresh", lang)));
            hints.push(("Alt+p", HINTS.lookup("privacy", lang)));
        }
        Surface::Privacy(_) => {
            hints.push(("Esc", HINTS.lookup("back", lang)));
        }
    }

    hints.push(("F2", HINTS.lookup("language", lang)));
    hints.push(("↑↓", HINTS.lookup("scroll", lang)));
    hints.push(("Alt+q", HINTS.lookup("quit", lang)));

    hints
}
