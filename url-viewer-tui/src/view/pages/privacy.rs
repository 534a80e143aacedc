//! 隐私政策页面视图

use std::rc::Rc;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use url_viewer_core::policy::{ContentLine, SECTIONS};
use url_viewer_core::types::Language;

use crate::i18n::POLICY;
use crate::model::state::PolicyState;
use crate::util::text::wrap;
use crate::view::theme::{Styles, colors};

/// 页面分区：页头与正文
fn sections(area: Rect) -> Rc<[Rect]> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // 返回 + 标题 + 更新日期
            Constraint::Min(3),    // 正文
        ])
        .split(area)
}

/// 正文折行宽度（右侧留一列空白）
fn wrap_width(body: Rect) -> usize {
    (body.width as usize).saturating_sub(1)
}

/// 正文的最大滚动偏移，使最后一行恰好位于边框底部
pub fn max_scroll(state: &PolicyState, area: Rect) -> usize {
    let body = Block::default().borders(Borders::ALL).inner(sections(area)[1]);
    body_lines(state.language, wrap_width(body))
        .len()
        .saturating_sub(body.height as usize)
}

/// 渲染隐私政策页面
pub fn render(state: &PolicyState, frame: &mut Frame, area: Rect) {
    let lang = state.language;
    let c = colors();

    let chunks = sections(area);

    let header = vec![
        Line::from(vec![
            Span::styled(format!("← {}", POLICY.lookup("backToHome", lang)), Styles::link()),
            Span::styled(" (Esc)", Styles::muted()),
        ]),
        Line::from(Span::styled(POLICY.lookup("title", lang), Styles::title())),
        Line::from(Span::styled(POLICY.lookup("lastUpdated", lang), Styles::muted())),
    ];
    frame.render_widget(Paragraph::new(header), chunks[0]);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(c.border));
    let inner = block.inner(chunks[1]);
    frame.render_widget(block, chunks[1]);

    let lines = body_lines(lang, wrap_width(inner));
    let height = inner.height as usize;
    let offset = state.scroll.offset.min(lines.len().saturating_sub(height));
    let visible: Vec<Line> = lines.into_iter().skip(offset).take(height).collect();

    frame.render_widget(Paragraph::new(visible), inner);
}

/// 引言与六个编号小节，按宽度折行
fn body_lines(lang: Language, width: usize) -> Vec<Line<'static>> {
    let c = colors();
    let text_style = Style::default().fg(c.fg);
    let mut lines = Vec::new();

    for part in wrap(POLICY.lookup("introduction", lang), width) {
        lines.push(Line::from(Span::styled(part, text_style)));
    }

    for section in SECTIONS {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            section.title(lang),
            Style::default()
                .fg(c.highlight)
                .add_modifier(Modifier::BOLD),
        )));

        for content in section.content(lang) {
            match content {
                ContentLine::Text(text) => {
                    for part in wrap(text, width) {
                        lines.push(Line::from(Span::styled(part, text_style)));
                    }
                }
                ContentLine::Spacer => lines.push(Line::from("")),
            }
        }
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(lines: &[Line]) -> Vec<String> {
        lines
            .iter()
            .map(|line| line.spans.iter().map(|s| s.content.as_ref()).collect())
            .collect()
    }

    #[test]
    fn body_contains_every_section_title() {
        for lang in Language::all() {
            let text = plain(&body_lines(*lang, 80));
            for section in SECTIONS {
                assert!(text.iter().any(|l| l == section.title(*lang)));
            }
        }
    }

    #[test]
    fn body_lines_fit_the_width() {
        use unicode_width::UnicodeWidthStr;

        for line in plain(&body_lines(Language::Turkish, 30)) {
            assert!(line.width() <= 30, "{line}");
        }
    }
}
