//! 查看器页面视图

use std::rc::Rc;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Position, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use unicode_width::UnicodeWidthStr;
use url_viewer_core::types::{FramePage, Language};

use crate::i18n::{HINTS, VIEWER};
use crate::model::state::ViewerState;
use crate::util::text::{truncate, visible_window, wrap};
use crate::view::theme::{Styles, colors};

/// 页面分区：标题、输入框、错误、当前站点、预览框架、页脚
fn sections(state: &ViewerState, area: Rect) -> Rc<[Rect]> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),                                               // 标题
            Constraint::Length(3),                                               // 输入框
            Constraint::Length(u16::from(state.viewer.error().is_some())),       // 错误
            Constraint::Length(u16::from(state.viewer.current_url().is_some())), // 当前站点
            Constraint::Min(3),                                                  // 预览框架 / 使用说明
            Constraint::Length(1),                                               // 页脚
        ])
        .split(area)
}

/// 预览框架边框内的区域
fn frame_body(area: Rect) -> Rect {
    Block::default().borders(Borders::ALL).inner(area)
}

/// 按宽度折行后的页面文本
fn page_lines(page: &FramePage, width: usize) -> Vec<String> {
    page.lines.iter().flat_map(|line| wrap(line, width)).collect()
}

/// 页面文本的最大滚动偏移，使最后一行恰好位于框架底部
pub fn max_scroll(state: &ViewerState, area: Rect) -> usize {
    let Some(page) = &state.page else {
        return 0;
    };
    let body = frame_body(sections(state, area)[4]);
    page_lines(page, body.width as usize)
        .len()
        .saturating_sub(body.height as usize)
}

/// 渲染查看器页面
pub fn render(state: &ViewerState, frame: &mut Frame, area: Rect) {
    let lang = state.language;
    let error = state.viewer.error();
    let current_url = state.viewer.current_url();

    let chunks = sections(state, area);

    render_header(lang, frame, chunks[0]);
    render_input(state, frame, chunks[1]);

    if let Some(err) = error {
        let text = format!(" ⚠ {}", VIEWER.lookup(err.message_key(), lang));
        let line = truncate(&text, chunks[2].width as usize);
        frame.render_widget(
            Paragraph::new(line).style(Style::default().fg(colors().error)),
            chunks[2],
        );
    }

    match current_url {
        Some(url) => {
            let label = format!(" {}: ", VIEWER.lookup("currentSite", lang));
            let refresh = format!("  ⟳ {} (F5)", HINTS.lookup("refresh", lang));
            let room = (chunks[3].width as usize).saturating_sub(label.width() + refresh.width());
            let line = Line::from(vec![
                Span::styled(label, Styles::muted()),
                Span::styled(truncate(url.as_str(), room), Styles::link()),
                Span::styled(refresh, Style::default().fg(colors().highlight)),
            ]);
            frame.render_widget(Paragraph::new(line), chunks[3]);
            render_frame(state, frame, chunks[4]);
        }
        None => render_getting_started(lang, frame, chunks[4]),
    }

    render_footer(lang, frame, chunks[5]);
}

fn render_header(lang: Language, frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(Span::styled(VIEWER.lookup("title", lang), Styles::title())),
        Line::from(Span::styled(VIEWER.lookup("subtitle", lang), Styles::muted())),
    ];
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

/// 输入框与按钮
fn render_input(state: &ViewerState, frame: &mut Frame, area: Rect) {
    let lang = state.language;
    let c = colors();
    let loading = state.viewer.is_loading();

    let button_label = if loading {
        VIEWER.lookup("loading", lang)
    } else {
        VIEWER.lookup("view", lang)
    };
    let button_width = (button_label.width() + 4) as u16;

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(10), Constraint::Length(button_width)])
        .split(area);

    let block = Block::default()
        .title(format!(" {} ", VIEWER.lookup("urlInput", lang)))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(c.border_focused));
    let inner = block.inner(columns[0]);
    frame.render_widget(block, columns[0]);

    if state.input.is_empty() {
        let placeholder = truncate(VIEWER.lookup("placeholder", lang), inner.width as usize);
        frame.render_widget(Paragraph::new(placeholder).style(Styles::muted()), inner);
        frame.set_cursor_position(Position::new(inner.x, inner.y));
    } else {
        let (visible, cursor_col) =
            visible_window(&state.input.value, state.input.cursor, inner.width as usize);
        frame.render_widget(
            Paragraph::new(visible).style(Style::default().fg(c.fg)),
            inner,
        );
        frame.set_cursor_position(Position::new(inner.x + cursor_col as u16, inner.y));
    }

    let button = Paragraph::new(format!("\n{button_label}"))
        .alignment(Alignment::Center)
        .style(Styles::button(!loading));
    frame.render_widget(button, columns[1]);
}

/// 预览框架
fn render_frame(state: &ViewerState, frame: &mut Frame, area: Rect) {
    let lang = state.language;
    let c = colors();
    let loading = state.viewer.is_loading();

    let heading = state
        .page
        .as_ref()
        .and_then(|page| page.title.as_deref())
        .or_else(|| state.viewer.current_url().map(|url| url.as_str()))
        .unwrap_or_default();
    let heading = if loading {
        format!(" {heading} · {} ", VIEWER.lookup("loadingSite", lang))
    } else {
        format!(" {heading} ")
    };

    let block = Block::default()
        .title(truncate(&heading, area.width.saturating_sub(2) as usize))
        .title_style(Style::default().fg(c.fg).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(c.border));
    let inner = frame_body(area);
    frame.render_widget(block, area);

    let Some(page) = &state.page else {
        if loading {
            let text = Paragraph::new(VIEWER.lookup("loadingSite", lang))
                .alignment(Alignment::Center)
                .style(Styles::muted());
            frame.render_widget(text, centered_line(inner));
        }
        return;
    };

    if page.lines.is_empty() {
        frame.render_widget(
            Paragraph::new(HINTS.lookup("emptyPage", lang)).style(Styles::muted()),
            inner,
        );
        return;
    }

    let lines = page_lines(page, inner.width as usize);

    let height = inner.height as usize;
    let offset = state.scroll.offset.min(lines.len().saturating_sub(height));
    let visible: Vec<Line> = lines
        .into_iter()
        .skip(offset)
        .take(height)
        .map(Line::from)
        .collect();

    frame.render_widget(
        Paragraph::new(visible).style(Style::default().fg(c.fg)),
        inner,
    );
}

/// 尚未加载任何地址时显示的使用说明
fn render_getting_started(lang: Language, frame: &mut Frame, area: Rect) {
    let c = colors();
    let block = Block::default()
        .title(format!(" {} ", VIEWER.lookup("howToUseTitle", lang)))
        .title_style(Styles::title())
        .borders(Borders::ALL)
        .border_style(Style::default().fg(c.border));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let width = (inner.width as usize).saturating_sub(4);
    let mut lines = vec![Line::from("")];
    for (i, key) in ["step1", "step2", "step3"].iter().enumerate() {
        for (j, part) in wrap(VIEWER.lookup(key, lang), width).into_iter().enumerate() {
            let marker = if j == 0 {
                format!(" {}. ", i + 1)
            } else {
                "    ".to_string()
            };
            lines.push(Line::from(vec![
                Span::styled(marker, Style::default().fg(c.highlight)),
                Span::styled(part, Style::default().fg(c.fg)),
            ]));
        }
    }

    frame.render_widget(Paragraph::new(lines), inner);
}

fn render_footer(lang: Language, frame: &mut Frame, area: Rect) {
    let line = Line::from(vec![
        Span::styled(VIEWER.lookup("privacyPolicy", lang), Styles::link()),
        Span::styled(" (Alt+p)  ·  ", Styles::muted()),
        Span::styled(VIEWER.lookup("footer", lang), Styles::muted()),
    ]);
    frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}

/// 区域垂直居中的一行
fn centered_line(area: Rect) -> Rect {
    Rect {
        y: area.y + area.height / 2,
        height: area.height.min(1),
        ..area
    }
}
