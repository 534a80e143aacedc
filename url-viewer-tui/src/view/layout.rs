//! 主布局渲染

use std::rc::Rc;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};
use unicode_width::UnicodeWidthStr;

use crate::model::{App, Surface};

use super::components;
use super::pages;
use super::theme::colors;

/// 三层布局：标题栏 + 页面 + 状态栏
fn main_layout(size: Rect) -> Rc<[Rect]> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // 标题栏
            Constraint::Min(1),    // 页面
            Constraint::Length(1), // 状态栏
        ])
        .split(size)
}

/// 终端区域中页面所占的部分
pub fn page_area(size: Rect) -> Rect {
    main_layout(size)[1]
}

/// 渲染主布局
pub fn render(app: &App, frame: &mut Frame) {
    let main_layout = main_layout(frame.area());

    render_title_bar(app, frame, main_layout[0]);

    match &app.surface {
        Surface::Viewer(state) => pages::viewer::render(state, frame, main_layout[1]),
        Surface::Privacy(state) => pages::privacy::render(state, frame, main_layout[1]),
    }

    components::statusbar::render(app, frame, main_layout[2]);
}

/// 渲染标题栏：左侧为程序名与路由，右侧为语言选择器
fn render_title_bar(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();
    let style = Style::default().bg(c.highlight).fg(c.selected_fg);

    let left = format!(
        " URL Viewer v{}  {}",
        env!("CARGO_PKG_VERSION"),
        app.surface.route().path()
    );
    let selector = components::language_selector::line(app.surface.language());
    let selector_width = selector.width();

    let padding = (area.width as usize).saturating_sub(left.width() + selector_width + 1);

    let mut spans = vec![Span::raw(left), Span::raw(" ".repeat(padding))];
    spans.extend(selector.spans);
    spans.push(Span::raw(" "));

    frame.render_widget(Paragraph::new(Line::from(spans)).style(style), area);
}
