//! 语言选择器
//!
//! 以当前界面的语言显示两种语言名称，当前语言高亮。

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};
use url_viewer_core::types::Language;

use crate::i18n::{HINTS, VIEWER};
use crate::view::theme::colors;

/// 生成选择器行，如 `Dil: [Türkçe] İngilizce (F2)`
pub fn line(current: Language) -> Line<'static> {
    let c = colors();
    let mut spans = vec![Span::raw(format!("{}: ", HINTS.lookup("language", current)))];

    for (i, lang) in Language::all().iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw(" "));
        }
        let label = VIEWER.lookup(lang.label_key(), current);
        if *lang == current {
            spans.push(Span::styled(
                format!("[{label}]"),
                Style::default()
                    .fg(c.selected_fg)
                    .add_modifier(Modifier::BOLD),
            ));
        } else {
            spans.push(Span::raw(format!(" {label} ")));
        }
    }

    spans.push(Span::raw(" (F2)"));
    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn labels_follow_the_current_language() {
        assert_eq!(plain(&line(Language::Turkish)), "Dil: [Türkçe]  İngilizce  (F2)");
        assert_eq!(plain(&line(Language::English)), "Language:  Turkish  [English] (F2)");
    }
}
