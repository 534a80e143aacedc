//! 按显示宽度处理文本（基于 unicode-width）

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// 按单词折行，超长单词按字符断开
///
/// 空行保留为一个空字符串。`width` 为 0 时原样返回。
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return vec![text.to_string()];
    }

    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_width = 0;

    for word in text.split_whitespace() {
        let word_width = word.width();
        let gap = usize::from(!current.is_empty());

        if current_width + gap + word_width <= width {
            if gap == 1 {
                current.push(' ');
            }
            current.push_str(word);
            current_width += gap + word_width;
            continue;
        }

        if !current.is_empty() {
            lines.push(std::mem::take(&mut current));
            current_width = 0;
        }

        if word_width <= width {
            current.push_str(word);
            current_width = word_width;
        } else {
            // 超长单词（如 URL）
            for ch in word.chars() {
                let w = ch.width().unwrap_or(0);
                if current_width + w > width && !current.is_empty() {
                    lines.push(std::mem::take(&mut current));
                    current_width = 0;
                }
                current.push(ch);
                current_width += w;
            }
        }
    }

    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }
    lines
}

/// 截断到指定显示宽度，超出时以 `…` 结尾
pub fn truncate(text: &str, width: usize) -> String {
    if text.width() <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w + 1 > width {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}

/// 单行输入框中可见的部分
///
/// 返回 (可见文本, 光标相对可见文本起点的显示列)。光标越过右边界时向左滚动。
pub fn visible_window(value: &str, cursor: usize, width: usize) -> (String, usize) {
    let chars: Vec<char> = value.chars().collect();
    let cursor = cursor.min(chars.len());
    if width == 0 {
        return (String::new(), 0);
    }

    // 从光标向左回溯，找到使光标可见的起点
    let mut start = 0;
    let mut before: usize = chars[..cursor].iter().map(|c| c.width().unwrap_or(0)).sum();
    while before >= width && start < cursor {
        before -= chars[start].width().unwrap_or(0);
        start += 1;
    }

    let mut visible = String::new();
    let mut used = 0;
    for ch in &chars[start..] {
        let w = ch.width().unwrap_or(0);
        if used + w > width {
            break;
        }
        visible.push(*ch);
        used += w;
    }

    (visible, before)
}
