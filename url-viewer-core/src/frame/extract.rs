//! HTML to text reduction

use std::sync::LazyLock;

use regex::Regex;

/// Compiled patterns; a pattern that fails to compile is skipped
static HIDDEN_BLOCKS: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(
        r"(?is)<!--.*?-->|<(?:script|style|noscript|template|svg)\b[^>]*>.*?</(?:script|style|noscript|template|svg)\s*>",
    )
    .ok()
});
static HEAD: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"(?is)<head\b[^>]*>.*?</head\s*>").ok());
static TITLE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"(?is)<title\b[^>]*>(.*?)</title\s*>").ok());
static LIST_ITEM: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"(?i)<li\b[^>]*>").ok());
static BLOCK_BREAK: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(
        r"(?i)<(?:br|hr)\b[^>]*>|</?(?:p|div|h[1-6]|ul|ol|li|tr|table|section|article|header|footer|nav|main|aside|blockquote|pre|form|dd|dt|figure|figcaption)\b[^>]*>",
    )
    .ok()
});
static ANY_TAG: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"(?s)<[^>]*>").ok());
static ENTITY: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"&(#[0-9]{1,7}|#[xX][0-9a-fA-F]{1,6}|[a-zA-Z]{2,8});").ok());
static SPACES: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"[ \t\r\f\v\x{a0}]+").ok());

fn replace_all(re: &LazyLock<Option<Regex>>, text: &str, rep: &str) -> String {
    match re.as_ref() {
        Some(re) => re.replace_all(text, rep).into_owned(),
        None => text.to_string(),
    }
}

/// Text of the first `<title>` element, decoded and collapsed
pub fn extract_title(html: &str) -> Option<String> {
    let caps = TITLE.as_ref()?.captures(html)?;
    let raw = caps.get(1)?.as_str();
    let title = collapse(&decode_entities(raw));
    if title.is_empty() {
        None
    } else {
        Some(title)
    }
}

/// Visible text of a document, one entry per non-empty line
pub fn html_to_lines(html: &str) -> Vec<String> {
    let text = replace_all(&HIDDEN_BLOCKS, html, "");
    let text = replace_all(&HEAD, &text, "");
    let text = replace_all(&LIST_ITEM, &text, "\n• ");
    let text = replace_all(&BLOCK_BREAK, &text, "\n");
    let text = replace_all(&ANY_TAG, &text, "");
    text_to_lines(&decode_entities(&text))
}

/// Non-empty, whitespace-collapsed lines of plain text
pub fn text_to_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(collapse)
        .filter(|line| !line.is_empty() && line != "•")
        .collect()
}

fn collapse(line: &str) -> String {
    replace_all(&SPACES, line, " ").trim().to_string()
}

/// Decodes the common named entities and numeric references.
///
/// Unknown names are left untouched.
pub fn decode_entities(text: &str) -> String {
    let Some(re) = ENTITY.as_ref() else {
        return text.to_string();
    };
    re.replace_all(text, |caps: &regex::Captures<'_>| {
        let body = &caps[1];
        decode_entity(body).map_or_else(|| caps[0].to_string(), |c| c.to_string())
    })
    .into_owned()
}

fn decode_entity(body: &str) -> Option<char> {
    if let Some(num) = body.strip_prefix('#') {
        let code = match num.strip_prefix(['x', 'X']) {
            Some(hex) => u32::from_str_radix(hex, 16).ok()?,
            None => num.parse::<u32>().ok()?,
        };
        return char::from_u32(code);
    }
    let c = match body {
        "amp" => '&',
        "lt" => '<',
        "gt" => '>',
        "quot" => '"',
        "apos" => '\'',
        "nbsp" => ' ',
        "copy" => '©',
        "reg" => '®',
        "hellip" => '…',
        "mdash" => '—',
        "ndash" => '–',
        "laquo" => '«',
        "raquo" => '»',
        "middot" => '·',
        "bull" => '•',
        _ => return None,
    };
    Some(c)
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"<!DOCTYPE html>
<html>
<head>
  <meta charset="utf-8">
  <title>  Example &amp; Co  </title>
  <style>body { color: red; }</style>
</head>
<body>
  <!-- navigation -->
  <h1>Welcome</h1>
  <p>First   paragraph with <a href="/x">a link</a>.</p>
  <script>var hidden = "<p>nope</p>";</script>
  <ul><li>one</li><li>two</li></ul>
  <p>5 &lt; 6 &#38; caf&#xE9;</p>
</body>
</html>"#;

    #[test]
    fn title_is_extracted_and_decoded() {
        assert_eq!(extract_title(PAGE).as_deref(), Some("Example & Co"));
    }

    #[test]
    fn missing_or_blank_title() {
        assert_eq!(extract_title("<p>no title</p>"), None);
        assert_eq!(extract_title("<title>   </title>"), None);
    }

    #[test]
    fn visible_text_only() {
        let lines = html_to_lines(PAGE);
        assert_eq!(
            lines,
            vec![
                "Welcome",
                "First paragraph with a link.",
                "• one",
                "• two",
                "5 < 6 & café",
            ]
        );
    }

    #[test]
    fn scripts_and_styles_are_dropped() {
        let lines = html_to_lines(PAGE).join("\n");
        assert!(!lines.contains("hidden"));
        assert!(!lines.contains("color"));
        assert!(!lines.contains("navigation"));
    }

    #[test]
    fn unknown_entities_are_kept() {
        assert_eq!(decode_entities("a &foo; b"), "a &foo; b");
        assert_eq!(decode_entities("&#xZZ;"), "&#xZZ;");
    }

    #[test]
    fn plain_text_lines() {
        assert_eq!(
            text_to_lines("  alpha\t beta \n\n\r\ngamma"),
            vec!["alpha beta", "gamma"]
        );
    }
}
