//! URL normalization and validation

use log::debug;
use url::Url;

use crate::error::ViewError;
use crate::types::TargetUrl;

const HTTP_PREFIX: &str = "http://";
const HTTPS_PREFIX: &str = "https://";

/// Normalize and validate raw viewer input.
///
/// Blank input fails with `EmptyInput`. Input that already starts with
/// `http://` or `https://` is kept as is, anything else gets `https://`
/// prepended. The result must parse as an absolute `http`/`https` URL,
/// otherwise it fails with `InvalidUrl`.
pub fn normalize(raw: &str) -> Result<TargetUrl, ViewError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ViewError::EmptyInput);
    }

    if !has_http_prefix(trimmed) && has_foreign_scheme(trimmed) {
        debug!("[URL] Rejected explicit non-http scheme: {trimmed}");
        return Err(ViewError::InvalidUrl);
    }

    let formatted = format_url(trimmed);
    match parse_http_url(&formatted) {
        Some(parsed) => {
            debug!("[URL] Normalized {trimmed:?} -> {formatted}");
            Ok(TargetUrl::new(formatted, parsed))
        }
        None => {
            debug!("[URL] Rejected {formatted}");
            Err(ViewError::InvalidUrl)
        }
    }
}

/// Prepend `https://` unless the input already carries an http(s) prefix.
///
/// Empty input stays empty.
pub fn format_url(input: &str) -> String {
    if input.is_empty() {
        return String::new();
    }
    if has_http_prefix(input) {
        input.to_string()
    } else {
        format!("{HTTPS_PREFIX}{input}")
    }
}

/// Whether the string parses as an absolute URL with scheme `http` or `https`
pub fn is_valid_url(input: &str) -> bool {
    parse_http_url(input).is_some()
}

fn has_http_prefix(input: &str) -> bool {
    input.starts_with(HTTP_PREFIX) || input.starts_with(HTTPS_PREFIX)
}

fn parse_http_url(input: &str) -> Option<Url> {
    Url::parse(input)
        .ok()
        .filter(|url| matches!(url.scheme(), "http" | "https"))
}

/// Detects input such as `ftp://x`, `javascript:x` or `mailto:a@b` that
/// names a scheme of its own.
///
/// `host:port` input (`localhost:3000`) also parses as `scheme:path`, so
/// unless the scheme is followed by `//`, a purely numeric remainder up to
/// the first `/`, `?` or `#` is treated as a port rather than a scheme.
fn has_foreign_scheme(input: &str) -> bool {
    let Ok(parsed) = Url::parse(input) else {
        return false;
    };
    if matches!(parsed.scheme(), "http" | "https") {
        return false;
    }
    let Some((_, rest)) = input.split_once(':') else {
        return false;
    };
    if rest.starts_with("//") {
        return true;
    }
    let port = rest
        .split(|c| matches!(c, '/' | '?' | '#'))
        .next()
        .unwrap_or_default();
    !port.chars().all(|c| c.is_ascii_digit())
}
