//! Framing permission headers

use reqwest::header::{CONTENT_SECURITY_POLICY, HeaderMap, X_FRAME_OPTIONS};

/// Why a response refuses to be shown inside a frame, if it does.
///
/// A preview frame never shares the target's origin, so both
/// `X-Frame-Options: DENY` and `SAMEORIGIN` refuse it, as does a CSP
/// `frame-ancestors` directive with `'none'` or an empty source list.
pub fn framing_refusal(headers: &HeaderMap) -> Option<&'static str> {
    for value in headers.get_all(X_FRAME_OPTIONS) {
        let Ok(value) = value.to_str() else {
            continue;
        };
        let value = value.trim();
        if value.eq_ignore_ascii_case("deny") {
            return Some("X-Frame-Options: DENY");
        }
        if value.eq_ignore_ascii_case("sameorigin") {
            return Some("X-Frame-Options: SAMEORIGIN");
        }
    }

    for value in headers.get_all(CONTENT_SECURITY_POLICY) {
        let Ok(policy) = value.to_str() else {
            continue;
        };
        if forbids_all_ancestors(policy) {
            return Some("Content-Security-Policy: frame-ancestors 'none'");
        }
    }

    None
}

fn forbids_all_ancestors(policy: &str) -> bool {
    policy.split(';').any(|directive| {
        let mut tokens = directive.split_whitespace();
        match tokens.next() {
            Some(name) if name.eq_ignore_ascii_case("frame-ancestors") => {
                let sources: Vec<&str> = tokens.collect();
                sources.is_empty() || sources.iter().any(|s| s.eq_ignore_ascii_case("'none'"))
            }
            _ => false,
        }
    })
}
