//! Privacy policy content model
//!
//! The page is fixed: a header block followed by six numbered sections, each
//! a title key and a multi-line content key in [`POLICY`](crate::i18n::POLICY).

use crate::i18n::POLICY;
use crate::types::Language;

/// One numbered policy section
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PolicySection {
    pub title_key: &'static str,
    pub content_key: &'static str,
}

/// Sections in display order
pub const SECTIONS: &[PolicySection] = &[
    PolicySection {
        title_key: "dataCollectionTitle",
        content_key: "dataCollectionContent",
    },
    PolicySection {
        title_key: "dataUsageTitle",
        content_key: "dataUsageContent",
    },
    PolicySection {
        title_key: "thirdPartyTitle",
        content_key: "thirdPartyContent",
    },
    PolicySection {
        title_key: "dataSecurityTitle",
        content_key: "dataSecurityContent",
    },
    PolicySection {
        title_key: "userRightsTitle",
        content_key: "userRightsContent",
    },
    PolicySection {
        title_key: "contactTitle",
        content_key: "contactContent",
    },
];

/// A rendered body line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentLine<'a> {
    Text(&'a str),
    /// Vertical gap, from a blank source line
    Spacer,
}

/// Splits a multi-line body; blank lines become spacers
pub fn format_content(content: &str) -> Vec<ContentLine<'_>> {
    content
        .split('\n')
        .map(|line| {
            if line.trim().is_empty() {
                ContentLine::Spacer
            } else {
                ContentLine::Text(line)
            }
        })
        .collect()
}

impl PolicySection {
    pub fn title(&self, language: Language) -> &'static str {
        POLICY.lookup(self.title_key, language)
    }

    pub fn content(&self, language: Language) -> Vec<ContentLine<'static>> {
        format_content(POLICY.lookup(self.content_key, language))
    }
}
