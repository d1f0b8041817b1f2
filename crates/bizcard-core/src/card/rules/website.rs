//! Website extraction.
//!
//! Website lines are claimed only to keep URLs out of the company and
//! address candidates; the contact record has no website field.

use std::collections::HashSet;

use super::patterns::{BARE_DOMAIN, WEBSITE_PREFIXED};
use super::{Dictionaries, FieldExtractor, FieldKind};

/// Website field extractor.
#[derive(Debug, Clone)]
pub struct WebsiteExtractor {
    tlds: HashSet<String>,
}

impl WebsiteExtractor {
    /// Create an extractor accepting bare domains with the given TLDs.
    pub fn new<I, S>(tlds: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            tlds: tlds
                .into_iter()
                .map(|tld| tld.as_ref().trim().trim_start_matches('.').to_lowercase())
                .filter(|tld| !tld.is_empty())
                .collect(),
        }
    }
}

impl Default for WebsiteExtractor {
    fn default() -> Self {
        Self::new(Dictionaries::default().website_tlds)
    }
}

impl FieldExtractor for WebsiteExtractor {
    fn kind(&self) -> FieldKind {
        FieldKind::Website
    }

    fn find(&self, line: &str) -> Option<String> {
        if let Some(m) = WEBSITE_PREFIXED.find(line) {
            return Some(normalize_website(m.as_str()));
        }

        BARE_DOMAIN
            .captures_iter(line)
            .find(|caps| self.tlds.contains(&caps[2].to_lowercase()))
            .and_then(|caps| caps.get(0))
            .map(|m| normalize_website(m.as_str()))
    }
}

/// Extract the first website from text using the default TLD list.
pub fn extract_website(text: &str) -> Option<String> {
    WebsiteExtractor::default().find(text)
}

fn normalize_website(url: &str) -> String {
    url.trim_end_matches(|c: char| matches!(c, '.' | ',' | ')' | '/'))
        .to_string()
}
