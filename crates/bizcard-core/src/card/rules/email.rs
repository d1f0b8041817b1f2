//! Email address extraction.

use super::patterns::EMAIL;
use super::{FieldExtractor, FieldKind};

/// Email field extractor.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmailExtractor;

impl FieldExtractor for EmailExtractor {
    fn kind(&self) -> FieldKind {
        FieldKind::Email
    }

    fn find(&self, line: &str) -> Option<String> {
        EMAIL.find(line).map(|m| normalize_email(m.as_str()))
    }
}

/// Extract the first email address from text.
pub fn extract_email(text: &str) -> Option<String> {
    EmailExtractor.find(text)
}

/// Lower-case an email address and drop trailing punctuation.
pub fn normalize_email(email: &str) -> String {
    email
        .trim_end_matches(|c: char| c == '.' || c == '-')
        .to_lowercase()
}
