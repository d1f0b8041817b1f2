//! Rule-based field extractors for business card lines.

pub mod dictionary;
pub mod email;
pub mod patterns;
pub mod phone;
pub mod website;

pub use dictionary::{tokenize, Dictionaries, KeywordSet};
pub use email::{extract_email, normalize_email, EmailExtractor};
pub use phone::{extract_phone, normalize_phone, PhoneExtractor};
pub use website::{extract_website, WebsiteExtractor};

use serde::{Deserialize, Serialize};

use super::normalizer::Line;

/// Kind of field an extractor claims.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    Email,
    Phone,
    Website,
}

/// A line claimed by an extractor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClaimedField {
    /// Field the line was claimed for.
    pub kind: FieldKind,
    /// Normalized extracted value.
    pub value: String,
    /// Position of the originating line.
    pub position: usize,
}

/// Trait for pattern-based line extractors.
pub trait FieldExtractor {
    /// The field this extractor claims lines for.
    fn kind(&self) -> FieldKind;

    /// Find and normalize the field value within a single line.
    fn find(&self, line: &str) -> Option<String>;

    /// Claim every matching line, removing it from `pool`.
    ///
    /// Claims are returned in line order. The whole line is claimed even
    /// when the value is only part of it.
    fn claim(&self, pool: &mut Vec<Line>) -> Vec<ClaimedField> {
        let kind = self.kind();
        let mut claims = Vec::new();

        pool.retain(|line| match self.find(&line.text) {
            Some(value) => {
                claims.push(ClaimedField {
                    kind,
                    value,
                    position: line.position,
                });
                false
            }
            None => true,
        });

        claims
    }
}
