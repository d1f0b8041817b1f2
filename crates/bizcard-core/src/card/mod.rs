//! Business card text-to-contact parsing.
//!
//! The pipeline runs in four stages: line normalization, pattern
//! extraction (email, phone, website), role classification of the
//! remaining lines, and assembly into a [`ContactRecord`].

pub mod assembler;
pub mod classifier;
pub mod normalizer;
mod parser;
pub mod rules;

pub use classifier::{Classification, LineRole, RoleClassifier};
pub use normalizer::{normalize_lines, Line};
pub use parser::{BusinessCardParser, CardParseResult, CardParser, LineAssignment};
pub use rules::{ClaimedField, Dictionaries, FieldExtractor, FieldKind};

use lazy_static::lazy_static;

use crate::models::contact::ContactRecord;

lazy_static! {
    static ref DEFAULT_PARSER: BusinessCardParser = BusinessCardParser::new();
}

/// Parse OCR text from a business card with the default dictionaries.
///
/// Total over all inputs: empty or unrecognizable text yields a record
/// with empty fields.
pub fn parse_business_card(text: &str) -> ContactRecord {
    DEFAULT_PARSER.parse_record(text)
}
