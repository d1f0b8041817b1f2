//! Core library for business card OCR text parsing.
//!
//! This crate provides:
//! - Line normalization of raw OCR output
//! - Email, phone and website extraction
//! - Role classification of name, title, company and address lines
//! - A total `ContactRecord` model and parser configuration

pub mod card;
pub mod error;
pub mod models;

pub use card::{
    parse_business_card, BusinessCardParser, CardParseResult, CardParser, Dictionaries,
    LineAssignment, LineRole,
};
pub use error::{BizcardError, DictionaryError, Result};
pub use models::config::{BizcardConfig, OutputConfig, ParserConfig};
pub use models::contact::ContactRecord;
