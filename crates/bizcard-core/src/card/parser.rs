//! Business card parser: normalize, extract, classify, assemble.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::models::config::ParserConfig;
use crate::models::contact::ContactRecord;

use super::assembler::{assemble, DEFAULT_ADDRESS_SEPARATOR};
use super::classifier::{LineRole, RoleClassifier};
use super::normalizer::normalize_lines;
use super::rules::{
    ClaimedField, Dictionaries, EmailExtractor, FieldExtractor, FieldKind, PhoneExtractor,
    WebsiteExtractor,
};

/// A line with the role it ended up with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineAssignment {
    /// Position in the normalized line sequence.
    pub position: usize,
    /// Cleaned line text.
    pub text: String,
    /// Assigned role.
    pub role: LineRole,
}

/// Result of parsing one card.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CardParseResult {
    /// Parsed contact.
    pub record: ContactRecord,
    /// Every normalized line with its role, in order.
    pub lines: Vec<LineAssignment>,
    /// First website found; not part of the contact record.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    /// Fields that could not be found.
    pub warnings: Vec<String>,
}

/// Trait for card parsing.
pub trait CardParser {
    /// Parse card text. Never fails; unrecognized fields are empty.
    fn parse(&self, text: &str) -> CardParseResult;

    /// Parse card text and keep only the contact record.
    fn parse_record(&self, text: &str) -> ContactRecord {
        self.parse(text).record
    }
}

/// Rule-based business card parser.
///
/// Immutable once built, so one instance can serve concurrent callers.
#[derive(Debug, Clone)]
pub struct BusinessCardParser {
    email: EmailExtractor,
    phone: PhoneExtractor,
    website: WebsiteExtractor,
    classifier: RoleClassifier,
    address_separator: String,
}

impl BusinessCardParser {
    /// Create a new parser with the default dictionaries.
    pub fn new() -> Self {
        Self {
            email: EmailExtractor,
            phone: PhoneExtractor::new(),
            website: WebsiteExtractor::default(),
            classifier: RoleClassifier::default(),
            address_separator: DEFAULT_ADDRESS_SEPARATOR.to_string(),
        }
    }

    /// Create a parser from configuration.
    pub fn from_config(config: &ParserConfig) -> Self {
        Self::new()
            .with_dictionaries(&config.dictionaries)
            .with_phone_digits(config.min_phone_digits, config.max_phone_digits)
            .with_address_separator(&config.address_separator)
    }

    /// Replace the keyword dictionaries.
    pub fn with_dictionaries(mut self, dictionaries: &Dictionaries) -> Self {
        self.website = WebsiteExtractor::new(&dictionaries.website_tlds);
        self.classifier = RoleClassifier::new(dictionaries);
        self
    }

    /// Set the accepted phone digit count range.
    pub fn with_phone_digits(mut self, min_digits: usize, max_digits: usize) -> Self {
        self.phone = self.phone.with_digit_range(min_digits, max_digits);
        self
    }

    /// Set the separator used between address lines.
    pub fn with_address_separator(mut self, separator: &str) -> Self {
        self.address_separator = separator.to_string();
        self
    }

    /// Parse card text, stamping the record with `created_at`.
    pub fn parse_at(&self, text: &str, created_at: DateTime<Utc>) -> CardParseResult {
        info!("Parsing business card from {} characters of text", text.len());

        let normalized = normalize_lines(text);
        let mut pool = normalized.clone();

        // Most specific pattern first, so a URL or email never reaches the phone matcher.
        let extractors: [&dyn FieldExtractor; 3] = [&self.email, &self.phone, &self.website];
        let mut claims: Vec<ClaimedField> = Vec::new();
        for extractor in extractors {
            claims.extend(extractor.claim(&mut pool));
        }

        debug!(
            "Normalized {} lines, {} claimed by extractors, {} left to classify",
            normalized.len(),
            claims.len(),
            pool.len()
        );

        let classification = self.classifier.classify(&pool);
        let record = assemble(&claims, &classification, &self.address_separator, created_at);

        let mut lines: Vec<LineAssignment> = claims
            .iter()
            .map(|claim| LineAssignment {
                position: claim.position,
                text: normalized
                    .get(claim.position)
                    .map(|line| line.text.clone())
                    .unwrap_or_else(|| claim.value.clone()),
                role: role_for_kind(claim.kind),
            })
            .chain(classification.assignments.into_iter().map(|(line, role)| LineAssignment {
                position: line.position,
                text: line.text,
                role,
            }))
            .collect();
        lines.sort_by_key(|assignment| assignment.position);

        let website = claims
            .iter()
            .find(|claim| claim.kind == FieldKind::Website)
            .map(|claim| claim.value.clone());

        let warnings = record
            .missing_fields()
            .into_iter()
            .map(|field| format!("Could not extract {}", field))
            .collect();

        debug!(
            "Parsed card: name={:?} company={:?} email={:?} phone={:?}",
            record.name, record.company, record.email, record.phone
        );

        CardParseResult {
            record,
            lines,
            website,
            warnings,
        }
    }
}

impl Default for BusinessCardParser {
    fn default() -> Self {
        Self::new()
    }
}

impl CardParser for BusinessCardParser {
    fn parse(&self, text: &str) -> CardParseResult {
        self.parse_at(text, Utc::now())
    }
}

fn role_for_kind(kind: FieldKind) -> LineRole {
    match kind {
        FieldKind::Email => LineRole::Email,
        FieldKind::Phone => LineRole::Phone,
        FieldKind::Website => LineRole::Website,
    }
}
