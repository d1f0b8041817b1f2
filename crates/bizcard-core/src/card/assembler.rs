//! Merge extractor claims and classified lines into a contact record.

use chrono::{DateTime, Utc};

use crate::models::contact::ContactRecord;

use super::classifier::{Classification, LineRole};
use super::rules::{ClaimedField, FieldKind};

/// Default separator between multi-line address parts.
pub const DEFAULT_ADDRESS_SEPARATOR: &str = " ";

/// Build a contact record.
///
/// Email and phone take the first claim of their kind; name, title and
/// company take the first line with that role; address joins every address
/// line in order. Anything missing stays an empty string.
pub fn assemble(
    claims: &[ClaimedField],
    classification: &Classification,
    address_separator: &str,
    created_at: DateTime<Utc>,
) -> ContactRecord {
    let first_claim = |kind: FieldKind| {
        claims
            .iter()
            .filter(|claim| claim.kind == kind)
            .min_by_key(|claim| claim.position)
            .map(|claim| claim.value.clone())
            .unwrap_or_default()
    };

    let first_line = |role: LineRole| {
        classification
            .first(role)
            .map(|line| line.text.clone())
            .unwrap_or_default()
    };

    let address = classification
        .all(LineRole::Address)
        .map(|line| line.text.as_str())
        .collect::<Vec<_>>()
        .join(address_separator);

    ContactRecord {
        name: first_line(LineRole::Name),
        title: first_line(LineRole::Title),
        company: first_line(LineRole::Company),
        phone: first_claim(FieldKind::Phone),
        email: first_claim(FieldKind::Email),
        address,
        created_at,
    }
}
