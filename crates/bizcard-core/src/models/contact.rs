//! Contact record produced from a parsed business card.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Structured contact reconstructed from business card text.
///
/// Every field is always present; a field that could not be recognized
/// is an empty string rather than a missing value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactRecord {
    /// Person's full name.
    #[serde(default)]
    pub name: String,

    /// Job title or role.
    #[serde(default)]
    pub title: String,

    /// Company or organization name.
    #[serde(default)]
    pub company: String,

    /// Phone number, digits only with an optional leading `+`.
    #[serde(default)]
    pub phone: String,

    /// Email address, lower-cased.
    #[serde(default)]
    pub email: String,

    /// Postal address, multi-line addresses joined in card order.
    #[serde(default)]
    pub address: String,

    /// When the record was assembled.
    pub created_at: DateTime<Utc>,
}

impl ContactRecord {
    /// Field names in display and export order.
    pub const FIELD_NAMES: [&'static str; 6] =
        ["name", "title", "company", "phone", "email", "address"];

    /// Create a record with every field empty.
    pub fn empty(created_at: DateTime<Utc>) -> Self {
        Self {
            name: String::new(),
            title: String::new(),
            company: String::new(),
            phone: String::new(),
            email: String::new(),
            address: String::new(),
            created_at,
        }
    }

    /// The six text fields paired with their names, in export order.
    pub fn fields(&self) -> [(&'static str, &str); 6] {
        [
            ("name", self.name.as_str()),
            ("title", self.title.as_str()),
            ("company", self.company.as_str()),
            ("phone", self.phone.as_str()),
            ("email", self.email.as_str()),
            ("address", self.address.as_str()),
        ]
    }

    /// Returns true if no text field was recognized.
    pub fn is_empty(&self) -> bool {
        self.fields().iter().all(|(_, value)| value.is_empty())
    }

    /// Compare the text fields only, ignoring `created_at`.
    pub fn same_fields(&self, other: &ContactRecord) -> bool {
        self.fields() == other.fields()
    }

    /// Names of fields that are empty.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        self.fields()
            .iter()
            .filter(|(_, value)| value.is_empty())
            .map(|(name, _)| *name)
            .collect()
    }

    /// Check the record before it is saved as a device contact.
    ///
    /// Returns a list of issues; an empty list means the record can be saved.
    pub fn validate(&self) -> Vec<String> {
        let mut issues = Vec::new();

        if self.name.trim().is_empty() {
            issues.push("Contact name is required".to_string());
        }

        if !self.email.is_empty() && !self.email.contains('@') {
            issues.push(format!("Email address looks malformed: {}", self.email));
        }

        if !self.phone.is_empty()
            && !self
                .phone
                .trim_start_matches('+')
                .chars()
                .all(|c| c.is_ascii_digit())
        {
            issues.push(format!("Phone number contains non-digit characters: {}", self.phone));
        }

        issues
    }
}
