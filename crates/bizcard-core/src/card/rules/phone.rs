//! Phone number extraction and normalization.

use super::patterns::{PHONE_CANDIDATE, ZIP_PLUS_FOUR};
use super::{FieldExtractor, FieldKind};

/// Default minimum digit count for a phone number.
pub const MIN_PHONE_DIGITS: usize = 7;

/// Default maximum digit count for a phone number (E.164 limit).
pub const MAX_PHONE_DIGITS: usize = 15;

/// Phone field extractor.
#[derive(Debug, Clone)]
pub struct PhoneExtractor {
    min_digits: usize,
    max_digits: usize,
}

impl PhoneExtractor {
    /// Create a new phone extractor accepting 7-15 digits.
    pub fn new() -> Self {
        Self {
            min_digits: MIN_PHONE_DIGITS,
            max_digits: MAX_PHONE_DIGITS,
        }
    }

    /// Set the accepted digit count range (inclusive).
    pub fn with_digit_range(mut self, min_digits: usize, max_digits: usize) -> Self {
        self.min_digits = min_digits;
        self.max_digits = max_digits;
        self
    }
}

impl Default for PhoneExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for PhoneExtractor {
    fn kind(&self) -> FieldKind {
        FieldKind::Phone
    }

    fn find(&self, line: &str) -> Option<String> {
        PHONE_CANDIDATE
            .find_iter(line)
            .flat_map(|m| split_numbers(m.as_str(), self.min_digits))
            .filter(|number| !ZIP_PLUS_FOUR.is_match(number))
            .find(|number| (self.min_digits..=self.max_digits).contains(&count_digits(number)))
            .map(normalize_phone)
    }
}

fn count_digits(text: &str) -> usize {
    text.chars().filter(|c| c.is_ascii_digit()).count()
}

/// Split a candidate run at the spaces or slashes where a second number begins.
///
/// Once the current number has `min_digits`, a new one starts at a chunk
/// opening with `(` or `+`, at a chunk that is a full number by itself,
/// or after a chunk of bare separators.
fn split_numbers(candidate: &str, min_digits: usize) -> Vec<&str> {
    let mut numbers = Vec::new();
    let mut current: Option<(usize, usize)> = None;
    let mut digits = 0;
    let mut offset = 0;

    for chunk in candidate.split([' ', '/']) {
        let start = offset;
        offset += chunk.len() + 1;
        if chunk.is_empty() {
            continue;
        }

        let chunk_digits = count_digits(chunk);
        let opens_number = chunk.starts_with(['(', '+'])
            || chunk_digits >= min_digits
            || chunk_digits == 0;

        if let Some((from, to)) = current {
            if digits >= min_digits && opens_number {
                numbers.push(&candidate[from..to]);
                current = None;
                digits = 0;
            }
        }

        if chunk_digits == 0 {
            continue;
        }

        let from = current.map_or(start, |(from, _)| from);
        current = Some((from, start + chunk.len()));
        digits += chunk_digits;
    }

    if let Some((from, to)) = current {
        numbers.push(&candidate[from..to]);
    }

    numbers
}

/// Extract the first phone number from text.
pub fn extract_phone(text: &str) -> Option<String> {
    PhoneExtractor::new().find(text)
}

/// Strip separators from a phone number, keeping a leading `+`.
pub fn normalize_phone(phone: &str) -> String {
    let international = phone
        .trim_start_matches(|c: char| c == '(' || c.is_whitespace())
        .starts_with('+');

    let digits: String = phone.chars().filter(|c| c.is_ascii_digit()).collect();

    if international {
        format!("+{}", digits)
    } else {
        digits
    }
}
