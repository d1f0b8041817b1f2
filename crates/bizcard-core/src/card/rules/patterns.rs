//! Common regex patterns for business card extraction.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Any line-break sequence, including the Unicode line and paragraph separators
    pub static ref LINE_BREAK: Regex = Regex::new(
        r"\r\n|[\n\r\x0B\x0C\x{85}\x{2028}\x{2029}]"
    ).unwrap();

    // Email address
    pub static ref EMAIL: Regex = Regex::new(
        r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}"
    ).unwrap();

    // Phone candidate: digits with separators and an optional leading plus.
    // Digit count is checked separately.
    pub static ref PHONE_CANDIDATE: Regex = Regex::new(
        r"\+?\(?\d[\d ().\-/]*\d"
    ).unwrap();

    // US ZIP+4 code, which would otherwise pass as a 9-digit phone number
    pub static ref ZIP_PLUS_FOUR: Regex = Regex::new(
        r"^\d{5}-\d{4}$"
    ).unwrap();

    // Website with an explicit scheme or www. prefix
    pub static ref WEBSITE_PREFIXED: Regex = Regex::new(
        r"(?i)\b(?:https?://|www\.)[^\s,;]+"
    ).unwrap();

    // Bare domain; group 2 is the top-level label
    pub static ref BARE_DOMAIN: Regex = Regex::new(
        r"(?i)\b((?:[a-z0-9](?:[a-z0-9-]*[a-z0-9])?\.)+([a-z]{2,24}))\b(?:/[^\s,;]*)?"
    ).unwrap();

    // Postal codes: US ZIP / ZIP+4, Polish NN-NNN, Canadian A1A 1A1, UK outward/inward
    pub static ref POSTAL_CODE: Regex = Regex::new(
        r"\b\d{5}(?:-\d{4})?\b|\b\d{2}-\d{3}\b|\b[A-Z]\d[A-Z] ?\d[A-Z]\d\b|\b[A-Z]{1,2}\d[A-Z\d]? \d[A-Z]{2}\b"
    ).unwrap();
}
