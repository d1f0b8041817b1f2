//! Keyword dictionaries used by the extractors and the role classifier.
//!
//! Dictionaries are plain word lists so they can be loaded from
//! configuration and swapped for minimal sets in tests.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::DictionaryError;

/// Tunable word lists driving line classification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Dictionaries {
    /// Job title words and phrases ("manager", "vice president").
    pub title_keywords: Vec<String>,

    /// Legal-entity and company markers ("Inc", "GmbH", "Sp. z o.o.").
    pub company_suffixes: Vec<String>,

    /// Street-type words that mark an address when paired with a number.
    pub street_types: Vec<String>,

    /// Unit designators ("Suite", "Floor") that mark an address line.
    pub unit_designators: Vec<String>,

    /// Top-level domains accepted for bare domains without `www.` or a scheme.
    pub website_tlds: Vec<String>,
}

impl Default for Dictionaries {
    fn default() -> Self {
        Self {
            title_keywords: to_strings(&[
                "manager", "director", "engineer", "president", "vice president",
                "founder", "co-founder", "cofounder", "owner", "partner", "ceo",
                "cto", "cfo", "coo", "cmo", "cio", "vp", "svp", "evp", "officer",
                "head of", "principal", "associate", "consultant", "analyst",
                "developer", "designer", "architect", "specialist", "coordinator",
                "administrator", "executive", "chairman", "chairwoman", "secretary",
                "treasurer", "supervisor", "representative", "agent", "advisor",
                "adviser", "attorney", "lawyer", "accountant", "assistant",
                "intern", "professor", "scientist", "researcher", "technician",
                "broker", "realtor", "editor", "producer", "strategist",
            ]),
            company_suffixes: to_strings(&[
                "inc", "incorporated", "llc", "l.l.c", "llp", "ltd", "limited",
                "corp", "corporation", "co", "company", "gmbh", "ag", "kg",
                "plc", "pty", "bv", "b.v", "nv", "n.v", "sa", "s.a", "sarl",
                "srl", "s.r.l", "spa", "s.p.a", "oy", "ab", "kk", "k.k",
                "sp. z o.o", "s.a.s", "group", "holdings",
            ]),
            street_types: to_strings(&[
                "street", "st", "avenue", "ave", "av", "road", "rd", "boulevard",
                "blvd", "lane", "ln", "drive", "dr", "way", "court", "ct",
                "place", "pl", "square", "sq", "terrace", "parkway", "pkwy",
                "highway", "hwy", "circle", "cir", "trail", "plaza", "box",
                "ul", "al", "strasse", "straße", "str", "rue", "via", "calle",
                "avenida", "weg", "laan", "gasse", "platz",
            ]),
            unit_designators: to_strings(&[
                "suite", "ste", "floor", "fl", "unit", "apt", "apartment",
                "room", "rm", "bldg", "building", "level",
            ]),
            website_tlds: to_strings(&[
                "com", "net", "org", "io", "co", "biz", "info", "dev", "app",
                "ai", "me", "tech", "edu", "gov", "us", "uk", "ca", "au", "de",
                "fr", "pl", "nl", "es", "it", "ch", "at", "eu", "jp", "in",
                "studio", "design", "agency",
            ]),
        }
    }
}

impl Dictionaries {
    /// Dictionaries with every list empty.
    ///
    /// Only the shape rules (postal codes, all-caps lines, positions) apply.
    pub fn empty() -> Self {
        Self {
            title_keywords: Vec::new(),
            company_suffixes: Vec::new(),
            street_types: Vec::new(),
            unit_designators: Vec::new(),
            website_tlds: Vec::new(),
        }
    }

    /// Check that every entry contains at least one word.
    pub fn validate(&self) -> Result<(), DictionaryError> {
        let lists = [
            ("title_keywords", &self.title_keywords),
            ("company_suffixes", &self.company_suffixes),
            ("street_types", &self.street_types),
            ("unit_designators", &self.unit_designators),
            ("website_tlds", &self.website_tlds),
        ];

        for (name, entries) in lists {
            if entries.iter().any(|entry| tokenize(entry).is_empty()) {
                return Err(DictionaryError::EmptyEntry(name.to_string()));
            }
        }

        Ok(())
    }
}

/// A compiled set of single- and multi-word keywords.
#[derive(Debug, Clone, Default)]
pub struct KeywordSet {
    words: HashSet<String>,
    phrases: Vec<Vec<String>>,
}

impl KeywordSet {
    /// Compile entries into a set; blank entries are skipped.
    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = Self::default();

        for entry in entries {
            let mut tokens = tokenize(entry.as_ref());
            match tokens.len() {
                0 => {}
                1 => {
                    set.words.insert(tokens.remove(0));
                }
                _ => set.phrases.push(tokens),
            }
        }

        set
    }

    /// Returns true if any keyword appears as whole words in `words`.
    pub fn matches(&self, words: &[String]) -> bool {
        words.iter().any(|w| self.words.contains(w))
            || self
                .phrases
                .iter()
                .any(|phrase| words.windows(phrase.len()).any(|window| window == phrase.as_slice()))
    }

    /// Returns true if a single word is in the set.
    pub fn contains_word(&self, word: &str) -> bool {
        self.words.contains(&word.to_lowercase())
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty() && self.phrases.is_empty()
    }
}

/// Split text into lower-cased words.
///
/// Words are whitespace-separated with leading and trailing punctuation
/// removed, so `"Acme Co.,"` yields `["acme", "co"]` while inner marks
/// survive (`"co-founder"`, `"o.o"`).
pub fn tokenize(text: &str) -> Vec<String> {
    text.split_whitespace()
        .map(|word| word.trim_matches(|c: char| !c.is_alphanumeric()))
        .filter(|word| !word.is_empty())
        .map(|word| word.to_lowercase())
        .collect()
}

fn to_strings(entries: &[&str]) -> Vec<String> {
    entries.iter().map(|s| s.to_string()).collect()
}
