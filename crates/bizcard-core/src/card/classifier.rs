//! Role classification for lines left after field extraction.
//!
//! Classification is a single greedy pass in line order. Each line takes
//! the first role whose rule matches and whose slot is still open:
//!
//! 1. title, by title keyword
//! 2. company, by legal-entity suffix
//! 3. address, by shape (number plus street type, postal code, or unit designator)
//! 4. address, as continuation of the previous unclaimed line
//! 5. company, as a short all-caps line other than the first
//! 6. name, for the first line only
//!
//! Anything else is unknown. Name, title and company are filled at most
//! once; address collects every matching line.

use serde::{Deserialize, Serialize};
use tracing::trace;

use super::normalizer::Line;
use super::rules::patterns::POSTAL_CODE;
use super::rules::{tokenize, Dictionaries, KeywordSet};

/// Longest line, in characters, that the all-caps company rule considers.
const ALL_CAPS_MAX_CHARS: usize = 40;

/// Most words the all-caps company rule considers.
const ALL_CAPS_MAX_WORDS: usize = 4;

/// Role assigned to a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineRole {
    Email,
    Phone,
    Website,
    Name,
    Title,
    Company,
    Address,
    Unknown,
}

impl LineRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            LineRole::Email => "email",
            LineRole::Phone => "phone",
            LineRole::Website => "website",
            LineRole::Name => "name",
            LineRole::Title => "title",
            LineRole::Company => "company",
            LineRole::Address => "address",
            LineRole::Unknown => "unknown",
        }
    }
}

/// Output of the classifier: every input line with its role, in order.
#[derive(Debug, Clone, Default)]
pub struct Classification {
    pub assignments: Vec<(Line, LineRole)>,
}

impl Classification {
    /// First line assigned to `role`.
    pub fn first(&self, role: LineRole) -> Option<&Line> {
        self.assignments
            .iter()
            .find(|(_, r)| *r == role)
            .map(|(line, _)| line)
    }

    /// All lines assigned to `role`, in order.
    pub fn all(&self, role: LineRole) -> impl Iterator<Item = &Line> {
        self.assignments
            .iter()
            .filter(move |(_, r)| *r == role)
            .map(|(line, _)| line)
    }
}

/// Line role classifier driven by keyword dictionaries.
#[derive(Debug, Clone)]
pub struct RoleClassifier {
    title_keywords: KeywordSet,
    company_suffixes: KeywordSet,
    street_types: KeywordSet,
    unit_designators: KeywordSet,
}

#[derive(Default)]
struct OpenSlots {
    title_filled: bool,
    company_filled: bool,
    /// Index in the unclaimed sequence of the latest address line.
    last_address: Option<usize>,
}

impl RoleClassifier {
    /// Create a classifier from dictionaries.
    pub fn new(dictionaries: &Dictionaries) -> Self {
        Self {
            title_keywords: KeywordSet::new(&dictionaries.title_keywords),
            company_suffixes: KeywordSet::new(&dictionaries.company_suffixes),
            street_types: KeywordSet::new(&dictionaries.street_types),
            unit_designators: KeywordSet::new(&dictionaries.unit_designators),
        }
    }

    /// Classify unclaimed lines in a single pass.
    pub fn classify(&self, lines: &[Line]) -> Classification {
        let mut slots = OpenSlots::default();
        let mut assignments = Vec::with_capacity(lines.len());

        for (index, line) in lines.iter().enumerate() {
            let role = self.role_for(line, index, &slots);

            match role {
                LineRole::Title => slots.title_filled = true,
                LineRole::Company => slots.company_filled = true,
                LineRole::Address => slots.last_address = Some(index),
                _ => {}
            }

            trace!("Line {} {:?} -> {}", line.position, line.text, role.as_str());
            assignments.push((line.clone(), role));
        }

        Classification { assignments }
    }

    fn role_for(&self, line: &Line, index: usize, slots: &OpenSlots) -> LineRole {
        let words = tokenize(&line.text);
        let first = index == 0;

        if !slots.title_filled && self.title_keywords.matches(&words) {
            return LineRole::Title;
        }

        if !slots.company_filled && self.company_suffixes.matches(&words) {
            return LineRole::Company;
        }

        if self.is_address_shaped(&line.text, &words) {
            return LineRole::Address;
        }

        // Claimed lines in between do not break an address.
        if slots.last_address.is_some_and(|prev| prev + 1 == index) {
            return LineRole::Address;
        }

        if !slots.company_filled && !first && is_short_all_caps(&line.text, words.len()) {
            return LineRole::Company;
        }

        if first {
            return LineRole::Name;
        }

        LineRole::Unknown
    }

    /// Address lines: a number with a street type, a postal code, or a
    /// unit designator with a number ("Suite 400", "Floor 3").
    fn is_address_shaped(&self, text: &str, words: &[String]) -> bool {
        if POSTAL_CODE.is_match(text) {
            return true;
        }

        let has_number = words.iter().any(|w| w.chars().any(|c| c.is_ascii_digit()));
        if !has_number {
            return false;
        }

        self.street_types.matches(words) || self.unit_designators.matches(words)
    }
}

impl Default for RoleClassifier {
    fn default() -> Self {
        Self::new(&Dictionaries::default())
    }
}

fn is_short_all_caps(text: &str, word_count: usize) -> bool {
    if word_count == 0 || word_count > ALL_CAPS_MAX_WORDS {
        return false;
    }
    if text.chars().count() > ALL_CAPS_MAX_CHARS {
        return false;
    }

    let letters: Vec<char> = text.chars().filter(|c| c.is_alphabetic()).collect();
    letters.len() >= 2 && letters.iter().all(|c| c.is_uppercase())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::normalizer::normalize_lines;

    fn roles(text: &str) -> Vec<(String, LineRole)> {
        RoleClassifier::default()
            .classify(&normalize_lines(text))
            .assignments
            .into_iter()
            .map(|(line, role)| (line.text, role))
            .collect()
    }

    fn role_of(text: &str, line: &str) -> LineRole {
        roles(text)
            .into_iter()
            .find(|(t, _)| t == line)
            .map(|(_, r)| r)
            .unwrap()
    }

    #[test]
    fn test_basic_card_roles() {
        let result = roles("Jane Doe\nSenior Engineer\nAcme Corp\n123 Main St\nSpringfield, IL 62704");

        assert_eq!(
            result.iter().map(|(_, r)| *r).collect::<Vec<_>>(),
            vec![
                LineRole::Name,
                LineRole::Title,
                LineRole::Company,
                LineRole::Address,
                LineRole::Address,
            ]
        );
    }

    #[test]
    fn test_name_only_for_first_line() {
        let result = roles("Jane Doe\nJohn Smith\nSomething Else");

        assert_eq!(result[0].1, LineRole::Name);
        assert_eq!(result[1].1, LineRole::Unknown);
        assert_eq!(result[2].1, LineRole::Unknown);
    }

    #[test]
    fn test_first_line_with_title_is_not_name() {
        let result = roles("Managing Director\nJane Doe");

        assert_eq!(result[0].1, LineRole::Title);
        assert_eq!(result[1].1, LineRole::Unknown);
    }

    #[test]
    fn test_title_filled_once() {
        let text = "Jane Doe\nSenior Engineer\nProject Manager";
        assert_eq!(role_of(text, "Senior Engineer"), LineRole::Title);
        assert_eq!(role_of(text, "Project Manager"), LineRole::Unknown);
    }

    #[test]
    fn test_company_by_suffix_and_all_caps() {
        assert_eq!(role_of("Jane Doe\nGlobex GmbH", "Globex GmbH"), LineRole::Company);
        assert_eq!(role_of("Jane Doe\nINITECH", "INITECH"), LineRole::Company);
        // all-caps first line is the name
        assert_eq!(role_of("JANE DOE\nEngineer", "JANE DOE"), LineRole::Name);
    }

    #[test]
    fn test_company_filled_once() {
        let text = "Jane Doe\nAcme Inc\nGLOBEX";
        assert_eq!(role_of(text, "Acme Inc"), LineRole::Company);
        assert_eq!(role_of(text, "GLOBEX"), LineRole::Unknown);
    }

    #[test]
    fn test_all_caps_address_is_address() {
        let text = "Jane Doe\nACME\n500 OAK AVE";
        assert_eq!(role_of(text, "ACME"), LineRole::Company);
        assert_eq!(role_of(text, "500 OAK AVE"), LineRole::Address);
    }

    #[test]
    fn test_suite_line_is_address() {
        // unit designator plus number folds into the address
        let text = "Jane Doe\nSuite 400\n123 Main St";
        assert_eq!(role_of(text, "Suite 400"), LineRole::Address);
        assert_eq!(role_of(text, "123 Main St"), LineRole::Address);
    }

    #[test]
    fn test_unit_word_without_number_is_not_address() {
        assert_eq!(role_of("Jane Doe\nPenthouse Suite", "Penthouse Suite"), LineRole::Unknown);
    }

    #[test]
    fn test_address_continuation_requires_adjacency() {
        let text = "Jane Doe\n42 Elm Road\nSpringfield\nRandom Words";
        assert_eq!(role_of(text, "Springfield"), LineRole::Address);
        // continuation chains to the next adjacent line as well
        assert_eq!(role_of(text, "Random Words"), LineRole::Address);

        // a company line in between ends the address
        let text = "Jane Doe\n42 Elm Road\nAcme Inc\nSpringfield";
        assert_eq!(role_of(text, "Acme Inc"), LineRole::Company);
        assert_eq!(role_of(text, "Springfield"), LineRole::Unknown);
    }

    #[test]
    fn test_address_continuation_skips_claimed_positions() {
        // position 2 went to an extractor; adjacency counts unclaimed lines
        let lines = vec![
            Line { position: 0, text: "Jane Doe".to_string() },
            Line { position: 1, text: "42 Elm Road".to_string() },
            Line { position: 3, text: "Springfield".to_string() },
        ];
        let classification = RoleClassifier::default().classify(&lines);
        assert_eq!(classification.assignments[2].1, LineRole::Address);
    }

    #[test]
    fn test_title_wins_over_company_word() {
        let text = "Jane Doe\nProduct Group Manager\nAcme Corp";
        assert_eq!(role_of(text, "Product Group Manager"), LineRole::Title);
        assert_eq!(role_of(text, "Acme Corp"), LineRole::Company);

        let text = "Jane Doe\nDirector, Acme Co\nGlobex Inc";
        assert_eq!(role_of(text, "Director, Acme Co"), LineRole::Title);
        assert_eq!(role_of(text, "Globex Inc"), LineRole::Company);
    }

    #[test]
    fn test_company_suffix_after_title_filled() {
        // title slot taken, so a second title-and-suffix line is the company
        let text = "Jane Doe\nSenior Engineer\nPartner Holdings";
        assert_eq!(role_of(text, "Partner Holdings"), LineRole::Company);
    }

    #[test]
    fn test_european_address() {
        let text = "Jan Kowalski\nul. Długa 5\n00-001 Warszawa";
        assert_eq!(role_of(text, "ul. Długa 5"), LineRole::Address);
        assert_eq!(role_of(text, "00-001 Warszawa"), LineRole::Address);
    }

    #[test]
    fn test_empty_dictionaries_use_shape_rules_only() {
        let classifier = RoleClassifier::new(&Dictionaries::empty());
        let classification = classifier.classify(&normalize_lines(
            "Jane Doe\nSenior Engineer\nACME\nSpringfield, IL 62704",
        ));
        let result: Vec<LineRole> = classification.assignments.iter().map(|(_, r)| *r).collect();

        assert_eq!(
            result,
            vec![LineRole::Name, LineRole::Unknown, LineRole::Company, LineRole::Address]
        );
    }

    #[test]
    fn test_classification_accessors() {
        let classification = RoleClassifier::default()
            .classify(&normalize_lines("Jane Doe\n1 Market Street\nSan Francisco, CA 94105"));

        assert_eq!(classification.first(LineRole::Name).unwrap().text, "Jane Doe");
        assert_eq!(classification.all(LineRole::Address).count(), 2);
        assert!(classification.first(LineRole::Title).is_none());
    }
}
