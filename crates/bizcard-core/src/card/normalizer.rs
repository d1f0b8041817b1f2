//! Line normalization for raw OCR text.

use serde::{Deserialize, Serialize};

use super::rules::patterns::LINE_BREAK;

/// Characters OCR engines leave at line edges: bullets, pipes, rules.
const EDGE_ARTIFACTS: &[char] = &[
    '•', '·', '●', '○', '▪', '■', '□', '◦', '‣', '∙', '|', '¦', '*', '~', '_',
    '\u{200B}', '\u{FEFF}',
];

/// A normalized, non-empty line of card text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Line {
    /// Zero-based position in the normalized line sequence.
    pub position: usize,
    /// Cleaned line content.
    pub text: String,
}

/// Split raw OCR text into cleaned, non-empty lines in original order.
pub fn normalize_lines(raw: &str) -> Vec<Line> {
    LINE_BREAK
        .split(raw)
        .map(clean_line)
        .filter(|text| !text.is_empty())
        .enumerate()
        .map(|(position, text)| Line { position, text })
        .collect()
}

/// Trim whitespace and edge artifacts, and collapse inner whitespace.
pub fn clean_line(raw: &str) -> String {
    raw.trim_matches(|c: char| c.is_whitespace() || EDGE_ARTIFACTS.contains(&c))
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}
