//! Configuration structures for the card parser and its outputs.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::card::assembler::DEFAULT_ADDRESS_SEPARATOR;
use crate::card::rules::phone::{MAX_PHONE_DIGITS, MIN_PHONE_DIGITS};
use crate::card::rules::Dictionaries;
use crate::error::{BizcardError, Result};

/// Main configuration for bizcard.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BizcardConfig {
    /// Parser configuration.
    pub parser: ParserConfig,

    /// Output configuration.
    pub output: OutputConfig,
}

/// Card parser configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    /// Keyword dictionaries for classification.
    pub dictionaries: Dictionaries,

    /// Fewest digits accepted as a phone number.
    pub min_phone_digits: usize,

    /// Most digits accepted as a phone number.
    pub max_phone_digits: usize,

    /// Separator placed between the lines of a multi-line address.
    pub address_separator: String,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            dictionaries: Dictionaries::default(),
            min_phone_digits: MIN_PHONE_DIGITS,
            max_phone_digits: MAX_PHONE_DIGITS,
            address_separator: DEFAULT_ADDRESS_SEPARATOR.to_string(),
        }
    }
}

/// Output formatting configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// `strftime` format for the "Date Added" column of exported sheets.
    pub date_format: String,

    /// Output format used when none is given: "json", "csv" or "text".
    pub default_format: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            date_format: "%Y-%m-%d %H:%M".to_string(),
            default_format: "json".to_string(),
        }
    }
}

impl BizcardConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Check value ranges and dictionaries.
    pub fn validate(&self) -> Result<()> {
        let parser = &self.parser;

        if parser.min_phone_digits == 0 {
            return Err(BizcardError::Config(
                "parser.min_phone_digits must be at least 1".to_string(),
            ));
        }
        if parser.min_phone_digits > parser.max_phone_digits {
            return Err(BizcardError::Config(format!(
                "parser.min_phone_digits ({}) exceeds parser.max_phone_digits ({})",
                parser.min_phone_digits, parser.max_phone_digits
            )));
        }

        parser.dictionaries.validate()?;

        if !matches!(self.output.default_format.as_str(), "json" | "csv" | "text") {
            return Err(BizcardError::Config(format!(
                "unknown output.default_format: {}",
                self.output.default_format
            )));
        }

        Ok(())
    }

    /// Default location of the configuration file under `config_dir`.
    pub fn default_path(config_dir: &Path) -> PathBuf {
        config_dir.join("bizcard").join("config.json")
    }
}
