//! WASM bindings for business card text parsing.
//!
//! This crate provides WebAssembly bindings for use in browsers and Node.js.
//! OCR itself runs on the JavaScript side; these bindings turn its text
//! output into contacts.

use serde::Serialize;
use wasm_bindgen::prelude::*;

use bizcard_core::{
    BizcardConfig, BusinessCardParser, CardParser, ContactRecord, LineAssignment, ParserConfig,
};

/// Initialize panic hook for better error messages in console.
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Version information.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Parse business card text with the default dictionaries.
///
/// Returns a contact object; unrecognized fields are empty strings.
#[wasm_bindgen]
pub fn parse_business_card(text: &str) -> Result<JsValue, JsValue> {
    to_js(&bizcard_core::parse_business_card(text))
}

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Contact plus the per-line roles behind it.
#[derive(Serialize)]
struct ParseDetails {
    record: ContactRecord,
    lines: Vec<LineAssignment>,
    website: Option<String>,
    warnings: Vec<String>,
}

/// Card parser class for browser use.
#[wasm_bindgen(js_name = CardParser)]
pub struct WasmCardParser {
    parser: BusinessCardParser,
}

#[wasm_bindgen(js_class = CardParser)]
impl WasmCardParser {
    /// Create a parser, optionally from a JSON parser configuration.
    ///
    /// Missing keys fall back to defaults, so `{"dictionaries": {"title_keywords": ["boss"]}}`
    /// replaces only the title keywords.
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: Option<String>) -> Result<WasmCardParser, JsValue> {
        let parser = match config_json {
            Some(json) => {
                let parser_config: ParserConfig = serde_json::from_str(&json)
                    .map_err(|e| JsValue::from_str(&format!("Invalid parser config: {}", e)))?;
                let config = BizcardConfig {
                    parser: parser_config,
                    ..BizcardConfig::default()
                };
                config
                    .validate()
                    .map_err(|e| JsValue::from_str(&e.to_string()))?;
                BusinessCardParser::from_config(&config.parser)
            }
            None => BusinessCardParser::new(),
        };

        Ok(Self { parser })
    }

    /// Parse card text into a contact object.
    #[wasm_bindgen]
    pub fn parse(&self, text: &str) -> Result<JsValue, JsValue> {
        to_js(&self.parser.parse_record(text))
    }

    /// Parse card text and include line roles, website and warnings.
    #[wasm_bindgen]
    pub fn parse_with_details(&self, text: &str) -> Result<JsValue, JsValue> {
        let result = self.parser.parse(text);

        to_js(&ParseDetails {
            record: result.record,
            lines: result.lines,
            website: result.website,
            warnings: result.warnings,
        })
    }
}

/// OCR result from browser-side processing, accumulated line by line.
#[wasm_bindgen]
pub struct OcrResultJs {
    lines: Vec<String>,
}

#[wasm_bindgen]
impl OcrResultJs {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self { lines: Vec::new() }
    }

    /// Add one recognized text line.
    #[wasm_bindgen]
    pub fn add_line(&mut self, text: &str) {
        self.lines.push(text.to_string());
    }

    /// Get the full text.
    #[wasm_bindgen]
    pub fn get_text(&self) -> String {
        self.lines.join("\n")
    }

    /// Parse the accumulated text with the default dictionaries.
    #[wasm_bindgen]
    pub fn parse_card(&self) -> Result<JsValue, JsValue> {
        parse_business_card(&self.get_text())
    }
}

impl Default for OcrResultJs {
    fn default() -> Self {
        Self::new()
    }
}
