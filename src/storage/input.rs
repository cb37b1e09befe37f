//! Input color mappings
//!
//! The input is a flat JSON object of name => color text:
//!
//! ```json
//! { "primary": "rgb(0, 0, 0)", "accent": "#ff0000" }
//! ```
//!
//! Key order is preserved, and becomes the order in which new tokens are
//! appended to a document.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde_json::{Map, Value};

use crate::domain::{ColorAdapter, ColorError, ColorToken, IdGenerator};
use crate::error::SyncError;

/// A validated name => color text mapping
#[derive(Debug, Clone, PartialEq)]
pub struct ColorMapping {
    entries: Map<String, Value>,
}

impl ColorMapping {
    /// Accepts any JSON object; values are checked when tokens are read
    pub fn from_value(value: Value) -> Result<Self, SyncError> {
        match value {
            Value::Object(entries) => Ok(Self { entries }),
            other => Err(SyncError::MissingRequiredInput(format!(
                "color mapping must be a JSON object, got {}",
                kind_of(&other)
            ))),
        }
    }

    /// Loads a mapping from a colors.json file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read colors file: {}", path.display()))?;

        let value: Value = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse colors file: {}", path.display()))?;

        Ok(Self::from_value(value)?)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Normalizes every entry into a token with a fresh ID, in key order
    pub fn read_tokens(
        &self,
        ids: &mut dyn IdGenerator,
        colors: &dyn ColorAdapter,
    ) -> Result<Vec<ColorToken>, SyncError> {
        self.entries
            .iter()
            .map(|(name, raw)| {
                let text = raw.as_str().ok_or_else(|| {
                    SyncError::malformed_color(
                        name,
                        &raw.to_string(),
                        ColorError::Unrecognized(raw.to_string()),
                    )
                })?;

                let value = colors
                    .parse(text)
                    .map_err(|e| SyncError::malformed_color(name, text, e))?;

                Ok(ColorToken::new(ids.next_id(), name.as_str(), value))
            })
            .collect()
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
