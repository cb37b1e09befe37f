//! Color tokens and their serialized record form

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use super::color::{Color, ColorAdapter, ColorError};
use super::id::TokenId;

/// `__class` marker of a color token node
pub const COLOR_TOKEN_CLASS: &str = "ColorTokenNode";

/// A named color with a stable identity
#[derive(Debug, Clone, PartialEq)]
pub struct ColorToken {
    pub id: TokenId,
    pub name: String,
    pub value: Color,
}

impl ColorToken {
    pub fn new(id: TokenId, name: impl Into<String>, value: Color) -> Self {
        Self {
            id,
            name: name.into(),
            value,
        }
    }

    /// Same identity and name, different value
    pub fn with_value(&self, value: Color) -> Self {
        Self {
            id: self.id.clone(),
            name: self.name.clone(),
            value,
        }
    }

    /// Serialized node stored under `root.tokens`
    pub fn to_json(&self, colors: &dyn ColorAdapter) -> Value {
        json!({
            "__class": COLOR_TOKEN_CLASS,
            "id": self.id,
            "name": self.name,
            "value": colors.serialize(&self.value),
        })
    }
}

/// A color token node as it appears in a document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenRecord {
    #[serde(rename = "__class")]
    pub class: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<TokenId>,

    pub name: String,

    pub value: String,
}

impl TokenRecord {
    /// Normalizes the record's value, keeping its ID (or `fallback_id` if it has none)
    pub fn into_token(
        self,
        fallback_id: impl FnOnce() -> TokenId,
        colors: &dyn ColorAdapter,
    ) -> Result<ColorToken, ColorError> {
        let value = colors.parse(&self.value)?;
        let id = self.id.unwrap_or_else(fallback_id);
        Ok(ColorToken::new(id, self.name, value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::CssColorAdapter;

    #[test]
    fn node_serializes_with_class_first() {
        let token = ColorToken::new(TokenId::new("A"), "primary", Color::rgb(10, 10, 10));
        let json = serde_json::to_string(&token.to_json(&CssColorAdapter)).unwrap();
        assert_eq!(
            json,
            r#"{"__class":"ColorTokenNode","id":"A","name":"primary","value":"rgb(10, 10, 10)"}"#
        );
    }

    #[test]
    fn record_into_token_keeps_id() {
        let record: TokenRecord = serde_json::from_value(json!({
            "__class": "ColorTokenNode",
            "id": "A",
            "name": "primary",
            "value": "#000"
        }))
        .unwrap();

        let token = record
            .into_token(|| TokenId::new("unused"), &CssColorAdapter)
            .unwrap();
        assert_eq!(token.id, TokenId::new("A"));
        assert_eq!(token.name, "primary");
        assert_eq!(token.value, Color::rgb(0, 0, 0));
    }

    #[test]
    fn record_without_id_uses_fallback() {
        let record: TokenRecord = serde_json::from_value(json!({
            "__class": "ColorTokenNode",
            "name": "primary",
            "value": "red"
        }))
        .unwrap();

        let token = record
            .into_token(|| TokenId::new("from-key"), &CssColorAdapter)
            .unwrap();
        assert_eq!(token.id, TokenId::new("from-key"));
    }

    #[test]
    fn record_with_bad_value_fails() {
        let record = TokenRecord {
            class: COLOR_TOKEN_CLASS.to_string(),
            id: Some(TokenId::new("A")),
            name: "primary".to_string(),
            value: "not a color".to_string(),
        };

        assert!(record
            .into_token(|| TokenId::new("unused"), &CssColorAdapter)
            .is_err());
    }

    #[test]
    fn with_value_keeps_identity() {
        let token = ColorToken::new(TokenId::new("A"), "primary", Color::rgb(0, 0, 0));
        let updated = token.with_value(Color::rgb(1, 2, 3));
        assert_eq!(updated.id, token.id);
        assert_eq!(updated.name, token.name);
        assert_eq!(updated.value, Color::rgb(1, 2, 3));
    }
}
