//! Token documents
//!
//! A token document is a JSON object of the form:
//!
//! ```json
//! {
//!   "version": 1,
//!   "root": {
//!     "__class": "RootNode",
//!     "tokens": { "<id>": { "__class": "ColorTokenNode", "id": "<id>", "name": "primary", "value": "rgb(0, 0, 0)" } },
//!     "tokensIndex": ["<id>"]
//!   }
//! }
//! ```
//!
//! Only `root.tokens` and `root.tokensIndex` are ever rewritten. Every other
//! field, at the top level or inside `root`, is carried through untouched and
//! in its original position.

use serde_json::{Map, Value};
use thiserror::Error;

use crate::domain::{ColorAdapter, ColorToken, TokenId, TokenRecord, COLOR_TOKEN_CLASS};
use crate::error::SyncError;

/// `__class` marker of a document root
pub const ROOT_NODE_CLASS: &str = "RootNode";

const ROOT: &str = "root";
const VERSION: &str = "version";
const CLASS: &str = "__class";
const TOKENS: &str = "tokens";
const TOKENS_INDEX: &str = "tokensIndex";

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ShapeError {
    #[error("document is not a JSON object")]
    NotAnObject,

    #[error("document has no 'version' field")]
    MissingVersion,

    #[error("document has no 'root' object")]
    MissingRoot,

    #[error("document root has class {0:?}, expected \"RootNode\"")]
    WrongRootClass(Option<String>),

    #[error("'root.tokens' is not an object")]
    TokensNotAnObject,

    #[error("token node '{key}' is malformed: {reason}")]
    MalformedToken { key: String, reason: String },
}

/// A JSON value known to carry a `RootNode` root and a `version`
#[derive(Debug, Clone, PartialEq)]
pub struct TokenDocument {
    /// Top-level fields; `root` holds a placeholder while `root` below is live
    document: Map<String, Value>,
    root: Map<String, Value>,
}

impl TokenDocument {
    /// Checks the minimal document shape and takes ownership of the value
    pub fn validate(value: Value) -> Result<Self, ShapeError> {
        let mut document = match value {
            Value::Object(map) => map,
            _ => return Err(ShapeError::NotAnObject),
        };

        if !document.contains_key(VERSION) {
            return Err(ShapeError::MissingVersion);
        }

        let root = match document.get_mut(ROOT) {
            Some(Value::Object(root)) => root,
            _ => return Err(ShapeError::MissingRoot),
        };

        match root.get(CLASS) {
            Some(Value::String(class)) if class == ROOT_NODE_CLASS => {}
            Some(Value::String(class)) => {
                return Err(ShapeError::WrongRootClass(Some(class.clone())))
            }
            _ => return Err(ShapeError::WrongRootClass(None)),
        }

        if !matches!(root.get(TOKENS), None | Some(Value::Object(_))) {
            return Err(ShapeError::TokensNotAnObject);
        }

        let root = std::mem::take(root);
        Ok(Self { document, root })
    }

    /// Length of the current `root.tokensIndex`, if the document has one
    pub fn index_len(&self) -> Option<usize> {
        self.root
            .get(TOKENS_INDEX)
            .and_then(Value::as_array)
            .map(Vec::len)
    }

    fn token_nodes(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.root
            .get(TOKENS)
            .and_then(Value::as_object)
            .into_iter()
            .flat_map(|tokens| tokens.iter())
    }

    fn color_nodes(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.token_nodes()
            .filter(|(_, node)| node.get(CLASS).and_then(Value::as_str) == Some(COLOR_TOKEN_CLASS))
    }

    /// Number of `ColorTokenNode` entries in `root.tokens`, valid or not
    pub fn color_token_count(&self) -> usize {
        self.color_nodes().count()
    }

    /// Reads the color tokens out of `root.tokens`
    ///
    /// Nodes of any other class are ignored. A node without an `id` field
    /// is identified by its key in the map.
    pub fn color_tokens(&self, colors: &dyn ColorAdapter) -> Result<Vec<ColorToken>, SyncError> {
        let mut tokens = Vec::new();

        for (key, node) in self.color_nodes() {
            let record: TokenRecord =
                serde_json::from_value(node.clone()).map_err(|e| ShapeError::MalformedToken {
                    key: key.clone(),
                    reason: e.to_string(),
                })?;

            let (name, value) = (record.name.clone(), record.value.clone());
            let token = record
                .into_token(|| TokenId::new(key.as_str()), colors)
                .map_err(|e| SyncError::malformed_color(&name, &value, e))?;
            tokens.push(token);
        }

        Ok(tokens)
    }

    /// Builds a new document whose token map and index come from `tokens`
    ///
    /// The index is the key order of the rebuilt map, so it never holds a
    /// duplicate or an ID missing from the map.
    pub fn rebuild(&self, tokens: &[ColorToken], colors: &dyn ColorAdapter) -> Value {
        let mut nodes = Map::new();
        for token in tokens {
            nodes.insert(token.id.to_string(), token.to_json(colors));
        }

        let index = nodes.keys().cloned().map(Value::String).collect();

        let mut root = self.root.clone();
        root.insert(TOKENS.to_string(), Value::Object(nodes));
        root.insert(TOKENS_INDEX.to_string(), Value::Array(index));

        let mut document = self.document.clone();
        document.insert(ROOT.to_string(), Value::Object(root));
        Value::Object(document)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Color, CssColorAdapter};
    use serde_json::json;

    fn sample() -> Value {
        json!({
            "version": 7,
            "meta": { "author": "someone" },
            "root": {
                "__class": "RootNode",
                "children": [1, 2, 3],
                "tokens": {
                    "A": { "__class": "ColorTokenNode", "id": "A", "name": "primary", "value": "rgb(0, 0, 0)" },
                    "G": { "__class": "GradientTokenNode", "id": "G", "stops": [] },
                    "B": { "__class": "ColorTokenNode", "id": "B", "name": "accent", "value": "#ff0000" }
                },
                "tokensIndex": ["A", "G", "B"],
                "zoom": 1.5
            },
            "trailer": true
        })
    }

    #[test]
    fn validate_accepts_token_document() {
        let doc = TokenDocument::validate(sample()).unwrap();
        assert_eq!(doc.index_len(), Some(3));
        assert_eq!(doc.color_token_count(), 2);
    }

    #[test]
    fn validate_rejects_bad_shapes() {
        assert_eq!(
            TokenDocument::validate(json!([1, 2])).unwrap_err(),
            ShapeError::NotAnObject
        );
        assert_eq!(
            TokenDocument::validate(json!({ "root": { "__class": "RootNode" } })).unwrap_err(),
            ShapeError::MissingVersion
        );
        assert_eq!(
            TokenDocument::validate(json!({ "version": 1 })).unwrap_err(),
            ShapeError::MissingRoot
        );
        assert_eq!(
            TokenDocument::validate(json!({ "version": 1, "root": "nope" })).unwrap_err(),
            ShapeError::MissingRoot
        );
        assert_eq!(
            TokenDocument::validate(json!({ "version": 1, "root": {} })).unwrap_err(),
            ShapeError::WrongRootClass(None)
        );
        assert_eq!(
            TokenDocument::validate(json!({ "version": 1, "root": { "__class": "FrameNode" } }))
                .unwrap_err(),
            ShapeError::WrongRootClass(Some("FrameNode".to_string()))
        );
        assert_eq!(
            TokenDocument::validate(json!({
                "version": 1,
                "root": { "__class": "RootNode", "tokens": [] }
            }))
            .unwrap_err(),
            ShapeError::TokensNotAnObject
        );
    }

    #[test]
    fn null_version_still_counts_as_present() {
        let doc = TokenDocument::validate(json!({
            "version": null,
            "root": { "__class": "RootNode" }
        }))
        .unwrap();
        assert_eq!(doc.index_len(), None);
        assert_eq!(doc.rebuild(&[], &CssColorAdapter)["version"], Value::Null);
    }

    #[test]
    fn color_tokens_skip_other_classes() {
        let doc = TokenDocument::validate(sample()).unwrap();
        let tokens = doc.color_tokens(&CssColorAdapter).unwrap();

        let names: Vec<_> = tokens.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["primary", "accent"]);
        assert_eq!(tokens[1].id, TokenId::new("B"));
        assert_eq!(tokens[1].value, Color::rgb(255, 0, 0));
    }

    #[test]
    fn color_tokens_fall_back_to_map_key() {
        let doc = TokenDocument::validate(json!({
            "version": 1,
            "root": {
                "__class": "RootNode",
                "tokens": { "K": { "__class": "ColorTokenNode", "name": "x", "value": "red" } }
            }
        }))
        .unwrap();

        let tokens = doc.color_tokens(&CssColorAdapter).unwrap();
        assert_eq!(tokens[0].id, TokenId::new("K"));
    }

    #[test]
    fn color_tokens_missing_map_is_empty() {
        let doc = TokenDocument::validate(json!({
            "version": 1,
            "root": { "__class": "RootNode" }
        }))
        .unwrap();

        assert!(doc.color_tokens(&CssColorAdapter).unwrap().is_empty());
    }

    #[test]
    fn color_tokens_report_bad_values() {
        let doc = TokenDocument::validate(json!({
            "version": 1,
            "root": {
                "__class": "RootNode",
                "tokens": { "A": { "__class": "ColorTokenNode", "id": "A", "name": "x", "value": "bogus" } }
            }
        }))
        .unwrap();

        let err = doc.color_tokens(&CssColorAdapter).unwrap_err();
        assert!(matches!(err, SyncError::MalformedColorInput { ref name, .. } if name == "x"));
    }

    #[test]
    fn color_tokens_report_malformed_nodes() {
        let doc = TokenDocument::validate(json!({
            "version": 1,
            "root": {
                "__class": "RootNode",
                "tokens": { "A": { "__class": "ColorTokenNode", "id": "A", "value": "red" } }
            }
        }))
        .unwrap();

        let err = doc.color_tokens(&CssColorAdapter).unwrap_err();
        assert!(matches!(
            err,
            SyncError::InvalidDocumentShape(ShapeError::MalformedToken { ref key, .. }) if key == "A"
        ));
    }

    #[test]
    fn rebuild_rewrites_tokens_and_index_only() {
        let original = sample();
        let doc = TokenDocument::validate(original.clone()).unwrap();

        let tokens = vec![
            ColorToken::new(TokenId::new("B"), "accent", Color::rgb(1, 2, 3)),
            ColorToken::new(TokenId::new("N"), "new", Color::rgba(0, 0, 0, 0.5)),
        ];
        let rebuilt = doc.rebuild(&tokens, &CssColorAdapter);

        assert_eq!(
            rebuilt["root"]["tokens"],
            json!({
                "B": { "__class": "ColorTokenNode", "id": "B", "name": "accent", "value": "rgb(1, 2, 3)" },
                "N": { "__class": "ColorTokenNode", "id": "N", "name": "new", "value": "rgba(0, 0, 0, 0.5)" }
            })
        );
        assert_eq!(rebuilt["root"]["tokensIndex"], json!(["B", "N"]));

        for field in ["version", "meta", "trailer"] {
            assert_eq!(rebuilt[field], original[field]);
        }
        for field in ["__class", "children", "zoom"] {
            assert_eq!(rebuilt["root"][field], original["root"][field]);
        }
    }

    #[test]
    fn rebuild_preserves_field_order() {
        let original = sample();
        let doc = TokenDocument::validate(original.clone()).unwrap();
        let rebuilt = doc.rebuild(&[], &CssColorAdapter);

        let keys = |v: &Value| v.as_object().unwrap().keys().cloned().collect::<Vec<_>>();
        assert_eq!(keys(&rebuilt), keys(&original));
        assert_eq!(keys(&rebuilt["root"]), keys(&original["root"]));
    }

    #[test]
    fn rebuild_index_matches_map_keys_without_duplicates() {
        let doc = TokenDocument::validate(sample()).unwrap();
        let tokens = vec![
            ColorToken::new(TokenId::new("X"), "one", Color::rgb(1, 1, 1)),
            ColorToken::new(TokenId::new("Y"), "two", Color::rgb(2, 2, 2)),
            ColorToken::new(TokenId::new("X"), "three", Color::rgb(3, 3, 3)),
        ];

        let rebuilt = doc.rebuild(&tokens, &CssColorAdapter);
        let map_keys: Vec<Value> = rebuilt["root"]["tokens"]
            .as_object()
            .unwrap()
            .keys()
            .cloned()
            .map(Value::String)
            .collect();

        assert_eq!(rebuilt["root"]["tokensIndex"], Value::Array(map_keys));
        assert_eq!(rebuilt["root"]["tokensIndex"], json!(["X", "Y"]));
    }

    #[test]
    fn color_token_count_does_not_parse_values() {
        let doc = TokenDocument::validate(json!({
            "version": 1,
            "root": {
                "__class": "RootNode",
                "tokens": {
                    "A": { "__class": "ColorTokenNode", "id": "A", "name": "a", "value": "color(display-p3 1 0 0)" },
                    "B": { "__class": "ColorTokenNode", "id": "B" },
                    "G": { "__class": "GradientTokenNode", "id": "G" }
                }
            }
        }))
        .unwrap();

        assert_eq!(doc.color_token_count(), 2);
        assert!(doc.color_tokens(&CssColorAdapter).is_err());
    }

    #[test]
    fn rebuild_with_same_tokens_keeps_document() {
        let original = sample();
        let doc = TokenDocument::validate(original.clone()).unwrap();
        let tokens = doc.color_tokens(&CssColorAdapter).unwrap();

        let rebuilt = doc.rebuild(&tokens, &CssColorAdapter);
        assert_eq!(rebuilt["meta"], original["meta"]);
        assert_eq!(rebuilt["root"]["tokensIndex"], json!(["A", "B"]));
        assert_eq!(rebuilt["root"]["tokens"]["B"]["value"], json!("rgb(255, 0, 0)"));
    }
}
