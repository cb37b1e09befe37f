//! Token identifiers
//!
//! IDs are opaque strings. Tokens read from a document keep whatever ID the
//! document gave them; tokens read from input get a fresh one from an
//! [`IdGenerator`].

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Opaque, stable identifier of a color token
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TokenId(String);

impl TokenId {
    /// Wraps an existing identifier
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TokenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TokenId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for TokenId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<TokenId> for String {
    fn from(id: TokenId) -> Self {
        id.0
    }
}

/// Source of fresh token identifiers
pub trait IdGenerator {
    fn next_id(&mut self) -> TokenId;
}

/// Random v4 UUIDs, the format design documents use for their nodes
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn next_id(&mut self) -> TokenId {
        TokenId(Uuid::new_v4().to_string())
    }
}

/// Deterministic IDs of the form `{prefix}-{n}`, starting at 1
#[derive(Debug, Clone)]
pub struct SequentialIds {
    prefix: String,
    next: u64,
}

impl SequentialIds {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: 1,
        }
    }
}

impl Default for SequentialIds {
    fn default() -> Self {
        Self::new("token")
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&mut self) -> TokenId {
        let id = TokenId(format!("{}-{}", self.prefix, self.next));
        self.next += 1;
        id
    }
}
