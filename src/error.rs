//! Errors surfaced by the merge and replace operations

use thiserror::Error;

use crate::domain::ColorError;
use crate::storage::ShapeError;

/// Why a merge or replace could not produce a document
///
/// Every variant is fatal: no partial document is ever returned.
#[derive(Debug, Error)]
pub enum SyncError {
    #[error("target document doesn't appear to be a token document")]
    InvalidDocumentShape(#[from] ShapeError),

    #[error("invalid color '{value}' for token '{name}'")]
    MalformedColorInput {
        name: String,
        value: String,
        #[source]
        source: ColorError,
    },

    #[error("missing required input: {0}")]
    MissingRequiredInput(String),
}

impl SyncError {
    pub(crate) fn malformed_color(name: &str, value: &str, source: ColorError) -> Self {
        Self::MalformedColorInput {
            name: name.to_string(),
            value: value.to_string(),
            source,
        }
    }
}
