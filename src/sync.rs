//! Merge and replace operations
//!
//! Both operations are all-or-nothing: the document is validated, the input
//! colors and the existing tokens are normalized, and only then is a new
//! document built. Any failure returns an error and no document.

use serde_json::Value;

use crate::domain::{
    merge_tokens, replace_tokens, ColorAdapter, ColorToken, CssColorAdapter, IdGenerator,
    MergeSummary, ReplaceSummary, UuidGenerator,
};
use crate::error::SyncError;
use crate::storage::{ColorMapping, TokenDocument};

/// Reconciliation engine with its ID source and color adapter
pub struct TokenSync<G = UuidGenerator, C = CssColorAdapter> {
    ids: G,
    colors: C,
}

impl TokenSync {
    /// Random UUIDs and CSS color syntax
    pub fn new() -> Self {
        Self {
            ids: UuidGenerator,
            colors: CssColorAdapter,
        }
    }
}

impl Default for TokenSync {
    fn default() -> Self {
        Self::new()
    }
}

impl<G: IdGenerator, C: ColorAdapter> TokenSync<G, C> {
    pub fn with_parts(ids: G, colors: C) -> Self {
        Self { ids, colors }
    }

    /// Updates tokens whose names appear in `input` and appends the rest
    ///
    /// Matched tokens keep their IDs. No token is removed.
    pub fn merge(
        &mut self,
        document: Value,
        input: &ColorMapping,
    ) -> Result<(Value, MergeSummary), SyncError> {
        let (document, incoming) = self.prepare(document, input)?;
        let existing = document.color_tokens(&self.colors)?;

        let result = merge_tokens(existing, incoming);
        let updated = document.rebuild(&result.tokens, &self.colors);

        Ok((updated, result.summary))
    }

    /// Discards every token in the document and writes `input` in their place
    pub fn replace(
        &mut self,
        document: Value,
        input: &ColorMapping,
    ) -> Result<(Value, ReplaceSummary), SyncError> {
        let (document, incoming) = self.prepare(document, input)?;

        let discarded = match document.index_len() {
            Some(len) => len,
            None => document.color_token_count(),
        };

        let result = replace_tokens(discarded, incoming);
        let updated = document.rebuild(&result.tokens, &self.colors);

        Ok((updated, result.summary))
    }

    fn prepare(
        &mut self,
        document: Value,
        input: &ColorMapping,
    ) -> Result<(TokenDocument, Vec<ColorToken>), SyncError> {
        let document = TokenDocument::validate(document)?;

        if input.is_empty() {
            return Err(SyncError::MissingRequiredInput(
                "color mapping is empty".to_string(),
            ));
        }

        let incoming = input.read_tokens(&mut self.ids, &self.colors)?;
        Ok((document, incoming))
    }
}
