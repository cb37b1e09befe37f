//! Token reconciliation
//!
//! Two modes turn the tokens already in a document ("existing") and the
//! tokens read from input ("incoming") into the list that gets written back:
//!
//! - **merge**: tokens are matched by exact name. A matched existing token
//!   keeps its ID and takes the incoming value; unmatched existing tokens pass
//!   through untouched; unmatched incoming tokens are appended in input order.
//!   Nothing is ever removed.
//! - **replace**: the incoming list wins wholesale.
//!
//! When several existing tokens share a name, each of them is matched (and
//! updated) independently. When several incoming tokens share a name, the
//! first one in input order wins and the rest are dropped.

use std::collections::HashSet;

use serde::Serialize;

use super::token::ColorToken;

/// Counts reported by a merge
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct MergeSummary {
    /// Existing tokens whose value was taken from input
    pub updated: usize,

    /// Existing tokens with no counterpart in input
    pub unchanged: usize,

    /// Input tokens appended as new
    pub added: usize,
}

impl MergeSummary {
    /// Number of tokens that were already in the document
    pub fn existing(&self) -> usize {
        self.updated + self.unchanged
    }
}

/// Counts reported by a replace
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ReplaceSummary {
    /// Tokens discarded from the document
    pub deleted: usize,

    /// Tokens written in their place
    pub added: usize,
}

/// Result of merging two token lists
#[derive(Debug)]
pub struct MergeResult {
    /// Existing tokens in original order, followed by new ones in input order
    pub tokens: Vec<ColorToken>,

    pub summary: MergeSummary,
}

/// Result of replacing a token list
#[derive(Debug)]
pub struct ReplaceResult {
    pub tokens: Vec<ColorToken>,

    pub summary: ReplaceSummary,
}

/// Merges `incoming` into `existing`, preserving the identity of matched tokens
pub fn merge_tokens(existing: Vec<ColorToken>, incoming: Vec<ColorToken>) -> MergeResult {
    let mut consumed: HashSet<String> = HashSet::new();
    let mut summary = MergeSummary::default();
    let mut tokens = Vec::with_capacity(existing.len() + incoming.len());

    for token in existing {
        match incoming.iter().find(|t| t.name == token.name) {
            Some(newer) => {
                consumed.insert(newer.name.clone());
                summary.updated += 1;
                tokens.push(token.with_value(newer.value));
            }
            None => {
                summary.unchanged += 1;
                tokens.push(token);
            }
        }
    }

    // Later incoming duplicates of an already appended name are dropped
    for token in incoming {
        if consumed.insert(token.name.clone()) {
            summary.added += 1;
            tokens.push(token);
        }
    }

    MergeResult { tokens, summary }
}

/// Replaces the whole collection with `incoming`
///
/// `discarded` is the number of tokens the document held before; it is only
/// reported, never used to filter anything.
pub fn replace_tokens(discarded: usize, incoming: Vec<ColorToken>) -> ReplaceResult {
    let summary = ReplaceSummary {
        deleted: discarded,
        added: incoming.len(),
    };

    ReplaceResult {
        tokens: incoming,
        summary,
    }
}
