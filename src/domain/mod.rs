//! Domain models for token-sync
//!
//! Contains the core reconciliation logic without any I/O concerns.

mod color;
mod id;
mod reconcile;
mod token;

pub use color::{Color, ColorAdapter, ColorError, CssColorAdapter};
pub use id::{IdGenerator, SequentialIds, TokenId, UuidGenerator};
pub use reconcile::{
    merge_tokens, replace_tokens, MergeResult, MergeSummary, ReplaceResult, ReplaceSummary,
};
pub use token::{ColorToken, TokenRecord, COLOR_TOKEN_CLASS};
