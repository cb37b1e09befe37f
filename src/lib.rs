//! token-sync - Reconcile design-document color tokens with a colors.json
//!
//! A token document keeps its colors under `root.tokens` (keyed by ID) and
//! `root.tokensIndex` (display order). token-sync either merges a flat
//! name => color mapping into that collection, keeping the IDs of tokens it
//! updates, or replaces the collection outright.

pub mod domain;
pub mod storage;
pub mod cli;

mod error;
mod sync;

pub use domain::{
    Color, ColorAdapter, ColorToken, IdGenerator, MergeSummary, ReplaceSummary, TokenId,
};
pub use error::SyncError;
pub use storage::{ColorMapping, TokenDocument};
pub use sync::TokenSync;
