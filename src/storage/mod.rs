//! # Storage Layer
//!
//! The document boundary and everything that touches the filesystem.
//!
//! ## Files
//!
//! | Data | Format | Location |
//! |------|--------|----------|
//! | Token document | JSON, `root.tokens` + `root.tokensIndex` | any path |
//! | Input colors | Flat JSON object, name => color text | any path |
//! | Config | TOML | `~/.config/token-sync/config.toml` or `$TOKEN_SYNC_CONFIG` |
//!
//! ## Write Safety
//!
//! - Documents are written to a temp file under an `fs2` lock, then renamed
//! - An invalid document is rejected before anything is written
//!
//! ## Key Types
//!
//! - [`TokenDocument`] - Validated document; extracts and rebuilds tokens
//! - [`ColorMapping`] - Input colors; reads them into tokens
//! - [`Config`] - User configuration

mod config;
mod document;
mod file;
mod input;

pub use config::{Config, ConfigError, OutputFormat, CONFIG_ENV};
pub use document::{ShapeError, TokenDocument, ROOT_NODE_CLASS};
pub use file::{
    backup_file, backup_path, read_json, to_pretty_json, write_document, WriteOptions,
};
pub use input::ColorMapping;
