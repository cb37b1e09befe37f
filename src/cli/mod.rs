//! # Command-Line Interface
//!
//! User-facing commands and output formatting.
//!
//! ## Commands
//!
//! | Command | Purpose |
//! |---------|---------|
//! | `merge <colors.json> <document.json>` | Update matching tokens, append new ones |
//! | `replace <colors.json> <document.json>` | Swap the whole token collection |
//! | `help` | Usage and the colors.json format |
//!
//! ## Output Formats
//!
//! All commands support the `--format` flag:
//! - `text` (default) - Human-readable summary
//! - `json` - Machine-parseable JSON
//!
//! ## Verbose Mode
//!
//! Use `--verbose` (or `-v`) for debug output on stderr:
//! ```bash
//! token-sync --verbose merge colors.json document.json
//! ```
//!
//! ## Entry Point
//!
//! Call [`run()`] to parse arguments and execute the appropriate command.

mod app;
mod output;
mod sync_cmd;

pub use app::{Cli, Commands, run};
pub use output::{Output, OutputFormat};
pub use sync_cmd::SyncArgs;
