//! Main CLI application structure

use clap::{Parser, Subcommand};
use anyhow::Result;

use super::output::{Output, OutputFormat};
use super::sync_cmd::{self, SyncArgs};
use crate::storage::Config;

const COLORS_FORMAT: &str = "\
Color Tokens Format:

    <colors.json> is a simple map of key => value pairs:

    {
        \"primary\": \"rgb(0, 0, 0)\",
        \"accent\": \"rgb(255, 0, 0)\",
        ...
    }

    Values may be hex (#f00, #ff0000, #ff000080), rgb()/rgba(),
    hsl()/hsla() or CSS color names.";

#[derive(Parser)]
#[command(name = "token-sync")]
#[command(author, version, about = "Merge or replace the color tokens of a design document")]
#[command(after_help = COLORS_FORMAT)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format (defaults to the configured format, then text)
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Enable verbose output for debugging
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Replace all color tokens in document.json with the ones from colors.json
    #[command(after_help = COLORS_FORMAT)]
    Replace(SyncArgs),

    /// Merge the color tokens from colors.json into document.json
    ///
    /// New tokens are appended, and tokens with matching names are updated to
    /// their new values with their original IDs kept intact. No tokens are
    /// deleted.
    #[command(after_help = COLORS_FORMAT)]
    Merge(SyncArgs),
}

/// Main entry point for the CLI
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load()?;

    let format = cli.format.unwrap_or_else(|| config.default_format.into());
    let output = Output::new(format, cli.verbose);

    output.verbose("token-sync starting");
    if let Some(path) = Config::config_path() {
        output.verbose_ctx("config", &format!("Config file: {}", path.display()));
    }

    match cli.command {
        Commands::Replace(args) => sync_cmd::replace(&output, &config, &args)?,
        Commands::Merge(args) => sync_cmd::merge(&output, &config, &args)?,
    }

    output.verbose("Command completed successfully");
    Ok(())
}
