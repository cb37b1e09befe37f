//! Merge and replace commands

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::Args;
use serde_json::Value;

use super::output::Output;
use crate::error::SyncError;
use crate::storage::{backup_file, read_json, write_document, ColorMapping, Config};
use crate::sync::TokenSync;

#[derive(Args, Debug)]
pub struct SyncArgs {
    /// Input colors (flat JSON map of name => color)
    pub colors: PathBuf,

    /// Target document, updated in place unless --output is given
    pub document: PathBuf,

    /// Write the updated document here instead
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Print the summary without writing anything
    #[arg(long)]
    pub dry_run: bool,

    /// Copy <document> to <document>.bak before writing (also with --output)
    #[arg(long)]
    pub backup: bool,
}

impl SyncArgs {
    fn check_paths(&self) -> Result<(), SyncError> {
        if self.colors.as_os_str().is_empty() {
            return Err(SyncError::MissingRequiredInput(
                "Missing input colors.json path.".to_string(),
            ));
        }
        if self.document.as_os_str().is_empty() {
            return Err(SyncError::MissingRequiredInput(
                "Missing target document.json path.".to_string(),
            ));
        }
        Ok(())
    }

    fn target(&self) -> &Path {
        self.output.as_deref().unwrap_or(&self.document)
    }
}

/// Loads both inputs; nothing is written if either is unusable
fn load_inputs(output: &Output, args: &SyncArgs) -> Result<(ColorMapping, Value)> {
    args.check_paths()?;

    output.verbose_ctx("input", &format!("Reading colors from {}", args.colors.display()));
    let colors = ColorMapping::load(&args.colors)?;
    output.verbose_ctx("input", &format!("Read {} colors", colors.len()));

    output.verbose_ctx("input", &format!("Reading document {}", args.document.display()));
    let document = read_json(&args.document)?;

    Ok((colors, document))
}

fn finish(
    output: &Output,
    config: &Config,
    args: &SyncArgs,
    document: &Value,
) -> Result<Option<PathBuf>> {
    if args.dry_run {
        output.verbose("Dry run, nothing written");
        return Ok(None);
    }

    if args.backup || config.backup {
        let backup = backup_file(&args.document)?;
        output.verbose_ctx("write", &format!("Backed up document to {}", backup.display()));
    }

    let options = config.write_options();
    let target = args.target();
    output.verbose_ctx(
        "write",
        &format!("Writing {} (indent {})", target.display(), options.indent),
    );
    write_document(target, document, options)?;

    Ok(Some(target.to_path_buf()))
}

fn written_message(written: Option<&Path>, args: &SyncArgs) -> String {
    match written {
        Some(path) => format!("Updated {}", path.display()),
        None => format!("Dry run: {} left unchanged", args.document.display()),
    }
}

pub fn merge(output: &Output, config: &Config, args: &SyncArgs) -> Result<()> {
    let (colors, document) = load_inputs(output, args)?;

    let (updated, summary) = TokenSync::new().merge(document, &colors)?;
    output.verbose_ctx(
        "merge",
        &format!(
            "{} updated, {} unchanged, {} added",
            summary.updated, summary.unchanged, summary.added
        ),
    );

    let written = finish(output, config, args, &updated)?;

    output.data(&serde_json::json!({
        "mode": "merge",
        "updated": summary.updated,
        "unchanged": summary.unchanged,
        "added": summary.added,
        "dry_run": args.dry_run,
        "written": written.as_ref().map(|p| p.display().to_string()),
    }));

    output.line("Summary of updates:");
    output.blank();
    output.line(&format!(
        "- {}/{} tokens will be updated",
        summary.updated,
        summary.existing()
    ));
    output.line(&format!("- {} new tokens will be added", summary.added));
    output.blank();
    output.success(&written_message(written.as_deref(), args));

    Ok(())
}

pub fn replace(output: &Output, config: &Config, args: &SyncArgs) -> Result<()> {
    let (colors, document) = load_inputs(output, args)?;

    let (updated, summary) = TokenSync::new().replace(document, &colors)?;
    output.verbose_ctx(
        "replace",
        &format!("{} deleted, {} added", summary.deleted, summary.added),
    );

    let written = finish(output, config, args, &updated)?;

    output.data(&serde_json::json!({
        "mode": "replace",
        "deleted": summary.deleted,
        "added": summary.added,
        "dry_run": args.dry_run,
        "written": written.as_ref().map(|p| p.display().to_string()),
    }));

    output.line("Summary of updates:");
    output.blank();
    output.line(&format!("- {} tokens will be deleted", summary.deleted));
    output.line(&format!("- {} tokens will be added", summary.added));
    output.blank();
    output.success(&written_message(written.as_deref(), args));

    Ok(())
}
