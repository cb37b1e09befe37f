//! Reading and writing document files
//!
//! Writes go to a temp file next to the target under an exclusive lock and
//! are then renamed over it, so an interrupted run never leaves a half
//! written document behind.

use std::fs::{self, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use fs2::FileExt;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::Value;

/// Reads and parses a JSON file
pub fn read_json(path: &Path) -> Result<Value> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read document: {}", path.display()))?;

    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse document: {}", path.display()))
}

/// Pretty-prints `value` with the given indent width
pub fn to_pretty_json(value: &Value, indent: usize) -> Result<Vec<u8>> {
    let indent = vec![b' '; indent];
    let formatter = PrettyFormatter::with_indent(&indent);
    let mut buf = Vec::new();
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value
        .serialize(&mut serializer)
        .context("Failed to serialize document")?;
    Ok(buf)
}

/// Path of the backup copy for `path`
pub fn backup_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".bak");
    path.with_file_name(name)
}

/// Copies `path` to its [`backup_path`], returning where the copy went
pub fn backup_file(path: &Path) -> Result<PathBuf> {
    let backup = backup_path(path);
    fs::copy(path, &backup)
        .with_context(|| format!("Failed to write backup: {}", backup.display()))?;
    Ok(backup)
}

/// Options for [`write_document`]
#[derive(Debug, Clone, Copy)]
pub struct WriteOptions {
    pub indent: usize,
}

impl Default for WriteOptions {
    fn default() -> Self {
        Self { indent: 2 }
    }
}

/// Atomically writes a document
pub fn write_document(path: &Path, value: &Value, options: WriteOptions) -> Result<()> {
    let bytes = to_pretty_json(value, options.indent)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    let mut temp_name = path.file_name().unwrap_or_default().to_os_string();
    temp_name.push(".tmp");
    let temp_path = path.with_file_name(temp_name);

    {
        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&temp_path)
            .with_context(|| format!("Failed to create temp file: {}", temp_path.display()))?;

        file.lock_exclusive()
            .context("Failed to acquire write lock on document")?;

        let mut writer = BufWriter::new(&file);
        writer.write_all(&bytes).context("Failed to write document")?;
        writer.flush().context("Failed to flush document")?;
    }

    fs::rename(&temp_path, path).with_context(|| {
        format!(
            "Failed to rename {} to {}",
            temp_path.display(),
            path.display()
        )
    })?;

    Ok(())
}
