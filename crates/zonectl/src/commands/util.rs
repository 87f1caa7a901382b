//! Shared helpers for command handlers.

use std::path::{Path, PathBuf};

use zonectl_core::StoredRecordDescriptor;

use crate::cli::SourceArgs;
use crate::config::Settings;
use crate::error::CliError;

/// Pick the descriptor file: `--from-file`, else the configured default.
pub fn records_path(source: &SourceArgs, settings: &Settings) -> Result<PathBuf, CliError> {
    source
        .from_file
        .clone()
        .or_else(|| settings.config.defaults.records_file.clone())
        .ok_or(CliError::NoRecordsFile)
}

/// Read a JSON array of stored record descriptors.
pub fn read_descriptors(path: &Path) -> Result<Vec<StoredRecordDescriptor>, CliError> {
    let contents = std::fs::read_to_string(path)?;
    let records: Vec<StoredRecordDescriptor> =
        serde_json::from_str(&contents).map_err(|source| CliError::InvalidRecords {
            path: path.to_path_buf(),
            source,
        })?;
    tracing::debug!(path = %path.display(), count = records.len(), "loaded record descriptors");
    Ok(records)
}
