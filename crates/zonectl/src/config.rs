//! CLI configuration — thin wrapper around `zonectl_config` shared types.
//!
//! Re-exports the shared types and resolves the effective settings for a
//! run: CLI flags first, then the config file and `ZONECTL_*` environment,
//! then built-in defaults.

use std::path::PathBuf;

use clap::ValueEnum;

use crate::cli::{ColorMode, GlobalOpts, OutputFormat};
use crate::error::CliError;

// ── Re-exports from shared crate ────────────────────────────────────

pub use zonectl_config::{Config, config_path, load_config_from, save_config_to};

// ── Effective settings ──────────────────────────────────────────────

/// Everything a command handler needs from flags and config.
#[derive(Debug)]
pub struct Settings {
    pub output: OutputFormat,
    pub color: ColorMode,
    pub quiet: bool,
    pub config: Config,
    pub config_path: PathBuf,
}

impl Settings {
    /// Load the config file (from `--config` or the platform path) and
    /// layer the global flags over it.
    pub fn resolve(global: &GlobalOpts) -> Result<Self, CliError> {
        let config_path = global.config.clone().unwrap_or_else(config_path);
        let config = load_config_from(&config_path)?;

        let output = global
            .output
            .or_else(|| OutputFormat::from_str(&config.defaults.output, true).ok())
            .unwrap_or(OutputFormat::Table);
        let color = global
            .color
            .or_else(|| ColorMode::from_str(&config.defaults.color, true).ok())
            .unwrap_or(ColorMode::Auto);

        tracing::debug!(path = %config_path.display(), ?output, ?color, "resolved settings");
        Ok(Self {
            output,
            color,
            quiet: global.quiet,
            config,
            config_path,
        })
    }
}
