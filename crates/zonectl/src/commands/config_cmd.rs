//! Config subcommand handlers.

use crate::cli::{ConfigArgs, ConfigCommand};
use crate::config::{self, Settings};
use crate::error::CliError;
use crate::output;

// ── Handler ─────────────────────────────────────────────────────────

pub fn handle(args: ConfigArgs, settings: &Settings) -> Result<(), CliError> {
    match args.command {
        ConfigCommand::Show => {
            let rendered = toml::to_string_pretty(&settings.config)?;
            output::print_output(&rendered, settings.quiet);
            Ok(())
        }

        ConfigCommand::Path => {
            output::print_output(&settings.config_path.display().to_string(), settings.quiet);
            Ok(())
        }

        ConfigCommand::Set { key, value } => {
            let mut cfg = settings.config.clone();
            cfg.set_value(&key, &value)?;
            config::save_config_to(&cfg, &settings.config_path)?;
            output::print_status(
                &format!("Set {key} in {}", settings.config_path.display()),
                settings.color,
                settings.quiet,
            );
            Ok(())
        }
    }
}
