//! Command dispatch: bridges CLI args -> codec calls -> output formatting.

pub mod config_cmd;
pub mod record;
pub mod records;
pub mod util;

use crate::cli::Command;
use crate::config::Settings;
use crate::error::CliError;

/// Dispatch a settings-bound command to the appropriate handler.
pub fn dispatch(cmd: Command, settings: &Settings) -> Result<(), CliError> {
    match cmd {
        Command::Record(args) => record::handle(args, settings),
        Command::Records(args) => records::handle(args, settings),
        Command::Config(args) => config_cmd::handle(args, settings),
        // Completions are handled before settings are loaded
        Command::Completions(_) => unreachable!(),
    }
}
