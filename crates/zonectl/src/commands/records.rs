//! Stored record command handlers.

use std::io;

use tabled::Tabled;
use zonectl_core::{RecordPrinter, StoredRecordDescriptor, qualify};

use crate::cli::{OutputFormat, RecordsArgs, RecordsCommand};
use crate::config::Settings;
use crate::error::CliError;
use crate::output;

use super::util;

// ── Table row ───────────────────────────────────────────────────────

#[derive(Tabled)]
struct RecordRow {
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Type")]
    record_type: String,
    #[tabled(rename = "TTL")]
    ttl: u32,
    #[tabled(rename = "Data")]
    size: String,
}

impl From<&StoredRecordDescriptor> for RecordRow {
    fn from(d: &StoredRecordDescriptor) -> Self {
        Self {
            name: qualify(&d.name),
            record_type: format!("{} ({})", d.kind(), d.record_type),
            ttl: d.ttl,
            size: format!("{} B", d.raw_data.len()),
        }
    }
}

// ── Handler ─────────────────────────────────────────────────────────

pub fn handle(args: RecordsArgs, settings: &Settings) -> Result<(), CliError> {
    match args.command {
        RecordsCommand::Show(source) => {
            let path = util::records_path(&source, settings)?;
            let records = util::read_descriptors(&path)?;

            if settings.output == OutputFormat::Table {
                if !settings.quiet {
                    RecordPrinter::new(io::stdout().lock()).print_all(&records)?;
                }
                return Ok(());
            }
            let out = output::render_list(
                settings.output,
                &records,
                |d| RecordRow::from(d),
                |d| qualify(&d.name),
            );
            output::print_output(&out, settings.quiet);
            Ok(())
        }

        RecordsCommand::List(source) => {
            let path = util::records_path(&source, settings)?;
            let records = util::read_descriptors(&path)?;
            let out = output::render_list(
                settings.output,
                &records,
                |d| RecordRow::from(d),
                |d| qualify(&d.name),
            );
            output::print_output(&out, settings.quiet);
            Ok(())
        }
    }
}
