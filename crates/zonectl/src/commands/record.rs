//! Record command handler: positional tokens -> typed record -> descriptor.

use zonectl_core::RecordKind;

use crate::cli::{RecordArgs, RecordCommand, RecordTokens};
use crate::config::Settings;
use crate::error::CliError;
use crate::output;

fn split(command: RecordCommand) -> (RecordKind, RecordTokens) {
    match command {
        RecordCommand::A(t) => (RecordKind::A, t),
        RecordCommand::Cname(t) => (RecordKind::Cname, t),
        RecordCommand::Soa(t) => (RecordKind::Soa, t),
        RecordCommand::Mx(t) => (RecordKind::Mx, t),
        RecordCommand::Ns(t) => (RecordKind::Ns, t),
        RecordCommand::Txt(t) => (RecordKind::Txt, t),
        RecordCommand::Srv(t) => (RecordKind::Srv, t),
    }
}

// ── Handler ─────────────────────────────────────────────────────────

pub fn handle(args: RecordArgs, settings: &Settings) -> Result<(), CliError> {
    let (kind, RecordTokens { tokens }) = split(args.command);

    let record = kind
        .parse(&tokens)
        .map_err(|err| CliError::from_parse(kind, err))?;
    let descriptor = record.to_descriptor()?;

    let out = output::render_single(
        settings.output,
        &descriptor,
        |d| zonectl_core::render(std::slice::from_ref(d)),
        |d| d.name.clone(),
    );
    output::print_output(&out, settings.quiet);
    Ok(())
}
