//! CLI error types with miette diagnostics.
//!
//! Maps parser, config, and I/O failures into user-facing errors with
//! actionable help text.

use std::net::AddrParseError;
use std::num::ParseIntError;
use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

use zonectl_config::ConfigError;
use zonectl_core::{CoreError, Field, ParseError, RecordKind};

/// Process exit codes.
pub mod exit_code {
    pub const GENERAL: i32 = 1;
    pub const USAGE: i32 = 2;
}

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    // ── Record parsing ───────────────────────────────────────────────
    #[error("Missing required argument <{field}> at position {position} for {kind} record")]
    #[diagnostic(
        code(zonectl::missing_argument),
        help("Usage: zonectl record {command} {usage}")
    )]
    MissingArgument {
        kind: RecordKind,
        command: String,
        field: Field,
        position: usize,
        usage: String,
    },

    #[error("Invalid domain name for <{field}>: '{token}'")]
    #[diagnostic(
        code(zonectl::invalid_name),
        help("{reason}\nUsage: zonectl record {command} {usage}")
    )]
    InvalidName {
        command: String,
        field: Field,
        token: String,
        reason: String,
        usage: String,
    },

    #[error("Invalid IP address for <{field}>: '{token}'")]
    #[diagnostic(
        code(zonectl::invalid_address),
        help(
            "Use a literal IPv4 or IPv6 address; host names are not resolved.\n\
             Usage: zonectl record {command} {usage}"
        )
    )]
    InvalidAddress {
        command: String,
        field: Field,
        token: String,
        usage: String,
        #[source]
        source: AddrParseError,
    },

    #[error("Invalid number for <{field}>: '{token}'")]
    #[diagnostic(
        code(zonectl::invalid_number),
        help("Expected an unsigned integer that fits the field.\nUsage: zonectl record {command} {usage}")
    )]
    InvalidNumber {
        command: String,
        field: Field,
        token: String,
        usage: String,
        #[source]
        source: ParseIntError,
    },

    #[error(transparent)]
    #[diagnostic(
        code(zonectl::encode),
        help("A record body is limited to 65535 bytes; shorten the TXT text.")
    )]
    Encode(#[from] CoreError),

    // ── Stored records ───────────────────────────────────────────────
    #[error("No record file given")]
    #[diagnostic(
        code(zonectl::no_records_file),
        help(
            "Pass --from-file <PATH>, or set a default with:\n\
             zonectl config set records_file <PATH>"
        )
    )]
    NoRecordsFile,

    #[error("Invalid record descriptors in {path}")]
    #[diagnostic(
        code(zonectl::invalid_records),
        help("Expected a JSON array of descriptors: name, type, dclass, ttl, and hex-encoded rawData.")
    )]
    InvalidRecords {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    // ── Configuration ────────────────────────────────────────────────
    #[error("Invalid value for {field}: {reason}")]
    #[diagnostic(code(zonectl::validation))]
    Validation { field: String, reason: String },

    #[error("Unknown config key '{key}'")]
    #[diagnostic(code(zonectl::unknown_key), help("Valid keys: {valid}"))]
    UnknownConfigKey { key: String, valid: String },

    #[error(transparent)]
    #[diagnostic(code(zonectl::config))]
    Config(Box<figment::Error>),

    #[error("Failed to write config: {0}")]
    #[diagnostic(code(zonectl::config_write))]
    ConfigWrite(#[from] toml::ser::Error),

    // ── IO / Serialization ────────────────────────────────────────────
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CliError {
    /// Map this error to an exit code for process termination.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::MissingArgument { .. }
            | Self::InvalidName { .. }
            | Self::InvalidAddress { .. }
            | Self::InvalidNumber { .. }
            | Self::NoRecordsFile
            | Self::Validation { .. }
            | Self::UnknownConfigKey { .. } => exit_code::USAGE,
            _ => exit_code::GENERAL,
        }
    }

    /// Attach the record kind's usage line to a parser error.
    pub fn from_parse(kind: RecordKind, err: ParseError) -> Self {
        let command = kind.to_string().to_lowercase();
        let usage = kind.usage();
        match err {
            ParseError::MissingArgument { field, position } => Self::MissingArgument {
                kind,
                command,
                field,
                position,
                usage,
            },
            ParseError::InvalidName {
                field,
                token,
                reason,
            } => Self::InvalidName {
                command,
                field,
                token,
                reason,
                usage,
            },
            ParseError::InvalidAddress {
                field,
                token,
                source,
            } => Self::InvalidAddress {
                command,
                field,
                token,
                usage,
                source,
            },
            ParseError::InvalidNumber {
                field,
                token,
                source,
            } => Self::InvalidNumber {
                command,
                field,
                token,
                usage,
                source,
            },
        }
    }
}

// ── ConfigError → CliError mapping ───────────────────────────────────

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::Validation { field, reason } => Self::Validation { field, reason },
            ConfigError::UnknownKey { key } => Self::UnknownConfigKey {
                key,
                valid: zonectl_config::KEYS.join(", "),
            },
            ConfigError::Serialization(e) => Self::ConfigWrite(e),
            ConfigError::Figment(e) => Self::Config(e),
            ConfigError::Io(e) => Self::Io(e),
        }
    }
}
