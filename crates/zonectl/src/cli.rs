//! Clap derive structures for the `zonectl` CLI.
//!
//! Defines the complete command tree, global flags, and shared types.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

// ── Top-Level CLI ────────────────────────────────────────────────────

/// zonectl -- build and inspect DNS zone records from the command line
#[derive(Debug, Parser)]
#[command(
    name = "zonectl",
    version,
    about = "Build and inspect DNS zone records from the command line",
    long_about = "Turns positional arguments into typed DNS resource records and renders\n\
        stored record descriptors (including CERT payloads) as readable reports.",
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Command,
}

// ── Global Options ───────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// Config file to use instead of the platform default
    #[arg(long, env = "ZONECTL_CONFIG", global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Output format (overrides config)
    #[arg(long, short = 'o', env = "ZONECTL_OUTPUT", global = true)]
    pub output: Option<OutputFormat>,

    /// When to use color output (overrides config)
    #[arg(long, global = true)]
    pub color: Option<ColorMode>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,
}

// ── Output & Color Enums ─────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable report or table (default)
    Table,
    /// Pretty-printed JSON
    Json,
    /// Compact single-line JSON
    JsonCompact,
    /// YAML
    Yaml,
    /// Plain text, one record name per line (scripting)
    Plain,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorMode {
    /// Auto-detect (color if terminal is interactive)
    Auto,
    /// Always emit color codes
    Always,
    /// Never emit color codes
    Never,
}

// ── Top-Level Command Enum ───────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Build a resource record from positional arguments
    #[command(alias = "rec")]
    Record(RecordArgs),

    /// Render stored record descriptors
    #[command(alias = "rr")]
    Records(RecordsArgs),

    /// Manage CLI configuration
    Config(ConfigArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

// ── Record ───────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct RecordArgs {
    #[command(subcommand)]
    pub command: RecordCommand,
}

#[derive(Debug, Subcommand)]
pub enum RecordCommand {
    /// Address record
    #[command(override_usage = "zonectl record a <name> <address> <ttl>")]
    A(RecordTokens),

    /// Canonical name (alias) record
    #[command(override_usage = "zonectl record cname <name> <alias> <ttl>")]
    Cname(RecordTokens),

    /// Start of authority record
    #[command(
        override_usage = "zonectl record soa <name> <primary-source-domain> <responsible-email> \
                          <serial> <ttl> [refresh] [retry] [expire] [minimum]"
    )]
    Soa(RecordTokens),

    /// Mail exchange record
    #[command(override_usage = "zonectl record mx <name> <exchange> <ttl> [preference]")]
    Mx(RecordTokens),

    /// Name server record
    #[command(override_usage = "zonectl record ns <name> <target> <ttl>")]
    Ns(RecordTokens),

    /// Text record
    #[command(override_usage = "zonectl record txt <name> <text> <ttl>")]
    Txt(RecordTokens),

    /// Service locator record
    #[command(override_usage = "zonectl record srv <name> <target> <port> <priority> <weight> <ttl>")]
    Srv(RecordTokens),
}

/// Positional tokens, validated by the record parser rather than by clap.
#[derive(Debug, Args)]
pub struct RecordTokens {
    /// Record fields in positional order
    #[arg(
        value_name = "TOKEN",
        num_args = 0..,
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    pub tokens: Vec<String>,
}

// ── Records ──────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct RecordsArgs {
    #[command(subcommand)]
    pub command: RecordsCommand,
}

#[derive(Debug, Subcommand)]
pub enum RecordsCommand {
    /// Print the full report for every stored record
    Show(SourceArgs),

    /// Summarize stored records as a table
    #[command(alias = "ls")]
    List(SourceArgs),
}

#[derive(Debug, Args)]
pub struct SourceArgs {
    /// JSON file holding an array of record descriptors (defaults to config records_file)
    #[arg(long, short = 'f', value_name = "PATH")]
    pub from_file: Option<PathBuf>,
}

// ── Config ───────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show the effective configuration
    Show,

    /// Print the config file path
    Path,

    /// Set a configuration value (output, color, records_file)
    Set {
        /// Config key
        key: String,
        /// New value
        value: String,
    },
}

// ── Completions ──────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: clap_complete::Shell,
}
