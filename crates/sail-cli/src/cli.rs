//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "sail",
    version,
    about = "Validate and normalize sailing club member records",
    long_about = "Validate and normalize sailing club member records.\n\n\
                  Capitalizes names and addresses, derives listing names, formats\n\
                  Canadian postal codes, US zip codes and phone numbers, and reports\n\
                  every field-level problem in a fixed order."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for humans, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Include member names in log output.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Validate member records from a JSON file.
    Validate(ValidateArgs),

    /// List the province and state table.
    Provinces(ProvincesArgs),
}

#[derive(Parser)]
pub struct ValidateArgs {
    /// JSON file holding one member record or an array of records.
    #[arg(value_name = "MEMBERS_JSON")]
    pub input: PathBuf,

    /// Province table CSV (ProvinceCode,Name,CountryCode). Uses the bundled
    /// table when omitted.
    #[arg(long = "provinces", value_name = "CSV")]
    pub provinces: Option<PathBuf>,

    /// Write the normalized records to this JSON file.
    #[arg(long = "output", short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Year to check join years against (default: this year).
    #[arg(long = "current-year", value_name = "YEAR")]
    pub current_year: Option<i32>,

    /// Report format on stdout.
    #[arg(long = "format", value_enum, default_value = "table")]
    pub format: ReportFormatArg,
}

#[derive(Parser)]
pub struct ProvincesArgs {
    /// Province table CSV. Uses the bundled table when omitted.
    #[arg(long = "provinces", value_name = "CSV")]
    pub provinces: Option<PathBuf>,

    /// Only list one country.
    #[arg(long = "country", value_enum)]
    pub country: Option<CountryArg>,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ReportFormatArg {
    Table,
    Json,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum CountryArg {
    #[value(name = "CA", alias = "ca")]
    Ca,
    #[value(name = "US", alias = "us")]
    Us,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
