use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use log::LevelFilter;

use crate::profile::Profile;
use crate::serializer::DEFAULT_TABLE;

// defaults
pub const DEFAULT_INPUT: &str = "customers_rows.csv";
pub const DEFAULT_OUTPUT: &str = "supabase/seed.sql";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(value: LogLevel) -> Self {
        match value {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// Settings for one seed generation run.
///
/// Every field has a default, so `csv2seed` with no arguments reads
/// `customers_rows.csv` and writes `supabase/seed.sql`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "csv2seed",
    version,
    about = "Convert a customer CSV export into a SQL seed file"
)]
pub struct Config {
    /// CSV export with a header row (.gz/.zst accepted)
    #[arg(short, long, value_parser, default_value = DEFAULT_INPUT)]
    pub input: PathBuf,

    /// Seed file to write; parent directories are created
    #[arg(short, long, value_parser, default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Null handling and annotation policy
    #[arg(long, value_enum, default_value_t = Profile::ConflictSafe)]
    pub profile: Profile,

    /// Target table name
    #[arg(long, default_value = DEFAULT_TABLE)]
    pub table: String,

    /// Log level (overrides RUST_LOG)
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Also write run metrics as JSON to this path
    #[arg(long, value_parser)]
    pub metrics_json: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            output: PathBuf::from(DEFAULT_OUTPUT),
            profile: Profile::default(),
            table: DEFAULT_TABLE.to_string(),
            log_level: LogLevel::default(),
            metrics_json: None,
        }
    }
}
