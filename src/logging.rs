//! Logger setup for the binary.

use log::LevelFilter;
use std::io::Write;

/// Install `env_logger`, reading `RUST_LOG` first and then forcing `level`
/// for this crate.
///
/// # Errors
/// Returns an error if a global logger is already installed.
pub fn init_logger(level: LevelFilter) -> Result<(), log::SetLoggerError> {
    let mut builder = env_logger::Builder::from_default_env();
    builder.filter_level(level);
    builder.filter_module("csv2seed", level);
    builder.format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()));
    builder.try_init()
}
