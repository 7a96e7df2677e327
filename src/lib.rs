//! # csv2seed
//!
//! Turns a customer spreadsheet export (CSV with a header row) into a SQL seed
//! file: one `INSERT INTO customers (...) VALUES (...)` line per row, plus a
//! few comment lines for humans.
//!
//! ## Quick Start
//!
//! ```no_run
//! use csv2seed::{run, Config, Profile};
//! # fn main() -> anyhow::Result<()> {
//! let config = Config {
//!     profile: Profile::Batched,
//!     ..Config::default()
//! };
//! let report = run(&config)?;
//! println!("{} statements", report.records);
//! # Ok(())
//! # }
//! ```
//!
//! ## Profiles
//!
//! The two [`Profile`]s disagree on how blank cells are rendered:
//!
//! | | [`Profile::Batched`] | [`Profile::ConflictSafe`] |
//! |---|---|---|
//! | empty text cell | `''` | `NULL` |
//! | `"NULL"` / whitespace | kept, quoted | `NULL` |
//! | `created_by` empty | `NULL` | `NULL` |
//! | address line breaks | replaced by spaces | kept |
//! | `is_active` | raw or `TRUE` | upper-cased or `TRUE` |
//! | annotations | `-- Batch` every 100 rows | progress log every 1000 rows, `-- Total` footer |
//! | conflict clause | none | `ON CONFLICT (internal_customer_id) DO NOTHING` |
//!
//! Both render `credit_limit` and `outstanding_balance` raw, or `0` when blank,
//! and both double every single quote inside a quoted value.
//!
//! ## Serializing without files
//!
//! ```
//! use csv2seed::{CustomerRecord, Profile, RowSerializer};
//!
//! let record = CustomerRecord::from_pairs([
//!     ("name", "O'Brien"),
//!     ("phone", ""),
//!     ("credit_limit", "500"),
//! ]);
//! let sql = RowSerializer::new(Profile::ConflictSafe, "customers").serialize(&record);
//! assert!(sql.contains("'O''Brien', NULL"));
//! assert!(sql.ends_with("ON CONFLICT (internal_customer_id) DO NOTHING;"));
//! ```
//!
//! ## Module Overview
//!
//! - [`record`] - `CustomerRecord`, one CSV row keyed by header
//! - [`sql`] - literal quoting, `NULL` detection, statement assembly
//! - [`profile`] - per-column rules for each profile
//! - [`serializer`] - record to `INSERT` statement
//! - [`writer`] - header, batch comments, summary around the statements
//! - [`io`] - CSV input and transparent gzip/zstd
//! - [`runner`] - end-to-end run from a [`Config`]
//! - [`metrics`] - counters for a run
//! - [`config`] / [`logging`] - CLI settings and logger setup

pub mod config;
pub mod io;
pub mod logging;
pub mod metrics;
pub mod profile;
pub mod record;
pub mod runner;
pub mod serializer;
pub mod sql;
pub mod writer;

pub use config::{Config, LogLevel};
pub use io::csv::{read_records, RecordStream};
pub use metrics::RunMetrics;
pub use profile::Profile;
pub use record::CustomerRecord;
pub use runner::{run, write_seed, write_seed_to_sink, RunReport};
pub use serializer::RowSerializer;
pub use sql::SqlValue;
pub use writer::SeedWriter;
