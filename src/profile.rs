//! The two seed-generation policies and their per-column rendering rules.

use crate::record::CustomerRecord;
use crate::sql::{collapse_line_breaks, quote_or_null, SqlValue};
use clap::ValueEnum;
use std::fmt;

/// Columns written by [`Profile::Batched`], in statement order.
pub const BATCHED_COLUMNS: &[&str] = &[
    "outlet_id",
    "name",
    "phone",
    "email",
    "address",
    "notes",
    "credit_limit",
    "outstanding_balance",
    "is_active",
    "created_by",
];

/// Columns written by [`Profile::ConflictSafe`], in statement order.
pub const CONFLICT_SAFE_COLUMNS: &[&str] = &[
    "outlet_id",
    "name",
    "phone",
    "email",
    "address",
    "notes",
    "credit_limit",
    "outstanding_balance",
    "is_active",
    "created_by",
    "referred_by",
    "internal_customer_id",
    "customer_code",
];

/// Unique key the conflict clause guards.
pub const CONFLICT_COLUMN: &str = "internal_customer_id";

/// Records per `-- Batch` comment in [`Profile::Batched`] output.
pub const BATCH_SIZE: usize = 100;

/// Records between progress log lines in [`Profile::ConflictSafe`] runs.
pub const PROGRESS_INTERVAL: u64 = 1000;

const NUMERIC_DEFAULT: &str = "0";
const BOOLEAN_DEFAULT: &str = "TRUE";

/// How blank cells, quoting and annotations are handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, ValueEnum)]
pub enum Profile {
    /// Whole file loaded up front; empty text cells become `''`, batch comments
    /// every [`BATCH_SIZE`] rows, address line breaks flattened.
    Batched,
    /// Streamed; blank or `NULL` cells become `NULL`, every insert carries
    /// `ON CONFLICT (internal_customer_id) DO NOTHING`.
    #[default]
    ConflictSafe,
}

/// One record's values plus bookkeeping for metrics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedRow {
    pub values: Vec<SqlValue>,
    /// Numeric/boolean cells that fell back to their default.
    pub defaulted: usize,
}

impl RenderedRow {
    pub fn null_count(&self) -> usize {
        self.values.iter().filter(|v| v.is_null()).count()
    }
}

impl Profile {
    pub fn columns(self) -> &'static [&'static str] {
        match self {
            Profile::Batched => BATCHED_COLUMNS,
            Profile::ConflictSafe => CONFLICT_SAFE_COLUMNS,
        }
    }

    pub fn conflict_clause(self) -> Option<String> {
        match self {
            Profile::Batched => None,
            Profile::ConflictSafe => Some(format!("ON CONFLICT ({}) DO NOTHING", CONFLICT_COLUMN)),
        }
    }

    /// Batched needs the total row count for its header, so it reads everything first.
    pub fn streams_input(self) -> bool {
        matches!(self, Profile::ConflictSafe)
    }

    pub fn batch_size(self) -> Option<usize> {
        match self {
            Profile::Batched => Some(BATCH_SIZE),
            Profile::ConflictSafe => None,
        }
    }

    pub fn progress_interval(self) -> Option<u64> {
        match self {
            Profile::Batched => None,
            Profile::ConflictSafe => Some(PROGRESS_INTERVAL),
        }
    }

    /// Render every column of `record` in [`Profile::columns`] order.
    pub fn render(self, record: &CustomerRecord) -> RenderedRow {
        let mut defaulted = 0;
        let values = self
            .columns()
            .iter()
            .map(|&column| {
                let (value, fell_back) = self.render_column(column, record);
                if fell_back {
                    defaulted += 1;
                }
                value
            })
            .collect();
        RenderedRow { values, defaulted }
    }

    fn render_column(self, column: &str, record: &CustomerRecord) -> (SqlValue, bool) {
        match column {
            "credit_limit" | "outstanding_balance" => {
                with_default(record.non_blank(column).map(str::trim), NUMERIC_DEFAULT)
            }
            "is_active" => {
                let raw = record.non_blank(column).map(str::trim);
                match self {
                    Profile::Batched => with_default(raw, BOOLEAN_DEFAULT),
                    Profile::ConflictSafe => {
                        let upper = raw.map(str::to_uppercase);
                        with_default(upper.as_deref(), BOOLEAN_DEFAULT)
                    }
                }
            }
            _ => (self.render_text(column, record), false),
        }
    }

    fn render_text(self, column: &str, record: &CustomerRecord) -> SqlValue {
        match self {
            Profile::ConflictSafe => quote_or_null(record.get(column)),
            Profile::Batched => match column {
                "created_by" => record
                    .non_empty(column)
                    .map_or(SqlValue::Null, SqlValue::text),
                "address" => SqlValue::text(collapse_line_breaks(record.get(column).unwrap_or(""))),
                _ => SqlValue::text(record.get(column).unwrap_or("")),
            },
        }
    }
}

fn with_default(raw: Option<&str>, default: &str) -> (SqlValue, bool) {
    match raw {
        Some(v) => (SqlValue::raw(v), false),
        None => (SqlValue::raw(default), true),
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Profile::Batched => f.write_str("batched"),
            Profile::ConflictSafe => f.write_str("conflict-safe"),
        }
    }
}
