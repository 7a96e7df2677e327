//! SQL literal rendering.
//!
//! Everything here is pure string work: doubling quotes, collapsing line
//! breaks, and deciding when a cell means SQL `NULL`. The profiles in
//! [`crate::profile`] combine these helpers per column.

use std::fmt;

/// A rendered value slot inside a `VALUES (...)` tuple.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SqlValue {
    /// The bare `NULL` keyword.
    Null,
    /// A string literal. Holds the unescaped text; quoting happens on display.
    Text(String),
    /// Emitted verbatim, unquoted (numbers, booleans).
    Raw(String),
}

impl SqlValue {
    pub fn text(value: impl Into<String>) -> Self {
        SqlValue::Text(value.into())
    }

    pub fn raw(value: impl Into<String>) -> Self {
        SqlValue::Raw(value.into())
    }

    pub fn is_null(&self) -> bool {
        matches!(self, SqlValue::Null)
    }
}

impl fmt::Display for SqlValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SqlValue::Null => f.write_str("NULL"),
            SqlValue::Text(s) => write!(f, "'{}'", escape_quotes(s)),
            SqlValue::Raw(s) => f.write_str(s),
        }
    }
}

/// Double every single quote so the text is safe inside a `'...'` literal.
pub fn escape_quotes(value: &str) -> String {
    value.replace('\'', "''")
}

/// Replace each `\n` and `\r` with one space. `\r\n` therefore becomes two spaces.
pub fn collapse_line_breaks(value: &str) -> String {
    value.replace(['\n', '\r'], " ")
}

/// True when a cell should be written as SQL `NULL`: empty, whitespace-only,
/// or the word `NULL` in any case.
pub fn is_null_marker(value: &str) -> bool {
    let trimmed = value.trim();
    trimmed.is_empty() || trimmed.eq_ignore_ascii_case("NULL")
}

/// Quote a value, or `NULL` when [`is_null_marker`] says so. Absent cells are `NULL` too.
pub fn quote_or_null(value: Option<&str>) -> SqlValue {
    match value {
        Some(v) if !is_null_marker(v) => SqlValue::text(v),
        _ => SqlValue::Null,
    }
}

/// Build `INSERT INTO table (c1, c2) VALUES (v1, v2)` without the trailing `;`.
pub fn insert_statement(table: &str, columns: &[&str], values: &[SqlValue]) -> String {
    let values = values
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        "INSERT INTO {} ({}) VALUES ({})",
        table,
        columns.join(", "),
        values
    )
}
