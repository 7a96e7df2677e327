//! Customer rows as read from the CSV export.

use std::collections::HashMap;

/// One source row, keyed by header name.
///
/// Built by pairing a CSV data row with the header row, so every column in the
/// export is kept even if no profile uses it. Lookups for columns the export
/// does not carry return `None`, which the serializer treats like an empty cell.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CustomerRecord {
    fields: HashMap<String, String>,
}

impl CustomerRecord {
    /// Build a record from `(column, value)` pairs.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            fields: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Raw cell value for `column`, if the export has that column.
    pub fn get(&self, column: &str) -> Option<&str> {
        self.fields.get(column).map(String::as_str)
    }

    /// Raw cell value, `None` when absent or empty.
    pub fn non_empty(&self, column: &str) -> Option<&str> {
        self.get(column).filter(|v| !v.is_empty())
    }

    /// Raw cell value, `None` when absent, empty or whitespace-only.
    pub fn non_blank(&self, column: &str) -> Option<&str> {
        self.get(column).filter(|v| !v.trim().is_empty())
    }
}
