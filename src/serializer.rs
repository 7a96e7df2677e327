//! Row serializer: one [`CustomerRecord`] in, one `INSERT` line out.

use crate::profile::{Profile, RenderedRow};
use crate::record::CustomerRecord;
use crate::sql::insert_statement;

/// Default target table.
pub const DEFAULT_TABLE: &str = "customers";

/// Turns records into complete `INSERT ...;` statements for one table and profile.
#[derive(Debug, Clone)]
pub struct RowSerializer {
    profile: Profile,
    table: String,
    conflict_clause: Option<String>,
}

/// A finished statement together with the rendered values it was built from.
#[derive(Debug, Clone)]
pub struct SerializedRow {
    /// The statement, terminated by `;` but without a newline.
    pub statement: String,
    pub rendered: RenderedRow,
}

impl RowSerializer {
    pub fn new(profile: Profile, table: impl Into<String>) -> Self {
        Self {
            profile,
            table: table.into(),
            conflict_clause: profile.conflict_clause(),
        }
    }

    pub fn profile(&self) -> Profile {
        self.profile
    }

    pub fn table(&self) -> &str {
        &self.table
    }

    pub fn serialize_row(&self, record: &CustomerRecord) -> SerializedRow {
        let rendered = self.profile.render(record);
        let mut statement = insert_statement(&self.table, self.profile.columns(), &rendered.values);
        if let Some(clause) = &self.conflict_clause {
            statement.push(' ');
            statement.push_str(clause);
        }
        statement.push(';');
        SerializedRow {
            statement,
            rendered,
        }
    }

    /// Statement text only.
    pub fn serialize(&self, record: &CustomerRecord) -> String {
        self.serialize_row(record).statement
    }
}

impl Default for RowSerializer {
    fn default() -> Self {
        Self::new(Profile::default(), DEFAULT_TABLE)
    }
}
