//! Schema instances handed to the repair engine.
//!
//! An instance names the database it belongs to (`db_id`) and lists its
//! tables with their original, case-preserving names. The layout matches the
//! processed dataset files, so instances deserialize directly from them;
//! unknown fields are ignored.

use serde::{Deserialize, Serialize};

/// A table and its columns as declared in the database.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableDef {
    /// Table name with its original casing.
    pub table_name_original: String,
    /// Column names with their original casing, in declaration order.
    pub column_names_original: Vec<String>,
}

impl TableDef {
    /// Creates a table definition.
    #[must_use]
    pub fn new<I, S>(name: impl Into<String>, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            table_name_original: name.into(),
            column_names_original: columns.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns the lowercased table name.
    #[must_use]
    pub fn key(&self) -> String {
        self.table_name_original.to_lowercase()
    }
}

/// One example's target schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaInstance {
    /// Identifier of the on-disk database.
    pub db_id: String,
    /// Tables in declaration order.
    pub db_schema: Vec<TableDef>,
}

impl SchemaInstance {
    /// Creates an empty schema instance for `db_id`.
    #[must_use]
    pub fn new(db_id: impl Into<String>) -> Self {
        Self {
            db_id: db_id.into(),
            db_schema: Vec::new(),
        }
    }

    /// Adds a table.
    #[must_use]
    pub fn table(mut self, table: TableDef) -> Self {
        self.db_schema.push(table);
        self
    }
}
