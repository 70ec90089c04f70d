#![allow(dead_code)]

use oxide_repair_core::{ErrorKind, SchemaInstance, SqlFixer, TableDef};

/// `t1(a, b)` and `t2(c)`.
pub fn two_tables() -> SchemaInstance {
    SchemaInstance::new("db")
        .table(TableDef::new("t1", ["a", "b"]))
        .table(TableDef::new("t2", ["c"]))
}

/// The classic singer/concert layout with mixed-case names.
pub fn concert_singer() -> SchemaInstance {
    SchemaInstance::new("concert_singer")
        .table(TableDef::new("singer", ["Singer_ID", "Name", "Country", "Age"]))
        .table(TableDef::new("concert", ["concert_ID", "concert_Name", "Year", "Stadium_ID"]))
        .table(TableDef::new("stadium", ["Stadium_ID", "Location", "Name", "Capacity"]))
}

/// Classifies `message` and applies the matching fix.
pub fn repair(message: &str, sql: &str, schema: &SchemaInstance) -> String {
    let kind = ErrorKind::classify(message);
    SqlFixer::new()
        .apply(&kind, sql, schema)
        .unwrap_or_else(|e| panic!("Fix failed for: {sql}\nError: {e}"))
        .unwrap_or_else(|| panic!("Unclassified message: {message}"))
}
