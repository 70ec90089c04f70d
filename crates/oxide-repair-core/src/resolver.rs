//! Table and alias resolution over a token stream.
//!
//! [`ClauseScanner`] is a single left-to-right heuristic, not a parser: it
//! tracks the most recent clause keyword and records every known table name
//! seen while inside `FROM`. `JOIN` does not end the `FROM` clause, so joined
//! tables are picked up, but subqueries and anything after `ON` are not
//! treated specially. Fixers only depend on the [`TableResolver`] trait, so a
//! grammar-based resolver can be dropped in later.

use std::collections::{HashMap, HashSet};

use crate::schema::SchemaInstance;

/// Keywords that switch the current clause.
const CLAUSE_KEYWORDS: [&str; 6] = ["select", "from", "where", "group", "order", "limit"];

/// Determines which schema tables a statement reads from.
pub trait TableResolver {
    /// Returns the lowercased names of the tables referenced by `tokens`.
    fn tables_used(&self, tokens: &[String], schema: &SchemaInstance) -> HashSet<String>;
}

/// Clause-tracking table resolver.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClauseScanner;

impl TableResolver for ClauseScanner {
    fn tables_used(&self, tokens: &[String], schema: &SchemaInstance) -> HashSet<String> {
        let all_tables: HashSet<String> = schema.db_schema.iter().map(|t| t.key()).collect();
        let mut used = HashSet::new();
        let mut clause = "";
        for tok in tokens {
            let lower = tok.to_lowercase();
            if let Some(keyword) = CLAUSE_KEYWORDS.iter().find(|k| **k == lower) {
                clause = *keyword;
            } else if clause == "from" && all_tables.contains(&lower) {
                used.insert(lower);
            }
        }
        used
    }
}

/// Table aliases declared with `<table> AS <alias>`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AliasMap {
    by_table: HashMap<String, String>,
}

impl AliasMap {
    /// Scans `tokens` for `AS` whose left neighbour is one of `used_tables`.
    ///
    /// Tables are keyed by their lowercased name; aliases keep the casing
    /// they have in the statement. A later alias for the same table wins.
    #[must_use]
    pub fn scan(tokens: &[String], used_tables: &HashSet<String>) -> Self {
        let mut map = Self::default();
        for (idx, tok) in tokens.iter().enumerate() {
            if !tok.eq_ignore_ascii_case("as") || idx == 0 {
                continue;
            }
            let table = tokens[idx - 1].to_lowercase();
            let Some(alias) = tokens.get(idx + 1) else {
                continue;
            };
            if used_tables.contains(&table) {
                map.by_table.insert(table, alias.clone());
            }
        }
        map
    }

    /// Returns the alias registered for `table` (lowercased name).
    #[must_use]
    pub fn alias_of(&self, table: &str) -> Option<&str> {
        self.by_table.get(table).map(String::as_str)
    }
}

/// Lowercased column names of the used tables, in schema declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UsedColumns {
    tables: Vec<(String, Vec<String>)>,
}

impl UsedColumns {
    /// Collects the columns of every table in `used_tables`.
    #[must_use]
    pub fn collect(schema: &SchemaInstance, used_tables: &HashSet<String>) -> Self {
        let tables = schema
            .db_schema
            .iter()
            .filter(|t| used_tables.contains(&t.key()))
            .map(|t| {
                let mut columns: Vec<String> = Vec::new();
                for col in &t.column_names_original {
                    let col = col.to_lowercase();
                    if !columns.contains(&col) {
                        columns.push(col);
                    }
                }
                (t.key(), columns)
            })
            .collect();
        Self { tables }
    }

    /// Iterates `(table, columns)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.tables.iter().map(|(t, cols)| (t.as_str(), cols.as_slice()))
    }

    /// Returns the first table that declares `column` (case-insensitive).
    #[must_use]
    pub fn table_with(&self, column: &str) -> Option<&str> {
        let column = column.to_lowercase();
        self.iter()
            .find(|(_, cols)| cols.contains(&column))
            .map(|(table, _)| table)
    }

    /// Returns true if any used table declares `column` (case-insensitive).
    #[must_use]
    pub fn contains(&self, column: &str) -> bool {
        self.table_with(column).is_some()
    }
}

/// Everything a fixer needs to know about the tables a statement touches.
#[derive(Debug, Clone, Default)]
pub struct ReferenceScope {
    /// Lowercased names of the tables read by the statement.
    pub used_tables: HashSet<String>,
    /// Declared table aliases.
    pub aliases: AliasMap,
    /// Columns of the used tables.
    pub columns: UsedColumns,
}

impl ReferenceScope {
    /// Resolves the scope of `tokens` against `schema`.
    pub fn resolve<R: TableResolver + ?Sized>(
        resolver: &R,
        tokens: &[String],
        schema: &SchemaInstance,
    ) -> Self {
        let used_tables = resolver.tables_used(tokens, schema);
        let aliases = AliasMap::scan(tokens, &used_tables);
        let columns = UsedColumns::collect(schema, &used_tables);
        Self {
            used_tables,
            aliases,
            columns,
        }
    }
}

/// Strips a `table.` qualifier, keeping only the bare column name.
#[must_use]
pub fn bare_column(identifier: &str) -> &str {
    identifier.rsplit('.').next().unwrap_or(identifier)
}
