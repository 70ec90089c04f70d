//! Column reference repair.

use super::{FixError, Result};
use crate::lexer::TokenStream;
use crate::resolver::{ReferenceScope, TableResolver, UsedColumns, bare_column};
use crate::schema::SchemaInstance;
use crate::similarity;

/// Rewrites the first token equal to `identifier` as a qualified column.
///
/// The bare column name is looked up in the tables the statement reads
/// from, in schema order. If no table declares it, the closest column by
/// [`similarity::ratio`] across all used tables replaces it. The owning
/// table is written as its alias when the statement declares one. Only the
/// erroring token changes; the token count is preserved.
///
/// # Errors
///
/// [`FixError::IdentifierNotFound`] if no token matches `identifier`
/// exactly, and [`FixError::NoCandidateColumn`] if the used tables offer no
/// column at all.
pub fn fix_column<R: TableResolver + ?Sized>(
    resolver: &R,
    identifier: &str,
    sql: &str,
    schema: &SchemaInstance,
) -> Result<String> {
    let mut tokens = TokenStream::tokenize(sql);
    let error_idx = tokens
        .position(identifier)
        .ok_or_else(|| FixError::IdentifierNotFound(identifier.to_string()))?;

    let scope = ReferenceScope::resolve(resolver, tokens.as_slice(), schema);
    let (table, column) = resolve_column(&scope.columns, bare_column(identifier))?;
    let qualifier = scope.aliases.alias_of(&table).unwrap_or(&table);

    tokens.replace(error_idx, format!("{qualifier}.{column}"));
    Ok(tokens.rejoin())
}

/// Finds the `(table, column)` a bare column name should resolve to.
fn resolve_column(columns: &UsedColumns, bare: &str) -> Result<(String, String)> {
    if let Some(table) = columns.table_with(bare) {
        return Ok((table.to_string(), bare.to_string()));
    }

    let needle = bare.to_lowercase();
    let candidates = columns
        .iter()
        .flat_map(|(table, cols)| cols.iter().map(move |col| (table, col.as_str())));
    similarity::best_match(&needle, candidates)
        .map(|(table, col, _)| (table.to_string(), col.to_string()))
        .ok_or_else(|| FixError::NoCandidateColumn(bare.to_string()))
}
