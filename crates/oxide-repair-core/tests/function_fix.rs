//! Tests for unknown-function stripping and wrong-arity splitting.

mod common;
use common::*;

use oxide_repair_core::{
    FixError, SchemaInstance, SqlFixer, TableDef, TableResolver, TokenStream,
};
use std::collections::HashSet;

fn dated() -> SchemaInstance {
    SchemaInstance::new("db").table(TableDef::new("t", ["date", "name"]))
}

// ===================================================================
// Unknown function
// ===================================================================

#[test]
fn unknown_function_keeps_column_argument() {
    let fixed = repair("no such function: YEAR", "SELECT YEAR(date) FROM t", &dated());
    assert_eq!(fixed, "SELECT date FROM t");
}

#[test]
fn unknown_function_drops_alias_and_qualifier() {
    let fixed = repair(
        "no such function: YEAR",
        "SELECT YEAR(T1.date) AS y, name FROM t AS T1",
        &dated(),
    );
    assert_eq!(fixed, "SELECT date, name FROM t AS T1");
}

#[test]
fn unknown_function_drops_non_column_arguments() {
    let fixed = repair(
        "no such function: to_char",
        "SELECT to_char(date, 'YYYY'), name FROM t",
        &dated(),
    );
    assert_eq!(fixed, "SELECT date, name FROM t");
}

#[test]
fn unknown_function_keeps_several_columns() {
    let fixed = repair(
        "no such function: concat",
        "SELECT concat(Name, Date) FROM t WHERE name = 'a'",
        &dated(),
    );
    assert_eq!(fixed, "SELECT name, date FROM t WHERE name = 'a'");
}

#[test]
fn comments_do_not_close_the_call() {
    let fixed = repair(
        "no such function: YEAR",
        "SELECT YEAR(date /* ) */) FROM t -- year only",
        &dated(),
    );
    assert_eq!(fixed, "SELECT date FROM t");
}

#[test]
fn unknown_function_without_columns_collapses() {
    let fixed = repair("no such function: NOW", "SELECT NOW() FROM t", &dated());
    assert_eq!(fixed, "SELECT FROM t");
}

#[test]
fn unknown_function_only_rewrites_first_call() {
    let fixed = repair(
        "no such function: YEAR",
        "SELECT YEAR(date) FROM t WHERE YEAR(date) > 2000",
        &dated(),
    );
    assert_eq!(fixed, "SELECT date FROM t WHERE YEAR(date) > 2000");
}

#[test]
fn name_match_is_case_insensitive() {
    let fixed = repair("no such function: year", "SELECT YEAR (date) FROM t", &dated());
    assert_eq!(fixed, "SELECT date FROM t");
}

#[test]
fn parentheses_inside_literals_do_not_count() {
    let fixed = repair(
        "no such function: fmt",
        "SELECT fmt(')', name) FROM t",
        &dated(),
    );
    assert_eq!(fixed, "SELECT name FROM t");
}

// ===================================================================
// Wrong argument count
// ===================================================================

#[test]
fn arity_split_one_call_per_column() {
    let schema = SchemaInstance::new("db").table(TableDef::new("t", ["a", "b"]));
    let fixed = repair(
        "wrong number of arguments to function count()",
        "SELECT count(a,b) FROM t",
        &schema,
    );
    assert_eq!(fixed, "SELECT count(a), count(b) FROM t");
}

#[test]
fn arity_split_preserves_distinct() {
    let schema = SchemaInstance::new("db").table(TableDef::new("t", ["a", "b"]));
    let fixed = repair(
        "wrong number of arguments to function count()",
        "SELECT count(DISTINCT a, b) AS n FROM t",
        &schema,
    );
    assert_eq!(fixed, "SELECT count(DISTINCT a), count(DISTINCT b) FROM t");
}

#[test]
fn arity_split_keeps_qualifiers() {
    let schema = SchemaInstance::new("db").table(TableDef::new("t", ["a", "b"]));
    let fixed = repair(
        "wrong number of arguments to function max()",
        "SELECT max(T1.a, T1.b) FROM t AS T1",
        &schema,
    );
    assert_eq!(fixed, "SELECT max(T1.a), max(T1.b) FROM t AS T1");
}

#[test]
fn arity_split_skips_unknown_arguments() {
    let schema = SchemaInstance::new("db").table(TableDef::new("t", ["a", "b"]));
    let fixed = repair(
        "wrong number of arguments to function avg()",
        "SELECT avg(a, 2), b FROM t",
        &schema,
    );
    assert_eq!(fixed, "SELECT avg(a), b FROM t");
}

// ===================================================================
// Failures and resolver seam
// ===================================================================

#[test]
fn missing_call_site_is_an_error() {
    let err = SqlFixer::new()
        .fix_function("YEAR", "SELECT date FROM t", &dated())
        .unwrap_err();
    assert_eq!(err, FixError::FunctionCallNotFound("YEAR".into()));
}

#[test]
fn unclosed_call_is_an_error() {
    let err = SqlFixer::new()
        .fix_function_arity("count", "SELECT count(a, b FROM t", &dated())
        .unwrap_err();
    assert_eq!(err, FixError::UnbalancedParentheses("count".into()));
}

/// Treats every schema table as used.
struct AllTables;

impl TableResolver for AllTables {
    fn tables_used(&self, _tokens: &[String], schema: &SchemaInstance) -> HashSet<String> {
        schema.db_schema.iter().map(TableDef::key).collect()
    }
}

#[test]
fn custom_resolver_is_consulted() {
    let schema = SchemaInstance::new("db")
        .table(TableDef::new("t", ["a"]))
        .table(TableDef::new("u", ["b"]));
    let sql = "SELECT YEAR(b) FROM t";

    let default = SqlFixer::new().fix_function("YEAR", sql, &schema).unwrap();
    assert_eq!(default, "SELECT FROM t");

    let custom = SqlFixer::with_resolver(AllTables)
        .fix_function("YEAR", sql, &schema)
        .unwrap();
    assert_eq!(custom, "SELECT b FROM t");
}

#[test]
fn rewrites_are_reversible_text() {
    let schema = SchemaInstance::new("db").table(TableDef::new("t", ["a", "b"]));
    let fixed = repair(
        "wrong number of arguments to function count()",
        "SELECT count ( a , b ) FROM t",
        &schema,
    );
    let again = TokenStream::tokenize(&fixed).rejoin();
    assert_eq!(fixed, again);
}
