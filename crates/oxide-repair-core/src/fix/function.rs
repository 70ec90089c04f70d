//! Function call repair.
//!
//! Both fixers locate the first `name(` call site in the token stream and
//! scan forward to its balanced `)`. A trailing `AS <alias>` belongs to the
//! call span and is dropped with it.

use super::{FixError, Result};
use crate::lexer::{TokenStream, is_punctuation_token, matching_close, split_top_level};
use crate::resolver::{ReferenceScope, TableResolver, bare_column};
use crate::schema::SchemaInstance;

/// Token positions of one function call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct CallSite {
    /// Index of the function name.
    name: usize,
    /// Index of the opening parenthesis.
    open: usize,
    /// Index of the matching closing parenthesis.
    close: usize,
    /// One past the last token of the call span, alias included.
    end: usize,
}

impl CallSite {
    fn locate(tokens: &[String], name: &str) -> Result<Self> {
        let name_idx = tokens
            .windows(2)
            .position(|w| w[0].eq_ignore_ascii_case(name) && w[1] == "(")
            .ok_or_else(|| FixError::FunctionCallNotFound(name.to_string()))?;
        let open = name_idx + 1;
        let close = matching_close(tokens, open)
            .ok_or_else(|| FixError::UnbalancedParentheses(name.to_string()))?;

        let mut end = close + 1;
        if tokens.get(end).is_some_and(|t| t.eq_ignore_ascii_case("as")) {
            end = (end + 2).min(tokens.len());
        }
        Ok(Self {
            name: name_idx,
            open,
            close,
            end,
        })
    }

    fn args<'a>(&self, tokens: &'a [String]) -> &'a [String] {
        &tokens[self.open + 1..self.close]
    }
}

/// Replaces a call to an unknown function with its column arguments.
///
/// Each top-level argument that is a single column of a used table (after
/// dropping any `table.` qualifier) survives, lowercased; the surviving
/// names are comma-joined in place of the whole `name(args) [AS alias]`
/// span. If no argument survives, the span is removed.
///
/// # Errors
///
/// [`FixError::FunctionCallNotFound`] if there is no `name(` call and
/// [`FixError::UnbalancedParentheses`] if its argument list never closes.
pub fn fix_function<R: TableResolver + ?Sized>(
    resolver: &R,
    name: &str,
    sql: &str,
    schema: &SchemaInstance,
) -> Result<String> {
    let mut tokens = TokenStream::tokenize(sql);
    let call = CallSite::locate(tokens.as_slice(), name)?;
    let scope = ReferenceScope::resolve(resolver, tokens.as_slice(), schema);

    let survivors: Vec<String> = split_top_level(call.args(tokens.as_slice()))
        .into_iter()
        .filter_map(|arg| match arg {
            [single] => Some(bare_column(single).to_lowercase()),
            _ => None,
        })
        .filter(|col| scope.columns.contains(col))
        .collect();

    tokens.splice(call.name..call.end, &survivors.join(", "));
    Ok(tokens.rejoin())
}

/// Splits a wrong-arity call into one single-argument call per column.
///
/// Every argument token naming a column of a used table becomes its own
/// `name(column)` term, written as it appears in the statement. A
/// `DISTINCT` anywhere in the argument list is carried into every term as
/// `name(DISTINCT column)`. The terms are comma-joined in place of the call
/// span.
///
/// # Errors
///
/// [`FixError::FunctionCallNotFound`] if there is no `name(` call and
/// [`FixError::UnbalancedParentheses`] if its argument list never closes.
pub fn fix_function_arity<R: TableResolver + ?Sized>(
    resolver: &R,
    name: &str,
    sql: &str,
    schema: &SchemaInstance,
) -> Result<String> {
    let mut tokens = TokenStream::tokenize(sql);
    let call = CallSite::locate(tokens.as_slice(), name)?;
    let scope = ReferenceScope::resolve(resolver, tokens.as_slice(), schema);

    let function = &tokens.as_slice()[call.name];
    let args = call.args(tokens.as_slice());
    let distinct = args.iter().any(|t| t.eq_ignore_ascii_case("distinct"));

    let terms: Vec<String> = args
        .iter()
        .filter(|t| !is_punctuation_token(t) && !t.eq_ignore_ascii_case("distinct"))
        .filter(|t| scope.columns.contains(bare_column(t)))
        .map(|col| {
            if distinct {
                format!("{function}(DISTINCT {col})")
            } else {
                format!("{function}({col})")
            }
        })
        .collect();

    tokens.splice(call.name..call.end, &terms.join(", "));
    Ok(tokens.rejoin())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::Lexer;

    #[test]
    fn test_locate_with_alias() {
        let tokens = Lexer::new("SELECT f(a, g(b)) AS x FROM t").tokenize();
        let call = CallSite::locate(&tokens, "F").unwrap();
        assert_eq!(
            call,
            CallSite {
                name: 1,
                open: 2,
                close: 9,
                end: 12
            }
        );
        assert_eq!(call.args(&tokens).len(), 6);
    }

    #[test]
    fn test_locate_requires_open_paren() {
        let tokens = Lexer::new("SELECT year FROM t").tokenize();
        assert_eq!(
            CallSite::locate(&tokens, "year"),
            Err(FixError::FunctionCallNotFound("year".into()))
        );
    }

    #[test]
    fn test_locate_unbalanced() {
        let tokens = Lexer::new("SELECT f(a FROM t").tokenize();
        assert_eq!(
            CallSite::locate(&tokens, "f"),
            Err(FixError::UnbalancedParentheses("f".into()))
        );
    }

    #[test]
    fn test_alias_at_end_of_statement() {
        let tokens = Lexer::new("SELECT f(a) AS").tokenize();
        let call = CallSite::locate(&tokens, "f").unwrap();
        assert_eq!(call.end, tokens.len());
    }
}
