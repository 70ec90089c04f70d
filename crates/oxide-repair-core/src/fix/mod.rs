//! Targeted rewrites for classified runtime errors.
//!
//! Every fixer takes the current statement text (without its trailing
//! semicolon) and returns the rewritten text, or a [`FixError`] when the
//! error cannot be located in the statement. Fixers never panic on
//! malformed input.

mod column;
mod error;
mod function;

pub use column::fix_column;
pub use error::{FixError, Result};
pub use function::{fix_function, fix_function_arity};

use crate::classifier::ErrorKind;
use crate::resolver::{ClauseScanner, TableResolver};
use crate::schema::SchemaInstance;

/// Dispatches classified errors to the matching fixer.
#[derive(Debug, Clone, Default)]
pub struct SqlFixer<R = ClauseScanner> {
    resolver: R,
}

impl SqlFixer<ClauseScanner> {
    /// Creates a fixer using the clause-tracking table resolver.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            resolver: ClauseScanner,
        }
    }
}

impl<R: TableResolver> SqlFixer<R> {
    /// Creates a fixer with a custom table resolver.
    #[must_use]
    pub const fn with_resolver(resolver: R) -> Self {
        Self { resolver }
    }

    /// Applies the fix implied by `kind`.
    ///
    /// Returns `Ok(None)` for [`ErrorKind::Unclassified`], which has no fix.
    ///
    /// # Errors
    ///
    /// Whatever the selected fixer reports; see [`FixError`].
    pub fn apply(
        &self,
        kind: &ErrorKind,
        sql: &str,
        schema: &SchemaInstance,
    ) -> Result<Option<String>> {
        let fixed = match kind {
            ErrorKind::ColumnOrTableMismatch(ident) | ErrorKind::AmbiguousColumn(ident) => {
                self.fix_column(ident, sql, schema)?
            }
            ErrorKind::UnknownFunction(name) => self.fix_function(name, sql, schema)?,
            ErrorKind::WrongArgumentCount(name) => self.fix_function_arity(name, sql, schema)?,
            ErrorKind::Unclassified(_) => return Ok(None),
        };
        Ok(Some(fixed))
    }

    /// See [`fix_column`].
    ///
    /// # Errors
    ///
    /// As [`fix_column`].
    pub fn fix_column(
        &self,
        identifier: &str,
        sql: &str,
        schema: &SchemaInstance,
    ) -> Result<String> {
        fix_column(&self.resolver, identifier, sql, schema)
    }

    /// See [`fix_function`].
    ///
    /// # Errors
    ///
    /// As [`fix_function`].
    pub fn fix_function(&self, name: &str, sql: &str, schema: &SchemaInstance) -> Result<String> {
        fix_function(&self.resolver, name, sql, schema)
    }

    /// See [`fix_function_arity`].
    ///
    /// # Errors
    ///
    /// As [`fix_function_arity`].
    pub fn fix_function_arity(
        &self,
        name: &str,
        sql: &str,
        schema: &SchemaInstance,
    ) -> Result<String> {
        fix_function_arity(&self.resolver, name, sql, schema)
    }
}
