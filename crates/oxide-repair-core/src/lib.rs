//! # oxide-repair-core
//!
//! Error-driven rewrites for SQL statements that fail at runtime.
//!
//! Given a statement, the schema it targets and the error message the
//! database produced, this crate classifies the error and applies a targeted
//! syntactic rewrite:
//!
//! - `no such column` / `ambiguous column name` qualify the offending column
//!   with the table (or alias) that declares it, falling back to the most
//!   similar column name.
//! - `no such function` drops the function wrapper and keeps its column
//!   arguments.
//! - `wrong number of arguments to function` splits the call into one
//!   single-argument call per column.
//!
//! It does not parse SQL into a grammar tree. Statements are handled as a
//! reversible token stream, and referenced tables are found with a
//! clause-tracking scan.
//!
//! ```rust
//! use oxide_repair_core::{ErrorKind, SchemaInstance, SqlFixer, TableDef};
//!
//! let schema = SchemaInstance::new("shop").table(TableDef::new("t", ["date"]));
//! let kind = ErrorKind::classify("no such function: YEAR");
//! let fixed = SqlFixer::new().apply(&kind, "SELECT YEAR(date) FROM t", &schema);
//! assert_eq!(fixed, Ok(Some("SELECT date FROM t".to_string())));
//! ```

pub mod classifier;
pub mod fix;
pub mod lexer;
pub mod resolver;
pub mod schema;
pub mod similarity;

pub use classifier::ErrorKind;
pub use fix::{FixError, SqlFixer};
pub use lexer::{Lexer, TokenStream};
pub use resolver::{AliasMap, ClauseScanner, ReferenceScope, TableResolver, UsedColumns};
pub use schema::{SchemaInstance, TableDef};
