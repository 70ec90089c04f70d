//! Classification of database engine error messages.

use std::fmt;

/// Prefix of an unknown-column (or mismatched table qualifier) error.
pub const COLUMN_OR_TABLE_MISMATCH: &str = "no such column: ";
/// Prefix of an ambiguous-column error.
pub const AMBIGUOUS_COLUMN: &str = "ambiguous column name: ";
/// Prefix of an unknown-function error.
pub const UNKNOWN_FUNCTION: &str = "no such function: ";
/// Prefix of a wrong-arity function call error.
pub const WRONG_ARGUMENT_COUNT: &str = "wrong number of arguments to function ";

/// A runtime error reported by the database, classified by message shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// The referenced column does not exist in the referenced table.
    ColumnOrTableMismatch(String),
    /// The column name exists in more than one table in scope.
    AmbiguousColumn(String),
    /// The function is not known to the engine.
    UnknownFunction(String),
    /// The function exists but was called with the wrong arity.
    WrongArgumentCount(String),
    /// Any other message, kept verbatim.
    Unclassified(String),
}

impl ErrorKind {
    /// Classifies a raw error message by exact, case-sensitive prefix.
    #[must_use]
    pub fn classify(message: &str) -> Self {
        if let Some(rest) = message.strip_prefix(COLUMN_OR_TABLE_MISMATCH) {
            Self::ColumnOrTableMismatch(rest.trim().to_string())
        } else if let Some(rest) = message.strip_prefix(AMBIGUOUS_COLUMN) {
            Self::AmbiguousColumn(rest.trim().to_string())
        } else if let Some(rest) = message.strip_prefix(UNKNOWN_FUNCTION) {
            Self::UnknownFunction(rest.trim().to_string())
        } else if let Some(rest) = message.strip_prefix(WRONG_ARGUMENT_COUNT) {
            let name = rest.trim();
            let name = name.strip_suffix("()").unwrap_or(name).trim();
            Self::WrongArgumentCount(name.to_string())
        } else {
            Self::Unclassified(message.to_string())
        }
    }

    /// Returns the identifier, function name, or message carried by the kind.
    #[must_use]
    pub fn payload(&self) -> &str {
        match self {
            Self::ColumnOrTableMismatch(s)
            | Self::AmbiguousColumn(s)
            | Self::UnknownFunction(s)
            | Self::WrongArgumentCount(s)
            | Self::Unclassified(s) => s,
        }
    }

    /// Short name used in logs.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::ColumnOrTableMismatch(_) => "column_or_table_mismatch",
            Self::AmbiguousColumn(_) => "ambiguous_column",
            Self::UnknownFunction(_) => "unknown_function",
            Self::WrongArgumentCount(_) => "wrong_argument_count",
            Self::Unclassified(_) => "unclassified",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.name(), self.payload())
    }
}
