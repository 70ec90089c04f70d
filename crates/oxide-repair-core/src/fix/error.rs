//! Fixer error types.

/// Reasons a fixer could not rewrite a statement.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FixError {
    /// The identifier from the error message is not a token of the statement.
    #[error("Identifier '{0}' does not appear in the statement")]
    IdentifierNotFound(String),

    /// No `name(` call site exists in the statement.
    #[error("No call to function '{0}' found in the statement")]
    FunctionCallNotFound(String),

    /// The argument list of the call never closes.
    #[error("Unbalanced parentheses in call to function '{0}'")]
    UnbalancedParentheses(String),

    /// The used tables offer no column to substitute.
    #[error("No column of the referenced tables resembles '{0}'")]
    NoCandidateColumn(String),
}

/// Result type for fixer operations.
pub type Result<T> = std::result::Result<T, FixError>;
