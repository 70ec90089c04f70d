//! Editable token view of a statement.

use std::fmt;
use std::ops::Range;

use super::Lexer;

/// A tokenized statement that can be edited and rejoined into SQL text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenStream {
    tokens: Vec<String>,
}

impl TokenStream {
    /// Tokenizes `sql`.
    #[must_use]
    pub fn tokenize(sql: &str) -> Self {
        Self {
            tokens: Lexer::new(sql).tokenize(),
        }
    }

    /// Returns the tokens.
    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.tokens
    }

    /// Returns the number of tokens.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Returns true if the statement has no tokens.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Returns the index of the first token exactly equal to `text`.
    #[must_use]
    pub fn position(&self, text: &str) -> Option<usize> {
        self.tokens.iter().position(|tok| tok == text)
    }

    /// Replaces the token at `idx`. Out-of-range indices are ignored.
    pub fn replace(&mut self, idx: usize, token: impl Into<String>) {
        if let Some(slot) = self.tokens.get_mut(idx) {
            *slot = token.into();
        }
    }

    /// Replaces the tokens in `range` with `replacement`.
    ///
    /// The replacement is re-tokenized so punctuation it contains stays
    /// addressable.
    pub fn splice(&mut self, range: Range<usize>, replacement: &str) {
        let replacement = Lexer::new(replacement).tokenize();
        self.tokens.splice(range, replacement);
    }

    /// Reassembles the tokens into SQL text.
    ///
    /// Tokens are separated by one space, except that no space precedes `,`
    /// or `)` and none surrounds `(`.
    #[must_use]
    pub fn rejoin(&self) -> String {
        let mut sql = String::new();
        let mut prev: Option<&str> = None;
        for tok in &self.tokens {
            let glued = matches!(tok.as_str(), "," | ")" | "(") || prev == Some("(");
            if prev.is_some() && !glued {
                sql.push(' ');
            }
            sql.push_str(tok);
            prev = Some(tok);
        }
        sql
    }
}

impl fmt::Display for TokenStream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.rejoin())
    }
}
