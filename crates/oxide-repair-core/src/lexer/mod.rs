//! Reversible SQL tokenization.
//!
//! Statements are split on whitespace after padding the structural
//! punctuation `,` `(` `)`, so every punctuation mark becomes a token of its
//! own. Quoted literals and identifiers are kept whole. A [`TokenStream`] can
//! be edited in place and rejoined into SQL text that tokenizes back to the
//! same tokens.

mod brackets;
mod stream;
mod tokenizer;

pub use brackets::{matching_close, split_top_level};
pub use stream::TokenStream;
pub use tokenizer::Lexer;

/// Punctuation that is always emitted as a standalone token.
pub const PUNCTUATION: [char; 3] = [',', '(', ')'];

/// Returns true if `c` is structural punctuation.
#[must_use]
pub fn is_punctuation(c: char) -> bool {
    PUNCTUATION.contains(&c)
}

/// Returns true if `token` is a single punctuation token.
#[must_use]
pub fn is_punctuation_token(token: &str) -> bool {
    let mut chars = token.chars();
    matches!((chars.next(), chars.next()), (Some(c), None) if is_punctuation(c))
}
