//! Whitespace tokenizer with punctuation padding.

/// A lexer that splits SQL text into whitespace-separated tokens.
///
/// `,`, `(` and `)` always form their own token. A quote character opens a
/// quoted section that runs to the matching quote (a doubled quote is an
/// escaped quote), and everything inside it belongs to the current token.
/// `-- ...` and `/* ... */` comments are dropped like whitespace.
pub struct Lexer<'a> {
    /// The input source code.
    input: &'a str,
    /// The current byte position.
    pos: usize,
    /// The byte position of the start of the current token.
    start: usize,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer for the given input.
    #[must_use]
    pub const fn new(input: &'a str) -> Self {
        Self {
            input,
            pos: 0,
            start: 0,
        }
    }

    /// Returns the current character without advancing.
    fn peek(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    /// Returns the character after the current one without advancing.
    fn peek_next(&self) -> Option<char> {
        let mut chars = self.input[self.pos..].chars();
        chars.next();
        chars.next()
    }

    /// Returns true if a comment starts at the current position.
    fn at_comment(&self) -> bool {
        matches!(
            (self.peek(), self.peek_next()),
            (Some('-'), Some('-')) | (Some('/'), Some('*'))
        )
    }

    /// Advances to the next character and returns it.
    fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    fn skip_whitespace_and_comments(&mut self) {
        loop {
            while self.peek().is_some_and(char::is_whitespace) {
                self.advance();
            }

            // -- runs to the end of the line
            if self.peek() == Some('-') && self.peek_next() == Some('-') {
                while self.peek().is_some_and(|c| c != '\n') {
                    self.advance();
                }
                continue;
            }

            // /* ... */, unterminated runs to the end of input
            if self.peek() == Some('/') && self.peek_next() == Some('*') {
                self.advance();
                self.advance();
                loop {
                    match self.advance() {
                        Some('*') if self.peek() == Some('/') => {
                            self.advance();
                            break;
                        }
                        None => break,
                        _ => {}
                    }
                }
                continue;
            }

            break;
        }
    }

    /// Consumes a quoted section, including both quotes.
    ///
    /// An unterminated section runs to the end of the input.
    fn scan_quoted(&mut self, quote: char) {
        self.advance(); // opening quote
        while let Some(c) = self.advance() {
            if c == quote {
                if self.peek() == Some(quote) {
                    self.advance();
                } else {
                    break;
                }
            }
        }
    }

    /// Scans a word up to the next whitespace or punctuation.
    fn scan_word(&mut self) {
        while let Some(c) = self.peek() {
            if c.is_whitespace() || super::is_punctuation(c) || self.at_comment() {
                break;
            }
            if is_quote(c) {
                self.scan_quoted(c);
            } else {
                self.advance();
            }
        }
    }

    /// Returns the next token, or `None` at the end of input.
    pub fn next_token(&mut self) -> Option<&'a str> {
        self.skip_whitespace_and_comments();
        self.start = self.pos;

        let c = self.peek()?;
        if super::is_punctuation(c) {
            self.advance();
        } else {
            self.scan_word();
        }
        Some(&self.input[self.start..self.pos])
    }

    /// Tokenizes the entire input.
    #[must_use]
    pub fn tokenize(mut self) -> Vec<String> {
        let mut tokens = Vec::new();
        while let Some(token) = self.next_token() {
            tokens.push(token.to_string());
        }
        tokens
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token()
    }
}

const fn is_quote(c: char) -> bool {
    matches!(c, '\'' | '"' | '`')
}
