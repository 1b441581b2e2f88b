pub mod cursor;
pub mod keywords;
mod number_ident_scanner;
mod reporter;
pub mod scanner;
mod string_scanner;
pub mod token;

pub use reporter::Reporter;

use crate::errors::{LexError, LexErrors};
use token::Token;

/// Result of one scan: the token stream plus every error reported on the way.
#[derive(Debug, Clone, PartialEq)]
pub struct ScanOutput {
    pub tokens: Vec<Token>,
    pub errors: Vec<LexError>,
}

impl ScanOutput {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// The tokens if the scan was clean, otherwise all of its errors.
    pub fn into_result(self) -> Result<Vec<Token>, LexErrors> {
        if !self.has_errors() {
            Ok(self.tokens)
        } else {
            Err(LexErrors {
                errors: self.errors,
            })
        }
    }
}

/// Scanner configuration.
#[derive(Debug, Clone, Copy)]
pub struct Lexer {
    first_line: usize,
}

impl Default for Lexer {
    fn default() -> Self {
        Self { first_line: 1 }
    }
}

impl Lexer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number the first line of the input `line` instead of 1.
    pub fn with_first_line(mut self, line: usize) -> Self {
        self.first_line = line.max(1);
        self
    }

    pub fn first_line(&self) -> usize {
        self.first_line
    }

    pub fn lex(&self, source: &str) -> ScanOutput {
        let mut errors = Vec::new();
        let tokens = self.lex_with(source, &mut errors);
        ScanOutput { tokens, errors }
    }

    /// Scan `source`, handing each lexical error to `reporter` as it is found.
    pub fn lex_with(&self, source: &str, reporter: &mut dyn Reporter) -> Vec<Token> {
        scanner::Scanner::new(source, self.first_line).scan_tokens(reporter)
    }
}

/// Tokenize source code into a list of tokens, starting at line 1.
pub fn lex(source: &str) -> ScanOutput {
    Lexer::new().lex(source)
}
