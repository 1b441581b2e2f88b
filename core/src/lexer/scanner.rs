use tracing::{debug, trace};

use super::cursor::Cursor;
use super::keywords::is_alpha;
use super::reporter::Reporter;
use super::token::{Literal, Span, Token, TokenKind};
use crate::errors::LexError;

/// Scans source code into a sequence of tokens.
///
/// A scanner owns the cursor state of exactly one pass and is consumed by
/// [`Scanner::scan_tokens`], so nothing carries over between scans.
pub struct Scanner<'src> {
    pub(super) cursor: Cursor<'src>,
}

impl<'src> Scanner<'src> {
    pub fn new(source: &'src str, first_line: usize) -> Self {
        Self {
            cursor: Cursor::new(source, first_line),
        }
    }

    pub fn scan_tokens(mut self, reporter: &mut dyn Reporter) -> Vec<Token> {
        let mut tokens = Vec::new();
        let mut error_count = 0usize;

        while !self.cursor.is_at_end() {
            match self.scan_token() {
                Ok(Some(token)) => tokens.push(token),
                Ok(None) => {}
                Err(err) => {
                    trace!(line = err.line(), %err, "lexical error");
                    error_count += 1;
                    reporter.report(err);
                }
            }
        }

        tokens.push(Token::eof(self.cursor.line(), self.cursor.pos()));
        debug!(
            tokens = tokens.len(),
            errors = error_count,
            lines = self.cursor.line(),
            "scan finished"
        );
        tokens
    }

    /// Recognize one token starting at the cursor. Whitespace and comments
    /// yield `Ok(None)`.
    fn scan_token(&mut self) -> Result<Option<Token>, LexError> {
        let start = self.cursor.pos();
        let Some(ch) = self.cursor.advance() else {
            return Ok(None);
        };

        let kind = match ch {
            b'(' => TokenKind::LeftParen,
            b')' => TokenKind::RightParen,
            b'{' => TokenKind::LeftBrace,
            b'}' => TokenKind::RightBrace,
            b',' => TokenKind::Comma,
            b'.' => TokenKind::Dot,
            b'-' => TokenKind::Minus,
            b'+' => TokenKind::Plus,
            b';' => TokenKind::Semicolon,
            b'*' => TokenKind::Star,
            b'!' => self.either(b'=', TokenKind::BangEqual, TokenKind::Bang),
            b'=' => self.either(b'=', TokenKind::EqualEqual, TokenKind::Equal),
            b'<' => self.either(b'=', TokenKind::LessEqual, TokenKind::Less),
            b'>' => self.either(b'=', TokenKind::GreaterEqual, TokenKind::Greater),
            b'/' => {
                if self.cursor.match_char(b'/') {
                    // Line comment: skip until newline
                    self.cursor.advance_while(|c| c != b'\n');
                    return Ok(None);
                }
                TokenKind::Slash
            }
            // The cursor counts the newline itself.
            b' ' | b'\r' | b'\t' | b'\n' => return Ok(None),
            b'"' => return self.scan_string(start).map(Some),
            c if c.is_ascii_digit() => return Ok(Some(self.scan_number(start))),
            c if is_alpha(c) => self.scan_identifier(start),
            c => {
                if !c.is_ascii() {
                    self.cursor.skip_continuation_bytes();
                }
                return Err(LexError::unexpected_character(
                    self.cursor.line(),
                    start,
                    self.cursor.pos() - start,
                ));
            }
        };

        Ok(Some(self.make_token(kind, Literal::None, start)))
    }

    fn either(&mut self, expected: u8, matched: TokenKind, otherwise: TokenKind) -> TokenKind {
        if self.cursor.match_char(expected) {
            matched
        } else {
            otherwise
        }
    }

    pub(super) fn make_token(&self, kind: TokenKind, literal: Literal, start: usize) -> Token {
        Token::new(
            kind,
            self.cursor.slice_from(start),
            literal,
            self.cursor.line(),
            Span::new(start, self.cursor.pos()),
        )
    }
}
