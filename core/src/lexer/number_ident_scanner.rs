use super::keywords::{is_alpha_numeric, keyword};
use super::scanner::Scanner;
use super::token::{Literal, Token, TokenKind};

impl Scanner<'_> {
    pub(super) fn scan_number(&mut self, start: usize) -> Token {
        self.cursor.advance_while(|c| c.is_ascii_digit());

        // A '.' belongs to the number only when a digit follows it.
        if self.cursor.peek() == Some(b'.')
            && self.cursor.peek_next().is_some_and(|c| c.is_ascii_digit())
        {
            self.cursor.advance();
            self.cursor.advance_while(|c| c.is_ascii_digit());
        }

        let text = self.cursor.slice_from(start);
        // Digit runs with an optional fraction always parse.
        let value = text.parse::<f64>().unwrap_or(f64::NAN);
        self.make_token(TokenKind::Number, Literal::Number(value), start)
    }

    pub(super) fn scan_identifier(&mut self, start: usize) -> TokenKind {
        self.cursor.advance_while(is_alpha_numeric);
        keyword(self.cursor.slice_from(start)).unwrap_or(TokenKind::Identifier)
    }
}
