use super::scanner::Scanner;
use super::token::{Literal, Token, TokenKind};
use crate::errors::LexError;

impl Scanner<'_> {
    /// Scan a string literal whose opening quote is already consumed.
    ///
    /// Strings may span lines and have no escape sequences.
    pub(super) fn scan_string(&mut self, start: usize) -> Result<Token, LexError> {
        self.cursor.advance_while(|c| c != b'"');

        if !self.cursor.match_char(b'"') {
            return Err(LexError::unterminated_string(
                self.cursor.line(),
                start,
                self.cursor.pos() - start,
            ));
        }

        // Trim the surrounding quotes.
        let value = self.cursor.slice_from(start + 1);
        let value = &value[..value.len() - 1];
        Ok(self.make_token(TokenKind::String, Literal::Str(value.to_owned()), start))
    }
}
