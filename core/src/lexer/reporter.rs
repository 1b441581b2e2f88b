use crate::errors::LexError;

/// Sink for lexical errors found while scanning.
pub trait Reporter {
    fn report(&mut self, error: LexError);
}

impl Reporter for Vec<LexError> {
    fn report(&mut self, error: LexError) {
        self.push(error);
    }
}
