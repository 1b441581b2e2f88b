use miette::{Diagnostic, SourceSpan};
use thiserror::Error;

/// A lexical error. Reporting one never stops the scan.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum LexError {
    #[error("Unexpected character.")]
    #[diagnostic(code(lox::unexpected_character))]
    UnexpectedCharacter {
        line: usize,
        #[label("not valid here")]
        span: SourceSpan,
    },

    #[error("Unterminated string.")]
    #[diagnostic(
        code(lox::unterminated_string),
        help("add a closing '\"' to end the string")
    )]
    UnterminatedString {
        line: usize,
        #[label("string starts here")]
        span: SourceSpan,
    },
}

impl LexError {
    pub fn unexpected_character(line: usize, offset: usize, length: usize) -> Self {
        Self::UnexpectedCharacter {
            line,
            span: (offset, length).into(),
        }
    }

    pub fn unterminated_string(line: usize, offset: usize, length: usize) -> Self {
        Self::UnterminatedString {
            line,
            span: (offset, length).into(),
        }
    }

    /// Line the error was reported on.
    pub fn line(&self) -> usize {
        match self {
            LexError::UnexpectedCharacter { line, .. }
            | LexError::UnterminatedString { line, .. } => *line,
        }
    }

    pub fn span(&self) -> SourceSpan {
        match self {
            LexError::UnexpectedCharacter { span, .. }
            | LexError::UnterminatedString { span, .. } => *span,
        }
    }

    pub fn message(&self) -> String {
        self.to_string()
    }
}

/// Every error reported during one scan.
#[derive(Debug, Error, Diagnostic)]
#[error("scanning failed with {} error(s)", .errors.len())]
pub struct LexErrors {
    #[related]
    pub errors: Vec<LexError>,
}
