mod lex_error;

pub use lex_error::{LexError, LexErrors};

use miette::Diagnostic;
use thiserror::Error;

/// Unified error type for the scanner and its drivers.
#[derive(Debug, Error, Diagnostic)]
pub enum LoxError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Lex(#[from] LexErrors),

    #[error("could not read '{path}'")]
    #[diagnostic(code(lox::io))]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to initialize REPL: {message}")]
    Repl { message: String },
}

impl LoxError {
    pub fn io(path: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
