pub mod errors;
pub mod lexer;

pub use errors::{LexError, LexErrors, LoxError};
pub use lexer::token::{Literal, Span, Token, TokenKind};
pub use lexer::{lex, Lexer, Reporter, ScanOutput};
