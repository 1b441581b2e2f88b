use super::token::TokenKind;

/// Reserved words and the token kinds they scan to.
pub const KEYWORDS: [(&str, TokenKind); 16] = [
    ("and", TokenKind::And),
    ("class", TokenKind::Class),
    ("else", TokenKind::Else),
    ("false", TokenKind::False),
    ("for", TokenKind::For),
    ("fun", TokenKind::Fun),
    ("if", TokenKind::If),
    ("nil", TokenKind::Nil),
    ("or", TokenKind::Or),
    ("print", TokenKind::Print),
    ("return", TokenKind::Return),
    ("super", TokenKind::Super),
    ("this", TokenKind::This),
    ("true", TokenKind::True),
    ("var", TokenKind::Var),
    ("while", TokenKind::While),
];

/// Look up an identifier-shaped lexeme in the keyword table.
pub fn keyword(text: &str) -> Option<TokenKind> {
    KEYWORDS
        .iter()
        .find(|(word, _)| *word == text)
        .map(|&(_, kind)| kind)
}

pub fn is_alpha(c: u8) -> bool {
    c.is_ascii_alphabetic() || c == b'_'
}

pub fn is_alpha_numeric(c: u8) -> bool {
    is_alpha(c) || c.is_ascii_digit()
}
