use std::borrow::Cow;

use loxscan::{Token, TokenKind};
use owo_colors::OwoColorize;

/// Colour a line using the scanner's own tokens. Text between tokens
/// (whitespace, comments, rejected characters) is dimmed.
pub fn highlight_line(line: &str) -> Cow<'_, str> {
    let tokens = loxscan::lex(line).tokens;
    let mut out = String::with_capacity(line.len() * 2);
    let mut last = 0;

    for token in tokens.iter().filter(|t| t.kind != TokenKind::Eof) {
        if token.span.start > last {
            let gap = &line[last..token.span.start];
            out.push_str(&gap.bright_black().to_string());
        }
        out.push_str(&paint(token));
        last = token.span.end;
    }
    if last < line.len() {
        let rest = &line[last..];
        out.push_str(&rest.bright_black().to_string());
    }

    Cow::Owned(out)
}

fn paint(token: &Token) -> String {
    let text = token.lexeme.as_str();
    match token.kind {
        kind if kind.is_keyword() => text.blue().bold().to_string(),
        TokenKind::String => text.green().to_string(),
        TokenKind::Number => text.yellow().to_string(),
        TokenKind::Identifier => text.to_string(),
        _ => text.cyan().to_string(),
    }
}

pub fn highlight_prompt(prompt: &str) -> Cow<'_, str> {
    if prompt == "> " {
        return Cow::Owned(format!("{} ", ">".bright_green().bold()));
    }
    Cow::Borrowed(prompt)
}

pub fn highlight_hint(hint: &str) -> Cow<'_, str> {
    Cow::Owned(hint.bright_black().to_string())
}
