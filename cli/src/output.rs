use loxscan::{LexError, Reporter, Token};
use owo_colors::OwoColorize;

#[derive(Debug, Clone, Copy, Default)]
pub struct OutputOptions {
    pub json: bool,
    pub fancy: bool,
    pub quiet: bool,
}

/// Prints lexical errors to stderr as they are found and remembers whether
/// any were seen.
pub struct StderrReporter<'src> {
    source: &'src str,
    fancy: bool,
    had_error: bool,
}

impl<'src> StderrReporter<'src> {
    pub fn new(source: &'src str, fancy: bool) -> Self {
        Self {
            source,
            fancy,
            had_error: false,
        }
    }

    pub fn had_error(&self) -> bool {
        self.had_error
    }
}

impl Reporter for StderrReporter<'_> {
    fn report(&mut self, error: LexError) {
        self.had_error = true;
        if self.fancy {
            let report = miette::Report::new(error).with_source_code(self.source.to_owned());
            eprintln!("{report:?}");
        } else {
            eprintln!("{}", format_error(&error).red());
        }
    }
}

/// Format an error the way the reference Lox tools do.
pub fn format_error(error: &LexError) -> String {
    format!("[line {}] Error: {}", error.line(), error)
}

pub fn print_tokens(tokens: &[Token], json: bool) {
    if json {
        match serde_json::to_string_pretty(tokens) {
            Ok(text) => println!("{text}"),
            Err(err) => eprintln!("{} {err}", "json error:".red().bold()),
        }
        return;
    }
    for token in tokens {
        println!("{token}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_error_uses_line_prefix() {
        let error = LexError::unexpected_character(3, 10, 1);
        assert_eq!(format_error(&error), "[line 3] Error: Unexpected character.");
    }

    #[test]
    fn reporter_tracks_errors() {
        let mut reporter = StderrReporter::new("@", false);
        assert!(!reporter.had_error());
        let _ = loxscan::Lexer::new().lex_with("@", &mut reporter);
        assert!(reporter.had_error());
    }
}
