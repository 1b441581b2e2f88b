use loxscan::lexer::keywords::KEYWORDS;

use super::completer::word_start;

/// Suggest the rest of a keyword when the word under the cursor can only
/// complete to one.
pub fn hint_for(line: &str, pos: usize) -> Option<String> {
    if pos < line.len() {
        return None;
    }

    let needle = &line[word_start(line)..];
    if needle.is_empty() {
        return None;
    }

    let mut matches = KEYWORDS
        .iter()
        .map(|(word, _)| *word)
        .filter(|kw| kw.starts_with(needle) && kw.len() > needle.len());
    let only = matches.next()?;
    if matches.next().is_some() {
        return None;
    }
    Some(only[needle.len()..].to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hints_unique_keyword() {
        assert_eq!(hint_for("whi", 3), Some("le".to_string()));
        assert_eq!(hint_for("print re", 8), Some("turn".to_string()));
    }

    #[test]
    fn ambiguous_or_complete_words_have_no_hint() {
        assert_eq!(hint_for("f", 1), None);
        assert_eq!(hint_for("var", 3), None);
        assert_eq!(hint_for("whi", 1), None);
    }
}
