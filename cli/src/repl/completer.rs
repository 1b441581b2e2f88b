use loxscan::lexer::keywords::{KEYWORDS, is_alpha_numeric};
use rustyline::completion::Pair;

const COMMANDS: [&str; 3] = [".help", ".load ", ".exit"];

pub fn complete_line(line: &str, pos: usize) -> (usize, Vec<Pair>) {
    let safe_pos = pos.min(line.len());
    let prefix = &line[..safe_pos];

    if prefix.starts_with('.') && !prefix.contains(' ') {
        let commands = COMMANDS
            .iter()
            .copied()
            .filter(|cmd| cmd.starts_with(prefix))
            .collect::<Vec<_>>();
        return (0, pairs(&commands));
    }

    let start = word_start(prefix);
    let needle = &prefix[start..];
    if needle.is_empty() {
        return (start, Vec::new());
    }
    let words = KEYWORDS
        .iter()
        .map(|(word, _)| *word)
        .filter(|kw| kw.starts_with(needle))
        .collect::<Vec<_>>();

    (start, pairs(&words))
}

fn pairs(values: &[&str]) -> Vec<Pair> {
    values
        .iter()
        .map(|v| Pair {
            display: (*v).to_string(),
            replacement: (*v).to_string(),
        })
        .collect()
}

pub fn word_start(prefix: &str) -> usize {
    prefix
        .char_indices()
        .rev()
        .find(|(_, ch)| !ch.is_ascii() || !is_alpha_numeric(*ch as u8))
        .map_or(0, |(idx, ch)| idx + ch.len_utf8())
}
