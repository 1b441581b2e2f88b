/// Character-level reader over the source string.
///
/// Tracks the byte position and the current line. `advance` bumps the line
/// counter whenever it steps over a `\n`, so every consumer of the cursor
/// sees consistent line numbers.
pub struct Cursor<'src> {
    source: &'src str,
    bytes: &'src [u8],
    pos: usize,
    line: usize,
}

impl<'src> Cursor<'src> {
    pub fn new(source: &'src str, first_line: usize) -> Self {
        Self {
            source,
            bytes: source.as_bytes(),
            pos: 0,
            line: first_line,
        }
    }

    /// Current byte position in the source.
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Current line number.
    pub fn line(&self) -> usize {
        self.line
    }

    /// Peek at the current character without advancing.
    pub fn peek(&self) -> Option<u8> {
        self.bytes.get(self.pos).copied()
    }

    /// Peek at the next character (one ahead of current).
    pub fn peek_next(&self) -> Option<u8> {
        self.bytes.get(self.pos + 1).copied()
    }

    /// Advance one character and return it.
    pub fn advance(&mut self) -> Option<u8> {
        let ch = self.bytes.get(self.pos).copied()?;
        self.pos += 1;
        if ch == b'\n' {
            self.line += 1;
        }
        Some(ch)
    }

    /// Advance while `pred` holds for the current character.
    pub fn advance_while(&mut self, pred: impl Fn(u8) -> bool) {
        while let Some(c) = self.peek() {
            if !pred(c) {
                break;
            }
            self.advance();
        }
    }

    /// Skip the remaining bytes of a multi-byte UTF-8 character whose lead
    /// byte was just consumed.
    pub fn skip_continuation_bytes(&mut self) {
        while !self.source.is_char_boundary(self.pos) {
            self.pos += 1;
        }
    }

    /// Advance if the current character matches `expected`.
    pub fn match_char(&mut self, expected: u8) -> bool {
        if self.peek() == Some(expected) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Return a slice of the source from `start` to the current position.
    pub fn slice_from(&self, start: usize) -> &'src str {
        &self.source[start..self.pos]
    }

    /// Whether the cursor has reached the end.
    pub fn is_at_end(&self) -> bool {
        self.pos >= self.bytes.len()
    }
}
