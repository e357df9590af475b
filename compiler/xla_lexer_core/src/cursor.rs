//! Character cursor over decoded source text.
//!
//! The source is decoded into a `Vec<char>` once, so peeking and slicing are
//! O(1) and positions are plain char offsets. EOF is `None` from
//! [`Cursor::current`].

/// Forward-only cursor over the characters of a source string.
#[derive(Clone, Debug)]
pub struct Cursor {
    chars: Vec<char>,
    pos: usize,
}

impl Cursor {
    /// Create a cursor positioned at the first character of `source`.
    pub fn new(source: &str) -> Self {
        Cursor {
            chars: source.chars().collect(),
            pos: 0,
        }
    }

    /// Current char offset.
    #[inline]
    #[allow(
        clippy::cast_possible_truncation,
        reason = "sources beyond u32::MAX chars are not supported"
    )]
    pub fn pos(&self) -> u32 {
        self.pos as u32
    }

    /// Total number of characters in the source.
    #[inline]
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Whether the source is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Whether the cursor has consumed every character.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.chars.len()
    }

    /// The character under the cursor, or `None` at EOF.
    #[inline]
    pub fn current(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    /// The character after the current one, or `None`.
    #[inline]
    pub fn peek(&self) -> Option<char> {
        self.chars.get(self.pos + 1).copied()
    }

    /// Consume and return the current character.
    #[inline]
    pub fn bump(&mut self) -> Option<char> {
        let c = self.current()?;
        self.pos += 1;
        Some(c)
    }

    /// Consume characters while `pred` holds, returning how many were eaten.
    pub fn eat_while(&mut self, mut pred: impl FnMut(char) -> bool) -> usize {
        let start = self.pos;
        while let Some(c) = self.current() {
            if !pred(c) {
                break;
            }
            self.pos += 1;
        }
        self.pos - start
    }

    /// Consume through the end of the current line, newline included.
    ///
    /// Returns the consumed text without the trailing `\n` (a `\r` before
    /// it is dropped too).
    pub fn eat_line(&mut self) -> String {
        let start = self.pos;
        self.eat_while(|c| c != '\n');
        let mut end = self.pos;
        if self.current() == Some('\n') {
            self.pos += 1;
        }
        if end > start && self.chars[end - 1] == '\r' {
            end -= 1;
        }
        self.chars[start..end].iter().collect()
    }

    /// Text between `start` (a previous [`Cursor::pos`]) and the cursor.
    pub fn slice_from(&self, start: u32) -> String {
        let start = (start as usize).min(self.pos);
        self.chars[start..self.pos].iter().collect()
    }
}
