//! Byte cursor over an expression string.
//!
//! The cursor advances byte by byte. Reads past the end return `0x00`, so
//! scanning code can look ahead freely; [`Cursor::is_eof`] distinguishes the
//! end of input from an interior null byte.

/// Copyable cursor over an expression's bytes.
///
/// Being [`Copy`] makes snapshots for lookahead free.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    src: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    /// Create a cursor at position 0.
    pub fn new(src: &'a str) -> Self {
        Self { src, pos: 0 }
    }

    /// Create a cursor at `pos`, clamped to the end of `src`.
    pub fn at(src: &'a str, pos: usize) -> Self {
        Self {
            src,
            pos: pos.min(src.len()),
        }
    }

    /// Byte at the current position, `0x00` at end of input.
    #[inline]
    pub fn current(&self) -> u8 {
        self.byte_at(self.pos)
    }

    /// Byte one position ahead of current.
    #[inline]
    pub fn peek(&self) -> u8 {
        self.byte_at(self.pos + 1)
    }

    /// Byte two positions ahead of current.
    #[inline]
    pub fn peek2(&self) -> u8 {
        self.byte_at(self.pos + 2)
    }

    #[inline]
    fn byte_at(&self, index: usize) -> u8 {
        self.src.as_bytes().get(index).copied().unwrap_or(0)
    }

    /// Advance by one byte. No-op at end of input.
    #[inline]
    pub fn advance(&mut self) {
        if self.pos < self.src.len() {
            self.pos += 1;
        }
    }

    /// Advance by `n` bytes, stopping at end of input.
    #[inline]
    pub fn advance_n(&mut self, n: usize) {
        self.pos = (self.pos + n).min(self.src.len());
    }

    /// Advance past one complete UTF-8 character.
    ///
    /// Keeps the position on a character boundary when skipping non-ASCII
    /// input, so slices taken later stay valid.
    pub fn advance_char(&mut self) {
        let width = utf8_char_width(self.current());
        self.advance_n(width);
    }

    /// Returns `true` once every byte has been consumed.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.src.len()
    }

    /// Current byte offset.
    #[inline]
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Source text between `start` and `end`.
    ///
    /// Returns an empty string when the range is out of bounds or not on
    /// character boundaries.
    pub fn slice(&self, start: usize, end: usize) -> &'a str {
        self.src.get(start..end).unwrap_or("")
    }

    /// Source text from `start` up to the current position.
    pub fn slice_from(&self, start: usize) -> &'a str {
        self.slice(start, self.pos)
    }

    /// Advance while `pred` holds for the current byte.
    #[inline]
    pub fn eat_while(&mut self, pred: impl Fn(u8) -> bool) {
        while !self.is_eof() && pred(self.current()) {
            self.pos += 1;
        }
    }

    /// Skip ASCII whitespace (space, tab, CR, LF, form feed).
    #[inline]
    pub fn eat_whitespace(&mut self) {
        self.eat_while(|b| b.is_ascii_whitespace());
    }

    /// Advance up to (not past) the next `byte`, or to end of input.
    ///
    /// Returns `true` if `byte` was found.
    pub fn eat_until(&mut self, byte: u8) -> bool {
        self.eat_while(|b| b != byte);
        !self.is_eof()
    }
}

/// Width in bytes of the UTF-8 character starting with `byte`.
///
/// Continuation and invalid lead bytes count as one so that scanning always
/// makes progress.
pub(crate) fn utf8_char_width(byte: u8) -> usize {
    match byte {
        0xC0..=0xDF => 2,
        0xE0..=0xEF => 3,
        0xF0..=0xF7 => 4,
        _ => 1,
    }
}

#[cfg(test)]
mod tests;
