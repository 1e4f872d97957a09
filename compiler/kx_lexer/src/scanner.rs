//! Hand-written scanner producing `(TokenKind, len)` pairs.
//!
//! The scanner does not compute literal values or resolve names; literal
//! decoding lives in [`crate::literal`] and symbol lookup belongs to the
//! evaluator.
//!
//! # Design
//!
//! Main dispatch covers every byte value. Each arm calls a focused method
//! that advances the cursor and returns a [`Token`].

use crate::cursor::Cursor;
use crate::tag::{Token, TokenKind};

/// Scanner over one expression.
pub struct Scanner<'a> {
    cursor: Cursor<'a>,
}

impl<'a> Scanner<'a> {
    /// Create a scanner at the start of `source`.
    pub fn new(source: &'a str) -> Self {
        Self {
            cursor: Cursor::new(source),
        }
    }

    /// Create a scanner starting at byte `offset`.
    pub fn at(source: &'a str, offset: usize) -> Self {
        Self {
            cursor: Cursor::at(source, offset),
        }
    }

    /// Current byte offset.
    pub fn pos(&self) -> usize {
        self.cursor.pos()
    }

    /// Produce the next token.
    ///
    /// Returns [`TokenKind::Eof`] with `len == 0` once the source is
    /// exhausted, and keeps returning it on further calls.
    pub fn next_token(&mut self) -> Token {
        let start = self.cursor.pos();
        match self.cursor.current() {
            0 if self.cursor.is_eof() => Token::eof(),
            b' ' | b'\t' | b'\r' | b'\n' | 0x0C => self.whitespace(start),
            b'a'..=b'z' | b'A'..=b'Z' | b'_' => self.identifier(start),
            b'0'..=b'9' => self.number(start),
            b'\'' => self.based(start),
            b'"' => self.string(start),
            b'$' => self.system_name(start),
            b'+' => self.single(start, TokenKind::Plus),
            b'-' => self.single(start, TokenKind::Minus),
            b'*' => self.star(start),
            b'/' => self.single(start, TokenKind::Slash),
            b'%' => self.single(start, TokenKind::Percent),
            b'^' => self.single(start, TokenKind::Caret),
            b'~' => self.single(start, TokenKind::Tilde),
            b'?' => self.single(start, TokenKind::Question),
            b':' => self.single(start, TokenKind::Colon),
            b',' => self.single(start, TokenKind::Comma),
            b'(' => self.single(start, TokenKind::LeftParen),
            b')' => self.single(start, TokenKind::RightParen),
            b'{' => self.single(start, TokenKind::LeftBrace),
            b'}' => self.single(start, TokenKind::RightBrace),
            b'<' => self.less(start),
            b'>' => self.greater(start),
            b'=' => self.equal(start),
            b'!' => self.bang(start),
            b'&' => self.ampersand(start),
            b'|' => self.pipe(start),
            _ => self.invalid(start),
        }
    }

    fn token(&self, start: usize, kind: TokenKind) -> Token {
        Token::new(kind, self.cursor.pos() - start)
    }

    fn single(&mut self, start: usize, kind: TokenKind) -> Token {
        self.cursor.advance();
        self.token(start, kind)
    }

    /// Consume the current byte plus `extra` following bytes as one token.
    fn multi(&mut self, start: usize, extra: usize, kind: TokenKind) -> Token {
        self.cursor.advance_n(1 + extra);
        self.token(start, kind)
    }

    fn whitespace(&mut self, start: usize) -> Token {
        self.cursor.eat_whitespace();
        self.token(start, TokenKind::Whitespace)
    }

    fn invalid(&mut self, start: usize) -> Token {
        self.cursor.advance_char();
        self.token(start, TokenKind::Invalid)
    }

    // ─── Names ─────────────────────────────────────────────────────

    fn identifier(&mut self, start: usize) -> Token {
        self.cursor.advance();
        self.cursor.eat_while(is_ident_continue);
        let text = self.cursor.slice_from(start);
        if text.eq_ignore_ascii_case("true") || text.eq_ignore_ascii_case("false") {
            self.token(start, TokenKind::Bool)
        } else {
            self.token(start, TokenKind::Ident)
        }
    }

    fn system_name(&mut self, start: usize) -> Token {
        self.cursor.advance(); // consume '$'
        if !is_ident_continue(self.cursor.current()) {
            return self.token(start, TokenKind::Invalid);
        }
        self.cursor.eat_while(is_ident_continue);
        self.token(start, TokenKind::System)
    }

    // ─── Literals ──────────────────────────────────────────────────

    fn number(&mut self, start: usize) -> Token {
        self.eat_decimal_digits();

        if self.cursor.current() == b'.' && self.cursor.peek().is_ascii_digit() {
            self.cursor.advance(); // consume '.'
            self.eat_decimal_digits();
            return self.token(start, TokenKind::Real);
        }

        if self.cursor.current() == b'\'' {
            // Leading digits were the size of a based literal.
            return self.based(start);
        }

        self.token(start, TokenKind::Int)
    }

    /// Scan the `'[s][base]digits` part of a based literal.
    ///
    /// `start` may point at a size prefix already consumed by [`Self::number`].
    fn based(&mut self, start: usize) -> Token {
        self.cursor.advance(); // consume '\''
        if matches!(self.cursor.current(), b's' | b'S') {
            self.cursor.advance();
        }
        if matches!(
            self.cursor.current(),
            b'd' | b'D' | b'b' | b'B' | b'o' | b'O' | b'h' | b'H'
        ) {
            self.cursor.advance();
        }

        let digits_start = self.cursor.pos();
        // Digits are validated against the radix when the literal is decoded.
        self.cursor
            .eat_while(|b| b.is_ascii_alphanumeric() || b == b'_');
        if self.cursor.pos() == digits_start {
            return self.token(start, TokenKind::MalformedLiteral);
        }
        self.token(start, TokenKind::Based)
    }

    fn eat_decimal_digits(&mut self) {
        self.cursor.eat_while(|b| b.is_ascii_digit() || b == b'_');
    }

    fn string(&mut self, start: usize) -> Token {
        self.cursor.advance(); // consume opening '"'
        if self.cursor.eat_until(b'"') {
            self.cursor.advance(); // consume closing '"'
            self.token(start, TokenKind::Str)
        } else {
            self.token(start, TokenKind::UnterminatedStr)
        }
    }

    // ─── Operators ─────────────────────────────────────────────────

    fn star(&mut self, start: usize) -> Token {
        if self.cursor.peek() == b'*' {
            self.multi(start, 1, TokenKind::StarStar)
        } else {
            self.single(start, TokenKind::Star)
        }
    }

    fn less(&mut self, start: usize) -> Token {
        match self.cursor.peek() {
            b'<' => self.multi(start, 1, TokenKind::LessLess),
            b'=' => self.multi(start, 1, TokenKind::LessEqual),
            _ => self.single(start, TokenKind::Less),
        }
    }

    fn greater(&mut self, start: usize) -> Token {
        match self.cursor.peek() {
            b'>' => self.multi(start, 1, TokenKind::GreaterGreater),
            b'=' => self.multi(start, 1, TokenKind::GreaterEqual),
            _ => self.single(start, TokenKind::Greater),
        }
    }

    fn equal(&mut self, start: usize) -> Token {
        match (self.cursor.peek(), self.cursor.peek2()) {
            (b'=', b'=') => self.multi(start, 2, TokenKind::EqualEqualEqual),
            (b'=', _) => self.multi(start, 1, TokenKind::EqualEqual),
            // Assignment has no meaning in a constant expression.
            _ => self.single(start, TokenKind::Invalid),
        }
    }

    fn bang(&mut self, start: usize) -> Token {
        match (self.cursor.peek(), self.cursor.peek2()) {
            (b'=', b'=') => self.multi(start, 2, TokenKind::BangEqualEqual),
            (b'=', _) => self.multi(start, 1, TokenKind::BangEqual),
            _ => self.single(start, TokenKind::Bang),
        }
    }

    fn ampersand(&mut self, start: usize) -> Token {
        if self.cursor.peek() == b'&' {
            self.multi(start, 1, TokenKind::AmpAmp)
        } else {
            self.single(start, TokenKind::Ampersand)
        }
    }

    fn pipe(&mut self, start: usize) -> Token {
        if self.cursor.peek() == b'|' {
            self.multi(start, 1, TokenKind::PipePipe)
        } else {
            self.single(start, TokenKind::Pipe)
        }
    }
}

impl Iterator for Scanner<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        let token = self.next_token();
        if token.kind == TokenKind::Eof {
            None
        } else {
            Some(token)
        }
    }
}

/// Returns `true` if `b` may continue an identifier.
#[inline]
fn is_ident_continue(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

/// Scan the single token that starts at byte `offset` of `source`.
///
/// An offset at or past the end yields [`TokenKind::Eof`] with length 0.
pub fn scan_token(source: &str, offset: usize) -> Token {
    Scanner::at(source, offset).next_token()
}

/// Tokenize `source`, excluding the final `Eof`.
pub fn tokenize(source: &str) -> Vec<Token> {
    Scanner::new(source).collect()
}
