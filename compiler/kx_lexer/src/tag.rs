//! Token kinds and the `(kind, len)` token pair.

/// Kind of a scanned token.
///
/// Error conditions are encoded as kinds (`Invalid`, `UnterminatedStr`,
/// `MalformedLiteral`) rather than as `Result::Err`, so scanning never fails
/// and always makes progress.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // Literals & names
    /// Plain decimal integer, e.g. `42`, `10_000`.
    Int,
    /// Fixed-point real, e.g. `0.25`.
    Real,
    /// Sized and/or based literal, e.g. `8'hFF`, `'b1010`, `'2`.
    Based,
    /// Double-quoted string literal including the quotes.
    Str,
    /// `true` / `false`, case-insensitive.
    Bool,
    /// Symbol name or parameter id.
    Ident,
    /// System function name including the `$`, e.g. `$clog2`.
    System,

    // Operators
    Plus,
    Minus,
    Star,
    StarStar,
    Slash,
    Percent,
    LessLess,
    GreaterGreater,
    Less,
    LessEqual,
    Greater,
    GreaterEqual,
    EqualEqual,
    BangEqual,
    EqualEqualEqual,
    BangEqualEqual,
    Ampersand,
    AmpAmp,
    Pipe,
    PipePipe,
    Caret,
    Tilde,
    Bang,
    Question,
    Colon,

    // Delimiters
    LeftParen,
    RightParen,
    LeftBrace,
    RightBrace,
    Comma,

    // Trivia
    Whitespace,

    // Errors
    /// A byte that cannot start any token.
    Invalid,
    /// `"` without a closing quote.
    UnterminatedStr,
    /// A tick literal with no digits, e.g. `'h` or `4'`.
    MalformedLiteral,

    /// End of input. Always has length 0.
    Eof,
}

impl TokenKind {
    /// Fixed source text of operator and delimiter kinds.
    pub fn lexeme(self) -> Option<&'static str> {
        let text = match self {
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Star => "*",
            Self::StarStar => "**",
            Self::Slash => "/",
            Self::Percent => "%",
            Self::LessLess => "<<",
            Self::GreaterGreater => ">>",
            Self::Less => "<",
            Self::LessEqual => "<=",
            Self::Greater => ">",
            Self::GreaterEqual => ">=",
            Self::EqualEqual => "==",
            Self::BangEqual => "!=",
            Self::EqualEqualEqual => "===",
            Self::BangEqualEqual => "!==",
            Self::Ampersand => "&",
            Self::AmpAmp => "&&",
            Self::Pipe => "|",
            Self::PipePipe => "||",
            Self::Caret => "^",
            Self::Tilde => "~",
            Self::Bang => "!",
            Self::Question => "?",
            Self::Colon => ":",
            Self::LeftParen => "(",
            Self::RightParen => ")",
            Self::LeftBrace => "{",
            Self::RightBrace => "}",
            Self::Comma => ",",
            _ => return None,
        };
        Some(text)
    }

    /// Returns `true` for the numeric literal kinds.
    pub fn is_number(self) -> bool {
        matches!(self, Self::Int | Self::Real | Self::Based)
    }

    /// Returns `true` for kinds that make an expression invalid.
    pub fn is_error(self) -> bool {
        matches!(
            self,
            Self::Invalid | Self::UnterminatedStr | Self::MalformedLiteral
        )
    }

    /// Returns `true` for binary, unary and ternary operator kinds.
    pub fn is_operator(self) -> bool {
        self.lexeme().is_some()
            && !matches!(
                self,
                Self::LeftParen | Self::RightParen | Self::LeftBrace | Self::RightBrace | Self::Comma
            )
    }

    /// Returns `true` for whitespace.
    pub fn is_trivia(self) -> bool {
        self == Self::Whitespace
    }
}

/// A scanned token: its kind and its length in bytes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub len: usize,
}

impl Token {
    pub fn new(kind: TokenKind, len: usize) -> Self {
        Self { kind, len }
    }

    /// The end-of-input token.
    pub fn eof() -> Self {
        Self {
            kind: TokenKind::Eof,
            len: 0,
        }
    }
}

#[cfg(test)]
mod tests;
