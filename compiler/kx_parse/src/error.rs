//! Parse error types.

use kx_lexer::LiteralError;
use thiserror::Error;

/// Why an expression could not be parsed.
///
/// Offsets are byte positions in the expression text.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("empty expression")]
    Empty,
    #[error("unexpected end of expression")]
    UnexpectedEof,
    #[error("unexpected `{found}` at byte {offset}")]
    UnexpectedToken { found: String, offset: usize },
    #[error("expected `{expected}` at byte {offset}")]
    Expected {
        expected: &'static str,
        offset: usize,
    },
    #[error("invalid character `{text}` at byte {offset}")]
    InvalidToken { text: String, offset: usize },
    #[error("unterminated string literal at byte {offset}")]
    UnterminatedString { offset: usize },
    #[error("malformed literal `{text}`: {source}")]
    Literal {
        text: String,
        #[source]
        source: LiteralError,
    },
    #[error("unknown system function `{0}`")]
    UnknownFunction(String),
    #[error("`{name}` takes {expected} argument(s), found {found}")]
    ArgumentCount {
        name: &'static str,
        expected: usize,
        found: usize,
    },
}

impl ParseError {
    /// Byte offset the error points at, when it has one.
    pub fn offset(&self) -> Option<usize> {
        match self {
            ParseError::UnexpectedToken { offset, .. }
            | ParseError::Expected { offset, .. }
            | ParseError::InvalidToken { offset, .. }
            | ParseError::UnterminatedString { offset } => Some(*offset),
            _ => None,
        }
    }
}
