//! Lexer for IP-XACT / SystemVerilog constant expressions.
//!
//! Produces `(TokenKind, len)` pairs from an expression string. Whitespace is
//! a token of its own, so token lengths always sum to the input length and
//! callers can rebuild the original text byte for byte (the expression
//! formatter relies on this).
//!
//! Numeric values are not computed during scanning. [`NumericLiteral`] and
//! [`RealLiteral`] decode a literal's text on demand.
//!
//! # Example
//!
//! ```text
//! 8'hFF + WIDTH
//! └──┬─┘│└┬┘│└─┬─┘
//!  Based│ + │ Ident
//!   Whitespace
//! ```

mod cursor;
mod literal;
mod scanner;
mod tag;

pub use cursor::Cursor;
pub use literal::{literal_base, LiteralError, NumericLiteral, RealLiteral};
pub use scanner::{scan_token, tokenize, Scanner};
pub use tag::{Token, TokenKind};
