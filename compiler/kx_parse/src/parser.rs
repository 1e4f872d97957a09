//! Parser state and token navigation.
//!
//! The grammar lives in the submodules:
//!
//! - `expr.rs`: entry point (`parse_expr`) and the binary precedence chain
//! - `operators.rs`: operator matching helpers
//! - `primary.rs`: literals, names, parentheses, arrays, system calls

mod expr;
mod operators;
mod primary;

use kx_lexer::{LiteralError, Scanner, TokenKind};

use crate::ast::{ExprArena, ExprId, Span};
use crate::ParseError;

/// A non-trivia token with its position.
#[derive(Copy, Clone, Debug)]
struct Spanned {
    kind: TokenKind,
    span: Span,
}

/// Parser over one expression.
pub struct Parser<'a> {
    source: &'a str,
    tokens: Vec<Spanned>,
    pos: usize,
    arena: ExprArena,
}

impl<'a> Parser<'a> {
    /// Tokenize `source`, dropping whitespace.
    ///
    /// Fails on the first error token so the grammar only ever sees
    /// well-formed tokens.
    pub fn new(source: &'a str) -> Result<Self, ParseError> {
        let mut tokens = Vec::new();
        let mut offset = 0;
        for token in Scanner::new(source) {
            let span = Span::new(offset, offset + token.len);
            offset = span.end;
            let text = source.get(span.start..span.end).unwrap_or_default();
            match token.kind {
                TokenKind::Whitespace => continue,
                TokenKind::Invalid => {
                    return Err(ParseError::InvalidToken {
                        text: text.to_owned(),
                        offset: span.start,
                    });
                }
                TokenKind::UnterminatedStr => {
                    return Err(ParseError::UnterminatedString { offset: span.start });
                }
                TokenKind::MalformedLiteral => {
                    return Err(ParseError::Literal {
                        text: text.to_owned(),
                        source: LiteralError::MissingDigits,
                    });
                }
                kind => tokens.push(Spanned { kind, span }),
            }
        }

        Ok(Parser {
            source,
            tokens,
            pos: 0,
            arena: ExprArena::new(),
        })
    }

    /// Parse the whole token stream as one expression.
    pub fn parse(mut self) -> Result<ParsedExpr, ParseError> {
        if self.tokens.is_empty() {
            return Err(ParseError::Empty);
        }

        let root = self.parse_expr()?;
        if !self.is_at_end() {
            return Err(self.unexpected());
        }

        Ok(ParsedExpr {
            arena: self.arena,
            root,
        })
    }

    #[inline]
    fn current_kind(&self) -> TokenKind {
        self.tokens.get(self.pos).map_or(TokenKind::Eof, |t| t.kind)
    }

    #[inline]
    fn current_span(&self) -> Span {
        self.tokens
            .get(self.pos)
            .map_or(Span::new(self.source.len(), self.source.len()), |t| t.span)
    }

    #[inline]
    fn current_text(&self) -> &'a str {
        let span = self.current_span();
        self.source.get(span.start..span.end).unwrap_or_default()
    }

    #[inline]
    fn check(&self, kind: TokenKind) -> bool {
        self.current_kind() == kind
    }

    #[inline]
    fn is_at_end(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    #[inline]
    fn advance(&mut self) {
        if !self.is_at_end() {
            self.pos += 1;
        }
    }

    /// Consume `kind` or fail with `expected`.
    fn expect(&mut self, kind: TokenKind, expected: &'static str) -> Result<Span, ParseError> {
        if self.check(kind) {
            let span = self.current_span();
            self.advance();
            Ok(span)
        } else if self.is_at_end() {
            Err(ParseError::UnexpectedEof)
        } else {
            Err(ParseError::Expected {
                expected,
                offset: self.current_span().start,
            })
        }
    }

    /// Error for the current token not fitting the grammar.
    fn unexpected(&self) -> ParseError {
        if self.is_at_end() {
            ParseError::UnexpectedEof
        } else {
            ParseError::UnexpectedToken {
                found: self.current_text().to_owned(),
                offset: self.current_span().start,
            }
        }
    }

    fn span_of(&self, id: ExprId) -> Span {
        self.arena.get_expr(id).span
    }
}

/// A successfully parsed expression.
#[derive(Clone, Debug)]
pub struct ParsedExpr {
    pub arena: ExprArena,
    pub root: ExprId,
}

/// Parse `source` into an expression tree.
pub fn parse(source: &str) -> Result<ParsedExpr, ParseError> {
    let result = Parser::new(source).and_then(Parser::parse);
    if let Err(error) = &result {
        tracing::trace!(source, %error, "parse failed");
    }
    result
}
