//! Primary expressions: literals, names, parentheses, arrays and system
//! function calls.

use kx_lexer::{NumericLiteral, RealLiteral, TokenKind};

use crate::ast::{Expr, ExprId, ExprKind, Span, SystemFunction};
use crate::{ParseError, Parser};

impl Parser<'_> {
    pub(crate) fn parse_primary(&mut self) -> Result<ExprId, ParseError> {
        let span = self.current_span();
        let text = self.current_text();

        let kind = match self.current_kind() {
            TokenKind::Int | TokenKind::Based => {
                let literal = NumericLiteral::parse(text).map_err(|source| ParseError::Literal {
                    text: text.to_owned(),
                    source,
                })?;
                ExprKind::Int {
                    value: literal.value(),
                    radix: literal.radix(),
                }
            }
            TokenKind::Real => {
                let literal = RealLiteral::parse(text).map_err(|source| ParseError::Literal {
                    text: text.to_owned(),
                    source,
                })?;
                ExprKind::Real {
                    value: literal.value,
                    precision: literal.precision,
                }
            }
            TokenKind::Bool => ExprKind::Bool(text.eq_ignore_ascii_case("true")),
            TokenKind::Str => {
                let inner = text
                    .strip_prefix('"')
                    .and_then(|rest| rest.strip_suffix('"'))
                    .unwrap_or_default();
                ExprKind::Str(inner.to_owned())
            }
            TokenKind::Ident => ExprKind::Ident(text.to_owned()),
            TokenKind::System => return self.parse_call(),
            TokenKind::LeftParen => return self.parse_parenthesized(),
            TokenKind::LeftBrace => return self.parse_array(),
            _ => return Err(self.unexpected()),
        };

        self.advance();
        Ok(self.arena.alloc_expr(Expr::new(kind, span)))
    }

    /// `( expr )`
    fn parse_parenthesized(&mut self) -> Result<ExprId, ParseError> {
        let open = self.current_span();
        self.advance();
        let inner = self.parse_expr()?;
        let close = self.expect(TokenKind::RightParen, ")")?;

        // The node keeps its own kind; only the span widens to cover the
        // parentheses.
        let mut expr = self.arena.get_expr(inner).clone();
        expr.span = open.merge(close);
        Ok(self.arena.alloc_expr(expr))
    }

    /// `{ expr, ... }`, at least one element.
    fn parse_array(&mut self) -> Result<ExprId, ParseError> {
        let open = self.current_span();
        self.advance();
        let items = self.parse_comma_list()?;
        let close = self.expect(TokenKind::RightBrace, "}")?;

        let range = self.arena.alloc_expr_list(items);
        Ok(self
            .arena
            .alloc_expr(Expr::new(ExprKind::Array(range), open.merge(close))))
    }

    /// `$name( args )`
    fn parse_call(&mut self) -> Result<ExprId, ParseError> {
        let name_span = self.current_span();
        let name = self.current_text();
        let func = SystemFunction::from_name(name)
            .ok_or_else(|| ParseError::UnknownFunction(name.to_owned()))?;
        self.advance();

        self.expect(TokenKind::LeftParen, "(")?;
        let args = self.parse_comma_list()?;
        let close = self.expect(TokenKind::RightParen, ")")?;

        if args.len() != func.arity() {
            return Err(ParseError::ArgumentCount {
                name: func.name(),
                expected: func.arity(),
                found: args.len(),
            });
        }

        let args = self.arena.alloc_expr_list(args);
        Ok(self.arena.alloc_expr(Expr::new(
            ExprKind::Call { func, args },
            Span::merge(name_span, close),
        )))
    }

    /// One or more comma-separated expressions.
    fn parse_comma_list(&mut self) -> Result<Vec<ExprId>, ParseError> {
        let mut items = vec![self.parse_expr()?];
        while self.check(TokenKind::Comma) {
            self.advance();
            items.push(self.parse_expr()?);
        }
        Ok(items)
    }
}
