//! Expression parsing and the binary operator precedence chain.
//!
//! Lowest to highest: ternary, `||`, `&&`, `|`, `^`, `&`, equality,
//! relational, shift, additive, multiplicative, `**`, unary, primary.

use kx_lexer::TokenKind;
use kx_stack::ensure_sufficient_stack;

use crate::ast::{BinaryOp, Expr, ExprId, ExprKind};
use crate::{ParseError, Parser};

impl Parser<'_> {
    /// Parse a full expression, including a ternary.
    ///
    /// Uses `ensure_sufficient_stack` so deeply nested parentheses and
    /// arrays cannot overflow the stack.
    pub(crate) fn parse_expr(&mut self) -> Result<ExprId, ParseError> {
        ensure_sufficient_stack(|| self.parse_ternary())
    }

    /// Parse `cond ? a : b`. Right-associative: both branches are full
    /// expressions, so `a ? b : c ? d : e` nests in the else branch.
    fn parse_ternary(&mut self) -> Result<ExprId, ParseError> {
        let cond = self.parse_logical_or()?;

        if !self.check(TokenKind::Question) {
            return Ok(cond);
        }
        self.advance();

        let then_expr = self.parse_expr()?;
        self.expect(TokenKind::Colon, ":")?;
        let else_expr = self.parse_expr()?;

        let span = self.span_of(cond).merge(self.span_of(else_expr));
        Ok(self.arena.alloc_expr(Expr::new(
            ExprKind::Ternary {
                cond,
                then_expr,
                else_expr,
            },
            span,
        )))
    }

    /// Allocate `left op right`.
    fn binary(&mut self, op: BinaryOp, left: ExprId, right: ExprId) -> ExprId {
        let span = self.span_of(left).merge(self.span_of(right));
        self.arena
            .alloc_expr(Expr::new(ExprKind::Binary { op, left, right }, span))
    }

    /// Parse `||`.
    fn parse_logical_or(&mut self) -> Result<ExprId, ParseError> {
        let mut left = self.parse_logical_and()?;

        while self.check(TokenKind::PipePipe) {
            self.advance();
            let right = self.parse_logical_and()?;
            left = self.binary(BinaryOp::Or, left, right);
        }

        Ok(left)
    }

    /// Parse `&&`.
    fn parse_logical_and(&mut self) -> Result<ExprId, ParseError> {
        let mut left = self.parse_bitwise_or()?;

        while self.check(TokenKind::AmpAmp) {
            self.advance();
            let right = self.parse_bitwise_or()?;
            left = self.binary(BinaryOp::And, left, right);
        }

        Ok(left)
    }

    /// Parse `|`.
    fn parse_bitwise_or(&mut self) -> Result<ExprId, ParseError> {
        let mut left = self.parse_bitwise_xor()?;

        while self.check(TokenKind::Pipe) {
            self.advance();
            let right = self.parse_bitwise_xor()?;
            left = self.binary(BinaryOp::BitOr, left, right);
        }

        Ok(left)
    }

    /// Parse `^`.
    fn parse_bitwise_xor(&mut self) -> Result<ExprId, ParseError> {
        let mut left = self.parse_bitwise_and()?;

        while self.check(TokenKind::Caret) {
            self.advance();
            let right = self.parse_bitwise_and()?;
            left = self.binary(BinaryOp::BitXor, left, right);
        }

        Ok(left)
    }

    /// Parse `&`.
    fn parse_bitwise_and(&mut self) -> Result<ExprId, ParseError> {
        let mut left = self.parse_equality()?;

        while self.check(TokenKind::Ampersand) {
            self.advance();
            let right = self.parse_equality()?;
            left = self.binary(BinaryOp::BitAnd, left, right);
        }

        Ok(left)
    }

    /// Parse `==`, `!=`, `===`, `!==`.
    fn parse_equality(&mut self) -> Result<ExprId, ParseError> {
        let mut left = self.parse_relational()?;

        while let Some(op) = self.match_equality_op() {
            self.advance();
            let right = self.parse_relational()?;
            left = self.binary(op, left, right);
        }

        Ok(left)
    }

    /// Parse `<`, `<=`, `>`, `>=`.
    fn parse_relational(&mut self) -> Result<ExprId, ParseError> {
        let mut left = self.parse_shift()?;

        while let Some(op) = self.match_relational_op() {
            self.advance();
            let right = self.parse_shift()?;
            left = self.binary(op, left, right);
        }

        Ok(left)
    }

    /// Parse `<<` and `>>`.
    fn parse_shift(&mut self) -> Result<ExprId, ParseError> {
        let mut left = self.parse_additive()?;

        while let Some(op) = self.match_shift_op() {
            self.advance();
            let right = self.parse_additive()?;
            left = self.binary(op, left, right);
        }

        Ok(left)
    }

    /// Parse `+` and `-`.
    fn parse_additive(&mut self) -> Result<ExprId, ParseError> {
        let mut left = self.parse_multiplicative()?;

        while let Some(op) = self.match_additive_op() {
            self.advance();
            let right = self.parse_multiplicative()?;
            left = self.binary(op, left, right);
        }

        Ok(left)
    }

    /// Parse `*`, `/`, `%`.
    fn parse_multiplicative(&mut self) -> Result<ExprId, ParseError> {
        let mut left = self.parse_power()?;

        while let Some(op) = self.match_multiplicative_op() {
            self.advance();
            let right = self.parse_power()?;
            left = self.binary(op, left, right);
        }

        Ok(left)
    }

    /// Parse `**`. Left-associative, and its operands are unary
    /// expressions, so `-2**2` is `(-2)**2`.
    fn parse_power(&mut self) -> Result<ExprId, ParseError> {
        let mut left = self.parse_unary()?;

        while self.check(TokenKind::StarStar) {
            self.advance();
            let right = self.parse_unary()?;
            left = self.binary(BinaryOp::Pow, left, right);
        }

        Ok(left)
    }

    /// Parse prefix `-`, `+`, `~`, `!`.
    fn parse_unary(&mut self) -> Result<ExprId, ParseError> {
        let Some(op) = self.match_unary_op() else {
            return self.parse_primary();
        };

        let start = self.current_span();
        self.advance();
        let operand = ensure_sufficient_stack(|| self.parse_unary())?;

        let span = start.merge(self.span_of(operand));
        Ok(self
            .arena
            .alloc_expr(Expr::new(ExprKind::Unary { op, operand }, span)))
    }
}
