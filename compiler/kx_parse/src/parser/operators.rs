//! Operator matching helpers.

use kx_lexer::TokenKind;

use crate::ast::{BinaryOp, UnaryOp};
use crate::Parser;

impl Parser<'_> {
    pub(crate) fn match_equality_op(&self) -> Option<BinaryOp> {
        match self.current_kind() {
            TokenKind::EqualEqual => Some(BinaryOp::Eq),
            TokenKind::BangEqual => Some(BinaryOp::NotEq),
            TokenKind::EqualEqualEqual => Some(BinaryOp::CaseEq),
            TokenKind::BangEqualEqual => Some(BinaryOp::CaseNotEq),
            _ => None,
        }
    }

    pub(crate) fn match_relational_op(&self) -> Option<BinaryOp> {
        match self.current_kind() {
            TokenKind::Less => Some(BinaryOp::Lt),
            TokenKind::LessEqual => Some(BinaryOp::LtEq),
            TokenKind::Greater => Some(BinaryOp::Gt),
            TokenKind::GreaterEqual => Some(BinaryOp::GtEq),
            _ => None,
        }
    }

    pub(crate) fn match_shift_op(&self) -> Option<BinaryOp> {
        match self.current_kind() {
            TokenKind::LessLess => Some(BinaryOp::Shl),
            TokenKind::GreaterGreater => Some(BinaryOp::Shr),
            _ => None,
        }
    }

    pub(crate) fn match_additive_op(&self) -> Option<BinaryOp> {
        match self.current_kind() {
            TokenKind::Plus => Some(BinaryOp::Add),
            TokenKind::Minus => Some(BinaryOp::Sub),
            _ => None,
        }
    }

    pub(crate) fn match_multiplicative_op(&self) -> Option<BinaryOp> {
        match self.current_kind() {
            TokenKind::Star => Some(BinaryOp::Mul),
            TokenKind::Slash => Some(BinaryOp::Div),
            TokenKind::Percent => Some(BinaryOp::Mod),
            _ => None,
        }
    }

    pub(crate) fn match_unary_op(&self) -> Option<UnaryOp> {
        match self.current_kind() {
            TokenKind::Minus => Some(UnaryOp::Neg),
            TokenKind::Plus => Some(UnaryOp::Plus),
            TokenKind::Tilde => Some(UnaryOp::BitNot),
            TokenKind::Bang => Some(UnaryOp::Not),
            _ => None,
        }
    }
}
