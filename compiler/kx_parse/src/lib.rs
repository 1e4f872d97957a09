//! Recursive descent parser for IP-XACT constant expressions.
//!
//! Produces a flat tree in an [`ExprArena`]. Literal text is decoded while
//! parsing, so the evaluator only ever sees numbers, strings and names.

mod ast;
mod error;
mod parser;

pub use ast::{
    BinaryOp, Expr, ExprArena, ExprId, ExprKind, ExprRange, Span, SystemFunction, UnaryOp,
};
pub use error::ParseError;
pub use parser::{parse, ParsedExpr, Parser};

#[cfg(test)]
mod tests;
