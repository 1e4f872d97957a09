//! Evaluation errors.
//!
//! `EvalErrorKind` is the structured category; the factory functions below
//! are how the rest of the crate builds errors. Every error ends up as an
//! invalid [`crate::EvaluationResult`]; none of them escape `evaluate`.

use kx_parse::{BinaryOp, ParseError, Span, SystemFunction, UnaryOp};
use thiserror::Error;

use crate::Value;

pub type EvalResult = Result<Value, EvalError>;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EvalErrorKind {
    // Syntax
    #[error(transparent)]
    Parse(#[from] ParseError),

    // Symbols
    #[error("unknown symbol `{name}`")]
    UnknownSymbol { name: String },
    #[error("symbol `{name}` is bound to an empty expression")]
    EmptySymbol { name: String },
    #[error("symbol expansion exceeded depth {limit}")]
    DepthExceeded { limit: usize },

    // Arithmetic
    #[error("division by zero")]
    DivisionByZero,
    #[error("modulo by zero")]
    ModuloByZero,
    #[error("integer overflow in {operation}")]
    IntegerOverflow { operation: &'static str },
    #[error("{operation} produced a non-finite result")]
    NotFinite { operation: &'static str },
    #[error("zero raised to a negative power")]
    ZeroToNegativePower,
    #[error("shift amount {amount} out of range (0-127)")]
    ShiftOutOfRange { amount: i128 },
    #[error("`{function}` is undefined for {argument}")]
    Domain {
        function: SystemFunction,
        argument: String,
    },

    // Types
    #[error("operator `{op}` cannot be applied to {type_name}")]
    InvalidBinaryOp {
        type_name: &'static str,
        op: BinaryOp,
    },
    #[error("operator `{op}` cannot be applied to {type_name}")]
    InvalidUnaryOp {
        type_name: &'static str,
        op: UnaryOp,
    },
    #[error("cannot apply operator to {left} and {right}")]
    BinaryTypeMismatch {
        left: &'static str,
        right: &'static str,
    },
    #[error("type mismatch: expected {expected}, got {got}")]
    TypeMismatch {
        expected: &'static str,
        got: &'static str,
    },
}

/// An evaluation failure with the span of the offending node, when known.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{kind}")]
pub struct EvalError {
    pub kind: EvalErrorKind,
    pub span: Option<Span>,
}

impl EvalError {
    pub fn from_kind(kind: EvalErrorKind) -> Self {
        EvalError { kind, span: None }
    }

    /// Attach `span` unless a more precise one is already set.
    #[must_use]
    pub fn with_span(mut self, span: Span) -> Self {
        self.span.get_or_insert(span);
        self
    }
}

impl From<EvalErrorKind> for EvalError {
    fn from(kind: EvalErrorKind) -> Self {
        EvalError::from_kind(kind)
    }
}

impl From<ParseError> for EvalError {
    fn from(error: ParseError) -> Self {
        EvalError::from_kind(EvalErrorKind::Parse(error))
    }
}

#[cold]
pub fn unknown_symbol(name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UnknownSymbol {
        name: name.to_owned(),
    })
}

#[cold]
pub fn empty_symbol(name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::EmptySymbol {
        name: name.to_owned(),
    })
}

#[cold]
pub fn depth_exceeded(limit: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::DepthExceeded { limit })
}

#[cold]
pub fn division_by_zero() -> EvalError {
    EvalError::from_kind(EvalErrorKind::DivisionByZero)
}

#[cold]
pub fn modulo_by_zero() -> EvalError {
    EvalError::from_kind(EvalErrorKind::ModuloByZero)
}

#[cold]
pub fn integer_overflow(operation: &'static str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::IntegerOverflow { operation })
}

#[cold]
pub fn not_finite(operation: &'static str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::NotFinite { operation })
}

#[cold]
pub fn zero_to_negative_power() -> EvalError {
    EvalError::from_kind(EvalErrorKind::ZeroToNegativePower)
}

#[cold]
pub fn shift_out_of_range(amount: i128) -> EvalError {
    EvalError::from_kind(EvalErrorKind::ShiftOutOfRange { amount })
}

#[cold]
pub fn domain_error(function: SystemFunction, argument: &Value) -> EvalError {
    EvalError::from_kind(EvalErrorKind::Domain {
        function,
        argument: argument.to_string(),
    })
}

#[cold]
pub fn invalid_binary_op(type_name: &'static str, op: BinaryOp) -> EvalError {
    EvalError::from_kind(EvalErrorKind::InvalidBinaryOp { type_name, op })
}

#[cold]
pub fn invalid_unary_op(type_name: &'static str, op: UnaryOp) -> EvalError {
    EvalError::from_kind(EvalErrorKind::InvalidUnaryOp { type_name, op })
}

#[cold]
pub fn binary_type_mismatch(left: &'static str, right: &'static str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::BinaryTypeMismatch { left, right })
}

#[cold]
pub fn type_mismatch(expected: &'static str, got: &'static str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::TypeMismatch { expected, got })
}
