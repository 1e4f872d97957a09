//! Evaluator and symbol resolution for IP-XACT constant expressions.
//!
//! ```text
//! text ──parse──▶ ExprArena ──Interpreter──▶ Value ──Display──▶ EvaluationResult
//!                                  │
//!                         SymbolResolver + CycleGuard
//! ```
//!
//! [`ExpressionEvaluator::evaluate`] is the entry point. Identifiers are
//! looked up through a [`SymbolResolver`]; their bound expressions are
//! evaluated recursively under a [`CycleGuard`], and a circular reference
//! yields the indeterminate value `x` rather than an error.

mod cycle_guard;
pub mod errors;
mod evaluator;
mod functions;
mod inspect;
mod operators;
pub mod resolver;
mod unary_operators;
mod value;

pub use cycle_guard::{CycleGuard, Entry};
pub use errors::{EvalError, EvalErrorKind, EvalResult};
pub use evaluator::{EvalConfig, EvaluationResult, ExpressionEvaluator, DEFAULT_MAX_DEPTH};
pub use functions::call_function;
pub use operators::evaluate_binary;
pub use resolver::{
    DocumentResolver, InstanceResolver, NullResolver, Parameter, ParameterScope, Resolver,
    ScopeKind, SymbolResolver,
};
pub use unary_operators::evaluate_unary;
pub use value::Value;
