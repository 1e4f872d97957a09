//! The public evaluation entry point.
//!
//! [`ExpressionEvaluator`] holds only configuration. Each call builds a
//! fresh interpreter with its own cycle guard, so one evaluator can serve any
//! number of threads.

mod interpreter;

use crate::resolver::SymbolResolver;
use crate::EvalResult;

use interpreter::Interpreter;

/// Default ceiling on nested symbol expansions.
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Outcome of [`ExpressionEvaluator::evaluate`].
///
/// When `valid` is false, `value` is the expression text exactly as given,
/// so callers can keep showing what the user typed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EvaluationResult {
    pub value: String,
    pub valid: bool,
}

impl EvaluationResult {
    pub fn valid(value: impl Into<String>) -> Self {
        EvaluationResult {
            value: value.into(),
            valid: true,
        }
    }

    pub fn invalid(original: impl Into<String>) -> Self {
        EvaluationResult {
            value: original.into(),
            valid: false,
        }
    }

    /// `true` when the result is the indeterminate `x` of a circular
    /// reference.
    pub fn is_unknown(&self) -> bool {
        self.valid && self.value == "x"
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct EvalConfig {
    /// Maximum number of symbol expansions open at once.
    pub max_depth: usize,
}

impl Default for EvalConfig {
    fn default() -> Self {
        EvalConfig {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl EvalConfig {
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}

/// Evaluates IP-XACT constant expressions against a symbol resolver.
#[derive(Clone, Debug, Default)]
pub struct ExpressionEvaluator {
    config: EvalConfig,
}

impl ExpressionEvaluator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: EvalConfig) -> Self {
        ExpressionEvaluator { config }
    }

    pub fn config(&self) -> EvalConfig {
        self.config
    }

    /// Evaluate `expression` to its rendered value.
    ///
    /// Never fails: syntax errors, unknown symbols and arithmetic faults all
    /// produce an invalid result carrying `expression` unchanged. An empty
    /// (or all-whitespace) expression is valid and evaluates to `""`.
    pub fn evaluate(&self, expression: &str, resolver: &dyn SymbolResolver) -> EvaluationResult {
        if expression.trim().is_empty() {
            return EvaluationResult::valid("");
        }

        match self.evaluate_value(expression, resolver) {
            Ok(value) => EvaluationResult::valid(value.to_string()),
            Err(error) => {
                tracing::debug!(expression, %error, span = ?error.span, "invalid expression");
                EvaluationResult::invalid(expression)
            }
        }
    }

    /// Evaluate `expression` to a [`Value`](crate::Value), keeping the error.
    pub fn evaluate_value(&self, expression: &str, resolver: &dyn SymbolResolver) -> EvalResult {
        Interpreter::new(resolver, self.config).eval_source(expression)
    }
}
