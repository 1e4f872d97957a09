//! Tree-walking interpreter over a parsed expression.
//!
//! One `Interpreter` lives for one `evaluate` call. Symbol references
//! re-enter [`Interpreter::eval_source`] with the bound expression text,
//! sharing the cycle guard and depth counter.
//!
//! Evaluation is lazy where the result is already decided: the untaken
//! ternary branch, the right side of a short-circuited `&&`/`||`, and the
//! right operand of anything whose left operand is `Unknown` are never
//! evaluated. `1 ? 2 : 1/0` is therefore `2`.

use kx_parse::{BinaryOp, ExprArena, ExprId, ExprKind, ExprRange, SystemFunction, UnaryOp};
use kx_stack::ensure_sufficient_stack;

use super::EvalConfig;
use crate::cycle_guard::{CycleGuard, Entry};
use crate::errors::{depth_exceeded, empty_symbol, type_mismatch, unknown_symbol, EvalResult};
use crate::functions::call_function;
use crate::operators::evaluate_binary;
use crate::resolver::SymbolResolver;
use crate::unary_operators::evaluate_unary;
use crate::{EvalError, Value};

pub(super) struct Interpreter<'r> {
    resolver: &'r dyn SymbolResolver,
    guard: CycleGuard,
    /// Open symbol expansions. Tracked apart from the guard, which a cycle
    /// clears.
    depth: usize,
    max_depth: usize,
}

impl<'r> Interpreter<'r> {
    pub(super) fn new(resolver: &'r dyn SymbolResolver, config: EvalConfig) -> Self {
        Interpreter {
            resolver,
            guard: CycleGuard::new(),
            depth: 0,
            max_depth: config.max_depth,
        }
    }

    /// Parse and evaluate `source`.
    pub(super) fn eval_source(&mut self, source: &str) -> EvalResult {
        let parsed = kx_parse::parse(source)?;
        self.eval(&parsed.arena, parsed.root)
    }

    fn eval(&mut self, arena: &ExprArena, id: ExprId) -> EvalResult {
        ensure_sufficient_stack(|| self.eval_inner(arena, id))
    }

    fn eval_inner(&mut self, arena: &ExprArena, id: ExprId) -> EvalResult {
        let expr = arena.get_expr(id);
        let span = expr.span;

        let result = match &expr.kind {
            ExprKind::Int { value, .. } => Ok(Value::Int(*value)),
            ExprKind::Real { value, precision } => Ok(Value::real(*value, *precision)),
            ExprKind::Bool(b) => Ok(Value::from_bool(*b)),
            ExprKind::Str(s) => Ok(Value::Str(s.clone())),
            ExprKind::Ident(name) => {
                // Errors from inside the bound expression point at the reference.
                return self.expand(name).map_err(|error| EvalError {
                    span: Some(span),
                    ..error
                });
            }
            ExprKind::Array(range) => self
                .eval_list(arena, arena.get_expr_list(*range))
                .map(Value::Array),
            ExprKind::Call { func, args } => self.eval_call(arena, *func, *args),
            ExprKind::Unary { op, operand } => self.eval_unary(arena, *op, *operand),
            ExprKind::Binary { op, left, right } => self.eval_binary(arena, *op, *left, *right),
            ExprKind::Ternary {
                cond,
                then_expr,
                else_expr,
            } => self.eval_ternary(arena, *cond, *then_expr, *else_expr),
        };

        result.map_err(|error| error.with_span(span))
    }

    fn eval_list(&mut self, arena: &ExprArena, ids: &[ExprId]) -> Result<Vec<Value>, EvalError> {
        ids.iter().map(|&id| self.eval(arena, id)).collect()
    }

    /// Arguments stop at the first `Unknown`, which decides the call.
    fn eval_call(
        &mut self,
        arena: &ExprArena,
        func: SystemFunction,
        args: ExprRange,
    ) -> EvalResult {
        let ids = arena.get_expr_list(args);
        let mut values = Vec::with_capacity(ids.len());
        for &id in ids {
            let value = self.eval(arena, id)?;
            if value.is_unknown() {
                return Ok(Value::Unknown);
            }
            values.push(value);
        }
        call_function(func, values)
    }

    fn eval_unary(&mut self, arena: &ExprArena, op: UnaryOp, operand: ExprId) -> EvalResult {
        let value = self.eval(arena, operand)?;
        evaluate_unary(value, op)
    }

    fn eval_binary(
        &mut self,
        arena: &ExprArena,
        op: BinaryOp,
        left: ExprId,
        right: ExprId,
    ) -> EvalResult {
        let left = self.eval(arena, left)?;
        if left.is_unknown() {
            return Ok(Value::Unknown);
        }

        match op {
            BinaryOp::And | BinaryOp::Or => {
                let short_circuit = op == BinaryOp::Or;
                if condition(&left)? == short_circuit {
                    return Ok(Value::from_bool(short_circuit));
                }
                let right = self.eval(arena, right)?;
                if right.is_unknown() {
                    return Ok(Value::Unknown);
                }
                Ok(Value::from_bool(condition(&right)?))
            }
            _ => {
                let right = self.eval(arena, right)?;
                evaluate_binary(left, right, op)
            }
        }
    }

    fn eval_ternary(
        &mut self,
        arena: &ExprArena,
        cond: ExprId,
        then_expr: ExprId,
        else_expr: ExprId,
    ) -> EvalResult {
        let cond = self.eval(arena, cond)?;
        if cond.is_unknown() {
            return Ok(Value::Unknown);
        }
        let branch = if condition(&cond)? { then_expr } else { else_expr };
        self.eval(arena, branch)
    }

    /// Evaluate the expression bound to symbol `id`.
    #[tracing::instrument(level = "trace", skip(self))]
    fn expand(&mut self, id: &str) -> EvalResult {
        if !self.resolver.is_symbol(id) {
            return Err(unknown_symbol(id));
        }
        if self.depth >= self.max_depth {
            return Err(depth_exceeded(self.max_depth));
        }
        if self.guard.enter(id) == Entry::Cycle {
            tracing::debug!(id, "circular reference");
            return Ok(Value::Unknown);
        }

        let bound = self.resolver.value_for_id(id);
        self.depth += 1;
        let result = if bound.trim().is_empty() {
            Err(empty_symbol(id))
        } else {
            self.eval_source(&bound)
        };
        self.depth -= 1;
        self.guard.exit(id);
        if self.depth == 0 {
            self.guard.settle();
        }
        result
    }
}

/// Truth value of a condition operand. Strings and arrays have none.
fn condition(value: &Value) -> Result<bool, EvalError> {
    value
        .truthiness()
        .ok_or_else(|| type_mismatch("number", value.type_name()))
}
