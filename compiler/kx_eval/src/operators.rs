//! Binary operator implementations.
//!
//! Direct enum dispatch on the operand pair. `Unknown` is absorbing and is
//! handled before any type check, so `x + {1}` is still `x`.

use kx_parse::BinaryOp;

use crate::errors::{
    binary_type_mismatch, division_by_zero, integer_overflow, invalid_binary_op, modulo_by_zero,
    not_finite, shift_out_of_range, zero_to_negative_power, EvalResult,
};
use crate::Value;

/// Checked arithmetic with overflow handling.
#[inline]
fn checked_arith(result: Option<i128>, op_name: &'static str) -> EvalResult {
    result.map(Value::Int).ok_or_else(|| integer_overflow(op_name))
}

/// Checked division with zero guard. Truncates toward zero.
#[inline]
fn checked_div(a: i128, b: i128) -> EvalResult {
    if b == 0 {
        Err(division_by_zero())
    } else {
        checked_arith(a.checked_div(b), "division")
    }
}

/// Checked remainder with zero guard.
#[inline]
fn checked_mod(a: i128, b: i128) -> EvalResult {
    if b == 0 {
        Err(modulo_by_zero())
    } else {
        checked_arith(a.checked_rem(b), "remainder")
    }
}

/// Evaluate `left op right`.
pub fn evaluate_binary(left: Value, right: Value, op: BinaryOp) -> EvalResult {
    match (&left, &right) {
        (Value::Unknown, _) | (_, Value::Unknown) => Ok(Value::Unknown),
        (Value::Array(_), _) | (_, Value::Array(_)) => Err(invalid_binary_op("arrays", op)),
        (Value::Int(a), Value::Int(b)) => eval_int_binary(*a, *b, op),
        (Value::Str(a), Value::Str(b)) => eval_string_binary(a, b, op),
        (Value::Int(_) | Value::Real { .. }, Value::Int(_) | Value::Real { .. }) => {
            eval_real_binary(&left, &right, op)
        }
        _ => Err(binary_type_mismatch(left.type_name(), right.type_name())),
    }
}

/// Binary operations on integers.
fn eval_int_binary(a: i128, b: i128, op: BinaryOp) -> EvalResult {
    match op {
        BinaryOp::Add => checked_arith(a.checked_add(b), "addition"),
        BinaryOp::Sub => checked_arith(a.checked_sub(b), "subtraction"),
        BinaryOp::Mul => checked_arith(a.checked_mul(b), "multiplication"),
        BinaryOp::Div => checked_div(a, b),
        BinaryOp::Mod => checked_mod(a, b),
        BinaryOp::Pow => int_pow(a, b).map(Value::Int),
        BinaryOp::Shl => shift_left(a, b),
        BinaryOp::Shr => shift_amount(b).map(|n| Value::Int(a >> n)),
        BinaryOp::Eq | BinaryOp::CaseEq => Ok(Value::from_bool(a == b)),
        BinaryOp::NotEq | BinaryOp::CaseNotEq => Ok(Value::from_bool(a != b)),
        BinaryOp::Lt => Ok(Value::from_bool(a < b)),
        BinaryOp::LtEq => Ok(Value::from_bool(a <= b)),
        BinaryOp::Gt => Ok(Value::from_bool(a > b)),
        BinaryOp::GtEq => Ok(Value::from_bool(a >= b)),
        BinaryOp::BitAnd => Ok(Value::Int(a & b)),
        BinaryOp::BitOr => Ok(Value::Int(a | b)),
        BinaryOp::BitXor => Ok(Value::Int(a ^ b)),
        BinaryOp::And => Ok(Value::from_bool(a != 0 && b != 0)),
        BinaryOp::Or => Ok(Value::from_bool(a != 0 || b != 0)),
    }
}

fn shift_amount(b: i128) -> Result<u32, crate::EvalError> {
    u32::try_from(b)
        .ok()
        .filter(|&n| n < i128::BITS)
        .ok_or_else(|| shift_out_of_range(b))
}

/// `a << b`, failing when significant bits would be shifted out.
fn shift_left(a: i128, b: i128) -> EvalResult {
    let n = shift_amount(b)?;
    let shifted = a << n;
    if shifted >> n == a {
        Ok(Value::Int(shifted))
    } else {
        Err(integer_overflow("left shift"))
    }
}

/// Integer power.
///
/// A negative exponent truncates the reciprocal toward zero, leaving only
/// `1`, `-1` and `0` as possible results.
pub(crate) fn int_pow(base: i128, exponent: i128) -> Result<i128, crate::EvalError> {
    let odd = exponent % 2 != 0;
    match base {
        0 if exponent < 0 => Err(zero_to_negative_power()),
        0 => Ok(i128::from(exponent == 0)),
        1 => Ok(1),
        -1 => Ok(if odd { -1 } else { 1 }),
        _ if exponent < 0 => Ok(0),
        _ => u32::try_from(exponent)
            .ok()
            .and_then(|e| base.checked_pow(e))
            .ok_or_else(|| integer_overflow("power")),
    }
}

/// String operands only support equality.
fn eval_string_binary(a: &str, b: &str, op: BinaryOp) -> EvalResult {
    match op {
        BinaryOp::Eq | BinaryOp::CaseEq => Ok(Value::from_bool(a == b)),
        BinaryOp::NotEq | BinaryOp::CaseNotEq => Ok(Value::from_bool(a != b)),
        _ => Err(invalid_binary_op("strings", op)),
    }
}

/// Binary operations where at least one operand is real.
///
/// The result carries the larger precision of the two operands. Division and
/// negative powers with an integer left operand truncate to an integer, so
/// `3/2.0` is `1` while `3.0/2` is `1.5`.
fn eval_real_binary(left: &Value, right: &Value, op: BinaryOp) -> EvalResult {
    let (Some(a), Some(b)) = (left.as_f64(), right.as_f64()) else {
        return Err(binary_type_mismatch(left.type_name(), right.type_name()));
    };
    let precision = left.precision().max(right.precision());
    let integer_left = matches!(left, Value::Int(_));

    let result = match op {
        BinaryOp::Add => a + b,
        BinaryOp::Sub => a - b,
        BinaryOp::Mul => a * b,
        BinaryOp::Div => {
            if b == 0.0 {
                return Err(division_by_zero());
            }
            if integer_left {
                return truncate(a / b, "division");
            }
            a / b
        }
        BinaryOp::Pow => {
            if a == 0.0 && b < 0.0 {
                return Err(zero_to_negative_power());
            }
            if integer_left && b < 0.0 {
                return truncate(a.powf(b), "power");
            }
            a.powf(b)
        }
        BinaryOp::Eq | BinaryOp::CaseEq => return Ok(Value::from_bool(a == b)),
        BinaryOp::NotEq | BinaryOp::CaseNotEq => return Ok(Value::from_bool(a != b)),
        BinaryOp::Lt => return Ok(Value::from_bool(a < b)),
        BinaryOp::LtEq => return Ok(Value::from_bool(a <= b)),
        BinaryOp::Gt => return Ok(Value::from_bool(a > b)),
        BinaryOp::GtEq => return Ok(Value::from_bool(a >= b)),
        BinaryOp::And => return Ok(Value::from_bool(a != 0.0 && b != 0.0)),
        BinaryOp::Or => return Ok(Value::from_bool(a != 0.0 || b != 0.0)),
        BinaryOp::Mod
        | BinaryOp::Shl
        | BinaryOp::Shr
        | BinaryOp::BitAnd
        | BinaryOp::BitOr
        | BinaryOp::BitXor => return Err(invalid_binary_op("reals", op)),
    };

    finite_real(result, precision, op_name(op))
}

/// Wrap a real result, rejecting infinities and NaN.
pub(crate) fn finite_real(value: f64, precision: u32, operation: &'static str) -> EvalResult {
    if value.is_finite() {
        Ok(Value::real(value, precision))
    } else {
        Err(not_finite(operation))
    }
}

/// Truncate a real toward zero into an integer.
#[allow(clippy::cast_possible_truncation)]
pub(crate) fn truncate(value: f64, operation: &'static str) -> EvalResult {
    // i128 spans roughly +/-1.7e38.
    const LIMIT: f64 = 1.0e38;
    if value.is_finite() && value.abs() < LIMIT {
        Ok(Value::Int(value.trunc() as i128))
    } else {
        Err(integer_overflow(operation))
    }
}

fn op_name(op: BinaryOp) -> &'static str {
    match op {
        BinaryOp::Add => "addition",
        BinaryOp::Sub => "subtraction",
        BinaryOp::Mul => "multiplication",
        BinaryOp::Div => "division",
        BinaryOp::Pow => "power",
        _ => "operation",
    }
}
