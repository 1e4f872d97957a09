//! Built-in `$` functions.
//!
//! `$sqrt` and `$exp` produce at most six significant digits, so `$exp(1)`
//! is `2.71828`. Results with no fractional part come back as integers.

use kx_parse::{BinaryOp, ParseError, SystemFunction};

use crate::errors::{domain_error, not_finite, type_mismatch, EvalResult};
use crate::operators::{evaluate_binary, truncate};
use crate::Value;

const SIGNIFICANT_DIGITS: i32 = 6;

/// Call `func` with already evaluated arguments.
///
/// Arity is checked by the parser; an `Unknown` argument makes the whole
/// call `Unknown`.
pub fn call_function(func: SystemFunction, mut args: Vec<Value>) -> EvalResult {
    if args.iter().any(Value::is_unknown) {
        return Ok(Value::Unknown);
    }
    match (func, args.as_mut_slice()) {
        (SystemFunction::Clog2, [arg]) => clog2(arg),
        (SystemFunction::Pow, [base, exponent]) => evaluate_binary(
            std::mem::replace(base, Value::Unknown),
            std::mem::replace(exponent, Value::Unknown),
            BinaryOp::Pow,
        ),
        (SystemFunction::Sqrt, [arg]) => sqrt(arg),
        (SystemFunction::Exp, [arg]) => {
            let x = number(arg)?;
            significant(x.exp(), "exponential")
        }
        (_, args) => Err(ParseError::ArgumentCount {
            name: func.name(),
            expected: func.arity(),
            found: args.len(),
        }
        .into()),
    }
}

/// Ceiling of log2. `$clog2(0)` and `$clog2(1)` are both `0`.
fn clog2(arg: &Value) -> EvalResult {
    let Value::Int(n) = *arg else {
        return Err(type_mismatch("integer", arg.type_name()));
    };
    match n {
        ..=-1 => Err(domain_error(SystemFunction::Clog2, arg)),
        0 | 1 => Ok(Value::Int(0)),
        _ => Ok(Value::Int(i128::from(i128::BITS - (n - 1).leading_zeros()))),
    }
}

fn sqrt(arg: &Value) -> EvalResult {
    let x = number(arg)?;
    if x < 0.0 {
        return Err(domain_error(SystemFunction::Sqrt, arg));
    }
    significant(x.sqrt(), "square root")
}

fn number(arg: &Value) -> Result<f64, crate::EvalError> {
    arg.as_f64()
        .ok_or_else(|| type_mismatch("number", arg.type_name()))
}

/// Round `value` to six significant digits.
///
/// Trailing zeros are dropped from the fraction; if nothing is left the
/// result is an integer.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "decimal counts are small and checked non-negative"
)]
fn significant(value: f64, operation: &'static str) -> EvalResult {
    if !value.is_finite() {
        return Err(not_finite(operation));
    }
    if value == 0.0 {
        return Ok(Value::Int(0));
    }

    let magnitude = value.abs().log10().floor() as i32;
    let decimals = SIGNIFICANT_DIGITS - 1 - magnitude;
    if decimals <= 0 {
        return truncate(value.round(), operation);
    }

    let text = format!("{:.*}", decimals as usize, value);
    let fraction = text
        .split_once('.')
        .map_or("", |(_, fraction)| fraction.trim_end_matches('0'));
    if fraction.is_empty() {
        return truncate(value.round(), operation);
    }

    let precision = fraction.len() as u32;
    let rounded: f64 = text.parse().map_err(|_| not_finite(operation))?;
    Ok(Value::real(rounded, precision))
}
