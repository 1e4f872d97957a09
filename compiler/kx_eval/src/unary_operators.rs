//! Unary operator implementations for the evaluator.
//!
//! Direct enum dispatch, as for binary operators. `!` yields `1` or `0`;
//! `~` is defined on integers only.

use kx_parse::UnaryOp;

use crate::errors::{integer_overflow, invalid_unary_op, EvalResult};
use crate::Value;

/// Evaluate a unary operation.
pub fn evaluate_unary(value: Value, op: UnaryOp) -> EvalResult {
    match (&value, op) {
        (Value::Unknown, _) => Ok(Value::Unknown),

        // Numeric negation
        (Value::Int(n), UnaryOp::Neg) => n
            .checked_neg()
            .map(Value::Int)
            .ok_or_else(|| integer_overflow("negation")),
        (Value::Real { value, precision }, UnaryOp::Neg) => Ok(Value::real(-value, *precision)),

        // Unary plus is identity on numbers
        (Value::Int(_) | Value::Real { .. }, UnaryOp::Plus) => Ok(value),

        // Bitwise not
        (Value::Int(n), UnaryOp::BitNot) => Ok(Value::Int(!*n)),

        // Logical not
        (Value::Int(_) | Value::Real { .. }, UnaryOp::Not) => {
            Ok(Value::from_bool(value.truthiness() == Some(false)))
        }

        _ => Err(invalid_unary_op(value.type_name(), op)),
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests {
    use super::*;
    use crate::errors::EvalErrorKind;
    use pretty_assertions::assert_eq;

    mod negation {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn int() {
            assert_eq!(
                evaluate_unary(Value::Int(5), UnaryOp::Neg).unwrap(),
                Value::Int(-5)
            );
            assert_eq!(
                evaluate_unary(Value::Int(-5), UnaryOp::Neg).unwrap(),
                Value::Int(5)
            );
        }

        #[test]
        fn int_min_overflows() {
            let err = evaluate_unary(Value::Int(i128::MIN), UnaryOp::Neg).unwrap_err();
            assert_eq!(
                err.kind,
                EvalErrorKind::IntegerOverflow {
                    operation: "negation"
                }
            );
        }

        #[test]
        fn real_keeps_precision() {
            assert_eq!(
                evaluate_unary(Value::real(2.5, 2), UnaryOp::Neg).unwrap(),
                Value::real(-2.5, 2)
            );
        }
    }

    mod bitwise {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn complement() {
            assert_eq!(
                evaluate_unary(Value::Int(1), UnaryOp::BitNot).unwrap(),
                Value::Int(-2)
            );
        }

        #[test]
        fn rejects_reals() {
            assert!(evaluate_unary(Value::real(1.0, 1), UnaryOp::BitNot).is_err());
        }
    }

    mod logical {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn not() {
            assert_eq!(
                evaluate_unary(Value::Int(0), UnaryOp::Not).unwrap(),
                Value::Int(1)
            );
            assert_eq!(
                evaluate_unary(Value::Int(7), UnaryOp::Not).unwrap(),
                Value::Int(0)
            );
            assert_eq!(
                evaluate_unary(Value::real(0.5, 1), UnaryOp::Not).unwrap(),
                Value::Int(0)
            );
        }
    }

    #[test]
    fn plus_is_identity() {
        assert_eq!(
            evaluate_unary(Value::Int(3), UnaryOp::Plus).unwrap(),
            Value::Int(3)
        );
    }

    #[test]
    fn strings_and_arrays_are_rejected() {
        let err = evaluate_unary(Value::Str("a".to_owned()), UnaryOp::Neg).unwrap_err();
        assert_eq!(
            err.kind,
            EvalErrorKind::InvalidUnaryOp {
                type_name: "string",
                op: UnaryOp::Neg
            }
        );
        assert!(evaluate_unary(Value::Array(vec![Value::Int(1)]), UnaryOp::Not).is_err());
    }

    #[test]
    fn unknown_passes_through() {
        assert_eq!(
            evaluate_unary(Value::Unknown, UnaryOp::BitNot).unwrap(),
            Value::Unknown
        );
    }
}
