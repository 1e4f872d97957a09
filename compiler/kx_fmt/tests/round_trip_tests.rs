//! Formatted values evaluate back to the value they were formatted from.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use kx_eval::{EvaluationResult, ExpressionEvaluator, NullResolver};
use kx_fmt::format_value;
use pretty_assertions::assert_eq;
use proptest::prelude::*;

fn round_trip(decimal: &str, base: u32) -> EvaluationResult {
    let formatted = format_value(decimal, base).unwrap();
    ExpressionEvaluator::new().evaluate(&formatted, &NullResolver)
}

#[test]
fn evaluated_array_round_trips() {
    let evaluator = ExpressionEvaluator::new();
    let value = evaluator.evaluate("{'h10, 'h14}", &NullResolver).value;
    assert_eq!(value, "{16,20}");
    assert_eq!(round_trip(&value, 16), EvaluationResult::valid("{16,20}"));
}

proptest! {
    #[test]
    fn hex_round_trip(n in any::<i64>()) {
        let decimal = n.to_string();
        prop_assert_eq!(round_trip(&decimal, 16), EvaluationResult::valid(decimal.clone()));
    }

    #[test]
    fn every_base_round_trips(n in any::<u64>(), base in prop::sample::select(vec![2_u32, 8, 10, 16])) {
        let decimal = n.to_string();
        prop_assert_eq!(round_trip(&decimal, base), EvaluationResult::valid(decimal.clone()));
    }
}
