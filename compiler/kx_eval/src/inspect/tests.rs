use super::*;
use crate::resolver::{DocumentResolver, NullResolver, Parameter, ParameterScope, ScopeKind};
use pretty_assertions::assert_eq;

fn document() -> DocumentResolver {
    DocumentResolver::from_scopes([ParameterScope::new(
        ScopeKind::Component,
        vec![
            Parameter::new("mask", "MASK", "'hFF"),
            Parameter::new("bits", "BITS", "'b1 + 1"),
            Parameter::new("plain", "PLAIN", "2 * mask"),
            Parameter::new("loop", "LOOP", "loop + 1"),
            Parameter::new("text", "TEXT", "\"hello\""),
        ],
    )])
}

#[test]
fn is_symbol_needs_the_whole_expression() {
    let doc = document();
    let evaluator = ExpressionEvaluator::new();
    assert!(evaluator.is_symbol("mask", &doc));
    assert!(evaluator.is_symbol("  mask ", &doc));
    assert!(!evaluator.is_symbol("mask + 1", &doc));
    assert!(!evaluator.is_symbol("unknown", &doc));
    assert!(!evaluator.is_symbol("mask", &NullResolver));
    assert!(!evaluator.is_symbol("", &doc));
}

#[test]
fn plain_values() {
    let evaluator = ExpressionEvaluator::new();
    for plain in ["1", "'h1", "\"text\"", "", "  1  ", "-99999", "-999999999999999999", "2.5"] {
        assert!(evaluator.is_plain_value(plain), "{plain:?} should be plain");
    }
}

#[test]
fn non_plain_values() {
    let evaluator = ExpressionEvaluator::new();
    for expression in ["'h1 + 'h1", "2 * 2", "$clog2(8)", "(8 + 2)", "width", "'b102", "- -1"] {
        assert!(
            !evaluator.is_plain_value(expression),
            "{expression:?} should not be plain"
        );
    }
}

#[test]
fn array_expressions() {
    let evaluator = ExpressionEvaluator::new();
    assert!(evaluator.is_array_expression("{1, 2}"));
    assert!(!evaluator.is_array_expression("1 + 2"));
    assert!(!evaluator.is_array_expression("{1, 2"));
}

#[test]
fn base_of_literals() {
    let evaluator = ExpressionEvaluator::new();
    let cases = [
        ("1", 10),
        ("'h1", 16),
        ("'o1", 8),
        ("'b1", 2),
        ("\"string\"", 0),
        ("'b01 + 'h01", 16),
        ("'h01 + 12", 16),
        ("8'd255", 10),
        ("0.5", 10),
        ("", 0),
    ];
    for (expression, expected) in cases {
        assert_eq!(
            evaluator.base_for_expression(expression, &NullResolver),
            expected,
            "{expression:?}"
        );
    }
}

#[test]
fn base_follows_symbols() {
    let doc = document();
    let evaluator = ExpressionEvaluator::new();
    assert_eq!(evaluator.base_for_expression("mask", &doc), 16);
    assert_eq!(evaluator.base_for_expression("bits", &doc), 10);
    assert_eq!(evaluator.base_for_expression("plain", &doc), 16);
    assert_eq!(evaluator.base_for_expression("text", &doc), 0);
}

#[test]
fn base_survives_cycles() {
    let doc = document();
    let evaluator = ExpressionEvaluator::new();
    assert_eq!(evaluator.base_for_expression("loop", &doc), 10);
}
