//! Parser tests.
//!
//! Trees are rendered as fully parenthesized text so precedence and
//! associativity can be checked at a glance.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use crate::{parse, ExprId, ExprKind, ParseError, ParsedExpr};
use kx_lexer::LiteralError;
use pretty_assertions::assert_eq;
use proptest::prelude::*;

fn render(parsed: &ParsedExpr, id: ExprId) -> String {
    let arena = &parsed.arena;
    match &arena.get_expr(id).kind {
        ExprKind::Int { value, .. } => value.to_string(),
        ExprKind::Real { value, precision } => format!("{:.*}", *precision as usize, value),
        ExprKind::Bool(b) => b.to_string(),
        ExprKind::Str(s) => format!("{s:?}"),
        ExprKind::Ident(name) => name.clone(),
        ExprKind::Array(items) => {
            let items: Vec<_> = arena
                .get_expr_list(*items)
                .iter()
                .map(|&item| render(parsed, item))
                .collect();
            format!("{{{}}}", items.join(","))
        }
        ExprKind::Call { func, args } => {
            let args: Vec<_> = arena
                .get_expr_list(*args)
                .iter()
                .map(|&arg| render(parsed, arg))
                .collect();
            format!("{func}({})", args.join(","))
        }
        ExprKind::Unary { op, operand } => format!("({op}{})", render(parsed, *operand)),
        ExprKind::Binary { op, left, right } => {
            format!("({} {op} {})", render(parsed, *left), render(parsed, *right))
        }
        ExprKind::Ternary {
            cond,
            then_expr,
            else_expr,
        } => format!(
            "({} ? {} : {})",
            render(parsed, *cond),
            render(parsed, *then_expr),
            render(parsed, *else_expr)
        ),
    }
}

fn tree(source: &str) -> String {
    let parsed = parse(source).unwrap();
    render(&parsed, parsed.root)
}

#[test]
fn literals() {
    assert_eq!(tree("8'hFF"), "255");
    assert_eq!(tree("10_000"), "10000");
    assert_eq!(tree("0.25"), "0.25");
    assert_eq!(tree("TRUE"), "true");
    assert_eq!(tree("\"a b\""), "\"a b\"");
}

#[test]
fn literal_radix_is_kept() {
    let parsed = parse("'o17").unwrap();
    assert_eq!(
        parsed.arena.get_expr(parsed.root).kind,
        ExprKind::Int { value: 15, radix: 8 }
    );
}

#[test]
fn multiplication_binds_tighter_than_addition() {
    assert_eq!(tree("2+3*4"), "(2 + (3 * 4))");
    assert_eq!(tree("6/2*4"), "((6 / 2) * 4)");
}

#[test]
fn power_is_left_associative() {
    assert_eq!(tree("2**3**2"), "((2 ** 3) ** 2)");
}

#[test]
fn unary_binds_tighter_than_power() {
    assert_eq!(tree("-2**2"), "((-2) ** 2)");
    assert_eq!(tree("2*-2"), "(2 * (-2))");
    assert_eq!(tree("~!x"), "(~(!x))");
}

#[test]
fn full_precedence_ladder() {
    assert_eq!(
        tree("a || b && c | d ^ e & f == g < h << i + j * k ** l"),
        "(a || (b && (c | (d ^ (e & (f == (g < (h << (i + (j * (k ** l)))))))))))"
    );
}

#[test]
fn ternary_is_right_associative() {
    assert_eq!(tree("1?11:2?12:0"), "(1 ? 11 : (2 ? 12 : 0))");
    assert_eq!(tree("1?12?1:0:22"), "(1 ? (12 ? 1 : 0) : 22)");
    assert_eq!(tree("3+2?3+3?4+7:1:0"), "((3 + 2) ? ((3 + 3) ? (4 + 7) : 1) : 0)");
}

#[test]
fn parentheses_override_precedence() {
    assert_eq!(tree("(1 + 1)*4"), "((1 + 1) * 4)");
    assert_eq!(tree(" ( ((  (2 ) ))  ) "), "2");
}

#[test]
fn parenthesized_span_covers_parens() {
    let parsed = parse("(1+1)").unwrap();
    let span = parsed.arena.get_expr(parsed.root).span;
    assert_eq!((span.start, span.end), (0, 5));
}

#[test]
fn arrays_and_calls() {
    assert_eq!(tree("{1,{2,3}}"), "{1,{2,3}}");
    assert_eq!(tree("$pow(2, 3) + $clog2(x)"), "($pow(2,3) + $clog2(x))");
}

#[test]
fn syntax_errors() {
    assert_eq!(parse("(2+").unwrap_err(), ParseError::UnexpectedEof);
    assert_eq!(parse("").unwrap_err(), ParseError::Empty);
    assert_eq!(parse("   ").unwrap_err(), ParseError::Empty);
    assert_eq!(
        parse("(1))").unwrap_err(),
        ParseError::UnexpectedToken {
            found: ")".to_owned(),
            offset: 3,
        }
    );
    assert!(parse(")1(").is_err());
    assert!(parse("()").is_err());
    assert!(parse("{}").is_err());
    assert!(parse("{1,}").is_err());
    assert!(parse("1 2").is_err());
    assert!(parse("?").is_err());
    assert!(parse("(3+2)?(4+6)").is_err());
    assert!(parse("(3+2):(4+6)").is_err());
}

#[test]
fn token_errors() {
    assert_eq!(
        parse("{1,1,#}").unwrap_err(),
        ParseError::InvalidToken {
            text: "#".to_owned(),
            offset: 5,
        }
    );
    assert_eq!(
        parse("\"text").unwrap_err(),
        ParseError::UnterminatedString { offset: 0 }
    );
    assert_eq!(
        parse("'h + 1").unwrap_err(),
        ParseError::Literal {
            text: "'h".to_owned(),
            source: LiteralError::MissingDigits,
        }
    );
    assert!(matches!(
        parse("'b102").unwrap_err(),
        ParseError::Literal { .. }
    ));
}

#[test]
fn function_errors() {
    assert_eq!(
        parse("$ipxact_port_value(a)").unwrap_err(),
        ParseError::UnknownFunction("$ipxact_port_value".to_owned())
    );
    assert_eq!(
        parse("$pow(2)").unwrap_err(),
        ParseError::ArgumentCount {
            name: "$pow",
            expected: 2,
            found: 1,
        }
    );
    assert!(parse("$clog2 4").is_err());
}

#[test]
fn deep_nesting_does_not_overflow() {
    let depth = 5_000;
    let source = format!("{}1{}", "(".repeat(depth), ")".repeat(depth));
    assert_eq!(tree(&source), "1");

    let negations = format!("{}1", "-".repeat(depth));
    assert!(parse(&negations).is_ok());
}

proptest! {
    #[test]
    fn never_panics(source in "[0-9a-z'+*/()?:{},$ -]{0,30}") {
        let _ = parse(&source);
    }

    #[test]
    fn sums_parse_left_to_right(values in prop::collection::vec(0u32..1000, 2..8)) {
        let source = values.iter().map(u32::to_string).collect::<Vec<_>>().join(" + ");
        let expected = values
            .iter()
            .skip(1)
            .fold(values[0].to_string(), |acc, v| format!("({acc} + {v})"));
        prop_assert_eq!(tree(&source), expected);
    }
}
