// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use roverscript::{ExpressionError, LexerErrorKind};
use rstest::rstest;
use tests::interpret_expression;

#[rstest]
#[case("10", 10.0)]
#[case("5 + 2", 7.0)]
#[case("4 * 9", 36.0)]
#[case("9 / 4", 2.25)]
#[case("1 - 0.5", 0.5)]
fn binary_operations(#[case] input: &str, #[case] expected: f64) {
    assert_eq!(interpret_expression(input), Ok(expected));
}

#[rstest]
#[case("10 * 4 + 5", 45.0)]
#[case("10 + 4 + 5", 19.0)]
#[case("10 + 4 * 5", 30.0)]
#[case("2 + 3 * 4", 14.0)]
#[case("(2 + 3) * 4", 20.0)]
#[case("10 - 3 - 2", 5.0)]
#[case("100 / 10 / 5", 2.0)]
#[case("2 * (3 + (4 - 1)) / 3", 4.0)]
fn precedence_and_associativity(#[case] input: &str, #[case] expected: f64) {
    assert_eq!(interpret_expression(input), Ok(expected));
}

#[test]
fn division_by_zero() {
    assert_eq!(interpret_expression("1 / 0"), Ok(f64::INFINITY));
    assert!(interpret_expression("0 / 0").unwrap().is_nan());
}

#[test]
fn no_unary_minus() {
    assert_eq!(interpret_expression("-1"), Err(ExpressionError::StackImbalance { depth: 1 }));
}

#[test]
fn unknown_variable() {
    assert_eq!(
        interpret_expression("x + 1"),
        Err(ExpressionError::UnknownVariable { name: "x".to_string() })
    );
}

#[rstest]
#[case("(1 + 2", LexerErrorKind::UnbalancedParentheses { depth: 1 })]
#[case("1 # 2", LexerErrorKind::UnexpectedCharacter('#'))]
#[case(".5 + 1", LexerErrorKind::UnexpectedCharacter('.'))]
fn syntax_errors(#[case] input: &str, #[case] expected: LexerErrorKind) {
    match interpret_expression(input) {
        Err(ExpressionError::Syntax(e)) => assert_eq!(e.kind, expected),
        other => panic!("Expected a syntax error, got {other:?}"),
    }
}

#[test]
fn parenthesis_mismatch() {
    assert_eq!(interpret_expression(")1 + 2("), Err(ExpressionError::ParenMismatch));
}
