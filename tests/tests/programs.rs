// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use roverscript::{ExpressionError, InterpreterErrorKind};
use rstest::rstest;
use tests::interpret;

#[rstest]
#[case("int x = 5;\nx += 3;", "x", 8.0)]
#[case("float x = 1.5;\nx *= 4;", "x", 6.0)]
#[case("int x = 9 / 2;", "x", 4.0)]
#[case("float x = 9 / 2;", "x", 4.5)]
#[case("int x;\nx = 2.5;", "x", 2.5)]
#[case("float a = 2;\nfloat b = a * (a + 1);\nb -= a;", "b", 4.0)]
#[case("float x = 8;\nx /= 0;", "x", f64::INFINITY)]
fn variables(#[case] input: &str, #[case] name: &str, #[case] expected: f64) {
    let (interpreter, result) = interpret(input);
    result.unwrap();

    assert_eq!(interpreter.variable(name), Some(expected));
}

#[test]
fn goto_skips_declaration() {
    let (interpreter, result) = interpret("goto 3;\nint x = 1;\nint y = 2;");
    result.unwrap();

    assert_eq!(interpreter.variable("y"), Some(2.0));
    assert_eq!(interpreter.variable("x"), None);
}

#[test]
fn skipped_variable_cannot_be_updated() {
    let (_, result) = interpret("goto 3;\nint x = 1;\nint y = 2;\nx += 1;");
    let error = result.unwrap_err();

    assert_eq!(error.line, 4);
    assert_eq!(error.kind, InterpreterErrorKind::UndefinedVariable { name: "x".to_string() });
}

#[test]
fn backwards_jump_loops() {
    let input = "int i = 0;
i += 1;
goto 5;
goto 2;
goto 2;";

    // Line 5 keeps jumping back; stop it by advancing a bounded number of times.
    let mut interpreter = roverscript::Interpreter::from_source(input);
    for _ in 0..9 {
        interpreter.advance().unwrap();
    }

    assert_eq!(interpreter.variable("i"), Some(3.0));
    assert!(!interpreter.is_completed());
}

#[rstest]
#[case("int x;\nfloat x;", 2, InterpreterErrorKind::DuplicateVariable { name: "x".to_string() })]
#[case("int x = 1;\nint x = 2;", 2, InterpreterErrorKind::DuplicateVariable { name: "x".to_string() })]
#[case("y = 1;", 1, InterpreterErrorKind::UndefinedVariable { name: "y".to_string() })]
#[case("goto 7;", 1, InterpreterErrorKind::InvalidJumpTarget { target: 7, length: 1 })]
#[case("\ngoto 0;", 2, InterpreterErrorKind::InvalidJumpTarget { target: 0, length: 2 })]
#[case("goto -99999999999999999999;", 1, InterpreterErrorKind::InvalidJumpTarget { target: i64::MIN, length: 1 })]
#[case("goto +1;", 1, InterpreterErrorKind::Parse)]
#[case("int x;\nint y = x + z;", 2, InterpreterErrorKind::Expression(ExpressionError::UnknownVariable { name: "z".to_string() }))]
#[case("int x = (1 + 2;", 1, InterpreterErrorKind::Expression(ExpressionError::Syntax(roverscript::LexerError {
    column: 6,
    kind: roverscript::LexerErrorKind::UnbalancedParentheses { depth: 1 },
})))]
#[case("int x = 1 2;", 1, InterpreterErrorKind::Expression(ExpressionError::StackImbalance { depth: 2 }))]
#[case("right", 1, InterpreterErrorKind::Parse)]
#[case("int a;\n\nfly to mars;", 3, InterpreterErrorKind::Parse)]
fn errors(#[case] input: &str, #[case] line: usize, #[case] expected: InterpreterErrorKind) {
    let (_, result) = interpret(input);
    let error = result.unwrap_err();

    assert_eq!(error.line, line);
    assert_eq!(error.kind, expected);
}

#[test]
fn error_message_names_the_line() {
    let (_, result) = interpret("int x;\n  x += ghost;");
    let message = result.unwrap_err().to_string();

    assert_eq!(message, "Unknown variable `ghost` on line 2: `x += ghost;`");
}
