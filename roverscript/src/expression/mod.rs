// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

mod compiler;
mod evaluator;
mod postfix;

use log::trace;
use thiserror::Error;

use crate::{tokenize, LexerError, VariableStore};

pub use self::{
    compiler::to_postfix,
    evaluator::evaluate,
    postfix::{Postfix, PostfixToken},
};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExpressionError {
    #[error("Syntax error: {0}")]
    Syntax(#[from] LexerError),

    #[error("Parentheses do not match")]
    ParenMismatch,

    #[error("Unknown variable `{name}`")]
    UnknownVariable { name: String },

    #[error("Variable `{name}` is not defined")]
    UndefinedVariable { name: String },

    #[error("Malformed expression, {depth} value(s) left on the stack")]
    StackImbalance { depth: usize },
}

/// Runs the whole pipeline on a piece of source text: tokens, then postfix
/// order, then the value.
pub fn evaluate_expression(expression: &str, variables: &VariableStore) -> Result<f64, ExpressionError> {
    let tokens = tokenize(expression)?;
    let postfix = to_postfix(&tokens, variables)?;
    trace!("Postfix of `{expression}`: {postfix}");
    evaluate(&postfix, variables)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::NumericType;
    use rstest::rstest;

    #[rstest]
    #[case("2 + 3 * 4", 14.0)]
    #[case("10 - 3 - 2", 5.0)]
    #[case("(2 + 3) * 4", 20.0)]
    #[case("8 / 4 / 2", 1.0)]
    #[case("2 * 3 / 4", 1.5)]
    #[case("1.5 + 2.25", 3.75)]
    #[case("((7))", 7.0)]
    fn evaluates(#[case] input: &str, #[case] expected: f64) {
        assert_eq!(evaluate_expression(input, &VariableStore::new()), Ok(expected));
    }

    #[test]
    fn division_by_zero_is_infinite() {
        assert_eq!(evaluate_expression("1 / 0", &VariableStore::new()), Ok(f64::INFINITY));
    }

    #[test]
    fn zero_divided_by_zero_is_nan() {
        let value = evaluate_expression("0 / 0", &VariableStore::new()).unwrap();
        assert!(value.is_nan());
    }

    #[test]
    fn uses_variables() {
        let mut variables = VariableStore::new();
        assert!(variables.declare("foo", NumericType::Float, 10.0));
        assert!(variables.declare("bar", NumericType::Int, 0.0));

        let value = evaluate_expression(" foo* foo - 10 + 5 * 7 +24/(1 + 1  ) + bar", &variables);
        assert_eq!(value, Ok(137.0));
    }

    #[test]
    fn unknown_variable() {
        assert_eq!(
            evaluate_expression("x + 1", &VariableStore::new()),
            Err(ExpressionError::UnknownVariable { name: "x".to_string() })
        );
    }

    #[rstest]
    #[case("1 2")]
    #[case("+")]
    #[case("1 +")]
    fn malformed(#[case] input: &str) {
        let result = evaluate_expression(input, &VariableStore::new());
        assert!(matches!(result, Err(ExpressionError::StackImbalance { .. })), "{result:?}");
    }

    #[test]
    fn syntax_error_is_wrapped() {
        let result = evaluate_expression("2 $ 3", &VariableStore::new());
        assert!(matches!(result, Err(ExpressionError::Syntax(..))), "{result:?}");
    }
}
