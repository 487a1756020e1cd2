// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use crate::VariableStore;

use super::{ExpressionError, Postfix, PostfixToken};

/// Executes a postfix expression on a single value stack. The right-hand
/// operand sits on top, so it is popped first.
pub fn evaluate(postfix: &Postfix, variables: &VariableStore) -> Result<f64, ExpressionError> {
    let mut stack: Vec<f64> = Vec::new();

    for token in postfix.iter() {
        match token {
            PostfixToken::Number(number) => stack.push(*number),

            PostfixToken::Variable(name) => {
                let value = variables.get(name)
                    .ok_or_else(|| ExpressionError::UndefinedVariable { name: name.clone() })?;
                stack.push(value);
            }

            PostfixToken::Operator(operator) => {
                let rhs = stack.pop();
                let lhs = stack.pop();

                let (Some(lhs), Some(rhs)) = (lhs, rhs) else {
                    return Err(ExpressionError::StackImbalance { depth: usize::from(rhs.is_some()) });
                };

                stack.push(operator.apply(lhs, rhs));
            }
        }
    }

    match stack.as_slice() {
        [value] => Ok(*value),
        _ => Err(ExpressionError::StackImbalance { depth: stack.len() }),
    }
}
