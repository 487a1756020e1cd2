// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use crate::{Operator, Token, TokenKind, VariableStore};

use super::{ExpressionError, Postfix, PostfixToken};

#[derive(Debug, Clone, Copy)]
enum StackEntry {
    LeftParenthesis,
    Operator(Operator),
}

impl StackEntry {
    const fn precedence(&self) -> i32 {
        match self {
            Self::LeftParenthesis => -1,
            Self::Operator(operator) => operator.precedence(),
        }
    }
}

/// Shunting-yard conversion from infix to postfix order. Identifiers must
/// name variables already present in `variables`.
pub fn to_postfix(tokens: &[Token], variables: &VariableStore) -> Result<Postfix, ExpressionError> {
    let mut output = Vec::with_capacity(tokens.len());
    let mut stack = Vec::new();

    for token in tokens {
        match &token.kind {
            TokenKind::Number(number) => output.push(PostfixToken::Number(*number)),

            TokenKind::Identifier(name) => {
                if !variables.contains(name) {
                    return Err(ExpressionError::UnknownVariable { name: name.clone() });
                }

                output.push(PostfixToken::Variable(name.clone()));
            }

            TokenKind::LeftParenthesis => stack.push(StackEntry::LeftParenthesis),

            TokenKind::RightParenthesis => loop {
                match stack.pop() {
                    Some(StackEntry::LeftParenthesis) => break,
                    Some(StackEntry::Operator(operator)) => output.push(PostfixToken::Operator(operator)),
                    None => return Err(ExpressionError::ParenMismatch),
                }
            },

            TokenKind::Operator(operator) => {
                // Equal precedence pops as well, which keeps `-` and `/` left-associative.
                while let Some(&top) = stack.last() {
                    if top.precedence() < operator.precedence() {
                        break;
                    }

                    stack.pop();
                    if let StackEntry::Operator(top) = top {
                        output.push(PostfixToken::Operator(top));
                    }
                }

                stack.push(StackEntry::Operator(*operator));
            }
        }
    }

    while let Some(entry) = stack.pop() {
        match entry {
            StackEntry::Operator(operator) => output.push(PostfixToken::Operator(operator)),
            StackEntry::LeftParenthesis => return Err(ExpressionError::ParenMismatch),
        }
    }

    Ok(Postfix::new(output))
}
