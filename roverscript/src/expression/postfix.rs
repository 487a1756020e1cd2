// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::fmt::{Display, Formatter};

use crate::Operator;

/// An expression in postfix order. Parentheses have been resolved away.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Postfix {
    tokens: Vec<PostfixToken>,
}

impl Postfix {
    #[must_use]
    pub fn new(tokens: Vec<PostfixToken>) -> Self {
        Self { tokens }
    }

    pub fn iter(&self) -> impl Iterator<Item = &PostfixToken> {
        self.tokens.iter()
    }
}

impl Display for Postfix {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for (idx, token) in self.tokens.iter().enumerate() {
            if idx != 0 {
                f.write_str(" ")?;
            }

            token.fmt(f)?;
        }

        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum PostfixToken {
    Number(f64),
    Variable(String),
    Operator(Operator),
}

impl Display for PostfixToken {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(number) => number.fmt(f),
            Self::Variable(name) => f.write_str(name),
            Self::Operator(operator) => operator.fmt(f),
        }
    }
}
