// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::fmt::{Display, Formatter};

use super::Operator;

#[derive(Clone, Debug, PartialEq)]
pub enum TokenKind {
    Number(f64),
    Identifier(String),
    Operator(Operator),

    LeftParenthesis,
    RightParenthesis,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(number) => number.fmt(f),
            Self::Identifier(ident) => f.write_str(ident),
            Self::Operator(operator) => operator.fmt(f),
            Self::LeftParenthesis => f.write_str("("),
            Self::RightParenthesis => f.write_str(")"),
        }
    }
}
