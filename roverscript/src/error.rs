// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use thiserror::Error;

use crate::ExpressionError;

/// A failure while executing a program, tied to the line that caused it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind} on line {line}: `{}`", .text.trim())]
pub struct InterpreterError {
    /// One-based, as written in the source.
    pub line: usize,
    pub text: String,
    pub kind: InterpreterErrorKind,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InterpreterErrorKind {
    #[error(transparent)]
    Expression(#[from] ExpressionError),

    #[error("Variable `{name}` is already declared")]
    DuplicateVariable { name: String },

    #[error("Variable `{name}` is not declared")]
    UndefinedVariable { name: String },

    #[error("Jump target {target} lies outside of the program, which has {length} line(s)")]
    InvalidJumpTarget { target: i64, length: usize },

    #[error("Line is not a statement")]
    Parse,
}
