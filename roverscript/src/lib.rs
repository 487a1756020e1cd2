// Copyright (C) 2023 - 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

#![deny(elided_lifetimes_in_paths)]

mod command;
mod error;
mod expression;
mod interpreter;
mod keyword;
mod lexer;
mod statement;
mod variables;

pub use self::{
    command::{Command, CommandEmitter, CommandSubscriber, Direction},
    error::{InterpreterError, InterpreterErrorKind},
    expression::{evaluate, evaluate_expression, to_postfix, ExpressionError, Postfix, PostfixToken},
    interpreter::{ExecutionState, Interpreter},
    keyword::Keyword,
    lexer::{tokenize, Lexer, LexerError, LexerErrorKind, Operator, Token, TokenKind},
    statement::{classify, AssignOperator, StatementKind},
    variables::{NumericType, Variable, VariableStore},
};
