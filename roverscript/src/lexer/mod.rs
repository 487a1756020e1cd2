// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

mod lexer;
mod operator;
mod token;
mod token_kind;

pub use self::{
    lexer::{
        tokenize,
        Lexer,
        LexerError,
        LexerErrorKind,
    },
    operator::Operator,
    token::Token,
    token_kind::TokenKind,
};
