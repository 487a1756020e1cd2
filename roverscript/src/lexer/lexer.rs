// Copyright (C) 2023 - 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::str::CharIndices;

use log::trace;
use thiserror::Error;

use super::{Operator, Token, TokenKind};

pub struct Lexer<'input> {
    input: &'input str,
    chars: CharIndices<'input>,

    current: Option<(usize, char)>,
    parenthesis_depth: i64,
}

impl<'input> Lexer<'input> {
    pub fn new(input: &'input str) -> Self {
        Self {
            input,
            chars: input.char_indices(),
            current: None,
            parenthesis_depth: 0,
        }
    }

    pub fn next(&mut self) -> Result<Option<Token>, LexerError> {
        self.skip_whitespace();

        let Some(ch) = self.peek_char() else {
            return Ok(None);
        };

        let token = match ch {
            '0'..='9' => self.consume_number(),
            'a'..='z' | 'A'..='Z' | '_' => self.consume_identifier(),

            '(' => {
                self.parenthesis_depth += 1;
                self.consume_single_char_token(TokenKind::LeftParenthesis)
            }

            ')' => {
                self.parenthesis_depth -= 1;
                self.consume_single_char_token(TokenKind::RightParenthesis)
            }

            _ => match Operator::from_char(ch) {
                Some(operator) => self.consume_single_char_token(TokenKind::Operator(operator)),
                None => {
                    let offset = self.current_location();
                    return Err(LexerError {
                        column: self.column_of(offset),
                        kind: LexerErrorKind::UnexpectedCharacter(ch),
                    });
                }
            },
        };

        Ok(Some(token))
    }

    /// Consumes the whole input. Fails on the first character that does not
    /// start a token, or when the parentheses do not balance out.
    pub fn collect_all(mut self) -> Result<Vec<Token>, LexerError> {
        let mut tokens = Vec::new();

        while let Some(token) = self.next()? {
            tokens.push(token);
        }

        if self.parenthesis_depth != 0 {
            return Err(LexerError {
                column: self.column_of(self.input.len()),
                kind: LexerErrorKind::UnbalancedParentheses { depth: self.parenthesis_depth },
            });
        }

        trace!("Tokens of `{}`: {tokens:?}", self.input);
        Ok(tokens)
    }

    #[must_use]
    fn consume_single_char_token(&mut self, kind: TokenKind) -> Token {
        let begin = self.current_location();

        self.consume_char();

        let end = self.current_location();

        Token {
            kind,
            begin,
            end,
        }
    }

    fn consume_identifier(&mut self) -> Token {
        let begin = self.current_location();

        while let Some(c) = self.peek_char() {
            if !is_identifier_char(c) {
                break;
            }

            self.consume_char();
        }

        let end = self.current_location();

        Token {
            kind: TokenKind::Identifier(self.input[begin..end].to_string()),
            begin,
            end,
        }
    }

    /// Digits, optionally followed by a period and at least one more digit.
    /// A bare trailing period is left for the next token.
    fn consume_number(&mut self) -> Token {
        let begin = self.current_location();

        self.consume_digits();

        if self.peek_char() == Some('.') && self.peek_second_char().is_some_and(|c| c.is_ascii_digit()) {
            self.consume_char();
            self.consume_digits();
        }

        let end = self.current_location();
        let str = &self.input[begin..end];

        // Digits with an optional fraction always form a valid float literal.
        let number = str.parse().unwrap_or_default();

        Token {
            kind: TokenKind::Number(number),
            begin,
            end,
        }
    }

    fn consume_digits(&mut self) {
        while let Some(c) = self.peek_char() {
            if !c.is_ascii_digit() {
                break;
            }

            self.consume_char();
        }
    }

    fn skip_whitespace(&mut self) {
        while let Some(c) = self.peek_char() {
            if !c.is_whitespace() {
                break;
            }

            self.consume_char();
        }
    }

    fn peek_char(&mut self) -> Option<char> {
        if let Some((_, c)) = self.current {
            return Some(c);
        }

        self.current = self.chars.next();
        Some(self.current?.1)
    }

    fn peek_second_char(&mut self) -> Option<char> {
        _ = self.peek_char()?;
        self.chars.clone().next().map(|(_, c)| c)
    }

    fn consume_char(&mut self) {
        self.current = None;
        _ = self.peek_char();
    }

    /// Zero-based character column of a byte offset.
    fn column_of(&self, offset: usize) -> usize {
        self.input[..offset].chars().count()
    }

    fn current_location(&mut self) -> usize {
        _ = self.peek_char();
        match self.current {
            Some((offset, _)) => offset,
            None => self.input.len(),
        }
    }
}

/// Splits an expression into tokens.
pub fn tokenize(expression: &str) -> Result<Vec<Token>, LexerError> {
    Lexer::new(expression).collect_all()
}

fn is_identifier_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{kind} (column {})", .column + 1)]
pub struct LexerError {
    /// Zero-based, counted in characters.
    pub column: usize,
    pub kind: LexerErrorKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LexerErrorKind {
    #[error("Unexpected character `{0}` in expression")]
    UnexpectedCharacter(char),

    #[error("Parentheses do not balance, {depth} left open")]
    UnbalancedParentheses { depth: i64 },
}
