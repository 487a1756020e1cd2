// Copyright (C) 2023 - 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::fmt::{Display, Formatter};

use crate::{Direction, Keyword, NumericType};

#[derive(Clone, Debug, PartialEq)]
pub enum StatementKind {
    Move(Direction),
    Goto {
        target: i64,
    },
    Declaration {
        ty: NumericType,
        name: String,
        initializer: Option<String>,
    },
    Update {
        name: String,
        operator: AssignOperator,
        expression: String,
    },
    Blank,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum AssignOperator {
    Assign,
    AddAssign,
    SubtractAssign,
    MultiplyAssign,
    DivideAssign,
}

impl AssignOperator {
    /// Checked in this order, so the compound forms win over plain `=`.
    const ALL: [Self; 5] = [
        Self::AddAssign,
        Self::SubtractAssign,
        Self::MultiplyAssign,
        Self::DivideAssign,
        Self::Assign,
    ];

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Assign => "=",
            Self::AddAssign => "+=",
            Self::SubtractAssign => "-=",
            Self::MultiplyAssign => "*=",
            Self::DivideAssign => "/=",
        }
    }

    #[must_use]
    pub fn apply(&self, current: f64, value: f64) -> f64 {
        match self {
            Self::Assign => value,
            Self::AddAssign => current + value,
            Self::SubtractAssign => current - value,
            Self::MultiplyAssign => current * value,
            Self::DivideAssign => current / value,
        }
    }

    fn strip_prefix(input: &str) -> Option<(Self, &str)> {
        Self::ALL.into_iter()
            .find_map(|op| input.strip_prefix(op.as_str()).map(|rest| (op, rest)))
    }
}

impl Display for AssignOperator {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

type StatementMatcher = fn(&str) -> Option<StatementKind>;

/// Tried top to bottom; the first pattern that matches decides the kind.
const MATCHERS: [StatementMatcher; 6] = [
    match_movement,
    match_goto,
    match_declaration_with_assignment,
    match_declaration,
    match_update,
    match_blank,
];

/// Classifies one source line. `None` means the line is not a statement.
#[must_use]
pub fn classify(line: &str) -> Option<StatementKind> {
    MATCHERS.iter().find_map(|matcher| matcher(line))
}

fn match_movement(line: &str) -> Option<StatementKind> {
    let body = statement_body(line)?;
    let direction = Direction::from_keyword(Keyword::parse(body)?)?;
    Some(StatementKind::Move(direction))
}

/// `goto` followed by an optionally negative run of digits. Literals that do
/// not fit an `i64` saturate, so they still end up as an invalid jump target.
fn match_goto(line: &str) -> Option<StatementKind> {
    let body = statement_body(line)?;
    let literal = body.strip_prefix(Keyword::Goto.as_str())?.trim_start();

    let (negative, digits) = match literal.strip_prefix('-') {
        Some(digits) => (true, digits),
        None => (false, literal),
    };

    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let target = literal.parse().unwrap_or(if negative { i64::MIN } else { i64::MAX });
    Some(StatementKind::Goto { target })
}

fn match_declaration_with_assignment(line: &str) -> Option<StatementKind> {
    let (ty, name, rest) = split_declaration(statement_body(line)?)?;

    let expression = rest.strip_prefix('=')?.trim();
    if expression.is_empty() {
        return None;
    }

    Some(StatementKind::Declaration {
        ty,
        name: name.to_string(),
        initializer: Some(expression.to_string()),
    })
}

fn match_declaration(line: &str) -> Option<StatementKind> {
    let (ty, name, rest) = split_declaration(statement_body(line)?)?;

    if !rest.is_empty() {
        return None;
    }

    Some(StatementKind::Declaration {
        ty,
        name: name.to_string(),
        initializer: None,
    })
}

fn match_update(line: &str) -> Option<StatementKind> {
    let (name, rest) = split_variable_name(statement_body(line)?)?;
    let (operator, expression) = AssignOperator::strip_prefix(rest.trim_start())?;

    let expression = expression.trim();
    if expression.is_empty() {
        return None;
    }

    Some(StatementKind::Update {
        name: name.to_string(),
        operator,
        expression: expression.to_string(),
    })
}

fn match_blank(line: &str) -> Option<StatementKind> {
    line.trim().is_empty().then_some(StatementKind::Blank)
}

/// The text before the terminating semicolon, without surrounding whitespace.
fn statement_body(line: &str) -> Option<&str> {
    Some(line.trim().strip_suffix(';')?.trim_end())
}

/// `(int|float) <name>` followed by whatever remains, left-trimmed.
fn split_declaration(body: &str) -> Option<(NumericType, &str, &str)> {
    let (keyword, rest) = split_identifier(body)?;
    let ty = NumericType::from_keyword(Keyword::parse(keyword)?)?;

    if !rest.starts_with(char::is_whitespace) {
        return None;
    }

    let (name, rest) = split_variable_name(rest.trim_start())?;
    Some((ty, name, rest.trim_start()))
}

fn split_variable_name(input: &str) -> Option<(&str, &str)> {
    let (name, rest) = split_identifier(input)?;

    if Keyword::is_reserved(name) {
        return None;
    }

    Some((name, rest))
}

/// Splits a leading `[A-Za-z_][A-Za-z0-9_]*` off the input.
fn split_identifier(input: &str) -> Option<(&str, &str)> {
    if !input.starts_with(|c: char| c.is_ascii_alphabetic() || c == '_') {
        return None;
    }

    let end = input.find(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
        .unwrap_or(input.len());

    Some(input.split_at(end))
}
