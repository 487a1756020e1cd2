// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::{fmt::Display, path::Path};

use colored::{ColoredString, Colorize};
use roverscript::{InterpreterError, InterpreterErrorKind};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RunError {
    #[error(transparent)]
    Interpreter(#[from] InterpreterError),

    #[error("Program did not finish within {max_steps} steps")]
    StepLimitExceeded { max_steps: usize },
}

/// Prints a failing line with its neighbours and underlines the statement.
pub struct ErrorPrinter<'program> {
    path: &'program Path,
    program: &'program [String],
    line: usize,
    message: String,
    hint: Option<String>,

    line_number: ColoredString,
}

impl<'program> ErrorPrinter<'program> {
    /// `line` is one-based.
    #[must_use = "Use the `print` method to actually print"]
    pub fn new(path: &'program Path, program: &'program [String], line: usize, message: impl Display) -> Self {
        Self {
            path,
            program,
            line,
            message: message.to_string(),
            hint: None,

            line_number: line.to_string().blue().bold(),
        }
    }

    #[must_use = "Use the `print` method to actually print"]
    pub fn for_interpreter_error(path: &'program Path, program: &'program [String], error: &InterpreterError) -> Self {
        Self::new(path, program, error.line, &error.kind)
            .hint(hint_for(&error.kind))
    }

    #[must_use]
    pub fn hint(self, hint: impl Into<Option<String>>) -> Self {
        Self {
            hint: hint.into(),
            ..self
        }
    }

    pub fn print(self) {
        self.print_prelude();

        self.print_lines();

        self.print_postlude();
    }

    fn print_prelude(&self) {
        eprintln!("{}: {}", "error".red().bold(), self.message.bold());

        eprintln!();
    }

    fn print_lines(&self) {
        let index = self.line.saturating_sub(1);

        if let Some(previous) = index.checked_sub(1).and_then(|x| self.program.get(x)) {
            if !previous.trim().is_empty() {
                self.print_line(false, previous);
            }
        }

        let current = self.program.get(index).map(String::as_str).unwrap_or_default();
        self.print_line(true, current);
        self.print_error_indicator(current);

        if let Some(next) = self.program.get(index + 1) {
            if !next.trim().is_empty() {
                self.print_line(false, next);
            }
        }
    }

    fn print_line(&self, is_primary: bool, line: &str) {
        self.print_line_prefix(is_primary);
        eprintln!("{line}");
    }

    fn print_error_indicator(&self, line: &str) {
        let indent = line.len() - line.trim_start().len();
        let length = line.trim().chars().count();

        let spaces = " ".repeat(indent);
        let caret = "^".red().bold();
        let tildes = "~".repeat(length.saturating_sub(1)).red();

        let hint = match &self.hint {
            Some(hint) => format!("hint: {hint}").red().bold(),
            None => "".bold(),
        };

        self.print_line_prefix(false);
        eprintln!("{spaces}{caret}{tildes} {hint}");
    }

    fn print_line_prefix(&self, is_primary: bool) {
        let separator = " | ".blue().bold();

        if is_primary {
            eprint!("{} {separator}", self.line_number);
        } else {
            eprint!("{} {separator}", " ".repeat(self.line_number.len()));
        }
    }

    fn print_postlude(&self) {
        eprintln!();
        eprintln!("In {}:{}\n", self.path.display(), self.line);
    }
}

fn hint_for(kind: &InterpreterErrorKind) -> Option<String> {
    Some(match kind {
        InterpreterErrorKind::Expression(..) => return None,
        InterpreterErrorKind::DuplicateVariable { name } => format!("use `{name} = ...;` to change its value"),
        InterpreterErrorKind::UndefinedVariable { name } => format!("declare it first, e.g. `float {name};`"),
        InterpreterErrorKind::InvalidJumpTarget { length, .. } => format!("lines are numbered 1 to {length}"),
        InterpreterErrorKind::Parse => "expected a movement, `goto`, declaration or assignment ending in `;`".to_string(),
    })
}
