// Copyright (C) 2023 - 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use log::{debug, warn};

use crate::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecutionState {
    Running,
    Completed,
}

/// Executes a program one line per [`Interpreter::advance`] call.
#[derive(Debug)]
pub struct Interpreter {
    program: Vec<String>,
    program_counter: usize,
    variables: VariableStore,
    emitter: CommandEmitter,
    state: ExecutionState,
}

impl Interpreter {
    pub fn new<I, S>(lines: I) -> Self
            where I: IntoIterator<Item = S>,
                  S: Into<String> {
        Self {
            program: lines.into_iter().map(Into::into).collect(),
            program_counter: 0,
            variables: VariableStore::new(),
            emitter: CommandEmitter::new(),
            state: ExecutionState::Running,
        }
    }

    pub fn from_source(source_code: &str) -> Self {
        Self::new(source_code.lines())
    }

    /// Registers a subscriber for movement and end-of-program commands.
    /// Subscribers registered earlier are notified first.
    pub fn subscribe(&mut self, subscriber: impl CommandSubscriber + 'static) {
        self.emitter.subscribe(subscriber);
    }

    /// Executes the statement at the program counter. Once the counter has
    /// moved past the last line, this emits [`Command::EndOfProgram`] and the
    /// interpreter is completed; further calls do nothing.
    pub fn advance(&mut self) -> Result<ExecutionState, InterpreterError> {
        if self.state == ExecutionState::Completed {
            warn!("advance() called on a completed program");
            return Ok(self.state);
        }

        let index = self.program_counter;
        let Some(line) = self.program.get(index) else {
            debug!("Reached the end of the program after line {index}");
            self.emitter.emit(Command::EndOfProgram);
            self.state = ExecutionState::Completed;
            return Ok(self.state);
        };

        let Some(statement) = classify(line) else {
            return Err(self.error_at(index, InterpreterErrorKind::Parse));
        };

        debug!("Line {}: {statement:?}", index + 1);
        self.execute_statement(statement)
            .map_err(|kind| self.error_at(index, kind))?;

        Ok(self.state)
    }

    /// Advances until the program is completed or fails.
    pub fn run(&mut self) -> Result<(), InterpreterError> {
        while self.advance()? == ExecutionState::Running {}
        Ok(())
    }

    fn execute_statement(&mut self, statement: StatementKind) -> Result<(), InterpreterErrorKind> {
        match statement {
            StatementKind::Move(direction) => {
                self.emitter.emit(Command::from(direction));
                self.program_counter += 1;
            }

            StatementKind::Goto { target } => {
                self.program_counter = self.resolve_jump(target)?;
            }

            StatementKind::Declaration { ty, name, initializer } => {
                if self.variables.contains(&name) {
                    return Err(InterpreterErrorKind::DuplicateVariable { name });
                }

                let value = match initializer {
                    Some(expression) => ty.coerce(evaluate_expression(&expression, &self.variables)?),
                    None => 0.0,
                };

                let declared = self.variables.declare(&name, ty, value);
                debug_assert!(declared);
                debug!("Declared {} {name} = {value}", ty.name());

                self.program_counter += 1;
            }

            StatementKind::Update { name, operator, expression } => {
                let Some(current) = self.variables.get(&name) else {
                    return Err(InterpreterErrorKind::UndefinedVariable { name });
                };

                let value = evaluate_expression(&expression, &self.variables)?;
                let new = operator.apply(current, value);

                let updated = self.variables.set(&name, new);
                debug_assert!(updated);
                debug!("Updated {name} {operator} {value}, now {new}");

                self.program_counter += 1;
            }

            StatementKind::Blank => {
                self.program_counter += 1;
            }
        }

        Ok(())
    }

    /// Maps a one-based line number onto the zero-based program counter.
    fn resolve_jump(&self, target: i64) -> Result<usize, InterpreterErrorKind> {
        let length = self.program.len();

        target.checked_sub(1)
            .and_then(|index| usize::try_from(index).ok())
            .filter(|index| *index < length)
            .ok_or(InterpreterErrorKind::InvalidJumpTarget { target, length })
    }

    fn error_at(&self, index: usize, kind: InterpreterErrorKind) -> InterpreterError {
        InterpreterError {
            line: index + 1,
            text: self.program.get(index).cloned().unwrap_or_default(),
            kind,
        }
    }

    #[must_use]
    pub fn state(&self) -> ExecutionState {
        self.state
    }

    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.state == ExecutionState::Completed
    }

    #[must_use]
    pub fn program_counter(&self) -> usize {
        self.program_counter
    }

    #[must_use]
    pub fn program(&self) -> &[String] {
        &self.program
    }

    #[must_use]
    pub fn variables(&self) -> &VariableStore {
        &self.variables
    }

    #[must_use]
    pub fn variable(&self, name: &str) -> Option<f64> {
        self.variables.get(name)
    }
}
