// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::fmt::{Debug, Display, Formatter};

use log::debug;

use crate::Keyword;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[derive(strum::AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum Direction {
    Right,
    Forward,
    Left,
    Backward,
}

impl Direction {
    #[must_use]
    pub const fn from_keyword(keyword: Keyword) -> Option<Self> {
        Some(match keyword {
            Keyword::Right => Self::Right,
            Keyword::Forward => Self::Forward,
            Keyword::Left => Self::Left,
            Keyword::Backward => Self::Backward,
            _ => return None,
        })
    }

    #[must_use]
    pub fn name(&self) -> &str {
        self.as_ref()
    }

    /// The numeric code a rover model receives for this direction.
    #[must_use]
    pub const fn code(&self) -> u8 {
        match self {
            Self::Right => 0,
            Self::Forward => 1,
            Self::Left => 2,
            Self::Backward => 3,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    MoveRight,
    MoveForward,
    MoveLeft,
    MoveBackward,
    EndOfProgram,
}

impl Command {
    #[must_use]
    pub const fn direction(&self) -> Option<Direction> {
        match self {
            Self::MoveRight => Some(Direction::Right),
            Self::MoveForward => Some(Direction::Forward),
            Self::MoveLeft => Some(Direction::Left),
            Self::MoveBackward => Some(Direction::Backward),
            Self::EndOfProgram => None,
        }
    }
}

impl From<Direction> for Command {
    fn from(value: Direction) -> Self {
        match value {
            Direction::Right => Self::MoveRight,
            Direction::Forward => Self::MoveForward,
            Direction::Left => Self::MoveLeft,
            Direction::Backward => Self::MoveBackward,
        }
    }
}

impl Display for Command {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.direction() {
            Some(direction) => write!(f, "move {} ({})", direction.name(), direction.code()),
            None => f.write_str("end of program"),
        }
    }
}

/// Receives every command the interpreter emits, synchronously and in
/// emission order.
pub trait CommandSubscriber {
    fn on_command(&mut self, command: Command);
}

impl<F> CommandSubscriber for F
        where F: FnMut(Command) {
    fn on_command(&mut self, command: Command) {
        self(command)
    }
}

#[derive(Default)]
pub struct CommandEmitter {
    subscribers: Vec<Box<dyn CommandSubscriber>>,
}

impl CommandEmitter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self, subscriber: impl CommandSubscriber + 'static) {
        self.subscribers.push(Box::new(subscriber));
    }

    /// Delivers the command to all subscribers in registration order.
    pub fn emit(&mut self, command: Command) {
        debug!("Emitting {command} to {} subscriber(s)", self.subscribers.len());

        for subscriber in &mut self.subscribers {
            subscriber.on_command(command);
        }
    }
}

impl Debug for CommandEmitter {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommandEmitter")
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}
