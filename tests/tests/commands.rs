// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::sync::{Arc, Mutex};

use roverscript::{Command, ExecutionState, Interpreter};
use rstest::rstest;
use tests::{interpret_and_return_commands, TestSubscriber};

#[rstest]
#[case(
    "
        forward;
    ",
    &[
        Command::MoveForward,
        Command::EndOfProgram,
    ],
)]
#[case(
    "
        right;
        int n = 2;
        left;
        backward;
    ",
    &[
        Command::MoveRight,
        Command::MoveLeft,
        Command::MoveBackward,
        Command::EndOfProgram,
    ],
)]
#[case(
    "goto 3;
        left;
        right;",
    &[
        Command::MoveRight,
        Command::EndOfProgram,
    ],
)]
#[case("", &[Command::EndOfProgram])]
fn interpret_and_return_commands_tests(#[case] input: &str, #[case] expected: &[Command]) {
    assert_eq!(interpret_and_return_commands(input), expected);
}

#[test]
fn all_subscribers_see_a_command_before_the_next_step() {
    let first = Arc::new(Mutex::new(Vec::new()));
    let second = Arc::new(Mutex::new(Vec::new()));

    let mut interpreter = Interpreter::new(["forward;", "left;"]);
    interpreter.subscribe(TestSubscriber { buffer: Arc::clone(&first) });
    interpreter.subscribe(TestSubscriber { buffer: Arc::clone(&second) });

    assert_eq!(interpreter.advance(), Ok(ExecutionState::Running));
    assert_eq!(*first.lock().unwrap(), [Command::MoveForward]);
    assert_eq!(*second.lock().unwrap(), [Command::MoveForward]);

    assert_eq!(interpreter.advance(), Ok(ExecutionState::Running));
    assert_eq!(*first.lock().unwrap(), [Command::MoveForward, Command::MoveLeft]);
    assert_eq!(*second.lock().unwrap(), [Command::MoveForward, Command::MoveLeft]);
}

#[test]
fn end_of_program_is_emitted_once() {
    let buffer = Arc::new(Mutex::new(Vec::new()));

    let mut interpreter = Interpreter::new(["int a;", "a += 1;", "", "right;"]);
    interpreter.subscribe(TestSubscriber { buffer: Arc::clone(&buffer) });

    for _ in 0..4 {
        assert_eq!(interpreter.advance(), Ok(ExecutionState::Running));
    }

    for _ in 0..3 {
        assert_eq!(interpreter.advance(), Ok(ExecutionState::Completed));
    }

    assert_eq!(*buffer.lock().unwrap(), [Command::MoveRight, Command::EndOfProgram]);
}
