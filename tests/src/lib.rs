// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::sync::{Arc, Mutex};

use roverscript::{evaluate_expression, Command, CommandSubscriber, ExpressionError, Interpreter, InterpreterError, VariableStore};

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).filter(None, log::LevelFilter::max()).try_init();
}

pub fn interpret_expression(input: &str) -> Result<f64, ExpressionError> {
    evaluate_expression(input, &VariableStore::new())
}

/// Runs the program to completion, or up to the first error.
pub fn interpret(input: &str) -> (Interpreter, Result<(), InterpreterError>) {
    init_logging();

    let mut interpreter = Interpreter::from_source(input);
    let result = interpreter.run();
    (interpreter, result)
}

pub fn interpret_and_return_commands(input: &str) -> Vec<Command> {
    init_logging();

    let buffer = Arc::new(Mutex::new(Vec::new()));

    {
        let mut interpreter = Interpreter::from_source(input);
        interpreter.subscribe(TestSubscriber {
            buffer: Arc::clone(&buffer),
        });

        interpreter.run().unwrap();
    }

    Arc::try_unwrap(buffer).unwrap().into_inner().unwrap()
}

pub struct TestSubscriber {
    pub buffer: Arc<Mutex<Vec<Command>>>,
}

impl CommandSubscriber for TestSubscriber {
    fn on_command(&mut self, command: Command) {
        self.buffer.lock().unwrap().push(command);
    }
}
