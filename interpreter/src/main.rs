// Copyright (C) 2023 - 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

#![deny(elided_lifetimes_in_paths)]

mod config;
mod error;
mod grid;
mod logger;

use std::{cell::RefCell, path::{Path, PathBuf}, process::exit, rc::Rc};

use anyhow::Context;
use clap::Subcommand;
use colored::Colorize;
use log::{info, LevelFilter};
use roverscript::{classify, to_postfix, evaluate, tokenize, ExecutionState, Interpreter, InterpreterError, InterpreterErrorKind, Keyword, NumericType, VariableStore};

use self::{
    config::ConfigRoot,
    error::{ErrorPrinter, RunError},
    grid::Grid,
    logger::Logger,
};

#[derive(clap::Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Commands,

    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file, instead of the `rover.toml` next to the script
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,
}

impl Args {
    pub fn parse_args() -> Self {
        use clap::Parser;
        Self::parse()
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Execute a script and drive the rover
    Run {
        file: PathBuf,

        /// Print the grid after every step
        #[arg(long)]
        show_grid: bool,

        #[arg(long)]
        max_steps: Option<usize>,
    },

    /// Report every line that is not a valid statement
    Check {
        file: PathBuf,
    },

    /// Evaluate a single expression
    Eval {
        expression: String,

        /// Variable available to the expression, as `name=value`
        #[arg(long = "var", value_parser = parse_variable)]
        variables: Vec<(String, f64)>,
    },
}

fn main() {
    let args = Args::parse_args();

    let directory = match &args.command {
        Commands::Run { file, .. } | Commands::Check { file } => file.parent(),
        Commands::Eval { .. } => None,
    };

    Logger::initialize(log_level(args.verbose, false));

    let config = match ConfigRoot::load(args.config.as_deref(), directory) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}: {e:#}", "error".red().bold());
            exit(1);
        }
    };

    log::set_max_level(log_level(args.verbose, config.log.debug));

    let result = match args.command {
        Commands::Run { file, show_grid, max_steps } => {
            run(&file, &config, show_grid || config.run.show_grid, max_steps.or(config.run.max_steps))
        }
        Commands::Check { file } => check(&file),
        Commands::Eval { expression, variables } => eval(&expression, &variables),
    };

    if let Err(e) = result {
        eprintln!("{}: {e:#}", "error".red().bold());
        exit(1);
    }
}

fn log_level(verbose: bool, debug: bool) -> LevelFilter {
    if verbose || debug {
        LevelFilter::Trace
    } else {
        LevelFilter::Info
    }
}

fn read_program(path: &Path) -> anyhow::Result<Vec<String>> {
    let source_code = std::fs::read_to_string(path)
        .with_context(|| format!("Could not read {}", path.display()))?;

    Ok(source_code.lines().map(str::to_string).collect())
}

fn run(path: &Path, config: &ConfigRoot, show_grid: bool, max_steps: Option<usize>) -> anyhow::Result<()> {
    let program = read_program(path)?;
    let grid = Rc::new(RefCell::new(Grid::from_config(&config.grid)?));

    let mut interpreter = Interpreter::new(program);
    let sink = Rc::clone(&grid);
    interpreter.subscribe(move |command| sink.borrow_mut().handle(command));

    if show_grid {
        println!("{}", grid.borrow());
    }

    match execute(&mut interpreter, &grid, show_grid, max_steps) {
        Ok(()) => (),

        Err(RunError::Interpreter(e)) => {
            ErrorPrinter::for_interpreter_error(path, interpreter.program(), &e).print();
            exit(2);
        }

        Err(e) => {
            let line = interpreter.program_counter() + 1;
            ErrorPrinter::new(path, interpreter.program(), line, &e).print();
            exit(2);
        }
    }

    let rover = grid.borrow().rover();
    println!("Rover at ({}, {})", rover.x, rover.y);

    for line in describe_variables(interpreter.variables()) {
        println!("{line}");
    }

    Ok(())
}

/// One `type name = value` line per variable, sorted by name.
fn describe_variables(variables: &VariableStore) -> Vec<String> {
    let mut variables: Vec<_> = variables.iter().collect();
    variables.sort_unstable_by_key(|(name, _)| *name);

    variables.into_iter()
        .map(|(name, variable)| format!("{} {name} = {}", variable.ty.name(), variable.value))
        .collect()
}

fn execute(interpreter: &mut Interpreter, grid: &RefCell<Grid>, show_grid: bool, max_steps: Option<usize>) -> Result<(), RunError> {
    let mut steps = 0;

    while interpreter.advance()? == ExecutionState::Running {
        steps += 1;

        if show_grid {
            println!("{}", grid.borrow());
        }

        if let Some(max_steps) = max_steps {
            if steps >= max_steps {
                return Err(RunError::StepLimitExceeded { max_steps });
            }
        }
    }

    info!("Program completed after {steps} step(s)");
    Ok(())
}

fn check(path: &Path) -> anyhow::Result<()> {
    let program = read_program(path)?;
    let mut problems = 0;

    for (index, line) in program.iter().enumerate() {
        if classify(line).is_some() {
            continue;
        }

        let error = InterpreterError {
            line: index + 1,
            text: line.clone(),
            kind: InterpreterErrorKind::Parse,
        };

        ErrorPrinter::for_interpreter_error(path, &program, &error).print();
        problems += 1;
    }

    match problems {
        0 => {
            println!("{} line(s) checked, no problems found", program.len());
            Ok(())
        }
        1 => anyhow::bail!("1 problem found"),
        _ => anyhow::bail!("{problems} problems found"),
    }
}

fn eval(expression: &str, variables: &[(String, f64)]) -> anyhow::Result<()> {
    let mut store = VariableStore::new();
    for (name, value) in variables {
        anyhow::ensure!(store.declare(name, NumericType::Float, *value), "Variable `{name}` given twice");
    }

    let tokens = tokenize(expression)?;
    let postfix = to_postfix(&tokens, &store)?;
    println!("postfix: {postfix}");

    let value = evaluate(&postfix, &store)?;
    println!("{value}");

    Ok(())
}

fn parse_variable(input: &str) -> Result<(String, f64), String> {
    let Some((name, value)) = input.split_once('=') else {
        return Err(format!("expected `name=value`, got `{input}`"));
    };

    let name = name.trim();
    let is_identifier = name.starts_with(|c: char| c.is_ascii_alphabetic() || c == '_')
        && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_');

    if !is_identifier || Keyword::is_reserved(name) {
        return Err(format!("`{name}` is not a valid variable name"));
    }

    let value = value.trim().parse().map_err(|e| format!("invalid value for `{name}`: {e}"))?;
    Ok((name.to_string(), value))
}
