use anyhow::{bail, Context, Result};
use clap::Parser;
use clap_verbosity_flag::Verbosity;
use itertools::Itertools;
use log::{debug, info};
use postfix_evaluator::interpreter::lexer::Cursor;
use postfix_evaluator::interpreter::{calculate_with, ArithmeticPolicy, Options};
use std::io;
use std::io::BufRead;

/// Converts infix arithmetic expressions to postfix notation and evaluates them
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Arguments {
    /// The expressions to evaluate. One expression per line is read from standard input
    /// if none are given
    expressions: Vec<String>,

    /// Evaluate in 64-bit integer arithmetic instead of floating point
    #[clap(long)]
    integer: bool,

    /// Skip whitespace between tokens
    #[clap(long)]
    skip_whitespace: bool,

    /// Also print the raw tokens of each expression
    #[clap(long)]
    tokens: bool,

    #[clap(flatten)]
    verbose: Verbosity,
}

impl Arguments {
    fn options(&self) -> Options {
        let policy = if self.integer {
            ArithmeticPolicy::Integer
        } else {
            ArithmeticPolicy::Float
        };
        Options::default()
            .with_policy(policy)
            .with_whitespace_skipping(self.skip_whitespace)
    }
}

fn main() -> Result<()> {
    let args = Arguments::parse();
    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .init();

    let options = args.options();
    debug!("running with {:?}", options);

    let expressions = if args.expressions.is_empty() {
        read_expressions(io::stdin().lock())?
    } else {
        args.expressions.clone()
    };

    let (mut ok, mut ko) = (0, 0);
    for expression in &expressions {
        if args.tokens {
            print_tokens(expression, &options);
        }
        match calculate_with(expression, &options) {
            Ok(evaluation) => {
                println!("{} => {} => {}", expression, evaluation.postfix, evaluation.value);
                ok += 1;
            }
            Err(error) => {
                println!("{} => cannot evaluate: {}", expression, error);
                ko += 1;
            }
        }
    }

    info!("{} evaluated, {} failed", ok, ko);
    println!("{} evaluated, {} failed", ok, ko);
    if ko > 0 {
        bail!("{} of {} expressions could not be evaluated", ko, expressions.len());
    }
    Ok(())
}

fn read_expressions(input: impl BufRead) -> Result<Vec<String>> {
    let mut expressions = Vec::new();
    for line in input.lines() {
        let line = line.context("Failed to read expression from standard input")?;
        if !line.trim().is_empty() {
            expressions.push(line);
        }
    }
    Ok(expressions)
}

fn print_tokens(expression: &str, options: &Options) {
    let cursor = Cursor::with_options(expression, options);
    println!("{} tokens: {}", expression, cursor.map(|token| format!("{:?}", token)).join(" "));
}
