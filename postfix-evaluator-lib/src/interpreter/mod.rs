pub mod error;
pub mod evaluator;
pub mod lexer;
mod operator;
pub mod options;
pub mod parser;
pub mod token;

pub use crate::interpreter::error::{ArithmeticFailure, ErrorKind, ExpressionError};
pub use crate::interpreter::operator::{Associativity, BinaryOperator};
pub use crate::interpreter::options::{ArithmeticPolicy, Options};

use crate::interpreter::evaluator::evaluate_with;
use crate::interpreter::parser::PostfixExpression;
use crate::interpreter::token::{Token, TokenKind};
use anyhow::{Context, Result};
use std::fmt;
use std::fmt::Formatter;
use string_builder::Builder;

/// The numeric result of an evaluation, in the arithmetic it was computed in.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Value {
    Float(f64),
    Integer(i64),
}

impl Value {
    pub fn as_f64(&self) -> f64 {
        match self {
            Value::Float(value) => *value,
            Value::Integer(value) => *value as f64,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Value::Float(value) => write!(f, "{}", value),
            Value::Integer(value) => write!(f, "{}", value),
        }
    }
}

/// Both outputs of running an expression through the pipeline.
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    pub postfix: PostfixExpression,
    pub value: Value,
}

/// Tokenizes, converts to postfix and evaluates the given expression in
/// floating-point arithmetic.
///
/// # Arguments
///
/// * `expression`: A text expression in infix format, without whitespace.
///
/// returns: The postfix form of the expression and the value it evaluates to.
///
/// # Examples
///
/// ```
/// use postfix_evaluator::interpreter::{calculate, ExpressionError};
///
/// let evaluation = calculate("(1+2)*3").unwrap();
/// assert_eq!(evaluation.postfix.to_string(), "1 2 + 3 *");
/// assert_eq!(evaluation.value.as_f64(), 9.0);
///
/// assert_eq!(calculate("(1+2"), Err(ExpressionError::UnbalancedParentheses));
/// ```
pub fn calculate(expression: &str) -> Result<Evaluation, ExpressionError> {
    calculate_with(expression, &Options::default())
}

/// Like [`calculate`], with the arithmetic policy and whitespace handling taken from `options`.
///
/// # Examples
///
/// ```
/// use postfix_evaluator::interpreter::{calculate_with, ArithmeticPolicy, Options, Value};
///
/// let options = Options::default().with_policy(ArithmeticPolicy::Integer);
/// let evaluation = calculate_with("7/2", &options).unwrap();
/// assert_eq!(evaluation.value, Value::Integer(3));
/// ```
pub fn calculate_with(
    expression: &str,
    options: &Options,
) -> Result<Evaluation, ExpressionError> {
    let tokens = lexer::tokenize_with(expression, options)?;
    let postfix = parser::parse(tokens)?;
    let value = match options.policy {
        ArithmeticPolicy::Float => Value::Float(evaluate_with::<f64>(&postfix)?),
        ArithmeticPolicy::Integer => Value::Integer(evaluate_with::<i64>(&postfix)?),
    };
    Ok(Evaluation { postfix, value })
}

/// Pretty-prints the given tokens with whitespace around binary operators.
///
/// # Arguments
///
/// * `tokens`: The tokens to print.
///
/// returns: A pretty-printed text-version of the given tokens.
///
/// # Examples
///
/// ```
/// use postfix_evaluator::interpreter::lexer::tokenize;
/// use postfix_evaluator::interpreter::tokens_to_string;
/// # use anyhow::Result;
///
/// # fn main() -> Result<()> {
/// let tokens = tokenize("(1+2)*3")?;
/// let pretty_printed_tokens = tokens_to_string(&tokens)?;
/// assert_eq!(pretty_printed_tokens, "(1 + 2) * 3");
/// # Ok::<(), anyhow::Error>(()) }
/// ```
pub fn tokens_to_string(tokens: &[Token]) -> Result<String> {
    let mut builder = Builder::new(tokens.len());

    for token in tokens {
        match token.kind {
            TokenKind::Operator(_) => {
                builder.append(" ");
                builder.append(token.text.as_str());
                builder.append(" ");
            }
            _ => builder.append(token.text.as_str()),
        }
    }

    builder.string().context("Failed to build token string")
}
