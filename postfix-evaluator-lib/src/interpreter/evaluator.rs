use crate::interpreter::error::ExpressionError;
use crate::interpreter::operator::BinaryOperator;
use crate::interpreter::parser::PostfixExpression;
use crate::interpreter::token::{NumberKind, Token, TokenKind};
use log::{debug, trace};
use std::fmt::{Debug, Display};

/// A number type an expression can be evaluated in.
pub trait Operand: Copy + Debug + Display {
    /// Parses the value of a number token.
    fn from_literal(token: &Token) -> Result<Self, ExpressionError>;

    fn apply(operator: BinaryOperator, left: Self, right: Self) -> Result<Self, ExpressionError>;
}

impl Operand for f64 {
    fn from_literal(token: &Token) -> Result<Self, ExpressionError> {
        token
            .text
            .parse::<f64>()
            .map_err(|_| ExpressionError::MalformedNumber(token.text.clone()))
    }

    fn apply(operator: BinaryOperator, left: Self, right: Self) -> Result<Self, ExpressionError> {
        Ok(operator.evaluate(left, right))
    }
}

impl Operand for i64 {
    fn from_literal(token: &Token) -> Result<Self, ExpressionError> {
        match token.kind {
            TokenKind::Number(NumberKind::Float) => {
                Err(ExpressionError::NonIntegerLiteral(token.text.clone()))
            }
            _ => token
                .text
                .parse::<i64>()
                .map_err(|_| ExpressionError::LiteralOutOfRange(token.text.clone())),
        }
    }

    fn apply(operator: BinaryOperator, left: Self, right: Self) -> Result<Self, ExpressionError> {
        Ok(operator.checked_evaluate(left, right)?)
    }
}

/// Evaluates a postfix expression in floating-point arithmetic.
///
/// # Arguments
///
/// * `postfix`: Tokens in postfix order, as produced by [`parse`](crate::interpreter::parser::parse).
///
/// returns: The single value the expression reduces to.
///
/// # Examples
///
/// ```
/// use postfix_evaluator::interpreter::evaluator::evaluate;
/// use postfix_evaluator::interpreter::lexer::tokenize;
/// use postfix_evaluator::interpreter::parser::parse;
///
/// let postfix = parse(tokenize("7-2-1").unwrap()).unwrap();
/// assert_eq!(evaluate(&postfix).unwrap(), 4.0);
/// ```
pub fn evaluate(postfix: &PostfixExpression) -> Result<f64, ExpressionError> {
    evaluate_with::<f64>(postfix)
}

/// Evaluates a postfix expression with an operand stack of `T`.
pub fn evaluate_with<T: Operand>(postfix: &PostfixExpression) -> Result<T, ExpressionError> {
    let first = postfix.iter().next().ok_or(ExpressionError::EmptyExpression)?;
    match first.kind {
        TokenKind::Number(_) => {}
        TokenKind::Operator(operator) => {
            return Err(ExpressionError::MalformedOperatorPlacement(operator))
        }
        _ => return Err(ExpressionError::UnexpectedToken(first.text.clone())),
    }

    let mut operands: Vec<T> = Vec::new();
    for token in postfix {
        match token.kind {
            TokenKind::Number(_) => operands.push(T::from_literal(token)?),
            TokenKind::Operator(operator) => {
                // The right operand was pushed last.
                let right = operands
                    .pop()
                    .ok_or(ExpressionError::OperandUnderflow(operator))?;
                let left = operands
                    .pop()
                    .ok_or(ExpressionError::OperandUnderflow(operator))?;
                operands.push(T::apply(operator, left, right)?);
            }
            _ => return Err(ExpressionError::UnexpectedToken(token.text.clone())),
        }
        trace!("operands: {:?}", operands);
    }

    let result = match operands.as_slice() {
        [result] => *result,
        leftover => return Err(ExpressionError::LeftoverOperands(leftover.len())),
    };
    debug!("{} evaluated to {}", postfix, result);
    Ok(result)
}
