use crate::interpreter::operator::BinaryOperator;
use thiserror::Error;

/// The broad category of an [`ExpressionError`].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// The expression is structurally malformed.
    InvalidExpression,
    /// The expression is well-formed but its arithmetic could not be carried out.
    ArithmeticFailure,
}

/// Everything that can go wrong while tokenizing, converting or evaluating an expression.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ExpressionError {
    #[error("expression is empty")]
    EmptyExpression,

    #[error("unrecognized character {character:?} at position {position}")]
    UnrecognizedCharacter { character: char, position: usize },

    #[error("unexpected token {0:?}")]
    UnexpectedToken(String),

    #[error("unbalanced parentheses")]
    UnbalancedParentheses,

    #[error("operator '{0}' appears before any operand")]
    MalformedOperatorPlacement(BinaryOperator),

    #[error("operator '{0}' is missing an operand")]
    OperandUnderflow(BinaryOperator),

    #[error("{0} operands were never combined by an operator")]
    LeftoverOperands(usize),

    #[error("{0:?} is not an integer literal")]
    NonIntegerLiteral(String),

    #[error("literal {0:?} is out of range")]
    LiteralOutOfRange(String),

    #[error("{0:?} is not a valid number")]
    MalformedNumber(String),

    #[error(transparent)]
    ArithmeticFailure(#[from] ArithmeticFailure),
}

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum ArithmeticFailure {
    #[error("division by zero")]
    DivisionByZero,

    #[error("integer overflow in '{0}'")]
    Overflow(BinaryOperator),
}

impl ExpressionError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ExpressionError::ArithmeticFailure(_) => ErrorKind::ArithmeticFailure,
            _ => ErrorKind::InvalidExpression,
        }
    }

    pub fn is_invalid_expression(&self) -> bool {
        self.kind() == ErrorKind::InvalidExpression
    }
}
