use crate::interpreter::error::ArithmeticFailure;
use std::fmt;
use std::fmt::Formatter;

/// Precedence given to everything that is not a binary operator. It is only ever
/// peeked at while scanning the operator stack, never compared against an operator.
pub(crate) const GUARD_PRECEDENCE: u8 = u8::MAX;

/// A binary mathematical operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Associativity {
    Left,
    None,
}

impl BinaryOperator {
    /// Looks up the operator written as the given character.
    pub fn from_symbol(symbol: char) -> Option<BinaryOperator> {
        match symbol {
            '+' => Some(BinaryOperator::Add),
            '-' => Some(BinaryOperator::Subtract),
            '*' => Some(BinaryOperator::Multiply),
            '/' => Some(BinaryOperator::Divide),
            _ => None,
        }
    }

    pub fn symbol(&self) -> char {
        match self {
            BinaryOperator::Add => '+',
            BinaryOperator::Subtract => '-',
            BinaryOperator::Multiply => '*',
            BinaryOperator::Divide => '/',
        }
    }

    pub fn associativity(&self) -> Associativity {
        Associativity::Left
    }

    pub fn precedence(&self) -> u8 {
        match self {
            BinaryOperator::Add | BinaryOperator::Subtract => 1,
            BinaryOperator::Multiply | BinaryOperator::Divide => 2,
        }
    }

    pub(crate) fn precedence_eq(&self, other: &Self) -> bool {
        self.precedence().eq(&other.precedence())
    }

    pub(crate) fn precedence_gt(&self, other: &Self) -> bool {
        self.precedence().gt(&other.precedence())
    }

    /// Whether `self`, sitting on top of the operator stack, has to be moved to the
    /// output before `incoming` can be pushed.
    pub(crate) fn yields_to(&self, incoming: &Self) -> bool {
        self.precedence_gt(incoming)
            || (self.precedence_eq(incoming) && incoming.associativity() == Associativity::Left)
    }

    /// Floating-point arithmetic. Division by zero follows IEEE 754.
    pub fn evaluate(&self, left: f64, right: f64) -> f64 {
        match self {
            BinaryOperator::Add => left + right,
            BinaryOperator::Subtract => left - right,
            BinaryOperator::Multiply => left * right,
            BinaryOperator::Divide => left / right,
        }
    }

    /// Fixed-width integer arithmetic. Division truncates toward zero.
    pub fn checked_evaluate(&self, left: i64, right: i64) -> Result<i64, ArithmeticFailure> {
        let result = match self {
            BinaryOperator::Add => left.checked_add(right),
            BinaryOperator::Subtract => left.checked_sub(right),
            BinaryOperator::Multiply => left.checked_mul(right),
            BinaryOperator::Divide => {
                if right == 0 {
                    return Err(ArithmeticFailure::DivisionByZero);
                }
                left.checked_div(right)
            }
        };
        result.ok_or(ArithmeticFailure::Overflow(*self))
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
