use crate::interpreter::error::ExpressionError;
use crate::interpreter::lexer::Cursor;
use crate::interpreter::operator::{Associativity, BinaryOperator, GUARD_PRECEDENCE};
use std::fmt;
use std::fmt::Formatter;
use std::str;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum NumberKind {
    Integer,
    Float,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Number(NumberKind),
    Operator(BinaryOperator),
    LeftParenthesis,
    RightParenthesis,
    /// Something the lexer could not classify. The token text is a diagnostic
    /// message rather than a lexeme.
    Invalid,
}

/// A discrete part of an expression, together with the exact text it was scanned from.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
}

pub static SYMBOLS: [char; 6] = ['+', '-', '*', '/', '(', ')'];

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>) -> Token {
        Token {
            kind,
            text: text.into(),
        }
    }

    pub fn integer(text: impl Into<String>) -> Token {
        Token::new(TokenKind::Number(NumberKind::Integer), text)
    }

    pub fn float(text: impl Into<String>) -> Token {
        Token::new(TokenKind::Number(NumberKind::Float), text)
    }

    pub fn operator(operator: BinaryOperator) -> Token {
        Token::new(TokenKind::Operator(operator), operator.symbol().to_string())
    }

    pub fn left_parenthesis() -> Token {
        Token::new(TokenKind::LeftParenthesis, "(")
    }

    pub fn right_parenthesis() -> Token {
        Token::new(TokenKind::RightParenthesis, ")")
    }

    pub fn invalid(message: impl Into<String>) -> Token {
        Token::new(TokenKind::Invalid, message)
    }

    /// Maps a single symbol character to its token, if it is one.
    pub fn from_symbol(symbol: char) -> Option<Token> {
        match symbol {
            '(' => Some(Token::left_parenthesis()),
            ')' => Some(Token::right_parenthesis()),
            symbol => BinaryOperator::from_symbol(symbol).map(Token::operator),
        }
    }

    /// A 'value' is a token that represents a numerical value.
    pub fn is_value(&self) -> bool {
        matches!(self.kind, TokenKind::Number(_))
    }

    pub fn is_invalid(&self) -> bool {
        self.kind == TokenKind::Invalid
    }

    pub fn as_operator(&self) -> Option<BinaryOperator> {
        match self.kind {
            TokenKind::Operator(operator) => Some(operator),
            _ => None,
        }
    }

    /// Precedence rank and associativity of the token. Only operators have a
    /// meaningful rank, everything else gets the guard value.
    pub fn precedence(&self) -> (u8, Associativity) {
        match self.kind {
            TokenKind::Operator(operator) => (operator.precedence(), operator.associativity()),
            _ => (GUARD_PRECEDENCE, Associativity::None),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}({})", self.kind, self.text)
    }
}

impl str::FromStr for Token {
    type Err = ExpressionError;

    /// Parses a single lexeme, e.g. `"+"` or `"3.5"`, into its token.
    fn from_str(input: &str) -> Result<Token, Self::Err> {
        let mut cursor = Cursor::new(input);
        let token = cursor.consume();
        if token.is_invalid() || cursor.has_next() {
            return Err(ExpressionError::UnexpectedToken(input.to_string()));
        }
        Ok(token)
    }
}
