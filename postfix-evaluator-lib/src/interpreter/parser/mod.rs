mod infix_converter;

use crate::interpreter::error::ExpressionError;
use crate::interpreter::parser::infix_converter::infix_to_postfix;
use crate::interpreter::token::Token;
use itertools::Itertools;
use log::debug;
use std::fmt;
use std::fmt::Formatter;
use std::slice;

/// Tokens ordered in postfix (Reverse Polish) notation, read left to right.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PostfixExpression(Vec<Token>);

impl PostfixExpression {
    pub fn new(tokens: Vec<Token>) -> PostfixExpression {
        PostfixExpression(tokens)
    }

    pub fn tokens(&self) -> &[Token] {
        &self.0
    }

    pub fn into_tokens(self) -> Vec<Token> {
        self.0
    }

    pub fn iter(&self) -> slice::Iter<'_, Token> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn operand_count(&self) -> usize {
        self.iter().filter(|token| token.is_value()).count()
    }

    pub fn operator_count(&self) -> usize {
        self.iter().filter(|token| token.as_operator().is_some()).count()
    }

    /// The lexemes written back to back, e.g. `12+`.
    pub fn concatenated(&self) -> String {
        self.iter().map(|token| token.text.as_str()).collect()
    }
}

impl fmt::Display for PostfixExpression {
    /// The lexemes separated by single spaces, e.g. `1 2 +`.
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.iter().join(" "))
    }
}

impl<'a> IntoIterator for &'a PostfixExpression {
    type Item = &'a Token;
    type IntoIter = slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Rearranges the given infix tokens into postfix order.
///
/// # Arguments
///
/// * `infix_tokens`: The tokens to parse, in infix format.
///
/// returns: The equivalent postfix expression, or an error if the parentheses do not
/// balance or a token could not be classified.
///
/// # Examples
///
/// ```
/// use postfix_evaluator::interpreter::lexer::tokenize;
/// use postfix_evaluator::interpreter::parser::parse;
///
/// let infix_tokens = tokenize("(1+2)*3").unwrap();
/// let postfix = parse(infix_tokens).unwrap();
/// assert_eq!(postfix.to_string(), "1 2 + 3 *");
/// ```
pub fn parse(
    infix_tokens: impl IntoIterator<Item = Token>,
) -> Result<PostfixExpression, ExpressionError> {
    let postfix = PostfixExpression(infix_to_postfix(infix_tokens)?);
    debug!("converted to postfix: {}", postfix);
    Ok(postfix)
}
