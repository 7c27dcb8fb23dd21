use crate::interpreter::error::ExpressionError;
use crate::interpreter::operator::BinaryOperator;
use crate::interpreter::token::{Token, TokenKind};
use log::trace;

/// Shunting-yard conversion of infix tokens into postfix order.
pub(crate) fn infix_to_postfix(
    tokens: impl IntoIterator<Item = Token>,
) -> Result<Vec<Token>, ExpressionError> {
    let mut operators: Vec<Token> = Vec::new();
    let mut output: Vec<Token> = Vec::new();

    for token in tokens {
        match token.kind {
            TokenKind::Number(_) => output.push(token),
            TokenKind::LeftParenthesis => operators.push(token),
            TokenKind::Operator(operator) => {
                parse_operator_token(&mut operators, &mut output, token, operator)
            }
            TokenKind::RightParenthesis => {
                parse_closing_parenthesis_token(&mut operators, &mut output)?
            }
            TokenKind::Invalid => return Err(ExpressionError::UnexpectedToken(token.text)),
        };
        trace!("output: {:?}, operators: {:?}", output, operators);
    }

    transfer_leftover_operators(&mut operators, &mut output)?;

    Ok(output)
}

fn transfer_leftover_operators(
    operators: &mut Vec<Token>,
    output: &mut Vec<Token>,
) -> Result<(), ExpressionError> {
    while let Some(operator) = operators.pop() {
        match operator.kind {
            // An opening parenthesis that was never closed.
            TokenKind::LeftParenthesis => return Err(ExpressionError::UnbalancedParentheses),
            _ => output.push(operator),
        }
    }
    Ok(())
}

fn parse_closing_parenthesis_token(
    operators: &mut Vec<Token>,
    output: &mut Vec<Token>,
) -> Result<(), ExpressionError> {
    loop {
        match operators.pop() {
            None => return Err(ExpressionError::UnbalancedParentheses),
            // Discard the matching open parenthesis.
            Some(top) if top.kind == TokenKind::LeftParenthesis => return Ok(()),
            Some(top) => output.push(top),
        }
    }
}

fn parse_operator_token(
    operators: &mut Vec<Token>,
    output: &mut Vec<Token>,
    token: Token,
    operator: BinaryOperator,
) {
    while let Some(other_operator) = operators.last().and_then(Token::as_operator) {
        if !other_operator.yields_to(&operator) {
            break;
        }
        if let Some(other_operator_token) = operators.pop() {
            output.push(other_operator_token);
        }
    }

    operators.push(token);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpreter::lexer::tokenize;
    use pretty_assertions::assert_eq;

    fn lexemes(tokens: &[Token]) -> Vec<&str> {
        tokens.iter().map(|token| token.text.as_str()).collect()
    }

    #[test]
    fn infix_to_postfix_simple_expression() {
        // 1 + 2
        let infix = [
            Token::integer("1"),
            "+".parse().unwrap(),
            Token::integer("2"),
        ]
        .to_vec();
        let postfix = [
            Token::integer("1"),
            Token::integer("2"),
            "+".parse().unwrap(),
        ]
        .to_vec();

        let actual = infix_to_postfix(infix).unwrap();

        assert_eq!(actual, postfix)
    }

    #[test]
    fn infix_to_postfix_simple_parenthesised_expression() {
        // 1 - (2 + 3)
        let infix = [
            Token::integer("1"),
            "-".parse().unwrap(),
            Token::left_parenthesis(),
            Token::integer("2"),
            "+".parse().unwrap(),
            Token::integer("3"),
            Token::right_parenthesis(),
        ]
        .to_vec();
        let postfix = [
            Token::integer("1"),
            Token::integer("2"),
            Token::integer("3"),
            "+".parse().unwrap(),
            "-".parse().unwrap(),
        ]
        .to_vec();

        let actual = infix_to_postfix(infix).unwrap();

        assert_eq!(actual, postfix)
    }

    #[test]
    fn infix_to_postfix_multi_operator_expression() {
        let infix = tokenize("1+2*3-4").unwrap();

        let actual = infix_to_postfix(infix).unwrap();

        assert_eq!(lexemes(&actual), vec!["1", "2", "3", "*", "+", "4", "-"]);
    }

    #[test]
    fn infix_to_postfix_complex_expression() {
        let infix = tokenize("1+2*3/(4-5)*6").unwrap();

        let actual = infix_to_postfix(infix).unwrap();

        assert_eq!(
            lexemes(&actual),
            vec!["1", "2", "3", "*", "4", "5", "-", "/", "6", "*", "+"]
        );
    }

    #[test]
    fn infix_to_postfix_nested_parenthesis_expression() {
        let infix = tokenize("1+((2+3)*4)").unwrap();

        let actual = infix_to_postfix(infix).unwrap();

        assert_eq!(lexemes(&actual), vec!["1", "2", "3", "+", "4", "*", "+"]);
    }

    #[test]
    fn equal_precedence_operators_associate_left() {
        let subtraction = infix_to_postfix(tokenize("8-4-2").unwrap()).unwrap();
        let division = infix_to_postfix(tokenize("8/4/2").unwrap()).unwrap();

        assert_eq!(lexemes(&subtraction), vec!["8", "4", "-", "2", "-"]);
        assert_eq!(lexemes(&division), vec!["8", "4", "/", "2", "/"]);
    }

    #[test]
    fn leading_operators_are_moved_without_complaint() {
        let infix = tokenize("+-+0*").unwrap();

        let actual = infix_to_postfix(infix).unwrap();

        assert_eq!(lexemes(&actual), vec!["+", "-", "0", "*", "+"]);
    }

    #[test]
    fn infix_to_postfix_mismatched_closing_parenthesis_should_return_err() {
        let infix = tokenize("((1*2)+(3/4)))))))").unwrap();

        let actual = infix_to_postfix(infix);

        assert_eq!(actual, Err(ExpressionError::UnbalancedParentheses));
    }

    #[test]
    fn infix_to_postfix_mismatched_opening_parenthesis_should_return_err() {
        let infix = tokenize("(((((1*2)+(3/4))").unwrap();

        let actual = infix_to_postfix(infix);

        assert_eq!(actual, Err(ExpressionError::UnbalancedParentheses));
    }

    #[test]
    fn closing_parenthesis_on_empty_stack_should_return_err() {
        let infix = tokenize(")1(").unwrap();

        let actual = infix_to_postfix(infix);

        assert_eq!(actual, Err(ExpressionError::UnbalancedParentheses));
    }

    #[test]
    fn invalid_token_aborts_conversion() {
        let infix = [
            Token::integer("1"),
            "+".parse().unwrap(),
            Token::invalid("unrecognized character 'x' at position 2"),
        ]
        .to_vec();

        let actual = infix_to_postfix(infix);

        assert_eq!(
            actual,
            Err(ExpressionError::UnexpectedToken(
                "unrecognized character 'x' at position 2".to_string()
            ))
        );
    }

    #[test]
    fn empty_parentheses_produce_no_output() {
        let actual = infix_to_postfix(tokenize("()").unwrap()).unwrap();

        assert!(actual.is_empty());
    }
}
