use crate::interpreter::error::ExpressionError;
use crate::interpreter::options::Options;
use crate::interpreter::token::{NumberKind, Token, TokenKind};
use log::{debug, trace};

/// Scanning state over an expression. The source is never modified, only the
/// position moves forward, unless the cursor is explicitly [reset](Cursor::reset).
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    source: &'a str,
    position: usize,
    skip_whitespace: bool,
}

impl<'a> Cursor<'a> {
    pub fn new(source: &'a str) -> Cursor<'a> {
        Cursor {
            source,
            position: 0,
            skip_whitespace: false,
        }
    }

    pub fn with_options(source: &'a str, options: &Options) -> Cursor<'a> {
        Cursor {
            skip_whitespace: options.skip_whitespace,
            ..Cursor::new(source)
        }
    }

    pub fn source(&self) -> &'a str {
        self.source
    }

    /// Byte offset of the next character to be scanned.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Moves back to the start of the source so it can be scanned again.
    pub fn reset(&mut self) {
        self.position = 0;
    }

    pub fn has_next(&self) -> bool {
        let rest = self.rest();
        if self.skip_whitespace {
            !rest.trim_start_matches(is_skippable).is_empty()
        } else {
            !rest.is_empty()
        }
    }

    /// Scans the next token. Characters that are neither part of a number nor a
    /// known symbol are consumed as an [`TokenKind::Invalid`] token. At the end of
    /// input an invalid token is returned and the cursor does not move.
    pub fn consume(&mut self) -> Token {
        match self.scan() {
            Some(Ok(token)) => token,
            Some(Err(error)) => Token::invalid(error.to_string()),
            None => Token::invalid("unexpected end of input"),
        }
    }

    fn rest(&self) -> &'a str {
        &self.source[self.position..]
    }

    fn scan(&mut self) -> Option<Result<Token, ExpressionError>> {
        if self.skip_whitespace {
            let rest = self.rest();
            self.position += rest.len() - rest.trim_start_matches(is_skippable).len();
        }

        let position = self.position;
        let next = self.rest().chars().next()?;
        let scanned = if next.is_ascii_digit() {
            Ok(self.scan_number())
        } else if let Some(token) = Token::from_symbol(next) {
            self.position += next.len_utf8();
            Ok(token)
        } else {
            self.position += next.len_utf8();
            Err(ExpressionError::UnrecognizedCharacter {
                character: next,
                position,
            })
        };

        trace!("scanned {:?} at position {}", scanned, position);
        Some(scanned)
    }

    // digit+ ('.' digit+)?
    fn scan_number(&mut self) -> Token {
        let start = self.position;
        let mut end = start + count_digits(self.rest());
        let mut kind = NumberKind::Integer;

        if let Some(fraction) = self.source[end..].strip_prefix('.') {
            let fraction_digits = count_digits(fraction);
            if fraction_digits > 0 {
                end += 1 + fraction_digits;
                kind = NumberKind::Float;
            }
        }

        self.position = end;
        Token::new(TokenKind::Number(kind), &self.source[start..end])
    }
}

impl<'a> Iterator for Cursor<'a> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        if self.has_next() {
            Some(self.consume())
        } else {
            None
        }
    }
}

fn is_skippable(character: char) -> bool {
    character.is_ascii_whitespace()
}

fn count_digits(text: &str) -> usize {
    text.bytes().take_while(u8::is_ascii_digit).count()
}

/// Splits an expression into tokens, without tolerating whitespace.
///
/// # Arguments
///
/// * `expression`: A text expression in infix format.
///
/// returns: The tokens of the expression, in the order they appear.
///
/// # Examples
///
/// ```
/// use postfix_evaluator::interpreter::lexer::tokenize;
///
/// let tokens = tokenize("(1+2.5)").unwrap();
/// assert_eq!(tokens.len(), 5);
/// assert!(tokenize("1 + 2").is_err());
/// ```
pub fn tokenize(expression: &str) -> Result<Vec<Token>, ExpressionError> {
    tokenize_with(expression, &Options::default())
}

pub fn tokenize_with(
    expression: &str,
    options: &Options,
) -> Result<Vec<Token>, ExpressionError> {
    let mut cursor = Cursor::with_options(expression, options);
    let mut tokens = Vec::new();
    while let Some(scanned) = Cursor::scan(&mut cursor) {
        tokens.push(scanned?);
    }
    debug!("tokenized {:?} into {} tokens", expression, tokens.len());
    Ok(tokens)
}
