use std::iter::Peekable;

use crate::{
    error::ParseError,
    interpreter::{lexer::Token, parser::core::ParseResult},
};

/// Consumes the next token, which must equal `expected`.
///
/// # Parameters
/// - `tokens`: Token iterator.
/// - `expected`: The token that must come next.
/// - `line`: Line reported if the input ends here.
///
/// # Returns
/// The line of the consumed token.
///
/// # Errors
/// Returns a `ParseError` if:
/// - the next token differs from `expected`,
/// - the input ends unexpectedly.
pub(in crate::interpreter::parser) fn expect_token<'a, I>(tokens: &mut Peekable<I>,
                                                          expected: &Token,
                                                          line: usize)
                                                          -> ParseResult<usize>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match tokens.next() {
        Some((tok, l)) if tok == expected => Ok(*l),
        Some((tok, l)) => {
            Err(ParseError::UnexpectedToken { token: format!("Expected {expected:?}, found {tok:?}"),
                                              line:  *l, })
        },
        None => Err(ParseError::UnexpectedEndOfInput { line }),
    }
}

/// Parses a plain identifier and returns its name.
///
/// Keywords in name position are reported as reserved identifiers.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at an identifier.
/// - `line`: Line reported if the input ends here.
///
/// # Returns
/// A `String` containing the identifier.
///
/// # Errors
/// Returns a `ParseError` if:
/// - the next token is a keyword,
/// - the next token is not an identifier,
/// - the input ends unexpectedly.
pub(in crate::interpreter::parser) fn parse_identifier<'a, I>(tokens: &mut Peekable<I>,
                                                              line: usize)
                                                              -> ParseResult<String>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match tokens.next() {
        Some((Token::Identifier(s), _)) => Ok(s.clone()),
        Some((tok, l)) => match tok.keyword() {
            Some(keyword) => Err(ParseError::IdentifierReserved { name: keyword.to_string(),
                                                                  line: *l, }),
            None => {
                Err(ParseError::UnexpectedToken { token: format!("Expected identifier, found {tok:?}"),
                                                  line:  *l, })
            },
        },
        None => Err(ParseError::UnexpectedEndOfInput { line }),
    }
}
