use std::iter::Peekable;

use crate::{
    ast::Statement,
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{core::ParseResult, statement::parse_statement, utils::expect_token},
    },
};

/// Parses a block delimited by braces.
///
/// A block consists of zero or more statements. Parsing continues until the
/// matching `}` is consumed.
///
/// Grammar: `block := "{" statement* "}"`
///
/// # Parameters
/// - `tokens`: Token stream positioned at the opening brace.
/// - `line`: Line of the construct that owns the block, used if the input
///   ends before the brace.
///
/// # Returns
/// The statements inside the block, in order.
///
/// # Errors
/// Returns a `ParseError` if the opening brace is missing, a statement fails
/// to parse, or the input ends before the closing brace.
pub fn parse_block<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Vec<Statement>>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let open_line = expect_token(tokens, &Token::LBrace, line)?;
    let mut statements = Vec::new();

    loop {
        match tokens.peek() {
            Some((Token::RBrace, _)) => {
                tokens.next();
                return Ok(statements);
            },
            Some((_, statement_line)) => {
                let statement_line = *statement_line;
                statements.push(parse_statement(tokens, statement_line)?);
            },
            None => return Err(ParseError::UnexpectedEndOfInput { line: open_line }),
        }
    }
}
