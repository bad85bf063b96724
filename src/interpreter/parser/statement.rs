use std::iter::Peekable;

use crate::{
    ast::Statement,
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            block::parse_block,
            core::{ParseResult, parse_expression},
            utils::{expect_token, parse_identifier},
        },
    },
};

/// Parses a single statement.
///
/// A statement may be one of:
/// - a variable declaration,
/// - an assignment,
/// - an `if` statement,
/// - a `while` loop,
/// - a `print` statement.
///
/// Parsing is attempted in that order; the first matching construct is
/// returned.
///
/// # Parameters
/// - `tokens`: Token iterator containing `(Token, line)` pairs.
/// - `line`: Line reported if the input ends before a statement starts.
///
/// # Returns
/// A parsed [`Statement`] node.
///
/// # Errors
/// Returns `ParseError::UnexpectedToken` if no statement starts at the
/// current token, or any error raised while parsing the statement itself.
pub fn parse_statement<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    if let Some(statement) = parse_variable_declaration(tokens)? {
        return Ok(statement);
    }
    if let Some(statement) = parse_assignment(tokens)? {
        return Ok(statement);
    }
    if let Some(statement) = parse_if(tokens)? {
        return Ok(statement);
    }
    if let Some(statement) = parse_while(tokens)? {
        return Ok(statement);
    }
    if let Some(statement) = parse_print(tokens)? {
        return Ok(statement);
    }

    match tokens.peek() {
        Some((tok, line)) => {
            Err(ParseError::UnexpectedToken { token: format!("Expected a statement, found {tok:?}"),
                                              line:  *line, })
        },
        None => Err(ParseError::UnexpectedEndOfInput { line }),
    }
}

/// Parses a variable declaration statement.
///
/// A declaration has the form `let <identifier> = <expression>;`.
///
/// If the next token is not `let`, this function returns `Ok(None)` and does
/// not consume any input.
///
/// # Errors
/// Returns a `ParseError` if:
/// - the identifier is missing or reserved,
/// - `=` or `;` is missing,
/// - the expression is malformed.
fn parse_variable_declaration<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Option<Statement>>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let Some((Token::Let, line)) = tokens.peek() else {
        return Ok(None);
    };
    let line = *line;
    tokens.next();

    let name = parse_identifier(tokens, line)?;
    expect_token(tokens, &Token::Equals, line)?;
    let value = parse_expression(tokens, line)?;
    expect_token(tokens, &Token::Semicolon, line)?;

    Ok(Some(Statement::Let { name, value, line }))
}

/// Parses an assignment statement of the form `<identifier> = <expression>;`.
///
/// The function performs a one-token lookahead: an assignment is parsed only
/// if the identifier is followed by `=`. Otherwise it returns `Ok(None)` and
/// does not consume tokens.
fn parse_assignment<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Option<Statement>>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let Some((Token::Identifier(_), line)) = tokens.peek() else {
        return Ok(None);
    };
    let line = *line;

    let mut lookahead = tokens.clone();
    lookahead.next();
    if !matches!(lookahead.peek(), Some((Token::Equals, _))) {
        return Ok(None);
    }

    let name = parse_identifier(tokens, line)?;
    tokens.next(); // consume '='
    let value = parse_expression(tokens, line)?;
    expect_token(tokens, &Token::Semicolon, line)?;

    Ok(Some(Statement::Assign { name, value, line }))
}

/// Parses an `if` statement with optional `else` and chained `else if`.
///
/// Syntax:
/// ```text
///     if (<condition>) { ... }
///     else if (<condition>) { ... }
///     else { ... }
/// ```
/// An `else if` becomes an `else` branch holding a single nested `if`. A
/// missing `else` yields an empty `else` branch.
///
/// If the next token is not `if`, returns `Ok(None)`.
fn parse_if<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Option<Statement>>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let Some((Token::If, line)) = tokens.peek() else {
        return Ok(None);
    };
    let line = *line;
    tokens.next();

    expect_token(tokens, &Token::LParen, line)?;
    let condition = parse_expression(tokens, line)?;
    expect_token(tokens, &Token::RParen, line)?;
    let then_branch = parse_block(tokens, line)?;

    let else_branch = match tokens.peek() {
        Some((Token::Else, else_line)) => {
            let else_line = *else_line;
            tokens.next();

            match tokens.peek() {
                Some((Token::If, _)) => parse_if(tokens)?.into_iter().collect(),
                _ => parse_block(tokens, else_line)?,
            }
        },
        _ => Vec::new(),
    };

    Ok(Some(Statement::If { condition,
                            then_branch,
                            else_branch,
                            line }))
}

/// Parses a `while` loop of the form `while (<condition>) { ... }`.
///
/// If the next token is not `while`, returns `Ok(None)`.
fn parse_while<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Option<Statement>>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let Some((Token::While, line)) = tokens.peek() else {
        return Ok(None);
    };
    let line = *line;
    tokens.next();

    expect_token(tokens, &Token::LParen, line)?;
    let condition = parse_expression(tokens, line)?;
    expect_token(tokens, &Token::RParen, line)?;
    let body = parse_block(tokens, line)?;

    Ok(Some(Statement::While { condition, body, line }))
}

/// Parses a `print <expression>;` statement.
///
/// If the next token is not `print`, returns `Ok(None)`.
fn parse_print<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Option<Statement>>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let Some((Token::Print, line)) = tokens.peek() else {
        return Ok(None);
    };
    let line = *line;
    tokens.next();

    let value = parse_expression(tokens, line)?;
    expect_token(tokens, &Token::Semicolon, line)?;

    Ok(Some(Statement::Print { value, line }))
}
