use std::iter::Peekable;

use crate::{
    ast::{Expr, Statement},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{binary::parse_logical_or, statement::parse_statement},
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Deepest allowed nesting of parentheses and braces, counted together.
///
/// Parsing and evaluation recurse once per level, so the limit keeps deeply
/// nested input from exhausting the stack.
pub const MAX_NESTING_DEPTH: usize = 256;

/// Parses a full expression.
///
/// This is the entry point for expression parsing.
/// It begins at the lowest-precedence level, logical OR, and recursively
/// descends through the precedence hierarchy.
///
/// Grammar: `expression := logical_or`
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, line)` pairs.
/// - `line`: Line of the enclosing construct, reported if the input ends
///   before the expression does.
///
/// # Returns
/// The parsed expression node.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    parse_logical_or(tokens, line)
}

/// Parses every statement in the token stream.
///
/// Grammar: `program := statement*`
///
/// Nesting depth is not checked here; run [`check_nesting`] over the tokens
/// first when they come from untrusted input.
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, line)` pairs.
///
/// # Returns
/// The statements in source order.
pub fn parse_statements<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Vec<Statement>>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut statements = Vec::new();
    while let Some((_, line)) = tokens.peek() {
        let line = *line;
        statements.push(parse_statement(tokens, line)?);
    }
    Ok(statements)
}

/// Rejects token streams whose parentheses and braces nest deeper than
/// [`MAX_NESTING_DEPTH`].
///
/// Unbalanced brackets are left for the parser to report.
///
/// # Errors
/// Returns `ParseError::NestingTooDeep` at the first bracket that opens one
/// level too many.
///
/// # Example
/// ```
/// use impish::interpreter::{lexer::tokenize, parser::core::check_nesting};
///
/// let shallow = tokenize("print ((1));").unwrap();
/// assert!(check_nesting(&shallow).is_ok());
///
/// let deep = tokenize(&format!("print {}1;", "(".repeat(1000))).unwrap();
/// assert!(check_nesting(&deep).is_err());
/// ```
pub fn check_nesting(tokens: &[(Token, usize)]) -> ParseResult<()> {
    let mut depth: usize = 0;

    for (token, line) in tokens {
        match token {
            Token::LParen | Token::LBrace => {
                depth += 1;
                if depth > MAX_NESTING_DEPTH {
                    return Err(ParseError::NestingTooDeep { limit: MAX_NESTING_DEPTH,
                                                            line:  *line, });
                }
            },
            Token::RParen | Token::RBrace => depth = depth.saturating_sub(1),
            _ => {},
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::interpreter::lexer::tokenize;

    fn nested_parens(levels: usize) -> String {
        format!("let x = {}1{};", "(".repeat(levels), ")".repeat(levels))
    }

    #[test]
    fn nesting_at_the_limit_is_accepted() {
        let tokens = tokenize(&nested_parens(MAX_NESTING_DEPTH)).unwrap();
        assert_eq!(check_nesting(&tokens), Ok(()));
    }

    #[test]
    fn nesting_past_the_limit_is_rejected() {
        let tokens = tokenize(&format!("\n{}", nested_parens(20_000))).unwrap();
        assert_eq!(check_nesting(&tokens),
                   Err(ParseError::NestingTooDeep { limit: MAX_NESTING_DEPTH,
                                                    line:  2, }));
    }

    #[test]
    fn braces_and_parentheses_count_together() {
        let half = MAX_NESTING_DEPTH / 2 + 1;
        let source = format!("{}print {}1{};{}",
                             "if (true) {".repeat(half),
                             "(".repeat(half),
                             ")".repeat(half),
                             "}".repeat(half));
        let tokens = tokenize(&source).unwrap();

        assert!(matches!(check_nesting(&tokens), Err(ParseError::NestingTooDeep { .. })));
    }

    #[test]
    fn sibling_groups_do_not_accumulate() {
        let source = "print (1) + (2);\n".repeat(MAX_NESTING_DEPTH * 2);
        let tokens = tokenize(&source).unwrap();
        assert_eq!(check_nesting(&tokens), Ok(()));
    }
}
