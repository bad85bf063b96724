use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        lexer::Token,
        parser::{core::ParseResult, primary::parse_primary},
    },
};

/// Parses logical OR expressions.
///
/// The rule is: `logical_or := logical_and ("||" logical_and)*`
///
/// # Parameters
/// - `tokens`: Token stream with line information.
/// - `line`: Line reported if the input ends before an operand.
///
/// # Returns
/// An `Expr::BinaryOp` tree, or the operand itself if no `||` follows.
pub fn parse_logical_or<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    parse_left_associative(tokens, line, parse_logical_and, |op| op == BinaryOperator::Or)
}

/// Parses logical AND expressions.
///
/// The rule is: `logical_and := equality ("&&" equality)*`
pub fn parse_logical_and<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    parse_left_associative(tokens, line, parse_equality, |op| op == BinaryOperator::And)
}

/// Parses strict equality.
///
/// The rule is: `equality := relational ("===" relational)*`
pub fn parse_equality<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    parse_left_associative(tokens, line, parse_relational, |op| {
        op == BinaryOperator::StrictEqual
    })
}

/// Parses ordering comparisons.
///
/// The rule is: `relational := additive ((">" | "<") additive)*`
pub fn parse_relational<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    parse_left_associative(tokens, line, parse_additive, |op| {
        matches!(op, BinaryOperator::Greater | BinaryOperator::Less)
    })
}

/// Parses addition and subtraction expressions.
///
/// The rule is: `additive := multiplicative (("+" | "-") multiplicative)*`
pub fn parse_additive<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    parse_left_associative(tokens, line, parse_multiplicative, |op| {
        matches!(op, BinaryOperator::Add | BinaryOperator::Sub)
    })
}

/// Parses multiplication and division expressions.
///
/// The rule is: `multiplicative := primary (("*" | "/") primary)*`
pub fn parse_multiplicative<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    parse_left_associative(tokens, line, parse_primary, |op| {
        matches!(op, BinaryOperator::Mul | BinaryOperator::Div)
    })
}

/// Parses one precedence level of left-associative operators.
///
/// Operands are parsed with `operand`; the loop continues while the next
/// token is an operator accepted by `accepts`, so `a - b - c` becomes
/// `(a - b) - c`. A right operand missing at the end of input is reported
/// on the operator's line.
fn parse_left_associative<'a, I>(tokens: &mut Peekable<I>,
                                 line: usize,
                                 operand: impl Fn(&mut Peekable<I>, usize) -> ParseResult<Expr>,
                                 accepts: impl Fn(BinaryOperator) -> bool)
                                 -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut left = operand(tokens, line)?;

    while let Some((token, line)) = tokens.peek()
          && let Some(op) = token_to_binary_operator(token)
          && accepts(op)
    {
        let line = *line;
        tokens.next(); // consume operator

        let right = operand(tokens, line)?;
        left = Expr::BinaryOp { left: Box::new(left),
                                op,
                                right: Box::new(right),
                                line };
    }

    Ok(left)
}

/// Maps a token to its corresponding binary operator.
///
/// # Parameters
/// - `token`: Token to convert.
///
/// # Returns
/// `Some(BinaryOperator)` if the token corresponds to a binary operator,
/// otherwise `None`.
///
/// # Example
/// ```
/// use impish::{
///     ast::BinaryOperator,
///     interpreter::{lexer::Token, parser::binary::token_to_binary_operator},
/// };
///
/// assert_eq!(token_to_binary_operator(&Token::TripleEqual), Some(BinaryOperator::StrictEqual));
/// assert_eq!(token_to_binary_operator(&Token::Equals), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(token: &Token) -> Option<BinaryOperator> {
    match token {
        Token::Plus => Some(BinaryOperator::Add),
        Token::Minus => Some(BinaryOperator::Sub),
        Token::Star => Some(BinaryOperator::Mul),
        Token::Slash => Some(BinaryOperator::Div),
        Token::DoubleAmpersand => Some(BinaryOperator::And),
        Token::DoublePipe => Some(BinaryOperator::Or),
        Token::Greater => Some(BinaryOperator::Greater),
        Token::Less => Some(BinaryOperator::Less),
        Token::TripleEqual => Some(BinaryOperator::StrictEqual),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::interpreter::{lexer::tokenize, parser::core::parse_expression};

    /// Renders a parsed expression with explicit parentheses.
    fn shape(source: &str) -> String {
        fn render(expr: &Expr) -> String {
            match expr {
                Expr::Number { value, .. } => value.to_string(),
                Expr::Bool { value, .. } => value.to_string(),
                Expr::Variable { name, .. } => name.clone(),
                Expr::BinaryOp { left, op, right, .. } => {
                    format!("({} {op} {})", render(left), render(right))
                },
            }
        }

        let tokens = tokenize(source).unwrap();
        render(&parse_expression(&mut tokens.iter().peekable(), 1).unwrap())
    }

    #[test]
    fn multiplication_binds_tighter_than_addition() {
        assert_eq!(shape("1 + 2 * 3"), "(1 + (2 * 3))");
        assert_eq!(shape("(1 + 2) * 3"), "((1 + 2) * 3)");
    }

    #[test]
    fn operators_are_left_associative() {
        assert_eq!(shape("a - b - c"), "((a - b) - c)");
        assert_eq!(shape("a / b * c"), "((a / b) * c)");
    }

    #[test]
    fn precedence_ladder() {
        assert_eq!(shape("a || b && c === d > e + f * g"),
                   "(a || (b && (c === (d > (e + (f * g))))))");
    }

    #[test]
    fn comparisons_bind_tighter_than_logic() {
        assert_eq!(shape("x > 0 && y < 1"), "((x > 0) && (y < 1))");
    }
}
