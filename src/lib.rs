//! # impish
//!
//! impish is an interpreter for a small imperative language written in Rust.
//! Programs declare and assign variables holding numbers or booleans, branch
//! with `if`/`else`, loop with `while`, and `print` values.
//!
//! ```text
//! let x = 3;
//! while (x > 0) {
//!     print x;
//!     x = x - 1;
//! }
//! ```
//!
//! The evaluator works on an already parsed syntax tree (see [`ast`]) and
//! checks types as it goes. The bundled lexer and parser turn source text into
//! that tree.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::match_same_arms,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    ast::Statement,
    error::{Error, ParseError},
    interpreter::{
        evaluator::program::run_with_output, lexer::tokenize, output::OutputSink,
        parser::core::{check_nesting, parse_statements},
        scope::Scope,
    },
};

/// Defines the structure of parsed code.
///
/// This module declares the `Expr` and `Statement` enums that represent the
/// syntactic structure of a program as a tree. The tree is built by the
/// parser, or by any other front end, and executed by the evaluator.
///
/// # Responsibilities
/// - Defines expression and statement types for all language constructs.
/// - Attaches source lines to nodes for error reporting.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised during lexing, parsing,
/// or running a program, each with the source line it refers to.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation, program state and
/// output.
pub mod interpreter;

/// Lexes and parses `source` into a list of statements.
///
/// # Errors
/// Returns a `ParseError` if the source contains an invalid token, nests
/// brackets too deeply, or does not follow the grammar.
///
/// # Example
/// ```
/// use impish::parse_program;
///
/// let program = parse_program("let x = 1;\nprint x;").unwrap();
/// assert_eq!(program.len(), 2);
/// ```
pub fn parse_program(source: &str) -> Result<Vec<Statement>, ParseError> {
    let tokens = tokenize(source)?;
    check_nesting(&tokens)?;
    parse_statements(&mut tokens.iter().peekable())
}

/// Runs a program from source and returns its final state.
///
/// This function parses all statements in `source` and executes them in order
/// against a fresh state, writing every printed value to `output`.
///
/// # Errors
/// Returns an error if parsing fails or if any runtime error occurs. Nothing
/// runs when parsing fails.
///
/// # Examples
/// ```
/// use impish::{get_result, interpreter::value::Value};
///
/// let mut output: Vec<String> = Vec::new();
/// let state = get_result("let x = 10;\nprint x * 2;", &mut output).unwrap();
///
/// assert_eq!(state.value("x"), Some(Value::Number(10.0)));
/// assert_eq!(output, vec!["20".to_string()]);
///
/// // Example with an intentional error (unknown variable).
/// let res = get_result("let y = x + 1;", &mut output);
/// assert!(res.is_err());
/// ```
pub fn get_result(source: &str, output: &mut dyn OutputSink) -> Result<Scope, Error> {
    let program = parse_program(source)?;
    Ok(run_with_output(&program, output)?)
}
