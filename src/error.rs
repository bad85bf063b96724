use thiserror::Error;

/// Parsing errors.
///
/// Defines all error types that can occur during lexing and parsing of source
/// code: unexpected tokens, premature end of input, reserved names used as
/// variables and brackets nested too deeply.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised while evaluating expressions
/// and executing statements: unknown variables, operand type mismatches,
/// non-boolean conditions and output failures.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::{ErrorKind, RuntimeError};

/// Any failure produced while turning source text into a final state.
#[derive(Debug, Error)]
pub enum Error {
    /// The source could not be lexed or parsed.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// The program failed while running.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}
