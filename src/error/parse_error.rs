use thiserror::Error;

/// Represents all errors that can occur during lexing or parsing.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    /// Found an unexpected token while parsing.
    #[error("Error on line {line}: Unexpected token: {token}.")]
    UnexpectedToken {
        /// The token encountered, or a description of what was expected.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// Reached the end of input unexpectedly.
    #[error("Error on line {line}: Unexpected end of input.")]
    UnexpectedEndOfInput {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Tried to use a reserved identifier name.
    #[error("Error on line {line}: Identifier {name} is reserved.")]
    IdentifierReserved {
        /// The reserved identifier name.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Parentheses and braces nest deeper than the parser allows.
    #[error("Error on line {line}: Nesting exceeds {limit} levels.")]
    NestingTooDeep {
        /// The deepest nesting accepted.
        limit: usize,
        /// The source line of the bracket that went one level too deep.
        line:  usize,
    },
}
