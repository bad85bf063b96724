use thiserror::Error;

use crate::ast::BinaryOperator;

/// Represents all errors that can occur during evaluation and execution.
///
/// Every error aborts the running program; nothing inside the interpreter
/// recovers from one.
#[derive(Debug, Error)]
pub enum RuntimeError {
    /// Tried to read or assign a variable that was never declared.
    #[error("Error on line {line}: ReferenceError: {name} is not defined.")]
    UnknownVariable {
        /// The name of the variable.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// The operand types do not fit the operator.
    #[error("Error on line {line}: TypeError: invalid operand types for '{op}': found {left} and {right}.")]
    TypeError {
        /// The offending operator.
        op:    BinaryOperator,
        /// Type name of the left operand.
        left:  &'static str,
        /// Type name of the right operand.
        right: &'static str,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// An `if` or `while` condition did not evaluate to a boolean.
    #[error("Error on line {line}: TypeError: invalid condition type, expected a boolean but found {found}.")]
    ConditionNotBoolean {
        /// Type name of the value the condition produced.
        found: &'static str,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// A name resolved to a nested scope that does not yield a value.
    #[error("Error on line {line}: TypeError: {name} is bound to a scope, not a value.")]
    NotAValue {
        /// The name of the variable.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// An operator symbol that the language does not know.
    #[error("Invalid binary operator: {symbol}")]
    InvalidOperator {
        /// The symbol as given.
        symbol: String,
    },
    /// Writing to the output sink failed.
    #[error("Error on line {line}: Failed to write output: {source}")]
    Output {
        /// The underlying I/O failure.
        source: std::io::Error,
        /// The source line where the error occurred.
        line:   usize,
    },
}

/// Coarse classification of a [`RuntimeError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A variable was used before it was declared.
    Reference,
    /// A value had the wrong type for an operator or condition.
    Type,
    /// The syntax tree itself was malformed.
    InvalidConstruct,
    /// The output sink failed.
    Output,
}

impl RuntimeError {
    /// Returns the class this error belongs to.
    ///
    /// # Example
    /// ```
    /// use impish::error::{ErrorKind, RuntimeError};
    ///
    /// let err = RuntimeError::UnknownVariable { name: "x".to_string(),
    ///                                           line: 1, };
    /// assert_eq!(err.kind(), ErrorKind::Reference);
    /// ```
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::UnknownVariable { .. } => ErrorKind::Reference,
            Self::TypeError { .. } | Self::ConditionNotBoolean { .. } | Self::NotAValue { .. } => {
                ErrorKind::Type
            },
            Self::InvalidOperator { .. } => ErrorKind::InvalidConstruct,
            Self::Output { .. } => ErrorKind::Output,
        }
    }
}
