use crate::{error::RuntimeError, interpreter::evaluator::core::EvalResult};

/// Represents a runtime value in the interpreter.
///
/// This enum models every value an expression can produce. There is no
/// implicit conversion between the variants: operators and conditions check
/// the variant they need and fail otherwise.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value {
    /// A numeric value (double precision floating-point).
    Number(f64),
    /// A boolean value (`true` or `false`).
    /// Produced by literals, comparisons and logical operators. Used as the
    /// condition of `if` and `while`, which must evaluate to `Bool`.
    Bool(bool),
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl Value {
    /// Returns the name of the value's type, as used in error messages.
    ///
    /// # Example
    /// ```
    /// use impish::interpreter::value::Value;
    ///
    /// assert_eq!(Value::Number(1.0).type_name(), "number");
    /// assert_eq!(Value::Bool(true).type_name(), "boolean");
    /// ```
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Number(_) => "number",
            Self::Bool(_) => "boolean",
        }
    }

    /// Interprets the value as the condition of an `if` or `while`.
    ///
    /// # Parameters
    /// - `line`: Source code line number for error reporting.
    ///
    /// # Returns
    /// - `Ok(bool)`: If the value is a boolean.
    /// - `Err(RuntimeError::ConditionNotBoolean)`: Otherwise.
    pub fn as_condition(&self, line: usize) -> EvalResult<bool> {
        match self {
            Self::Bool(b) => Ok(*b),
            Self::Number(_) => Err(RuntimeError::ConditionNotBoolean { found: self.type_name(),
                                                                       line }),
        }
    }

    /// Strict equality: same variant and equal payload.
    ///
    /// Numbers compare with IEEE-754 semantics, so `NaN` is never equal to
    /// anything, and `0.0` equals `-0.0`. A number never equals a boolean.
    #[must_use]
    pub fn strict_eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Number(a), Self::Number(b)) => a == b,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            _ => false,
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) if n.is_nan() => write!(f, "NaN"),
            Self::Number(n) if n.is_infinite() => {
                write!(f, "{}", if n.is_sign_positive() { "Infinity" } else { "-Infinity" })
            },
            // Rust prints `-0` for negative zero; the language prints `0`.
            Self::Number(n) if *n == 0.0 => write!(f, "0"),
            Self::Number(n) if n.abs() >= 1e21 || n.abs() < 1e-6 => {
                // `1e21` becomes `1e+21`; negative exponents keep their sign.
                let exp = format!("{n:e}");
                match exp.split_once('e') {
                    Some((mantissa, power)) if !power.starts_with('-') => {
                        write!(f, "{mantissa}e+{power}")
                    },
                    _ => write!(f, "{exp}"),
                }
            },
            Self::Number(n) => write!(f, "{n}"),
            Self::Bool(b) => write!(f, "{b}"),
        }
    }
}
