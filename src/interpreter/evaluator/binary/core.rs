use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::{
            binary::{arithmetic::eval_arithmetic, comparison::eval_comparison, logic::eval_logic},
            core::EvalResult,
        },
        value::Value,
    },
};

/// Evaluates a binary operation between two already evaluated values.
///
/// Arithmetic operators go to `eval_arithmetic`, logical operators to
/// `eval_logic`, and ordering and strict equality to `eval_comparison`.
///
/// # Parameters
/// - `op`: The operator.
/// - `left`: Left operand.
/// - `right`: Right operand.
/// - `line`: Line number for error reporting.
///
/// # Returns
/// An `EvalResult<Value>` containing the evaluated result.
///
/// # Example
/// ```
/// use impish::{
///     ast::BinaryOperator,
///     interpreter::{evaluator::binary::core::eval_binary, value::Value},
/// };
///
/// let result = eval_binary(BinaryOperator::Add, Value::Number(3.0), Value::Number(4.0), 1);
/// assert_eq!(result.unwrap(), Value::Number(7.0));
/// ```
pub fn eval_binary(op: BinaryOperator, left: Value, right: Value, line: usize) -> EvalResult<Value> {
    use BinaryOperator::{Add, And, Div, Greater, Less, Mul, Or, StrictEqual, Sub};

    match op {
        Add | Sub | Mul | Div => eval_arithmetic(op, left, right, line),
        And | Or => eval_logic(op, left, right, line),
        Greater | Less | StrictEqual => eval_comparison(op, left, right, line),
    }
}

/// Builds the error reported when `op` cannot be applied to the operands.
#[must_use]
pub fn operand_type_error(op: BinaryOperator,
                          left: &Value,
                          right: &Value,
                          line: usize)
                          -> RuntimeError {
    RuntimeError::TypeError { op,
                              left: left.type_name(),
                              right: right.type_name(),
                              line }
}
