use crate::{
    ast::BinaryOperator,
    interpreter::{
        evaluator::{binary::core::operand_type_error, core::EvalResult},
        value::Value,
    },
};

/// Evaluates a logical operation between two boolean values.
///
/// Both operands have already been evaluated by the caller; nothing here
/// short-circuits.
///
/// # Errors
/// Returns `RuntimeError::TypeError` unless both operands are booleans.
///
/// # Example
/// ```
/// use impish::{
///     ast::BinaryOperator,
///     interpreter::{evaluator::binary::logic::eval_logic, value::Value},
/// };
///
/// let result = eval_logic(BinaryOperator::Or, Value::Bool(true), Value::Bool(false), 1);
/// assert_eq!(result.unwrap(), Value::Bool(true));
/// ```
pub fn eval_logic(op: BinaryOperator, left: Value, right: Value, line: usize) -> EvalResult<Value> {
    let (Value::Bool(a), Value::Bool(b)) = (left, right) else {
        return Err(operand_type_error(op, &left, &right, line));
    };

    match op {
        BinaryOperator::And => Ok(Value::Bool(a && b)),
        BinaryOperator::Or => Ok(Value::Bool(a || b)),
        _ => unreachable!("eval_logic used with non logical operator"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RuntimeError;

    #[test]
    fn truth_tables() {
        for a in [true, false] {
            for b in [true, false] {
                assert_eq!(eval_logic(BinaryOperator::And, a.into(), b.into(), 1).unwrap(),
                           Value::Bool(a && b));
                assert_eq!(eval_logic(BinaryOperator::Or, a.into(), b.into(), 1).unwrap(),
                           Value::Bool(a || b));
            }
        }
    }

    #[test]
    fn numbers_are_rejected() {
        let err = eval_logic(BinaryOperator::Or, Value::Number(0.0), Value::Bool(true), 2)
            .unwrap_err();
        assert!(matches!(err, RuntimeError::TypeError { op: BinaryOperator::Or, .. }));
    }
}
