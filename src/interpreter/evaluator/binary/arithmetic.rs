use crate::{
    ast::BinaryOperator,
    interpreter::{
        evaluator::{binary::core::operand_type_error, core::EvalResult},
        value::Value,
    },
};

/// Evaluates `+`, `-`, `*` or `/` on two numbers.
///
/// Division follows IEEE-754: dividing by zero yields positive or negative
/// infinity (or `NaN` for `0 / 0`) rather than an error.
///
/// # Errors
/// Returns `RuntimeError::TypeError` unless both operands are numbers.
pub fn eval_arithmetic(op: BinaryOperator,
                       left: Value,
                       right: Value,
                       line: usize)
                       -> EvalResult<Value> {
    let (Value::Number(a), Value::Number(b)) = (left, right) else {
        return Err(operand_type_error(op, &left, &right, line));
    };

    Ok(Value::Number(match op {
                         BinaryOperator::Add => a + b,
                         BinaryOperator::Sub => a - b,
                         BinaryOperator::Mul => a * b,
                         BinaryOperator::Div => a / b,
                         _ => unreachable!("eval_arithmetic used with non arithmetic operator"),
                     }))
}
