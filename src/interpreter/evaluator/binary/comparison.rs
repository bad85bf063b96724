use crate::{
    ast::BinaryOperator,
    interpreter::{
        evaluator::{binary::core::operand_type_error, core::EvalResult},
        value::Value,
    },
};

/// Evaluates `>`, `<` or `===`.
///
/// Ordering needs two numbers. Strict equality accepts any pair of values and
/// is simply `false` when their types differ.
///
/// # Errors
/// Returns `RuntimeError::TypeError` if `>` or `<` is applied to a boolean.
pub fn eval_comparison(op: BinaryOperator,
                       left: Value,
                       right: Value,
                       line: usize)
                       -> EvalResult<Value> {
    match op {
        BinaryOperator::StrictEqual => Ok(Value::Bool(left.strict_eq(&right))),

        BinaryOperator::Greater | BinaryOperator::Less => {
            let (Value::Number(a), Value::Number(b)) = (left, right) else {
                return Err(operand_type_error(op, &left, &right, line));
            };

            Ok(Value::Bool(if op == BinaryOperator::Greater { a > b } else { a < b }))
        },

        _ => unreachable!("eval_comparison used with non comparison operator"),
    }
}
