use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::{evaluator::binary::core::eval_binary, scope::Scope, value::Value},
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Evaluates an expression and returns the resulting value.
///
/// This is the main entry point for expression evaluation. Literals evaluate
/// to themselves, variables are resolved through [`Scope::resolve`], and
/// binary operations evaluate the left operand, then the right operand, and
/// only then apply the operator. `&&` and `||` do not short-circuit: both
/// operands are always evaluated.
///
/// The scope is only read, never modified.
///
/// # Parameters
/// - `scope`: Variable state to resolve names against.
/// - `expr`: Expression to evaluate.
///
/// # Example
/// ```
/// use impish::{
///     ast::{BinaryOperator, Expr},
///     interpreter::{evaluator::core::evaluate, scope::Scope, value::Value},
/// };
///
/// let scope: Scope = [("x", Value::Number(10.0))].into_iter().collect();
/// let expr = Expr::binary(Expr::variable("x"), BinaryOperator::Mul, Expr::number(2.0));
///
/// assert_eq!(evaluate(&scope, &expr).unwrap(), Value::Number(20.0));
/// ```
pub fn evaluate(scope: &Scope, expr: &Expr) -> EvalResult<Value> {
    match expr {
        Expr::Number { value, .. } => Ok(Value::Number(*value)),
        Expr::Bool { value, .. } => Ok(Value::Bool(*value)),
        Expr::Variable { name, line } => scope.resolve(name, *line),
        Expr::BinaryOp { left,
                         op,
                         right,
                         line, } => {
            let left = evaluate(scope, left)?;
            let right = evaluate(scope, right)?;
            eval_binary(*op, left, right, *line)
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::BinaryOperator;

    fn scope_of(pairs: &[(&str, Value)]) -> Scope {
        pairs.iter().map(|(k, v)| (*k, *v)).collect()
    }

    #[test]
    fn literals_evaluate_to_themselves() {
        let scope = Scope::new();
        assert_eq!(evaluate(&scope, &Expr::number(2.5)).unwrap(), Value::Number(2.5));
        assert_eq!(evaluate(&scope, &Expr::bool(false)).unwrap(), Value::Bool(false));
    }

    #[test]
    fn variables_resolve_against_scope() {
        let scope = scope_of(&[("x", Value::Bool(true)), ("y", Value::Bool(false))]);
        let expr = Expr::binary(Expr::variable("x"), BinaryOperator::And, Expr::variable("y"));
        assert_eq!(evaluate(&scope, &expr).unwrap(), Value::Bool(false));

        let expr = Expr::binary(Expr::variable("x"), BinaryOperator::Or, Expr::variable("y"));
        assert_eq!(evaluate(&scope, &expr).unwrap(), Value::Bool(true));
    }

    #[test]
    fn comparisons_with_variables() {
        let scope = scope_of(&[("x", Value::Number(5.0)), ("y", Value::Number(10.0))]);
        let gt = Expr::binary(Expr::variable("x"), BinaryOperator::Greater, Expr::variable("y"));
        let lt = Expr::binary(Expr::variable("x"), BinaryOperator::Less, Expr::variable("y"));

        assert_eq!(evaluate(&scope, &gt).unwrap(), Value::Bool(false));
        assert_eq!(evaluate(&scope, &lt).unwrap(), Value::Bool(true));
    }

    #[test]
    fn unknown_variable_is_reference_error() {
        let err = evaluate(&Scope::new(), &Expr::variable("x")).unwrap_err();
        assert!(matches!(err, RuntimeError::UnknownVariable { ref name, .. } if name == "x"));
    }

    #[test]
    fn logical_operators_evaluate_both_operands() {
        // The left operand alone decides the result, but the unbound right
        // operand must still be evaluated.
        let scope = Scope::new();
        let and = Expr::binary(Expr::bool(false), BinaryOperator::And, Expr::variable("missing"));
        let or = Expr::binary(Expr::bool(true), BinaryOperator::Or, Expr::variable("missing"));

        assert!(matches!(evaluate(&scope, &and), Err(RuntimeError::UnknownVariable { .. })));
        assert!(matches!(evaluate(&scope, &or), Err(RuntimeError::UnknownVariable { .. })));
    }

    #[test]
    fn left_operand_errors_come_first() {
        let expr = Expr::binary(Expr::variable("a"), BinaryOperator::Add, Expr::variable("b"));
        let err = evaluate(&Scope::new(), &expr).unwrap_err();
        assert!(matches!(err, RuntimeError::UnknownVariable { ref name, .. } if name == "a"));
    }

    #[test]
    fn operand_errors_precede_type_checks() {
        let expr = Expr::binary(Expr::bool(true), BinaryOperator::Add, Expr::variable("b"));
        let err = evaluate(&Scope::new(), &expr).unwrap_err();
        assert!(matches!(err, RuntimeError::UnknownVariable { .. }));
    }

    #[test]
    fn nested_expressions() {
        // (2 + 3) * 4 > 19 && true
        let sum = Expr::binary(Expr::number(2.0), BinaryOperator::Add, Expr::number(3.0));
        let product = Expr::binary(sum, BinaryOperator::Mul, Expr::number(4.0));
        let cmp = Expr::binary(product, BinaryOperator::Greater, Expr::number(19.0));
        let expr = Expr::binary(cmp, BinaryOperator::And, Expr::bool(true));

        assert_eq!(evaluate(&Scope::new(), &expr).unwrap(), Value::Bool(true));
    }
}
