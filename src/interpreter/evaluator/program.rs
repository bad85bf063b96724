use tracing::debug;

use crate::{
    ast::Statement,
    interpreter::{
        evaluator::{core::EvalResult, statement::Executor},
        output::{OutputSink, StdoutSink},
        scope::Scope,
    },
};

/// Runs a program and returns its final state, printing to standard output.
///
/// # Errors
/// Returns the first `RuntimeError` raised by any statement. No partial state
/// is returned in that case.
pub fn run(statements: &[Statement]) -> EvalResult<Scope> {
    run_with_output(statements, &mut StdoutSink)
}

/// Runs a program against a fresh top-level scope, printing to `output`.
///
/// Statements execute strictly in order. The scope is created here, owned
/// exclusively by this call, and returned once the last statement completes.
///
/// # Errors
/// Returns the first `RuntimeError` raised by any statement.
///
/// # Example
/// ```
/// use impish::{
///     ast::{Expr, Statement},
///     interpreter::{evaluator::program::run_with_output, value::Value},
/// };
///
/// let program = vec![Statement::Let { name:  "x".to_string(),
///                                     value: Expr::number(10.0),
///                                     line:  1, },
///                    Statement::Assign { name:  "x".to_string(),
///                                        value: Expr::number(20.0),
///                                        line:  2, }];
///
/// let mut output: Vec<String> = Vec::new();
/// let state = run_with_output(&program, &mut output).unwrap();
///
/// assert_eq!(state.value("x"), Some(Value::Number(20.0)));
/// assert!(output.is_empty());
/// ```
pub fn run_with_output(statements: &[Statement], output: &mut dyn OutputSink) -> EvalResult<Scope> {
    debug!(statements = statements.len(), "running program");

    let mut scope = Scope::new();
    Executor::new(output).execute_block(&mut scope, statements)?;

    debug!(bindings = scope.len(), "program finished");
    Ok(scope)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ast::Expr, error::RuntimeError, interpreter::value::Value};

    #[test]
    fn empty_program_yields_empty_state() {
        let mut output: Vec<String> = Vec::new();
        let state = run_with_output(&[], &mut output).unwrap();

        assert!(state.is_empty());
        assert!(output.is_empty());
    }

    #[test]
    fn run_prints_to_stdout_and_returns_state() {
        let program = vec![Statement::Let { name:  "x".to_string(),
                                            value: Expr::number(10.0),
                                            line:  1, },
                           Statement::Print { value: Expr::variable("x"),
                                              line:  2, }];
        let state = run(&program).unwrap();

        assert_eq!(state.value("x"), Some(Value::Number(10.0)));
        assert_eq!(state.len(), 1);
    }

    #[test]
    fn run_reports_the_first_error() {
        let program = vec![Statement::Assign { name:  "x".to_string(),
                                               value: Expr::number(1.0),
                                               line:  4, }];

        assert!(matches!(run(&program), Err(RuntimeError::UnknownVariable { line: 4, .. })));
    }

    #[test]
    fn error_aborts_whole_run() {
        let program = vec![Statement::Print { value: Expr::number(1.0),
                                              line:  1, },
                           Statement::Print { value: Expr::Variable { name: "nope".to_string(),
                                                                      line: 2, },
                                              line:  2, },
                           Statement::Print { value: Expr::number(3.0),
                                              line:  3, }];
        let mut output: Vec<String> = Vec::new();
        let err = run_with_output(&program, &mut output).unwrap_err();

        assert!(matches!(err, RuntimeError::UnknownVariable { line: 2, .. }));
        assert_eq!(output, vec!["1".to_string()]);
    }
}
