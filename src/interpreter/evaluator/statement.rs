use tracing::trace;

use crate::{
    ast::{Expr, Statement},
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, evaluate},
        output::OutputSink,
        scope::Scope,
    },
};

/// Executes statements against a scope.
///
/// The executor owns no variable state of its own; it borrows the scope for
/// each call and writes printed values to the output sink it was created
/// with.
pub struct Executor<'o> {
    output: &'o mut dyn OutputSink,
}

/// Where a `while` statement is in its evaluation cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LoopState {
    EvaluatingTest,
    ExecutingBody,
    Done,
}

impl<'o> Executor<'o> {
    /// Creates an executor that prints to `output`.
    pub fn new(output: &'o mut dyn OutputSink) -> Self {
        Self { output }
    }

    /// Executes a single statement.
    ///
    /// - `let` evaluates its initializer and binds (or rebinds) the name.
    /// - An assignment fails if the name is unbound; otherwise it evaluates
    ///   the right-hand side and overwrites the binding.
    /// - `if` runs exactly one of its branches, which may be empty.
    /// - `while` re-evaluates its condition before every iteration.
    /// - `print` writes the value of its expression as one line.
    ///
    /// Conditions must evaluate to booleans.
    ///
    /// # Errors
    /// Propagates any `RuntimeError` from evaluation, condition checks or the
    /// output sink. Statements that already ran keep their effects.
    pub fn execute(&mut self, scope: &mut Scope, statement: &Statement) -> EvalResult<()> {
        trace!(line = statement.line_number(), "executing statement");

        match statement {
            Statement::Let { name, value, .. } => {
                let value = evaluate(scope, value)?;
                scope.declare(name, value);
                Ok(())
            },
            Statement::Assign { name, value, line } => {
                if !scope.contains(name) {
                    return Err(RuntimeError::UnknownVariable { name: name.clone(),
                                                               line: *line, });
                }
                let value = evaluate(scope, value)?;
                scope.assign(name, value, *line)
            },
            Statement::If { condition,
                            then_branch,
                            else_branch,
                            line, } => {
                let branch = if evaluate(scope, condition)?.as_condition(*line)? {
                    then_branch
                } else {
                    else_branch
                };
                self.execute_block(scope, branch)
            },
            Statement::While { condition,
                               body,
                               line, } => self.execute_while(scope, condition, body, *line),
            Statement::Print { value, line } => {
                let value = evaluate(scope, value)?;
                self.output
                    .write_line(&value.to_string())
                    .map_err(|source| RuntimeError::Output { source,
                                                             line: *line })
            },
        }
    }

    /// Executes a sequence of statements in order, stopping at the first
    /// error.
    pub fn execute_block(&mut self, scope: &mut Scope, statements: &[Statement]) -> EvalResult<()> {
        for statement in statements {
            self.execute(scope, statement)?;
        }
        Ok(())
    }

    /// Runs a `while` loop.
    ///
    /// The loop has no iteration bound; a condition that never becomes false
    /// keeps the caller busy indefinitely.
    fn execute_while(&mut self,
                     scope: &mut Scope,
                     condition: &Expr,
                     body: &[Statement],
                     line: usize)
                     -> EvalResult<()> {
        let mut state = LoopState::EvaluatingTest;
        let mut iterations: u64 = 0;

        loop {
            state = match state {
                LoopState::EvaluatingTest => {
                    if evaluate(scope, condition)?.as_condition(line)? {
                        LoopState::ExecutingBody
                    } else {
                        LoopState::Done
                    }
                },
                LoopState::ExecutingBody => {
                    self.execute_block(scope, body)?;
                    iterations += 1;
                    LoopState::EvaluatingTest
                },
                LoopState::Done => {
                    trace!(line, iterations, "loop finished");
                    return Ok(());
                },
            };
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{
        ast::BinaryOperator,
        interpreter::{evaluator::core::evaluate, value::Value},
    };

    fn scope_of(pairs: &[(&str, f64)]) -> Scope {
        pairs.iter().map(|(k, v)| (*k, Value::Number(*v))).collect()
    }

    fn assign(name: &str, value: Expr) -> Statement {
        Statement::Assign { name: name.to_string(),
                            value,
                            line: 1 }
    }

    fn x_gt_0() -> Expr {
        Expr::binary(Expr::variable("x"), BinaryOperator::Greater, Expr::number(0.0))
    }

    fn run(scope: &mut Scope, statement: &Statement) -> EvalResult<Vec<String>> {
        let mut lines: Vec<String> = Vec::new();
        Executor::new(&mut lines).execute(scope, statement)?;
        Ok(lines)
    }

    #[test]
    fn let_declares_a_variable() {
        let mut scope = Scope::new();
        run(&mut scope,
            &Statement::Let { name:  "x".to_string(),
                              value: Expr::number(5.0),
                              line:  1, }).unwrap();

        assert_eq!(scope, scope_of(&[("x", 5.0)]));
    }

    #[test]
    fn let_redeclares_without_error() {
        let mut scope = scope_of(&[("x", 1.0)]);
        run(&mut scope,
            &Statement::Let { name:  "x".to_string(),
                              value: Expr::bool(true),
                              line:  1, }).unwrap();

        assert_eq!(scope.value("x"), Some(Value::Bool(true)));
    }

    #[test]
    fn assignment_overwrites() {
        let mut scope = scope_of(&[("x", 10.0)]);
        run(&mut scope, &assign("x", Expr::number(20.0))).unwrap();

        assert_eq!(scope, scope_of(&[("x", 20.0)]));
    }

    #[test]
    fn assignment_to_unbound_name_fails() {
        let mut scope = Scope::new();
        let err = run(&mut scope, &assign("x", Expr::number(1.0))).unwrap_err();

        assert!(matches!(err, RuntimeError::UnknownVariable { .. }));
        assert!(scope.is_empty());
    }

    #[test]
    fn assignment_checks_binding_before_evaluating() {
        // The right-hand side is ill-typed, but the missing name wins.
        let mut scope = Scope::new();
        let bad = Expr::binary(Expr::bool(true), BinaryOperator::Add, Expr::number(1.0));
        let err = run(&mut scope, &assign("x", bad)).unwrap_err();

        assert!(matches!(err, RuntimeError::UnknownVariable { .. }));
    }

    #[test]
    fn if_with_only_true_part() {
        let mut scope = scope_of(&[("x", 5.0)]);
        run(&mut scope,
            &Statement::If { condition:   x_gt_0(),
                             then_branch: vec![assign("x", Expr::number(10.0))],
                             else_branch: vec![],
                             line:        1, }).unwrap();

        assert_eq!(scope, scope_of(&[("x", 10.0)]));
    }

    #[test]
    fn if_with_empty_taken_branch_is_a_no_op() {
        let mut scope = scope_of(&[("x", 0.0)]);
        run(&mut scope,
            &Statement::If { condition:   x_gt_0(),
                             then_branch: vec![assign("x", Expr::number(10.0))],
                             else_branch: vec![],
                             line:        1, }).unwrap();

        assert_eq!(scope, scope_of(&[("x", 0.0)]));
    }

    #[test]
    fn if_with_only_false_part() {
        let mut scope = scope_of(&[("x", 0.0)]);
        run(&mut scope,
            &Statement::If { condition:   x_gt_0(),
                             then_branch: vec![],
                             else_branch: vec![assign("x", Expr::number(10.0))],
                             line:        1, }).unwrap();

        assert_eq!(scope, scope_of(&[("x", 10.0)]));
    }

    #[test]
    fn if_runs_exactly_one_branch() {
        let mut scope = scope_of(&[("x", 5.0)]);
        run(&mut scope,
            &Statement::If { condition:   x_gt_0(),
                             then_branch: vec![assign("x", Expr::number(10.0))],
                             else_branch: vec![assign("x", Expr::number(20.0))],
                             line:        1, }).unwrap();

        assert_eq!(scope, scope_of(&[("x", 10.0)]));
    }

    #[test]
    fn nested_ifs_share_state() {
        let mut scope = scope_of(&[("x", 5.0), ("y", 10.0)]);
        let inner =
            Statement::If { condition:   Expr::binary(Expr::variable("y"),
                                                      BinaryOperator::Greater,
                                                      Expr::number(5.0)),
                            then_branch: vec![assign("x", Expr::number(20.0))],
                            else_branch: vec![],
                            line:        2, };
        run(&mut scope,
            &Statement::If { condition:   x_gt_0(),
                             then_branch: vec![inner],
                             else_branch: vec![],
                             line:        1, }).unwrap();

        assert_eq!(scope, scope_of(&[("x", 20.0), ("y", 10.0)]));
    }

    #[test]
    fn non_boolean_condition_fails() {
        let mut scope = scope_of(&[("x", 1.0)]);
        let err = run(&mut scope,
                      &Statement::If { condition:   Expr::variable("x"),
                                       then_branch: vec![],
                                       else_branch: vec![],
                                       line:        8, }).unwrap_err();

        assert!(matches!(err, RuntimeError::ConditionNotBoolean { found: "number", line: 8 }));
    }

    #[test]
    fn while_counts_down() {
        let mut scope = scope_of(&[("x", 5.0)]);
        let decrement = Expr::binary(Expr::variable("x"), BinaryOperator::Sub, Expr::number(1.0));
        run(&mut scope,
            &Statement::While { condition: x_gt_0(),
                                body:      vec![assign("x", decrement)],
                                line:      1, }).unwrap();

        assert_eq!(scope, scope_of(&[("x", 0.0)]));
    }

    #[test]
    fn while_with_false_test_never_runs_body() {
        let mut scope = scope_of(&[("x", 0.0)]);
        let lines = run(&mut scope,
                        &Statement::While { condition: x_gt_0(),
                                            body:      vec![Statement::Print { value:
                                                                                   Expr::variable("x"),
                                                                               line:  2, }],
                                            line:      1, }).unwrap();

        assert!(lines.is_empty());
        assert_eq!(scope, scope_of(&[("x", 0.0)]));
    }

    #[test]
    fn while_condition_is_checked_on_every_iteration() {
        // First check sees a boolean; the body then rebinds `c` to a number.
        let mut scope: Scope = [("c", Value::Bool(true))].into_iter().collect();
        let err = run(&mut scope,
                      &Statement::While { condition: Expr::variable("c"),
                                          body:      vec![assign("c", Expr::number(1.0))],
                                          line:      4, }).unwrap_err();

        assert!(matches!(err, RuntimeError::ConditionNotBoolean { line: 4, .. }));
        assert_eq!(scope.value("c"), Some(Value::Number(1.0)));
    }

    #[test]
    fn while_body_error_aborts_loop() {
        let mut scope = scope_of(&[("x", 3.0)]);
        let err = run(&mut scope,
                      &Statement::While { condition: x_gt_0(),
                                          body:      vec![assign("y", Expr::number(1.0))],
                                          line:      1, }).unwrap_err();

        assert!(matches!(err, RuntimeError::UnknownVariable { .. }));
    }

    #[test]
    fn print_writes_value_and_leaves_state_alone() {
        let mut scope = scope_of(&[("x", 10.0)]);
        let lines = run(&mut scope,
                        &Statement::Print { value: Expr::binary(Expr::variable("x"),
                                                                BinaryOperator::Mul,
                                                                Expr::number(2.0)),
                                            line:  1, }).unwrap();

        assert_eq!(lines, vec!["20".to_string()]);
        assert_eq!(scope, scope_of(&[("x", 10.0)]));
    }

    #[test]
    fn prints_happen_in_execution_order() {
        let mut scope = scope_of(&[("x", 3.0)]);
        let decrement = Expr::binary(Expr::variable("x"), BinaryOperator::Sub, Expr::number(1.0));
        let lines = run(&mut scope,
                        &Statement::While { condition: x_gt_0(),
                                            body:      vec![Statement::Print { value:
                                                                                   Expr::variable("x"),
                                                                               line:  2, },
                                                            assign("x", decrement)],
                                            line:      1, }).unwrap();

        assert_eq!(lines, vec!["3", "2", "1"]);
    }

    #[test]
    fn evaluation_does_not_mutate_scope() {
        let scope = scope_of(&[("x", 1.0)]);
        let before = scope.clone();
        evaluate(&scope, &x_gt_0()).unwrap();

        assert_eq!(scope, before);
    }

    struct FailingSink;

    impl OutputSink for FailingSink {
        fn write_line(&mut self, _line: &str) -> std::io::Result<()> {
            Err(std::io::Error::other("closed"))
        }
    }

    #[test]
    fn sink_failures_surface_as_output_errors() {
        let mut scope = Scope::new();
        let mut sink = FailingSink;
        let err = Executor::new(&mut sink).execute(&mut scope,
                                                    &Statement::Print { value: Expr::number(1.0),
                                                                        line:  6, })
                                           .unwrap_err();

        assert!(matches!(err, RuntimeError::Output { line: 6, .. }));
    }
}
