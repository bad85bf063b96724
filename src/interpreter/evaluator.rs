/// Core evaluation logic.
///
/// Contains the result type shared by the evaluator and the expression
/// dispatch that turns an `Expr` into a `Value`.
pub mod core;

/// Binary operator evaluation logic.
///
/// Handles arithmetic, logical, ordering and strict-equality operators,
/// including the operand type checks each of them performs.
pub mod binary;

/// Statement execution.
///
/// Runs declarations, assignments, conditionals, loops and prints against a
/// mutable scope, writing printed values to an output sink.
pub mod statement;

/// Whole-program execution.
///
/// Creates the top-level scope, runs every statement in order and hands the
/// final scope back to the caller.
pub mod program;
