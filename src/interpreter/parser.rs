/// Parser entry points.
///
/// Defines the parse result type and the top-level routines for whole
/// programs and single expressions.
pub mod core;

/// Binary operator parsing.
///
/// One function per precedence level, from logical OR down to
/// multiplication.
pub mod binary;

/// Primary expression parsing.
///
/// Literals, variable references and parenthesized expressions.
pub mod primary;

/// Block parsing.
///
/// Brace-delimited statement sequences used by `if` and `while`.
pub mod block;

/// Statement parsing.
///
/// Declarations, assignments, conditionals, loops and prints.
pub mod statement;

/// Shared parsing helpers.
///
/// Token expectations and identifier parsing.
pub mod utils;
