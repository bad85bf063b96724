/// Operator dispatch.
///
/// Routes each binary operator to the handler for its family and builds the
/// type errors they share.
pub mod core;

/// Arithmetic operators: `+`, `-`, `*` and `/`.
pub mod arithmetic;

/// Logical operators: `&&` and `||`.
pub mod logic;

/// Ordering and equality: `>`, `<` and `===`.
pub mod comparison;
