/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator evaluates expressions, executes statements against the
/// program state and drives whole programs. It is the core execution engine
/// of the interpreter.
///
/// # Responsibilities
/// - Evaluates expressions, enforcing the operand types of every operator.
/// - Executes declarations, assignments, branches, loops and prints.
/// - Reports runtime errors such as unknown variables or type mismatches.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads the raw source text and produces a stream of tokens, each
/// paired with the line it appeared on.
pub mod lexer;
/// Destinations for printed values.
pub mod output;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// # Responsibilities
/// - Converts tokens into statements and expressions.
/// - Encodes operator precedence and associativity.
/// - Reports syntax errors with line information.
pub mod parser;
/// Program state: variable bindings and parent-link resolution.
pub mod scope;
/// The value module defines the runtime data types for evaluation.
pub mod value;
