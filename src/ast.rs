use std::str::FromStr;

use crate::error::RuntimeError;

/// An abstract syntax tree (AST) node representing an expression in the
/// language.
///
/// `Expr` covers literals, variable references and binary operations. Every
/// variant records the source line it was parsed from so that runtime errors
/// can point back at the offending code.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A numeric literal such as `3` or `2.5`.
    Number {
        /// The constant value.
        value: f64,
        /// Line number in the source code.
        line:  usize,
    },
    /// A boolean literal: `true` or `false`.
    Bool {
        /// The constant value.
        value: bool,
        /// Line number in the source code.
        line:  usize,
    },
    /// Reference to a variable by name.
    Variable {
        /// Name of the variable.
        name: String,
        /// Line number in the source code.
        line: usize,
    },
    /// A binary operation (addition, comparison, logical and, etc.).
    BinaryOp {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Self>,
        /// Line number in the source code.
        line:  usize,
    },
}

impl Expr {
    /// Gets the line number from `self`.
    /// ## Example
    /// ```
    /// use impish::ast::Expr;
    ///
    /// let expr = Expr::Variable { name: "x".to_string(),
    ///                             line: 5, };
    ///
    /// assert_eq!(expr.line_number(), 5);
    /// ```
    #[must_use]
    pub const fn line_number(&self) -> usize {
        match self {
            Self::Number { line, .. }
            | Self::Bool { line, .. }
            | Self::Variable { line, .. }
            | Self::BinaryOp { line, .. } => *line,
        }
    }

    /// Builds a numeric literal on line 0.
    ///
    /// Convenience for assembling trees by hand, e.g. in tests.
    #[must_use]
    pub const fn number(value: f64) -> Self {
        Self::Number { value, line: 0 }
    }

    /// Builds a boolean literal on line 0.
    #[must_use]
    pub const fn bool(value: bool) -> Self {
        Self::Bool { value, line: 0 }
    }

    /// Builds a variable reference on line 0.
    #[must_use]
    pub fn variable(name: &str) -> Self {
        Self::Variable { name: name.to_string(),
                         line: 0, }
    }

    /// Builds a binary operation on line 0.
    #[must_use]
    pub fn binary(left: Self, op: BinaryOperator, right: Self) -> Self {
        Self::BinaryOp { left: Box::new(left),
                         op,
                         right: Box::new(right),
                         line: 0 }
    }
}

/// Represents a statement.
///
/// Statements are the units a program is made of. They are executed strictly
/// in order and are the only constructs that change program state or produce
/// output.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// A variable declaration using `let`. Redeclaring an existing name
    /// overwrites it.
    Let {
        /// The name of the variable.
        name:  String,
        /// The initial value of the variable.
        value: Expr,
        /// Line number in the source code.
        line:  usize,
    },
    /// An assignment to an already declared variable.
    Assign {
        /// The name of the variable.
        name:  String,
        /// The value which is being assigned.
        value: Expr,
        /// Line number in the source code.
        line:  usize,
    },
    /// A conditional with two (possibly empty) branches.
    If {
        /// Must evaluate to a boolean.
        condition:   Expr,
        /// Executed when the condition is true.
        then_branch: Vec<Self>,
        /// Executed when the condition is false.
        else_branch: Vec<Self>,
        /// Line number in the source code.
        line:        usize,
    },
    /// A loop that runs its body while the condition holds.
    While {
        /// Must evaluate to a boolean on every check.
        condition: Expr,
        /// Statements executed once per iteration.
        body:      Vec<Self>,
        /// Line number in the source code.
        line:      usize,
    },
    /// Writes the value of an expression to the output sink.
    Print {
        /// The expression to print.
        value: Expr,
        /// Line number in the source code.
        line:  usize,
    },
}

impl Statement {
    /// Gets the line number from `self`.
    #[must_use]
    pub const fn line_number(&self) -> usize {
        match self {
            Self::Let { line, .. }
            | Self::Assign { line, .. }
            | Self::If { line, .. }
            | Self::While { line, .. }
            | Self::Print { line, .. } => *line,
        }
    }
}

/// Represents a binary operator.
///
/// Binary operators include arithmetic, logic, ordering and strict equality.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Logical and (`&&`)
    And,
    /// Logical or (`||`)
    Or,
    /// Greater than (`>`)
    Greater,
    /// Less than (`<`)
    Less,
    /// Strict equality (`===`)
    StrictEqual,
}

impl BinaryOperator {
    /// Returns the source symbol of the operator.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::And => "&&",
            Self::Or => "||",
            Self::Greater => ">",
            Self::Less => "<",
            Self::StrictEqual => "===",
        }
    }
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Parses an operator from its source symbol.
///
/// Trees that are assembled outside the parser (for example from a foreign
/// front end) name their operators by symbol; anything unknown is rejected.
///
/// # Example
/// ```
/// use impish::ast::BinaryOperator;
///
/// assert_eq!("===".parse::<BinaryOperator>().unwrap(), BinaryOperator::StrictEqual);
/// assert!("**".parse::<BinaryOperator>().is_err());
/// ```
impl FromStr for BinaryOperator {
    type Err = RuntimeError;

    fn from_str(symbol: &str) -> Result<Self, Self::Err> {
        use BinaryOperator::{Add, And, Div, Greater, Less, Mul, Or, StrictEqual, Sub};

        match symbol {
            "+" => Ok(Add),
            "-" => Ok(Sub),
            "*" => Ok(Mul),
            "/" => Ok(Div),
            "&&" => Ok(And),
            "||" => Ok(Or),
            ">" => Ok(Greater),
            "<" => Ok(Less),
            "===" => Ok(StrictEqual),
            _ => Err(RuntimeError::InvalidOperator { symbol: symbol.to_string() }),
        }
    }
}
