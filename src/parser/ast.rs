use std::fmt;

/// Complete veclang program
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Program {
    /// Top-level statements in source order
    pub statements: Vec<Statement>,
}

/// Statements
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    /// Variable assignment: x = expr
    Assignment {
        /// Name of the variable to assign to
        name: String,
        /// Expression value to assign
        value: Expression,
    },

    /// Print statement: print expr, expr, ...
    Print {
        /// Expressions printed space-separated on one line
        args: Vec<Expression>,
    },
}

/// Expressions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expression {
    /// Integer literal
    IntLiteral(i64),
    /// String literal (only valid as a whole expression)
    StringLiteral(String),
    /// Variable reference
    Variable(String),
    /// Vector literal: [expr, expr, ...]
    VectorLiteral(Vec<Expression>),
    /// Left-associative operator chain: `first op1 e1 op2 e2 ...`
    ///
    /// Kept flat so chain length never turns into tree depth.
    Chain {
        /// Leftmost operand
        first: Box<Expression>,
        /// Operators and right operands, in source order
        rest: Vec<(BinaryOp, Expression)>,
    },
}

/// Binary operators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    /// Append / concatenate (+)
    Add,
    /// Scale / Cartesian product (*)
    Multiply,
}

impl Expression {
    /// Builds a chain node, or returns `first` unchanged when `rest` is empty
    pub fn chain(first: Expression, rest: Vec<(BinaryOp, Expression)>) -> Self {
        if rest.is_empty() {
            first
        } else {
            Expression::Chain {
                first: Box::new(first),
                rest,
            }
        }
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            BinaryOp::Add => write!(f, "+"),
            BinaryOp::Multiply => write!(f, "*"),
        }
    }
}

// Rendered back as source. A `*` chain only ever has primaries as operands,
// so no parentheses are needed for the output to reparse to the same tree.
impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Expression::IntLiteral(n) => write!(f, "{}", n),
            Expression::StringLiteral(s) => {
                if s.contains('\'') {
                    write!(f, "\"{}\"", s)
                } else {
                    write!(f, "'{}'", s)
                }
            }
            Expression::Variable(name) => write!(f, "{}", name),
            Expression::VectorLiteral(elements) => {
                write!(f, "[")?;
                for (i, elem) in elements.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", elem)?;
                }
                write!(f, "]")
            }
            Expression::Chain { first, rest } => {
                write!(f, "{}", first)?;
                for (op, operand) in rest {
                    write!(f, " {} {}", op, operand)?;
                }
                Ok(())
            }
        }
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Statement::Assignment { name, value } => write!(f, "{} = {}", name, value),
            Statement::Print { args } => {
                write!(f, "print ")?;
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", arg)?;
                }
                Ok(())
            }
        }
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for stmt in &self.statements {
            writeln!(f, "{}", stmt)?;
        }
        Ok(())
    }
}
