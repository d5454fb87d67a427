use serde::{Deserialize, Serialize};
use std::io::{self, Write};

use crate::error::{Error, Result};
use crate::parser::{BinaryOp, Expression, Parser, Statement};
use crate::runtime::{Environment, Value};

/// Configuration for an [`Interpreter`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InterpreterConfig {
    /// Longest vector any operation may produce (default: 1 048 576)
    pub max_vector_len: usize,
    /// Record every assignment in the execution trace
    pub trace_assignments: bool,
}

impl Default for InterpreterConfig {
    fn default() -> Self {
        InterpreterConfig {
            max_vector_len: 1 << 20,
            trace_assignments: false,
        }
    }
}

impl InterpreterConfig {
    /// Loads a configuration from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| Error::InvalidConfig(e.to_string()))
    }
}

/// Veclang interpreter
///
/// Statements are parsed one at a time and executed as soon as they are
/// complete, so a program's earlier `print` lines are written before a later
/// statement fails. The symbol table belongs to this instance and survives
/// across [`Interpreter::run`] calls until [`Interpreter::reset`].
pub struct Interpreter<W: Write = io::Stdout> {
    /// Variable environment
    env: Environment,
    config: InterpreterConfig,
    /// Sink for `print` lines
    out: W,
    /// Assignments in execution order (when `trace_assignments` is on)
    execution_trace: Vec<(String, Value)>,
}

impl Interpreter {
    /// Creates an interpreter that prints to stdout
    pub fn new() -> Self {
        Self::with_output(io::stdout())
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> Interpreter<W> {
    /// Creates an interpreter that prints to `out`
    pub fn with_output(out: W) -> Self {
        Self::with_config(out, InterpreterConfig::default())
    }

    /// Creates an interpreter with a custom configuration
    pub fn with_config(out: W, config: InterpreterConfig) -> Self {
        Interpreter {
            env: Environment::new(),
            config,
            out,
            execution_trace: Vec::new(),
        }
    }

    /// Runs a whole program, stopping at the first error
    ///
    /// Bindings made before the failing statement are kept.
    pub fn run(&mut self, source: &str) -> Result<()> {
        let mut parser = Parser::from_source(source)?;

        while let Some(stmt) = parser.next_statement()? {
            self.execute(&stmt)?;
        }

        Ok(())
    }

    /// Executes a single statement
    pub fn execute(&mut self, stmt: &Statement) -> Result<()> {
        tracing::debug!(statement = %stmt, "executing");

        match stmt {
            Statement::Assignment { name, value } => {
                let val = self.evaluate(value)?;
                tracing::trace!(name = %name, value = %val, "bind");
                if self.config.trace_assignments {
                    self.execution_trace.push((name.clone(), val.clone()));
                }
                self.env.define(name.clone(), val);
                Ok(())
            }

            Statement::Print { args } => {
                let parts = args
                    .iter()
                    .map(|arg| self.evaluate(arg).map(|v| v.to_string()))
                    .collect::<Result<Vec<_>>>()?;
                self.emit(&parts.join(" "))
            }
        }
    }

    /// Evaluates an expression against the current bindings
    pub fn evaluate(&self, expr: &Expression) -> Result<Value> {
        match expr {
            Expression::IntLiteral(n) => Ok(Value::Integer(*n)),

            Expression::StringLiteral(s) => Ok(Value::Text(s.clone())),

            Expression::Variable(name) => self.env.get(name),

            Expression::VectorLiteral(elements) => {
                if elements.len() > self.config.max_vector_len {
                    return Err(Error::VectorTooLarge {
                        len: elements.len(),
                        limit: self.config.max_vector_len,
                    });
                }
                let mut out = Vec::with_capacity(elements.len());
                for elem in elements {
                    match self.evaluate(elem)? {
                        Value::Integer(n) => out.push(n),
                        other => {
                            return Err(Error::InvalidVectorElement {
                                got: other.type_name().to_string(),
                            })
                        }
                    }
                }
                Ok(Value::vector(out))
            }

            Expression::Chain { first, rest } => {
                let limit = self.config.max_vector_len;
                let mut acc = self.evaluate(first)?;
                for (op, operand) in rest {
                    let rhs = self.evaluate(operand)?;
                    acc = match op {
                        BinaryOp::Add => acc.add(&rhs, limit)?,
                        BinaryOp::Multiply => acc.multiply(&rhs, limit)?,
                    };
                }
                Ok(acc)
            }
        }
    }

    /// Gets the value bound to a variable
    pub fn get(&self, name: &str) -> Result<Value> {
        self.env.get(name)
    }

    /// The symbol table
    pub fn env(&self) -> &Environment {
        &self.env
    }

    /// Assignments recorded so far
    pub fn execution_trace(&self) -> &[(String, Value)] {
        &self.execution_trace
    }

    /// Drops all bindings and the execution trace
    pub fn reset(&mut self) {
        self.env.clear();
        self.execution_trace.clear();
    }

    /// Consumes the interpreter, returning the output sink
    pub fn into_output(self) -> W {
        self.out
    }

    fn emit(&mut self, line: &str) -> Result<()> {
        writeln!(self.out, "{}", line).map_err(|e| Error::Output(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(source: &str) -> Result<String> {
        let mut interp = Interpreter::with_output(Vec::new());
        interp.run(source)?;
        Ok(String::from_utf8(interp.into_output()).unwrap())
    }

    #[test]
    fn test_print_formatting() {
        assert_eq!(run("print 'label:', [1,2,3]").unwrap(), "label: [1, 2, 3]\n");
    }

    #[test]
    fn test_scale_and_print() {
        let out = run("a = [1,2,3]\nb = a * 2\nprint 'b:', b").unwrap();
        assert_eq!(out, "b: [2, 4, 6]\n");
    }

    #[test]
    fn test_add_chain_is_left_to_right() {
        let out = run("print [1] + 2 + [3, 4] + 5").unwrap();
        assert_eq!(out, "[1, 2, 3, 4, 5]\n");
    }

    #[test]
    fn test_multiply_before_add() {
        let out = run("print [1, 2] + [1] * 3").unwrap();
        assert_eq!(out, "[1, 2, 3]\n");
    }

    #[test]
    fn test_vector_elements_from_variables() {
        let out = run("n = 4\nprint [1, n]").unwrap();
        assert_eq!(out, "[1, 4]\n");
    }

    #[test]
    fn test_integer_plus_integer_rejected() {
        let err = run("print [1, 4 + 0]").unwrap_err();
        assert_eq!(err, Error::invalid_operation("+", "integer", "integer"));
    }

    #[test]
    fn test_earlier_output_survives_failure() {
        let mut interp = Interpreter::with_output(Vec::new());
        let err = interp.run("a = [1]\nprint a\nprint b").unwrap_err();
        assert_eq!(
            err,
            Error::UndefinedVariable {
                name: "b".to_string()
            }
        );
        assert_eq!(interp.get("a").unwrap(), Value::vector(vec![1]));
        assert_eq!(String::from_utf8(interp.into_output()).unwrap(), "[1]\n");
    }

    #[test]
    fn test_rebinding_does_not_change_derived_values() {
        let mut interp = Interpreter::with_output(Vec::new());
        interp.run("a = [1, 2]\nb = a + 3\na = [9]").unwrap();
        assert_eq!(interp.get("b").unwrap(), Value::vector(vec![1, 2, 3]));
        assert_eq!(interp.get("a").unwrap(), Value::vector(vec![9]));
    }

    #[test]
    fn test_append_does_not_mutate_variable() {
        let out = run("a = [1]\nb = a + 2\nprint a, b").unwrap();
        assert_eq!(out, "[1] [1, 2]\n");
    }

    #[test]
    fn test_bindings_persist_across_runs() {
        let mut interp = Interpreter::with_output(Vec::new());
        interp.run("x = [5]").unwrap();
        interp.run("print x * 2").unwrap();
        interp.reset();
        assert!(interp.run("print x").is_err());
        assert_eq!(String::from_utf8(interp.into_output()).unwrap(), "[10]\n");
    }

    #[test]
    fn test_nested_vector_rejected() {
        let err = run("x = [[1, 2], 3]").unwrap_err();
        assert_eq!(
            err,
            Error::InvalidVectorElement {
                got: "vector".to_string()
            }
        );

        let err = run("x = ['a']").unwrap_err();
        assert_eq!(
            err,
            Error::InvalidVectorElement {
                got: "text".to_string()
            }
        );
    }

    #[test]
    fn test_string_assignment_and_rebind() {
        let mut interp = Interpreter::with_output(Vec::new());
        interp.run("s = 'hi'\nprint s, s\ns = 3").unwrap();
        assert_eq!(interp.get("s").unwrap(), Value::Integer(3));
        assert_eq!(String::from_utf8(interp.into_output()).unwrap(), "hi hi\n");
    }

    #[test]
    fn test_text_variable_in_arithmetic() {
        let err = run("s = 'hi'\nx = [1] + s").unwrap_err();
        assert_eq!(err, Error::invalid_operation("+", "vector", "text"));
    }

    #[test]
    fn test_execution_trace() {
        let config = InterpreterConfig {
            trace_assignments: true,
            ..InterpreterConfig::default()
        };
        let mut interp = Interpreter::with_config(Vec::new(), config);
        interp.run("a = [1]\nb = a * [2, 3]\na = 4").unwrap();
        assert_eq!(
            interp.execution_trace(),
            &[
                ("a".to_string(), Value::vector(vec![1])),
                ("b".to_string(), Value::vector(vec![2, 3])),
                ("a".to_string(), Value::Integer(4)),
            ]
        );
    }

    #[test]
    fn test_vector_limit_from_config() {
        let config = InterpreterConfig::from_json(r#"{"max_vector_len": 4}"#).unwrap();
        assert!(!config.trace_assignments);

        let mut interp = Interpreter::with_config(Vec::new(), config);
        let err = interp.run("a = [1, 2, 3]\nb = a * a").unwrap_err();
        assert_eq!(err, Error::VectorTooLarge { len: 9, limit: 4 });
    }

    #[test]
    fn test_vector_literal_respects_limit() {
        let config = InterpreterConfig {
            max_vector_len: 2,
            ..InterpreterConfig::default()
        };
        let mut interp = Interpreter::with_config(Vec::new(), config);
        interp.run("a = [1, 2]").unwrap();
        let err = interp.run("b = [1, 2, 3]").unwrap_err();
        assert_eq!(err, Error::VectorTooLarge { len: 3, limit: 2 });
        assert!(!interp.env().exists("b"));
    }

    #[test]
    fn test_long_add_chain() {
        let source = format!("v = [0]{}\nprint 'done'", " + 1".repeat(100_000));
        let mut interp = Interpreter::with_output(Vec::new());
        interp.run(&source).unwrap();
        match interp.get("v").unwrap() {
            Value::Vector(elements) => {
                assert_eq!(elements.len(), 100_001);
                assert_eq!(elements[0], 0);
                assert!(elements[1..].iter().all(|n| *n == 1));
            }
            other => panic!("unexpected value: {other:?}"),
        }
        assert_eq!(String::from_utf8(interp.into_output()).unwrap(), "done\n");
    }

    #[test]
    fn test_chain_does_not_touch_source_variable() {
        let out = run("a = [1, 2]\nb = a * 3 + 4 + a\nprint a, b").unwrap();
        assert_eq!(out, "[1, 2] [3, 6, 4, 1, 2]\n");
    }

    #[test]
    fn test_bad_config() {
        let err = InterpreterConfig::from_json(r#"{"max_vector_len": "big"}"#).unwrap_err();
        assert!(matches!(err, Error::InvalidConfig(_)));
    }
}
