//! # Veclang - a small vector-arithmetic language
//!
//! An LL(1) interpreter for a toy language of integer vectors. Programs are a
//! sequence of assignments and `print` statements:
//!
//! ```text
//! veca = [1, 2, 3]
//! vecb = [4, 5]
//! print 'veca + 4:', veca + 4
//! print 'veca * 2:', veca * 2
//! print 'veca * vecb:', veca * vecb
//! ```
//!
//! prints
//!
//! ```text
//! veca + 4: [1, 2, 3, 4]
//! veca * 2: [2, 4, 6]
//! veca * vecb: [4, 5, 8, 10, 12, 15]
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! # fn main() -> veclang::Result<()> {
//! let output = veclang::execute("a = [1,2,3]\nb = a * 2\nprint 'b:', b")?;
//! assert_eq!(output, "b: [2, 4, 6]\n");
//! # Ok(())
//! # }
//! ```
//!
//! ## Language Overview
//!
//! ```text
//! stat      : ID '=' expr | 'print' expr (',' expr)*
//! expr      : multipart ('+' multipart)* | STR
//! multipart : primary ('*' primary)*
//! primary   : INT | ID | '[' expr (',' expr)* ']'
//! ```
//!
//! - `vector + integer` appends, `vector + vector` concatenates
//! - `vector * integer` scales every element
//! - `vector * vector` is the Cartesian product: `[1,2] * [3,4]` is `[3, 4, 6, 8]`
//! - every other operand combination is a type error, including `2 * 3`
//!
//! ## Architecture
//!
//! ```text
//! Source Code → Lexer → Tokens → Parser → Statement → Interpreter → Output
//! ```
//!
//! The parser pulls one token at a time and hands back one statement at a
//! time; the [`Interpreter`] executes each statement before the next one is
//! parsed.
//!
//! - [`Lexer`] - Tokenizes source code lazily
//! - [`Parser`] - Recursive descent with a single lookahead token
//! - [`Interpreter`] - Executes statements and owns the symbol table
//! - [`Value`] - Integer, vector or text
//! - [`Environment`] - Variable storage
//!
//! ## Error Handling
//!
//! Every error stops the run and is returned to the caller:
//!
//! ```rust
//! use veclang::{Error, ErrorKind};
//!
//! let err = veclang::execute("print x").unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::Name);
//! assert!(matches!(err, Error::UndefinedVariable { .. }));
//! ```

pub mod error;
pub mod lexer;
pub mod parser;
pub mod runtime;

// Re-export main types
pub use error::{Error, ErrorKind, Result};
pub use lexer::{tokenize, Lexer, Token, TokenKind};
pub use parser::{BinaryOp, Expression, Parser, Program, Statement};
pub use runtime::{Environment, Interpreter, InterpreterConfig, Value};

/// Version of the veclang interpreter
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Runs a program with a fresh interpreter and returns everything it printed
pub fn execute(source: &str) -> Result<String> {
    let mut interpreter = Interpreter::with_output(Vec::new());
    interpreter.run(source)?;
    Ok(String::from_utf8_lossy(&interpreter.into_output()).into_owned())
}
