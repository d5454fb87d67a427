//! Runtime execution for veclang programs

mod environment;
mod interpreter;
mod value;

pub use environment::Environment;
pub use interpreter::{Interpreter, InterpreterConfig};
pub use value::Value;
