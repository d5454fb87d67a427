//! Veclang parser module
//!
//! Single-token-lookahead recursive descent over the lexer's token stream,
//! building one statement at a time.

mod ast;
mod vec_parser;

pub use ast::{BinaryOp, Expression, Program, Statement};
pub use vec_parser::Parser;
