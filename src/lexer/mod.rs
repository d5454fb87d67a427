//! Lexical analysis for veclang
//!
//! Converts source text into a lazy stream of tokens, one character of
//! lookahead at a time.

mod scanner;
mod token;

pub use scanner::{tokenize, Lexer};
pub use token::{Token, TokenKind};
