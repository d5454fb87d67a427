//! Error types for the veclang interpreter

use thiserror::Error;

/// Veclang interpreter errors
///
/// Every error is fatal for the run that produced it: the interpreter stops at
/// the first one and hands it back to the caller.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    // Lex errors
    /// Character that cannot start any token
    ///
    /// **Triggered by:** Anything outside `[ ] , = * +`, quotes, digits, letters and whitespace
    /// **Example:** `x = 1 - 2` (`-` is not part of the language)
    #[error("Lex error at line {line}, column {col}: unsupported character '{ch}'")]
    UnsupportedCharacter {
        /// Offending character
        ch: char,
        /// Line number where the character appears
        line: usize,
        /// Column number where the character appears
        col: usize,
    },

    /// String literal not closed before a newline or end of input
    ///
    /// **Triggered by:** `print 'abc` followed by end of line or end of input
    #[error("Lex error at line {line}, column {col}: unterminated string, expected closing {quote}")]
    UnterminatedString {
        /// Quote character that opened the string
        quote: char,
        /// Line number where the string starts
        line: usize,
        /// Column number where the string starts
        col: usize,
    },

    /// Integer literal that does not fit in a 64-bit signed integer
    #[error("Lex error at line {line}, column {col}: invalid integer literal {literal}")]
    InvalidInteger {
        /// Literal text as written
        literal: String,
        /// Line number where the literal starts
        line: usize,
        /// Column number where the literal starts
        col: usize,
    },

    // Parse errors
    /// Syntax error encountered during parsing
    ///
    /// **Triggered by:** A token the grammar does not allow at this point
    /// **Example:** `x = [1, 2` (missing closing bracket)
    #[error("Syntax error at line {line}, column {col}: {message}")]
    SyntaxError {
        /// Line number where error occurred
        line: usize,
        /// Column number where error occurred
        col: usize,
        /// Error description
        message: String,
    },

    // Runtime errors
    /// Reference to undefined variable
    ///
    /// **Triggered by:** Using a variable before assignment
    /// **Example:** `print x` (when x was never assigned)
    #[error("Undefined variable: {name}")]
    UndefinedVariable {
        /// Variable name
        name: String,
    },

    /// Invalid operation for given types
    ///
    /// **Triggered by:** `+` or `*` with an operand combination that has no rule
    /// **Example:** `x = 2 * 3` (scalar by scalar), `x = 1 + [2]`
    #[error("Invalid operation: {op} on types {left_type} and {right_type}")]
    InvalidOperation {
        /// Operation name
        op: String,
        /// Left operand type
        left_type: String,
        /// Right operand type
        right_type: String,
    },

    /// Vector literal containing something other than an integer
    ///
    /// **Example:** `x = [[1, 2], 3]`, `x = ['a']`
    #[error("Type error: vector elements must be integers, got {got}")]
    InvalidVectorElement {
        /// Type of the rejected element
        got: String,
    },

    /// Arithmetic result outside the 64-bit signed range
    #[error("Integer overflow in {op}")]
    IntegerOverflow {
        /// Operation name
        op: String,
    },

    // Resource errors
    /// Result vector longer than the configured limit
    #[error("Vector too large: {len} elements (limit: {limit})")]
    VectorTooLarge {
        /// Length the operation would have produced
        len: usize,
        /// Configured maximum length
        limit: usize,
    },

    /// Interpreter configuration could not be loaded
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Writing a print line to the output sink failed
    #[error("Output error: {0}")]
    Output(String),
}

/// Error category, one per class of failure a run can end with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Tokenization failed
    Lex,
    /// Token stream does not match the grammar
    Syntax,
    /// Unknown identifier
    Name,
    /// Operand or element types have no rule
    Type,
    /// Integer overflow
    Arithmetic,
    /// Configured limit exceeded
    Resource,
    /// Bad configuration
    Config,
    /// Output sink failure
    Io,
}

impl Error {
    /// Classify the error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::UnsupportedCharacter { .. }
            | Error::UnterminatedString { .. }
            | Error::InvalidInteger { .. } => ErrorKind::Lex,

            Error::SyntaxError { .. } => ErrorKind::Syntax,

            Error::UndefinedVariable { .. } => ErrorKind::Name,

            Error::InvalidOperation { .. } | Error::InvalidVectorElement { .. } => ErrorKind::Type,

            Error::IntegerOverflow { .. } => ErrorKind::Arithmetic,
            Error::VectorTooLarge { .. } => ErrorKind::Resource,
            Error::InvalidConfig(_) => ErrorKind::Config,
            Error::Output(_) => ErrorKind::Io,
        }
    }

    /// Create an invalid operation error from the operand type names
    pub fn invalid_operation(op: &str, left_type: &str, right_type: &str) -> Self {
        Error::InvalidOperation {
            op: op.to_string(),
            left_type: left_type.to_string(),
            right_type: right_type.to_string(),
        }
    }
}

/// Result type for veclang operations
pub type Result<T> = std::result::Result<T, Error>;
