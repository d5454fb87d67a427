use serde::{Deserialize, Serialize};

/// A single token from the source code
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// The type of token
    pub kind: TokenKind,
    /// Original text of the token
    pub lexeme: String,
    /// Line number where token starts (1-indexed)
    pub line: usize,
    /// Column number where token starts (1-indexed)
    pub column: usize,
}

impl Token {
    /// Creates a new token with the given properties
    pub fn new(kind: TokenKind, lexeme: String, line: usize, column: usize) -> Self {
        Token {
            kind,
            lexeme,
            line,
            column,
        }
    }
}

/// All possible token types in veclang
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TokenKind {
    // Literals
    /// Integer literal (always non-negative in source)
    Integer(i64),
    /// String literal, quotes stripped
    String(String),

    /// Identifier (letters only)
    Identifier(String),

    /// PRINT keyword
    Print,

    // Operators
    /// Plus operator (+)
    Plus,
    /// Star operator (*)
    Star,
    /// Assignment operator (=)
    Assign,

    // Delimiters
    /// Left bracket [
    LeftBracket,
    /// Right bracket ]
    RightBracket,
    /// Comma delimiter
    Comma,

    /// End of file marker
    Eof,
}

impl TokenKind {
    /// Grammar name of the token kind, as used in error messages
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::Integer(_) => "INT",
            TokenKind::String(_) => "STR",
            TokenKind::Identifier(_) => "ID",
            TokenKind::Print => "PRINT",
            TokenKind::Plus => "ADD",
            TokenKind::Star => "TIMES",
            TokenKind::Assign => "EQUAL",
            TokenKind::LeftBracket => "LBRACK",
            TokenKind::RightBracket => "RBRACK",
            TokenKind::Comma => "COMMA",
            TokenKind::Eof => "EOF",
        }
    }

    /// Keyword for an identifier run, if it is one
    pub fn keyword(s: &str) -> Option<TokenKind> {
        match s {
            "print" => Some(TokenKind::Print),
            _ => None,
        }
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            TokenKind::Integer(n) => write!(f, "{}", n),
            TokenKind::String(s) => write!(f, "'{}'", s),
            TokenKind::Identifier(id) => write!(f, "{}", id),
            TokenKind::Print => write!(f, "print"),
            TokenKind::Plus => write!(f, "+"),
            TokenKind::Star => write!(f, "*"),
            TokenKind::Assign => write!(f, "="),
            TokenKind::LeftBracket => write!(f, "["),
            TokenKind::RightBracket => write!(f, "]"),
            TokenKind::Comma => write!(f, ","),
            TokenKind::Eof => write!(f, "end of file"),
        }
    }
}
