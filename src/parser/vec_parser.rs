use super::ast::{BinaryOp, Expression, Program, Statement};
use crate::error::{Error, Result};
use crate::lexer::{Lexer, Token, TokenKind};

/// Deepest `[` nesting the parser accepts
///
/// Any nested literal already fails evaluation, so this only bounds the
/// recursion on malformed input.
pub const MAX_NESTING_DEPTH: usize = 64;

/// LL(1) recursive-descent parser for veclang
///
/// Pulls tokens from the [`Lexer`] one at a time and keeps exactly one token
/// of lookahead. Each grammar rule has its own method:
///
/// ```text
/// stat      : ID '=' expr | 'print' expr (',' expr)*
/// expr      : multipart ('+' multipart)* | STR
/// multipart : primary ('*' primary)*
/// primary   : INT | ID | '[' expr (',' expr)* ']'
/// ```
pub struct Parser {
    lexer: Lexer,
    /// Lookahead token
    current: Token,
    /// Open `[` count at the current position
    depth: usize,
}

impl Parser {
    /// Creates a parser, reading the first lookahead token
    pub fn new(mut lexer: Lexer) -> Result<Self> {
        let current = lexer.next_token()?;
        Ok(Parser {
            lexer,
            current,
            depth: 0,
        })
    }

    /// Creates a parser directly over source text
    pub fn from_source(source: &str) -> Result<Self> {
        Self::new(Lexer::new(source))
    }

    /// Parses the next statement, or `None` once the input is exhausted
    pub fn next_statement(&mut self) -> Result<Option<Statement>> {
        if self.is_at_end() {
            return Ok(None);
        }
        self.parse_statement().map(Some)
    }

    /// Parses all remaining statements without evaluating them
    pub fn parse_program(&mut self) -> Result<Program> {
        let mut statements = Vec::new();

        while let Some(stmt) = self.next_statement()? {
            statements.push(stmt);
        }

        Ok(Program { statements })
    }

    /// Whether the lookahead is EOF
    pub fn is_at_end(&self) -> bool {
        matches!(self.current.kind, TokenKind::Eof)
    }

    fn parse_statement(&mut self) -> Result<Statement> {
        self.depth = 0;
        match &self.current.kind {
            TokenKind::Identifier(name) => {
                let name = name.clone();
                self.advance()?;
                self.consume(TokenKind::Assign)?;
                let value = self.parse_expression()?;
                Ok(Statement::Assignment { name, value })
            }
            TokenKind::Print => {
                self.advance()?;
                let mut args = vec![self.parse_expression()?];
                while self.check(&TokenKind::Comma) {
                    self.advance()?;
                    args.push(self.parse_expression()?);
                }
                Ok(Statement::Print { args })
            }
            other => Err(self.syntax_error(format!(
                "Unsupported statement starting with {}; expected ID or PRINT",
                Self::describe(other)
            ))),
        }
    }

    fn parse_expression(&mut self) -> Result<Expression> {
        // Strings never combine with `+`
        if let TokenKind::String(s) = &self.current.kind {
            let s = s.clone();
            self.advance()?;
            return Ok(Expression::StringLiteral(s));
        }

        let first = self.parse_multipart()?;
        let mut rest = Vec::new();
        while self.check(&TokenKind::Plus) {
            self.advance()?;
            rest.push((BinaryOp::Add, self.parse_multipart()?));
        }

        Ok(Expression::chain(first, rest))
    }

    fn parse_multipart(&mut self) -> Result<Expression> {
        let first = self.parse_primary()?;
        let mut rest = Vec::new();
        while self.check(&TokenKind::Star) {
            self.advance()?;
            rest.push((BinaryOp::Multiply, self.parse_primary()?));
        }

        Ok(Expression::chain(first, rest))
    }

    fn parse_primary(&mut self) -> Result<Expression> {
        match &self.current.kind {
            TokenKind::Integer(n) => {
                let n = *n;
                self.advance()?;
                Ok(Expression::IntLiteral(n))
            }
            TokenKind::Identifier(name) => {
                let name = name.clone();
                self.advance()?;
                Ok(Expression::Variable(name))
            }
            TokenKind::LeftBracket => self.parse_vector_literal(),
            other => Err(self.syntax_error(format!(
                "Unexpected token {} in expression; expected INT, ID or LBRACK",
                Self::describe(other)
            ))),
        }
    }

    fn parse_vector_literal(&mut self) -> Result<Expression> {
        if self.depth >= MAX_NESTING_DEPTH {
            return Err(self.syntax_error(format!(
                "Vector literals nested deeper than {} levels",
                MAX_NESTING_DEPTH
            )));
        }
        self.consume(TokenKind::LeftBracket)?;
        self.depth += 1;

        let mut elements = vec![self.parse_expression()?];
        while self.check(&TokenKind::Comma) {
            self.advance()?;
            elements.push(self.parse_expression()?);
        }

        self.consume(TokenKind::RightBracket)?;
        self.depth -= 1;
        Ok(Expression::VectorLiteral(elements))
    }

    /// Replaces the lookahead with the next token and returns the old one
    fn advance(&mut self) -> Result<Token> {
        let next = self.lexer.next_token()?;
        Ok(std::mem::replace(&mut self.current, next))
    }

    fn check(&self, kind: &TokenKind) -> bool {
        std::mem::discriminant(&self.current.kind) == std::mem::discriminant(kind)
    }

    fn consume(&mut self, kind: TokenKind) -> Result<Token> {
        if self.check(&kind) {
            self.advance()
        } else {
            Err(self.syntax_error(format!(
                "Expected {}, found {}",
                kind.name(),
                Self::describe(&self.current.kind)
            )))
        }
    }

    fn describe(kind: &TokenKind) -> String {
        match kind {
            TokenKind::Eof => "end of file".to_string(),
            TokenKind::Integer(_)
            | TokenKind::String(_)
            | TokenKind::Identifier(_) => format!("{} `{}`", kind.name(), kind),
            _ => kind.name().to_string(),
        }
    }

    fn syntax_error(&self, message: impl Into<String>) -> Error {
        Error::SyntaxError {
            line: self.current.line,
            col: self.current.column,
            message: message.into(),
        }
    }
}
