use super::token::{Token, TokenKind};
use crate::error::{Error, Result};

/// Lazy LL(1) lexer for veclang source
///
/// Tokens are produced on demand by [`Lexer::next_token`]; nothing is
/// buffered beyond the current character.
pub struct Lexer {
    /// Source code as character vector
    source: Vec<char>,
    /// Start position of current token
    start: usize,
    /// Current position in source
    current: usize,
    /// Current line number (1-indexed)
    line: usize,
    /// Current column number (1-indexed)
    column: usize,
    /// Line where the current token starts
    start_line: usize,
    /// Column where the current token starts
    start_column: usize,
    /// Set once the iterator has yielded EOF or an error
    finished: bool,
}

impl Lexer {
    /// Creates a new lexer over source code
    pub fn new(source: &str) -> Self {
        Lexer {
            source: source.chars().collect(),
            start: 0,
            current: 0,
            line: 1,
            column: 1,
            start_line: 1,
            start_column: 1,
            finished: false,
        }
    }

    /// Whether any input remains (trailing whitespace counts as input)
    pub fn has_next(&self) -> bool {
        self.peek().is_some()
    }

    /// Scans the next token, or EOF once the input is exhausted
    ///
    /// EOF is returned again on every further call.
    pub fn next_token(&mut self) -> Result<Token> {
        self.skip_whitespace();

        self.start = self.current;
        self.start_line = self.line;
        self.start_column = self.column;

        let c = match self.peek() {
            Some(c) => c,
            None => return Ok(self.make_token(TokenKind::Eof)),
        };

        let token = match c {
            '[' => self.single(TokenKind::LeftBracket),
            ']' => self.single(TokenKind::RightBracket),
            ',' => self.single(TokenKind::Comma),
            '=' => self.single(TokenKind::Assign),
            '*' => self.single(TokenKind::Star),
            '+' => self.single(TokenKind::Plus),

            '\'' | '"' => self.scan_string(c)?,

            c if c.is_ascii_digit() => self.scan_integer()?,

            c if c.is_alphabetic() => self.scan_identifier_or_keyword(),

            _ => {
                return Err(Error::UnsupportedCharacter {
                    ch: c,
                    line: self.line,
                    col: self.column,
                });
            }
        };

        tracing::trace!(kind = token.kind.name(), lexeme = %token.lexeme, "token");
        Ok(token)
    }

    /// Scans all remaining tokens, ending with EOF
    pub fn scan_tokens(&mut self) -> Result<Vec<Token>> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token()?;
            let at_end = token.kind == TokenKind::Eof;
            tokens.push(token);
            if at_end {
                return Ok(tokens);
            }
        }
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.peek(), Some(c) if c.is_whitespace()) {
            self.advance();
        }
    }

    fn single(&mut self, kind: TokenKind) -> Token {
        self.advance();
        self.make_token(kind)
    }

    fn scan_string(&mut self, quote: char) -> Result<Token> {
        self.advance(); // Opening quote

        let mut value = String::new();
        loop {
            match self.peek() {
                Some(c) if c == quote => break,
                Some('\n') | None => {
                    return Err(Error::UnterminatedString {
                        quote,
                        line: self.start_line,
                        col: self.start_column,
                    });
                }
                Some(c) => {
                    value.push(c);
                    self.advance();
                }
            }
        }

        self.advance(); // Closing quote

        Ok(self.make_token(TokenKind::String(value)))
    }

    fn scan_integer(&mut self) -> Result<Token> {
        // Leading zeros are accepted: `007` is 7
        while matches!(self.peek(), Some(c) if c.is_ascii_digit()) {
            self.advance();
        }

        let text = self.lexeme();
        let value: i64 = text.parse().map_err(|_| Error::InvalidInteger {
            literal: text.clone(),
            line: self.start_line,
            col: self.start_column,
        })?;

        Ok(self.make_token(TokenKind::Integer(value)))
    }

    fn scan_identifier_or_keyword(&mut self) -> Token {
        while matches!(self.peek(), Some(c) if c.is_alphabetic()) {
            self.advance();
        }

        let text = self.lexeme();
        let kind = TokenKind::keyword(&text).unwrap_or(TokenKind::Identifier(text));
        self.make_token(kind)
    }

    fn peek(&self) -> Option<char> {
        self.source.get(self.current).copied()
    }

    fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.current += 1;
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(c)
    }

    fn lexeme(&self) -> String {
        self.source[self.start..self.current].iter().collect()
    }

    fn make_token(&self, kind: TokenKind) -> Token {
        Token::new(kind, self.lexeme(), self.start_line, self.start_column)
    }
}

/// Yields every token before EOF, stopping after the first error
impl Iterator for Lexer {
    type Item = Result<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        match self.next_token() {
            Ok(token) if token.kind == TokenKind::Eof => {
                self.finished = true;
                None
            }
            Ok(token) => Some(Ok(token)),
            Err(e) => {
                self.finished = true;
                Some(Err(e))
            }
        }
    }
}

/// Tokenizes a whole source string, ending with EOF
pub fn tokenize(source: &str) -> Result<Vec<Token>> {
    Lexer::new(source).scan_tokens()
}
