use crate::ast::{Expr, Function, Program, Stmt};
use crate::error::{Expected, ParseError, ParseResult};
use crate::lexer::{Token, TokenKind};
use tracing::debug;

mod expr;
mod stmt;

/// Recursive descent parser over an already lexed token sequence.
///
/// The parser never backtracks: every rule is decided by looking at the next token only.
pub struct Parser<'t, 'a> {
    tokens: &'t [Token<'a>],
    /// Index of the next unconsumed token.
    pos: usize,
}

impl<'t, 'a> Parser<'t, 'a> {
    pub fn new(tokens: &'t [Token<'a>]) -> Self {
        Self { tokens, pos: 0 }
    }
}

impl<'t, 'a> Parser<'t, 'a> {
    /// Parses functions until the tokens are exhausted.
    pub fn parse_program(&mut self) -> ParseResult<Program> {
        let mut functions = Vec::new();
        while !self.is_at_end() {
            functions.push(self.parse_function()?);
        }
        debug!(functions = functions.len(), "parsed program");
        Ok(Program { functions })
    }

    /// Fails unless every token has been consumed.
    pub fn finish(&self) -> ParseResult<()> {
        if self.is_at_end() {
            Ok(())
        } else {
            Err(self.unexpected(Expected::EndOfInput))
        }
    }
}

/// Parse utilities
impl<'t, 'a> Parser<'t, 'a> {
    /// Returns the next token without consuming it.
    pub fn peek(&self) -> Option<&'t Token<'a>> {
        self.tokens.get(self.pos)
    }

    /// Consumes and returns the next token.
    pub fn advance(&mut self) -> Option<&'t Token<'a>> {
        let token = self.tokens.get(self.pos)?;
        self.pos += 1;
        Some(token)
    }

    pub fn is_at_end(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    fn check(&self, kind: TokenKind) -> bool {
        self.peek().map_or(false, |token| token.kind() == kind)
    }

    /// Eats the next token if it is of the given `kind`.
    pub fn eat(&mut self, kind: TokenKind) -> Option<&'t Token<'a>> {
        if self.check(kind) {
            self.advance()
        } else {
            None
        }
    }

    /// Eats the next token if it is `kind` with exactly the text `lexeme`.
    fn eat_lexeme(&mut self, kind: TokenKind, lexeme: &str) -> bool {
        match self.peek() {
            Some(token) if token.is(kind, lexeme) => {
                self.pos += 1;
                true
            }
            _ => false,
        }
    }

    pub fn expect(&mut self, kind: TokenKind) -> ParseResult<&'t Token<'a>> {
        match self.eat(kind) {
            Some(token) => Ok(token),
            None => Err(self.unexpected(Expected::Kind(kind))),
        }
    }

    fn expect_lexeme(&mut self, kind: TokenKind, lexeme: &'static str) -> ParseResult<()> {
        if self.eat_lexeme(kind, lexeme) {
            Ok(())
        } else {
            Err(self.unexpected(Expected::Lexeme(kind, lexeme)))
        }
    }

    /// Expects a type keyword (e.g. `int`) and returns its text.
    fn expect_type_name(&mut self) -> ParseResult<String> {
        match self.peek() {
            Some(token) if token.is_type_name() => {
                self.pos += 1;
                Ok(token.lexeme().to_string())
            }
            _ => Err(self.unexpected(Expected::TypeName)),
        }
    }

    fn expect_identifier(&mut self) -> ParseResult<String> {
        self.expect(TokenKind::Identifier)
            .map(|token| token.lexeme().to_string())
    }

    /// Creates an error describing the next token (or the end of input).
    fn unexpected(&self, expected: Expected) -> ParseError {
        ParseError::unexpected(expected, self.peek())
    }
}

/// Parses a whole program.
pub fn parse(tokens: &[Token<'_>]) -> ParseResult<Program> {
    Parser::new(tokens).parse_program()
}

/// Parses `tokens` as exactly one expression.
pub fn parse_expression(tokens: &[Token<'_>]) -> ParseResult<Expr> {
    let mut parser = Parser::new(tokens);
    let expr = parser.parse_expr()?;
    parser.finish()?;
    Ok(expr)
}

/// Parses `tokens` as exactly one statement.
pub fn parse_statement(tokens: &[Token<'_>]) -> ParseResult<Stmt> {
    let mut parser = Parser::new(tokens);
    let stmt = parser.parse_stmt()?;
    parser.finish()?;
    Ok(stmt)
}

/// Parses `tokens` as exactly one function.
pub fn parse_function(tokens: &[Token<'_>]) -> ParseResult<Function> {
    let mut parser = Parser::new(tokens);
    let function = parser.parse_function()?;
    parser.finish()?;
    Ok(function)
}
