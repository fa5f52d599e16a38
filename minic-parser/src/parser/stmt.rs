use super::*;
use crate::ast::{Argument, AssignOp};

impl<'t, 'a> Parser<'t, 'a> {
    /// Parses a function declaration: `type name(type arg type arg ...) { statements }`.
    ///
    /// Arguments are not separated by commas.
    pub fn parse_function(&mut self) -> ParseResult<Function> {
        let return_type = self.expect_type_name()?;
        let name = self.expect_identifier()?;

        self.expect(TokenKind::OpenParen)?;
        let mut arguments = Vec::new();
        while self.eat(TokenKind::CloseParen).is_none() {
            let type_name = self.expect_type_name()?;
            let name = self.expect_identifier()?;
            arguments.push(Argument { type_name, name });
        }

        let statements = self.parse_block()?;

        debug!(
            function = %name,
            arguments = arguments.len(),
            statements = statements.len(),
            "parsed function"
        );
        Ok(Function {
            return_type,
            name,
            arguments,
            statements,
        })
    }

    /// Parses a statement.
    pub fn parse_stmt(&mut self) -> ParseResult<Stmt> {
        let token = match self.peek() {
            Some(token) => token,
            None => return Err(self.unexpected(Expected::Statement)),
        };

        match token.kind() {
            TokenKind::Keyword if token.lexeme() == "return" => self.parse_return_stmt(),
            TokenKind::Keyword if token.lexeme() == "if" => self.parse_if_stmt(),
            TokenKind::Keyword if token.is_type_name() => self.parse_declaration_stmt(),
            TokenKind::Identifier => self.parse_assignment_stmt(),
            _ => Err(self.unexpected(Expected::Statement)),
        }
    }

    /// Parses `{ statements }`.
    pub fn parse_block(&mut self) -> ParseResult<Vec<Stmt>> {
        self.expect(TokenKind::OpenBrace)?;

        let mut body = Vec::new();
        while self.eat(TokenKind::CloseBrace).is_none() {
            if self.is_at_end() {
                return Err(self.unexpected(Expected::Kind(TokenKind::CloseBrace)));
            }
            body.push(self.parse_stmt()?);
        }

        Ok(body)
    }

    fn parse_return_stmt(&mut self) -> ParseResult<Stmt> {
        self.expect_lexeme(TokenKind::Keyword, "return")?;
        let expr = self.parse_expr()?;
        self.expect(TokenKind::Semicolon)?;
        Ok(Stmt::Return(expr))
    }

    fn parse_assignment_stmt(&mut self) -> ParseResult<Stmt> {
        let target = self.expect_identifier()?;
        let op = match self.peek().and_then(AssignOp::from_token) {
            Some(op) => {
                self.pos += 1;
                op
            }
            None => return Err(self.unexpected(Expected::Kind(TokenKind::AssignmentOperator))),
        };
        let value = self.parse_expr()?;
        self.expect(TokenKind::Semicolon)?;
        Ok(Stmt::Assignment { op, target, value })
    }

    /// Parses `type name;` or `type name = initializer;`.
    fn parse_declaration_stmt(&mut self) -> ParseResult<Stmt> {
        let type_name = self.expect_type_name()?;
        let name = self.expect_identifier()?;
        let initializer = if self.eat(TokenKind::Semicolon).is_some() {
            None
        } else {
            self.expect_lexeme(TokenKind::AssignmentOperator, "=")?;
            let initializer = self.parse_expr()?;
            self.expect(TokenKind::Semicolon)?;
            Some(initializer)
        };
        Ok(Stmt::Declaration {
            type_name,
            name,
            initializer,
        })
    }

    /// Parses `if (condition) { body }` with an optional `else { body }` or `else if ...`.
    fn parse_if_stmt(&mut self) -> ParseResult<Stmt> {
        self.expect_lexeme(TokenKind::Keyword, "if")?;
        self.expect(TokenKind::OpenParen)?;
        let condition = self.parse_expr()?;
        self.expect(TokenKind::CloseParen)?;
        let body = self.parse_block()?;

        let else_body = if self.eat_lexeme(TokenKind::Keyword, "else") {
            if self.peek().map_or(false, |token| token.is_keyword("if")) {
                Some(vec![self.parse_if_stmt()?])
            } else {
                Some(self.parse_block()?)
            }
        } else {
            None
        };

        Ok(Stmt::If {
            condition,
            body,
            else_body,
        })
    }
}
