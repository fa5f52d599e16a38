use super::*;
use crate::ast::{BinaryOp, Literal, UnaryOp};
use crate::lexer::Number;

impl<'t, 'a> Parser<'t, 'a> {
    /* Expressions */
    /// Parses any expression.
    ///
    /// Each binding level is its own method, from the loosest (`||`) down to [`Self::parse_primary_expr`].
    /// Binary levels fold to the left, so `a - b - c` is `(a - b) - c`.
    pub fn parse_expr(&mut self) -> ParseResult<Expr> {
        self.parse_logical_or_expr()
    }

    fn parse_logical_or_expr(&mut self) -> ParseResult<Expr> {
        self.parse_binary_level(&[BinaryOp::Or], Self::parse_logical_and_expr)
    }

    fn parse_logical_and_expr(&mut self) -> ParseResult<Expr> {
        self.parse_binary_level(&[BinaryOp::And], Self::parse_equality_expr)
    }

    fn parse_equality_expr(&mut self) -> ParseResult<Expr> {
        self.parse_binary_level(&[BinaryOp::Eq, BinaryOp::Ne], Self::parse_comparison_expr)
    }

    fn parse_comparison_expr(&mut self) -> ParseResult<Expr> {
        self.parse_binary_level(
            &[BinaryOp::Lt, BinaryOp::Gt, BinaryOp::Le, BinaryOp::Ge],
            Self::parse_addition_expr,
        )
    }

    fn parse_addition_expr(&mut self) -> ParseResult<Expr> {
        self.parse_binary_level(&[BinaryOp::Add, BinaryOp::Sub], Self::parse_multiplication_expr)
    }

    fn parse_multiplication_expr(&mut self) -> ParseResult<Expr> {
        self.parse_binary_level(
            &[BinaryOp::Mul, BinaryOp::Div, BinaryOp::Rem],
            Self::parse_unary_expr,
        )
    }

    /// Parses `operand (op operand)*` for the operators in `ops`, folding to the left.
    fn parse_binary_level(
        &mut self,
        ops: &[BinaryOp],
        operand: fn(&mut Self) -> ParseResult<Expr>,
    ) -> ParseResult<Expr> {
        let mut lhs = operand(self)?;

        while let Some(op) = self.eat_binary_op(ops) {
            let rhs = operand(self)?;
            lhs = Expr::Binary {
                op,
                lhs: Box::new(lhs),
                rhs: Box::new(rhs),
            };
        }

        Ok(lhs)
    }

    fn eat_binary_op(&mut self, ops: &[BinaryOp]) -> Option<BinaryOp> {
        let op = BinaryOp::from_token(self.peek()?)?;
        if ops.contains(&op) {
            self.pos += 1;
            Some(op)
        } else {
            None
        }
    }

    /// Parses a prefix expression (`!a`, `-a`, `+a`) or falls through to a primary expression.
    fn parse_unary_expr(&mut self) -> ParseResult<Expr> {
        match self.peek().and_then(UnaryOp::from_token) {
            Some(op) => {
                self.pos += 1;
                Ok(Expr::Unary {
                    op,
                    operand: Box::new(self.parse_unary_expr()?),
                })
            }
            None => self.parse_primary_expr(),
        }
    }

    /// Parses a primary (atom) expression.
    fn parse_primary_expr(&mut self) -> ParseResult<Expr> {
        let token = match self.peek() {
            Some(token) => token,
            None => return Err(self.unexpected(Expected::Expression)),
        };

        match token.kind() {
            TokenKind::Integer | TokenKind::Float | TokenKind::String => self.parse_literal_expr(),
            TokenKind::Identifier => {
                self.pos += 1;
                Ok(Expr::Variable(token.lexeme().to_string()))
            }
            TokenKind::OpenParen => {
                self.pos += 1;
                let expr = self.parse_expr()?;
                self.expect(TokenKind::CloseParen)?;
                Ok(expr)
            }
            _ => Err(self.unexpected(Expected::Expression)),
        }
    }

    /* Expressions.Literals */
    /// Parses a literal expression.
    /// A literal can be an integer, a float or a string.
    fn parse_literal_expr(&mut self) -> ParseResult<Expr> {
        let token = match self.peek() {
            Some(token) => token,
            None => return Err(self.unexpected(Expected::Expression)),
        };
        let literal = match (token.kind(), token.value()) {
            (TokenKind::Integer, Some(Number::Int(val))) => Literal::Int(val),
            (TokenKind::Float, Some(Number::Float(val))) => Literal::Float(val),
            (TokenKind::String, _) => {
                let lexeme = token.lexeme();
                Literal::Str(lexeme[1..lexeme.len() - 1].to_string())
            }
            (TokenKind::Integer, _) | (TokenKind::Float, _) => {
                return Err(ParseError::InvalidLiteral {
                    lexeme: token.lexeme().to_string(),
                    span: token.span(),
                })
            }
            _ => return Err(self.unexpected(Expected::Expression)),
        };
        self.pos += 1; // eat parsed token
        Ok(Expr::Constant(literal))
    }
}
