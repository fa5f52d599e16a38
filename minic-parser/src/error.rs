use crate::lexer::{Token, TokenKind};
use minic_source::Span;
use std::fmt;
use thiserror::Error;

/// What the parser was looking for when it failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expected {
    /// Any token of this kind.
    Kind(TokenKind),
    /// A token of this kind with this exact text (e.g. the `=` assignment operator).
    Lexeme(TokenKind, &'static str),
    /// A type keyword such as `int`.
    TypeName,
    Expression,
    Statement,
    EndOfInput,
}

impl fmt::Display for Expected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expected::Kind(kind) => write!(f, "{}", kind),
            Expected::Lexeme(_, lexeme) => write!(f, "`{}`", lexeme),
            Expected::TypeName => f.write_str("type name"),
            Expected::Expression => f.write_str("expression"),
            Expected::Statement => f.write_str("statement"),
            Expected::EndOfInput => f.write_str("end of input"),
        }
    }
}

/// A fatal parse failure. The first failure aborts the parse.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    #[error("expected {expected}, found {found} `{lexeme}`")]
    UnexpectedToken {
        expected: Expected,
        found: TokenKind,
        lexeme: String,
        span: Span,
    },
    #[error("expected {expected}, found end of input")]
    UnexpectedEof { expected: Expected },
    #[error("integer literal `{lexeme}` is out of range")]
    InvalidLiteral { lexeme: String, span: Span },
}

impl ParseError {
    pub(crate) fn unexpected(expected: Expected, found: Option<&Token<'_>>) -> Self {
        match found {
            Some(token) => ParseError::UnexpectedToken {
                expected,
                found: token.kind(),
                lexeme: token.lexeme().to_string(),
                span: token.span(),
            },
            None => ParseError::UnexpectedEof { expected },
        }
    }

    /// The source location of the failure. `None` means the end of the input.
    pub fn span(&self) -> Option<Span> {
        match self {
            ParseError::UnexpectedToken { span, .. } | ParseError::InvalidLiteral { span, .. } => {
                Some(span.clone())
            }
            ParseError::UnexpectedEof { .. } => None,
        }
    }

    /// What was expected, if the failure was a missing token.
    pub fn expected(&self) -> Option<Expected> {
        match self {
            ParseError::UnexpectedToken { expected, .. }
            | ParseError::UnexpectedEof { expected } => Some(*expected),
            ParseError::InvalidLiteral { .. } => None,
        }
    }
}

pub type ParseResult<T> = Result<T, ParseError>;
