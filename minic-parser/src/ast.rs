//! Syntax tree produced by the parser.
//!
//! Every node renders as an s-expression through [`fmt::Display`], e.g.
//! `(BinaryOp + (Variable a) (Constant 2))`.

use crate::lexer::{Token, TokenKind};
use std::fmt;

/// A literal value.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    Int(i64),
    Float(f64),
    /// The text between the quotes.
    Str(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOp {
    Not,
    Plus,
    Minus,
}

impl UnaryOp {
    pub fn from_token(token: &Token<'_>) -> Option<Self> {
        match (token.kind(), token.lexeme()) {
            (TokenKind::LogicalOperator, "!") => Some(UnaryOp::Not),
            (TokenKind::ArithmeticOperator, "+") => Some(UnaryOp::Plus),
            (TokenKind::ArithmeticOperator, "-") => Some(UnaryOp::Minus),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            UnaryOp::Not => "!",
            UnaryOp::Plus => "+",
            UnaryOp::Minus => "-",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    // logical
    Or,
    And,
    // equality
    Eq,
    Ne,
    // comparison
    Lt,
    Gt,
    Le,
    Ge,
    // addition
    Add,
    Sub,
    // multiplication
    Mul,
    Div,
    Rem,
}

impl BinaryOp {
    pub fn from_token(token: &Token<'_>) -> Option<Self> {
        let op = match (token.kind(), token.lexeme()) {
            (TokenKind::LogicalOperator, "||") => BinaryOp::Or,
            (TokenKind::LogicalOperator, "&&") => BinaryOp::And,
            (TokenKind::RelationalOperator, "==") => BinaryOp::Eq,
            (TokenKind::RelationalOperator, "!=") => BinaryOp::Ne,
            (TokenKind::RelationalOperator, "<") => BinaryOp::Lt,
            (TokenKind::RelationalOperator, ">") => BinaryOp::Gt,
            (TokenKind::RelationalOperator, "<=") => BinaryOp::Le,
            (TokenKind::RelationalOperator, ">=") => BinaryOp::Ge,
            (TokenKind::ArithmeticOperator, "+") => BinaryOp::Add,
            (TokenKind::ArithmeticOperator, "-") => BinaryOp::Sub,
            (TokenKind::ArithmeticOperator, "*") => BinaryOp::Mul,
            (TokenKind::ArithmeticOperator, "/") => BinaryOp::Div,
            (TokenKind::ArithmeticOperator, "%") => BinaryOp::Rem,
            _ => return None,
        };
        Some(op)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            BinaryOp::Or => "||",
            BinaryOp::And => "&&",
            BinaryOp::Eq => "==",
            BinaryOp::Ne => "!=",
            BinaryOp::Lt => "<",
            BinaryOp::Gt => ">",
            BinaryOp::Le => "<=",
            BinaryOp::Ge => ">=",
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
            BinaryOp::Rem => "%",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssignOp {
    Assign,
    AddAssign,
    SubAssign,
    MulAssign,
    DivAssign,
    RemAssign,
    AndAssign,
    XorAssign,
    OrAssign,
    ShlAssign,
    ShrAssign,
}

impl AssignOp {
    pub fn from_token(token: &Token<'_>) -> Option<Self> {
        if token.kind() != TokenKind::AssignmentOperator {
            return None;
        }
        let op = match token.lexeme() {
            "=" => AssignOp::Assign,
            "+=" => AssignOp::AddAssign,
            "-=" => AssignOp::SubAssign,
            "*=" => AssignOp::MulAssign,
            "/=" => AssignOp::DivAssign,
            "%=" => AssignOp::RemAssign,
            "&=" => AssignOp::AndAssign,
            "^=" => AssignOp::XorAssign,
            "|=" => AssignOp::OrAssign,
            "<<=" => AssignOp::ShlAssign,
            ">>=" => AssignOp::ShrAssign,
            _ => return None,
        };
        Some(op)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            AssignOp::Assign => "=",
            AssignOp::AddAssign => "+=",
            AssignOp::SubAssign => "-=",
            AssignOp::MulAssign => "*=",
            AssignOp::DivAssign => "/=",
            AssignOp::RemAssign => "%=",
            AssignOp::AndAssign => "&=",
            AssignOp::XorAssign => "^=",
            AssignOp::OrAssign => "|=",
            AssignOp::ShlAssign => "<<=",
            AssignOp::ShrAssign => ">>=",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A literal (e.g. `1`, `2.5`, `"hi"`).
    Constant(Literal),
    /// An identifier (e.g. `foo`).
    Variable(String),
    /// A prefix expression (e.g. `-a`).
    Unary { op: UnaryOp, operand: Box<Expr> },
    /// A binary expression (e.g. `1+1`).
    Binary {
        op: BinaryOp,
        lhs: Box<Expr>,
        rhs: Box<Expr>,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    /// `target op value;`
    Assignment {
        op: AssignOp,
        target: String,
        value: Expr,
    },
    /// `type_name name = initializer;` or `type_name name;`
    Declaration {
        type_name: String,
        name: String,
        initializer: Option<Expr>,
    },
    Return(Expr),
    If {
        condition: Expr,
        body: Vec<Stmt>,
        else_body: Option<Vec<Stmt>>,
    },
}

/// A function parameter declaration.
#[derive(Debug, Clone, PartialEq)]
pub struct Argument {
    pub type_name: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Function {
    pub return_type: String,
    pub name: String,
    pub arguments: Vec<Argument>,
    pub statements: Vec<Stmt>,
}

/// The parse root.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    pub functions: Vec<Function>,
}

/// Writes `[a, b, c]`.
fn write_list<T: fmt::Display>(f: &mut fmt::Formatter<'_>, items: &[T]) -> fmt::Result {
    f.write_str("[")?;
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{}", item)?;
    }
    f.write_str("]")
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::Int(val) => write!(f, "{}", val),
            Literal::Float(val) => write!(f, "{:?}", val),
            Literal::Str(val) => write!(f, "\"{}\"", val),
        }
    }
}

impl fmt::Display for UnaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for AssignOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Constant(val) => write!(f, "(Constant {})", val),
            Expr::Variable(ident) => write!(f, "(Variable {})", ident),
            Expr::Unary { op, operand } => write!(f, "(UnaryOp {} {})", op, operand),
            Expr::Binary { op, lhs, rhs } => write!(f, "(BinaryOp {} {} {})", op, lhs, rhs),
        }
    }
}

impl fmt::Display for Stmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stmt::Assignment { op, target, value } => {
                write!(f, "(AssignmentStatement {} {} {})", op, target, value)
            }
            Stmt::Declaration {
                type_name,
                name,
                initializer,
            } => {
                write!(f, "(DeclarationStatement {} {}", type_name, name)?;
                if let Some(initializer) = initializer {
                    write!(f, " {}", initializer)?;
                }
                f.write_str(")")
            }
            Stmt::Return(expr) => write!(f, "(ReturnStatement {})", expr),
            Stmt::If {
                condition,
                body,
                else_body,
            } => {
                write!(f, "(IfStatement {} ", condition)?;
                write_list(f, body)?;
                if let Some(else_body) = else_body {
                    f.write_str(" ")?;
                    write_list(f, else_body)?;
                }
                f.write_str(")")
            }
        }
    }
}

impl fmt::Display for Argument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(Argument {} {})", self.type_name, self.name)
    }
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(Function {} {} (", self.return_type, self.name)?;
        write_list(f, &self.arguments)?;
        f.write_str(") ")?;
        write_list(f, &self.statements)?;
        f.write_str(")")
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(Program ")?;
        write_list(f, &self.functions)?;
        f.write_str(")")
    }
}
