//! Visitor pattern for AST nodes.
//!
//! Traversal only hands out shared references: a visitor can inspect the tree but never change it.

use crate::ast::{Expr, Function, Program, Stmt};

pub trait Visitor<'ast>: Sized {
    fn visit_program(&mut self, program: &'ast Program) {
        walk_program(self, program);
    }
    fn visit_function(&mut self, function: &'ast Function) {
        walk_function(self, function);
    }
    fn visit_stmt(&mut self, stmt: &'ast Stmt) {
        walk_stmt(self, stmt);
    }
    fn visit_expr(&mut self, expr: &'ast Expr) {
        walk_expr(self, expr);
    }
}

/// Iteratively visit all statements in a `Vec<Stmt>`.
macro_rules! visit_stmt_list {
    ($visitor: expr, $body: expr) => {
        for stmt in $body {
            $visitor.visit_stmt(stmt);
        }
    };
}

pub fn walk_program<'ast>(visitor: &mut impl Visitor<'ast>, program: &'ast Program) {
    for function in &program.functions {
        visitor.visit_function(function);
    }
}

pub fn walk_function<'ast>(visitor: &mut impl Visitor<'ast>, function: &'ast Function) {
    visit_stmt_list!(visitor, &function.statements);
}

pub fn walk_stmt<'ast>(visitor: &mut impl Visitor<'ast>, stmt: &'ast Stmt) {
    match stmt {
        Stmt::Assignment {
            op: _,
            target: _,
            value,
        } => visitor.visit_expr(value),
        Stmt::Declaration {
            type_name: _,
            name: _,
            initializer,
        } => {
            if let Some(initializer) = initializer {
                visitor.visit_expr(initializer);
            }
        }
        Stmt::Return(expr) => visitor.visit_expr(expr),
        Stmt::If {
            condition,
            body,
            else_body,
        } => {
            visitor.visit_expr(condition);
            visit_stmt_list!(visitor, body);
            if let Some(else_body) = else_body {
                visit_stmt_list!(visitor, else_body);
            }
        }
    }
}

pub fn walk_expr<'ast>(visitor: &mut impl Visitor<'ast>, expr: &'ast Expr) {
    match expr {
        Expr::Constant(_) => {}
        Expr::Variable(_) => {}
        Expr::Unary { op: _, operand } => visitor.visit_expr(operand),
        Expr::Binary { op: _, lhs, rhs } => {
            visitor.visit_expr(lhs);
            visitor.visit_expr(rhs);
        }
    }
}
