//! AST node types.
//!
//! Two closed sum types, [`Expr`] and [`Stmt`]. Consumers match on them
//! exhaustively, so adding a variant is a compile error everywhere it is
//! not yet handled.

use std::rc::Rc;

use crate::{Literal, Token};

/// Expression nodes.
#[derive(Clone, Debug, PartialEq)]
pub enum Expr {
    /// `left op right`, including the comma operator.
    Binary {
        left: Box<Expr>,
        operator: Token,
        right: Box<Expr>,
    },
    /// `op right`
    Unary { operator: Token, right: Box<Expr> },
    /// `( expr )`
    Grouping(Box<Expr>),
    Literal(Literal),
    Variable(Token),
    /// `name = value`
    Assign { name: Token, value: Box<Expr> },
    /// `left and right` / `left or right`
    Logical {
        left: Box<Expr>,
        operator: Token,
        right: Box<Expr>,
    },
    /// `callee(arguments)`; `paren` is the closing parenthesis.
    Call {
        callee: Box<Expr>,
        paren: Token,
        arguments: Vec<Expr>,
    },
}

impl Expr {
    pub fn binary(left: Expr, operator: Token, right: Expr) -> Self {
        Expr::Binary {
            left: Box::new(left),
            operator,
            right: Box::new(right),
        }
    }

    pub fn logical(left: Expr, operator: Token, right: Expr) -> Self {
        Expr::Logical {
            left: Box::new(left),
            operator,
            right: Box::new(right),
        }
    }

    pub fn unary(operator: Token, right: Expr) -> Self {
        Expr::Unary {
            operator,
            right: Box::new(right),
        }
    }

    pub fn grouping(inner: Expr) -> Self {
        Expr::Grouping(Box::new(inner))
    }

    pub fn assign(name: Token, value: Expr) -> Self {
        Expr::Assign {
            name,
            value: Box::new(value),
        }
    }
}

/// A function declaration.
///
/// Held behind `Rc` in [`Stmt::Function`]; every closure created from the
/// declaration shares this one node.
#[derive(Debug, PartialEq)]
pub struct FunctionDecl {
    pub name: Token,
    pub params: Vec<Token>,
    pub body: Vec<Stmt>,
}

/// Statement nodes.
#[derive(Clone, Debug, PartialEq)]
pub enum Stmt {
    Expression(Expr),
    Print(Expr),
    Var {
        name: Token,
        initializer: Option<Expr>,
    },
    Block(Vec<Stmt>),
    If {
        condition: Expr,
        then_branch: Box<Stmt>,
        else_branch: Option<Box<Stmt>>,
    },
    While {
        condition: Expr,
        body: Box<Stmt>,
    },
    Function(Rc<FunctionDecl>),
    Return {
        keyword: Token,
        value: Option<Expr>,
    },
}
