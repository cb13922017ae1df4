//! Lox IR - tokens and syntax trees.
//!
//! This crate holds the data shared by every stage of the pipeline:
//! - [`Token`] and [`TokenKind`] produced by the lexer
//! - [`Literal`] payloads, resolved at scan time
//! - [`Expr`] and [`Stmt`], the closed AST node sets built by the parser
//! - [`printer`], textual renderings of the AST for debugging
//!
//! Nothing here has behavior beyond construction and display. Nodes are
//! immutable once built; function declarations are shared through `Rc` so
//! that runtime closures can hold on to them without copying bodies.

pub mod ast;
pub mod printer;
mod token;

pub use ast::{Expr, FunctionDecl, Stmt};
pub use token::{format_number, Literal, Token, TokenKind};
