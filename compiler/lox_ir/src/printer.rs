//! Textual renderings of the AST.
//!
//! [`AstPrinter`] produces a parenthesized prefix form, one list per node:
//! `-123 * (45.67)` prints as `(* (- 123) (group 45.67))`.
//!
//! [`RpnPrinter`] produces reverse Polish notation for expressions:
//! `(1 + 2) * (4 - 3)` prints as `1 2 + 4 3 - *`. Grouping disappears since
//! RPN needs no parentheses.

use crate::{Expr, Literal, Stmt};

/// Parenthesized prefix printer.
#[derive(Clone, Copy, Debug, Default)]
pub struct AstPrinter;

impl AstPrinter {
    pub fn expr(self, expr: &Expr) -> String {
        match expr {
            Expr::Binary {
                left,
                operator,
                right,
            }
            | Expr::Logical {
                left,
                operator,
                right,
            } => self.parenthesize(&operator.lexeme, &[left, right]),
            Expr::Unary { operator, right } => self.parenthesize(&operator.lexeme, &[right]),
            Expr::Grouping(inner) => self.parenthesize("group", &[inner]),
            Expr::Literal(literal) => literal_text(literal),
            Expr::Variable(name) => name.lexeme.clone(),
            Expr::Assign { name, value } => format!("(= {} {})", name.lexeme, self.expr(value)),
            Expr::Call {
                callee, arguments, ..
            } => {
                let mut out = format!("(call {}", self.expr(callee));
                for argument in arguments {
                    out.push(' ');
                    out.push_str(&self.expr(argument));
                }
                out.push(')');
                out
            }
        }
    }

    pub fn stmt(self, stmt: &Stmt) -> String {
        match stmt {
            Stmt::Expression(expr) => format!("(; {})", self.expr(expr)),
            Stmt::Print(expr) => format!("(print {})", self.expr(expr)),
            Stmt::Var { name, initializer } => match initializer {
                Some(init) => format!("(var {} {})", name.lexeme, self.expr(init)),
                None => format!("(var {})", name.lexeme),
            },
            Stmt::Block(statements) => self.list("block", statements),
            Stmt::If {
                condition,
                then_branch,
                else_branch,
            } => match else_branch {
                Some(otherwise) => format!(
                    "(if {} {} {})",
                    self.expr(condition),
                    self.stmt(then_branch),
                    self.stmt(otherwise)
                ),
                None => format!("(if {} {})", self.expr(condition), self.stmt(then_branch)),
            },
            Stmt::While { condition, body } => {
                format!("(while {} {})", self.expr(condition), self.stmt(body))
            }
            Stmt::Function(decl) => {
                let params: Vec<&str> = decl.params.iter().map(|p| p.lexeme.as_str()).collect();
                let head = format!("fun {} ({})", decl.name.lexeme, params.join(" "));
                self.list(&head, &decl.body)
            }
            Stmt::Return { value, .. } => match value {
                Some(value) => format!("(return {})", self.expr(value)),
                None => "(return)".to_owned(),
            },
        }
    }

    fn parenthesize(self, name: &str, exprs: &[&Expr]) -> String {
        let mut out = format!("({name}");
        for expr in exprs {
            out.push(' ');
            out.push_str(&self.expr(expr));
        }
        out.push(')');
        out
    }

    fn list(self, head: &str, statements: &[Stmt]) -> String {
        let mut out = format!("({head}");
        for stmt in statements {
            out.push(' ');
            out.push_str(&self.stmt(stmt));
        }
        out.push(')');
        out
    }
}

/// Reverse Polish notation printer.
#[derive(Clone, Copy, Debug, Default)]
pub struct RpnPrinter;

impl RpnPrinter {
    pub fn expr(self, expr: &Expr) -> String {
        match expr {
            Expr::Binary {
                left,
                operator,
                right,
            }
            | Expr::Logical {
                left,
                operator,
                right,
            } => format!("{} {} {}", self.expr(left), self.expr(right), operator.lexeme),
            Expr::Unary { operator, right } => format!("{} {}", self.expr(right), operator.lexeme),
            Expr::Grouping(inner) => self.expr(inner),
            Expr::Literal(literal) => literal_text(literal),
            Expr::Variable(name) => name.lexeme.clone(),
            Expr::Assign { name, value } => format!("{} {} =", self.expr(value), name.lexeme),
            Expr::Call {
                callee, arguments, ..
            } => {
                let mut out = self.expr(callee);
                for argument in arguments {
                    out.push(' ');
                    out.push_str(&self.expr(argument));
                }
                out.push_str(" call");
                out
            }
        }
    }

    /// Expression statements render as RPN; everything else falls back to
    /// the prefix form.
    pub fn stmt(self, stmt: &Stmt) -> String {
        match stmt {
            Stmt::Expression(expr) => self.expr(expr),
            Stmt::Print(expr) => format!("{} print", self.expr(expr)),
            other => AstPrinter.stmt(other),
        }
    }
}

fn literal_text(literal: &Literal) -> String {
    match literal {
        Literal::Str(s) => format!("{s:?}"),
        other => other.to_string(),
    }
}
