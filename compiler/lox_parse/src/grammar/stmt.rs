//! Declarations and statements.

use std::rc::Rc;

use lox_ir::{Expr, FunctionDecl, Literal, Stmt, TokenKind};
use lox_stack::ensure_sufficient_stack;
use tracing::debug;

use crate::{PResult, Parser};

impl Parser {
    /// Parse one declaration, recovering from any syntax error inside it.
    ///
    /// Returns `None` when the declaration was malformed; the error has been
    /// recorded and the cursor sits at the next statement boundary.
    pub(crate) fn declaration(&mut self) -> Option<Stmt> {
        let result = ensure_sufficient_stack(|| {
            if self.cursor.eat(TokenKind::Fun).is_some() {
                self.function()
            } else if self.cursor.eat(TokenKind::Var).is_some() {
                self.var_declaration()
            } else {
                self.statement()
            }
        });

        match result {
            Ok(stmt) => Some(stmt),
            Err(error) => {
                debug!(line = error.line(), message = %error, "parse error");
                self.errors.push(error);
                self.synchronize();
                None
            }
        }
    }

    /// `fun` has been consumed.
    fn function(&mut self) -> PResult<Stmt> {
        let name = self.consume(TokenKind::Identifier, "Expect function name.")?;
        self.consume(TokenKind::LeftParen, "Expect '(' after function name.")?;

        let mut params = Vec::new();
        if !self.cursor.check(TokenKind::RightParen) {
            loop {
                params.push(self.consume(TokenKind::Identifier, "Expect parameter name.")?);
                if self.cursor.eat(TokenKind::Comma).is_none() {
                    break;
                }
            }
        }
        self.consume(TokenKind::RightParen, "Expect ')' after parameters.")?;
        self.consume(TokenKind::LeftBrace, "Expect '{' before function body.")?;
        let body = self.block()?;

        Ok(Stmt::Function(Rc::new(FunctionDecl { name, params, body })))
    }

    /// `var` has been consumed.
    fn var_declaration(&mut self) -> PResult<Stmt> {
        let name = self.consume(TokenKind::Identifier, "Expect variable name.")?;
        let initializer = if self.cursor.eat(TokenKind::Equal).is_some() {
            Some(self.expression()?)
        } else {
            None
        };
        self.consume(TokenKind::Semicolon, "Expect ';' after variable declaration.")?;
        Ok(Stmt::Var { name, initializer })
    }

    fn statement(&mut self) -> PResult<Stmt> {
        match self.cursor.current().kind {
            TokenKind::For => {
                self.cursor.advance();
                self.for_statement()
            }
            TokenKind::If => {
                self.cursor.advance();
                self.if_statement()
            }
            TokenKind::While => {
                self.cursor.advance();
                self.while_statement()
            }
            TokenKind::Print => {
                self.cursor.advance();
                self.print_statement()
            }
            TokenKind::Return => {
                let keyword = self.cursor.advance();
                let value = if self.cursor.check(TokenKind::Semicolon) {
                    None
                } else {
                    Some(self.expression()?)
                };
                self.consume(TokenKind::Semicolon, "Expect ';' after return value.")?;
                Ok(Stmt::Return { keyword, value })
            }
            TokenKind::LeftBrace => {
                self.cursor.advance();
                Ok(Stmt::Block(self.block()?))
            }
            _ => self.expression_statement(),
        }
    }

    /// Desugars into `{ init; while (cond) { body; increment; } }`, leaving
    /// out the pieces that were omitted. A missing condition is `true`.
    fn for_statement(&mut self) -> PResult<Stmt> {
        self.consume(TokenKind::LeftParen, "Expect '(' after 'for'.")?;

        let initializer = if self.cursor.eat(TokenKind::Semicolon).is_some() {
            None
        } else if self.cursor.eat(TokenKind::Var).is_some() {
            Some(self.var_declaration()?)
        } else {
            Some(self.expression_statement()?)
        };

        let condition = if self.cursor.check(TokenKind::Semicolon) {
            None
        } else {
            Some(self.expression()?)
        };
        self.consume(TokenKind::Semicolon, "Expect ';' after loop condition.")?;

        let increment = if self.cursor.check(TokenKind::RightParen) {
            None
        } else {
            Some(self.expression()?)
        };
        self.consume(TokenKind::RightParen, "Expect ')' after for clauses.")?;

        let mut body = self.statement()?;
        if let Some(increment) = increment {
            body = Stmt::Block(vec![body, Stmt::Expression(increment)]);
        }
        body = Stmt::While {
            condition: condition.unwrap_or(Expr::Literal(Literal::Bool(true))),
            body: Box::new(body),
        };
        if let Some(initializer) = initializer {
            body = Stmt::Block(vec![initializer, body]);
        }
        Ok(body)
    }

    fn if_statement(&mut self) -> PResult<Stmt> {
        self.consume(TokenKind::LeftParen, "Expect '(' after 'if'.")?;
        let condition = self.expression()?;
        self.consume(TokenKind::RightParen, "Expect ')' after if condition.")?;

        let then_branch = Box::new(self.statement()?);
        // A dangling `else` binds to the nearest `if`.
        let else_branch = if self.cursor.eat(TokenKind::Else).is_some() {
            Some(Box::new(self.statement()?))
        } else {
            None
        };
        Ok(Stmt::If {
            condition,
            then_branch,
            else_branch,
        })
    }

    fn while_statement(&mut self) -> PResult<Stmt> {
        self.consume(TokenKind::LeftParen, "Expect '(' after 'while'.")?;
        let condition = self.expression()?;
        self.consume(TokenKind::RightParen, "Expect ')' after while condition.")?;
        let body = Box::new(self.statement()?);
        Ok(Stmt::While { condition, body })
    }

    fn print_statement(&mut self) -> PResult<Stmt> {
        let value = self.expression()?;
        self.consume(TokenKind::Semicolon, "Expect ';' after value.")?;
        Ok(Stmt::Print(value))
    }

    fn expression_statement(&mut self) -> PResult<Stmt> {
        let expr = self.expression()?;
        self.consume(TokenKind::Semicolon, "Expect ';' after expression.")?;
        Ok(Stmt::Expression(expr))
    }

    /// `{` has been consumed. Errors inside the block are recovered per
    /// declaration, like at top level.
    fn block(&mut self) -> PResult<Vec<Stmt>> {
        let mut statements = Vec::new();
        while !self.cursor.check(TokenKind::RightBrace) && !self.cursor.is_at_end() {
            if let Some(stmt) = self.declaration() {
                statements.push(stmt);
            }
        }
        self.consume(TokenKind::RightBrace, "Expect '}' after block.")?;
        Ok(statements)
    }
}
