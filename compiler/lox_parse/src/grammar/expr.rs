//! Expressions, one method per precedence level.

use lox_ir::{Expr, Literal, TokenKind};
use lox_stack::ensure_sufficient_stack;

use crate::{PResult, ParseError, ParseErrorKind, Parser};

impl Parser {
    pub(crate) fn expression(&mut self) -> PResult<Expr> {
        ensure_sufficient_stack(|| self.assignment())
    }

    /// Right-associative. The target is checked syntactically: only a bare
    /// variable may appear left of `=`.
    fn assignment(&mut self) -> PResult<Expr> {
        let expr = self.or()?;

        if let Some(equals) = self.cursor.eat(TokenKind::Equal) {
            let value = self.assignment()?;
            return match expr {
                Expr::Variable(name) => Ok(Expr::assign(name, value)),
                _ => Err(ParseError::new(ParseErrorKind::InvalidAssignmentTarget, equals)),
            };
        }

        Ok(expr)
    }

    fn or(&mut self) -> PResult<Expr> {
        let mut expr = self.and()?;
        while let Some(operator) = self.cursor.eat(TokenKind::Or) {
            let right = self.and()?;
            expr = Expr::logical(expr, operator, right);
        }
        Ok(expr)
    }

    fn and(&mut self) -> PResult<Expr> {
        let mut expr = self.comma()?;
        while let Some(operator) = self.cursor.eat(TokenKind::And) {
            let right = self.comma()?;
            expr = Expr::logical(expr, operator, right);
        }
        Ok(expr)
    }

    /// `a, b` evaluates both and yields `b`. Disabled inside argument lists.
    fn comma(&mut self) -> PResult<Expr> {
        let mut expr = self.equality()?;
        while self.comma_allowed {
            let Some(operator) = self.cursor.eat(TokenKind::Comma) else {
                break;
            };
            let right = self.equality()?;
            expr = Expr::binary(expr, operator, right);
        }
        Ok(expr)
    }

    fn equality(&mut self) -> PResult<Expr> {
        self.binary_level(
            &[TokenKind::BangEqual, TokenKind::EqualEqual],
            Self::comparison,
        )
    }

    fn comparison(&mut self) -> PResult<Expr> {
        self.binary_level(
            &[
                TokenKind::Greater,
                TokenKind::GreaterEqual,
                TokenKind::Less,
                TokenKind::LessEqual,
            ],
            Self::term,
        )
    }

    fn term(&mut self) -> PResult<Expr> {
        self.binary_level(&[TokenKind::Minus, TokenKind::Plus], Self::factor)
    }

    fn factor(&mut self) -> PResult<Expr> {
        self.binary_level(&[TokenKind::Slash, TokenKind::Star], Self::unary)
    }

    /// Left-associative `operand (op operand)*`.
    fn binary_level(
        &mut self,
        operators: &[TokenKind],
        mut operand: impl FnMut(&mut Self) -> PResult<Expr>,
    ) -> PResult<Expr> {
        let mut expr = operand(self)?;
        while let Some(operator) = self.cursor.eat_any(operators) {
            let right = operand(self)?;
            expr = Expr::binary(expr, operator, right);
        }
        Ok(expr)
    }

    fn unary(&mut self) -> PResult<Expr> {
        if let Some(operator) = self.cursor.eat_any(&[TokenKind::Bang, TokenKind::Minus]) {
            let right = ensure_sufficient_stack(|| self.unary())?;
            return Ok(Expr::unary(operator, right));
        }
        self.call()
    }

    fn call(&mut self) -> PResult<Expr> {
        let mut expr = self.primary()?;
        while self.cursor.eat(TokenKind::LeftParen).is_some() {
            expr = self.finish_call(expr)?;
        }
        Ok(expr)
    }

    /// `(` has been consumed.
    fn finish_call(&mut self, callee: Expr) -> PResult<Expr> {
        let mut arguments = Vec::new();
        if !self.cursor.check(TokenKind::RightParen) {
            loop {
                arguments.push(self.with_comma(false, Self::expression)?);
                if self.cursor.eat(TokenKind::Comma).is_none() {
                    break;
                }
            }
        }
        let paren = self.consume(TokenKind::RightParen, "Expect ')' after arguments.")?;
        Ok(Expr::Call {
            callee: Box::new(callee),
            paren,
            arguments,
        })
    }

    fn primary(&mut self) -> PResult<Expr> {
        let expr = match self.cursor.current().kind {
            TokenKind::False => Expr::Literal(Literal::Bool(false)),
            TokenKind::True => Expr::Literal(Literal::Bool(true)),
            TokenKind::Nil => Expr::Literal(Literal::Nil),
            TokenKind::Number | TokenKind::String => match self.cursor.current().literal.clone() {
                Some(literal) => Expr::Literal(literal),
                None => return Err(self.error_here(ParseErrorKind::ExpectedExpression)),
            },
            TokenKind::Identifier => Expr::Variable(self.cursor.current().clone()),
            TokenKind::LeftParen => {
                self.cursor.advance();
                let inner = self.with_comma(true, Self::expression)?;
                self.consume(TokenKind::RightParen, "Expect ')' after expression.")?;
                return Ok(Expr::grouping(inner));
            }
            _ => return Err(self.error_here(ParseErrorKind::ExpectedExpression)),
        };
        self.cursor.advance();
        Ok(expr)
    }
}
