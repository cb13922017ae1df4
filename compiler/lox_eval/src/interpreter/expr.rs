use lox_ir::{Expr, TokenKind};
use lox_stack::ensure_sufficient_stack;

use super::Interpreter;
use crate::environment::Environment;
use crate::errors::EvalResult;
use crate::operators::{evaluate_binary, evaluate_unary};
use crate::value::Value;

impl Interpreter {
    /// Evaluate `expr` in `env`. Operands are evaluated left to right.
    pub fn evaluate(&mut self, expr: &Expr, env: &Environment) -> EvalResult {
        ensure_sufficient_stack(|| self.evaluate_inner(expr, env))
    }

    fn evaluate_inner(&mut self, expr: &Expr, env: &Environment) -> EvalResult {
        match expr {
            Expr::Literal(literal) => Ok(Value::from(literal)),
            Expr::Grouping(inner) => self.evaluate(inner, env),
            Expr::Variable(name) => env.get(name),
            Expr::Assign { name, value } => {
                let value = self.evaluate(value, env)?;
                env.assign(name, value.clone())?;
                Ok(value)
            }
            Expr::Logical {
                left,
                operator,
                right,
            } => {
                let left = self.evaluate(left, env)?;
                let short_circuits = if operator.kind == TokenKind::Or {
                    left.is_truthy()
                } else {
                    !left.is_truthy()
                };
                if short_circuits {
                    Ok(left)
                } else {
                    self.evaluate(right, env)
                }
            }
            Expr::Unary { operator, right } => {
                let right = self.evaluate(right, env)?;
                evaluate_unary(operator, &right)
            }
            Expr::Binary {
                left,
                operator,
                right,
            } => {
                let left = self.evaluate(left, env)?;
                let right = self.evaluate(right, env)?;
                evaluate_binary(left, operator, right)
            }
            Expr::Call {
                callee,
                paren,
                arguments,
            } => {
                let callee = self.evaluate(callee, env)?;
                let mut args = Vec::with_capacity(arguments.len());
                for argument in arguments {
                    args.push(self.evaluate(argument, env)?);
                }
                self.call(&callee, paren, &args)
            }
        }
    }
}
