use std::rc::Rc;

use lox_ir::Stmt;
use lox_stack::ensure_sufficient_stack;

use super::{Flow, Interpreter};
use crate::callable::{Callable, UserFunction};
use crate::environment::Environment;
use crate::errors::EvalResult;
use crate::value::Value;

impl Interpreter {
    pub fn execute(&mut self, stmt: &Stmt, env: &Environment) -> EvalResult<Flow> {
        ensure_sufficient_stack(|| self.execute_inner(stmt, env))
    }

    /// Run `statements` in `env`, stopping early if one returns.
    ///
    /// `env` is dropped on the way out whether or not a return is unwinding,
    /// which is how the enclosing scope comes back into effect.
    pub fn execute_block(&mut self, statements: &[Stmt], env: Environment) -> EvalResult<Flow> {
        for stmt in statements {
            let flow = self.execute(stmt, &env)?;
            if let Flow::Return { .. } = flow {
                return Ok(flow);
            }
        }
        Ok(Flow::Normal)
    }

    fn execute_inner(&mut self, stmt: &Stmt, env: &Environment) -> EvalResult<Flow> {
        match stmt {
            Stmt::Expression(expr) => {
                self.evaluate(expr, env)?;
            }
            Stmt::Print(expr) => {
                let value = self.evaluate(expr, env)?;
                self.print_handler.println(&value.to_string());
            }
            Stmt::Var { name, initializer } => {
                // Bound before the initializer runs: `var a = a;` reads nil.
                env.define(&name.lexeme, Value::Nil);
                if let Some(initializer) = initializer {
                    let value = self.evaluate(initializer, env)?;
                    env.define(&name.lexeme, value);
                }
            }
            Stmt::Block(statements) => {
                return self.execute_block(statements, Environment::nested(env));
            }
            Stmt::If {
                condition,
                then_branch,
                else_branch,
            } => {
                if self.evaluate(condition, env)?.is_truthy() {
                    return self.execute(then_branch, env);
                }
                if let Some(else_branch) = else_branch {
                    return self.execute(else_branch, env);
                }
            }
            Stmt::While { condition, body } => {
                while self.evaluate(condition, env)?.is_truthy() {
                    let flow = self.execute(body, env)?;
                    if let Flow::Return { .. } = flow {
                        return Ok(flow);
                    }
                }
            }
            Stmt::Function(declaration) => {
                // `env` ends up holding a function whose closure is `env`:
                // an `Rc` cycle, so this scope is never freed. Scopes that
                // declare no function are released with their last handle.
                let function = Callable::User(UserFunction {
                    declaration: Rc::clone(declaration),
                    closure: env.clone(),
                });
                env.define(&declaration.name.lexeme, Value::Callable(Rc::new(function)));
            }
            Stmt::Return { keyword, value } => {
                let value = match value {
                    Some(expr) => self.evaluate(expr, env)?,
                    None => Value::Nil,
                };
                return Ok(Flow::Return {
                    value,
                    line: keyword.line,
                });
            }
        }
        Ok(Flow::Normal)
    }
}
