use lox_ir::Token;
use tracing::trace;

use super::{Flow, Interpreter};
use crate::callable::{Callable, UserFunction};
use crate::environment::Environment;
use crate::errors::{not_callable, wrong_arg_count, EvalResult};
use crate::value::Value;

impl Interpreter {
    /// Invoke `callee` with already-evaluated `arguments`.
    ///
    /// `paren` is the call's closing parenthesis, used to locate errors.
    /// Arity is checked before anything runs.
    pub fn call(&mut self, callee: &Value, paren: &Token, arguments: &[Value]) -> EvalResult {
        let Value::Callable(callable) = callee else {
            return Err(not_callable(paren));
        };
        if arguments.len() != callable.arity() {
            return Err(wrong_arg_count(paren, callable.arity(), arguments.len()));
        }
        match callable.as_ref() {
            Callable::Native(native) => {
                trace!(name = native.name, "native call");
                (native.func)(arguments)
            }
            Callable::User(function) => self.call_user(function, arguments),
        }
    }

    /// Parameters are bound in a fresh scope under the closure, not under
    /// the caller's scope.
    #[tracing::instrument(
        level = "debug",
        skip_all,
        fields(name = %function.declaration.name.lexeme, args = arguments.len())
    )]
    fn call_user(&mut self, function: &UserFunction, arguments: &[Value]) -> EvalResult {
        let env = Environment::nested(&function.closure);
        for (param, argument) in function.declaration.params.iter().zip(arguments) {
            env.define(&param.lexeme, argument.clone());
        }
        match self.execute_block(&function.declaration.body, env)? {
            Flow::Return { value, .. } => Ok(value),
            Flow::Normal => Ok(Value::Nil),
        }
    }
}
