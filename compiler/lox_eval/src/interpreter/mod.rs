//! Tree-walking interpreter for Lox.
//!
//! The current environment is an explicit parameter of every `evaluate` and
//! `execute` call rather than a field, so entering a block or a function is
//! just passing a different handle down and leaving it is returning.
//!
//! - `expr` - expression evaluation
//! - `stmt` - statement execution and the return signal
//! - `call` - invoking callables

mod call;
mod expr;
mod stmt;

use std::rc::Rc;

use lox_ir::Stmt;

use crate::callable::{Callable, NATIVES};
use crate::environment::Environment;
use crate::errors::InterpretError;
use crate::print_handler::{stdout_handler, SharedPrintHandler};
use crate::value::Value;

/// Outcome of executing a statement.
#[derive(Clone, Debug, PartialEq)]
pub enum Flow {
    /// Continue with the next statement.
    Normal,
    /// A `return` is unwinding to the nearest call. `line` is the line of
    /// the `return` keyword.
    Return { value: Value, line: u32 },
}

/// Interpreter state: the global scope and the output sink.
///
/// Globals persist across [`Interpreter::interpret`] calls, so an
/// interactive session accumulates declarations line by line.
pub struct Interpreter {
    globals: Environment,
    print_handler: SharedPrintHandler,
}

impl Interpreter {
    /// An interpreter printing to stdout.
    pub fn new() -> Self {
        Self::with_print_handler(stdout_handler())
    }

    pub fn with_print_handler(print_handler: SharedPrintHandler) -> Self {
        let globals = Environment::global();
        for native in NATIVES {
            globals.define(native.name, Value::Callable(Rc::new(Callable::Native(*native))));
        }
        Interpreter {
            globals,
            print_handler,
        }
    }

    pub fn globals(&self) -> &Environment {
        &self.globals
    }

    pub fn print_handler(&self) -> &SharedPrintHandler {
        &self.print_handler
    }

    /// Run a program against the global environment.
    ///
    /// Stops at the first runtime error; output printed before it stands.
    pub fn interpret(&mut self, statements: &[Stmt]) -> Result<(), InterpretError> {
        let globals = self.globals.clone();
        for stmt in statements {
            match self.execute(stmt, &globals)? {
                Flow::Normal => {}
                Flow::Return { line, .. } => return Err(InterpretError::EscapedReturn { line }),
            }
        }
        Ok(())
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}
