//! Tree-walking evaluator for Lox.
//!
//! - [`Value`]: the runtime value domain
//! - [`Environment`]: reference-counted scope chain
//! - [`Callable`]: native and user functions behind one call interface
//! - [`Interpreter`]: statement execution and expression evaluation
//! - [`errors`]: runtime fault taxonomy and constructors
//! - [`print_handler`]: destination of `print`

mod callable;
mod environment;
pub mod errors;
mod interpreter;
mod operators;
pub mod print_handler;
mod value;

pub use callable::{Callable, NativeFn, NativeFunction, UserFunction};
pub use environment::{AssignError, Environment, LocalScope, Scope};
pub use errors::{EvalResult, InterpretError, RuntimeError, RuntimeErrorKind};
pub use interpreter::{Flow, Interpreter};
pub use print_handler::{buffer_handler, stdout_handler, SharedPrintHandler};
pub use value::Value;

#[cfg(test)]
mod tests;
