//! Callable values: host-provided natives and user-declared functions.
//!
//! The interpreter calls both through [`Callable::arity`] and
//! [`Interpreter::call`](crate::Interpreter::call) without caring which kind
//! it holds.

use std::fmt;
use std::rc::Rc;
use std::time::{SystemTime, UNIX_EPOCH};

use lox_ir::FunctionDecl;

use crate::environment::Environment;
use crate::errors::EvalResult;
use crate::value::Value;

/// Signature of a host function. Arity is checked before the call.
pub type NativeFn = fn(&[Value]) -> EvalResult;

pub enum Callable {
    Native(NativeFunction),
    User(UserFunction),
}

#[derive(Clone, Copy)]
pub struct NativeFunction {
    pub name: &'static str,
    pub arity: usize,
    pub func: NativeFn,
}

/// A function declaration paired with the environment it was declared in.
pub struct UserFunction {
    pub declaration: Rc<FunctionDecl>,
    pub closure: Environment,
}

impl Callable {
    pub fn arity(&self) -> usize {
        match self {
            Callable::Native(native) => native.arity,
            Callable::User(function) => function.declaration.params.len(),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Callable::Native(native) => native.name,
            Callable::User(function) => &function.declaration.name.lexeme,
        }
    }
}

impl fmt::Display for Callable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Callable::Native(native) => write!(f, "<native fn {}>", native.name),
            Callable::User(function) => write!(f, "<fn {}>", function.declaration.name.lexeme),
        }
    }
}

// Closures can reach themselves through their environment; printing the
// environment here would never terminate.
impl fmt::Debug for Callable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self}")
    }
}

/// Natives bound in every global environment.
pub(crate) const NATIVES: &[NativeFunction] = &[NativeFunction {
    name: "clock",
    arity: 0,
    func: clock,
}];

/// Wall-clock milliseconds since the Unix epoch.
fn clock(_args: &[Value]) -> EvalResult {
    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0.0, |elapsed| elapsed.as_secs_f64() * 1000.0);
    Ok(Value::Number(millis))
}
