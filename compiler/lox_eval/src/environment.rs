//! Environment for variable scoping in the interpreter.
//!
//! An [`Environment`] is a handle to one scope. Scopes link outward to their
//! enclosing scope, forming a chain that ends at the globals. Handles are
//! reference counted: blocks, active calls, and closures can all hold the
//! same scope, and it lives until the last of them lets go.

use rustc_hash::FxHashMap;
use std::cell::RefCell;
use std::fmt;
use std::ops::Deref;
use std::rc::Rc;

use lox_ir::Token;

use crate::errors::{undefined_variable, EvalResult};
use crate::value::Value;

/// Error returned by `Scope::assign` when no scope in the chain binds the
/// name.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AssignError {
    Undefined,
}

/// A single-threaded shared, mutable cell.
///
/// All scope allocations go through [`LocalScope::new`]; the type makes it
/// plain that scopes are `Rc`, not `Arc`.
#[repr(transparent)]
pub struct LocalScope<T>(Rc<RefCell<T>>);

impl<T> LocalScope<T> {
    #[inline]
    pub fn new(value: T) -> Self {
        LocalScope(Rc::new(RefCell::new(value)))
    }

    /// Whether two handles point at the same cell.
    #[inline]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl<T> Clone for LocalScope<T> {
    #[inline]
    fn clone(&self) -> Self {
        LocalScope(Rc::clone(&self.0))
    }
}

impl<T> Deref for LocalScope<T> {
    type Target = RefCell<T>;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// Bindings of one scope plus its enclosing scope.
pub struct Scope {
    bindings: FxHashMap<String, Value>,
    parent: Option<Environment>,
}

impl Scope {
    fn new(parent: Option<Environment>) -> Self {
        Scope {
            bindings: FxHashMap::default(),
            parent,
        }
    }

    /// Bind `name` in this scope, replacing any existing binding here.
    #[inline]
    pub fn define(&mut self, name: &str, value: Value) {
        self.bindings.insert(name.to_owned(), value);
    }

    /// Look `name` up here, then in each enclosing scope.
    pub fn lookup(&self, name: &str) -> Option<Value> {
        if let Some(value) = self.bindings.get(name) {
            return Some(value.clone());
        }
        if let Some(parent) = &self.parent {
            return parent.borrow().lookup(name);
        }
        None
    }

    /// Rebind the nearest existing binding of `name`. Never creates one.
    pub fn assign(&mut self, name: &str, value: Value) -> Result<(), AssignError> {
        if let Some(slot) = self.bindings.get_mut(name) {
            *slot = value;
            return Ok(());
        }
        if let Some(parent) = &self.parent {
            return parent.borrow_mut().assign(name, value);
        }
        Err(AssignError::Undefined)
    }
}

/// Handle to a scope in the chain.
#[derive(Clone)]
pub struct Environment(LocalScope<Scope>);

impl Environment {
    /// A root scope with no parent.
    pub fn global() -> Self {
        Environment(LocalScope::new(Scope::new(None)))
    }

    /// A fresh scope whose parent is `enclosing`.
    pub fn nested(enclosing: &Environment) -> Self {
        Environment(LocalScope::new(Scope::new(Some(enclosing.clone()))))
    }

    pub fn enclosing(&self) -> Option<Environment> {
        self.borrow().parent.clone()
    }

    pub fn define(&self, name: &str, value: Value) {
        self.borrow_mut().define(name, value);
    }

    pub fn lookup(&self, name: &str) -> Option<Value> {
        self.borrow().lookup(name)
    }

    /// Read the variable `name` refers to. `nil` is a legitimate value;
    /// only a name bound nowhere in the chain is an error.
    pub fn get(&self, name: &Token) -> EvalResult {
        self.lookup(&name.lexeme).ok_or_else(|| undefined_variable(name))
    }

    pub fn assign(&self, name: &Token, value: Value) -> EvalResult<()> {
        self.borrow_mut()
            .assign(&name.lexeme, value)
            .map_err(|AssignError::Undefined| undefined_variable(name))
    }

    pub fn ptr_eq(&self, other: &Environment) -> bool {
        self.0.ptr_eq(&other.0)
    }
}

impl Deref for Environment {
    type Target = RefCell<Scope>;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl fmt::Debug for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let scope = self.borrow();
        let mut names: Vec<&str> = scope.bindings.keys().map(String::as_str).collect();
        names.sort_unstable();
        f.debug_struct("Environment")
            .field("names", &names)
            .field("has_parent", &scope.parent.is_some())
            .finish()
    }
}
