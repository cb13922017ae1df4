//! Centralized error constructors for the evaluator.
//!
//! Every runtime fault carries the token it happened at; the constructors
//! here are the only way evaluation code builds one.
//!
//! ```text
//! use crate::errors::{division_by_zero, undefined_variable};
//! ```

use lox_diagnostic::{Diagnostic, ErrorCode};
use lox_ir::Token;

use crate::value::Value;

/// Result of evaluating an expression or executing a statement.
pub type EvalResult<T = Value> = Result<T, RuntimeError>;

/// What went wrong at run time.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum RuntimeErrorKind {
    #[error("Operand must be a number.")]
    OperandMustBeNumber,
    #[error("Operands must be numbers.")]
    OperandsMustBeNumbers,
    #[error("Operands must be two numbers or two strings.")]
    OperandsMustBeNumbersOrStrings,
    #[error("Operands must be of same type.")]
    OperandsMustBeSameType,
    #[error("Division by zero.")]
    DivisionByZero,
    #[error("Undefined variable '{0}'.")]
    UndefinedVariable(String),
    #[error("Can only call functions and classes.")]
    NotCallable,
    #[error("Expected {expected} arguments but got {got}.")]
    WrongArgCount { expected: usize, got: usize },
    /// The parser produced an operator the evaluator has no rule for.
    #[error("Unknown operator '{0}'.")]
    UnknownOperator(String),
}

impl RuntimeErrorKind {
    pub fn code(&self) -> ErrorCode {
        match self {
            RuntimeErrorKind::OperandMustBeNumber
            | RuntimeErrorKind::OperandsMustBeNumbers
            | RuntimeErrorKind::OperandsMustBeNumbersOrStrings
            | RuntimeErrorKind::OperandsMustBeSameType
            | RuntimeErrorKind::UnknownOperator(_) => ErrorCode::E6001,
            RuntimeErrorKind::DivisionByZero => ErrorCode::E6002,
            RuntimeErrorKind::UndefinedVariable(_) => ErrorCode::E6003,
            RuntimeErrorKind::NotCallable => ErrorCode::E6004,
            RuntimeErrorKind::WrongArgCount { .. } => ErrorCode::E6005,
        }
    }
}

/// A runtime fault and the token it was raised at.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
#[error("{kind}")]
pub struct RuntimeError {
    pub kind: RuntimeErrorKind,
    pub token: Token,
}

impl RuntimeError {
    pub fn new(kind: RuntimeErrorKind, token: &Token) -> Self {
        RuntimeError {
            kind,
            token: token.clone(),
        }
    }

    pub fn line(&self) -> u32 {
        self.token.line
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        Diagnostic::error(self.kind.code(), self.line(), self.kind.to_string())
    }
}

/// Failure of a whole top-level run.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum InterpretError {
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
    /// A `return` unwound past every call frame. The language gives this no
    /// meaning, so it is an internal fault rather than a user error.
    #[error("'return' outside of any function escaped to the top level.")]
    EscapedReturn { line: u32 },
}

impl InterpretError {
    pub fn to_diagnostic(&self) -> Diagnostic {
        match self {
            InterpretError::Runtime(error) => error.to_diagnostic(),
            InterpretError::EscapedReturn { line } => {
                Diagnostic::error(ErrorCode::E9001, *line, self.to_string())
            }
        }
    }
}

#[cold]
pub fn operand_must_be_number(operator: &Token) -> RuntimeError {
    RuntimeError::new(RuntimeErrorKind::OperandMustBeNumber, operator)
}

#[cold]
pub fn operands_must_be_numbers(operator: &Token) -> RuntimeError {
    RuntimeError::new(RuntimeErrorKind::OperandsMustBeNumbers, operator)
}

#[cold]
pub fn operands_must_be_numbers_or_strings(operator: &Token) -> RuntimeError {
    RuntimeError::new(RuntimeErrorKind::OperandsMustBeNumbersOrStrings, operator)
}

#[cold]
pub fn operands_must_be_same_type(operator: &Token) -> RuntimeError {
    RuntimeError::new(RuntimeErrorKind::OperandsMustBeSameType, operator)
}

#[cold]
pub fn division_by_zero(operator: &Token) -> RuntimeError {
    RuntimeError::new(RuntimeErrorKind::DivisionByZero, operator)
}

#[cold]
pub fn undefined_variable(name: &Token) -> RuntimeError {
    RuntimeError::new(RuntimeErrorKind::UndefinedVariable(name.lexeme.clone()), name)
}

#[cold]
pub fn not_callable(paren: &Token) -> RuntimeError {
    RuntimeError::new(RuntimeErrorKind::NotCallable, paren)
}

#[cold]
pub fn wrong_arg_count(paren: &Token, expected: usize, got: usize) -> RuntimeError {
    RuntimeError::new(RuntimeErrorKind::WrongArgCount { expected, got }, paren)
}

#[cold]
pub fn unknown_operator(operator: &Token) -> RuntimeError {
    RuntimeError::new(RuntimeErrorKind::UnknownOperator(operator.lexeme.clone()), operator)
}
