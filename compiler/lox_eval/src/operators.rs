//! Unary and binary operator semantics.
//!
//! Arithmetic is numbers-only except `+`, which also concatenates strings
//! and stringifies a number paired with a string. Comparison and equality
//! are stricter: both sides must be the same variant, or the operation
//! fails with "Operands must be of same type." rather than coercing.

use std::cmp::Ordering;
use std::rc::Rc;

use lox_ir::{Token, TokenKind};

use crate::errors::{
    division_by_zero, operand_must_be_number, operands_must_be_numbers,
    operands_must_be_numbers_or_strings, operands_must_be_same_type, unknown_operator, EvalResult,
};
use crate::value::Value;

pub(crate) fn evaluate_unary(operator: &Token, right: &Value) -> EvalResult {
    match operator.kind {
        TokenKind::Bang => Ok(Value::Bool(!right.is_truthy())),
        TokenKind::Minus => match right {
            Value::Number(n) => Ok(Value::Number(-n)),
            _ => Err(operand_must_be_number(operator)),
        },
        _ => Err(unknown_operator(operator)),
    }
}

/// Apply a non-short-circuiting binary operator to evaluated operands.
pub(crate) fn evaluate_binary(left: Value, operator: &Token, right: Value) -> EvalResult {
    match operator.kind {
        TokenKind::Comma => Ok(right),
        TokenKind::Plus => add(&left, operator, &right),
        TokenKind::Minus | TokenKind::Star | TokenKind::Slash => {
            let (Value::Number(a), Value::Number(b)) = (&left, &right) else {
                return Err(operands_must_be_numbers(operator));
            };
            match operator.kind {
                TokenKind::Minus => Ok(Value::Number(a - b)),
                TokenKind::Star => Ok(Value::Number(a * b)),
                _ if *b == 0.0 => Err(division_by_zero(operator)),
                _ => Ok(Value::Number(a / b)),
            }
        }
        TokenKind::EqualEqual | TokenKind::BangEqual => {
            if !left.same_variant(&right) {
                return Err(operands_must_be_same_type(operator));
            }
            let equal = left == right;
            Ok(Value::Bool(if operator.kind == TokenKind::EqualEqual {
                equal
            } else {
                !equal
            }))
        }
        TokenKind::Greater | TokenKind::GreaterEqual | TokenKind::Less | TokenKind::LessEqual => {
            let ordering = compare(&left, operator, &right)?;
            let result = match operator.kind {
                TokenKind::Greater => ordering == Some(Ordering::Greater),
                TokenKind::GreaterEqual => {
                    matches!(ordering, Some(Ordering::Greater | Ordering::Equal))
                }
                TokenKind::Less => ordering == Some(Ordering::Less),
                _ => matches!(ordering, Some(Ordering::Less | Ordering::Equal)),
            };
            Ok(Value::Bool(result))
        }
        _ => Err(unknown_operator(operator)),
    }
}

fn add(left: &Value, operator: &Token, right: &Value) -> EvalResult {
    match (left, right) {
        (Value::Number(a), Value::Number(b)) => Ok(Value::Number(a + b)),
        (Value::Str(a), Value::Str(b)) => {
            let mut joined = String::with_capacity(a.len() + b.len());
            joined.push_str(a);
            joined.push_str(b);
            Ok(Value::Str(Rc::from(joined)))
        }
        (Value::Number(_), Value::Str(_)) | (Value::Str(_), Value::Number(_)) => {
            Ok(Value::string(format!("{left}{right}")))
        }
        _ => Err(operands_must_be_numbers_or_strings(operator)),
    }
}

/// Order two values of the same variant.
///
/// `None` means unordered: NaN against anything, or two distinct functions.
/// Booleans order `false < true`; strings order lexicographically.
fn compare(left: &Value, operator: &Token, right: &Value) -> EvalResult<Option<Ordering>> {
    let ordering = match (left, right) {
        (Value::Number(a), Value::Number(b)) => a.partial_cmp(b),
        (Value::Str(a), Value::Str(b)) => Some(a.cmp(b)),
        (Value::Bool(a), Value::Bool(b)) => Some(a.cmp(b)),
        (Value::Nil, Value::Nil) => Some(Ordering::Equal),
        (Value::Callable(a), Value::Callable(b)) => Rc::ptr_eq(a, b).then_some(Ordering::Equal),
        _ => return Err(operands_must_be_same_type(operator)),
    };
    Ok(ordering)
}
