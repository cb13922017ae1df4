use std::fmt;

use lox_ir::{Token, TokenKind};

use crate::ErrorCode;

/// Where on its line a diagnostic points.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Location {
    /// Line only (lexical and internal errors).
    Line,
    /// At the end-of-input token.
    AtEnd,
    /// At a token, identified by its lexeme.
    At(String),
}

impl Location {
    pub fn of_token(token: &Token) -> Self {
        if token.kind == TokenKind::Eof {
            Location::AtEnd
        } else {
            Location::At(token.lexeme.clone())
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Location::Line => Ok(()),
            Location::AtEnd => f.write_str(" at end"),
            Location::At(lexeme) => write!(f, " at '{lexeme}'"),
        }
    }
}

/// A reportable error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    pub code: ErrorCode,
    pub message: String,
    pub line: u32,
    pub location: Location,
}

impl Diagnostic {
    /// A diagnostic pointing at a whole line.
    pub fn error(code: ErrorCode, line: u32, message: impl Into<String>) -> Self {
        Diagnostic {
            code,
            message: message.into(),
            line,
            location: Location::Line,
        }
    }

    /// A diagnostic pointing at `token`.
    pub fn at_token(code: ErrorCode, token: &Token, message: impl Into<String>) -> Self {
        Diagnostic {
            code,
            message: message.into(),
            line: token.line,
            location: Location::of_token(token),
        }
    }

    pub fn is_compile_error(&self) -> bool {
        self.code.is_compile_error()
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[line {}] error[{}]{}: {}",
            self.line, self.code, self.location, self.message
        )
    }
}
