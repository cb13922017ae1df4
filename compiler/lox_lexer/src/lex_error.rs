//! Lexer error types.

use lox_diagnostic::{Diagnostic, ErrorCode};

/// A lexical error and the line it was found on.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[error("[line {line}] {kind}")]
pub struct LexError {
    pub kind: LexErrorKind,
    pub line: u32,
}

/// What kind of lexer error occurred.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum LexErrorKind {
    #[error("Unexpected character '{0}'.")]
    UnexpectedCharacter(char),
    /// Reported at the line the string started on.
    #[error("Unterminated string.")]
    UnterminatedString,
    #[error("Unterminated block comment.")]
    UnterminatedBlockComment,
}

impl LexErrorKind {
    pub fn code(&self) -> ErrorCode {
        match self {
            LexErrorKind::UnterminatedString => ErrorCode::E0001,
            LexErrorKind::UnexpectedCharacter(_) => ErrorCode::E0002,
            LexErrorKind::UnterminatedBlockComment => ErrorCode::E0003,
        }
    }
}

impl LexError {
    pub fn new(kind: LexErrorKind, line: u32) -> Self {
        LexError { kind, line }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        Diagnostic::error(self.kind.code(), self.line, self.kind.to_string())
    }
}
