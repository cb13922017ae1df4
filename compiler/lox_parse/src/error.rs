//! Parse error types.

use lox_diagnostic::{Diagnostic, ErrorCode};
use lox_ir::Token;

/// A syntax error at a specific token.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
#[error("{kind}")]
pub struct ParseError {
    pub kind: ParseErrorKind,
    /// The token the parser was looking at when it gave up.
    pub token: Token,
}

#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum ParseErrorKind {
    /// A grammar rule's required token is missing.
    #[error("{0}")]
    Expected(&'static str),
    #[error("Expect expression.")]
    ExpectedExpression,
    /// Left of `=` is not a bare variable.
    #[error("Invalid assignment target.")]
    InvalidAssignmentTarget,
}

impl ParseErrorKind {
    pub fn code(&self) -> ErrorCode {
        match self {
            ParseErrorKind::Expected(_) => ErrorCode::E1001,
            ParseErrorKind::ExpectedExpression => ErrorCode::E1002,
            ParseErrorKind::InvalidAssignmentTarget => ErrorCode::E1003,
        }
    }
}

impl ParseError {
    pub fn new(kind: ParseErrorKind, token: Token) -> Self {
        ParseError { kind, token }
    }

    pub fn line(&self) -> u32 {
        self.token.line
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        Diagnostic::at_token(self.kind.code(), &self.token, self.kind.to_string())
    }
}
