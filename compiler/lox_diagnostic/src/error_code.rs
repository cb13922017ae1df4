//! Error codes for all interpreter diagnostics.

use std::fmt;

/// Error codes for all interpreter diagnostics.
///
/// Format: E#### where first digit indicates phase:
/// - E0xxx: Lexer errors
/// - E1xxx: Parser errors
/// - E6xxx: Runtime errors
/// - E9xxx: Internal errors
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    // Lexer Errors (E0xxx)
    /// Unterminated string literal
    E0001,
    /// Unexpected character in source
    E0002,
    /// Unterminated block comment
    E0003,

    // Parser Errors (E1xxx)
    /// A required token is missing
    E1001,
    /// Expected expression
    E1002,
    /// Invalid assignment target
    E1003,

    // Runtime Errors (E6xxx)
    /// Operand type mismatch
    E6001,
    /// Division by zero
    E6002,
    /// Undefined variable
    E6003,
    /// Called a value that is not callable
    E6004,
    /// Wrong number of arguments
    E6005,

    // Internal Errors (E9xxx)
    /// `return` escaped every call frame
    E9001,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E0001 => "E0001",
            ErrorCode::E0002 => "E0002",
            ErrorCode::E0003 => "E0003",
            ErrorCode::E1001 => "E1001",
            ErrorCode::E1002 => "E1002",
            ErrorCode::E1003 => "E1003",
            ErrorCode::E6001 => "E6001",
            ErrorCode::E6002 => "E6002",
            ErrorCode::E6003 => "E6003",
            ErrorCode::E6004 => "E6004",
            ErrorCode::E6005 => "E6005",
            ErrorCode::E9001 => "E9001",
        }
    }

    pub fn is_lexer_error(&self) -> bool {
        matches!(self, ErrorCode::E0001 | ErrorCode::E0002 | ErrorCode::E0003)
    }

    pub fn is_parser_error(&self) -> bool {
        matches!(self, ErrorCode::E1001 | ErrorCode::E1002 | ErrorCode::E1003)
    }

    pub fn is_runtime_error(&self) -> bool {
        matches!(
            self,
            ErrorCode::E6001
                | ErrorCode::E6002
                | ErrorCode::E6003
                | ErrorCode::E6004
                | ErrorCode::E6005
        )
    }

    pub fn is_internal_error(&self) -> bool {
        matches!(self, ErrorCode::E9001)
    }

    /// Errors that stop a program before it runs.
    pub fn is_compile_error(&self) -> bool {
        self.is_lexer_error() || self.is_parser_error()
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
