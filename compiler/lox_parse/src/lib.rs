//! Recursive descent parser for Lox.
//!
//! [`parse`] turns a token list into statements. Syntax errors are
//! collected rather than returned early: after each one the parser
//! synchronizes to the next statement boundary and keeps going, so one pass
//! reports every independent error.
//!
//! Precedence, lowest to highest:
//!
//! ```text
//! assignment → or → and → comma → equality → comparison
//!            → term → factor → unary → call → primary
//! ```

mod cursor;
mod error;
mod grammar;
mod recovery;

use lox_diagnostic::Diagnostic;
use lox_ir::{Stmt, Token};

use cursor::Cursor;
pub use error::{ParseError, ParseErrorKind};

type PResult<T> = Result<T, ParseError>;

/// Result of parsing one token list.
#[derive(Clone, Debug, PartialEq)]
pub struct ParseOutput {
    /// Statements that parsed cleanly; malformed ones are dropped.
    pub statements: Vec<Stmt>,
    pub errors: Vec<ParseError>,
}

impl ParseOutput {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn diagnostics(&self) -> impl Iterator<Item = Diagnostic> + '_ {
        self.errors.iter().map(ParseError::to_diagnostic)
    }
}

/// Parse a token list (as produced by the lexer) into statements.
///
/// A trailing `Eof` is appended if the list lacks one.
pub fn parse(tokens: Vec<Token>) -> ParseOutput {
    Parser::new(tokens).parse_program()
}

/// Parser state.
pub struct Parser {
    cursor: Cursor,
    errors: Vec<ParseError>,
    /// Cleared while parsing call arguments, where `,` separates arguments
    /// instead of sequencing them. Parentheses set it again.
    comma_allowed: bool,
}

impl Parser {
    pub fn new(tokens: Vec<Token>) -> Self {
        Parser {
            cursor: Cursor::new(tokens),
            errors: Vec::new(),
            comma_allowed: true,
        }
    }

    /// Parse declarations until end of input.
    pub fn parse_program(mut self) -> ParseOutput {
        let mut statements = Vec::new();
        while !self.cursor.is_at_end() {
            if let Some(stmt) = self.declaration() {
                statements.push(stmt);
            }
        }
        ParseOutput {
            statements,
            errors: self.errors,
        }
    }

    /// Consume a token of `kind` or fail with `message` at the current token.
    fn consume(&mut self, kind: lox_ir::TokenKind, message: &'static str) -> PResult<Token> {
        match self.cursor.eat(kind) {
            Some(token) => Ok(token),
            None => Err(self.error_here(ParseErrorKind::Expected(message))),
        }
    }

    fn error_here(&self, kind: ParseErrorKind) -> ParseError {
        ParseError::new(kind, self.cursor.current().clone())
    }

    /// Run `f` with the comma operator enabled or disabled, restoring the
    /// previous setting afterwards.
    fn with_comma<T>(&mut self, allowed: bool, f: impl FnOnce(&mut Self) -> T) -> T {
        let saved = std::mem::replace(&mut self.comma_allowed, allowed);
        let out = f(self);
        self.comma_allowed = saved;
        out
    }
}

#[cfg(test)]
mod tests;
