//! Error recovery for the parser.

use lox_ir::TokenKind;
use tracing::debug;

use crate::Parser;

impl Parser {
    /// Discard tokens until a statement boundary.
    ///
    /// Always consumes the offending token first, then stops just after a
    /// `;` or just before a keyword that begins a declaration or statement.
    pub(crate) fn synchronize(&mut self) {
        let start = self.cursor.position();
        self.cursor.advance();

        while !self.cursor.is_at_end() {
            if self.cursor.previous().kind == TokenKind::Semicolon
                || self.cursor.current().kind.starts_statement()
            {
                break;
            }
            self.cursor.advance();
        }

        debug!(
            skipped = self.cursor.position() - start,
            resume_line = self.cursor.current().line,
            "synchronized"
        );
    }
}
