//! Token cursor for navigating the token stream.

use lox_ir::{Token, TokenKind};
use tracing::trace;

/// Cursor over an owned token list.
///
/// Invariant: the list is non-empty and ends with `Eof`, so `pos` always
/// indexes a valid token and the cursor never moves past the last one.
pub(crate) struct Cursor {
    tokens: Vec<Token>,
    pos: usize,
}

impl Cursor {
    pub(crate) fn new(mut tokens: Vec<Token>) -> Self {
        if tokens.last().map(|t| t.kind) != Some(TokenKind::Eof) {
            let line = tokens.last().map_or(1, |t| t.line);
            tokens.push(Token::eof(line));
        }
        Cursor { tokens, pos: 0 }
    }

    pub(crate) fn position(&self) -> usize {
        self.pos
    }

    #[inline]
    pub(crate) fn current(&self) -> &Token {
        &self.tokens[self.pos]
    }

    /// The most recently consumed token (the first token before any advance).
    pub(crate) fn previous(&self) -> &Token {
        &self.tokens[self.pos.saturating_sub(1)]
    }

    #[inline]
    pub(crate) fn is_at_end(&self) -> bool {
        self.current().kind == TokenKind::Eof
    }

    #[inline]
    pub(crate) fn check(&self, kind: TokenKind) -> bool {
        self.current().kind == kind
    }

    /// Consume the current token and return it. Stays put on `Eof`.
    pub(crate) fn advance(&mut self) -> Token {
        let token = self.current().clone();
        trace!(pos = self.pos, kind = ?token.kind, line = token.line, "advance");
        if !self.is_at_end() {
            self.pos += 1;
        }
        token
    }

    /// Consume the current token if it has kind `kind`.
    pub(crate) fn eat(&mut self, kind: TokenKind) -> Option<Token> {
        if self.check(kind) {
            Some(self.advance())
        } else {
            None
        }
    }

    /// Consume the current token if its kind is any of `kinds`.
    pub(crate) fn eat_any(&mut self, kinds: &[TokenKind]) -> Option<Token> {
        if kinds.contains(&self.current().kind) {
            Some(self.advance())
        } else {
            None
        }
    }
}
