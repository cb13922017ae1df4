//! Lexer for Lox using logos.
//!
//! [`lex`] scans a whole source string into a materialized token list
//! terminated by exactly one `Eof` token. Lexical errors do not stop the
//! scan: the offending text is skipped and scanning resumes, so a single
//! pass reports every bad character.

mod lex_error;
mod raw_token;

use logos::Logos;
use lox_diagnostic::Diagnostic;
use lox_ir::{Literal, Token, TokenKind};

pub use lex_error::{LexError, LexErrorKind};
use raw_token::{RawToken, Termination};

/// Result of scanning one source string.
#[derive(Clone, Debug, PartialEq)]
pub struct LexOutput {
    pub tokens: Vec<Token>,
    pub errors: Vec<LexError>,
}

impl LexOutput {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn diagnostics(&self) -> impl Iterator<Item = Diagnostic> + '_ {
        self.errors.iter().map(LexError::to_diagnostic)
    }
}

/// Scan `source` into tokens.
pub fn lex(source: &str) -> LexOutput {
    let mut tokens = Vec::new();
    let mut errors = Vec::new();
    let mut line: u32 = 1;
    let mut logos = RawToken::lexer(source);

    while let Some(token_result) = logos.next() {
        let slice = logos.slice();
        let start_line = line;
        line = line.saturating_add(newlines_in(slice));

        match token_result {
            Ok(raw) => match raw {
                RawToken::LineComment
                | RawToken::Newline
                | RawToken::BlockComment(Termination::Closed) => {}
                RawToken::BlockComment(Termination::Unclosed) => {
                    errors.push(LexError::new(
                        LexErrorKind::UnterminatedBlockComment,
                        start_line,
                    ));
                }
                RawToken::Str(Termination::Closed) => {
                    let text = &slice[1..slice.len() - 1];
                    tokens.push(Token::new(
                        TokenKind::String,
                        slice,
                        Some(Literal::Str(text.into())),
                        start_line,
                    ));
                }
                RawToken::Str(Termination::Unclosed) => {
                    errors.push(LexError::new(LexErrorKind::UnterminatedString, start_line));
                }
                RawToken::Number(value) => {
                    tokens.push(Token::new(
                        TokenKind::Number,
                        slice,
                        Some(Literal::Number(value)),
                        start_line,
                    ));
                }
                RawToken::Ident => {
                    tokens.push(Token::new(TokenKind::Identifier, slice, None, start_line));
                }
                fixed => {
                    if let Some(kind) = fixed.fixed_kind() {
                        tokens.push(Token::new(kind, slice, None, start_line));
                    }
                }
            },
            Err(()) => {
                for c in slice.chars() {
                    errors.push(LexError::new(
                        LexErrorKind::UnexpectedCharacter(c),
                        start_line,
                    ));
                }
            }
        }
    }

    tokens.push(Token::eof(line));
    tracing::trace!(tokens = tokens.len(), errors = errors.len(), "lexed source");
    LexOutput { tokens, errors }
}

fn newlines_in(slice: &str) -> u32 {
    let count = slice.bytes().filter(|b| *b == b'\n').count();
    u32::try_from(count).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests;
