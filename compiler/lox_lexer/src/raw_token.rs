//! Raw Token Definition
//!
//! The logos-derived tokenizer output, before line tracking and conversion
//! into [`lox_ir::Token`].

use logos::{Lexer, Logos};
use lox_ir::TokenKind;

/// Whether a delimited construct found its closing delimiter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Termination {
    Closed,
    Unclosed,
}

/// Raw token from logos.
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
#[logos(skip r"[ \t\r]+")] // Skip horizontal whitespace
pub(crate) enum RawToken {
    #[regex(r"//[^\n]*")]
    LineComment,

    #[token("/*", block_comment)]
    BlockComment(Termination),

    #[token("\n")]
    Newline,

    #[token("\"", string_body)]
    Str(Termination),

    // A trailing `.` with no digit after it is left for the Dot token.
    #[regex(r"[0-9]+", number)]
    #[regex(r"[0-9]+\.[0-9]+", number)]
    Number(f64),

    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*")]
    Ident,

    #[token("and")]
    And,
    #[token("class")]
    Class,
    #[token("else")]
    Else,
    #[token("false")]
    False,
    #[token("for")]
    For,
    #[token("fun")]
    Fun,
    #[token("if")]
    If,
    #[token("nil")]
    Nil,
    #[token("or")]
    Or,
    #[token("print")]
    Print,
    #[token("return")]
    Return,
    #[token("super")]
    Super,
    #[token("this")]
    This,
    #[token("true")]
    True,
    #[token("var")]
    Var,
    #[token("while")]
    While,

    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token(",")]
    Comma,
    #[token(".")]
    Dot,
    #[token("-")]
    Minus,
    #[token("+")]
    Plus,
    #[token(";")]
    Semicolon,
    #[token("/")]
    Slash,
    #[token("*")]
    Star,

    #[token("!=")]
    BangEq,
    #[token("!")]
    Bang,
    #[token("==")]
    EqEq,
    #[token("=")]
    Eq,
    #[token(">=")]
    GtEq,
    #[token(">")]
    Gt,
    #[token("<=")]
    LtEq,
    #[token("<")]
    Lt,
}

impl RawToken {
    /// Token kind for raw tokens that map one-to-one onto a [`TokenKind`].
    ///
    /// Returns `None` for trivia and for tokens that need their slice
    /// (strings, numbers, identifiers).
    pub(crate) fn fixed_kind(self) -> Option<TokenKind> {
        let kind = match self {
            RawToken::LineComment
            | RawToken::BlockComment(_)
            | RawToken::Newline
            | RawToken::Str(_)
            | RawToken::Number(_)
            | RawToken::Ident => return None,

            RawToken::And => TokenKind::And,
            RawToken::Class => TokenKind::Class,
            RawToken::Else => TokenKind::Else,
            RawToken::False => TokenKind::False,
            RawToken::For => TokenKind::For,
            RawToken::Fun => TokenKind::Fun,
            RawToken::If => TokenKind::If,
            RawToken::Nil => TokenKind::Nil,
            RawToken::Or => TokenKind::Or,
            RawToken::Print => TokenKind::Print,
            RawToken::Return => TokenKind::Return,
            RawToken::Super => TokenKind::Super,
            RawToken::This => TokenKind::This,
            RawToken::True => TokenKind::True,
            RawToken::Var => TokenKind::Var,
            RawToken::While => TokenKind::While,

            RawToken::LParen => TokenKind::LeftParen,
            RawToken::RParen => TokenKind::RightParen,
            RawToken::LBrace => TokenKind::LeftBrace,
            RawToken::RBrace => TokenKind::RightBrace,
            RawToken::Comma => TokenKind::Comma,
            RawToken::Dot => TokenKind::Dot,
            RawToken::Minus => TokenKind::Minus,
            RawToken::Plus => TokenKind::Plus,
            RawToken::Semicolon => TokenKind::Semicolon,
            RawToken::Slash => TokenKind::Slash,
            RawToken::Star => TokenKind::Star,

            RawToken::BangEq => TokenKind::BangEqual,
            RawToken::Bang => TokenKind::Bang,
            RawToken::EqEq => TokenKind::EqualEqual,
            RawToken::Eq => TokenKind::Equal,
            RawToken::GtEq => TokenKind::GreaterEqual,
            RawToken::Gt => TokenKind::Greater,
            RawToken::LtEq => TokenKind::LessEqual,
            RawToken::Lt => TokenKind::Less,
        };
        Some(kind)
    }
}

/// Consume through the closing `*/`, or to end of input. Comments do not nest.
fn block_comment(lex: &mut Lexer<'_, RawToken>) -> Termination {
    close_at(lex, "*/")
}

/// Consume through the closing `"`, or to end of input. No escapes.
fn string_body(lex: &mut Lexer<'_, RawToken>) -> Termination {
    close_at(lex, "\"")
}

fn close_at(lex: &mut Lexer<'_, RawToken>, delimiter: &str) -> Termination {
    let rest = lex.remainder();
    match rest.find(delimiter) {
        Some(end) => {
            lex.bump(end + delimiter.len());
            Termination::Closed
        }
        None => {
            lex.bump(rest.len());
            Termination::Unclosed
        }
    }
}

fn number(lex: &mut Lexer<'_, RawToken>) -> Option<f64> {
    lex.slice().parse().ok()
}
