//! Token types for the Lox lexer.

use std::fmt;
use std::rc::Rc;

/// Token kinds for Lox.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // Single-character punctuation
    LeftParen,
    RightParen,
    LeftBrace,
    RightBrace,
    Comma,
    Dot,
    Minus,
    Plus,
    Semicolon,
    Slash,
    Star,

    // One or two character operators
    Bang,
    BangEqual,
    Equal,
    EqualEqual,
    Greater,
    GreaterEqual,
    Less,
    LessEqual,

    // Literals
    Identifier,
    String,
    Number,

    // Keywords
    And,
    Class,
    Else,
    False,
    Fun,
    For,
    If,
    Nil,
    Or,
    Print,
    Return,
    Super,
    This,
    True,
    Var,
    While,

    Eof,
}

impl TokenKind {
    /// Human-readable name used in token dumps and diagnostics.
    pub fn display_name(self) -> &'static str {
        match self {
            TokenKind::LeftParen => "(",
            TokenKind::RightParen => ")",
            TokenKind::LeftBrace => "{",
            TokenKind::RightBrace => "}",
            TokenKind::Comma => ",",
            TokenKind::Dot => ".",
            TokenKind::Minus => "-",
            TokenKind::Plus => "+",
            TokenKind::Semicolon => ";",
            TokenKind::Slash => "/",
            TokenKind::Star => "*",
            TokenKind::Bang => "!",
            TokenKind::BangEqual => "!=",
            TokenKind::Equal => "=",
            TokenKind::EqualEqual => "==",
            TokenKind::Greater => ">",
            TokenKind::GreaterEqual => ">=",
            TokenKind::Less => "<",
            TokenKind::LessEqual => "<=",
            TokenKind::Identifier => "identifier",
            TokenKind::String => "string",
            TokenKind::Number => "number",
            TokenKind::And => "and",
            TokenKind::Class => "class",
            TokenKind::Else => "else",
            TokenKind::False => "false",
            TokenKind::Fun => "fun",
            TokenKind::For => "for",
            TokenKind::If => "if",
            TokenKind::Nil => "nil",
            TokenKind::Or => "or",
            TokenKind::Print => "print",
            TokenKind::Return => "return",
            TokenKind::Super => "super",
            TokenKind::This => "this",
            TokenKind::True => "true",
            TokenKind::Var => "var",
            TokenKind::While => "while",
            TokenKind::Eof => "end of file",
        }
    }

    /// Keywords that begin a declaration or statement.
    ///
    /// The parser stops discarding tokens in front of one of these when it
    /// recovers from a syntax error.
    pub fn starts_statement(self) -> bool {
        matches!(
            self,
            TokenKind::Class
                | TokenKind::Fun
                | TokenKind::Var
                | TokenKind::For
                | TokenKind::If
                | TokenKind::While
                | TokenKind::Print
                | TokenKind::Return
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// A literal value known at parse time.
///
/// Tokens only ever carry `Number` or `Str`; `Bool` and `Nil` appear when the
/// parser turns `true`, `false`, and `nil` keywords into literal nodes.
#[derive(Clone, Debug, PartialEq)]
pub enum Literal {
    Number(f64),
    Str(Rc<str>),
    Bool(bool),
    Nil,
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::Number(n) => f.write_str(&format_number(*n)),
            Literal::Str(s) => f.write_str(s),
            Literal::Bool(b) => write!(f, "{b}"),
            Literal::Nil => f.write_str("nil"),
        }
    }
}

/// Render a number the way Lox programs see it.
///
/// Integral values print without a fractional part (`3`, not `3.0`).
pub fn format_number(n: f64) -> String {
    // f64's Display already drops a zero fraction and never uses exponents.
    format!("{n}")
}

/// A token with its source text and line.
#[derive(Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    /// Exact source substring the token was scanned from.
    pub lexeme: String,
    /// Decoded payload for `Number` and `String` tokens.
    pub literal: Option<Literal>,
    /// 1-based source line.
    pub line: u32,
}

impl Token {
    #[inline]
    pub fn new(
        kind: TokenKind,
        lexeme: impl Into<String>,
        literal: Option<Literal>,
        line: u32,
    ) -> Self {
        Token {
            kind,
            lexeme: lexeme.into(),
            literal,
            line,
        }
    }

    /// The end-of-input token for `line`.
    pub fn eof(line: u32) -> Self {
        Token::new(TokenKind::Eof, "", None, line)
    }

    /// A token with no source position, for tests.
    pub fn synthetic(kind: TokenKind, lexeme: &str) -> Self {
        Token::new(kind, lexeme, None, 0)
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} {:?} @ {}", self.kind, self.lexeme, self.line)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:<4} {:?} '{}'", self.line, self.kind, self.lexeme)?;
        if let Some(literal) = &self.literal {
            write!(f, " {literal}")?;
        }
        Ok(())
    }
}
