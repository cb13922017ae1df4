use pretty_assertions::assert_eq;

use super::*;

fn kinds(source: &str) -> Vec<TokenKind> {
    lex(source).tokens.iter().map(|t| t.kind).collect()
}

#[test]
fn empty_source_is_just_eof() {
    let out = lex("");
    assert_eq!(out.tokens, vec![Token::eof(1)]);
    assert!(!out.has_errors());
}

#[test]
fn punctuation_and_two_char_operators() {
    assert_eq!(
        kinds("(){},.-+;/* */*! != = == > >= < <="),
        vec![
            TokenKind::LeftParen,
            TokenKind::RightParen,
            TokenKind::LeftBrace,
            TokenKind::RightBrace,
            TokenKind::Comma,
            TokenKind::Dot,
            TokenKind::Minus,
            TokenKind::Plus,
            TokenKind::Semicolon,
            TokenKind::Star,
            TokenKind::Bang,
            TokenKind::BangEqual,
            TokenKind::Equal,
            TokenKind::EqualEqual,
            TokenKind::Greater,
            TokenKind::GreaterEqual,
            TokenKind::Less,
            TokenKind::LessEqual,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn keywords_and_identifiers() {
    assert_eq!(
        kinds("var variable fun funny _x orchid or nil"),
        vec![
            TokenKind::Var,
            TokenKind::Identifier,
            TokenKind::Fun,
            TokenKind::Identifier,
            TokenKind::Identifier,
            TokenKind::Identifier,
            TokenKind::Or,
            TokenKind::Nil,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn all_keywords() {
    let source = "and class else false for fun if nil or print return super this true var while";
    let out = kinds(source);
    assert_eq!(out.len(), 17);
    assert!(!out[..16].contains(&TokenKind::Identifier));
}

#[test]
fn number_literals() {
    let out = lex("123 45.67");
    assert_eq!(out.tokens[0].literal, Some(Literal::Number(123.0)));
    assert_eq!(out.tokens[0].lexeme, "123");
    assert_eq!(out.tokens[1].literal, Some(Literal::Number(45.67)));
}

#[test]
fn trailing_dot_is_not_part_of_number() {
    let out = lex("12.");
    assert_eq!(
        out.tokens.iter().map(|t| t.kind).collect::<Vec<_>>(),
        vec![TokenKind::Number, TokenKind::Dot, TokenKind::Eof]
    );
    assert_eq!(out.tokens[0].lexeme, "12");
}

#[test]
fn string_literal_strips_quotes_and_keeps_lexeme() {
    let out = lex(r#""hello world""#);
    let token = &out.tokens[0];
    assert_eq!(token.kind, TokenKind::String);
    assert_eq!(token.lexeme, "\"hello world\"");
    assert_eq!(token.literal, Some(Literal::Str("hello world".into())));
}

#[test]
fn strings_have_no_escapes_and_may_span_lines() {
    let out = lex("\"a\\n\nb\" x");
    assert_eq!(out.tokens[0].literal, Some(Literal::Str("a\\n\nb".into())));
    assert_eq!(out.tokens[0].line, 1);
    assert_eq!(out.tokens[1].line, 2);
}

#[test]
fn unterminated_string_reports_start_line() {
    let out = lex("print 1;\n\"never closed\n\n");
    assert_eq!(
        out.errors,
        vec![LexError::new(LexErrorKind::UnterminatedString, 2)]
    );
    assert_eq!(out.tokens.last().map(|t| t.kind), Some(TokenKind::Eof));
}

#[test]
fn comments_are_skipped() {
    assert_eq!(
        kinds("1 // line comment\n/* block\n comment */ 2"),
        vec![TokenKind::Number, TokenKind::Number, TokenKind::Eof]
    );
}

#[test]
fn block_comments_do_not_nest() {
    // The first `*/` closes the comment; the trailing `*/` lexes as tokens.
    assert_eq!(
        kinds("/* a /* b */ */"),
        vec![TokenKind::Star, TokenKind::Slash, TokenKind::Eof]
    );
}

#[test]
fn unterminated_block_comment() {
    let out = lex("1\n/* open");
    assert_eq!(
        out.errors,
        vec![LexError::new(LexErrorKind::UnterminatedBlockComment, 2)]
    );
}

#[test]
fn lines_advance_through_comments_and_newlines() {
    let out = lex("a\n/*\n\n*/ b\n// c\nd");
    let lines: Vec<u32> = out.tokens.iter().map(|t| t.line).collect();
    assert_eq!(lines, vec![1, 4, 6, 6]);
}

#[test]
fn unexpected_characters_are_reported_and_skipped() {
    let out = lex("1 @ 2\n#");
    assert_eq!(
        kinds("1 @ 2\n#"),
        vec![TokenKind::Number, TokenKind::Number, TokenKind::Eof]
    );
    assert_eq!(
        out.errors,
        vec![
            LexError::new(LexErrorKind::UnexpectedCharacter('@'), 1),
            LexError::new(LexErrorKind::UnexpectedCharacter('#'), 2),
        ]
    );
    assert_eq!(out.diagnostics().count(), 2);
}

mod properties {
    use proptest::prelude::*;

    use super::*;

    proptest! {
        #[test]
        fn never_panics_and_ends_with_one_eof(source in "\\PC{0,64}") {
            let out = lex(&source);
            let eofs = out.tokens.iter().filter(|t| t.kind == TokenKind::Eof).count();
            prop_assert_eq!(eofs, 1);
            prop_assert_eq!(out.tokens.last().map(|t| t.kind), Some(TokenKind::Eof));
        }

        #[test]
        fn integer_literals_round_trip(n in 0u32..1_000_000) {
            let out = lex(&n.to_string());
            prop_assert_eq!(out.tokens[0].literal.clone(), Some(Literal::Number(f64::from(n))));
        }

        #[test]
        fn identifiers_keep_their_lexeme(name in "[a-z_][a-z0-9_]{0,8}") {
            let out = lex(&name);
            prop_assert_eq!(&out.tokens[0].lexeme, &name);
        }
    }
}
