//! Parser tests, driven through the real lexer.

mod recovery;
mod stmt;

use lox_ir::printer::AstPrinter;

use crate::{parse, ParseOutput};

pub(crate) fn parse_source(source: &str) -> ParseOutput {
    let lexed = lox_lexer::lex(source);
    assert!(lexed.errors.is_empty(), "lex errors: {:?}", lexed.errors);
    parse(lexed.tokens)
}

/// Parse `source`, require success, and render each statement.
pub(crate) fn render(source: &str) -> Vec<String> {
    let out = parse_source(source);
    assert!(out.errors.is_empty(), "parse errors: {:?}", out.errors);
    out.statements.iter().map(|s| AstPrinter.stmt(s)).collect()
}

/// Messages of every parse error in `source`, with their lines.
pub(crate) fn errors(source: &str) -> Vec<(u32, String)> {
    parse_source(source)
        .errors
        .iter()
        .map(|e| (e.line(), e.to_string()))
        .collect()
}
