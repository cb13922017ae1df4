//! Debug commands: `lex` and `parse` for inspecting the front end.

use std::process::ExitCode;

use lox_diagnostic::Diagnostic;
use lox_ir::printer::{AstPrinter, RpnPrinter};

use super::{emit_to_stderr, read_source};
use crate::exit_code;

/// Print the token stream of a script, one token per line.
pub fn lex_file(path: &str) -> ExitCode {
    let source = match read_source(path) {
        Ok(source) => source,
        Err(code) => return code,
    };

    let lexed = lox_lexer::lex(&source);
    println!("Tokens for '{}' ({} tokens):", path, lexed.tokens.len());
    for token in &lexed.tokens {
        println!("  {token}");
    }

    let diagnostics: Vec<Diagnostic> = lexed.diagnostics().collect();
    finish(&diagnostics)
}

/// Print each parsed statement, in prefix form or, with `rpn`, with
/// expression statements in reverse Polish notation.
pub fn parse_file(path: &str, rpn: bool) -> ExitCode {
    let source = match read_source(path) {
        Ok(source) => source,
        Err(code) => return code,
    };

    let lexed = lox_lexer::lex(&source);
    let mut diagnostics: Vec<Diagnostic> = lexed.diagnostics().collect();
    let parsed = lox_parse::parse(lexed.tokens);
    diagnostics.extend(parsed.diagnostics());

    for stmt in &parsed.statements {
        if rpn {
            println!("{}", RpnPrinter.stmt(stmt));
        } else {
            println!("{}", AstPrinter.stmt(stmt));
        }
    }

    finish(&diagnostics)
}

fn finish(diagnostics: &[Diagnostic]) -> ExitCode {
    emit_to_stderr(diagnostics);
    if diagnostics.is_empty() {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(exit_code::DATA_ERR)
    }
}
