//! Interpreter tests over whole programs.


use crate::{buffer_handler, InterpretError, Interpreter};

pub(crate) struct Run {
    pub output: String,
    pub result: Result<(), InterpretError>,
}

/// Lex, parse, and run `source` on a fresh interpreter, capturing output.
pub(crate) fn run(source: &str) -> Run {
    let mut interpreter = Interpreter::with_print_handler(buffer_handler());
    run_in(&mut interpreter, source)
}

pub(crate) fn run_in(interpreter: &mut Interpreter, source: &str) -> Run {
    let lexed = lox_lexer::lex(source);
    assert!(lexed.errors.is_empty(), "lex errors: {:?}", lexed.errors);
    let parsed = lox_parse::parse(lexed.tokens);
    assert!(parsed.errors.is_empty(), "parse errors: {:?}", parsed.errors);
    let result = interpreter.interpret(&parsed.statements);
    let output = interpreter.print_handler().get_output();
    interpreter.print_handler().clear();
    Run { output, result }
}

/// Output of a program that must succeed.
pub(crate) fn output(source: &str) -> String {
    let run = run(source);
    assert!(run.result.is_ok(), "runtime error: {:?}", run.result);
    run.output
}

/// Message of the runtime error a program must raise.
pub(crate) fn runtime_error(source: &str) -> String {
    match run(source).result {
        Err(err) => err.to_string(),
        Ok(()) => panic!("expected a runtime error from {source:?}"),
    }
}
