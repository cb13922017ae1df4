//! The `run` command: interpret a script once.

use std::process::ExitCode;

use super::{emit_to_stderr, read_source};
use crate::Session;

/// Run a script to completion. Exits 65 on a lex or parse error and 70 on
/// a runtime error; output printed before a runtime error stands.
pub fn run_file(path: &str) -> ExitCode {
    let source = match read_source(path) {
        Ok(source) => source,
        Err(code) => return code,
    };

    let mut session = Session::new();
    session.run(&source);
    emit_to_stderr(&session.take_diagnostics());

    session
        .exit_code()
        .map_or(ExitCode::SUCCESS, ExitCode::from)
}
