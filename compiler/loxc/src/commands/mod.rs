//! Command handlers for the `lox` binary.
//!
//! Each handler returns the process exit status rather than exiting, so
//! `main` stays the single place the process ends.

mod debug;
mod repl;
mod run;

use std::io;
use std::process::ExitCode;

use lox_diagnostic::emitter::{ColorMode, DiagnosticEmitter, TerminalEmitter};
use lox_diagnostic::Diagnostic;

use crate::exit_code;

pub use debug::{lex_file, parse_file};
pub use repl::repl;
pub use run::run_file;

/// Read a script, reporting a readable reason on failure.
pub(crate) fn read_source(path: &str) -> Result<String, ExitCode> {
    std::fs::read_to_string(path).map_err(|e| {
        let msg = match e.kind() {
            io::ErrorKind::NotFound => format!("cannot find file '{path}'"),
            io::ErrorKind::PermissionDenied => format!("permission denied reading '{path}'"),
            io::ErrorKind::InvalidData => format!("'{path}' contains invalid UTF-8 data"),
            _ => format!("error reading '{path}': {e}"),
        };
        eprintln!("{msg}");
        ExitCode::from(exit_code::NO_INPUT)
    })
}

/// Write `diagnostics` to stderr, colored when stderr is a terminal.
pub(crate) fn emit_to_stderr(diagnostics: &[Diagnostic]) {
    if diagnostics.is_empty() {
        return;
    }
    let is_tty = io::IsTerminal::is_terminal(&io::stderr());
    let mut emitter = TerminalEmitter::stderr(ColorMode::Auto, is_tty);
    emitter.emit_all(diagnostics);
    emitter.flush();
}
