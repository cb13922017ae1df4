//! Shared helpers for phase tests.

use lox_eval::buffer_handler;
use loxc::Session;

/// Everything observable about one batch run.
pub struct Outcome {
    pub stdout: String,
    /// Rendered diagnostics, one per entry, without color.
    pub diagnostics: Vec<String>,
    pub had_error: bool,
    pub had_runtime_error: bool,
    pub exit_code: Option<u8>,
}

/// A session whose `print` output is captured.
pub fn session() -> Session {
    Session::with_print_handler(buffer_handler())
}

/// Run `source` in `session` and collect what it produced.
pub fn run_in(session: &mut Session, source: &str) -> Outcome {
    session.run(source);
    let handler = session.interpreter().print_handler();
    let stdout = handler.get_output();
    handler.clear();
    Outcome {
        stdout,
        diagnostics: session
            .take_diagnostics()
            .iter()
            .map(ToString::to_string)
            .collect(),
        had_error: session.had_error(),
        had_runtime_error: session.had_runtime_error(),
        exit_code: session.exit_code(),
    }
}

/// Run `source` in a fresh session.
pub fn run(source: &str) -> Outcome {
    run_in(&mut session(), source)
}

/// Stdout of a program that must run cleanly.
pub fn stdout_of(source: &str) -> String {
    let outcome = run(source);
    assert!(
        outcome.diagnostics.is_empty(),
        "unexpected diagnostics: {:#?}",
        outcome.diagnostics
    );
    outcome.stdout
}
