//! The interactive prompt.

use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use tracing::warn;

use super::emit_to_stderr;
use crate::Session;

const PROMPT: &str = "> ";

/// Read and run one line at a time until end of input.
///
/// Errors never end the session. The compile-error flag is cleared after
/// every line; declarations accumulate in the session's globals.
pub fn repl() -> ExitCode {
    let mut session = Session::new();
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut line = String::new();

    loop {
        print!("{PROMPT}");
        if let Err(e) = io::stdout().flush() {
            warn!(error = %e, "failed to flush prompt");
        }

        line.clear();
        match input.read_line(&mut line) {
            Ok(0) => break,
            Ok(_) => {}
            Err(e) => {
                eprintln!("error reading input: {e}");
                break;
            }
        }

        session.run(&line);
        emit_to_stderr(&session.take_diagnostics());
        session.reset_compile_error();
    }

    println!();
    ExitCode::SUCCESS
}
