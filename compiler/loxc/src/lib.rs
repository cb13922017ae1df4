//! Lox driver library.
//!
//! [`Session`] is the pipeline entry point: it lexes, parses, and (when
//! both phases succeeded) interprets a source string, collecting every
//! diagnostic in a [`DiagnosticQueue`] instead of process-wide flags.
//! The `lox` binary and the end-to-end tests both drive it.

pub mod commands;

use std::sync::Once;

use lox_diagnostic::{Diagnostic, DiagnosticQueue};
use lox_eval::{InterpretError, Interpreter, SharedPrintHandler};
use tracing::{debug, error};

/// Process exit statuses, following the BSD `sysexits` convention.
pub mod exit_code {
    /// Bad command line.
    pub const USAGE: u8 = 64;
    /// The script failed to lex or parse.
    pub const DATA_ERR: u8 = 65;
    /// The script could not be read.
    pub const NO_INPUT: u8 = 66;
    /// The script raised a runtime error.
    pub const SOFTWARE: u8 = 70;
}

/// One interpreter plus the diagnostics it has produced.
///
/// Globals persist across [`Session::run`] calls, which is what lets the
/// interactive prompt build a program up one line at a time.
pub struct Session {
    interpreter: Interpreter,
    diagnostics: DiagnosticQueue,
}

impl Session {
    pub fn new() -> Self {
        Session {
            interpreter: Interpreter::new(),
            diagnostics: DiagnosticQueue::new(),
        }
    }

    pub fn with_print_handler(print_handler: SharedPrintHandler) -> Self {
        Session {
            interpreter: Interpreter::with_print_handler(print_handler),
            diagnostics: DiagnosticQueue::new(),
        }
    }

    /// Lex, parse, and interpret `source`.
    ///
    /// Lexing and parsing always run to completion so every syntax error is
    /// reported; interpretation is skipped if either produced one.
    pub fn run(&mut self, source: &str) {
        let lexed = lox_lexer::lex(source);
        let lex_failed = lexed.has_errors();
        self.diagnostics.extend(lexed.diagnostics());

        let parsed = lox_parse::parse(lexed.tokens);
        self.diagnostics.extend(parsed.diagnostics());

        if lex_failed || parsed.has_errors() {
            debug!(
                lex_errors = lexed.errors.len(),
                parse_errors = parsed.errors.len(),
                "skipping interpretation"
            );
            return;
        }

        if let Err(err) = self.interpreter.interpret(&parsed.statements) {
            match &err {
                InterpretError::EscapedReturn { line } => {
                    error!(line, "return signal escaped every call frame");
                }
                InterpretError::Runtime(runtime) => {
                    debug!(line = runtime.line(), error = %runtime, "runtime error");
                }
            }
            self.diagnostics.push(err.to_diagnostic());
        }
    }

    pub fn had_error(&self) -> bool {
        self.diagnostics.had_error()
    }

    pub fn had_runtime_error(&self) -> bool {
        self.diagnostics.had_runtime_error()
    }

    /// Clear the compile-error flag between prompt lines. The runtime flag
    /// and the globals are left alone.
    pub fn reset_compile_error(&mut self) {
        self.diagnostics.reset_compile_error();
    }

    /// Diagnostics produced since the last call, oldest first.
    pub fn take_diagnostics(&mut self) -> Vec<Diagnostic> {
        self.diagnostics.take()
    }

    pub fn interpreter(&self) -> &Interpreter {
        &self.interpreter
    }

    /// Exit status for a batch run: compile errors win over runtime errors.
    pub fn exit_code(&self) -> Option<u8> {
        if self.had_error() {
            Some(exit_code::DATA_ERR)
        } else if self.had_runtime_error() {
            Some(exit_code::SOFTWARE)
        } else {
            None
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

static TRACING_INIT: Once = Once::new();

/// Install the global tracing subscriber.
///
/// Does nothing unless `RUST_LOG` is set. `LOX_LOG_TREE` selects the
/// hierarchical layer. Logs go to stderr; program output owns stdout.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var_os("RUST_LOG").is_none() {
            return;
        }
        let registry = tracing_subscriber::registry().with(EnvFilter::from_default_env());
        if std::env::var_os("LOX_LOG_TREE").is_some() {
            registry
                .with(
                    tracing_tree::HierarchicalLayer::new(2)
                        .with_targets(true)
                        .with_writer(std::io::stderr),
                )
                .init();
        } else {
            registry
                .with(
                    fmt::layer()
                        .with_target(true)
                        .with_level(true)
                        .with_writer(std::io::stderr),
                )
                .init();
        }
    });
}
