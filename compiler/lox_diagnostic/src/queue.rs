//! Diagnostic queue for one interpreter session.
//!
//! Replaces ambient "had error" globals: the session owns a queue, every
//! stage pushes into it, and the driver reads the two flags afterwards to
//! pick an exit status.

use crate::Diagnostic;

/// Collected diagnostics plus the compile/runtime failure flags.
#[derive(Debug, Default)]
pub struct DiagnosticQueue {
    diagnostics: Vec<Diagnostic>,
    had_error: bool,
    had_runtime_error: bool,
}

impl DiagnosticQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a diagnostic and raise the flag for its phase.
    ///
    /// Internal errors count as runtime failures: they only arise while
    /// executing.
    pub fn push(&mut self, diagnostic: Diagnostic) {
        if diagnostic.is_compile_error() {
            self.had_error = true;
        } else {
            self.had_runtime_error = true;
        }
        self.diagnostics.push(diagnostic);
    }

    pub fn extend(&mut self, diagnostics: impl IntoIterator<Item = Diagnostic>) {
        for diagnostic in diagnostics {
            self.push(diagnostic);
        }
    }

    /// A lexical or parse error was recorded.
    pub fn had_error(&self) -> bool {
        self.had_error
    }

    /// A runtime (or internal) error was recorded.
    pub fn had_runtime_error(&self) -> bool {
        self.had_runtime_error
    }

    /// Clear the compile-error flag, leaving the runtime flag alone.
    ///
    /// Interactive mode calls this between lines so that one bad line does
    /// not block the next.
    pub fn reset_compile_error(&mut self) {
        self.had_error = false;
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Remove and return all pending diagnostics. Flags are untouched.
    pub fn take(&mut self) -> Vec<Diagnostic> {
        std::mem::take(&mut self.diagnostics)
    }

    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }
}
