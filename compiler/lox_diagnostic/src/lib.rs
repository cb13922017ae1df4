//! Diagnostic system for error reporting.
//!
//! Every stage converts its own typed errors into a [`Diagnostic`]:
//! - an [`ErrorCode`] whose first digit names the phase
//! - the source line
//! - a [`Location`] (`at 'lexeme'`, `at end`, or none)
//! - a message
//!
//! A [`DiagnosticQueue`] collects them for one session and answers the two
//! questions a driver asks after a run: did compilation fail, and did
//! execution fail.

mod diagnostic;
pub mod emitter;
mod error_code;
pub mod queue;

pub use diagnostic::{Diagnostic, Location};
pub use error_code::ErrorCode;
pub use queue::DiagnosticQueue;
