// Test code uses unwrap/expect for clarity - panics provide good test failure messages
#![allow(clippy::unwrap_used, clippy::expect_used)]

//! Phase-based end-to-end tests.
//!
//! Every test drives whole programs through [`loxc::Session`], so the
//! lexer, parser, and interpreter run together exactly as the binary runs
//! them. Tests are grouped by the phase whose behavior they pin down.
//!
//! - `parse/` - syntax errors, recovery, and the AST printers
//! - `eval/` - program output, runtime errors, and session state
//! - `common/` - shared helpers
//!
//! ```bash
//! cargo test -p loxc --test phases
//! cargo test -p loxc --test phases eval
//! ```

#[path = "phases/common/mod.rs"]
mod common;

#[path = "phases/parse/mod.rs"]
mod parse;

#[path = "phases/eval/mod.rs"]
mod eval;
