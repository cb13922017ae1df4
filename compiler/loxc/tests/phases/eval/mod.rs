//! Interpreter phase tests.
//!
//! - `programs` - whole-program output and runtime failures
//! - `session` - state carried across `Session::run` calls

mod programs;
mod session;
