//! Stack growth for recursive descent and tree-walking evaluation.
//!
//! Parsing `((((...))))` and evaluating a deeply recursive Lox function both
//! recurse on the native stack once per nesting level. Wrapping each
//! recursive entry point in [`ensure_sufficient_stack`] lets those paths
//! grow onto fresh heap-allocated segments instead of overflowing.
//!
//! There is no depth limit: a runaway Lox recursion keeps growing until the
//! host runs out of memory.

/// Grow when less than this much stack remains.
const RED_ZONE: usize = 128 * 1024;

/// Size of each newly allocated stack segment.
const SEGMENT_SIZE: usize = 2 * 1024 * 1024;

/// Run `f`, first switching to a new stack segment if the current one is
/// nearly exhausted.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, SEGMENT_SIZE, f)
}

/// WASM manages its own stack; call straight through.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
