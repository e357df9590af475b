//! Stack growth for deep recursion.
//!
//! Both the collector (one frame per open delimiter) and the evaluator (one
//! frame per nested node, plus closure calls) recurse on the host stack.
//! Wrapping those entry points in [`ensure_sufficient_stack`] lets deeply
//! nested programs run on a segmented stack instead of overflowing.
//!
//! Recursion *bounds* are a separate concern: the interpreter enforces its
//! own maximum depth and reports it as an ordinary error value.

/// Grow when less than this much stack remains.
const RED_ZONE: usize = 128 * 1024;

/// Size of each newly allocated stack segment.
const SEGMENT_SIZE: usize = 2 * 1024 * 1024;

/// Run `f`, first allocating a fresh stack segment if the current one is
/// close to exhaustion.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, SEGMENT_SIZE, f)
}

/// WASM manages its own stack; call through.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
