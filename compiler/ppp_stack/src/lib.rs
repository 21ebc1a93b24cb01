//! Stack growth for recursive tree walks.
//!
//! Expression trees come straight from user input, so their depth is
//! unbounded: a line of ten thousand `!` tokens reduces to a chain ten
//! thousand nodes deep. Recursive walks over such a chain wrap each step in
//! [`ensure_sufficient_stack`], which grows the native stack on demand.
//!
//! - **Native targets**: `stacker::maybe_grow`.
//! - **WASM targets**: plain call.

/// Grow when less than this much stack is left (128KB).
const RED_ZONE: usize = 128 * 1024;

/// Size of each newly allocated stack segment (2MB).
const SEGMENT_SIZE: usize = 2 * 1024 * 1024;

/// Run `f`, first growing the stack if fewer than [`RED_ZONE`] bytes remain.
///
/// ```text
/// fn walk(forest: &Forest, id: ExprId, out: &mut Vec<ExprId>) {
///     ensure_sufficient_stack(|| {
///         if let Some(left) = forest.node(id).left() {
///             walk(forest, left, out);
///         }
///         out.push(id);
///     });
/// }
/// ```
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, SEGMENT_SIZE, f)
}

#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
