//! Stack safety for deep recursion.
//!
//! Expression parsing descends once per nesting level and symbol expansion
//! re-enters the parser for every referenced parameter, so a pathological
//! expression like `((((...))))` or a long chain of parameters defined in
//! terms of each other can exhaust the native stack long before any logical
//! limit is hit.
//!
//! # Platform Support
//!
//! - **Native targets**: `stacker` grows the stack on demand.
//! - **WASM targets**: no-op passthrough.
//!
//! # Configuration
//!
//! - **Red zone**: 64KB. If less than this remains, the stack is grown.
//! - **Growth size**: 1MB per growth.

/// Minimum stack space to keep available.
const RED_ZONE: usize = 64 * 1024;

/// Stack space to allocate when growing.
const STACK_PER_RECURSION: usize = 1024 * 1024;

/// Run `f`, growing the stack first if less than the red zone remains.
///
/// ```text
/// fn parse_unary(&mut self) -> Result<ExprId, ParseError> {
///     ensure_sufficient_stack(|| {
///         // ... recursive descent ...
///     })
/// }
/// ```
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}

/// WASM version, calls `f` directly.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
