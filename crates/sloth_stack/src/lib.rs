//! Stack guard for deeply nested forcing.
//!
//! Forcing a lazy stream can recurse far deeper than the source code
//! suggests: every `filter` stage forces the stage below it, and a sieve
//! that has found `k` primes sits on top of `k` such stages. Rejected
//! elements recurse again inside the same force. Each of those frames lives
//! on the native stack, so long chains need room to grow.
//!
//! # Platform Support
//!
//! - **Native targets**: `stacker` allocates a fresh segment when the
//!   remaining stack drops below the red zone.
//! - **WASM targets**: plain passthrough.
//!
//! # Usage
//!
//! ```text
//! Stream::new(move || {
//!     ensure_sufficient_stack(|| {
//!         // ... force the upstream stage ...
//!     })
//! })
//! ```

/// Remaining stack below which a new segment is allocated (100KB).
const RED_ZONE: usize = 100 * 1024;

/// Size of each freshly allocated stack segment (1MB).
const SEGMENT_SIZE: usize = 1024 * 1024;

/// Run `f`, first growing the stack if less than the red zone remains.
///
/// Wrap any forcing step that may recurse into another forcing step.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, SEGMENT_SIZE, f)
}

/// WASM version: no stack switching available, call directly.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
