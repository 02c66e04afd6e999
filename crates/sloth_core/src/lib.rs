//! Sloth Core - deferred computation without memoization.
//!
//! This crate provides:
//! - [`Thunk`]: a zero-argument computation re-run on every force
//! - [`and`] / [`or`]: short-circuiting combinators over deferred booleans
//! - [`Stream`] / [`Node`]: pull-based, possibly infinite lazy lists
//! - [`from_sequence`] / [`range`]: finite and infinite stream sources
//! - [`take`] / [`filter`] / [`sieve`]: lazy stream transformers
//! - [`Sink`], [`trace`], [`print_stream`]: observing when things are forced
//!
//! # Evaluation model
//!
//! Everything is single-threaded and synchronous. Building a thunk or a
//! stream never evaluates anything; forcing runs the deferred computation
//! to completion (or forever) before returning. Nothing is cached, so
//! forcing twice does the work twice. Panics raised inside a deferred
//! computation propagate unchanged to whoever forced it.
//!
//! ```
//! use sloth_core::{range, sieve, take, Thunk};
//!
//! let primes = take(Thunk::value(5), sieve(range(Thunk::value(2))));
//! assert_eq!(primes.to_vec(), vec![2, 3, 5, 7, 11]);
//! ```

mod combinators;
mod constructors;
mod laziness;
mod logic;
mod sink;
mod stream;
mod thunk;
mod trace;

#[cfg(test)]
mod test_helpers;

pub use combinators::{filter, sieve, take};
pub use constructors::{from_sequence, range};
pub use laziness::{hang, lazy_first, lazy_sum};
pub use logic::{and, or};
pub use sink::{buffer_sink, silent_sink, stdout_sink, SharedSink, Sink};
pub use stream::{Node, Stream};
pub use thunk::{force, Thunk};
pub use trace::{print_stream, trace};
