//! Observation helpers for watching when things get forced.

use std::fmt::Display;

use crate::{SharedSink, Stream, Thunk};

/// Wrap `x` so that every force first writes `message` to `sink`.
///
/// The message is written exactly once per force, immediately before `x`
/// itself is forced, and never at construction.
pub fn trace<T: 'static>(x: Thunk<T>, message: impl Into<String>, sink: &SharedSink) -> Thunk<T> {
    let message = message.into();
    let sink = SharedSink::clone(sink);
    Thunk::new(move || {
        sink.write_line(&message);
        x.force()
    })
}

/// Realize `xs`, writing one element per line.
pub fn print_stream<T: Display>(sink: &SharedSink, xs: &Stream<T>) {
    xs.for_each(|x| sink.write_line(&x.to_string()));
}

#[cfg(test)]
mod tests;
