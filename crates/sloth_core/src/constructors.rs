//! Finite and infinite stream sources.

use crate::{Node, Stream, Thunk};

/// A finite stream over `elements`, in order.
///
/// Each forced node copies the remaining elements into its own tail, so no
/// two nodes share a backing buffer.
pub fn from_sequence<T>(elements: impl IntoIterator<Item = T>) -> Stream<T>
where
    T: Clone + 'static,
{
    let elements: Vec<T> = elements.into_iter().collect();
    Stream::new(move || {
        let (first, rest) = elements.split_first()?;
        Some(Node::new(
            Thunk::value(first.clone()),
            from_sequence(rest.to_vec()),
        ))
    })
}

/// The unbounded stream `start, start + 1, start + 2, ...`.
///
/// `start` is forced once per forcing of the returned stream; the node
/// built from it keeps that value for its head. Forcing the element after
/// `i64::MAX` panics in every build profile.
pub fn range(start: Thunk<i64>) -> Stream<i64> {
    Stream::new(move || {
        let x = start.force();
        tracing::trace!(x, "range node");
        let next = Thunk::new(move || {
            x.checked_add(1)
                .unwrap_or_else(|| panic!("range stepped past i64::MAX"))
        });
        Some(Node::new(Thunk::value(x), range(next)))
    })
}
