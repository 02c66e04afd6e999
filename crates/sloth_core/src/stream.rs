//! Pull-based lazy lists.
//!
//! A [`Stream`] is a thunk that, when forced, yields either `None` (no more
//! elements) or a [`Node`] holding a deferred head and an unforced tail.
//! Nothing is cached: forcing the same stream twice rebuilds the node.
//!
//! Recursion lives only inside the deferred closures, never in stored data,
//! which is what lets `range` and `sieve` describe infinite lists.

use std::fmt;

use crate::Thunk;

/// A possibly infinite lazy list of `T`.
pub struct Stream<T> {
    step: Thunk<Option<Node<T>>>,
}

/// One forced cell of a [`Stream`].
///
/// Head and tail are independent: forcing one never forces the other.
pub struct Node<T> {
    head: Thunk<T>,
    tail: Stream<T>,
}

impl<T> Stream<T> {
    /// Defer `step` as the construction of this stream's first node.
    pub fn new(step: impl Fn() -> Option<Node<T>> + 'static) -> Self {
        Stream {
            step: Thunk::new(step),
        }
    }

    /// The stream with no elements.
    pub fn empty() -> Self
    where
        T: 'static,
    {
        Stream::new(|| None)
    }

    /// Build (again) this stream's first node.
    #[inline]
    pub fn force(&self) -> Option<Node<T>> {
        self.step.force()
    }

    /// Realize the whole stream, handing each element to `consume` in order.
    ///
    /// Terminates only if the stream is finite (or truncated upstream, e.g.
    /// by `take`).
    pub fn for_each(&self, mut consume: impl FnMut(T)) {
        let mut pair = self.force();
        while let Some(node) = pair {
            consume(node.head.force());
            pair = node.tail.force();
        }
    }

    /// Realize the whole stream into a vector.
    pub fn to_vec(&self) -> Vec<T> {
        let mut out = Vec::new();
        self.for_each(|x| out.push(x));
        out
    }
}

impl<T> From<Thunk<Option<Node<T>>>> for Stream<T> {
    fn from(step: Thunk<Option<Node<T>>>) -> Self {
        Stream { step }
    }
}

impl<T> Clone for Stream<T> {
    fn clone(&self) -> Self {
        Stream {
            step: self.step.clone(),
        }
    }
}

impl<T> fmt::Debug for Stream<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Stream(<deferred>)")
    }
}

impl<T> Node<T> {
    pub fn new(head: Thunk<T>, tail: Stream<T>) -> Self {
        Node { head, tail }
    }

    pub fn head(&self) -> &Thunk<T> {
        &self.head
    }

    pub fn tail(&self) -> &Stream<T> {
        &self.tail
    }

    pub fn into_parts(self) -> (Thunk<T>, Stream<T>) {
        (self.head, self.tail)
    }
}

impl<T> fmt::Debug for Node<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("head", &self.head)
            .field("tail", &self.tail)
            .finish()
    }
}
