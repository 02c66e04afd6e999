//! Lazy stream transformers: bounded `take`, `filter`, and the prime `sieve`.
//!
//! None of these hold state outside their closures. Every one of them does
//! its work only when the stream it returns is forced, and then only as
//! far as one node.

use std::rc::Rc;

use sloth_stack::ensure_sufficient_stack;
use tracing::trace;

use crate::{Node, Stream, Thunk};

type Predicate<T> = Rc<dyn Fn(&T) -> bool>;

/// At most `n` elements of `xs`.
///
/// Each forcing of the result forces `n`, then `xs`, in that order, even
/// when `n` is not positive. The result is empty once the count runs out
/// or the source does, so a source shorter than `n` ends the result early.
pub fn take<T: 'static>(n: Thunk<i64>, xs: Stream<T>) -> Stream<T> {
    Stream::new(move || {
        let remaining = n.force();
        let pair = xs.force();
        if remaining <= 0 {
            return None;
        }
        let (head, tail) = pair?.into_parts();
        trace!(remaining, "take");
        Some(Node::new(
            head,
            take(Thunk::new(move || remaining - 1), tail),
        ))
    })
}

/// The elements of `xs` satisfying `predicate`.
///
/// Forcing the result forces heads of `xs` until one passes, so a
/// predicate that no element of an infinite stream satisfies makes the
/// force run forever.
pub fn filter<T>(predicate: impl Fn(&T) -> bool + 'static, xs: Stream<T>) -> Stream<T>
where
    T: Clone + 'static,
{
    filter_shared(Rc::new(predicate), xs)
}

fn filter_shared<T>(predicate: Predicate<T>, xs: Stream<T>) -> Stream<T>
where
    T: Clone + 'static,
{
    Stream::new(move || {
        // Rejections recurse into the next stage within this same force.
        ensure_sufficient_stack(|| {
            let (head, tail) = xs.force()?.into_parts();
            let x = head.force();
            if predicate(&x) {
                Some(Node::new(
                    Thunk::value(x),
                    filter_shared(Rc::clone(&predicate), tail),
                ))
            } else {
                trace!("filter rejected element");
                filter_shared(Rc::clone(&predicate), tail).force()
            }
        })
    })
}

/// Lazy Sieve of Eratosthenes.
///
/// Each head `y` becomes an output element and the rest of `xs` is passed
/// through one more `filter` removing multiples of `y`. Fed
/// `range(2)`, this yields the primes. A zero element panics (remainder
/// by zero) when the next element is checked against it.
pub fn sieve(xs: Stream<i64>) -> Stream<i64> {
    Stream::new(move || {
        ensure_sufficient_stack(|| {
            let (head, tail) = xs.force()?.into_parts();
            let y = head.force();
            trace!(prime = y, "sieve");
            Some(Node::new(
                Thunk::value(y),
                sieve(filter(move |x: &i64| x % y != 0, tail)),
            ))
        })
    })
}
