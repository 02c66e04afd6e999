//! Deferred, repeatable, zero-argument computations.
//!
//! A [`Thunk`] is never memoized. Every [`Thunk::force`] re-runs the
//! captured closure, side effects included. Building a thunk never runs it.

use std::fmt;
use std::rc::Rc;

/// A deferred computation producing a `T` each time it is forced.
///
/// Cloning shares the computation (reference count bump); it does not
/// evaluate anything.
pub struct Thunk<T> {
    compute: Rc<dyn Fn() -> T>,
}

impl<T> Thunk<T> {
    /// Defer `compute` until the thunk is forced.
    pub fn new(compute: impl Fn() -> T + 'static) -> Self {
        Thunk {
            compute: Rc::new(compute),
        }
    }

    /// Run the deferred computation.
    ///
    /// Panics raised inside the computation propagate unchanged, and a
    /// computation that never returns makes this call never return.
    #[inline]
    pub fn force(&self) -> T {
        (self.compute)()
    }
}

impl<T: Clone + 'static> Thunk<T> {
    /// A thunk returning `value` on every force.
    pub fn value(value: T) -> Self {
        Thunk::new(move || value.clone())
    }
}

impl<T> Clone for Thunk<T> {
    fn clone(&self) -> Self {
        Thunk {
            compute: Rc::clone(&self.compute),
        }
    }
}

impl<T> fmt::Debug for Thunk<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Thunk(<deferred>)")
    }
}

/// Free-function form of [`Thunk::force`].
#[inline]
pub fn force<T>(thunk: &Thunk<T>) -> T {
    thunk.force()
}
