//! Small helpers showing that deferred arguments are only paid for when used.

use std::ops::Add;

use crate::Thunk;

/// Deferred addition: forces `a`, then `b`, on every force of the result.
pub fn lazy_sum<T>(a: Thunk<T>, b: Thunk<T>) -> Thunk<T>
where
    T: Add<Output = T> + 'static,
{
    Thunk::new(move || a.force() + b.force())
}

/// Returns `a` untouched. `b` is dropped without ever being forced.
pub fn lazy_first<T>(a: Thunk<T>, _b: Thunk<T>) -> Thunk<T> {
    a
}

/// Never returns.
///
/// Only meaningful inside a thunk that must stay unforced, e.g.
/// `Thunk::new(hang::<i64>)`.
pub fn hang<T>() -> T {
    loop {
        std::hint::spin_loop();
    }
}
