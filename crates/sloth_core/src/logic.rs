//! Short-circuiting boolean combinators over deferred operands.
//!
//! Both combinators force the left operand first and touch the right
//! operand only when the left one does not already decide the result.

use crate::Thunk;

/// Deferred conjunction. `b` is forced only if `a` is true.
pub fn and(a: Thunk<bool>, b: Thunk<bool>) -> Thunk<bool> {
    Thunk::new(move || {
        if !a.force() {
            return false;
        }
        b.force()
    })
}

/// Deferred disjunction. `b` is forced only if `a` is false.
pub fn or(a: Thunk<bool>, b: Thunk<bool>) -> Thunk<bool> {
    Thunk::new(move || {
        if a.force() {
            return true;
        }
        b.force()
    })
}
