//! Force-counting thunks shared by the unit tests.

use std::cell::Cell;
use std::rc::Rc;

use crate::Thunk;

/// Counts how many times a thunk built by [`counted`] has been forced.
#[derive(Clone, Default)]
pub(crate) struct ForceCounter(Rc<Cell<usize>>);

impl ForceCounter {
    pub(crate) fn get(&self) -> usize {
        self.0.get()
    }

    fn bump(&self) {
        self.0.set(self.0.get() + 1);
    }
}

/// A thunk returning `value`, paired with a counter of its forces.
pub(crate) fn counted<T: Clone + 'static>(value: T) -> (Thunk<T>, ForceCounter) {
    let counter = ForceCounter::default();
    let tally = counter.clone();
    let thunk = Thunk::new(move || {
        tally.bump();
        value.clone()
    });
    (thunk, counter)
}

/// A thunk that fails the test if anything ever forces it.
pub(crate) fn untouchable<T>() -> Thunk<T> {
    Thunk::new(|| panic!("thunk must not be forced"))
}
