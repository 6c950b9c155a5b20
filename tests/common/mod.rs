//! Shared sources and probes for the accessor tests.

#![allow(dead_code)]

use std::cell::Cell;
use std::rc::Rc;

/// A single-use, forward-only source that produces `values` one at a time,
/// like a generator. It has no size hint and cannot be restarted.
pub fn generated<T>(values: Vec<T>) -> impl Iterator<Item = T> {
    let mut remaining = values.into_iter();
    std::iter::from_fn(move || remaining.next())
}

/// An endless source counting up from zero.
pub fn naturals() -> impl Iterator<Item = u64> {
    let mut next = 0;
    std::iter::from_fn(move || {
        let current = next;
        next += 1;
        Some(current)
    })
}

/// Counts how often an error factory was invoked.
#[derive(Default)]
pub struct CallCounter {
    calls: Cell<usize>,
}

impl CallCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn factory(&self, error: &'static str) -> impl FnOnce() -> &'static str {
        move || {
            self.calls.set(self.calls.get() + 1);
            error
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.get()
    }
}

/// A cursor that records when it is dropped and how many elements it handed out.
pub struct TrackedCursor<I> {
    inner: I,
    probe: Rc<CursorProbe>,
}

#[derive(Default)]
pub struct CursorProbe {
    pulled: Cell<usize>,
    released: Cell<bool>,
}

impl CursorProbe {
    pub fn pulled(&self) -> usize {
        self.pulled.get()
    }

    pub fn released(&self) -> bool {
        self.released.get()
    }
}

pub fn tracked<I: IntoIterator>(source: I) -> (TrackedCursor<I::IntoIter>, Rc<CursorProbe>) {
    let probe = Rc::new(CursorProbe::default());
    (
        TrackedCursor {
            inner: source.into_iter(),
            probe: Rc::clone(&probe),
        },
        probe,
    )
}

impl<I: Iterator> Iterator for TrackedCursor<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        let element = self.inner.next();
        if element.is_some() {
            self.probe.pulled.set(self.probe.pulled.get() + 1);
        }
        element
    }
}

impl<I> Drop for TrackedCursor<I> {
    fn drop(&mut self) {
        self.probe.released.set(true);
    }
}
