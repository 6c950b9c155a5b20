//! Single-pass scan primitives shared by the accessor families.
//!
//! Each primitive takes ownership of the cursor, so the cursor is dropped
//! when the primitive returns, whichever branch returns and whether or not
//! a predicate or the source itself panics mid-scan.

/// Returns the element at zero-based position `index` among the elements
/// accepted by `predicate`.
///
/// Consumes elements only up to and including the one returned, so it is
/// safe on infinite cursors as long as enough matches exist.
pub(crate) fn nth_matching<I, P>(cursor: I, index: usize, mut predicate: P) -> Option<I::Item>
where
    I: Iterator,
    P: FnMut(&I::Item) -> bool,
{
    let mut remaining = index;
    for element in cursor {
        if predicate(&element) {
            if remaining == 0 {
                return Some(element);
            }
            remaining -= 1;
        }
    }
    None
}

/// Returns the only element of `cursor`, or `None` when it yields zero or
/// more than one element.
///
/// Advances at most twice.
pub(crate) fn exactly_one<I>(mut cursor: I) -> Option<I::Item>
where
    I: Iterator,
{
    let single = cursor.next()?;
    match cursor.next() {
        Some(_) => None,
        None => Some(single),
    }
}

/// Returns the last element accepted by `predicate`, retaining only the most
/// recent match while streaming.
pub(crate) fn last_matching<I, P>(cursor: I, mut predicate: P) -> Option<I::Item>
where
    I: Iterator,
    P: FnMut(&I::Item) -> bool,
{
    cursor.fold(None, |last, element| {
        if predicate(&element) {
            Some(element)
        } else {
            last
        }
    })
}

/// Predicate accepting every element.
#[inline]
pub(crate) const fn any<T>(_element: &T) -> bool {
    true
}
