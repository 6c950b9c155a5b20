//! Materialization of an arbitrary sequence into a `Vec`.

/// Collects `source` into an ordered `Vec`, traversing it at most once.
///
/// - An owned `Vec<T>` passes through without copying: collecting an
///   unadvanced `vec::IntoIter<T>` hands back the original allocation.
/// - A source with an exact size hint is collected into a single
///   allocation of that size.
/// - Anything else is consumed and collected with amortized growth.
///
/// The result is exclusively owned by the caller, except that in the
/// pass-through case it is the caller's own buffer handed back.
pub(crate) fn materialize<S>(source: S) -> Vec<S::Item>
where
    S: IntoIterator,
{
    // Must stay a direct collect of `S::IntoIter`; wrapping the iterator
    // defeats the in-place reuse of `vec::IntoIter` buffers.
    source.into_iter().collect()
}
