//! Optional diagnostics for absent results.
//!
//! With the `tracing` feature enabled every accessor that produces no value
//! emits a `TRACE` event carrying the operation name. Without it this module
//! compiles down to the identity function.

#[cfg(feature = "tracing")]
#[inline]
pub(crate) fn observe<T>(operation: &'static str, found: Option<T>) -> Option<T> {
    if found.is_none() {
        tracing::trace!(operation, "sequence access produced no value");
    }
    found
}

#[cfg(not(feature = "tracing"))]
#[inline]
pub(crate) const fn observe<T>(_operation: &'static str, found: Option<T>) -> Option<T> {
    found
}
