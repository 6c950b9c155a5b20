//! `ElementAt` accessor - positional lookup without materialization.
//!
//! The index is any integer convertible to `usize`. Indices that do not
//! convert (negative values, for instance) are rejected before the source is
//! turned into a cursor, and fail exactly like an index past the end.
//!
//! # Examples
//!
//! ```rust
//! use seqaccess::ElementAt;
//!
//! let letters = vec!['a', 'b', 'c'];
//!
//! assert_eq!(letters.clone().element_at_or_error(1), Ok('b'));
//! assert_eq!(letters.clone().maybe_element_at(3), None);
//! assert_eq!(letters.maybe_element_at(-1), None);
//!
//! // Only `index + 1` elements are consumed.
//! assert_eq!((0..).map(|n| n * n).maybe_element_at(5), Some(25));
//! ```

use std::borrow::Cow;

use crate::error::AccessError;
use crate::trace::observe;
use crate::traversal::{any, nth_matching};

/// Extension trait retrieving the element at a zero-based index of any
/// [`IntoIterator`].
pub trait ElementAt: IntoIterator + Sized {
    /// Returns the element at `index`, or `None` if the index is negative or
    /// past the end of the sequence.
    fn maybe_element_at<N>(self, index: N) -> Option<Self::Item>
    where
        N: TryInto<usize>,
    {
        let found = TryInto::<usize>::try_into(index)
            .ok()
            .and_then(|index| nth_matching(self.into_iter(), index, any));
        observe("element_at", found)
    }

    /// Returns the element at `index`, or fails with `"Element not found"`.
    ///
    /// # Errors
    ///
    /// Returns [`AccessError::element_not_found`] if the index is negative
    /// or past the end of the sequence.
    fn element_at_or_error<N>(self, index: N) -> Result<Self::Item, AccessError>
    where
        N: TryInto<usize>,
    {
        self.maybe_element_at(index)
            .ok_or_else(AccessError::element_not_found)
    }

    /// Returns the element at `index`, or fails with the given message.
    ///
    /// # Errors
    ///
    /// Returns an [`AccessError`] carrying `message` if the index is
    /// negative or past the end of the sequence.
    fn element_at_or_message<N>(
        self,
        index: N,
        message: impl Into<Cow<'static, str>>,
    ) -> Result<Self::Item, AccessError>
    where
        N: TryInto<usize>,
    {
        self.element_at_ok_or(index, AccessError::new(message))
    }

    /// Returns the element at `index`, or fails with `error`.
    ///
    /// # Errors
    ///
    /// Returns `error` if the index is negative or past the end of the
    /// sequence.
    fn element_at_ok_or<N, E>(self, index: N, error: E) -> Result<Self::Item, E>
    where
        N: TryInto<usize>,
    {
        self.maybe_element_at(index).ok_or(error)
    }

    /// Returns the element at `index`, or fails with the error produced by
    /// `error_factory`.
    ///
    /// # Errors
    ///
    /// Returns the result of `error_factory` if the index is negative or
    /// past the end of the sequence. The factory is not called when the
    /// element is found.
    fn element_at_ok_or_else<N, E, F>(self, index: N, error_factory: F) -> Result<Self::Item, E>
    where
        N: TryInto<usize>,
        F: FnOnce() -> E,
    {
        self.maybe_element_at(index).ok_or_else(error_factory)
    }
}

impl<S: IntoIterator> ElementAt for S {}
