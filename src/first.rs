//! First accessor - the head of a sequence as a total result.
//!
//! # Examples
//!
//! ```rust
//! use seqaccess::First;
//!
//! assert_eq!(vec![10, 20, 30].first_or_error(), Ok(10));
//! assert_eq!(Vec::<i32>::new().maybe_first(), None);
//!
//! // Infinite sources are fine: at most one element is consumed.
//! assert_eq!((1..).maybe_first(), Some(1));
//! ```

use std::borrow::Cow;

use crate::error::AccessError;
use crate::trace::observe;
use crate::traversal::{any, nth_matching};

/// Extension trait retrieving the first element of any [`IntoIterator`].
///
/// Consumes at most one element of the source.
pub trait First: IntoIterator + Sized {
    /// Returns the first element, or `None` if the sequence is empty.
    fn maybe_first(self) -> Option<Self::Item> {
        observe("first", nth_matching(self.into_iter(), 0, any))
    }

    /// Returns the first element, or fails with
    /// `"Sequence contains no elements"`.
    ///
    /// # Errors
    ///
    /// Returns [`AccessError::no_elements`] if the sequence is empty.
    fn first_or_error(self) -> Result<Self::Item, AccessError> {
        self.maybe_first().ok_or_else(AccessError::no_elements)
    }

    /// Returns the first element, or fails with the given message.
    ///
    /// # Errors
    ///
    /// Returns an [`AccessError`] carrying `message` if the sequence is empty.
    fn first_or_message(self, message: impl Into<Cow<'static, str>>) -> Result<Self::Item, AccessError> {
        self.first_ok_or(AccessError::new(message))
    }

    /// Returns the first element, or fails with `error`.
    ///
    /// # Errors
    ///
    /// Returns `error` if the sequence is empty.
    fn first_ok_or<E>(self, error: E) -> Result<Self::Item, E> {
        self.maybe_first().ok_or(error)
    }

    /// Returns the first element, or fails with the error produced by
    /// `error_factory`.
    ///
    /// `error_factory` runs only when the sequence is empty.
    ///
    /// # Errors
    ///
    /// Returns the result of `error_factory` if the sequence is empty.
    fn first_ok_or_else<E, F>(self, error_factory: F) -> Result<Self::Item, E>
    where
        F: FnOnce() -> E,
    {
        self.maybe_first().ok_or_else(error_factory)
    }
}

impl<S: IntoIterator> First for S {}
