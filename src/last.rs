//! Last accessor - the tail element of a sequence, optionally filtered.
//!
//! Finding the last element always walks the whole sequence unless the
//! source knows its own end (slices and ranges do). Only the most recent
//! candidate is retained while streaming; the sequence is never buffered.
//!
//! # Examples
//!
//! ```rust
//! use seqaccess::Last;
//!
//! assert_eq!(vec![1, 2, 3].last_or_error(), Ok(3));
//! assert_eq!(vec![1, 2, 3].maybe_last_where(|element| *element > 3), None);
//! assert_eq!(vec![1, 2, 3, 4].maybe_last_where(|element| element % 2 == 1), Some(3));
//! ```

use std::borrow::Cow;

use crate::error::AccessError;
use crate::trace::observe;
use crate::traversal::last_matching;

/// Extension trait retrieving the last element of any [`IntoIterator`].
///
/// Not suitable for infinite sources.
pub trait Last: IntoIterator + Sized {
    // =========================================================================
    // Whole sequence
    // =========================================================================

    /// Returns the last element, or `None` if the sequence is empty.
    fn maybe_last(self) -> Option<Self::Item> {
        observe("last", self.into_iter().last())
    }

    /// Returns the last element, or fails with
    /// `"Sequence contains no elements"`.
    ///
    /// # Errors
    ///
    /// Returns [`AccessError::no_elements`] if the sequence is empty.
    fn last_or_error(self) -> Result<Self::Item, AccessError> {
        self.maybe_last().ok_or_else(AccessError::no_elements)
    }

    /// Returns the last element, or fails with the given message.
    ///
    /// # Errors
    ///
    /// Returns an [`AccessError`] carrying `message` if the sequence is empty.
    fn last_or_message(self, message: impl Into<Cow<'static, str>>) -> Result<Self::Item, AccessError> {
        self.last_ok_or(AccessError::new(message))
    }

    /// Returns the last element, or fails with `error`.
    ///
    /// # Errors
    ///
    /// Returns `error` if the sequence is empty.
    fn last_ok_or<E>(self, error: E) -> Result<Self::Item, E> {
        self.maybe_last().ok_or(error)
    }

    /// Returns the last element, or fails with the error produced by
    /// `error_factory`.
    ///
    /// # Errors
    ///
    /// Returns the result of `error_factory` if the sequence is empty. The
    /// factory is not called otherwise.
    fn last_ok_or_else<E, F>(self, error_factory: F) -> Result<Self::Item, E>
    where
        F: FnOnce() -> E,
    {
        self.maybe_last().ok_or_else(error_factory)
    }

    // =========================================================================
    // Filtered by predicate
    // =========================================================================

    /// Returns the last element accepted by `predicate`, or `None`.
    fn maybe_last_where<P>(self, predicate: P) -> Option<Self::Item>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        observe("last_where", last_matching(self.into_iter(), predicate))
    }

    /// Returns the last element accepted by `predicate`, or fails with
    /// `"Element not found"`.
    ///
    /// # Errors
    ///
    /// Returns [`AccessError::element_not_found`] if nothing matches.
    fn last_where_or_error<P>(self, predicate: P) -> Result<Self::Item, AccessError>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        self.maybe_last_where(predicate)
            .ok_or_else(AccessError::element_not_found)
    }

    /// Returns the last element accepted by `predicate`, or fails with the
    /// given message.
    ///
    /// # Errors
    ///
    /// Returns an [`AccessError`] carrying `message` if nothing matches.
    fn last_where_or_message<P>(
        self,
        predicate: P,
        message: impl Into<Cow<'static, str>>,
    ) -> Result<Self::Item, AccessError>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        self.last_where_ok_or(predicate, AccessError::new(message))
    }

    /// Returns the last element accepted by `predicate`, or fails with
    /// `error`.
    ///
    /// # Errors
    ///
    /// Returns `error` if nothing matches.
    fn last_where_ok_or<P, E>(self, predicate: P, error: E) -> Result<Self::Item, E>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        self.maybe_last_where(predicate).ok_or(error)
    }

    /// Returns the last element accepted by `predicate`, or fails with the
    /// error produced by `error_factory`.
    ///
    /// # Errors
    ///
    /// Returns the result of `error_factory` if nothing matches.
    fn last_where_ok_or_else<P, E, F>(self, predicate: P, error_factory: F) -> Result<Self::Item, E>
    where
        P: FnMut(&Self::Item) -> bool,
        F: FnOnce() -> E,
    {
        self.maybe_last_where(predicate).ok_or_else(error_factory)
    }
}

impl<S: IntoIterator> Last for S {}
