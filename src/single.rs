//! Single accessor - the sole element of a sequence.
//!
//! A sequence with no elements and a sequence with several elements fail in
//! the same way, with the same error. Callers that must tell "none" from
//! "ambiguous" need a different operation.
//!
//! # Examples
//!
//! ```rust
//! use seqaccess::Single;
//!
//! assert_eq!(vec![42].single_or_error(), Ok(42));
//!
//! let empty = Vec::<i32>::new().single_or_error().unwrap_err();
//! let ambiguous = vec![1, 2].single_or_error().unwrap_err();
//! assert_eq!(empty, ambiguous);
//!
//! assert_eq!(vec![1, 2, 3].maybe_single_where(|element| *element > 2), Some(3));
//! ```

use std::borrow::Cow;

use crate::error::AccessError;
use crate::trace::observe;
use crate::traversal::exactly_one;

/// Extension trait retrieving the only element of any [`IntoIterator`].
///
/// The unfiltered forms stop after pulling a second element. The filtered
/// forms keep scanning for a second match, so they walk the whole sequence
/// when the answer is "exactly one".
pub trait Single: IntoIterator + Sized {
    // =========================================================================
    // Whole sequence
    // =========================================================================

    /// Returns the only element, or `None` if the sequence has zero or more
    /// than one element.
    fn maybe_single(self) -> Option<Self::Item> {
        observe("single", exactly_one(self.into_iter()))
    }

    /// Returns the only element, or fails with
    /// `"Sequence does not contain exactly one element"`.
    ///
    /// # Errors
    ///
    /// Returns [`AccessError::not_exactly_one`] if the sequence is empty or
    /// has more than one element.
    fn single_or_error(self) -> Result<Self::Item, AccessError> {
        self.maybe_single().ok_or_else(AccessError::not_exactly_one)
    }

    /// Returns the only element, or fails with the given message.
    ///
    /// # Errors
    ///
    /// Returns an [`AccessError`] carrying `message` if the sequence is empty
    /// or has more than one element.
    fn single_or_message(self, message: impl Into<Cow<'static, str>>) -> Result<Self::Item, AccessError> {
        self.single_ok_or(AccessError::new(message))
    }

    /// Returns the only element, or fails with `error`.
    ///
    /// # Errors
    ///
    /// Returns `error` if the sequence is empty or has more than one element.
    fn single_ok_or<E>(self, error: E) -> Result<Self::Item, E> {
        self.maybe_single().ok_or(error)
    }

    /// Returns the only element, or fails with the error produced by
    /// `error_factory`.
    ///
    /// # Errors
    ///
    /// Returns the result of `error_factory` if the sequence is empty or has
    /// more than one element. The factory is not called on success.
    fn single_ok_or_else<E, F>(self, error_factory: F) -> Result<Self::Item, E>
    where
        F: FnOnce() -> E,
    {
        self.maybe_single().ok_or_else(error_factory)
    }

    // =========================================================================
    // Filtered by predicate
    // =========================================================================

    /// Returns the only element accepted by `predicate`, or `None` if zero or
    /// several elements match.
    fn maybe_single_where<P>(self, predicate: P) -> Option<Self::Item>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        observe("single_where", exactly_one(self.into_iter().filter(predicate)))
    }

    /// Returns the only element accepted by `predicate`, or fails with
    /// `"Sequence does not contain exactly one element"`.
    ///
    /// # Errors
    ///
    /// Returns [`AccessError::not_exactly_one`] if zero or several elements
    /// match.
    fn single_where_or_error<P>(self, predicate: P) -> Result<Self::Item, AccessError>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        self.maybe_single_where(predicate)
            .ok_or_else(AccessError::not_exactly_one)
    }

    /// Returns the only element accepted by `predicate`, or fails with the
    /// given message.
    ///
    /// # Errors
    ///
    /// Returns an [`AccessError`] carrying `message` if zero or several
    /// elements match.
    fn single_where_or_message<P>(
        self,
        predicate: P,
        message: impl Into<Cow<'static, str>>,
    ) -> Result<Self::Item, AccessError>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        self.single_where_ok_or(predicate, AccessError::new(message))
    }

    /// Returns the only element accepted by `predicate`, or fails with
    /// `error`.
    ///
    /// # Errors
    ///
    /// Returns `error` if zero or several elements match.
    fn single_where_ok_or<P, E>(self, predicate: P, error: E) -> Result<Self::Item, E>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        self.maybe_single_where(predicate).ok_or(error)
    }

    /// Returns the only element accepted by `predicate`, or fails with the
    /// error produced by `error_factory`.
    ///
    /// # Errors
    ///
    /// Returns the result of `error_factory` if zero or several elements
    /// match.
    fn single_where_ok_or_else<P, E, F>(self, predicate: P, error_factory: F) -> Result<Self::Item, E>
    where
        P: FnMut(&Self::Item) -> bool,
        F: FnOnce() -> E,
    {
        self.maybe_single_where(predicate).ok_or_else(error_factory)
    }
}

impl<S: IntoIterator> Single for S {}
