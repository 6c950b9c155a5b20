//! `ToNonEmptyList` accessor - the whole sequence, provided it is not empty.
//!
//! # Examples
//!
//! ```rust
//! use seqaccess::ToNonEmpty;
//!
//! assert_eq!((1..=3).to_non_empty_list_or_error(), Ok(vec![1, 2, 3]));
//! assert!(std::iter::empty::<i32>().to_non_empty_list_or_error().is_err());
//! ```

use std::borrow::Cow;

use crate::error::AccessError;
use crate::materialize::materialize;
use crate::trace::observe;

/// Extension trait materializing any [`IntoIterator`] into a `Vec` that is
/// known to hold at least one element.
///
/// An owned `Vec` is handed back without copying. Not suitable for infinite
/// sources.
pub trait ToNonEmpty: IntoIterator + Sized {
    /// Returns every element in source order, or `None` if there are none.
    fn maybe_to_non_empty_list(self) -> Option<Vec<Self::Item>> {
        let list = materialize(self);
        observe("to_non_empty_list", (!list.is_empty()).then_some(list))
    }

    /// Returns every element in source order, or fails with
    /// `"Sequence contains no elements"`.
    ///
    /// # Errors
    ///
    /// Returns [`AccessError::no_elements`] if the sequence is empty.
    fn to_non_empty_list_or_error(self) -> Result<Vec<Self::Item>, AccessError> {
        self.maybe_to_non_empty_list()
            .ok_or_else(AccessError::no_elements)
    }

    /// Returns every element in source order, or fails with the given
    /// message.
    ///
    /// # Errors
    ///
    /// Returns an [`AccessError`] carrying `message` if the sequence is empty.
    fn to_non_empty_list_or_message(
        self,
        message: impl Into<Cow<'static, str>>,
    ) -> Result<Vec<Self::Item>, AccessError> {
        self.to_non_empty_list_ok_or(AccessError::new(message))
    }

    /// Returns every element in source order, or fails with `error`.
    ///
    /// # Errors
    ///
    /// Returns `error` if the sequence is empty.
    fn to_non_empty_list_ok_or<E>(self, error: E) -> Result<Vec<Self::Item>, E> {
        self.maybe_to_non_empty_list().ok_or(error)
    }

    /// Returns every element in source order, or fails with the error
    /// produced by `error_factory`.
    ///
    /// # Errors
    ///
    /// Returns the result of `error_factory` if the sequence is empty. The
    /// factory is not called otherwise.
    fn to_non_empty_list_ok_or_else<E, F>(self, error_factory: F) -> Result<Vec<Self::Item>, E>
    where
        F: FnOnce() -> E,
    {
        self.maybe_to_non_empty_list().ok_or_else(error_factory)
    }
}

impl<S: IntoIterator> ToNonEmpty for S {}
