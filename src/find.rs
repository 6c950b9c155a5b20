//! Find accessor - the first element matching a predicate.

use std::borrow::Cow;

use crate::error::AccessError;
use crate::trace::observe;
use crate::traversal::nth_matching;

/// Extension trait searching any [`IntoIterator`] for the first element
/// accepted by a predicate.
///
/// The scan stops at the first match; elements after it are never pulled.
///
/// # Examples
///
/// ```rust
/// use seqaccess::Find;
///
/// assert_eq!(vec![1, 2, 3].find_or_error(|element| *element == 2), Ok(2));
/// assert!(vec![1, 2, 3].find_or_error(|element| *element == 4).is_err());
/// ```
pub trait Find: IntoIterator + Sized {
    /// Returns the first element accepted by `predicate`, or `None`.
    fn maybe_find<P>(self, predicate: P) -> Option<Self::Item>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        observe("find", nth_matching(self.into_iter(), 0, predicate))
    }

    /// Returns the first element accepted by `predicate`, or fails with
    /// `"Element not found"`.
    ///
    /// # Errors
    ///
    /// Returns [`AccessError::element_not_found`] if nothing matches.
    fn find_or_error<P>(self, predicate: P) -> Result<Self::Item, AccessError>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        self.maybe_find(predicate)
            .ok_or_else(AccessError::element_not_found)
    }

    /// Returns the first element accepted by `predicate`, or fails with the
    /// given message.
    ///
    /// # Errors
    ///
    /// Returns an [`AccessError`] carrying `message` if nothing matches.
    fn find_or_message<P>(
        self,
        predicate: P,
        message: impl Into<Cow<'static, str>>,
    ) -> Result<Self::Item, AccessError>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        self.find_ok_or(predicate, AccessError::new(message))
    }

    /// Returns the first element accepted by `predicate`, or fails with
    /// `error`.
    ///
    /// # Errors
    ///
    /// Returns `error` if nothing matches.
    fn find_ok_or<P, E>(self, predicate: P, error: E) -> Result<Self::Item, E>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        self.maybe_find(predicate).ok_or(error)
    }

    /// Returns the first element accepted by `predicate`, or fails with the
    /// error produced by `error_factory`.
    ///
    /// # Errors
    ///
    /// Returns the result of `error_factory` if nothing matches. The factory
    /// is not called otherwise.
    fn find_ok_or_else<P, E, F>(self, predicate: P, error_factory: F) -> Result<Self::Item, E>
    where
        P: FnMut(&Self::Item) -> bool,
        F: FnOnce() -> E,
    {
        self.maybe_find(predicate).ok_or_else(error_factory)
    }
}

impl<S: IntoIterator> Find for S {}
