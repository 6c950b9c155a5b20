//! Error type for the default-message accessor family.
//!
//! Every `*_or_error` and `*_or_message` accessor fails with an
//! [`AccessError`]. The error carries nothing but a message: not-found,
//! empty-sequence, ambiguous and invalid-index outcomes are all "no value
//! could be produced", and only the message tells them apart.
//!
//! Callers that want their own error type use the `*_ok_or` (eager) or
//! `*_ok_or_else` (lazy) accessors instead.

use std::borrow::Cow;

/// Represents a failed sequence access.
///
/// # Examples
///
/// ```rust
/// use seqaccess::{AccessError, First};
///
/// let error = Vec::<i32>::new().first_or_error().unwrap_err();
/// assert_eq!(error, AccessError::no_elements());
/// assert_eq!(format!("{error}"), "Sequence contains no elements");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct AccessError {
    message: Cow<'static, str>,
}

impl AccessError {
    /// Default message of the `ElementAt` and `Find` families.
    pub const ELEMENT_NOT_FOUND: &'static str = "Element not found";

    /// Default message of the `First`, `Last` and `ToNonEmpty` families.
    pub const NO_ELEMENTS: &'static str = "Sequence contains no elements";

    /// Default message of the `Single` family.
    pub const NOT_EXACTLY_ONE: &'static str = "Sequence does not contain exactly one element";

    /// Creates an error with the given message.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqaccess::AccessError;
    ///
    /// let error = AccessError::new("no admin user");
    /// assert_eq!(error.message(), "no admin user");
    /// ```
    #[must_use]
    pub fn new(message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The `"Element not found"` error.
    #[must_use]
    pub const fn element_not_found() -> Self {
        Self {
            message: Cow::Borrowed(Self::ELEMENT_NOT_FOUND),
        }
    }

    /// The `"Sequence contains no elements"` error.
    #[must_use]
    pub const fn no_elements() -> Self {
        Self {
            message: Cow::Borrowed(Self::NO_ELEMENTS),
        }
    }

    /// The `"Sequence does not contain exactly one element"` error.
    #[must_use]
    pub const fn not_exactly_one() -> Self {
        Self {
            message: Cow::Borrowed(Self::NOT_EXACTLY_ONE),
        }
    }

    /// Returns the message.
    #[inline]
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Consumes the error and returns the message.
    #[inline]
    #[must_use]
    pub fn into_message(self) -> Cow<'static, str> {
        self.message
    }
}

impl std::fmt::Display for AccessError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(&self.message)
    }
}

impl std::error::Error for AccessError {}

impl PartialEq<str> for AccessError {
    fn eq(&self, other: &str) -> bool {
        self.message == other
    }
}

impl PartialEq<&str> for AccessError {
    fn eq(&self, other: &&str) -> bool {
        self.message == *other
    }
}

impl From<AccessError> for String {
    fn from(error: AccessError) -> Self {
        error.message.into_owned()
    }
}

static_assertions::assert_impl_all!(AccessError: Send, Sync, std::error::Error);
