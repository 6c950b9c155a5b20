//! # seqaccess
//!
//! Total accessors over sequences.
//!
//! ## Overview
//!
//! The partial operations of an ordered sequence (first, last, single,
//! element-at, find, "give me all of it, but not if it is empty") either
//! panic, return a sentinel, or leave the caller guessing. This crate
//! exposes each of them as an extension trait over every [`IntoIterator`]
//! with two kinds of total result:
//!
//! - **Optional**: `maybe_*` methods return [`Option`].
//! - **Outcome**: the remaining methods return [`Result`], with the failure
//!   payload chosen by the caller:
//!   - `*_or_error`: an [`AccessError`] with the family's default message
//!   - `*_or_message`: an [`AccessError`] with a caller message
//!   - `*_ok_or`: a caller error value, built before the call
//!   - `*_ok_or_else`: a caller error factory, run only on failure
//!
//! | Trait          | Optional                    | Default message                                  |
//! |----------------|-----------------------------|--------------------------------------------------|
//! | [`ElementAt`]  | `maybe_element_at`          | `"Element not found"`                            |
//! | [`Find`]       | `maybe_find`                | `"Element not found"`                            |
//! | [`First`]      | `maybe_first`               | `"Sequence contains no elements"`                |
//! | [`Last`]       | `maybe_last`, `maybe_last_where` | `"Sequence contains no elements"`           |
//! | [`Single`]     | `maybe_single`, `maybe_single_where` | `"Sequence does not contain exactly one element"` |
//! | [`ToNonEmpty`] | `maybe_to_non_empty_list`   | `"Sequence contains no elements"`                |
//!
//! Every accessor makes a single forward pass and drops its cursor before
//! returning. [`First`] and [`ElementAt`] stop early and are safe on
//! infinite sources; [`Last`], [`Single`] and [`ToNonEmpty`] are not.
//!
//! ## Feature Flags
//!
//! - `serde`: `Serialize`/`Deserialize` for [`AccessError`]
//! - `tracing`: emit a `TRACE` event whenever an accessor finds no value
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use seqaccess::prelude::*;
//!
//! let scores = vec![72, 88, 95];
//!
//! assert_eq!(scores.iter().first_or_error(), Ok(&72));
//! assert_eq!(scores.iter().maybe_find(|score| **score > 90), Some(&95));
//! assert_eq!(
//!     scores.iter().element_at_ok_or_else(7, || "no such round"),
//!     Err("no such round")
//! );
//! assert!(scores.iter().single_or_error().is_err());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports the accessor traits and the error type.
///
/// # Usage
///
/// ```rust
/// use seqaccess::prelude::*;
/// ```
pub mod prelude {
    pub use crate::element_at::ElementAt;
    pub use crate::error::AccessError;
    pub use crate::find::Find;
    pub use crate::first::First;
    pub use crate::last::Last;
    pub use crate::single::Single;
    pub use crate::to_non_empty::ToNonEmpty;
}

mod element_at;
mod error;
mod find;
mod first;
mod last;
mod materialize;
mod single;
mod to_non_empty;
mod trace;
mod traversal;

pub use element_at::ElementAt;
pub use error::AccessError;
pub use find::Find;
pub use first::First;
pub use last::Last;
pub use single::Single;
pub use to_non_empty::ToNonEmpty;
