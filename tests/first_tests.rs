//! Tests for the First accessor family.

mod common;

use common::{CallCounter, generated, naturals, tracked};
use rstest::rstest;
use seqaccess::{AccessError, First};

// =============================================================================
// Optional
// =============================================================================

#[rstest]
#[case(vec![10, 20, 30], Some(10))]
#[case(vec![7], Some(7))]
#[case(vec![], None)]
fn maybe_first_returns_head(#[case] source: Vec<i32>, #[case] expected: Option<i32>) {
    assert_eq!(source.maybe_first(), expected);
}

#[rstest]
fn maybe_first_on_borrowed_slice() {
    let names = ["ada", "grace"];
    assert_eq!(names.iter().maybe_first(), Some(&"ada"));
    assert_eq!(names.len(), 2);
}

// =============================================================================
// Default and custom messages
// =============================================================================

#[rstest]
fn first_or_error_on_empty_sequence() {
    let result = Vec::<i32>::new().first_or_error();
    assert_eq!(result, Err(AccessError::no_elements()));
    assert_eq!(result.unwrap_err(), "Sequence contains no elements");
}

#[rstest]
fn first_or_error_on_populated_sequence() {
    assert_eq!(vec![10, 20, 30].first_or_error(), Ok(10));
}

#[rstest]
fn first_or_message_overrides_default() {
    let result = Vec::<i32>::new().first_or_message("queue is empty");
    assert_eq!(result.unwrap_err().message(), "queue is empty");
}

// =============================================================================
// Caller errors
// =============================================================================

#[rstest]
fn first_ok_or_uses_caller_value() {
    #[derive(Debug, PartialEq)]
    struct Missing(u8);

    assert_eq!(Vec::<i32>::new().first_ok_or(Missing(1)), Err(Missing(1)));
    assert_eq!(vec![5].first_ok_or(Missing(1)), Ok(5));
}

#[rstest]
fn first_ok_or_else_invokes_factory_once_on_failure() {
    let counter = CallCounter::new();
    let result = Vec::<i32>::new().first_ok_or_else(counter.factory("empty"));

    assert_eq!(result, Err("empty"));
    assert_eq!(counter.calls(), 1);
}

#[rstest]
fn first_ok_or_else_skips_factory_on_success() {
    let counter = CallCounter::new();
    let result = vec![1, 2].first_ok_or_else(counter.factory("empty"));

    assert_eq!(result, Ok(1));
    assert_eq!(counter.calls(), 0);
}

// =============================================================================
// Traversal
// =============================================================================

#[rstest]
fn first_terminates_on_infinite_source() {
    assert_eq!(naturals().first_or_error(), Ok(0));
}

#[rstest]
fn first_works_on_single_use_stream() {
    assert_eq!(generated(vec!["x", "y"]).first_or_error(), Ok("x"));
}

#[rstest]
fn first_pulls_one_element_and_releases_cursor() {
    let (cursor, probe) = tracked(vec![1, 2, 3]);

    assert_eq!(cursor.maybe_first(), Some(1));
    assert_eq!(probe.pulled(), 1);
    assert!(probe.released());
}

#[rstest]
fn first_releases_cursor_on_empty_source() {
    let (cursor, probe) = tracked(Vec::<i32>::new());

    assert!(cursor.first_or_error().is_err());
    assert!(probe.released());
}
