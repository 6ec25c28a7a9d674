#![cfg(feature = "pull")]
//! Unit tests for the consuming terminal operations.
//!
//! Tests cover:
//! - fold identity on the empty iterator
//! - count, last, nth, find over finite sources
//! - all/any short-circuiting without draining the remainder

use lazypull::maybe::Maybe;
use lazypull::pull::{Pull, empty, from_fn, from_seq};
use rstest::rstest;
use std::cell::Cell;

// =============================================================================
// for_each
// =============================================================================

#[rstest]
fn for_each_visits_every_item_in_order() {
    let mut seen = Vec::new();
    from_seq(vec![1, 2, 3]).for_each(|item| seen.push(item));
    assert_eq!(seen, vec![1, 2, 3]);
}

#[rstest]
fn for_each_on_empty_never_calls_the_function() {
    let calls = Cell::new(0);
    empty::<i32>().for_each(|_| calls.set(calls.get() + 1));
    assert_eq!(calls.get(), 0);
}

// =============================================================================
// fold
// =============================================================================

#[rstest]
fn fold_threads_the_accumulator_left_to_right() {
    let concatenated = from_seq(vec!["a", "b", "c"])
        .fold(String::new(), |mut accumulator, item| {
            accumulator.push_str(item);
            accumulator
        });
    assert_eq!(concatenated, "abc");
}

#[rstest]
#[case(0)]
#[case(42)]
#[case(-7)]
fn fold_on_empty_returns_the_initial_value(#[case] initial: i32) {
    // Property: fold(empty, init, f) == init for any init and f.
    let result = empty::<i32>().fold(initial, |accumulator, item| accumulator + item);
    assert_eq!(result, initial);
}

// =============================================================================
// count / last / nth
// =============================================================================

#[rstest]
#[case(vec![], 0)]
#[case(vec![1], 1)]
#[case(vec![1, 2, 3, 4], 4)]
fn count_matches_the_source_length(#[case] items: Vec<i32>, #[case] expected: usize) {
    assert_eq!(from_seq(items).count(), expected);
}

#[rstest]
fn last_keeps_only_the_most_recent_item() {
    assert_eq!(from_seq(vec![1, 2, 3]).last(), Maybe::present(3));
}

#[rstest]
fn last_of_empty_is_absent() {
    assert_eq!(empty::<i32>().last(), Maybe::absent());
}

#[rstest]
#[case(0, Maybe::present(10))]
#[case(2, Maybe::present(30))]
#[case(3, Maybe::absent())]
fn nth_is_zero_indexed(#[case] index: usize, #[case] expected: Maybe<i32>) {
    assert_eq!(from_seq(vec![10, 20, 30]).nth(index), expected);
}

// =============================================================================
// find
// =============================================================================

#[rstest]
fn find_returns_the_first_match() {
    assert_eq!(
        from_seq(vec![1, 3, 4, 6]).find(|x| x % 2 == 0),
        Maybe::present(4)
    );
}

#[rstest]
fn find_without_a_match_is_absent() {
    assert_eq!(from_seq(vec![1, 3, 5]).find(|x| x % 2 == 0), Maybe::absent());
}

#[rstest]
fn find_leaves_the_remainder_in_place() {
    let mut items = from_seq(vec![1, 2, 3, 4]);
    assert_eq!((&mut items).find(|x| x % 2 == 0), Maybe::present(2));
    // Items after the match are still pullable.
    assert_eq!(items.next(), Maybe::present(3));
    assert_eq!(items.next(), Maybe::present(4));
}

// =============================================================================
// all / any
// =============================================================================

#[rstest]
fn all_is_vacuously_true_on_empty() {
    assert!(empty::<i32>().all(|_| false));
}

#[rstest]
fn any_is_false_on_empty() {
    assert!(!empty::<i32>().any(|_| true));
}

#[rstest]
fn all_accepts_when_no_item_fails() {
    assert!(from_seq(vec![2, 4, 6]).all(|x| x % 2 == 0));
}

#[rstest]
fn all_short_circuits_on_the_first_failure() {
    let pulls = Cell::new(0);
    let counted = from_fn(|| {
        pulls.set(pulls.get() + 1);
        Maybe::present(pulls.get())
    });

    // Fails at the third item; the (infinite) remainder is not pulled.
    assert!(!counted.all(|x| x < 3));
    assert_eq!(pulls.get(), 3);
}

#[rstest]
fn any_short_circuits_on_the_first_match() {
    let pulls = Cell::new(0);
    let counted = from_fn(|| {
        pulls.set(pulls.get() + 1);
        Maybe::present(pulls.get())
    });

    assert!(counted.any(|x| x == 2));
    assert_eq!(pulls.get(), 2);
}

#[rstest]
fn any_on_all_failing_items_drains_and_returns_false() {
    assert!(!from_seq(vec![1, 3, 5]).any(|x| x % 2 == 0));
}

// =============================================================================
// Draining Discipline
// =============================================================================

#[rstest]
fn terminals_drain_the_iterator_they_consume() {
    // The same iterator reference must not be reused expecting a
    // fresh start: a second pass over a &mut borrow sees nothing.
    let mut items = from_seq(vec![1, 2, 3]);
    assert_eq!((&mut items).count(), 3);
    assert_eq!((&mut items).count(), 0);
}
