#![cfg(feature = "pull")]
//! Unit tests for the source factories.
//!
//! Tests cover:
//! - Exhaustion monotonicity for finite sources (from_seq, once, empty)
//! - Callback delegation and resumption for from_fn
//! - Unbounded repetition for repeat
//! - Terminal absence for successors

use lazypull::maybe::Maybe;
use lazypull::pull::{Pull, empty, from_fn, from_seq, once, repeat, successors};
use rstest::rstest;
use std::cell::Cell;

// =============================================================================
// from_seq
// =============================================================================

#[rstest]
fn from_seq_yields_elements_in_order_then_absent() {
    // Scenario: [1, 2, 3] pulls as present(1), present(2), present(3),
    // absent, absent.
    let mut items = from_seq(vec![1, 2, 3]);
    assert_eq!(items.next(), Maybe::present(1));
    assert_eq!(items.next(), Maybe::present(2));
    assert_eq!(items.next(), Maybe::present(3));
    assert_eq!(items.next(), Maybe::absent());
    assert_eq!(items.next(), Maybe::absent());
}

#[rstest]
#[case(0)]
#[case(1)]
#[case(17)]
fn from_seq_exhaustion_is_monotonic(#[case] length: usize) {
    // Exactly `length` present results, then absent on every later pull.
    let mut items = from_seq(0..length);
    for expected in 0..length {
        assert_eq!(items.next(), Maybe::present(expected));
    }
    for _ in 0..5 {
        assert_eq!(items.next(), Maybe::absent());
    }
}

#[rstest]
fn from_seq_accepts_any_ordered_collection() {
    let mut items = from_seq(["a", "b"]);
    assert_eq!(items.next(), Maybe::present("a"));
    assert_eq!(items.next(), Maybe::present("b"));
    assert_eq!(items.next(), Maybe::absent());
}

// =============================================================================
// from_fn
// =============================================================================

#[rstest]
fn from_fn_delegates_every_pull_to_the_callback() {
    let calls = Cell::new(0);
    let mut items = from_fn(|| {
        calls.set(calls.get() + 1);
        Maybe::present(calls.get())
    });

    assert_eq!(items.next(), Maybe::present(1));
    assert_eq!(items.next(), Maybe::present(2));
    assert_eq!(calls.get(), 2);
}

#[rstest]
fn from_fn_has_no_permanent_exhaustion_guarantee() {
    // A callback may resume yielding after an absence.
    let state = Cell::new(0);
    let mut items = from_fn(|| {
        state.set(state.get() + 1);
        if state.get() % 2 == 0 {
            Maybe::absent()
        } else {
            Maybe::present(state.get())
        }
    });

    assert_eq!(items.next(), Maybe::present(1));
    assert_eq!(items.next(), Maybe::absent());
    assert_eq!(items.next(), Maybe::present(3));
    assert_eq!(items.next(), Maybe::absent());
}

// =============================================================================
// empty / once / repeat
// =============================================================================

#[rstest]
fn empty_is_always_absent() {
    let mut nothing = empty::<i32>();
    for _ in 0..4 {
        assert_eq!(nothing.next(), Maybe::absent());
    }
}

#[rstest]
fn once_yields_exactly_one_item() {
    let mut single = once(42);
    assert_eq!(single.next(), Maybe::present(42));
    assert_eq!(single.next(), Maybe::absent());
    assert_eq!(single.next(), Maybe::absent());
}

#[rstest]
fn once_preserves_falsy_payloads() {
    let mut single = once(0);
    assert_eq!(single.next(), Maybe::present(0));
    assert_eq!(single.next(), Maybe::absent());
}

#[rstest]
fn repeat_yields_the_same_item_indefinitely() {
    let mut forever = repeat("x");
    for _ in 0..100 {
        assert_eq!(forever.next(), Maybe::present("x"));
    }
}

// =============================================================================
// successors
// =============================================================================

#[rstest]
fn successors_unfolds_from_the_seed() {
    // Scenario: seed 0, step +1, sampled 4 times.
    let mut naturals = successors(Maybe::present(0), |x| Maybe::present(x + 1));
    assert_eq!(naturals.next(), Maybe::present(0));
    assert_eq!(naturals.next(), Maybe::present(1));
    assert_eq!(naturals.next(), Maybe::present(2));
    assert_eq!(naturals.next(), Maybe::present(3));
}

#[rstest]
fn successors_absence_is_terminal() {
    let calls = Cell::new(0);
    let mut bounded = successors(Maybe::present(0), |x| {
        calls.set(calls.get() + 1);
        if *x < 2 {
            Maybe::present(x + 1)
        } else {
            Maybe::absent()
        }
    });

    assert_eq!(bounded.next(), Maybe::present(0));
    assert_eq!(bounded.next(), Maybe::present(1));
    assert_eq!(bounded.next(), Maybe::present(2));
    assert_eq!(bounded.next(), Maybe::absent());
    assert_eq!(bounded.next(), Maybe::absent());
    // The step ran once per present item, never after the absence.
    assert_eq!(calls.get(), 3);
}

#[rstest]
fn successors_with_absent_seed_yields_nothing() {
    let mut stuck = successors(Maybe::<i32>::absent(), |x| Maybe::present(x + 1));
    assert_eq!(stuck.next(), Maybe::absent());
    assert_eq!(stuck.next(), Maybe::absent());
}
