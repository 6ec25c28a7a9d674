//! Buffered lookahead over the pull protocol.
//!
//! [`Peekable`] augments an iterator with a single slot of lookahead.
//! The slot buffers a whole pull *result*, not just an item, so a
//! buffered absence is replayed by `next()` exactly like a buffered
//! item; peeking never changes what iteration would have observed,
//! even over a non-fused source.

use crate::maybe::Maybe;

use super::protocol::Pull;

/// The lookahead slot.
///
/// `Empty` means iteration is in its ordinary state; `Buffered` holds
/// the result of a pull that `peek` performed ahead of time.
#[derive(Clone, Debug)]
enum Slot<T> {
    Empty,
    Buffered(Maybe<T>),
}

/// An iterator with one slot of buffered lookahead.
///
/// Created by [`Pull::peekable`].
///
/// # Invariants
///
/// - Calling [`peek`](Peekable::peek) repeatedly without calling
///   `next()` returns the same item every time and does not advance
///   the underlying source.
/// - `next()` after a `peek()` consumes the buffered result before
///   pulling fresh data from the source.
///
/// # Examples
///
/// ```rust
/// use lazypull::maybe::Maybe;
/// use lazypull::pull::{Pull, from_seq};
///
/// let mut items = from_seq(vec![1, 2]).peekable();
///
/// assert_eq!(items.peek(), Maybe::present(&1));
/// assert_eq!(items.peek(), Maybe::present(&1)); // idempotent
/// assert_eq!(items.next(), Maybe::present(1));  // consistent with the peek
/// assert_eq!(items.next(), Maybe::present(2));
/// assert_eq!(items.peek(), Maybe::absent());
/// ```
#[must_use = "adapters are lazy and do nothing unless pulled"]
pub struct Peekable<S: Pull> {
    source: S,
    slot: Slot<S::Item>,
}

impl<S: Pull> Peekable<S> {
    #[inline]
    pub(crate) const fn new(source: S) -> Self {
        Self {
            source,
            slot: Slot::Empty,
        }
    }

    /// Returns a reference to the next item without consuming it.
    ///
    /// The first `peek` after a `next` pulls one result from the
    /// source and buffers it; further `peek`s return the buffered
    /// result without touching the source.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazypull::maybe::Maybe;
    /// use lazypull::pull::{Pull, from_seq};
    ///
    /// let mut items = from_seq(vec!["a"]).peekable();
    /// assert_eq!(items.peek(), Maybe::present(&"a"));
    /// assert_eq!(items.next(), Maybe::present("a"));
    /// assert_eq!(items.peek(), Maybe::absent());
    /// ```
    pub fn peek(&mut self) -> Maybe<&S::Item> {
        if matches!(self.slot, Slot::Empty) {
            self.slot = Slot::Buffered(self.source.next());
        }
        match &self.slot {
            Slot::Buffered(result) => result.as_ref(),
            // The slot was filled just above.
            Slot::Empty => Maybe::Absent,
        }
    }
}

impl<S: Pull> Pull for Peekable<S> {
    type Item = S::Item;

    #[inline]
    fn next(&mut self) -> Maybe<S::Item> {
        match std::mem::replace(&mut self.slot, Slot::Empty) {
            Slot::Buffered(result) => result,
            Slot::Empty => self.source.next(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pull::{from_fn, from_seq};
    use rstest::rstest;
    use std::cell::Cell;

    #[rstest]
    fn test_peek_does_not_advance_the_source() {
        let pulls = Cell::new(0);
        let counted = from_fn(|| {
            pulls.set(pulls.get() + 1);
            Maybe::present(pulls.get())
        });

        let mut items = counted.peekable();
        assert_eq!(items.peek(), Maybe::present(&1));
        assert_eq!(items.peek(), Maybe::present(&1));
        assert_eq!(items.peek(), Maybe::present(&1));
        // Three peeks, one pull.
        assert_eq!(pulls.get(), 1);
    }

    #[rstest]
    fn test_buffered_absence_is_replayed_by_next() {
        let state = Cell::new(0);
        // Absent on the first pull, present afterwards.
        let resuming = from_fn(|| {
            state.set(state.get() + 1);
            if state.get() == 1 {
                Maybe::absent()
            } else {
                Maybe::present(state.get())
            }
        });

        let mut items = resuming.peekable();
        assert_eq!(items.peek(), Maybe::absent());
        // The peeked absence is what the caller observes on next().
        assert_eq!(items.next(), Maybe::absent());
        // After the buffer is drained, iteration resumes with the source.
        assert_eq!(items.next(), Maybe::present(2));
    }
}
