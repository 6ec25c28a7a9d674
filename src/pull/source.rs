//! Source factories - iterators built from scratch rather than by
//! wrapping another iterator.
//!
//! Each factory is a free function returning a small struct that
//! implements [`Pull`]. Their termination guarantees differ and are
//! part of the contract:
//!
//! - [`from_fn`] has no termination guarantee at all; the callback may
//!   resume yielding after an absence
//! - [`from_seq`] and [`once`] are absent forever once exhausted
//! - [`empty`] is always absent, [`repeat`] never is
//! - [`successors`] treats absence as terminal

use std::marker::PhantomData;

use crate::maybe::Maybe;

use super::interop::{FromStd, from_std};
use super::protocol::Pull;

// =============================================================================
// FromFn
// =============================================================================

/// An iterator that delegates every pull to a callback.
///
/// Created by [`from_fn`].
#[derive(Clone)]
#[must_use = "sources are lazy and do nothing unless pulled"]
pub struct FromFn<F> {
    callback: F,
}

impl<T, F> Pull for FromFn<F>
where
    F: FnMut() -> Maybe<T>,
{
    type Item = T;

    #[inline]
    fn next(&mut self) -> Maybe<T> {
        (self.callback)()
    }
}

/// Creates an iterator that calls `callback` on every pull and returns
/// its result directly.
///
/// The iterator holds no state beyond the callback, so there is no
/// permanent-exhaustion guarantee: a callback that returns `Absent`
/// once may legally return `Present` again later. Wrap with
/// [`Pull::fuse`] when absence must be terminal.
///
/// # Examples
///
/// ```rust
/// use lazypull::maybe::Maybe;
/// use lazypull::pull::{Pull, from_fn};
///
/// let mut counter = 0;
/// let naturals = from_fn(move || {
///     counter += 1;
///     Maybe::present(counter)
/// });
///
/// let first_three: Vec<i32> = naturals.take(3).into_std().collect();
/// assert_eq!(first_three, vec![1, 2, 3]);
/// ```
#[inline]
pub const fn from_fn<T, F>(callback: F) -> FromFn<F>
where
    F: FnMut() -> Maybe<T>,
{
    FromFn { callback }
}

// =============================================================================
// FromSeq
// =============================================================================

/// Creates an iterator over a finite, one-shot, ordered collection.
///
/// Elements are pulled in the collection's order; once exhausted the
/// iterator is absent forever.
///
/// # Examples
///
/// ```rust
/// use lazypull::maybe::Maybe;
/// use lazypull::pull::{Pull, from_seq};
///
/// let mut items = from_seq(vec![1, 2, 3]);
/// assert_eq!(items.next(), Maybe::present(1));
/// assert_eq!(items.next(), Maybe::present(2));
/// assert_eq!(items.next(), Maybe::present(3));
/// assert_eq!(items.next(), Maybe::absent());
/// assert_eq!(items.next(), Maybe::absent());
/// ```
#[inline]
pub fn from_seq<C: IntoIterator>(collection: C) -> FromStd<C::IntoIter> {
    from_std(collection.into_iter())
}

// =============================================================================
// Empty
// =============================================================================

/// An iterator that is always absent.
///
/// Created by [`empty`].
#[derive(Clone, Copy, Debug, Default)]
#[must_use = "sources are lazy and do nothing unless pulled"]
pub struct Empty<T> {
    marker: PhantomData<T>,
}

impl<T> Pull for Empty<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Maybe<T> {
        Maybe::Absent
    }
}

/// Creates an iterator that yields nothing, ever.
///
/// # Examples
///
/// ```rust
/// use lazypull::pull::{Pull, empty};
///
/// assert_eq!(empty::<i32>().count(), 0);
/// ```
#[inline]
pub const fn empty<T>() -> Empty<T> {
    Empty {
        marker: PhantomData,
    }
}

// =============================================================================
// Once
// =============================================================================

/// An iterator that yields a single item, then is absent forever.
///
/// Created by [`once`].
#[derive(Clone, Debug)]
#[must_use = "sources are lazy and do nothing unless pulled"]
pub struct Once<T> {
    item: Maybe<T>,
}

impl<T> Pull for Once<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Maybe<T> {
        self.item.take()
    }
}

/// Creates an iterator that yields `item` exactly once.
///
/// # Examples
///
/// ```rust
/// use lazypull::maybe::Maybe;
/// use lazypull::pull::{Pull, once};
///
/// let mut single = once(42);
/// assert_eq!(single.next(), Maybe::present(42));
/// assert_eq!(single.next(), Maybe::absent());
/// assert_eq!(single.next(), Maybe::absent());
/// ```
#[inline]
pub const fn once<T>(item: T) -> Once<T> {
    Once {
        item: Maybe::Present(item),
    }
}

// =============================================================================
// Repeat
// =============================================================================

/// An iterator that yields clones of the same item indefinitely.
///
/// Created by [`repeat`].
#[derive(Clone, Debug)]
#[must_use = "sources are lazy and do nothing unless pulled"]
pub struct Repeat<T> {
    item: T,
}

impl<T: Clone> Pull for Repeat<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Maybe<T> {
        Maybe::Present(self.item.clone())
    }
}

/// Creates an iterator that yields `item` forever.
///
/// Bound it with [`Pull::take`] before applying any terminal.
///
/// # Examples
///
/// ```rust
/// use lazypull::pull::{Pull, repeat};
///
/// let threes: Vec<i32> = repeat(3).take(4).into_std().collect();
/// assert_eq!(threes, vec![3, 3, 3, 3]);
/// ```
#[inline]
pub const fn repeat<T: Clone>(item: T) -> Repeat<T> {
    Repeat { item }
}

// =============================================================================
// Successors
// =============================================================================

/// An iterator that yields a seed and then repeated applications of a
/// step function.
///
/// Created by [`successors`].
#[derive(Clone)]
#[must_use = "sources are lazy and do nothing unless pulled"]
pub struct Successors<T, F> {
    current: Maybe<T>,
    step: F,
}

impl<T, F> Pull for Successors<T, F>
where
    F: FnMut(&T) -> Maybe<T>,
{
    type Item = T;

    fn next(&mut self) -> Maybe<T> {
        let item = self.current.take();
        if let Maybe::Present(ref value) = item {
            self.current = (self.step)(value);
        }
        item
    }
}

/// Creates an iterator that yields `seed` and then the values produced
/// by repeatedly applying `step` to the previous value.
///
/// Unlike [`from_fn`], absence is terminal here: once `step` returns
/// `Absent` (or the seed itself is absent), the iterator is absent
/// forever and `step` is never called again.
///
/// # Examples
///
/// ```rust
/// use lazypull::maybe::Maybe;
/// use lazypull::pull::{Pull, successors};
///
/// let mut naturals = successors(Maybe::present(0), |x| Maybe::present(x + 1));
/// assert_eq!(naturals.next(), Maybe::present(0));
/// assert_eq!(naturals.next(), Maybe::present(1));
/// assert_eq!(naturals.next(), Maybe::present(2));
/// assert_eq!(naturals.next(), Maybe::present(3));
/// ```
#[inline]
pub const fn successors<T, F>(seed: Maybe<T>, step: F) -> Successors<T, F>
where
    F: FnMut(&T) -> Maybe<T>,
{
    Successors {
        current: seed,
        step,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::cell::Cell;

    #[rstest]
    fn test_once_is_absent_forever_after_the_item() {
        let mut single = once("item");
        assert_eq!(single.next(), Maybe::present("item"));
        for _ in 0..3 {
            assert_eq!(single.next(), Maybe::absent());
        }
    }

    #[rstest]
    fn test_successors_absent_seed_never_calls_step() {
        let calls = Cell::new(0);
        let mut stuck = successors(Maybe::<i32>::absent(), |value| {
            calls.set(calls.get() + 1);
            Maybe::present(value + 1)
        });

        assert_eq!(stuck.next(), Maybe::absent());
        assert_eq!(stuck.next(), Maybe::absent());
        assert_eq!(calls.get(), 0);
    }

    #[rstest]
    fn test_from_fn_may_resume_after_absence() {
        let state = Cell::new(0);
        let mut blinking = from_fn(|| {
            state.set(state.get() + 1);
            if state.get() == 2 {
                Maybe::absent()
            } else {
                Maybe::present(state.get())
            }
        });

        assert_eq!(blinking.next(), Maybe::present(1));
        assert_eq!(blinking.next(), Maybe::absent());
        assert_eq!(blinking.next(), Maybe::present(3));
    }
}
