//! The `Pull` trait - the pull-based iteration protocol.
//!
//! Any type with a `next()` operation returning a [`Maybe`] is a valid
//! iterator; everything else in this module is a provided method built
//! on that single primitive.
//!
//! # Ownership discipline
//!
//! An iterator exclusively owns its cursor state. Adapters take their
//! source by value, so the wrapped iterator can no longer be advanced
//! independently; terminals consume the receiver outright. At most one
//! caller pulls from a given iterator at a time (`next` takes `&mut
//! self`, so the borrow checker enforces this).
//!
//! # Exhaustion
//!
//! `next()` never fails: exhaustion is the ordinary `Absent` return
//! value. A non-fused source may yield `Present` again after an
//! `Absent`; wrap it with [`Pull::fuse`] when permanent termination is
//! required. Terminals treat the *first* `Absent` they see as the end.
//!
//! # Callback panics
//!
//! The core raises no errors of its own. If a user-supplied callback
//! (a `map` transform, a `filter` predicate) panics, the panic
//! propagates unmodified; the iterator is left in an unspecified but
//! memory-safe state.

use crate::maybe::Maybe;

use super::adapter::{Chain, Enumerate, Filter, Flatten, Map, Skip, SkipWhile, Take, TakeWhile, Zip};
use super::fuse::Fuse;
use super::interop::IntoStd;
use super::peekable::Peekable;

/// A lazy, pull-based sequence of items.
///
/// # Required Method
///
/// - [`next`](Pull::next): Pull the next item, or `Absent` if none is
///   available right now
///
/// # Provided Methods
///
/// Lazy adapters (each wraps `self` and returns a new iterator):
///
/// - [`map`](Pull::map), [`filter`](Pull::filter), [`chain`](Pull::chain),
///   [`zip`](Pull::zip), [`enumerate`](Pull::enumerate)
/// - [`skip`](Pull::skip), [`skip_while`](Pull::skip_while),
///   [`take`](Pull::take), [`take_while`](Pull::take_while)
/// - [`peekable`](Pull::peekable), [`fuse`](Pull::fuse),
///   [`flatten`](Pull::flatten)
///
/// Consuming terminals (each drains `self` partially or fully):
///
/// - [`for_each`](Pull::for_each), [`fold`](Pull::fold),
///   [`count`](Pull::count), [`last`](Pull::last), [`nth`](Pull::nth)
/// - [`find`](Pull::find), [`all`](Pull::all), [`any`](Pull::any)
///
/// # Examples
///
/// Implementing `Pull` for a custom counter:
///
/// ```rust
/// use lazypull::maybe::Maybe;
/// use lazypull::pull::Pull;
///
/// struct Countdown(u32);
///
/// impl Pull for Countdown {
///     type Item = u32;
///
///     fn next(&mut self) -> Maybe<u32> {
///         if self.0 == 0 {
///             Maybe::absent()
///         } else {
///             self.0 -= 1;
///             Maybe::present(self.0 + 1)
///         }
///     }
/// }
///
/// let collected: Vec<u32> = Countdown(3).into_std().collect();
/// assert_eq!(collected, vec![3, 2, 1]);
/// ```
pub trait Pull {
    /// The type of item this iterator yields.
    type Item;

    /// Pulls the next item.
    ///
    /// Returns `Present(item)` while items remain and `Absent` when no
    /// item is available right now. Absence is a normal return value,
    /// never an error, and for non-fused sources it is not necessarily
    /// permanent.
    fn next(&mut self) -> Maybe<Self::Item>;

    // =========================================================================
    // Lazy Adapters
    // =========================================================================

    /// Applies `function` to every item.
    ///
    /// Absence propagates unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazypull::maybe::Maybe;
    /// use lazypull::pull::{Pull, from_seq};
    ///
    /// let mut doubled = from_seq(vec![1, 2, 3]).map(|x| x * 2);
    /// assert_eq!(doubled.next(), Maybe::present(2));
    /// assert_eq!(doubled.next(), Maybe::present(4));
    /// assert_eq!(doubled.next(), Maybe::present(6));
    /// assert_eq!(doubled.next(), Maybe::absent());
    /// ```
    #[inline]
    fn map<U, F>(self, function: F) -> Map<Self, F>
    where
        Self: Sized,
        F: FnMut(Self::Item) -> U,
    {
        Map::new(self, function)
    }

    /// Keeps only the items for which `predicate` holds.
    ///
    /// Each pull repeatedly polls the source until an item passes or
    /// the source reports `Absent`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazypull::pull::{Pull, from_seq};
    ///
    /// let evens = from_seq(vec![1, 2, 3, 4]).filter(|x| x % 2 == 0);
    /// assert_eq!(evens.count(), 2);
    /// ```
    #[inline]
    fn filter<F>(self, predicate: F) -> Filter<Self, F>
    where
        Self: Sized,
        F: FnMut(&Self::Item) -> bool,
    {
        Filter::new(self, predicate)
    }

    /// Yields all of `self`, then all of `other`.
    ///
    /// The first `Absent` from `self` permanently switches to `other`;
    /// the switch happens within the same call, so the seam is
    /// invisible to the caller. Absent only when both are exhausted.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazypull::maybe::Maybe;
    /// use lazypull::pull::{Pull, from_seq};
    ///
    /// let mut chained = from_seq(vec![1]).chain(from_seq(vec![2, 3]));
    /// assert_eq!(chained.next(), Maybe::present(1));
    /// assert_eq!(chained.next(), Maybe::present(2));
    /// assert_eq!(chained.next(), Maybe::present(3));
    /// assert_eq!(chained.next(), Maybe::absent());
    /// ```
    #[inline]
    fn chain<Other>(self, other: Other) -> Chain<Self, Other>
    where
        Self: Sized,
        Other: Pull<Item = Self::Item>,
    {
        Chain::new(self, other)
    }

    /// Pairs up items from `self` and `other`.
    ///
    /// A pair is yielded only when BOTH sides are present. `self` is
    /// pulled first; if it is absent, `other` is not pulled that call.
    /// An item pulled from `self` in a call where `other` turns out
    /// absent is dropped.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazypull::maybe::Maybe;
    /// use lazypull::pull::{Pull, from_seq};
    ///
    /// let mut pairs = from_seq(vec![1, 2]).zip(from_seq(vec!["a", "b", "c"]));
    /// assert_eq!(pairs.next(), Maybe::present((1, "a")));
    /// assert_eq!(pairs.next(), Maybe::present((2, "b")));
    /// assert_eq!(pairs.next(), Maybe::absent());
    /// ```
    #[inline]
    fn zip<Other>(self, other: Other) -> Zip<Self, Other>
    where
        Self: Sized,
        Other: Pull,
    {
        Zip::new(self, other)
    }

    /// Pairs each item with a zero-based, monotonically increasing index.
    ///
    /// The index counts yielded items, not pulls: absence does not
    /// advance it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazypull::maybe::Maybe;
    /// use lazypull::pull::{Pull, from_seq};
    ///
    /// let mut indexed = from_seq(vec!["a", "b"]).enumerate();
    /// assert_eq!(indexed.next(), Maybe::present((0, "a")));
    /// assert_eq!(indexed.next(), Maybe::present((1, "b")));
    /// assert_eq!(indexed.next(), Maybe::absent());
    /// ```
    #[inline]
    fn enumerate(self) -> Enumerate<Self>
    where
        Self: Sized,
    {
        Enumerate::new(self)
    }

    /// Discards the first `count` items, passing everything after
    /// through unchanged.
    ///
    /// Skipping happens lazily on the first pull. If the source runs
    /// out during the skipping phase, the result is `Absent` and the
    /// skip is considered complete (it is not retried on resumable
    /// sources).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazypull::maybe::Maybe;
    /// use lazypull::pull::{Pull, from_seq};
    ///
    /// let mut rest = from_seq(vec![1, 2, 3, 4]).skip(2);
    /// assert_eq!(rest.next(), Maybe::present(3));
    /// assert_eq!(rest.next(), Maybe::present(4));
    /// assert_eq!(rest.next(), Maybe::absent());
    /// ```
    #[inline]
    fn skip(self, count: usize) -> Skip<Self>
    where
        Self: Sized,
    {
        Skip::new(self, count)
    }

    /// Discards the contiguous prefix for which `predicate` holds.
    ///
    /// The first item failing the predicate is yielded (never dropped),
    /// and from then on everything passes through unchanged; the
    /// predicate is not consulted again.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazypull::maybe::Maybe;
    /// use lazypull::pull::{Pull, from_seq};
    ///
    /// let mut rest = from_seq(vec![1, 3, 2, 3]).skip_while(|x| x % 2 != 0);
    /// assert_eq!(rest.next(), Maybe::present(2));
    /// assert_eq!(rest.next(), Maybe::present(3));
    /// assert_eq!(rest.next(), Maybe::absent());
    /// ```
    #[inline]
    fn skip_while<F>(self, predicate: F) -> SkipWhile<Self, F>
    where
        Self: Sized,
        F: FnMut(&Self::Item) -> bool,
    {
        SkipWhile::new(self, predicate)
    }

    /// Yields at most `count` items, then is permanently absent.
    ///
    /// Once the budget is spent the source is never polled again, so
    /// no more than `count` present values are ever returned.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazypull::pull::{Pull, repeat};
    ///
    /// let bounded = repeat(7).take(3);
    /// assert_eq!(bounded.count(), 3);
    /// ```
    #[inline]
    fn take(self, count: usize) -> Take<Self>
    where
        Self: Sized,
    {
        Take::new(self, count)
    }

    /// Yields items while `predicate` holds.
    ///
    /// The first failing item terminates the iterator permanently: it
    /// is dropped, and the source is never polled again.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazypull::maybe::Maybe;
    /// use lazypull::pull::{Pull, from_seq};
    ///
    /// let mut prefix = from_seq(vec![1, 2, 9, 3]).take_while(|x| *x < 5);
    /// assert_eq!(prefix.next(), Maybe::present(1));
    /// assert_eq!(prefix.next(), Maybe::present(2));
    /// assert_eq!(prefix.next(), Maybe::absent());
    /// assert_eq!(prefix.next(), Maybe::absent());
    /// ```
    #[inline]
    fn take_while<F>(self, predicate: F) -> TakeWhile<Self, F>
    where
        Self: Sized,
        F: FnMut(&Self::Item) -> bool,
    {
        TakeWhile::new(self, predicate)
    }

    /// Adds one slot of buffered lookahead.
    ///
    /// See [`Peekable::peek`] for the lookahead invariants.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazypull::maybe::Maybe;
    /// use lazypull::pull::{Pull, from_seq};
    ///
    /// let mut items = from_seq(vec![1, 2]).peekable();
    /// assert_eq!(items.peek(), Maybe::present(&1));
    /// assert_eq!(items.peek(), Maybe::present(&1));
    /// assert_eq!(items.next(), Maybe::present(1));
    /// ```
    #[inline]
    fn peekable(self) -> Peekable<Self>
    where
        Self: Sized,
    {
        Peekable::new(self)
    }

    /// Makes absence terminal.
    ///
    /// Once the wrapped source yields `Absent` a single time, the
    /// source is discarded and every subsequent pull returns `Absent`,
    /// even if the source would otherwise have resumed.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazypull::maybe::Maybe;
    /// use lazypull::pull::{Pull, from_fn};
    ///
    /// // A source that resumes after an absence...
    /// let mut pulls = 0;
    /// let resuming = from_fn(move || {
    ///     pulls += 1;
    ///     if pulls == 1 { Maybe::absent() } else { Maybe::present(pulls) }
    /// });
    ///
    /// // ...is cut off at the first absence once fused.
    /// let mut fused = resuming.fuse();
    /// assert_eq!(fused.next(), Maybe::absent());
    /// assert_eq!(fused.next(), Maybe::absent());
    /// ```
    #[inline]
    fn fuse(self) -> Fuse<Self>
    where
        Self: Sized,
    {
        Fuse::new(self)
    }

    /// Flattens an iterator of iterators.
    ///
    /// Each inner iterator is drained to its first absence before the
    /// next outer item is pulled, exactly as if the inner iterators
    /// were chained.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazypull::pull::{Pull, from_seq};
    ///
    /// let nested = from_seq(vec![from_seq(vec![1, 2]), from_seq(vec![3])]);
    /// let flat: Vec<i32> = nested.flatten().into_std().collect();
    /// assert_eq!(flat, vec![1, 2, 3]);
    /// ```
    #[inline]
    fn flatten(self) -> Flatten<Self>
    where
        Self: Sized,
        Self::Item: Pull,
    {
        Flatten::new(self)
    }

    /// Bridges into the standard iterator protocol.
    ///
    /// The returned adapter implements `std::iter::Iterator`, mapping
    /// `Present` to `Some` and `Absent` to `None`. For a non-fused
    /// source the adapter inherits its resumption behavior; fuse first
    /// when `None` must be final.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazypull::pull::{Pull, from_seq};
    ///
    /// let collected: Vec<i32> = from_seq(vec![1, 2, 3]).into_std().collect();
    /// assert_eq!(collected, vec![1, 2, 3]);
    /// ```
    #[inline]
    fn into_std(self) -> IntoStd<Self>
    where
        Self: Sized,
    {
        IntoStd::new(self)
    }

    // =========================================================================
    // Consuming Terminals
    // =========================================================================

    /// Pulls until absent, calling `function` on each item.
    ///
    /// Side-effecting only; returns nothing.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazypull::pull::{Pull, from_seq};
    ///
    /// let mut seen = Vec::new();
    /// from_seq(vec![1, 2, 3]).for_each(|item| seen.push(item));
    /// assert_eq!(seen, vec![1, 2, 3]);
    /// ```
    #[inline]
    fn for_each<F>(self, mut function: F)
    where
        Self: Sized,
        F: FnMut(Self::Item),
    {
        self.fold((), |(), item| function(item));
    }

    /// Pulls until absent, threading an accumulator through `function`.
    ///
    /// An empty iterator returns `initial` unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazypull::pull::{Pull, empty, from_seq};
    ///
    /// let sum = from_seq(vec![1, 2, 3]).fold(0, |accumulator, item| accumulator + item);
    /// assert_eq!(sum, 6);
    ///
    /// let untouched = empty::<i32>().fold(42, |accumulator, item| accumulator + item);
    /// assert_eq!(untouched, 42);
    /// ```
    #[inline]
    fn fold<A, F>(mut self, initial: A, mut function: F) -> A
    where
        Self: Sized,
        F: FnMut(A, Self::Item) -> A,
    {
        let mut accumulator = initial;
        loop {
            match self.next() {
                Maybe::Present(item) => accumulator = function(accumulator, item),
                Maybe::Absent => return accumulator,
            }
        }
    }

    /// Counts the items until absent.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazypull::pull::{Pull, empty, from_seq};
    ///
    /// assert_eq!(from_seq(vec![1, 2, 3]).count(), 3);
    /// assert_eq!(empty::<i32>().count(), 0);
    /// ```
    #[inline]
    fn count(self) -> usize
    where
        Self: Sized,
    {
        self.fold(0, |accumulator, _| accumulator + 1)
    }

    /// Returns the most recent item, or `Absent` for an empty iterator.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazypull::maybe::Maybe;
    /// use lazypull::pull::{Pull, empty, from_seq};
    ///
    /// assert_eq!(from_seq(vec![1, 2, 3]).last(), Maybe::present(3));
    /// assert_eq!(empty::<i32>().last(), Maybe::absent());
    /// ```
    #[inline]
    fn last(self) -> Maybe<Self::Item>
    where
        Self: Sized,
    {
        self.fold(Maybe::Absent, |_, item| Maybe::Present(item))
    }

    /// Returns the item at zero-based position `index`.
    ///
    /// Equivalent to skipping `index` items and pulling once; all
    /// consumed items are dropped.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazypull::maybe::Maybe;
    /// use lazypull::pull::{Pull, from_seq};
    ///
    /// assert_eq!(from_seq(vec![10, 20, 30]).nth(1), Maybe::present(20));
    /// assert_eq!(from_seq(vec![10, 20, 30]).nth(5), Maybe::absent());
    /// ```
    #[inline]
    fn nth(self, index: usize) -> Maybe<Self::Item>
    where
        Self: Sized,
    {
        let mut remainder = self.skip(index);
        remainder.next()
    }

    /// Returns the first item for which `predicate` holds.
    ///
    /// Pulls until a match or the first absence; items before the
    /// match are dropped, items after it are left in place.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazypull::maybe::Maybe;
    /// use lazypull::pull::{Pull, from_seq};
    ///
    /// let found = from_seq(vec![1, 3, 4, 5]).find(|x| x % 2 == 0);
    /// assert_eq!(found, Maybe::present(4));
    ///
    /// let missing = from_seq(vec![1, 3, 5]).find(|x| x % 2 == 0);
    /// assert_eq!(missing, Maybe::absent());
    /// ```
    #[inline]
    fn find<F>(mut self, mut predicate: F) -> Maybe<Self::Item>
    where
        Self: Sized,
        F: FnMut(&Self::Item) -> bool,
    {
        loop {
            match self.next() {
                Maybe::Present(item) => {
                    if predicate(&item) {
                        return Maybe::Present(item);
                    }
                }
                Maybe::Absent => return Maybe::Absent,
            }
        }
    }

    /// Returns `true` iff no item fails `predicate`.
    ///
    /// Short-circuits: the first failing item returns `false`
    /// immediately and the remainder is not pulled. Vacuously `true`
    /// for an empty iterator.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazypull::pull::{Pull, empty, from_seq};
    ///
    /// assert!(from_seq(vec![2, 4, 6]).all(|x| x % 2 == 0));
    /// assert!(!from_seq(vec![2, 3, 4]).all(|x| x % 2 == 0));
    /// assert!(empty::<i32>().all(|x| x % 2 == 0));
    /// ```
    #[inline]
    fn all<F>(mut self, mut predicate: F) -> bool
    where
        Self: Sized,
        F: FnMut(Self::Item) -> bool,
    {
        loop {
            match self.next() {
                Maybe::Present(item) => {
                    if !predicate(item) {
                        return false;
                    }
                }
                Maybe::Absent => return true,
            }
        }
    }

    /// Returns `true` on the first item satisfying `predicate`.
    ///
    /// Short-circuits: a match returns `true` immediately and the
    /// remainder is not pulled. `false` for an empty iterator.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazypull::pull::{Pull, from_seq};
    ///
    /// assert!(from_seq(vec![1, 2, 3]).any(|x| x == 2));
    /// assert!(!from_seq(vec![1, 3, 5]).any(|x| x == 2));
    /// ```
    #[inline]
    fn any<F>(mut self, mut predicate: F) -> bool
    where
        Self: Sized,
        F: FnMut(Self::Item) -> bool,
    {
        loop {
            match self.next() {
                Maybe::Present(item) => {
                    if predicate(item) {
                        return true;
                    }
                }
                Maybe::Absent => return false,
            }
        }
    }
}

impl<P: Pull + ?Sized> Pull for &mut P {
    type Item = P::Item;

    #[inline]
    fn next(&mut self) -> Maybe<Self::Item> {
        (**self).next()
    }
}
