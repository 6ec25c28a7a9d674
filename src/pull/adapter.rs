//! Lazy adapters over the pull protocol.
//!
//! Each adapter is a small struct holding its source iterator(s) plus
//! only the cursor state it needs (a counter, a phase flag, a buffered
//! inner iterator). Adapters compose by wrapping, never by inheritance,
//! and compute nothing until pulled.
//!
//! All types here are constructed through the corresponding [`Pull`]
//! methods rather than directly.

use crate::maybe::Maybe;

use super::protocol::Pull;

// =============================================================================
// Map
// =============================================================================

/// An iterator that applies a function to every item of its source.
///
/// Created by [`Pull::map`].
#[derive(Clone)]
#[must_use = "adapters are lazy and do nothing unless pulled"]
pub struct Map<S, F> {
    source: S,
    function: F,
}

impl<S, F> Map<S, F> {
    #[inline]
    pub(crate) const fn new(source: S, function: F) -> Self {
        Self { source, function }
    }
}

impl<S, U, F> Pull for Map<S, F>
where
    S: Pull,
    F: FnMut(S::Item) -> U,
{
    type Item = U;

    #[inline]
    fn next(&mut self) -> Maybe<U> {
        self.source.next().map(&mut self.function)
    }
}

// =============================================================================
// Filter
// =============================================================================

/// An iterator that yields only the items passing a predicate.
///
/// Created by [`Pull::filter`].
#[derive(Clone)]
#[must_use = "adapters are lazy and do nothing unless pulled"]
pub struct Filter<S, F> {
    source: S,
    predicate: F,
}

impl<S, F> Filter<S, F> {
    #[inline]
    pub(crate) const fn new(source: S, predicate: F) -> Self {
        Self { source, predicate }
    }
}

impl<S, F> Pull for Filter<S, F>
where
    S: Pull,
    F: FnMut(&S::Item) -> bool,
{
    type Item = S::Item;

    fn next(&mut self) -> Maybe<S::Item> {
        loop {
            match self.source.next() {
                Maybe::Present(item) => {
                    if (self.predicate)(&item) {
                        return Maybe::Present(item);
                    }
                }
                Maybe::Absent => return Maybe::Absent,
            }
        }
    }
}

// =============================================================================
// Chain
// =============================================================================

/// An iterator that yields a front iterator to exhaustion, then a back
/// iterator.
///
/// The first absence from the front permanently switches to the back;
/// a resumable front iterator is never polled again after that.
///
/// Created by [`Pull::chain`].
#[derive(Clone, Debug)]
#[must_use = "adapters are lazy and do nothing unless pulled"]
pub struct Chain<A, B> {
    front: A,
    back: B,
    front_done: bool,
}

impl<A, B> Chain<A, B> {
    #[inline]
    pub(crate) const fn new(front: A, back: B) -> Self {
        Self {
            front,
            back,
            front_done: false,
        }
    }
}

impl<A, B> Pull for Chain<A, B>
where
    A: Pull,
    B: Pull<Item = A::Item>,
{
    type Item = A::Item;

    fn next(&mut self) -> Maybe<A::Item> {
        if !self.front_done {
            let item = self.front.next();
            if item.is_present() {
                return item;
            }
            self.front_done = true;
        }
        self.back.next()
    }
}

// =============================================================================
// Zip
// =============================================================================

/// An iterator that pairs up the items of two sources.
///
/// Created by [`Pull::zip`].
#[derive(Clone, Debug)]
#[must_use = "adapters are lazy and do nothing unless pulled"]
pub struct Zip<A, B> {
    left: A,
    right: B,
}

impl<A, B> Zip<A, B> {
    #[inline]
    pub(crate) const fn new(left: A, right: B) -> Self {
        Self { left, right }
    }
}

impl<A, B> Pull for Zip<A, B>
where
    A: Pull,
    B: Pull,
{
    type Item = (A::Item, B::Item);

    fn next(&mut self) -> Maybe<(A::Item, B::Item)> {
        // Left first; when it is absent the right side is not pulled.
        let left = self.left.next();
        if left.is_absent() {
            return Maybe::Absent;
        }
        left.zip_with(self.right.next(), |first, second| (first, second))
    }
}

// =============================================================================
// Enumerate
// =============================================================================

/// An iterator that pairs each item with its zero-based position.
///
/// Created by [`Pull::enumerate`].
#[derive(Clone, Debug)]
#[must_use = "adapters are lazy and do nothing unless pulled"]
pub struct Enumerate<S> {
    source: S,
    index: usize,
}

impl<S> Enumerate<S> {
    #[inline]
    pub(crate) const fn new(source: S) -> Self {
        Self { source, index: 0 }
    }
}

impl<S: Pull> Pull for Enumerate<S> {
    type Item = (usize, S::Item);

    fn next(&mut self) -> Maybe<(usize, S::Item)> {
        self.source.next().map(|item| {
            let position = self.index;
            self.index += 1;
            (position, item)
        })
    }
}

// =============================================================================
// Skip
// =============================================================================

/// An iterator that discards its first `count` items.
///
/// Created by [`Pull::skip`].
#[derive(Clone, Debug)]
#[must_use = "adapters are lazy and do nothing unless pulled"]
pub struct Skip<S> {
    source: S,
    remaining: usize,
}

impl<S> Skip<S> {
    #[inline]
    pub(crate) const fn new(source: S, count: usize) -> Self {
        Self {
            source,
            remaining: count,
        }
    }
}

impl<S: Pull> Pull for Skip<S> {
    type Item = S::Item;

    fn next(&mut self) -> Maybe<S::Item> {
        while self.remaining > 0 {
            self.remaining -= 1;
            if self.source.next().is_absent() {
                // The skip phase ends here even for a resumable source.
                self.remaining = 0;
                return Maybe::Absent;
            }
        }
        self.source.next()
    }
}

// =============================================================================
// SkipWhile
// =============================================================================

/// An iterator that discards the prefix for which a predicate holds.
///
/// The first non-matching item is yielded, never dropped; after it the
/// predicate is retired and items pass through unchanged. An absence
/// during the prefix leaves the skipping phase open, so a resumable
/// source keeps being tested until the predicate first fails.
///
/// Created by [`Pull::skip_while`].
#[derive(Clone)]
#[must_use = "adapters are lazy and do nothing unless pulled"]
pub struct SkipWhile<S, F> {
    source: S,
    predicate: F,
    done_skipping: bool,
}

impl<S, F> SkipWhile<S, F> {
    #[inline]
    pub(crate) const fn new(source: S, predicate: F) -> Self {
        Self {
            source,
            predicate,
            done_skipping: false,
        }
    }
}

impl<S, F> Pull for SkipWhile<S, F>
where
    S: Pull,
    F: FnMut(&S::Item) -> bool,
{
    type Item = S::Item;

    fn next(&mut self) -> Maybe<S::Item> {
        if self.done_skipping {
            return self.source.next();
        }
        loop {
            match self.source.next() {
                Maybe::Present(item) => {
                    if !(self.predicate)(&item) {
                        self.done_skipping = true;
                        return Maybe::Present(item);
                    }
                }
                Maybe::Absent => return Maybe::Absent,
            }
        }
    }
}

// =============================================================================
// Take
// =============================================================================

/// An iterator that yields at most `count` items.
///
/// Once the budget is spent, the source is never polled again and
/// every pull returns `Absent`.
///
/// Created by [`Pull::take`].
#[derive(Clone, Debug)]
#[must_use = "adapters are lazy and do nothing unless pulled"]
pub struct Take<S> {
    source: S,
    remaining: usize,
}

impl<S> Take<S> {
    #[inline]
    pub(crate) const fn new(source: S, count: usize) -> Self {
        Self {
            source,
            remaining: count,
        }
    }
}

impl<S: Pull> Pull for Take<S> {
    type Item = S::Item;

    fn next(&mut self) -> Maybe<S::Item> {
        if self.remaining == 0 {
            return Maybe::Absent;
        }
        let item = self.source.next();
        if item.is_present() {
            self.remaining -= 1;
        }
        item
    }
}

// =============================================================================
// TakeWhile
// =============================================================================

/// An iterator that yields items while a predicate holds.
///
/// The first failing item terminates this iterator permanently: the
/// item is dropped and the source is never polled again. A source
/// absence before any failure propagates without terminating, so a
/// resumable source may continue afterwards.
///
/// Created by [`Pull::take_while`].
#[derive(Clone)]
#[must_use = "adapters are lazy and do nothing unless pulled"]
pub struct TakeWhile<S, F> {
    source: S,
    predicate: F,
    done: bool,
}

impl<S, F> TakeWhile<S, F> {
    #[inline]
    pub(crate) const fn new(source: S, predicate: F) -> Self {
        Self {
            source,
            predicate,
            done: false,
        }
    }
}

impl<S, F> Pull for TakeWhile<S, F>
where
    S: Pull,
    F: FnMut(&S::Item) -> bool,
{
    type Item = S::Item;

    fn next(&mut self) -> Maybe<S::Item> {
        if self.done {
            return Maybe::Absent;
        }
        match self.source.next() {
            Maybe::Present(item) => {
                if (self.predicate)(&item) {
                    Maybe::Present(item)
                } else {
                    self.done = true;
                    Maybe::Absent
                }
            }
            Maybe::Absent => Maybe::Absent,
        }
    }
}

// =============================================================================
// Flatten
// =============================================================================

/// An iterator that flattens an iterator of iterators.
///
/// Each inner iterator is drained to its first absence before the next
/// outer item is pulled, as if all inner iterators were chained.
///
/// Created by [`Pull::flatten`].
#[must_use = "adapters are lazy and do nothing unless pulled"]
pub struct Flatten<S: Pull> {
    outer: S,
    inner: Maybe<S::Item>,
}

impl<S: Pull> Flatten<S> {
    #[inline]
    pub(crate) const fn new(outer: S) -> Self {
        Self {
            outer,
            inner: Maybe::Absent,
        }
    }
}

impl<S> Pull for Flatten<S>
where
    S: Pull,
    S::Item: Pull,
{
    type Item = <S::Item as Pull>::Item;

    fn next(&mut self) -> Maybe<Self::Item> {
        loop {
            if let Maybe::Present(ref mut inner) = self.inner {
                let item = inner.next();
                if item.is_present() {
                    return item;
                }
            }
            match self.outer.next() {
                Maybe::Present(inner) => self.inner = Maybe::Present(inner),
                Maybe::Absent => {
                    self.inner = Maybe::Absent;
                    return Maybe::Absent;
                }
            }
        }
    }
}
