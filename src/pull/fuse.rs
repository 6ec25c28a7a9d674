//! Terminal absence over the pull protocol.
//!
//! [`Fuse`] upgrades a source's first absence into a permanent one.
//! Once terminated, the wrapped source is dropped: a resumable source
//! cannot be polled again even by accident.

use crate::maybe::Maybe;

use super::protocol::Pull;

/// The fuse state: either the source is still live, or the first
/// absence has been observed and the source is gone.
#[derive(Clone, Debug)]
enum FuseState<S> {
    Active(S),
    Done,
}

/// An iterator for which absence is terminal.
///
/// Created by [`Pull::fuse`].
///
/// # Invariant
///
/// Once a pull returns `Absent`, every subsequent pull returns
/// `Absent`, even if the wrapped source would otherwise have resumed
/// yielding items.
///
/// # Examples
///
/// ```rust
/// use lazypull::maybe::Maybe;
/// use lazypull::pull::{Pull, from_seq};
///
/// let mut items = from_seq(vec![1]).fuse();
/// assert_eq!(items.next(), Maybe::present(1));
/// assert_eq!(items.next(), Maybe::absent());
/// assert_eq!(items.next(), Maybe::absent());
/// ```
#[derive(Clone, Debug)]
#[must_use = "adapters are lazy and do nothing unless pulled"]
pub struct Fuse<S> {
    state: FuseState<S>,
}

impl<S> Fuse<S> {
    #[inline]
    pub(crate) const fn new(source: S) -> Self {
        Self {
            state: FuseState::Active(source),
        }
    }
}

impl<S: Pull> Pull for Fuse<S> {
    type Item = S::Item;

    fn next(&mut self) -> Maybe<S::Item> {
        let item = match self.state {
            FuseState::Active(ref mut source) => source.next(),
            FuseState::Done => return Maybe::Absent,
        };
        if item.is_absent() {
            self.state = FuseState::Done;
        }
        item
    }
}
