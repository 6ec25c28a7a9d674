//! Bridges between the pull protocol and `std::iter::Iterator`.
//!
//! The two protocols differ in one respect only: `Iterator` models
//! exhaustion as `None` with conventionally-fused behavior, while
//! [`Pull`] models it as `Absent` with resumption explicitly allowed.
//! The bridges translate `Present`/`Some` and `Absent`/`None` directly
//! and impose no fusing of their own.

use crate::maybe::Maybe;

use super::protocol::Pull;

// =============================================================================
// FromStd
// =============================================================================

/// A pull iterator wrapping a standard iterator.
///
/// Created by [`from_std`]; this is also what backs
/// [`from_seq`](super::from_seq).
#[derive(Clone, Debug)]
#[must_use = "sources are lazy and do nothing unless pulled"]
pub struct FromStd<I> {
    source: I,
}

impl<I: Iterator> Pull for FromStd<I> {
    type Item = I::Item;

    #[inline]
    fn next(&mut self) -> Maybe<I::Item> {
        self.source.next().into()
    }
}

/// Wraps any standard iterator as a [`Pull`] source.
///
/// `Some` becomes `Present` and `None` becomes `Absent`, call by call.
///
/// # Examples
///
/// ```rust
/// use lazypull::maybe::Maybe;
/// use lazypull::pull::{Pull, from_std};
///
/// let mut squares = from_std((1..4).map(|x| x * x));
/// assert_eq!(squares.next(), Maybe::present(1));
/// assert_eq!(squares.next(), Maybe::present(4));
/// assert_eq!(squares.next(), Maybe::present(9));
/// assert_eq!(squares.next(), Maybe::absent());
/// ```
#[inline]
pub const fn from_std<I: Iterator>(iterator: I) -> FromStd<I> {
    FromStd { source: iterator }
}

// =============================================================================
// IntoStd
// =============================================================================

/// A standard iterator wrapping a pull iterator.
///
/// Created by [`Pull::into_std`].
///
/// For a non-fused source this adapter inherits the source's
/// resumption behavior, which standard consumers do not expect; fuse
/// before bridging when `None` must be final.
#[derive(Clone, Debug)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct IntoStd<P> {
    source: P,
}

impl<P> IntoStd<P> {
    #[inline]
    pub(crate) const fn new(source: P) -> Self {
        Self { source }
    }
}

impl<P: Pull> Iterator for IntoStd<P> {
    type Item = P::Item;

    #[inline]
    fn next(&mut self) -> Option<P::Item> {
        self.source.next().into_option()
    }
}
