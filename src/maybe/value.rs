//! Maybe type - an optional value with a tagged absent marker.
//!
//! This module provides the `Maybe<T>` type, a sum type with `Present(T)`
//! and `Absent` cases. It is the value protocol the pull-based iterator
//! core speaks: `next()` returns `Present(item)` while items remain and
//! `Absent` when the sequence is (for now) exhausted.
//!
//! Unlike a nullable encoding, the absent marker is a distinct variant
//! and can never be confused with a legitimate payload such as `0`,
//! `false`, or an empty string.
//!
//! # Examples
//!
//! ```rust
//! use lazypull::maybe::Maybe;
//!
//! // Creating Maybe values
//! let present: Maybe<i32> = Maybe::present(42);
//! let absent: Maybe<i32> = Maybe::absent();
//!
//! // Pattern matching
//! match present {
//!     Maybe::Present(n) => println!("Got value: {}", n),
//!     Maybe::Absent => println!("No value"),
//! }
//!
//! // Using the protocol surface
//! assert!(present.is_present());
//! assert_eq!(present.unwrap_or(0), 42);
//! assert_eq!(absent.unwrap_or(0), 0);
//! ```

use std::fmt;

/// An optional value: either `Present(T)` or `Absent`.
///
/// `Maybe<T>` is the exchange type of the iterator protocol. A pull
/// returning `Present` carries the next item; a pull returning `Absent`
/// signals that no item is available right now. Absence is a normal
/// return value, never an error.
///
/// # Type Parameters
///
/// * `T` - The type of the carried payload
///
/// # Examples
///
/// ```rust
/// use lazypull::maybe::Maybe;
///
/// let value: Maybe<i32> = Maybe::present(21);
/// let doubled = value.map(|x| x * 2);
/// assert_eq!(doubled, Maybe::present(42));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Maybe<T> {
    /// The present variant, carrying a payload.
    Present(T),
    /// The absent variant, signaling no value available.
    Absent,
}

impl<T> Maybe<T> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Creates a present value carrying `value`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazypull::maybe::Maybe;
    ///
    /// let value = Maybe::present("hello");
    /// assert!(value.is_present());
    /// ```
    #[inline]
    pub const fn present(value: T) -> Self {
        Self::Present(value)
    }

    /// Creates an absent value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazypull::maybe::Maybe;
    ///
    /// let value: Maybe<i32> = Maybe::absent();
    /// assert!(value.is_absent());
    /// ```
    #[inline]
    pub const fn absent() -> Self {
        Self::Absent
    }

    // =========================================================================
    // Inspection
    // =========================================================================

    /// Returns `true` if this is a `Present` value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazypull::maybe::Maybe;
    ///
    /// assert!(Maybe::present(0).is_present());
    /// assert!(!Maybe::<i32>::absent().is_present());
    /// ```
    #[inline]
    pub const fn is_present(&self) -> bool {
        matches!(self, Self::Present(_))
    }

    /// Returns `true` if this is an `Absent` value.
    ///
    /// This is the logical negation of [`Maybe::is_present`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazypull::maybe::Maybe;
    ///
    /// assert!(Maybe::<i32>::absent().is_absent());
    /// assert!(!Maybe::present(false).is_absent());
    /// ```
    #[inline]
    pub const fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    // =========================================================================
    // Value Extraction (Consuming)
    // =========================================================================

    /// Converts the `Maybe` into a standard `Option<T>`.
    ///
    /// Returns `Some(value)` if present, otherwise `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazypull::maybe::Maybe;
    ///
    /// assert_eq!(Maybe::present(42).into_option(), Some(42));
    /// assert_eq!(Maybe::<i32>::absent().into_option(), None);
    /// ```
    #[inline]
    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Present(value) => Some(value),
            Self::Absent => None,
        }
    }

    /// Returns the payload, or `default` if absent.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazypull::maybe::Maybe;
    ///
    /// assert_eq!(Maybe::present(42).unwrap_or(0), 42);
    /// assert_eq!(Maybe::absent().unwrap_or(0), 0);
    /// ```
    #[inline]
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Self::Present(value) => value,
            Self::Absent => default,
        }
    }

    /// Returns the payload, or computes a default from `function` if absent.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazypull::maybe::Maybe;
    ///
    /// assert_eq!(Maybe::present(42).unwrap_or_else(|| 0), 42);
    /// assert_eq!(Maybe::absent().unwrap_or_else(|| 7), 7);
    /// ```
    #[inline]
    pub fn unwrap_or_else<F>(self, function: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Self::Present(value) => value,
            Self::Absent => function(),
        }
    }

    /// Returns the payload, consuming the `Maybe`.
    ///
    /// # Panics
    ///
    /// Panics with `message` if this is an `Absent` value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazypull::maybe::Maybe;
    ///
    /// let value = Maybe::present("hello");
    /// assert_eq!(value.expect_present("value must be present"), "hello");
    /// ```
    #[inline]
    pub fn expect_present(self, message: &str) -> T {
        match self {
            Self::Present(value) => value,
            Self::Absent => panic!("{message}"),
        }
    }

    // =========================================================================
    // Reference Extraction (Non-consuming)
    // =========================================================================

    /// Converts from `&Maybe<T>` to `Maybe<&T>`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazypull::maybe::Maybe;
    ///
    /// let value = Maybe::present("hello".to_string());
    /// assert_eq!(value.as_ref().map(|s| s.len()), Maybe::present(5));
    /// // `value` is still usable afterwards
    /// assert!(value.is_present());
    /// ```
    #[inline]
    pub const fn as_ref(&self) -> Maybe<&T> {
        match self {
            Self::Present(value) => Maybe::Present(value),
            Self::Absent => Maybe::Absent,
        }
    }

    /// Takes the payload out, leaving `Absent` in its place.
    ///
    /// This is the buffered-lookahead primitive: a peek slot hands its
    /// item over exactly once, without cloning.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazypull::maybe::Maybe;
    ///
    /// let mut slot = Maybe::present(42);
    /// assert_eq!(slot.take(), Maybe::present(42));
    /// assert!(slot.is_absent());
    /// assert_eq!(slot.take(), Maybe::absent());
    /// ```
    #[inline]
    pub fn take(&mut self) -> Self {
        std::mem::replace(self, Self::Absent)
    }

    // =========================================================================
    // Mapping Operations
    // =========================================================================

    /// Applies a function to the payload if present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazypull::maybe::Maybe;
    ///
    /// assert_eq!(Maybe::present(3).map(|x| x + 1), Maybe::present(4));
    /// assert_eq!(Maybe::<i32>::absent().map(|x| x + 1), Maybe::absent());
    /// ```
    #[inline]
    pub fn map<U, F>(self, function: F) -> Maybe<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Present(value) => Maybe::Present(function(value)),
            Self::Absent => Maybe::Absent,
        }
    }

    /// Applies a `Maybe`-returning function to the payload if present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazypull::maybe::Maybe;
    ///
    /// let half = |x: i32| {
    ///     if x % 2 == 0 { Maybe::present(x / 2) } else { Maybe::absent() }
    /// };
    /// assert_eq!(Maybe::present(4).and_then(half), Maybe::present(2));
    /// assert_eq!(Maybe::present(3).and_then(half), Maybe::absent());
    /// ```
    #[inline]
    pub fn and_then<U, F>(self, function: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Maybe<U>,
    {
        match self {
            Self::Present(value) => function(value),
            Self::Absent => Maybe::Absent,
        }
    }

    /// Keeps the payload only if `predicate` holds for it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazypull::maybe::Maybe;
    ///
    /// assert_eq!(Maybe::present(4).filter_present(|x| x % 2 == 0), Maybe::present(4));
    /// assert_eq!(Maybe::present(3).filter_present(|x| x % 2 == 0), Maybe::absent());
    /// ```
    #[inline]
    pub fn filter_present<F>(self, predicate: F) -> Self
    where
        F: FnOnce(&T) -> bool,
    {
        match self {
            Self::Present(value) if predicate(&value) => Self::Present(value),
            _ => Self::Absent,
        }
    }

    /// Returns this value if present, otherwise evaluates `function`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazypull::maybe::Maybe;
    ///
    /// let fallback = || Maybe::present(7);
    /// assert_eq!(Maybe::present(1).or_else(fallback), Maybe::present(1));
    /// assert_eq!(Maybe::absent().or_else(fallback), Maybe::present(7));
    /// ```
    #[inline]
    pub fn or_else<F>(self, function: F) -> Self
    where
        F: FnOnce() -> Self,
    {
        match self {
            Self::Present(value) => Self::Present(value),
            Self::Absent => function(),
        }
    }

    /// Combines two `Maybe`s with `function`, present only if both are.
    ///
    /// This is the pairing primitive behind `zip`: a result exists only
    /// when both sides carry a payload.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazypull::maybe::Maybe;
    ///
    /// let left = Maybe::present(2);
    /// let right = Maybe::present(3);
    /// assert_eq!(left.zip_with(right, |a, b| a * b), Maybe::present(6));
    ///
    /// let absent: Maybe<i32> = Maybe::absent();
    /// assert_eq!(Maybe::present(2).zip_with(absent, |a, b| a * b), Maybe::absent());
    /// ```
    #[inline]
    pub fn zip_with<U, V, F>(self, other: Maybe<U>, function: F) -> Maybe<V>
    where
        F: FnOnce(T, U) -> V,
    {
        match (self, other) {
            (Self::Present(left), Maybe::Present(right)) => Maybe::Present(function(left, right)),
            _ => Maybe::Absent,
        }
    }
}

// =============================================================================
// Default Implementation
// =============================================================================

impl<T> Default for Maybe<T> {
    /// Returns `Absent`, the empty state of the protocol.
    #[inline]
    fn default() -> Self {
        Self::Absent
    }
}

// =============================================================================
// Debug Implementation
// =============================================================================

impl<T: fmt::Debug> fmt::Debug for Maybe<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Present(value) => formatter.debug_tuple("Present").field(value).finish(),
            Self::Absent => formatter.write_str("Absent"),
        }
    }
}

// =============================================================================
// From Implementations
// =============================================================================

impl<T> From<Option<T>> for Maybe<T> {
    /// Converts an `Option` to a `Maybe`.
    ///
    /// `Some(value)` becomes `Present(value)`, and `None` becomes `Absent`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazypull::maybe::Maybe;
    ///
    /// let maybe: Maybe<i32> = Some(42).into();
    /// assert_eq!(maybe, Maybe::present(42));
    ///
    /// let maybe: Maybe<i32> = None.into();
    /// assert_eq!(maybe, Maybe::absent());
    /// ```
    #[inline]
    fn from(option: Option<T>) -> Self {
        match option {
            Some(value) => Self::Present(value),
            None => Self::Absent,
        }
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    /// Converts a `Maybe` to an `Option`.
    ///
    /// `Present(value)` becomes `Some(value)`, and `Absent` becomes `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazypull::maybe::Maybe;
    ///
    /// let option: Option<i32> = Maybe::present(42).into();
    /// assert_eq!(option, Some(42));
    /// ```
    #[inline]
    fn from(maybe: Maybe<T>) -> Self {
        maybe.into_option()
    }
}

// =============================================================================
// Compile-time Guarantees
// =============================================================================

static_assertions::assert_impl_all!(Maybe<u8>: Copy, Send, Sync);
static_assertions::assert_impl_all!(Maybe<String>: Clone, Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_present_construction() {
        let value = Maybe::present(42);
        assert!(value.is_present());
        assert!(!value.is_absent());
    }

    #[rstest]
    fn test_absent_construction() {
        let value: Maybe<i32> = Maybe::absent();
        assert!(value.is_absent());
        assert!(!value.is_present());
    }

    #[rstest]
    #[case(Maybe::present(0))]
    #[case(Maybe::present(-1))]
    fn test_falsy_payloads_are_present(#[case] value: Maybe<i32>) {
        assert!(value.is_present());
    }

    #[rstest]
    fn test_option_conversion_roundtrip() {
        let some: Option<i32> = Some(42);
        let maybe: Maybe<i32> = some.into();
        let back: Option<i32> = maybe.into();
        assert_eq!(back, Some(42));

        let none: Option<i32> = None;
        let maybe: Maybe<i32> = none.into();
        let back: Option<i32> = maybe.into();
        assert_eq!(back, None);
    }

    #[rstest]
    fn test_take_leaves_absent() {
        let mut slot = Maybe::present("item");
        assert_eq!(slot.take(), Maybe::present("item"));
        assert!(slot.is_absent());
    }
}
