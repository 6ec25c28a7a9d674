//! # lazypull
//!
//! A lazy, pull-based iterator library providing a combinator algebra
//! over an optional-value protocol.
//!
//! ## Overview
//!
//! This library models sequences as *pull* protocols: any value with a
//! `next()` operation returning a [`Maybe`](maybe::Maybe) is a valid
//! iterator. On top of that single primitive it provides:
//!
//! - **Sources**: `from_fn`, `from_seq`, `empty`, `once`, `repeat`, `successors`
//! - **Adapters**: map, filter, chain, zip, enumerate, skip, `skip_while`,
//!   take, `take_while`, peekable, fuse, flatten
//! - **Terminals**: `for_each`, fold, count, last, nth, find, all, any
//! - **Interop**: a two-way bridge to `std::iter::Iterator`
//!
//! Everything is single-threaded, synchronous, and effect-free until
//! pulled. Exhaustion is a value, not an error: `next()` returns
//! `Absent` when no item is available, and (for non-fused sources) may
//! legally yield `Present` again afterwards.
//!
//! ## Feature Flags
//!
//! - `maybe`: The optional-value protocol (`Maybe<T>`)
//! - `pull`: The iterator core (sources, adapters, terminals)
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use lazypull::prelude::*;
//!
//! let sum = from_seq(vec![1, 2, 3, 4])
//!     .map(|x| x * 10)
//!     .filter(|x| x % 20 == 0)
//!     .fold(0, |accumulator, item| accumulator + item);
//! assert_eq!(sum, 60);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
// Note: Disabling redundant_closure_for_method_calls due to clippy 0.1.92 panic bug
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use lazypull::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "maybe")]
    pub use crate::maybe::*;

    #[cfg(feature = "pull")]
    pub use crate::pull::*;
}

#[cfg(feature = "maybe")]
pub mod maybe;

#[cfg(feature = "pull")]
pub mod pull;

#[cfg(test)]
mod tests {
    #[test]
    fn library_compiles() {
        // Basic smoke test to ensure the library compiles
        assert!(true);
    }
}
