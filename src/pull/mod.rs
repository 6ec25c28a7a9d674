//! The pull-based iterator core.
//!
//! This module provides [`Pull`], a lazy sequence protocol with a single
//! primitive: `next()` returns `Present(item)` while items remain and
//! `Absent` when the sequence is (for now) exhausted. On top of it sit:
//!
//! - Source factories: [`from_fn`], [`from_seq`], [`empty`], [`once`],
//!   [`repeat`], [`successors`]
//! - Lazy adapters: `map`, `filter`, `chain`, `zip`, `enumerate`, `skip`,
//!   `skip_while`, `take`, `take_while`, `peekable`, `fuse`, `flatten`
//! - Consuming terminals: `for_each`, `fold`, `count`, `last`, `nth`,
//!   `find`, `all`, `any`
//! - A two-way bridge to `std::iter::Iterator`: [`from_std`] and
//!   [`Pull::into_std`]
//!
//! Adapters compose by wrapping: each one takes ownership of its source
//! and holds only its own cursor state. Nothing is computed until a
//! terminal (or an explicit `next()` call) pulls.
//!
//! # Examples
//!
//! ```rust
//! use lazypull::pull::{Pull, from_seq};
//!
//! let total = from_seq(vec![1, 2, 3, 4, 5])
//!     .filter(|x| x % 2 == 1)
//!     .map(|x| x * x)
//!     .fold(0, |accumulator, item| accumulator + item);
//! assert_eq!(total, 35);
//! ```
//!
//! ## Pulling by hand
//!
//! ```rust
//! use lazypull::maybe::Maybe;
//! use lazypull::pull::{Pull, from_seq};
//!
//! let mut items = from_seq(vec!["a", "b"]);
//! assert_eq!(items.next(), Maybe::present("a"));
//! assert_eq!(items.next(), Maybe::present("b"));
//! assert_eq!(items.next(), Maybe::absent());
//! ```

mod adapter;
mod fuse;
mod interop;
mod peekable;
mod protocol;
mod source;

pub use adapter::{Chain, Enumerate, Filter, Flatten, Map, Skip, SkipWhile, Take, TakeWhile, Zip};
pub use protocol::Pull;
pub use fuse::Fuse;
pub use interop::{FromStd, IntoStd, from_std};
pub use peekable::Peekable;
pub use source::{
    Empty, FromFn, Once, Repeat, Successors, empty, from_fn, from_seq, once, repeat, successors,
};
