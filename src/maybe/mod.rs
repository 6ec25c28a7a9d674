//! The optional-value protocol.
//!
//! This module provides [`Maybe`], the tagged sum type the iterator core
//! consumes through a small protocol surface:
//!
//! - Construction: [`Maybe::present`], [`Maybe::absent`]
//! - Inspection: [`Maybe::is_present`], [`Maybe::is_absent`]
//! - Extraction: [`Maybe::into_option`], [`Maybe::unwrap_or`],
//!   [`Maybe::expect_present`], [`Maybe::take`]
//!
//! The absent marker is a distinct variant, never a sentinel payload:
//! `Present(0)`, `Present(false)`, and `Present("")` are all present.
//!
//! # Examples
//!
//! ```rust
//! use lazypull::maybe::Maybe;
//!
//! let present = Maybe::present(42);
//! assert!(present.is_present());
//! assert_eq!(present.map(|x| x * 2), Maybe::present(84));
//!
//! let absent: Maybe<i32> = Maybe::absent();
//! assert!(absent.is_absent());
//! assert_eq!(absent.unwrap_or(7), 7);
//! ```

mod value;

pub use value::Maybe;
