//! A non-owning, lazily filtered string view.
//!
//! [`FilteredStr`] borrows a `&str` together with a [`Predicate`] and
//! presents only the characters the predicate accepts, without copying or
//! mutating the underlying text. The filtered length is recomputed on every
//! query, so stateful predicates observe every scan.
//!
//! ```
//! use charsieve::FilteredStr;
//!
//! let v = FilteredStr::with_filter("vowels are overrated", |c| !"aeiou".contains(c));
//! assert_eq!(v.to_string(), "vwls r vrrtd");
//! assert_eq!(v.len(), 12);
//! assert_eq!(v.data(), "vowels are overrated");
//! ```
//!
//! Derived views share the original buffer: [`split`] and [`substr`] return
//! sub-slices of it carrying the source predicate forward, and [`compose`]
//! re-filters the same buffer through a conjunction of predicates.

#![no_std]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod error;
mod iter;
mod ops;
mod predicate;
mod view;

#[cfg(test)]
mod tests;

pub use error::OutOfRange;
pub use iter::Chars;
pub use ops::{compose, split, substr};
pub use predicate::{Predicate, accept_all, all_of};
pub use view::FilteredStr;
