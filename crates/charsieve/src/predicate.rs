//! The predicate capability: a shared, dynamically dispatched character
//! filter.
//!
//! Predicates are reference-counted so a view, its clones, and its iterators
//! all invoke the same capability. A predicate may capture state (through
//! interior mutability) and may have side effects; the crate re-invokes it on
//! every scan and never memoizes its answers.

use alloc::{sync::Arc, vec::Vec};

/// A shared callable deciding, per character, whether it is visible through a
/// view.
///
/// `Send + Sync` is required so that views over the same buffer can be read
/// from multiple threads, matching the shared-immutable contract of
/// [`FilteredStr`](crate::FilteredStr).
pub type Predicate = Arc<dyn Fn(char) -> bool + Send + Sync>;

/// The default predicate: accepts every character.
///
/// ```
/// use charsieve::accept_all;
///
/// let p = accept_all();
/// assert!(p('a') && p('\0') && p('中'));
/// ```
#[must_use]
pub fn accept_all() -> Predicate {
    Arc::new(|_| true)
}

/// Conjoins an ordered list of predicates into one.
///
/// The composite evaluates left to right and stops at the first rejecting
/// predicate. An empty list accepts everything (the identity for AND).
///
/// ```
/// use std::sync::Arc;
/// use charsieve::{Predicate, all_of};
///
/// let filters: Vec<Predicate> = vec![
///     Arc::new(|c: char| c.is_alphabetic()),
///     Arc::new(|c: char| c.is_uppercase()),
/// ];
/// let p = all_of(&filters);
/// assert!(p('A'));
/// assert!(!p('a'));
/// assert!(!p('1'));
/// ```
#[must_use]
pub fn all_of(predicates: &[Predicate]) -> Predicate {
    let predicates: Vec<Predicate> = predicates.to_vec();
    Arc::new(move |c| predicates.iter().all(|p| p(c)))
}
