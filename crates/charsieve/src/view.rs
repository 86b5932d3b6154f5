//! The view core: a borrowed `&str` plus a predicate.
//!
//! `FilteredStr` owns nothing. Copying it copies the borrow and bumps the
//! predicate's reference count; dropping it has no visible effect. The
//! filtered length is a function of the predicate, recomputed by scanning on
//! every call, so a predicate with side effects sees every query.

use alloc::sync::Arc;
use core::{
    cmp::Ordering,
    fmt::{self, Write},
};

use crate::{
    error::OutOfRange,
    iter::Chars,
    predicate::{Predicate, accept_all},
};

/// A non-owning view presenting only the characters of a borrowed `&str`
/// that satisfy a predicate.
///
/// The view borrows `'a`-lived text and never outlives it. Equality and
/// ordering are defined over the *filtered* character sequence, so two views
/// over different buffers compare equal when they present the same
/// characters.
///
/// # Examples
///
/// ```
/// use charsieve::FilteredStr;
///
/// let digits = FilteredStr::with_filter("a1b2c3", |c| c.is_ascii_digit());
/// assert_eq!(digits.len(), 3);
/// assert_eq!(digits.to_string(), "123");
/// assert_eq!(digits, FilteredStr::new("123"));
/// ```
#[derive(Clone)]
pub struct FilteredStr<'a> {
    data: &'a str,
    predicate: Predicate,
}

impl<'a> FilteredStr<'a> {
    /// Creates a view over `data` that presents every character.
    #[must_use]
    pub fn new(data: &'a str) -> Self {
        Self {
            data,
            predicate: accept_all(),
        }
    }

    /// Creates a view over `data` filtered by `f`.
    ///
    /// The closure may capture state; it is boxed behind the shared
    /// [`Predicate`] type so derived views and iterators invoke the same
    /// capability.
    #[must_use]
    pub fn with_filter<F>(data: &'a str, f: F) -> Self
    where
        F: Fn(char) -> bool + Send + Sync + 'static,
    {
        Self {
            data,
            predicate: Arc::new(f),
        }
    }

    /// Creates a view over `data` sharing an existing predicate capability.
    ///
    /// This is how [`split`](crate::split) and [`substr`](crate::substr)
    /// carry the source predicate into derived views without re-boxing it.
    #[must_use]
    pub fn with_predicate(data: &'a str, predicate: Predicate) -> Self {
        Self { data, predicate }
    }

    /// Returns the underlying unfiltered text.
    ///
    /// The returned slice is the whole borrowed range; it may contain
    /// characters the predicate rejects.
    #[must_use]
    pub fn data(&self) -> &'a str {
        self.data
    }

    /// Returns the stored predicate capability.
    #[must_use]
    pub fn predicate(&self) -> &Predicate {
        &self.predicate
    }

    /// Counts the characters currently accepted by the predicate.
    ///
    /// O(buffer length); the count is recomputed by scanning on every call
    /// and never cached, so stateful predicates are re-consulted each time.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.chars().filter(|&c| (self.predicate)(c)).count()
    }

    /// Returns `true` when no character passes the predicate.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chars().next().is_none()
    }

    /// Counts the characters of the underlying text, irrespective of the
    /// predicate.
    #[must_use]
    pub fn unfiltered_len(&self) -> usize {
        self.data.chars().count()
    }

    /// Permissive indexing: returns the `n`-th character of the filtered
    /// sequence, or `'\0'` when `n` is out of range.
    ///
    /// The sentinel return is deliberate low-ceremony access; callers that
    /// must reject out-of-range indices use [`at`](Self::at) instead.
    ///
    /// ```
    /// use charsieve::FilteredStr;
    ///
    /// let v = FilteredStr::with_filter("ab", |c| c == 'a');
    /// assert_eq!(v.char_at(0), 'a');
    /// assert_eq!(v.char_at(1), '\0');
    /// ```
    #[must_use]
    pub fn char_at(&self, n: usize) -> char {
        self.chars().nth(n).unwrap_or('\0')
    }

    /// Strict indexing: returns the `index`-th character of the filtered
    /// sequence.
    ///
    /// # Errors
    ///
    /// Returns [`OutOfRange`] when `index >= self.len()`.
    pub fn at(&self, index: usize) -> Result<char, OutOfRange> {
        self.chars().nth(index).ok_or_else(|| OutOfRange {
            index,
            len: self.len(),
        })
    }

    /// Returns an iterator over the characters accepted by the predicate.
    ///
    /// The iterator is double-ended; reverse traversal is `chars().rev()`.
    #[must_use]
    pub fn chars(&self) -> Chars<'a> {
        Chars::new(self.data, self.predicate.clone())
    }
}

impl Default for FilteredStr<'_> {
    /// The empty view: borrows `""` and accepts everything.
    fn default() -> Self {
        Self::new("")
    }
}

impl<'a> From<&'a str> for FilteredStr<'a> {
    fn from(data: &'a str) -> Self {
        Self::new(data)
    }
}

/// Writes the filtered characters, in order, to the sink.
///
/// `to_string()` is the explicit materialization of a view: the only place
/// its content is copied.
impl fmt::Display for FilteredStr<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in self.chars() {
            f.write_char(c)?;
        }
        Ok(())
    }
}

impl fmt::Debug for FilteredStr<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("FilteredStr(\"")?;
        for c in self.chars() {
            for esc in c.escape_debug() {
                f.write_char(esc)?;
            }
        }
        f.write_str("\")")
    }
}

/// Value semantics: views are equal iff their filtered sequences are equal.
impl PartialEq for FilteredStr<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.chars().eq(other.chars())
    }
}

impl Eq for FilteredStr<'_> {}

/// Lexicographic three-way ordering over the filtered sequences.
impl Ord for FilteredStr<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.chars().cmp(other.chars())
    }
}

impl PartialOrd for FilteredStr<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// Serialize as the filtered string. The `cfg_attr`-style gating mirrors how
// optional serde support is wired: available in tests and behind the `serde`
// feature for downstream crates.
#[cfg(any(test, feature = "serde"))]
impl serde::Serialize for FilteredStr<'_> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}
