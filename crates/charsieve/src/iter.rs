//! The lazy-skipping character iterator.
//!
//! `Chars` walks the underlying text of a view and yields only the
//! characters its predicate accepts. Both ends are supported; `.rev()` is
//! the reverse traversal, composed from the same forward machinery rather
//! than a second implementation.

use core::{fmt, iter::FusedIterator};

use crate::{predicate::Predicate, view::FilteredStr};

/// An iterator over the characters of a [`FilteredStr`] that satisfy its
/// predicate.
///
/// The iterator reborrows the view's buffer, so it remains valid for the
/// buffer's lifetime independently of the view it came from. Characters
/// rejected by the predicate are skipped at whichever end is being advanced.
///
/// # Examples
///
/// ```
/// use charsieve::FilteredStr;
///
/// let v = FilteredStr::with_filter("a1b2c3", |c| c.is_alphabetic());
/// assert_eq!(v.chars().collect::<String>(), "abc");
/// assert_eq!(v.chars().rev().collect::<String>(), "cba");
/// ```
#[derive(Clone)]
pub struct Chars<'a> {
    /// The unvisited span of the underlying buffer. Both ends shrink as the
    /// iterator is driven; the two ends never cross.
    rest: &'a str,
    predicate: Predicate,
}

impl<'a> Chars<'a> {
    pub(crate) fn new(rest: &'a str, predicate: Predicate) -> Self {
        Self { rest, predicate }
    }

    /// Returns the unvisited span of the underlying buffer, unfiltered.
    #[must_use]
    pub fn as_str(&self) -> &'a str {
        self.rest
    }
}

impl Iterator for Chars<'_> {
    type Item = char;

    fn next(&mut self) -> Option<char> {
        loop {
            let mut inner = self.rest.chars();
            let c = inner.next()?;
            self.rest = inner.as_str();
            if (self.predicate)(c) {
                return Some(c);
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        // Anywhere from nothing to every remaining character may match.
        (0, Some(self.rest.len()))
    }
}

impl DoubleEndedIterator for Chars<'_> {
    fn next_back(&mut self) -> Option<char> {
        loop {
            let mut inner = self.rest.chars();
            let c = inner.next_back()?;
            self.rest = inner.as_str();
            if (self.predicate)(c) {
                return Some(c);
            }
        }
    }
}

impl FusedIterator for Chars<'_> {}

impl fmt::Debug for Chars<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Chars").field("rest", &self.rest).finish()
    }
}

impl<'a> IntoIterator for &FilteredStr<'a> {
    type Item = char;
    type IntoIter = Chars<'a>;

    fn into_iter(self) -> Chars<'a> {
        self.chars()
    }
}
