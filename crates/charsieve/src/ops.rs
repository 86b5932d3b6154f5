//! Free functions deriving new views from existing ones.
//!
//! All three keep the zero-copy contract: `compose` reuses the source's
//! whole buffer, and `split`/`substr` hand out sub-slices of it, so every
//! derived view is bounded by the same borrow as its origin and nothing is
//! allocated for backing storage.

use alloc::{string::ToString, vec, vec::Vec};

use crate::{
    predicate::{Predicate, all_of},
    view::FilteredStr,
};

/// Builds a view over the same underlying buffer as `view`, filtered by the
/// left-to-right short-circuit AND of `predicates`.
///
/// The composite replaces the source's predicate; an empty list yields a
/// view that presents the whole buffer. The full original range is retained,
/// so [`FilteredStr::len`] and iteration scan the same span the source did.
///
/// ```
/// use std::sync::Arc;
/// use charsieve::{FilteredStr, Predicate, compose};
///
/// let best = FilteredStr::new("c/c++");
/// let filters: Vec<Predicate> = vec![
///     Arc::new(|c: char| c == 'c' || c == '+' || c == '/'),
///     Arc::new(|c: char| c > ' '),
/// ];
/// assert_eq!(compose(&best, &filters).to_string(), "c/c++");
/// ```
#[must_use]
pub fn compose<'a>(view: &FilteredStr<'a>, predicates: &[Predicate]) -> FilteredStr<'a> {
    FilteredStr::with_predicate(view.data(), all_of(predicates))
}

/// Partitions `view` into sub-views separated by `token`'s filtered content.
///
/// The delimiter is searched for in `view`'s **unfiltered** underlying
/// buffer; each emitted segment is a sub-slice of that buffer carrying the
/// source predicate. Delimiters at the start or end, and adjacent
/// delimiters, produce empty segments, like `str::split`.
///
/// When `view` or `token` has zero filtered length, the result is a single
/// element equal to `view` (the defined fallback, not an error).
///
/// ```
/// use charsieve::{FilteredStr, split};
///
/// let v = FilteredStr::new("xax");
/// let parts = split(&v, &FilteredStr::new("x"));
/// let parts: Vec<String> = parts.iter().map(ToString::to_string).collect();
/// assert_eq!(parts, ["", "a", ""]);
/// ```
#[must_use]
pub fn split<'a>(view: &FilteredStr<'a>, token: &FilteredStr<'_>) -> Vec<FilteredStr<'a>> {
    if view.is_empty() || token.is_empty() {
        return vec![view.clone()];
    }
    let delimiter = token.to_string();
    view.data()
        .split(delimiter.as_str())
        .map(|segment| FilteredStr::with_predicate(segment, view.predicate().clone()))
        .collect()
}

/// Returns the view of the filtered characters at logical offsets
/// `[pos, pos + rcount)`, where `rcount` is `count` clamped to the filtered
/// length remaining from `pos`, and `count == 0` requests the rest of the
/// view.
///
/// The result is a sub-slice of the underlying buffer spanning from the
/// `pos`-th match to the `(pos + rcount)`-th, still filtered by the source
/// predicate; characters the predicate rejects may sit between the matches
/// and remain invisible. When `pos` is past the filtered length the result
/// is an empty view that still carries the predicate.
///
/// ```
/// use charsieve::{FilteredStr, substr};
///
/// let v = FilteredStr::new("Samoyed");
/// assert_eq!(substr(&v, 0, 3).to_string(), "Sam");
/// assert_eq!(substr(&v, 4, 0).to_string(), "yed");
/// ```
#[must_use]
pub fn substr<'a>(view: &FilteredStr<'a>, pos: usize, count: usize) -> FilteredStr<'a> {
    let data = view.data();
    let predicate = view.predicate();

    let mut start = None;
    let mut end = data.len();
    let mut skipped = 0usize;
    let mut taken = 0usize;
    // `skipped` and `taken` are bounded by the buffer's character count, so
    // arbitrarily large `pos`/`count` never enter the arithmetic.
    for (offset, c) in data.char_indices() {
        if !(predicate)(c) {
            continue;
        }
        if start.is_none() {
            if skipped < pos {
                skipped += 1;
                continue;
            }
            start = Some(offset);
        }
        if count > 0 && taken == count {
            end = offset;
            break;
        }
        taken += 1;
    }

    match start {
        Some(start) => FilteredStr::with_predicate(&data[start..end], predicate.clone()),
        // `pos` is past the filtered length.
        None => FilteredStr::with_predicate("", predicate.clone()),
    }
}
