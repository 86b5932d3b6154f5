use thiserror::Error;

/// Error returned by [`FilteredStr::at`](crate::FilteredStr::at) when the
/// requested index is outside the filtered sequence.
///
/// Carries the offending index and the filtered length it was checked
/// against. Note the length is the predicate's answer at the time of the
/// call; a stateful predicate may report a different length later.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("at({index}): index out of range for filtered length {len}")]
pub struct OutOfRange {
    /// The index the caller asked for.
    pub index: usize,
    /// The filtered length at the time of the call.
    pub len: usize,
}
