use alloc::{
    string::{String, ToString},
    vec::Vec,
};

use quickcheck::QuickCheck;
use quickcheck_macros::quickcheck;

use super::arbitrary::PredicateChoice;
use crate::{FilteredStr, compose, split, substr};

/// Property: a reject-everything filter yields a view that is empty no
/// matter the buffer, while still reporting the full physical length.
#[quickcheck]
fn reject_all_view_is_empty(text: String) -> bool {
    let v = FilteredStr::with_filter(&text, |_| false);
    v.is_empty() && v.len() == 0 && v.to_string().is_empty() && v.unfiltered_len() == text.chars().count()
}

/// Property: cloning preserves equality and the underlying borrow.
#[quickcheck]
fn clones_compare_equal(text: String, choice: PredicateChoice) -> bool {
    let v = FilteredStr::with_predicate(&text, choice.build());
    let c = v.clone();
    c == v && c.data() == v.data()
}

/// Property: with an accept-everything predicate the view is transparent,
/// presenting the whole buffer unchanged.
#[test]
fn accept_all_view_is_transparent() {
    fn prop(text: String) -> bool {
        let v = FilteredStr::with_filter(&text, |_| true);
        v.len() == text.chars().count() && v.to_string() == text
    }
    QuickCheck::new().quickcheck(prop as fn(String) -> bool);
}

/// Property: materialization length always matches the logical size.
#[test]
fn materialized_length_matches_logical_size() {
    fn prop(text: String, choice: PredicateChoice) -> bool {
        let v = FilteredStr::with_predicate(&text, choice.build());
        v.to_string().chars().count() == v.len()
    }
    QuickCheck::new().quickcheck(prop as fn(String, PredicateChoice) -> bool);
}

/// Property: `compose` with an empty predicate list presents the whole
/// buffer, regardless of what the source view hid.
#[test]
fn compose_with_empty_list_presents_everything() {
    fn prop(text: String, choice: PredicateChoice) -> bool {
        let v = FilteredStr::with_predicate(&text, choice.build());
        let composed = compose(&v, &[]);
        composed.data() == v.data() && composed.to_string() == text
    }
    QuickCheck::new().quickcheck(prop as fn(String, PredicateChoice) -> bool);
}

/// Property: composing `[p1, p2]` then `[p3]` shows the same content as
/// composing `[p1, p2, p3]` in one go.
#[test]
fn compose_is_associative_in_effect() {
    fn prop(
        text: String,
        a: PredicateChoice,
        b: PredicateChoice,
        c: PredicateChoice,
    ) -> bool {
        let v = FilteredStr::new(&text);
        let staged = compose(&compose(&v, &[a.build(), b.build()]), &[c.build()]);
        let direct = compose(&v, &[a.build(), b.build(), c.build()]);
        staged == direct
    }
    QuickCheck::new()
        .quickcheck(prop as fn(String, PredicateChoice, PredicateChoice, PredicateChoice) -> bool);
}

/// Property: iterating forward and reversing the collected sequence equals
/// iterating backward.
#[test]
fn reverse_iteration_is_consistent() {
    fn prop(text: String, choice: PredicateChoice) -> bool {
        let v = FilteredStr::with_predicate(&text, choice.build());
        let mut forward: Vec<char> = v.chars().collect();
        forward.reverse();
        let backward: Vec<char> = v.chars().rev().collect();
        forward == backward
    }
    QuickCheck::new().quickcheck(prop as fn(String, PredicateChoice) -> bool);
}

/// Property: the strict and permissive accessors agree on every in-range
/// index, and disagree exactly past the filtered length.
#[test]
fn strict_and_permissive_indexing_agree() {
    fn prop(text: String, choice: PredicateChoice) -> bool {
        let v = FilteredStr::with_predicate(&text, choice.build());
        let len = v.len();
        (0..len).all(|i| v.at(i).is_ok_and(|c| c == v.char_at(i)))
            && v.at(len).is_err()
            && v.char_at(len) == '\0'
    }
    QuickCheck::new().quickcheck(prop as fn(String, PredicateChoice) -> bool);
}

/// Property: joining split segments' underlying text with the delimiter
/// reconstructs the source buffer (when the delimiter is non-empty and the
/// source is non-empty through its filter).
#[test]
fn split_segments_reassemble_the_buffer() {
    fn prop(text: String, delimiter: String, choice: PredicateChoice) -> bool {
        let v = FilteredStr::with_predicate(&text, choice.build());
        let tok = FilteredStr::new(&delimiter);
        let parts = split(&v, &tok);
        if v.is_empty() || tok.is_empty() {
            return parts.len() == 1 && parts[0] == v;
        }
        let rejoined: Vec<&str> = parts.iter().map(FilteredStr::data).collect();
        rejoined.join(&delimiter) == text
    }
    QuickCheck::new().quickcheck(prop as fn(String, String, PredicateChoice) -> bool);
}

/// Property: every split segment carries the source predicate capability.
#[test]
fn split_segments_share_the_source_predicate() {
    fn prop(text: String, delimiter: String, choice: PredicateChoice) -> bool {
        let v = FilteredStr::with_predicate(&text, choice.build());
        let tok = FilteredStr::new(&delimiter);
        split(&v, &tok)
            .iter()
            .all(|part| alloc::sync::Arc::ptr_eq(part.predicate(), v.predicate()))
    }
    QuickCheck::new().quickcheck(prop as fn(String, String, PredicateChoice) -> bool);
}

/// Property: `substr` agrees with the skip/take oracle over the filtered
/// sequence, for any `pos` and `count`.
#[test]
fn substr_matches_the_skip_take_oracle() {
    fn prop(text: String, choice: PredicateChoice, pos: usize, count: usize, saturate: bool) -> bool {
        let v = FilteredStr::with_predicate(&text, choice.build());
        let len = v.len();
        let pos = if len == 0 { pos } else { pos % (len + 1) };
        // The generator only draws small values; pin half the runs to the
        // overflow-prone extreme so the clamp boundary stays covered.
        let count = if saturate { usize::MAX } else { count };
        let take = if count == 0 { usize::MAX } else { count };

        let expected: String = v.chars().skip(pos).take(take).collect();
        substr(&v, pos, count).to_string() == expected
    }
    QuickCheck::new()
        .quickcheck(prop as fn(String, PredicateChoice, usize, usize, bool) -> bool);
}

/// Property: `substr(v, 0, 0)` is the whole view.
#[test]
fn substr_of_everything_is_identity() {
    fn prop(text: String, choice: PredicateChoice) -> bool {
        let v = FilteredStr::with_predicate(&text, choice.build());
        substr(&v, 0, 0) == v
    }
    QuickCheck::new().quickcheck(prop as fn(String, PredicateChoice) -> bool);
}

/// Property: equality over filtered content implies equal orderings, and
/// ordering matches comparing materialized strings.
#[test]
fn ordering_matches_materialized_comparison() {
    fn prop(a: String, b: String, choice: PredicateChoice) -> bool {
        let va = FilteredStr::with_predicate(&a, choice.build());
        let vb = FilteredStr::with_predicate(&b, choice.build());
        va.cmp(&vb) == va.to_string().cmp(&vb.to_string())
    }
    QuickCheck::new().quickcheck(prop as fn(String, String, PredicateChoice) -> bool);
}

/// Property: predicate choices behave the same through the view as applied
/// directly to the character stream.
#[test]
fn view_filters_exactly_the_predicates_matches() {
    fn prop(text: String, choice: PredicateChoice) -> bool {
        let v = FilteredStr::with_predicate(&text, choice.build());
        let expected: String = text.chars().filter(|&c| choice.accepts(c)).collect();
        v.to_string() == expected
    }
    QuickCheck::new().quickcheck(prop as fn(String, PredicateChoice) -> bool);
}
