#![no_main]

use arbitrary::Arbitrary;
use charsieve::{FilteredStr, Predicate, compose, split, substr};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Clone, Copy, Arbitrary)]
enum Filter {
    All,
    Alphabetic,
    Digit,
    Ascii,
    NotSpace,
}

impl Filter {
    fn build(self) -> Predicate {
        match self {
            Self::All => std::sync::Arc::new(|_| true),
            Self::Alphabetic => std::sync::Arc::new(char::is_alphabetic),
            Self::Digit => std::sync::Arc::new(|c: char| c.is_ascii_digit()),
            Self::Ascii => std::sync::Arc::new(|c: char| c.is_ascii()),
            Self::NotSpace => std::sync::Arc::new(|c: char| c != ' '),
        }
    }

    fn accepts(self, c: char) -> bool {
        (self.build())(c)
    }
}

#[derive(Debug, Arbitrary)]
struct Input {
    text: String,
    token: String,
    filter: Filter,
    pos: usize,
    count: usize,
}

fuzz_target!(|input: Input| {
    let Input {
        text,
        token,
        filter,
        pos,
        count,
    } = input;
    let v = FilteredStr::with_predicate(&text, filter.build());

    // Materialization agrees with a plain filter pass.
    let expected: String = text.chars().filter(|&c| filter.accepts(c)).collect();
    assert_eq!(v.to_string(), expected);
    assert_eq!(v.len(), expected.chars().count());

    // Indexing policies agree in range, diverge as specified out of range.
    let len = v.len();
    for i in [0, len / 2, len.saturating_sub(1), len, len + 1] {
        match v.at(i) {
            Ok(c) => assert_eq!(c, v.char_at(i)),
            Err(_) => {
                assert!(i >= len);
                assert_eq!(v.char_at(i), '\0');
            }
        }
    }

    // Reverse iteration is the mirrored forward sequence.
    let mut forward: Vec<char> = v.chars().collect();
    forward.reverse();
    let backward: Vec<char> = v.chars().rev().collect();
    assert_eq!(forward, backward);

    // Split segments reassemble the source buffer.
    let tok = FilteredStr::new(&token);
    let parts = split(&v, &tok);
    assert!(!parts.is_empty());
    if v.is_empty() || tok.is_empty() {
        assert_eq!(parts.len(), 1);
        assert_eq!(parts[0], v);
    } else {
        let raw: Vec<&str> = parts.iter().map(FilteredStr::data).collect();
        assert_eq!(raw.join(&token), text);
    }

    // Substr matches the skip/take oracle over the filtered sequence, for
    // full-range pos/count including the overflow-prone extremes.
    let take = if count == 0 { usize::MAX } else { count };
    let oracle: String = v.chars().skip(pos).take(take).collect();
    assert_eq!(substr(&v, pos, count).to_string(), oracle);

    // Compose with the empty list restores the full buffer.
    assert_eq!(compose(&v, &[]).to_string(), text);
});
