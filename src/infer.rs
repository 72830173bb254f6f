//! Style inference heuristic for ambiguous quote glyphs
//!
//! The straight `'` and the curly `\u{2019}` double as apostrophes, so their
//! raw classification cannot be trusted. Possessives and decade elisions are
//! the dominant real-world sources of that ambiguity; this module resolves
//! them from local sibling context without any broader grammatical analysis.

use std::sync::LazyLock;

use regex::Regex;

use crate::nesting::NestingStack;
use crate::traits::TokenContext;
use crate::types::{Marker, MarkerKind, SMART_APOSTROPHE, STRAIGHT_APOSTROPHE};

/// Two digits followed by `s`, as in the elision `\u{2019}80s`
static DECADE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d\ds$").expect("valid pattern"));

/// Whether a token's text is one of the two apostrophe-ambiguous glyphs
pub(crate) fn is_ambiguous(text: &str) -> bool {
    let mut chars = text.chars();
    matches!(
        (chars.next(), chars.next()),
        (Some(STRAIGHT_APOSTROPHE) | Some(SMART_APOSTROPHE), None)
    )
}

/// Resolve an ambiguous or unresolved marker to a definite role
///
/// Decision order:
/// 1. Inside a word: apostrophe (contractions like `isn't`).
/// 2. After a word or source span: apostrophe when that word ends in `s` and
///    no same-pair quote is open (trailing possessive, `Mr. Jones' clubs`),
///    close otherwise.
/// 3. Before a word: apostrophe for decades (`'80s`), open otherwise.
/// 4. No usable neighbors: the stack's generic open/close decision.
pub fn infer_kind(
    marker: &Marker,
    token: &impl TokenContext,
    stack: &NestingStack,
) -> MarkerKind {
    if is_ambiguous(token.text()) {
        if token.within_word() {
            return MarkerKind::Apostrophe;
        }

        if let Some(prev) = token.preceding_word() {
            let ends_in_s = prev
                .chars()
                .next_back()
                .is_some_and(|ch| ch.eq_ignore_ascii_case(&'s'));
            return if ends_in_s && stack.would_open(&marker.pair) {
                MarkerKind::Apostrophe
            } else {
                MarkerKind::Close
            };
        }

        if let Some(next) = token.following_word() {
            return if DECADE.is_match(next) {
                MarkerKind::Apostrophe
            } else {
                MarkerKind::Open
            };
        }
    }

    if stack.would_open(&marker.pair) {
        MarkerKind::Open
    } else {
        MarkerKind::Close
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{MarkerPair, Position, Span, StyleFamily};

    struct StubToken {
        text: &'static str,
        within_word: bool,
        prev: Option<&'static str>,
        next: Option<&'static str>,
    }

    impl TokenContext for StubToken {
        fn text(&self) -> &str {
            self.text
        }

        fn span(&self) -> Span {
            Span::new(Position::new(1, 1, 0), Position::new(1, 2, 1))
        }

        fn within_word(&self) -> bool {
            self.within_word
        }

        fn preceding_word(&self) -> Option<&str> {
            self.prev
        }

        fn following_word(&self) -> Option<&str> {
            self.next
        }
    }

    fn single_quote_marker() -> Marker {
        Marker {
            family: StyleFamily::Straight,
            pair: MarkerPair::symmetric('\''),
            kind: MarkerKind::Unresolved,
        }
    }

    fn token(text: &'static str) -> StubToken {
        StubToken {
            text,
            within_word: false,
            prev: None,
            next: None,
        }
    }

    #[test]
    fn mark_inside_a_word_is_an_apostrophe() {
        let tok = StubToken {
            within_word: true,
            ..token("'")
        };
        let kind = infer_kind(&single_quote_marker(), &tok, &NestingStack::new());
        assert_eq!(kind, MarkerKind::Apostrophe);
    }

    #[test]
    fn trailing_possessive_is_an_apostrophe_unless_a_quote_is_open() {
        let tok = StubToken {
            prev: Some("Jones"),
            ..token("'")
        };
        let marker = single_quote_marker();

        let stack = NestingStack::new();
        assert_eq!(infer_kind(&marker, &tok, &stack), MarkerKind::Apostrophe);

        let mut open_stack = NestingStack::new();
        open_stack.push(marker.pair);
        assert_eq!(infer_kind(&marker, &tok, &open_stack), MarkerKind::Close);
    }

    #[test]
    fn after_a_word_not_ending_in_s_the_mark_closes() {
        let tok = StubToken {
            prev: Some("that"),
            ..token("'")
        };
        let kind = infer_kind(&single_quote_marker(), &tok, &NestingStack::new());
        assert_eq!(kind, MarkerKind::Close);
    }

    #[test]
    fn decade_elision_is_an_apostrophe() {
        let tok = StubToken {
            next: Some("80s"),
            ..token("\u{2019}")
        };
        let marker = Marker {
            family: StyleFamily::Smart,
            pair: MarkerPair::new('\u{2018}', '\u{2019}'),
            kind: MarkerKind::Close,
        };
        assert_eq!(
            infer_kind(&marker, &tok, &NestingStack::new()),
            MarkerKind::Apostrophe
        );

        let tok = StubToken {
            next: Some("eighties"),
            ..token("\u{2019}")
        };
        assert_eq!(
            infer_kind(&marker, &tok, &NestingStack::new()),
            MarkerKind::Open
        );
    }

    #[test]
    fn isolated_marks_fall_back_to_the_stack() {
        let marker = Marker {
            family: StyleFamily::Straight,
            pair: MarkerPair::symmetric('"'),
            kind: MarkerKind::Unresolved,
        };
        let tok = token("\"");

        let stack = NestingStack::new();
        assert_eq!(infer_kind(&marker, &tok, &stack), MarkerKind::Open);

        let mut open_stack = NestingStack::new();
        open_stack.push(marker.pair);
        assert_eq!(infer_kind(&marker, &tok, &open_stack), MarkerKind::Close);
    }
}
