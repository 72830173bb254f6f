//! The per-paragraph checking engine
//!
//! Walks punctuation tokens in document order, threading the nesting stack
//! through classification, inference and expected-marker computation, and
//! emits a diagnostic wherever the actual glyph differs from the
//! style-correct one.

use crate::api::output::{Diagnostic, DOCS_URL, SOURCE};
use crate::classify::classify;
use crate::infer::{infer_kind, is_ambiguous};
use crate::nesting::{expected_glyph, NestingStack};
use crate::traits::TokenContext;
use crate::types::{MarkerKind, RuleKind, StyleRules};

/// Result of checking one paragraph
#[derive(Debug, Clone, Default)]
pub struct ParagraphOutcome {
    /// Diagnostics in paragraph order
    pub diagnostics: Vec<Diagnostic>,
    /// Punctuation tokens that matched a configured marker
    pub markers_checked: usize,
}

/// Check one paragraph's punctuation tokens against the style rules
///
/// Nesting state never crosses a paragraph boundary: the stack starts empty
/// here and whatever remains open at the end is silently discarded, so
/// paragraphs are mutually independent.
pub fn check_paragraph<T: TokenContext>(tokens: &[T], rules: &StyleRules) -> ParagraphOutcome {
    let mut stack = NestingStack::new();
    let mut outcome = ParagraphOutcome::default();

    for token in tokens {
        let Some(mut marker) = classify(token.text(), &rules.straight, &rules.smart) else {
            continue;
        };
        outcome.markers_checked += 1;

        // The apostrophe-capable glyphs need context even when the marker
        // table already assigned them a half of a pair.
        if is_ambiguous(token.text()) || marker.kind == MarkerKind::Unresolved {
            marker.kind = infer_kind(&marker, token, &stack);
        }

        // Push before computing the expectation so an opening marker is
        // measured at its new depth; pop after, so a closing marker is
        // measured at the depth it closes.
        if marker.kind == MarkerKind::Open {
            stack.push(marker.pair);
        }

        let expected = if marker.kind == MarkerKind::Apostrophe {
            rules.apostrophe_glyph()
        } else {
            expected_glyph(&stack, marker.kind, rules.preferred_pairs())
        };

        if marker.kind == MarkerKind::Close {
            stack.pop();
        }

        let actual = token.text();
        if actual.chars().next() == Some(expected) {
            continue;
        }

        let rule = if marker.kind == MarkerKind::Apostrophe {
            RuleKind::Apostrophe
        } else {
            RuleKind::Quote
        };
        let message = if rules.preferred == marker.family {
            format!("Expected `{expected}` to be used at this level of nesting, not `{actual}`")
        } else {
            format!(
                "Expected a {} {}: `{expected}`, not `{actual}`",
                rules.preferred, rule
            )
        };

        tracing::trace!(
            span = %token.span(),
            %rule,
            actual,
            expected = %expected,
            "style mismatch"
        );

        outcome.diagnostics.push(Diagnostic {
            span: token.span(),
            rule,
            message,
            actual: actual.to_string(),
            expected: vec![expected.to_string()],
            source: SOURCE,
            url: DOCS_URL,
        });
    }

    outcome
}
