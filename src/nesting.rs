//! Per-paragraph nesting stack and expected-marker computation
//!
//! The stack is the only state the engine carries through a paragraph. It is
//! created fresh at every paragraph boundary and discarded at the end,
//! balanced or not.

use smallvec::SmallVec;

use crate::types::{MarkerKind, MarkerPair};

/// Ordered sequence of currently-open quote levels within one paragraph
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NestingStack {
    entries: SmallVec<[MarkerPair; 8]>,
}

impl NestingStack {
    /// Create an empty stack for a new paragraph
    pub fn new() -> Self {
        Self::default()
    }

    /// Count of unmatched open markers seen so far
    pub fn depth(&self) -> usize {
        self.entries.len()
    }

    /// Record an opening marker
    pub fn push(&mut self, pair: MarkerPair) {
        self.entries.push(pair);
    }

    /// Drop the innermost open marker
    ///
    /// Pops unconditionally. Under mismatched nesting (interleaved families
    /// like `\u{201C}\u{2018}this\u{201D}\u{2019}`) this may remove the wrong
    /// entry; removing levels one at a time is the best-effort recovery the
    /// checker settles for instead of strict bracket validation.
    pub fn pop(&mut self) -> Option<MarkerPair> {
        self.entries.pop()
    }

    /// Generic open/close decision for a marker with no clearer context
    ///
    /// A marker opens when the stack is empty or the innermost open pair is a
    /// different glyph pair. Same-pair heuristic only; a smart close over a
    /// straight open of another pair is not detected.
    pub fn would_open(&self, pair: &MarkerPair) -> bool {
        self.entries.last() != Some(pair)
    }
}

/// Style-correct glyph for a quote marker at the current nesting depth
///
/// The engine pushes opening markers before calling this and pops closing
/// markers after, so `stack.depth()` counts the marker's own level either
/// way. Depth wraps around when it exceeds the configured list.
pub fn expected_glyph(stack: &NestingStack, kind: MarkerKind, preferred: &[MarkerPair]) -> char {
    let pair = preferred[(stack.depth() + 1) % preferred.len()];
    pair.glyph(kind)
}
