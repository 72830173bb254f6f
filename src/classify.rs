//! Marker table lookup for punctuation tokens

use crate::types::{Marker, MarkerKind, MarkerPair, StyleFamily};

/// Classify a punctuation token against the configured marker lists
///
/// Scans the straight list first, then the smart list, in configured order;
/// the first matching entry wins. A symmetric entry yields `Unresolved`
/// (the role must come from context), an asymmetric entry yields `Open` for
/// its first glyph and `Close` for its second. Tokens longer than one
/// character or matching neither list are not markers at all.
pub fn classify(text: &str, straight: &[MarkerPair], smart: &[MarkerPair]) -> Option<Marker> {
    let mut chars = text.chars();
    let glyph = chars.next()?;
    if chars.next().is_some() {
        return None;
    }

    scan(glyph, straight, StyleFamily::Straight).or_else(|| scan(glyph, smart, StyleFamily::Smart))
}

fn scan(glyph: char, pairs: &[MarkerPair], family: StyleFamily) -> Option<Marker> {
    for pair in pairs {
        if pair.open == glyph {
            let kind = if pair.is_symmetric() {
                MarkerKind::Unresolved
            } else {
                MarkerKind::Open
            };
            return Some(Marker {
                family,
                pair: *pair,
                kind,
            });
        }
        if !pair.is_symmetric() && pair.close == glyph {
            return Some(Marker {
                family,
                pair: *pair,
                kind: MarkerKind::Close,
            });
        }
    }
    None
}
