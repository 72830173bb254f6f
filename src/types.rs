//! Core types for quote and apostrophe style checking

use core::fmt;

use serde::{Deserialize, Serialize};

/// Apostrophe glyph of the smart family
pub const SMART_APOSTROPHE: char = '\u{2019}';

/// Apostrophe glyph of the straight family
pub const STRAIGHT_APOSTROPHE: char = '\'';

/// Style family a marker belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StyleFamily {
    /// ASCII typewriter quotes (`"`, `'`)
    Straight,
    /// Curly typographic quotes (`\u{201C}\u{201D}`, `\u{2018}\u{2019}`)
    #[default]
    Smart,
}

impl fmt::Display for StyleFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StyleFamily::Straight => write!(f, "straight"),
            StyleFamily::Smart => write!(f, "smart"),
        }
    }
}

/// Resolved role of a classified punctuation token
///
/// `Unresolved` markers come out of the marker table when a symmetric glyph
/// matched and the role must be decided from context; the inference heuristic
/// always narrows them to one of the other three.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MarkerKind {
    /// Opens one level of quotation
    Open,
    /// Closes the innermost level of quotation
    Close,
    /// Elision or possessive apostrophe, not a quotation mark
    Apostrophe,
    /// Symmetric glyph whose role is still context-dependent
    Unresolved,
}

/// Open/close glyph pair configured for one nesting level
///
/// A one-character marker string uses the same glyph for both halves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MarkerPair {
    /// Opening glyph
    pub open: char,
    /// Closing glyph
    pub close: char,
}

impl MarkerPair {
    /// Create a pair with distinct open and close glyphs
    pub fn new(open: char, close: char) -> Self {
        Self { open, close }
    }

    /// Create a pair using the same glyph for open and close
    pub fn symmetric(glyph: char) -> Self {
        Self {
            open: glyph,
            close: glyph,
        }
    }

    /// Whether open and close share one glyph
    pub fn is_symmetric(&self) -> bool {
        self.open == self.close
    }

    /// Glyph used for the given role
    ///
    /// Apostrophe and unresolved roles have no half in a pair; callers
    /// resolve those before asking.
    pub fn glyph(&self, kind: MarkerKind) -> char {
        match kind {
            MarkerKind::Close => self.close,
            _ => self.open,
        }
    }
}

/// A classified punctuation occurrence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Marker {
    /// Family whose marker list matched
    pub family: StyleFamily,
    /// The configured pair that matched
    pub pair: MarkerPair,
    /// Resolved or provisional role
    pub kind: MarkerKind,
}

/// Stable rule identifier carried on every diagnostic
///
/// Usable for downstream suppression and filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleKind {
    /// Quotation mark style or nesting problem
    Quote,
    /// Apostrophe style problem
    Apostrophe,
}

impl fmt::Display for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuleKind::Quote => write!(f, "quote"),
            RuleKind::Apostrophe => write!(f, "apostrophe"),
        }
    }
}

/// Position in source text, 1-based line and column, 0-based char offset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Position {
    pub line: usize,
    pub column: usize,
    pub offset: usize,
}

impl Position {
    pub fn new(line: usize, column: usize, offset: usize) -> Self {
        Self {
            line,
            column,
            offset,
        }
    }
}

/// Source span of one token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

impl Span {
    pub fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}-{}:{}",
            self.start.line, self.start.column, self.end.line, self.end.column
        )
    }
}

/// Validated style configuration consumed by the engine
///
/// Marker list order defines nesting-level preference; index 0 is the
/// outermost level, with wraparound past the end of the list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleRules {
    /// Family the document should be using
    pub preferred: StyleFamily,
    /// Straight marker pairs in nesting order
    pub straight: Vec<MarkerPair>,
    /// Smart marker pairs in nesting order
    pub smart: Vec<MarkerPair>,
}

impl StyleRules {
    /// Marker pairs of the preferred family
    pub fn preferred_pairs(&self) -> &[MarkerPair] {
        match self.preferred {
            StyleFamily::Straight => &self.straight,
            StyleFamily::Smart => &self.smart,
        }
    }

    /// Apostrophe glyph of the preferred family
    pub fn apostrophe_glyph(&self) -> char {
        match self.preferred {
            StyleFamily::Straight => STRAIGHT_APOSTROPHE,
            StyleFamily::Smart => SMART_APOSTROPHE,
        }
    }
}
