//! Output types for the checking API

use core::fmt;
use std::time::Duration;

use serde::Serialize;

use crate::types::{RuleKind, Span};

/// Name reported as the origin of every diagnostic
pub const SOURCE: &str = "quotecheck";

/// Documentation reference attached to every diagnostic
pub const DOCS_URL: &str = "https://docs.rs/quotecheck";

/// A single style deviation found in the document
///
/// Produced in document order, never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    /// Exact source span of the offending token
    pub span: Span,
    /// Stable rule identifier for suppression and filtering
    pub rule: RuleKind,
    /// Human-readable description of the mismatch
    pub message: String,
    /// The glyph that was found
    pub actual: String,
    /// Acceptable glyphs, currently always a single entry
    pub expected: Vec<String>,
    /// Origin of the diagnostic
    pub source: &'static str,
    /// Documentation reference
    pub url: &'static str,
}

impl fmt::Display for Diagnostic {
    /// One-line host-pipeline form, `line:col-line:col: message`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.span, self.message)
    }
}

/// Checking output with metadata
#[derive(Debug, Clone)]
pub struct Output {
    /// Diagnostics in document order
    pub diagnostics: Vec<Diagnostic>,
    /// Processing metadata
    pub metadata: ProcessingMetadata,
}

/// Metadata about one checking run
#[derive(Debug, Clone)]
pub struct ProcessingMetadata {
    /// Total processing duration
    pub duration: Duration,
    /// Strategy used for processing
    pub strategy_used: String,
    /// Additional statistics
    pub stats: ProcessingStats,
}

/// Additional checking statistics
#[derive(Debug, Clone, Default)]
pub struct ProcessingStats {
    /// Paragraphs walked
    pub paragraph_count: usize,
    /// Punctuation tokens that matched a configured marker
    pub markers_checked: usize,
    /// Diagnostics emitted
    pub diagnostic_count: usize,
}
