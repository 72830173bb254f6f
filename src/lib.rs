//! Quote and apostrophe style checking for parsed natural-language text
//!
//! Given a parsed document tree, this crate reports every place where a
//! quotation mark or apostrophe deviates from the preferred style — smart
//! (curly) or straight (typewriter) — while tracking quotation nesting per
//! paragraph and resolving the ambiguity between apostrophes and single
//! quotation marks from local context. It detects and reports; it never
//! rewrites text.
//!
//! # Architecture
//!
//! - **Classification**: punctuation tokens are matched against configured
//!   marker lists (the `classify` module) and ambiguous glyphs resolved
//!   through the sibling heuristics in [`infer`].
//! - **Nesting**: a per-paragraph [`NestingStack`] tracks open quotation
//!   levels and computes the style-correct glyph for each depth, wrapping
//!   around the configured pair list.
//! - **API**: [`QuoteChecker`] walks a [`tree::Document`] (or plain text via
//!   the reference [`tokenizer`]) and returns diagnostics in document order.
//!   The engine only sees tokens through the [`TokenContext`] capability
//!   trait, so any upstream tokenizer can feed it.
//!
//! # Example
//!
//! ```rust
//! use quotecheck::QuoteChecker;
//!
//! let checker = QuoteChecker::new();
//! let output = checker.check_text("Isn't it \"funny\"?");
//!
//! let messages: Vec<String> = output.diagnostics.iter().map(|d| d.to_string()).collect();
//! assert_eq!(
//!     messages,
//!     [
//!         "1:4-1:5: Expected a smart apostrophe: `\u{2019}`, not `'`",
//!         "1:10-1:11: Expected a smart quote: `\u{201C}`, not `\"`",
//!         "1:16-1:17: Expected a smart quote: `\u{201D}`, not `\"`",
//!     ]
//! );
//! ```

pub mod api;
pub mod checker;
pub mod classify;
pub mod infer;
pub mod nesting;
pub mod tokenizer;
pub mod traits;
pub mod tree;
pub mod types;

pub use api::{
    defaults, Config, ConfigBuilder, Diagnostic, Error, Output, ProcessingMetadata,
    ProcessingStats, QuoteChecker, Result, DOCS_URL, SOURCE,
};
pub use checker::{check_paragraph, ParagraphOutcome};
pub use classify::classify;
pub use infer::infer_kind;
pub use nesting::{expected_glyph, NestingStack};
pub use traits::TokenContext;
pub use tree::{collect_tokens, Document, Node, NodeKind, TokenView};
pub use types::{
    Marker, MarkerKind, MarkerPair, Position, RuleKind, Span, StyleFamily, StyleRules,
};
