//! Capability trait for abstract document-tree access
//!
//! The engine never touches a concrete tree. It only needs to know, for each
//! punctuation token, its text, its source span, whether it sits inside a
//! word, and the text of word-like neighbors. Any upstream tokenizer that can
//! answer those questions can feed the checker.

use crate::types::Span;

/// One punctuation token with just enough surrounding structure for
/// classification
pub trait TokenContext {
    /// Literal text of the token
    fn text(&self) -> &str;

    /// Source span of the token
    fn span(&self) -> Span;

    /// Whether the token's immediate parent is a word (the mark sits inside
    /// a word rather than between words)
    fn within_word(&self) -> bool;

    /// Text of the preceding sibling when it is a word or a literal source
    /// span (URLs and similar are treated like words here)
    fn preceding_word(&self) -> Option<&str>;

    /// Text of the following sibling when it is a word
    fn following_word(&self) -> Option<&str>;
}
