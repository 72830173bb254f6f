//! Concrete document tree
//!
//! A minimal parsed-text tree in the shape natural-language tokenizers
//! produce: paragraphs hold sentences, sentences hold words, whitespace and
//! punctuation, words hold text runs and embedded punctuation. `Source`
//! nodes are literal spans (URLs and similar) that read like words. The
//! engine consumes this tree only through [`TokenContext`] views, so hosts
//! with their own tree can bypass this module entirely.

use crate::traits::TokenContext;
use crate::types::{Position, Span};

/// Node kinds of the document tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// Block of text; nesting state resets at its boundary
    Paragraph,
    /// Sentence within a paragraph
    Sentence,
    /// Word; may contain embedded punctuation such as contraction marks
    Word,
    /// Run of whitespace between tokens
    WhiteSpace,
    /// A punctuation token
    Punctuation,
    /// Literal source span treated like a word for adjacency (e.g. a URL)
    Source,
    /// Raw text run inside a word
    Text,
}

/// One node of the document tree
///
/// Leaves carry their literal text in `value`; parents carry `children` and
/// an empty `value`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub kind: NodeKind,
    pub value: String,
    pub children: Vec<Node>,
    pub span: Span,
}

impl Node {
    /// Create a leaf node
    pub fn leaf(kind: NodeKind, value: impl Into<String>, span: Span) -> Self {
        Self {
            kind,
            value: value.into(),
            children: Vec::new(),
            span,
        }
    }

    /// Create a parent node spanning its children
    pub fn parent(kind: NodeKind, children: Vec<Node>) -> Self {
        let span = match (children.first(), children.last()) {
            (Some(first), Some(last)) => Span::new(first.span.start, last.span.end),
            _ => Span::new(Position::new(1, 1, 0), Position::new(1, 1, 0)),
        };
        Self {
            kind,
            value: String::new(),
            children,
            span,
        }
    }

    /// Concatenated literal text of the subtree
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        self.write_text(&mut out);
        out
    }

    fn write_text(&self, out: &mut String) {
        if self.children.is_empty() {
            out.push_str(&self.value);
        } else {
            for child in &self.children {
                child.write_text(out);
            }
        }
    }
}

/// A parsed document: paragraphs in document order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    pub paragraphs: Vec<Node>,
}

impl Document {
    pub fn new(paragraphs: Vec<Node>) -> Self {
        Self { paragraphs }
    }
}

/// Punctuation token extracted from the tree with its sibling context
#[derive(Debug, Clone)]
pub struct TokenView {
    text: String,
    span: Span,
    within_word: bool,
    preceding: Option<String>,
    following: Option<String>,
}

impl TokenContext for TokenView {
    fn text(&self) -> &str {
        &self.text
    }

    fn span(&self) -> Span {
        self.span
    }

    fn within_word(&self) -> bool {
        self.within_word
    }

    fn preceding_word(&self) -> Option<&str> {
        self.preceding.as_deref()
    }

    fn following_word(&self) -> Option<&str> {
        self.following.as_deref()
    }
}

/// Collect a paragraph's punctuation tokens in document order
pub fn collect_tokens(paragraph: &Node) -> Vec<TokenView> {
    let mut out = Vec::new();
    walk(&paragraph.children, paragraph.kind, &mut out);
    out
}

fn walk(siblings: &[Node], parent_kind: NodeKind, out: &mut Vec<TokenView>) {
    for (index, node) in siblings.iter().enumerate() {
        match node.kind {
            NodeKind::Punctuation => {
                let preceding = index
                    .checked_sub(1)
                    .and_then(|i| siblings.get(i))
                    .filter(|n| matches!(n.kind, NodeKind::Word | NodeKind::Source))
                    .map(Node::to_text);
                let following = siblings
                    .get(index + 1)
                    .filter(|n| n.kind == NodeKind::Word)
                    .map(Node::to_text);
                out.push(TokenView {
                    text: node.to_text(),
                    span: node.span,
                    within_word: parent_kind == NodeKind::Word,
                    preceding,
                    following,
                });
            }
            NodeKind::Sentence | NodeKind::Word => walk(&node.children, node.kind, out),
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn span_at(column: usize) -> Span {
        Span::new(
            Position::new(1, column, column - 1),
            Position::new(1, column + 1, column),
        )
    }

    fn word(value: &str, column: usize) -> Node {
        let end = Position::new(1, column + value.chars().count(), column - 1 + value.chars().count());
        Node::parent(
            NodeKind::Word,
            vec![Node::leaf(
                NodeKind::Text,
                value,
                Span::new(Position::new(1, column, column - 1), end),
            )],
        )
    }

    #[test]
    fn tokens_surface_word_neighbors() {
        let paragraph = Node::parent(
            NodeKind::Paragraph,
            vec![Node::parent(
                NodeKind::Sentence,
                vec![
                    word("Jones", 1),
                    Node::leaf(NodeKind::Punctuation, "'", span_at(6)),
                    Node::leaf(NodeKind::WhiteSpace, " ", span_at(7)),
                    word("golf", 8),
                ],
            )],
        );

        let tokens = collect_tokens(&paragraph);
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].text(), "'");
        assert!(!tokens[0].within_word());
        assert_eq!(tokens[0].preceding_word(), Some("Jones"));
        // The next sibling is whitespace, not a word.
        assert_eq!(tokens[0].following_word(), None);
    }

    #[test]
    fn contraction_marks_are_flagged_as_in_word() {
        let word_node = Node::parent(
            NodeKind::Word,
            vec![
                Node::leaf(NodeKind::Text, "Isn", Span::new(Position::new(1, 1, 0), Position::new(1, 4, 3))),
                Node::leaf(NodeKind::Punctuation, "'", span_at(4)),
                Node::leaf(NodeKind::Text, "t", span_at(5)),
            ],
        );
        let paragraph = Node::parent(
            NodeKind::Paragraph,
            vec![Node::parent(NodeKind::Sentence, vec![word_node])],
        );

        let tokens = collect_tokens(&paragraph);
        assert_eq!(tokens.len(), 1);
        assert!(tokens[0].within_word());
    }

    #[test]
    fn source_spans_count_as_preceding_words_only() {
        let source = Node::leaf(
            NodeKind::Source,
            "https://example.com/s",
            Span::new(Position::new(1, 1, 0), Position::new(1, 22, 21)),
        );
        let paragraph = Node::parent(
            NodeKind::Paragraph,
            vec![Node::parent(
                NodeKind::Sentence,
                vec![
                    Node::leaf(NodeKind::Punctuation, "'", span_at(23)),
                    source.clone(),
                ],
            )],
        );
        let tokens = collect_tokens(&paragraph);
        // A following Source is not a word for the decade check.
        assert_eq!(tokens[0].following_word(), None);

        let paragraph = Node::parent(
            NodeKind::Paragraph,
            vec![Node::parent(
                NodeKind::Sentence,
                vec![source, Node::leaf(NodeKind::Punctuation, "'", span_at(22))],
            )],
        );
        let tokens = collect_tokens(&paragraph);
        assert_eq!(tokens[0].preceding_word(), Some("https://example.com/s"));
    }

    #[test]
    fn to_text_concatenates_leaves() {
        let node = Node::parent(
            NodeKind::Word,
            vec![
                Node::leaf(NodeKind::Text, "Isn", span_at(1)),
                Node::leaf(NodeKind::Punctuation, "'", span_at(4)),
                Node::leaf(NodeKind::Text, "t", span_at(5)),
            ],
        );
        assert_eq!(node.to_text(), "Isn't");
    }
}
