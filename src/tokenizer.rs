//! Reference plain-text tokenizer
//!
//! Builds a [`Document`] from raw text with full position tracking so the
//! checker can run end-to-end without an external tokenizer. Paragraphs
//! break at blank lines, sentences after terminator punctuation, and words
//! are alphanumeric runs that keep contraction apostrophes (`isn't`) as
//! embedded punctuation children. Sentence segmentation is deliberately
//! naive; quote marks and the neighbors their heuristics consult always
//! share a sentence, which is all the checker needs.

use crate::tree::{Document, Node, NodeKind};
use crate::types::{Position, Span, SMART_APOSTROPHE, STRAIGHT_APOSTROPHE};

/// Tokenize plain text into a document tree
pub fn tokenize(text: &str) -> Document {
    let mut lexer = Lexer::new(text);
    let mut paragraphs = Vec::new();
    let mut paragraph = ParagraphBuilder::default();

    while let Some(ch) = lexer.peek(0) {
        if ch.is_whitespace() {
            let start = lexer.position();
            let mut newlines = 0;
            let mut value = String::new();
            while let Some(c) = lexer.peek(0) {
                if !c.is_whitespace() {
                    break;
                }
                if c == '\n' {
                    newlines += 1;
                }
                value.push(lexer.bump());
            }
            if newlines >= 2 {
                paragraphs.extend(paragraph.finish());
                paragraph = ParagraphBuilder::default();
            } else {
                let span = Span::new(start, lexer.position());
                paragraph.whitespace(Node::leaf(NodeKind::WhiteSpace, value, span));
            }
        } else if is_word_char(ch) {
            let word = lexer.word();
            paragraph.push(word);
        } else {
            let start = lexer.position();
            let glyph = lexer.bump();
            let span = Span::new(start, lexer.position());
            paragraph.push(Node::leaf(NodeKind::Punctuation, glyph, span));
        }
    }

    paragraphs.extend(paragraph.finish());
    Document::new(paragraphs)
}

fn is_word_char(ch: char) -> bool {
    ch.is_alphanumeric()
}

fn is_apostrophe(ch: char) -> bool {
    ch == STRAIGHT_APOSTROPHE || ch == SMART_APOSTROPHE
}

fn is_terminator(value: &str) -> bool {
    matches!(value, "." | "!" | "?")
}

struct Lexer {
    chars: Vec<char>,
    index: usize,
    line: usize,
    column: usize,
    offset: usize,
}

impl Lexer {
    fn new(text: &str) -> Self {
        Self {
            chars: text.chars().collect(),
            index: 0,
            line: 1,
            column: 1,
            offset: 0,
        }
    }

    fn position(&self) -> Position {
        Position::new(self.line, self.column, self.offset)
    }

    fn peek(&self, ahead: usize) -> Option<char> {
        self.chars.get(self.index + ahead).copied()
    }

    fn bump(&mut self) -> char {
        let ch = self.chars[self.index];
        self.index += 1;
        self.offset += 1;
        if ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        ch
    }

    /// Lex one word: alphanumeric runs, with apostrophes kept inside the
    /// word when flanked by word characters on both sides
    fn word(&mut self) -> Node {
        let mut children = Vec::new();
        let mut run_start = self.position();
        let mut run = String::new();

        while let Some(ch) = self.peek(0) {
            if is_word_char(ch) {
                run.push(self.bump());
            } else if is_apostrophe(ch) && !run.is_empty() && self.peek(1).is_some_and(is_word_char)
            {
                let span = Span::new(run_start, self.position());
                children.push(Node::leaf(NodeKind::Text, std::mem::take(&mut run), span));
                let mark_start = self.position();
                let mark = self.bump();
                let mark_span = Span::new(mark_start, self.position());
                children.push(Node::leaf(NodeKind::Punctuation, mark, mark_span));
                run_start = self.position();
            } else {
                break;
            }
        }

        if !run.is_empty() {
            let span = Span::new(run_start, self.position());
            children.push(Node::leaf(NodeKind::Text, run, span));
        }
        Node::parent(NodeKind::Word, children)
    }
}

/// Accumulates sentence and paragraph structure as tokens arrive
#[derive(Default)]
struct ParagraphBuilder {
    children: Vec<Node>,
    sentence: Vec<Node>,
}

impl ParagraphBuilder {
    fn push(&mut self, node: Node) {
        self.sentence.push(node);
    }

    fn whitespace(&mut self, node: Node) {
        if self.sentence_complete() {
            self.close_sentence();
            self.children.push(node);
        } else if self.sentence.is_empty() {
            self.children.push(node);
        } else {
            self.sentence.push(node);
        }
    }

    /// A sentence is complete when its last token is terminator punctuation
    fn sentence_complete(&self) -> bool {
        self.sentence
            .last()
            .is_some_and(|n| n.kind == NodeKind::Punctuation && is_terminator(&n.value))
    }

    fn close_sentence(&mut self) {
        if !self.sentence.is_empty() {
            let sentence = Node::parent(NodeKind::Sentence, std::mem::take(&mut self.sentence));
            self.children.push(sentence);
        }
    }

    fn finish(mut self) -> Option<Node> {
        self.close_sentence();
        if self.children.is_empty() {
            None
        } else {
            Some(Node::parent(NodeKind::Paragraph, self.children))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::collect_tokens;
    use crate::traits::TokenContext;

    #[test]
    fn contraction_apostrophes_stay_inside_the_word() {
        let doc = tokenize("Isn't it \"funny\"?");
        assert_eq!(doc.paragraphs.len(), 1);

        let tokens = collect_tokens(&doc.paragraphs[0]);
        let texts: Vec<&str> = tokens.iter().map(|t| t.text()).collect();
        assert_eq!(texts, ["'", "\"", "\"", "?"]);
        assert!(tokens[0].within_word());
        assert_eq!(tokens[0].span().to_string(), "1:4-1:5");
        assert_eq!(tokens[0].span().start.offset, 3);
        assert_eq!(tokens[1].span().to_string(), "1:10-1:11");
        assert_eq!(tokens[2].span().to_string(), "1:16-1:17");
    }

    #[test]
    fn blank_lines_split_paragraphs_and_track_lines() {
        let doc = tokenize("one \"two\"\n\nthree \"four\"");
        assert_eq!(doc.paragraphs.len(), 2);

        let tokens = collect_tokens(&doc.paragraphs[1]);
        assert_eq!(tokens[0].span().to_string(), "3:7-3:8");
        assert_eq!(tokens[0].span().start.offset, 17);
    }

    #[test]
    fn decade_marks_sit_between_words() {
        let doc = tokenize("in the '80s");
        let tokens = collect_tokens(&doc.paragraphs[0]);
        assert_eq!(tokens.len(), 1);
        assert!(!tokens[0].within_word());
        assert_eq!(tokens[0].preceding_word(), None);
        assert_eq!(tokens[0].following_word(), Some("80s"));
    }

    #[test]
    fn possessive_marks_follow_their_word() {
        let doc = tokenize("Mr. Jones' golf clubs.");
        let tokens = collect_tokens(&doc.paragraphs[0]);
        let quote = tokens.iter().find(|t| t.text() == "'").unwrap();
        assert_eq!(quote.preceding_word(), Some("Jones"));
        assert_eq!(quote.span().to_string(), "1:10-1:11");
    }

    #[test]
    fn sentences_break_after_terminators() {
        let doc = tokenize("One. Two.");
        let paragraph = &doc.paragraphs[0];
        let sentences: Vec<_> = paragraph
            .children
            .iter()
            .filter(|n| n.kind == NodeKind::Sentence)
            .collect();
        assert_eq!(sentences.len(), 2);
        assert_eq!(sentences[0].to_text(), "One.");
        assert_eq!(sentences[1].to_text(), "Two.");
    }

    #[test]
    fn closing_quotes_stay_with_their_sentence() {
        let doc = tokenize("\u{201C}One \u{2018}sentence\u{2019}. Two sentences.\u{201D}");
        let tokens = collect_tokens(&doc.paragraphs[0]);
        let texts: Vec<&str> = tokens.iter().map(|t| t.text()).collect();
        assert_eq!(
            texts,
            ["\u{201C}", "\u{2018}", "\u{2019}", ".", ".", "\u{201D}"]
        );
    }
}
