//! Main checker facade

use std::time::Instant;

use crate::api::output::{Output, ProcessingMetadata, ProcessingStats};
use crate::api::Config;
use crate::checker::{check_paragraph, ParagraphOutcome};
use crate::tokenizer;
use crate::tree::{collect_tokens, Document, Node};

/// Paragraph count at which the parallel path kicks in
#[cfg(feature = "parallel")]
const PARALLEL_THRESHOLD: usize = 32;

/// Quote and apostrophe style checker
///
/// Holds one immutable configuration and checks documents against it. A
/// checking run is a pure function of the document and the configuration;
/// checkers are freely shareable across threads.
pub struct QuoteChecker {
    config: Config,
}

impl QuoteChecker {
    /// Create a checker with the default configuration (smart preference)
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    /// Create a checker with a custom configuration
    pub fn with_config(config: Config) -> Self {
        Self { config }
    }

    /// Get the current configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Check a parsed document and return diagnostics in document order
    pub fn check(&self, document: &Document) -> Output {
        let start = Instant::now();
        let (outcomes, strategy) = self.run(&document.paragraphs);

        let mut stats = ProcessingStats {
            paragraph_count: document.paragraphs.len(),
            ..Default::default()
        };
        let mut diagnostics = Vec::new();
        for outcome in outcomes {
            stats.markers_checked += outcome.markers_checked;
            diagnostics.extend(outcome.diagnostics);
        }
        stats.diagnostic_count = diagnostics.len();

        tracing::debug!(
            paragraphs = stats.paragraph_count,
            markers = stats.markers_checked,
            diagnostics = stats.diagnostic_count,
            strategy,
            "check complete"
        );

        Output {
            diagnostics,
            metadata: ProcessingMetadata {
                duration: start.elapsed(),
                strategy_used: strategy.to_string(),
                stats,
            },
        }
    }

    /// Tokenize plain text with the reference tokenizer and check it
    pub fn check_text(&self, text: &str) -> Output {
        self.check(&tokenizer::tokenize(text))
    }

    /// Paragraphs are mutually independent, so they can be checked in
    /// parallel; collection keeps paragraph order, which keeps the final
    /// diagnostic sequence in document order.
    #[cfg(feature = "parallel")]
    fn run(&self, paragraphs: &[Node]) -> (Vec<ParagraphOutcome>, &'static str) {
        use rayon::prelude::*;

        if paragraphs.len() >= PARALLEL_THRESHOLD {
            let outcomes = paragraphs
                .par_iter()
                .map(|paragraph| check_paragraph(&collect_tokens(paragraph), self.config.rules()))
                .collect();
            (outcomes, "parallel")
        } else {
            (self.run_sequential(paragraphs), "sequential")
        }
    }

    #[cfg(not(feature = "parallel"))]
    fn run(&self, paragraphs: &[Node]) -> (Vec<ParagraphOutcome>, &'static str) {
        (self.run_sequential(paragraphs), "sequential")
    }

    fn run_sequential(&self, paragraphs: &[Node]) -> Vec<ParagraphOutcome> {
        paragraphs
            .iter()
            .map(|paragraph| check_paragraph(&collect_tokens(paragraph), self.config.rules()))
            .collect()
    }
}

impl Default for QuoteChecker {
    fn default() -> Self {
        Self::new()
    }
}
