//! Public API for quote style checking
//!
//! Gathers configuration, errors, output types and the [`QuoteChecker`]
//! facade behind one module so hosts have a single import surface.

mod config;
mod error;
pub(crate) mod output;
mod processor;


pub use config::{defaults, Config, ConfigBuilder};
pub use error::{Error, Result};
pub use output::{Diagnostic, Output, ProcessingMetadata, ProcessingStats, DOCS_URL, SOURCE};
pub use processor::QuoteChecker;
