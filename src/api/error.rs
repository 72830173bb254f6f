//! Error types for the API
//!
//! The engine itself has no fatal operations; configuration construction is
//! the only fallible surface.

use thiserror::Error;

use crate::types::StyleFamily;

/// Error type for API operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// Preferred style was neither `smart` nor `straight`
    #[error("invalid preferred style: {0:?} (expected \"smart\" or \"straight\")")]
    InvalidStyle(String),

    /// A marker string was not one or two characters
    #[error("invalid marker {0:?}: expected one or two characters")]
    InvalidMarker(String),

    /// A family was configured with no markers at all
    #[error("marker list for the {0} style must not be empty")]
    EmptyMarkerList(StyleFamily),
}

/// Result type for API operations
pub type Result<T> = std::result::Result<T, Error>;
