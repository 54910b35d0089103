//! Error types for the segmentation engine

use thiserror::Error;

/// Errors surfaced by the segmentation engine
#[derive(Error, Debug)]
pub enum SegmentError {
    /// The requested language has no registered profile
    #[error("language '{code}' not supported")]
    UnsupportedLanguage {
        /// The language code that has no profile
        code: String,
    },

    /// An embedded resource table failed to parse or validate
    #[error("configuration error: {0}")]
    Configuration(String),
}

/// Result type for engine operations
pub type Result<T> = std::result::Result<T, SegmentError>;
