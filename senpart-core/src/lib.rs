//! senpart-core: per-language clause segmentation for passive-voice
//! analysis
//!
//! Scans a sentence for auxiliary verbs, stopwords, participles and
//! stop characters, merges their positions into one ordered breaker
//! sequence and slices the sentence at those breakers, keeping only
//! the slices that contain at least one auxiliary. The resulting
//! [`SentencePart`]s are what a downstream passive-voice classifier
//! inspects.
//!
//! ```
//! use senpart_core::segment;
//!
//! let parts = segment("Even though it was raining, she was walking.", "en").unwrap();
//! assert!(parts.iter().any(|part| part.auxiliaries.contains(&"was".to_string())));
//! ```
//!
//! The engine is pure and reentrant: profiles are immutable shared
//! data, and no scanning state survives a call.

#![warn(missing_docs)]

pub mod breakers;
pub mod error;
pub mod gerund;
pub mod headings;
pub mod index;
pub mod language;
pub mod segmenter;
pub mod stop_characters;
pub mod syllables;

pub use breakers::{compute_breakers, BreakerSequence};
pub use error::{Result, SegmentError};
pub use index::{BreakerCategory, WordIndex};
pub use language::LanguageProfile;
pub use segmenter::{SentencePart, SentenceSegmenter};

/// Segments `sentence` into auxiliary-bearing parts for the given
/// language code.
///
/// Convenience wrapper around [`SentenceSegmenter`]; callers that
/// process many sentences should build the segmenter once instead.
pub fn segment(sentence: &str, language: &str) -> Result<Vec<SentencePart>> {
    Ok(SentenceSegmenter::for_language(language)?.segment(sentence))
}
