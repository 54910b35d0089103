//! Breaker aggregation
//!
//! Combines the per-category finders into one deterministic, ordered
//! sequence of positions at which a sentence may be split into
//! candidate parts. Which categories participate depends on the
//! language: profiles without a gerund rule skip participle detection.

use crate::gerund;
use crate::index::{self, BreakerCategory, WordIndex};
use crate::language::LanguageProfile;
use crate::stop_characters;

/// Ordered, deduplicated breaker matches for one sentence.
///
/// Positions are strictly increasing and unique, each a valid offset
/// into the sentence the sequence was computed from.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BreakerSequence {
    indices: Vec<WordIndex>,
}

impl BreakerSequence {
    /// The breakers in sentence order.
    pub fn as_slice(&self) -> &[WordIndex] {
        &self.indices
    }

    /// Iterates over the breakers in sentence order.
    pub fn iter(&self) -> std::slice::Iter<'_, WordIndex> {
        self.indices.iter()
    }

    /// Number of breakers.
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// Whether no breaker was found.
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}

/// Computes the breaker sequence for an already-normalized (lowercase)
/// sentence: auxiliary and stopword occurrences, gerunds for profiles
/// that carry a gerund rule, and stop characters, concatenated,
/// deduplicated and sorted.
pub fn compute_breakers(sentence: &str, profile: &LanguageProfile) -> BreakerSequence {
    let mut indices = index::find_phrase_indices(
        profile.auxiliaries(),
        sentence,
        BreakerCategory::Auxiliary,
    );
    indices.extend(index::find_phrase_indices(
        profile.stopwords(),
        sentence,
        BreakerCategory::Stopword,
    ));
    if let Some(rule) = profile.gerund_rule() {
        indices.extend(gerund::find_gerund_indices(sentence, rule));
    }
    indices.extend(stop_characters::find_stop_character_indices(
        sentence, profile,
    ));

    let sorted = index::sort_indices(index::filter_indices(indices));
    debug_assert!(
        sorted.windows(2).all(|pair| pair[0].position < pair[1].position),
        "breaker positions must be strictly increasing"
    );
    BreakerSequence { indices: sorted }
}
