//! Participle ("gerund") detection
//!
//! English treats a word ending in the participial suffix as an extra
//! clause-breaker signal. A match only counts at a clause-safe
//! boundary, and the profile's exclusion list drops common nouns and
//! adverbs that carry the suffix without being verbs.

use crate::index::{BreakerCategory, WordIndex};
use crate::language::GerundRule;

/// Characters that may immediately follow a participle for it to count
/// as a clause boundary.
const BOUNDARY_CHARS: &[char] = &[
    ' ', '\n', '\r', '\t', '.', ',', '\'', '(', ')', '"', '+', '-', ';', '!', '?', ':', '/', '»',
    '«', '‹', '›', '<', '>',
];

/// Finds every non-excluded participle in the (normalized, lowercase)
/// sentence. End of string also counts as a boundary.
pub fn find_gerund_indices(sentence: &str, rule: &GerundRule) -> Vec<WordIndex> {
    rule.pattern()
        .find_iter(sentence)
        .filter(|found| at_clause_boundary(sentence, found.end()))
        .filter(|found| !rule.is_excluded(found.as_str()))
        .map(|found| WordIndex::new(found.start(), found.as_str(), BreakerCategory::Gerund))
        .collect()
}

fn at_clause_boundary(sentence: &str, end: usize) -> bool {
    sentence[end..]
        .chars()
        .next()
        .map_or(true, |c| BOUNDARY_CHARS.contains(&c))
}
