//! Stop-character detection
//!
//! Language-specific punctuation and contraction markers that signal a
//! heuristic internal clause break, distinct from sentence-final
//! punctuation. English uses the colon, the comma and the contractions
//! `'ll`/`'ve`; French uses the comma only.

use crate::index::{BreakerCategory, WordIndex};
use crate::language::LanguageProfile;

/// Characters that may follow a marker for it to count as a clause
/// break: whitespace, quotes, signs and angle quotes.
const FOLLOW_CHARS: &[char] = &[
    ' ', '\n', '\r', '\t', '\'', '"', '+', '-', '»', '«', '‹', '›', '<', '>',
];

/// Finds every stop-character marker of the profile in the (normalized,
/// lowercase) sentence.
///
/// A marker only counts when the next character is in the boundary set;
/// a marker at the very end of the sentence splits nothing off and is
/// ignored. Unrecognized or irregular punctuation simply produces no
/// match, never an error.
pub fn find_stop_character_indices(sentence: &str, profile: &LanguageProfile) -> Vec<WordIndex> {
    let mut indices = Vec::new();
    for marker in profile.stop_markers() {
        for (position, matched) in sentence.match_indices(marker.as_str()) {
            let follows = sentence[position + matched.len()..].chars().next();
            if follows.is_some_and(|c| FOLLOW_CHARS.contains(&c)) {
                indices.push(WordIndex::new(
                    position,
                    matched,
                    BreakerCategory::StopCharacter,
                ));
            }
        }
    }
    indices
}
