//! Word-list index finding, filtering and sorting
//!
//! The finder reports every token-bounded occurrence of every phrase,
//! overlapping ones included ("even though" and "though" both match the
//! same span). Deduplication is deliberately deferred to
//! [`filter_indices`] so that the nesting rule is applied once, over
//! all breaker categories together.

/// Category of a breaker match.
///
/// Declaration order doubles as precedence: when two matches share a
/// position, the earlier variant wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum BreakerCategory {
    /// Auxiliary verb phrase
    Auxiliary,
    /// Heuristic clause-boundary stopword
    Stopword,
    /// Word ending in the participial suffix
    Gerund,
    /// Punctuation or contraction marker
    StopCharacter,
}

/// One match found while scanning a sentence: byte offset into the
/// normalized sentence plus the matched text. Transient; discarded once
/// the breaker sequence is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordIndex {
    /// Byte offset of the match in the normalized sentence
    pub position: usize,
    /// The matched text
    pub matched: String,
    /// Which finder produced the match
    pub category: BreakerCategory,
}

impl WordIndex {
    /// Creates a match record.
    pub fn new(position: usize, matched: impl Into<String>, category: BreakerCategory) -> Self {
        Self {
            position,
            matched: matched.into(),
            category,
        }
    }

    /// Byte offset one past the end of the matched span.
    pub fn end(&self) -> usize {
        self.position + self.matched.len()
    }
}

/// Locates every token-bounded occurrence of any phrase from `phrases`
/// inside `text`.
///
/// Both `text` and the phrases are expected to be lowercase; the engine
/// folds the sentence before scanning. A phrase does not match inside a
/// larger word: the characters adjacent to the span must not be
/// alphanumeric.
pub fn find_phrase_indices(
    phrases: &[String],
    text: &str,
    category: BreakerCategory,
) -> Vec<WordIndex> {
    let mut indices = Vec::new();
    for phrase in phrases {
        for (position, matched) in text.match_indices(phrase.as_str()) {
            if is_token_bounded(text, position, position + matched.len()) {
                indices.push(WordIndex::new(position, matched, category));
            }
        }
    }
    indices
}

/// Whether any phrase has a token-bounded occurrence in `text`.
///
/// Used by the engine's fast path; stops at the first hit instead of
/// collecting all matches.
pub fn contains_phrase(phrases: &[String], text: &str) -> bool {
    phrases.iter().any(|phrase| {
        text.match_indices(phrase.as_str())
            .any(|(position, matched)| is_token_bounded(text, position, position + matched.len()))
    })
}

fn is_token_bounded(text: &str, start: usize, end: usize) -> bool {
    let before_ok = text[..start]
        .chars()
        .next_back()
        .map_or(true, |c| !c.is_alphanumeric());
    let after_ok = text[end..].chars().next().map_or(true, |c| !c.is_alphanumeric());
    before_ok && after_ok
}

/// Removes every match whose span is fully nested within another
/// match's span (same or later start, same or earlier end), keeping the
/// outer / earliest-starting one.
///
/// Identical spans reported by two categories ("having" as auxiliary
/// and as gerund) collapse to the higher-precedence category. Matches
/// that overlap without nesting are both kept. The survivors have
/// pairwise distinct positions.
pub fn filter_indices(mut indices: Vec<WordIndex>) -> Vec<WordIndex> {
    indices.sort_by(|a, b| {
        a.position
            .cmp(&b.position)
            .then(b.end().cmp(&a.end()))
            .then(a.category.cmp(&b.category))
    });

    let mut kept: Vec<WordIndex> = Vec::new();
    let mut max_end = 0;
    for index in indices {
        // Every kept match starts at or before this one, so a span
        // ending inside the furthest kept end is nested.
        if !kept.is_empty() && index.end() <= max_end {
            continue;
        }
        max_end = max_end.max(index.end());
        kept.push(index);
    }
    kept
}

/// Orders matches ascending by position; position ties resolve by
/// category precedence so the result is deterministic.
pub fn sort_indices(mut indices: Vec<WordIndex>) -> Vec<WordIndex> {
    indices.sort_by(|a, b| {
        a.position
            .cmp(&b.position)
            .then(a.category.cmp(&b.category))
    });
    indices
}
