//! Sentence part building
//!
//! The engine entry point: normalizes a sentence, bails out early when
//! no auxiliary is present, slices the sentence at breaker positions
//! and keeps only the slices that carry at least one auxiliary. The
//! whole pipeline is a pure function of its input; nothing is retained
//! between calls, so one segmenter can serve any number of threads.

use crate::breakers::{self, BreakerSequence};
use crate::error::Result;
use crate::index::{self, BreakerCategory};
use crate::language::LanguageProfile;
use serde::{Deserialize, Serialize};

/// A candidate clause: a trimmed sub-span of the normalized sentence,
/// guaranteed to contain at least one auxiliary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentencePart {
    /// Trimmed, lowercase slice of the normalized sentence
    pub text: String,
    /// Auxiliary matches inside `text`, in order of appearance; never
    /// empty
    pub auxiliaries: Vec<String>,
}

/// Apostrophe-like code points folded to a plain `'` before matching.
const APOSTROPHE_VARIANTS: &[char] = &['‘', '’', '‚', '‛', '`', '´', 'ʹ', 'ʻ', 'ʼ', 'ʽ'];

/// Splits sentences into auxiliary-bearing parts for one language.
///
/// Holds a shared reference to the immutable [`LanguageProfile`]; the
/// segmenter is `Copy`, keeps no state between calls and may be used
/// from any number of threads at once.
#[derive(Debug, Clone, Copy)]
pub struct SentenceSegmenter {
    profile: &'static LanguageProfile,
}

impl SentenceSegmenter {
    /// Creates a segmenter for the given language code.
    ///
    /// Fails with [`crate::SegmentError::UnsupportedLanguage`] when no
    /// profile is registered for `code`.
    pub fn for_language(code: &str) -> Result<Self> {
        Ok(Self {
            profile: LanguageProfile::get(code)?,
        })
    }

    /// Creates a segmenter from an explicit profile reference.
    pub fn with_profile(profile: &'static LanguageProfile) -> Self {
        Self { profile }
    }

    /// The profile this segmenter consults.
    pub fn profile(&self) -> &'static LanguageProfile {
        self.profile
    }

    /// Splits `sentence` into its auxiliary-bearing parts.
    ///
    /// The sentence is first normalized (apostrophe variants folded to
    /// `'`, case folded to lowercase); the returned part texts are
    /// slices of that normalized form. Sentences without any auxiliary
    /// yield an empty vector, as do empty or whitespace-only inputs.
    pub fn segment(&self, sentence: &str) -> Vec<SentencePart> {
        let normalized = normalize(sentence);

        // Fast path: without an auxiliary there can be no candidate
        // part, so skip breaker computation entirely.
        if !index::contains_phrase(self.profile.auxiliaries(), &normalized) {
            return Vec::new();
        }

        let breakers = breakers::compute_breakers(&normalized, self.profile);
        self.build_parts(&normalized, &breakers)
    }

    /// Slices the normalized sentence at the breaker positions. Each
    /// slice runs from one breaker to the start of the next (or the end
    /// of the sentence) and survives only if it still contains an
    /// auxiliary after trimming.
    fn build_parts(&self, sentence: &str, breakers: &BreakerSequence) -> Vec<SentencePart> {
        let indices = breakers.as_slice();
        let mut parts = Vec::new();

        for (i, breaker) in indices.iter().enumerate() {
            let end = indices
                .get(i + 1)
                .map_or(sentence.len(), |next| next.position);
            let slice = sentence[breaker.position..end].trim();

            let auxiliaries = self.auxiliary_matches(slice);
            if auxiliaries.is_empty() {
                // produced by a stopword/gerund/stop-character breaker
                // that did not delimit an auxiliary-bearing clause
                continue;
            }

            parts.push(SentencePart {
                text: slice.to_string(),
                auxiliaries,
            });
        }
        parts
    }

    /// Auxiliary matches within a slice, deduplicated the same way the
    /// breaker scan is and listed in order of appearance.
    fn auxiliary_matches(&self, slice: &str) -> Vec<String> {
        let found = index::find_phrase_indices(
            self.profile.auxiliaries(),
            slice,
            BreakerCategory::Auxiliary,
        );
        index::sort_indices(index::filter_indices(found))
            .into_iter()
            .map(|found| found.matched.trim().to_string())
            .collect()
    }
}

/// Folds apostrophe variants to `'` and case folds to lowercase. All
/// breaker positions refer to this normalized form.
fn normalize(sentence: &str) -> String {
    sentence
        .chars()
        .map(|c| {
            if APOSTROPHE_VARIANTS.contains(&c) {
                '\''
            } else {
                c
            }
        })
        .collect::<String>()
        .to_lowercase()
}
