//! Syllable counting with per-language deviation tables
//!
//! Lookup collaborator of the content grader, independent of the
//! segmentation engine. The base count is the number of vowel clusters
//! in the word; fragment deviation rules then adjust it in table order,
//! and full-word entries override the count entirely.

use crate::error::{Result, SegmentError};
use regex::Regex;
use serde::Deserialize;
use std::collections::HashMap;
use std::sync::OnceLock;

/// Raw syllable table layout as it appears in the TOML files.
#[derive(Debug, Clone, Deserialize)]
pub struct SyllableConfig {
    /// Language identification
    pub metadata: SyllableMetadata,
    /// Vowel character class
    pub vowels: VowelConfig,
    /// Deviation rules
    pub deviations: DeviationConfig,
}

/// Language code the table applies to
#[derive(Debug, Clone, Deserialize)]
pub struct SyllableMetadata {
    /// Short language code, e.g. `en`
    pub code: String,
}

/// Vowel character class
#[derive(Debug, Clone, Deserialize)]
pub struct VowelConfig {
    /// The characters counted as vowels, e.g. `aeiouy`
    pub chars: String,
}

/// Fragment and full-word deviations
#[derive(Debug, Clone, Deserialize)]
pub struct DeviationConfig {
    /// Ordered fragment rules; each matched occurrence shifts the count
    #[serde(default)]
    pub fragments: Vec<FragmentDeviation>,
    /// Words whose syllable count is fixed outright
    #[serde(default)]
    pub words: Vec<WordDeviation>,
}

/// One group of fragment patterns sharing a count modifier
#[derive(Debug, Clone, Deserialize)]
pub struct FragmentDeviation {
    /// Regex fragments evaluated against the lowercase word
    pub patterns: Vec<String>,
    /// Count shift per matched occurrence
    pub count_modifier: i32,
}

/// A full-word override
#[derive(Debug, Clone, Deserialize)]
pub struct WordDeviation {
    /// The word, lowercase
    pub word: String,
    /// Its fixed syllable count
    pub syllables: u32,
}

struct FragmentRule {
    pattern: Regex,
    modifier: i32,
}

/// Compiled per-language syllable table.
pub struct SyllableTable {
    vowel_clusters: Regex,
    fragment_rules: Vec<FragmentRule>,
    full_words: HashMap<String, u32>,
}

impl SyllableTable {
    /// Looks up the table registered for `code`.
    pub fn get(code: &str) -> Result<&'static SyllableTable> {
        tables()
            .get(code)
            .ok_or_else(|| SegmentError::UnsupportedLanguage {
                code: code.to_string(),
            })
    }

    fn from_config(config: &SyllableConfig) -> Result<Self> {
        let class = regex::escape(&config.vowels.chars);
        let vowel_clusters = Regex::new(&format!("[{class}]+")).map_err(|e| {
            SegmentError::Configuration(format!("invalid vowel class: {e}"))
        })?;

        let mut fragment_rules = Vec::new();
        for group in &config.deviations.fragments {
            for fragment in &group.patterns {
                let pattern = Regex::new(fragment).map_err(|e| {
                    SegmentError::Configuration(format!("invalid fragment '{fragment}': {e}"))
                })?;
                fragment_rules.push(FragmentRule {
                    pattern,
                    modifier: group.count_modifier,
                });
            }
        }

        let full_words = config
            .deviations
            .words
            .iter()
            .map(|deviation| (deviation.word.clone(), deviation.syllables))
            .collect();

        Ok(Self {
            vowel_clusters,
            fragment_rules,
            full_words,
        })
    }

    /// Counts the syllables of a single word. Empty input counts zero;
    /// any other word counts at least one.
    pub fn count(&self, word: &str) -> u32 {
        let word = word.trim().to_lowercase();
        if word.is_empty() {
            return 0;
        }
        if let Some(&syllables) = self.full_words.get(&word) {
            return syllables;
        }

        let mut count = self.vowel_clusters.find_iter(&word).count() as i32;
        for rule in &self.fragment_rules {
            count += rule.modifier * rule.pattern.find_iter(&word).count() as i32;
        }
        count.max(1) as u32
    }
}

static TABLES: OnceLock<HashMap<String, SyllableTable>> = OnceLock::new();

const EMBEDDED_TABLES: &[(&str, &str)] = &[("en", include_str!("../configs/syllables/english.toml"))];

fn load_embedded_tables() -> Result<HashMap<String, SyllableTable>> {
    let mut tables = HashMap::new();

    for (code, toml_content) in EMBEDDED_TABLES {
        let config: SyllableConfig = toml::from_str(toml_content).map_err(|e| {
            SegmentError::Configuration(format!("failed to parse {code} syllable table: {e}"))
        })?;

        if config.metadata.code != *code {
            return Err(SegmentError::Configuration(format!(
                "syllable table code mismatch: expected {}, got {}",
                code, config.metadata.code
            )));
        }

        tables.insert(code.to_string(), SyllableTable::from_config(&config)?);
    }

    Ok(tables)
}

fn tables() -> &'static HashMap<String, SyllableTable> {
    TABLES.get_or_init(|| load_embedded_tables().expect("embedded syllable tables must load"))
}
