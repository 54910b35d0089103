//! Language profile registry
//!
//! Per-language resource tables (auxiliaries, stopwords, stop-character
//! markers and the optional gerund rule) live in TOML files embedded at
//! compile time. They are parsed once into a process-wide registry and
//! handed out as shared references; the engine never mutates a profile.

use crate::error::{Result, SegmentError};
use regex::Regex;
use serde::Deserialize;
use std::collections::HashMap;
use std::sync::OnceLock;

/// Raw profile layout as it appears in the TOML files.
#[derive(Debug, Clone, Deserialize)]
pub struct ProfileConfig {
    /// Language identification
    pub metadata: MetadataConfig,
    /// Auxiliary verb phrases
    pub auxiliaries: PhraseListConfig,
    /// Heuristic clause-boundary stopwords
    pub stopwords: PhraseListConfig,
    /// Punctuation/contraction clause-break markers
    pub stop_characters: StopCharacterConfig,
    /// Participle detection rule; absent for languages without one
    #[serde(default)]
    pub gerunds: Option<GerundConfig>,
}

/// Language code and display name
#[derive(Debug, Clone, Deserialize)]
pub struct MetadataConfig {
    /// Short language code, e.g. `en`
    pub code: String,
    /// Human-readable language name
    pub name: String,
}

/// A list of phrases, possibly multi-word
#[derive(Debug, Clone, Deserialize)]
pub struct PhraseListConfig {
    /// The phrases, all lowercase
    pub phrases: Vec<String>,
}

/// Stop-character marker list
#[derive(Debug, Clone, Deserialize)]
pub struct StopCharacterConfig {
    /// Punctuation or contraction markers, e.g. `,` or `'ll`
    pub markers: Vec<String>,
}

/// Gerund rule layout: participial suffix plus exclusions
#[derive(Debug, Clone, Deserialize)]
pub struct GerundConfig {
    /// Participial suffix, e.g. `ing`
    pub suffix: String,
    /// Words carrying the suffix that are not participles, in rule order
    pub exclusions: Vec<String>,
}

/// Compiled gerund detection rule.
#[derive(Debug)]
pub struct GerundRule {
    pattern: Regex,
    exclusions: Vec<String>,
}

impl GerundRule {
    fn from_config(config: &GerundConfig) -> Result<Self> {
        let pattern = Regex::new(&format!(r"\w+{}", regex::escape(&config.suffix)))
            .map_err(|e| SegmentError::Configuration(format!("invalid gerund suffix: {e}")))?;
        Ok(Self {
            pattern,
            exclusions: config.exclusions.clone(),
        })
    }

    /// The compiled word-plus-suffix pattern. Every scan runs through a
    /// fresh `find_iter`, so no cursor state survives a call.
    pub fn pattern(&self) -> &Regex {
        &self.pattern
    }

    /// Whether a matched word is on the exclusion list.
    pub fn is_excluded(&self, word: &str) -> bool {
        let word = word.trim();
        self.exclusions.iter().any(|excluded| excluded == word)
    }
}

/// Immutable per-language resource bundle consulted by the engine.
#[derive(Debug)]
pub struct LanguageProfile {
    code: String,
    name: String,
    auxiliaries: Vec<String>,
    stopwords: Vec<String>,
    stop_markers: Vec<String>,
    gerund: Option<GerundRule>,
}

impl LanguageProfile {
    /// Looks up the profile registered for `code`.
    ///
    /// Supplying an unknown code is a contract violation on the caller's
    /// side and is reported as [`SegmentError::UnsupportedLanguage`];
    /// there is no fallback to another language's rules.
    pub fn get(code: &str) -> Result<&'static LanguageProfile> {
        registry()
            .get(code)
            .ok_or_else(|| SegmentError::UnsupportedLanguage {
                code: code.to_string(),
            })
    }

    /// Codes of all registered languages.
    pub fn available() -> Vec<&'static str> {
        let mut codes: Vec<_> = registry().keys().map(|code| code.as_str()).collect();
        codes.sort_unstable();
        codes
    }

    fn from_config(config: &ProfileConfig) -> Result<Self> {
        for phrase in config
            .auxiliaries
            .phrases
            .iter()
            .chain(&config.stopwords.phrases)
            .chain(&config.stop_characters.markers)
        {
            if phrase.is_empty() {
                return Err(SegmentError::Configuration(format!(
                    "profile '{}' contains an empty phrase",
                    config.metadata.code
                )));
            }
            if *phrase != phrase.to_lowercase() {
                return Err(SegmentError::Configuration(format!(
                    "profile '{}': phrase '{phrase}' is not lowercase",
                    config.metadata.code
                )));
            }
        }

        let gerund = config
            .gerunds
            .as_ref()
            .map(GerundRule::from_config)
            .transpose()?;

        Ok(Self {
            code: config.metadata.code.clone(),
            name: config.metadata.name.clone(),
            auxiliaries: config.auxiliaries.phrases.clone(),
            stopwords: config.stopwords.phrases.clone(),
            stop_markers: config.stop_characters.markers.clone(),
            gerund,
        })
    }

    /// Short language code, e.g. `en`
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Human-readable language name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Auxiliary verb phrases, lowercase
    pub fn auxiliaries(&self) -> &[String] {
        &self.auxiliaries
    }

    /// Stopword phrases, lowercase
    pub fn stopwords(&self) -> &[String] {
        &self.stopwords
    }

    /// Stop-character markers
    pub fn stop_markers(&self) -> &[String] {
        &self.stop_markers
    }

    /// Gerund rule, if this language detects participles
    pub fn gerund_rule(&self) -> Option<&GerundRule> {
        self.gerund.as_ref()
    }
}

static PROFILES: OnceLock<HashMap<String, LanguageProfile>> = OnceLock::new();

const EMBEDDED_PROFILES: &[(&str, &str)] = &[
    ("en", include_str!("../configs/languages/english.toml")),
    ("fr", include_str!("../configs/languages/french.toml")),
];

fn load_embedded_profiles() -> Result<HashMap<String, LanguageProfile>> {
    let mut profiles = HashMap::new();

    for (code, toml_content) in EMBEDDED_PROFILES {
        let config: ProfileConfig = toml::from_str(toml_content).map_err(|e| {
            SegmentError::Configuration(format!("failed to parse {code} profile: {e}"))
        })?;

        if config.metadata.code != *code {
            return Err(SegmentError::Configuration(format!(
                "profile code mismatch: expected {}, got {}",
                code, config.metadata.code
            )));
        }

        profiles.insert(code.to_string(), LanguageProfile::from_config(&config)?);
    }

    Ok(profiles)
}

fn registry() -> &'static HashMap<String, LanguageProfile> {
    PROFILES.get_or_init(|| load_embedded_profiles().expect("embedded language profiles must load"))
}
