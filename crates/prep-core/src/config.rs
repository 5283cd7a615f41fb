//! Configuration structures for the preparation engine.

use crate::types::Lang;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Sentence filtering bounds applied by the document collaborator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilterConfig {
    /// Minimum sentence length in characters.
    #[serde(default = "default_min_sentence_chars")]
    pub min_sentence_chars: usize,
    /// Maximum sentence length in characters.
    #[serde(default = "default_max_sentence_chars")]
    pub max_sentence_chars: usize,
    /// Minimum number of words.
    #[serde(default = "default_min_words")]
    pub min_words: usize,
    /// Maximum number of words.
    #[serde(default = "default_max_words")]
    pub max_words: usize,
    /// Maximum number of digit groups in a sentence.
    #[serde(default = "default_max_digit_groups")]
    pub max_digit_groups: usize,
    /// Maximum length of a single word in bytes.
    #[serde(default = "default_max_word_length")]
    pub max_word_length: usize,
}

fn default_min_sentence_chars() -> usize {
    5
}

fn default_max_sentence_chars() -> usize {
    800
}

fn default_min_words() -> usize {
    3
}

fn default_max_words() -> usize {
    80
}

fn default_max_digit_groups() -> usize {
    20
}

fn default_max_word_length() -> usize {
    50
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            min_sentence_chars: default_min_sentence_chars(),
            max_sentence_chars: default_max_sentence_chars(),
            min_words: default_min_words(),
            max_words: default_max_words(),
            max_digit_groups: default_max_digit_groups(),
            max_word_length: default_max_word_length(),
        }
    }
}

/// Options controlling one preparation run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PrepareOptions {
    /// Target language; `Unknown` enables per-sentence identification.
    #[serde(default)]
    pub lang: Lang,
    /// Split mixed letter+digit tokens and expand acronyms.
    #[serde(default)]
    pub expand_numbers_in_words: bool,
    /// Apply sentence filtering bounds.
    #[serde(default)]
    pub filter_sentences: bool,
    /// Run the LM preparation pipeline on each sentence.
    #[serde(default)]
    pub lm_mode: bool,
    /// Verbalize punctuation symbols into words.
    #[serde(default)]
    pub verbalize_punctuation: bool,
    /// Remove verbalized punctuation words.
    #[serde(default)]
    pub strip_verbalized: bool,
    /// Optional user rule-table file (substitution + validation rows).
    #[serde(default)]
    pub rule_file: Option<PathBuf>,
}

impl PrepareOptions {
    /// Options for a plain LM preparation run in `lang`.
    pub fn lm(lang: Lang) -> Self {
        Self {
            lang,
            lm_mode: true,
            ..Self::default()
        }
    }
}
