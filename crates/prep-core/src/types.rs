//! Core data types for the preparation pipeline.

use serde::{Deserialize, Serialize};

/// Languages known to the preparation engine.
///
/// Rule tables use the numeric codes: 0 applies to every language, 1-4
/// select a single one. Italian is a recognised label without a numeral
/// speller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    /// Unknown / any language.
    #[default]
    Unknown,
    /// French.
    French,
    /// German.
    German,
    /// English.
    English,
    /// Italian.
    Italian,
}

impl Lang {
    /// Numeric language id as used in rule tables (0 = any).
    pub fn code(self) -> u8 {
        match self {
            Lang::Unknown => 0,
            Lang::French => 1,
            Lang::German => 2,
            Lang::English => 3,
            Lang::Italian => 4,
        }
    }

    /// Parse a rule-table language id.
    pub fn from_code(code: u8) -> Option<Lang> {
        match code {
            0 => Some(Lang::Unknown),
            1 => Some(Lang::French),
            2 => Some(Lang::German),
            3 => Some(Lang::English),
            4 => Some(Lang::Italian),
            _ => None,
        }
    }

    /// All concrete languages (excludes `Unknown`).
    pub fn known() -> [Lang; 4] {
        [Lang::French, Lang::German, Lang::English, Lang::Italian]
    }
}

impl std::fmt::Display for Lang {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Lang::Unknown => write!(f, "unknown"),
            Lang::French => write!(f, "french"),
            Lang::German => write!(f, "german"),
            Lang::English => write!(f, "english"),
            Lang::Italian => write!(f, "italian"),
        }
    }
}

impl std::str::FromStr for Lang {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "unknown" | "any" | "0" => Ok(Lang::Unknown),
            "french" | "fr" | "1" => Ok(Lang::French),
            "german" | "de" | "2" => Ok(Lang::German),
            "english" | "en" | "3" => Ok(Lang::English),
            "italian" | "it" | "4" => Ok(Lang::Italian),
            _ => Err(format!("unknown language: {s}")),
        }
    }
}

/// A prepared sentence as emitted by the pipeline.
///
/// Immutable once constructed; the owning document collaborator decides
/// whether to keep or discard it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedSentence {
    text: String,
    lang: Lang,
}

impl NormalizedSentence {
    /// Create a new normalized sentence.
    pub fn new(text: impl Into<String>, lang: Lang) -> Self {
        Self {
            text: text.into(),
            lang,
        }
    }

    /// The canonical text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The language the sentence was prepared for.
    pub fn lang(&self) -> Lang {
        self.lang
    }

    /// Number of whitespace-separated words.
    pub fn word_count(&self) -> usize {
        self.text.split_whitespace().count()
    }
}

/// Outcome of running a sentence through validation and filtering.
///
/// Rejection is a normal filtering result, not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SentenceOutcome {
    /// The sentence passed all checks.
    Accepted(NormalizedSentence),
    /// The sentence was discarded; the reason is kept for logging.
    Rejected { reason: String },
}

impl SentenceOutcome {
    /// The accepted sentence, if any.
    pub fn accepted(self) -> Option<NormalizedSentence> {
        match self {
            SentenceOutcome::Accepted(s) => Some(s),
            SentenceOutcome::Rejected { .. } => None,
        }
    }
}
