//! Shared numeral classification skeleton.
//!
//! Classification is total and mutually exclusive over any token bearing a
//! digit or Roman letter: the fixed priority cardinal, ordinal, decimal,
//! Roman decides; no match leaves the token unchanged. Spelling failures
//! never abort a sentence: the token falls back to digit-by-digit spelling
//! with a warning.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::warn;

/// A recoverable spelling failure (invalid Roman sequence, value out of
/// range, ...). Handled locally by the skeleton.
#[derive(Debug, thiserror::Error)]
#[error("{0}")]
pub struct SpellError(pub String);

impl SpellError {
    pub fn new(msg: impl Into<String>) -> Self {
        SpellError(msg.into())
    }
}

/// The per-language speller capability.
///
/// Implementations provide classification regexes and the conversion of
/// each numeral category into written words. The ordinal converter gets the
/// full token list and an index because some ordinal detection needs the
/// surrounding tokens.
pub trait LanguageRules: Send + Sync {
    /// Language label used in diagnostics.
    fn label(&self) -> &'static str;

    /// Thousands separator to strip before classification.
    fn thousands_separator(&self) -> char;

    /// Strip the thousands separator and one trailing period/comma.
    fn normalize(&self, word: &str) -> String {
        let mut w: String = word
            .chars()
            .filter(|c| *c != self.thousands_separator())
            .collect();
        if w.ends_with('.') || w.ends_with(',') {
            w.pop();
        }
        w
    }

    fn is_cardinal(&self, word: &str) -> bool;
    fn is_ordinal(&self, word: &str) -> bool;
    fn is_decimal(&self, word: &str) -> bool;
    fn is_roman(&self, word: &str) -> bool;

    /// Transition-adverb form for a raw token ("1." becomes "firstly"),
    /// when the language has one.
    fn transition(&self, word: &str) -> Option<String> {
        let _ = word;
        None
    }

    fn cardinal_to_word(&self, number: &str) -> Result<String, SpellError>;
    fn ordinal_to_word(&self, tokens: &[&str], index: usize) -> Result<String, SpellError>;
    fn decimal_to_word(&self, number: &str) -> Result<String, SpellError>;
    fn roman_to_word(&self, number: &str) -> Result<String, SpellError>;
}

/// Digit or Roman letter anywhere in the token.
static HAS_NUMBER: Lazy<Regex> = Lazy::new(|| Regex::new("[0-9IVXLCDM]").unwrap());

/// True when `word` contains a digit or a Roman letter.
pub fn has_number(word: &str) -> bool {
    HAS_NUMBER.is_match(word)
}

/// Run the classification skeleton over whitespace-separated tokens.
pub fn convert_text(rules: &dyn LanguageRules, text: &str) -> String {
    let tokens: Vec<&str> = text.split_whitespace().collect();
    let mut out: Vec<String> = Vec::with_capacity(tokens.len());

    for (i, word) in tokens.iter().enumerate() {
        if !has_number(word) {
            out.push((*word).to_string());
            continue;
        }
        match convert_token(rules, &tokens, i) {
            Ok(spelled) => out.push(spelled),
            Err(e) => {
                warn!(
                    token = *word,
                    language = rules.label(),
                    error = %e,
                    "number spelling failed, falling back to digits"
                );
                out.push(spell_digit_by_digit(rules, word));
            }
        }
    }

    out.join(" ")
}

fn convert_token(
    rules: &dyn LanguageRules,
    tokens: &[&str],
    index: usize,
) -> Result<String, SpellError> {
    let word = tokens[index];

    if let Some(adverb) = rules.transition(word) {
        return Ok(adverb);
    }

    let normalized = rules.normalize(word);
    if rules.is_cardinal(&normalized) {
        rules.cardinal_to_word(&normalized)
    } else if rules.is_ordinal(&normalized) {
        rules.ordinal_to_word(tokens, index)
    } else if rules.is_decimal(&normalized) {
        rules.decimal_to_word(&normalized)
    } else if rules.is_roman(&normalized) {
        rules.roman_to_word(&normalized)
    } else {
        Ok(word.to_string())
    }
}

/// Last-resort spelling: each digit becomes its own word, anything else is
/// kept as is.
fn spell_digit_by_digit(rules: &dyn LanguageRules, word: &str) -> String {
    let mut parts = Vec::new();
    for c in word.chars() {
        if c.is_ascii_digit() {
            match rules.cardinal_to_word(&c.to_string()) {
                Ok(w) => parts.push(w),
                Err(_) => parts.push(c.to_string()),
            }
        } else {
            parts.push(c.to_string());
        }
    }
    parts.join(" ")
}
