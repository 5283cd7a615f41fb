//! Regex-based sentence segmentation.
//!
//! Pattern-and-repair: dots that do not end a sentence (floats,
//! abbreviations, initials, titles) are protected with a placeholder,
//! the text is split on sentence enders followed by whitespace, and the
//! placeholders are restored.

use once_cell::sync::Lazy;
use prep_core::SentenceSegmenter;
use regex::{Captures, Regex};

/// Placeholder for protected dots; unlikely to appear in natural text.
const PROTECTED_DOT: &str = "\u{FEFF}";

static FLOAT_DOT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?P<int>[0-9])\.(?P<frac>[0-9])").unwrap());

static ABBREV_DOTS: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?:[A-Za-z]\.){2,}").unwrap());

static INITIAL_DOT: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?P<init>\b[A-Z])\.").unwrap());

static TITLE_DOT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?P<title>\b(?:Dr|Mr|Mrs|Ms|St|Prof|etc|bzw|usw|ca|Nr|av|bd|rte))\.").unwrap()
});

static ORDINAL_DOT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?P<num>[0-9])\.(?P<follow>\s+[a-zäöüéèà])").unwrap());

static SENTENCE_END: Lazy<Regex> = Lazy::new(|| Regex::new(r"[.!?]+\s+").unwrap());

/// Sentence segmenter backed by pre-compiled regexes.
#[derive(Debug, Default)]
pub struct RegexSegmenter;

impl RegexSegmenter {
    fn protect(text: &str) -> String {
        let text = FLOAT_DOT.replace_all(text, |c: &Captures<'_>| {
            format!("{}{PROTECTED_DOT}{}", &c["int"], &c["frac"])
        });
        let text = ABBREV_DOTS.replace_all(&text, |c: &Captures<'_>| {
            c[0].replace('.', PROTECTED_DOT)
        });
        let text = TITLE_DOT.replace_all(&text, |c: &Captures<'_>| {
            format!("{}{PROTECTED_DOT}", &c["title"])
        });
        let text = INITIAL_DOT.replace_all(&text, |c: &Captures<'_>| {
            format!("{}{PROTECTED_DOT}", &c["init"])
        });
        let text = ORDINAL_DOT.replace_all(&text, |c: &Captures<'_>| {
            format!("{}{PROTECTED_DOT}{}", &c["num"], &c["follow"])
        });
        text.into_owned()
    }

    fn restore(text: &str) -> String {
        text.replace(PROTECTED_DOT, ".")
    }
}

impl SentenceSegmenter for RegexSegmenter {
    fn segment(&self, text: &str) -> Vec<String> {
        let flat = text.split_whitespace().collect::<Vec<_>>().join(" ");
        if flat.is_empty() {
            return Vec::new();
        }
        let protected = Self::protect(&flat);

        let mut sentences = Vec::new();
        let mut start = 0;
        for m in SENTENCE_END.find_iter(&protected) {
            let sentence = protected[start..m.end()].trim();
            if !sentence.is_empty() {
                sentences.push(Self::restore(sentence));
            }
            start = m.end();
        }
        let tail = protected[start..].trim();
        if !tail.is_empty() {
            sentences.push(Self::restore(tail));
        }
        sentences
    }
}
