//! The LM preparation pipeline.
//!
//! Eleven stages in a fixed, load-bearing order: noise filtering, code
//! point normalization, date normalization, abbreviation expansion, mixed
//! letter+digit splitting, a first punctuation strip (dot and comma
//! survive), numeral spelling, contraction normalization, a strict
//! punctuation strip, acronym expansion, case folding. Later stages assume
//! the invariants established by earlier ones.

use crate::constants::{
    ordinal_shape, punctuation_word, ABBREVIATIONS, ACRONYM_RULES, APOSTROPHE_RULES,
    CODEPOINT_MAP, CONTRACTION_RULES, DATE_RULES, DOT_COMMA_EXCLUDE, NOISE_PATTERN,
    PUNCTUATION_EXCLUDE, PUNCTUATION_KEEP_IN_WORD,
};
use once_cell::sync::Lazy;
use prep_core::Lang;
use regex::Regex;
use rule_engine::SubstitutionEngine;
use std::collections::HashMap;
use tracing::warn;

static NOISE: Lazy<Regex> = Lazy::new(|| Regex::new(NOISE_PATTERN).unwrap());
static SPACES: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());
static DIGIT_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"[0-9.,']+").unwrap());
static HAS_DIGIT: Lazy<Regex> = Lazy::new(|| Regex::new(r"[0-9]").unwrap());
static DOT_COMMA_REGROUP: Lazy<Regex> = Lazy::new(|| Regex::new(r" ([.,]) ").unwrap());
static HYPHEN_ALONE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(^- *| - |-$)").unwrap());
static HYPHEN_TRAIL: Lazy<Regex> = Lazy::new(|| Regex::new(r"- ").unwrap());

/// Process-lifetime compiled rule engines, built once on first use.
static DATE_ENGINE: Lazy<SubstitutionEngine> =
    Lazy::new(|| SubstitutionEngine::compile(&DATE_RULES).expect("date rules compile"));
static APOSTROPHE_ENGINE: Lazy<SubstitutionEngine> =
    Lazy::new(|| SubstitutionEngine::compile(&APOSTROPHE_RULES).expect("apostrophe rules compile"));
static CONTRACTION_ENGINE: Lazy<SubstitutionEngine> = Lazy::new(|| {
    SubstitutionEngine::compile(&CONTRACTION_RULES).expect("contraction rules compile")
});
static ACRONYM_ENGINE: Lazy<SubstitutionEngine> =
    Lazy::new(|| SubstitutionEngine::compile(&ACRONYM_RULES).expect("acronym rules compile"));

/// Per-language code point maps, keyed by language id.
static CODEPOINT_MAPS: Lazy<HashMap<u8, HashMap<char, &'static str>>> = Lazy::new(|| {
    let mut maps = HashMap::new();
    for lang in [
        Lang::Unknown,
        Lang::French,
        Lang::German,
        Lang::English,
        Lang::Italian,
    ] {
        let mut map = HashMap::new();
        for (c, replacement, row_lang) in CODEPOINT_MAP {
            if *row_lang == 0 || *row_lang == lang.code() {
                map.insert(*c, *replacement);
            }
        }
        maps.insert(lang.code(), map);
    }
    maps
});

fn all_punctuation(c: char) -> bool {
    PUNCTUATION_EXCLUDE.contains(&c) || DOT_COMMA_EXCLUDE.contains(&c)
}

/// Which exclusion list a strip pass uses.
#[derive(Debug, Clone, Copy)]
enum StripPass {
    /// Dot and comma survive for the numeral stage.
    Partial,
    /// Everything goes.
    Full,
}

impl StripPass {
    fn excludes(self, c: char) -> bool {
        match self {
            StripPass::Partial => PUNCTUATION_EXCLUDE.contains(&c),
            StripPass::Full => all_punctuation(c),
        }
    }
}

/// The preparation formula for one language and mode.
#[derive(Debug, Clone)]
pub struct PreparationFormula {
    lang: Lang,
    expand_numbers_in_words: bool,
}

impl PreparationFormula {
    /// Formula for `lang` with mixed-token expansion off.
    pub fn new(lang: Lang) -> PreparationFormula {
        PreparationFormula {
            lang,
            expand_numbers_in_words: false,
        }
    }

    /// Toggle mixed letter+digit splitting and acronym expansion.
    pub fn with_expand_numbers(mut self, expand: bool) -> PreparationFormula {
        self.expand_numbers_in_words = expand;
        self
    }

    pub fn lang(&self) -> Lang {
        self.lang
    }

    pub fn expand_numbers_in_words(&self) -> bool {
        self.expand_numbers_in_words
    }

    /// Run the full pipeline over `text`.
    pub fn prepare_text(&self, text: &str) -> String {
        let mut text = self.filter_noise_words(text);
        text = self.normalize_codepoints(&text);
        text = DATE_ENGINE.apply(&text, self.lang);
        text = self.expand_abbreviations(&text);
        if self.expand_numbers_in_words {
            text = self.split_mixed_tokens(&text);
        }
        text = self.strip_punctuation(&text, StripPass::Partial);
        text = self.spell_numbers(&text);
        text = self.normalize_contractions(&text);
        text = self.strip_punctuation(&text, StripPass::Full);
        if self.expand_numbers_in_words {
            text = ACRONYM_ENGINE.apply(&text, self.lang);
        }
        text.to_lowercase().trim().to_string()
    }

    /// Stage 1: drop words made of four or more punctuation characters.
    fn filter_noise_words(&self, text: &str) -> String {
        text.split_whitespace()
            .filter(|w| !NOISE.is_match(w))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Stage 2: canonicalize exotic code points, then drop trailing
    /// punctuation left over after a final digit.
    fn normalize_codepoints(&self, text: &str) -> String {
        let map = &CODEPOINT_MAPS[&self.lang.code()];
        let mut out = String::with_capacity(text.len());
        for c in text.chars() {
            match map.get(&c) {
                Some(replacement) => out.push_str(replacement),
                None => out.push(c),
            }
        }

        let mut out = out.trim().to_string();
        let chars: Vec<char> = out.chars().collect();
        if chars.len() > 1
            && all_punctuation(chars[chars.len() - 1])
            && chars[chars.len() - 2].is_ascii_digit()
        {
            out = out.trim_end_matches(all_punctuation).to_string();
        }

        SPACES.replace_all(&out, " ").into_owned()
    }

    /// Stage 4: expand exact-token abbreviations.
    fn expand_abbreviations(&self, text: &str) -> String {
        let Some(dict) = ABBREVIATIONS.get(&self.lang.code()) else {
            return text.to_string();
        };
        text.split_whitespace()
            .map(|w| dict.get(w).copied().unwrap_or(w))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Stage 5: split mixed letter+digit tokens ("P5B4" becomes
    /// "P. 5 B. 4"), leaving ordinal-shaped tokens alone.
    fn split_mixed_tokens(&self, text: &str) -> String {
        let exception = ordinal_shape(self.lang).map(|p| Regex::new(p).expect("shape compiles"));

        let mut words = Vec::new();
        for word in text.split_whitespace() {
            if !HAS_DIGIT.is_match(word)
                || exception.as_ref().is_some_and(|re| re.is_match(word))
            {
                words.push(word.to_string());
                continue;
            }

            let pieces = split_digit_runs(word);
            if pieces.len() <= 1 {
                words.push(word.to_string());
                continue;
            }

            let dotted: Vec<String> = pieces
                .iter()
                .map(|piece| {
                    let mut chars = piece.chars();
                    match (chars.next(), chars.next()) {
                        // A lone uppercase letter reads as an acronym initial.
                        (Some(c), None) if c.is_uppercase() => format!("{piece}."),
                        _ => (*piece).to_string(),
                    }
                })
                .collect();
            let joined = dotted.join(" ");
            let regrouped = DOT_COMMA_REGROUP.replace_all(joined.trim(), "${1} ");
            words.push(regrouped.trim().to_string());
        }

        words.join(" ")
    }

    /// Stages 6 and 9: position-aware punctuation strip.
    fn strip_punctuation(&self, text: &str, pass: StripPass) -> String {
        let keep_in_word = !self.expand_numbers_in_words;
        let mut out = String::with_capacity(text.len());
        let mut prev: Option<char> = None;
        let mut before_prev: Option<char> = None;

        for c in text.chars() {
            if pass.excludes(c) {
                let at_boundary = matches!(before_prev, None | Some(' '));
                let prev_is_digit = prev.is_some_and(|p| p.is_ascii_digit());
                if c == '.' && at_boundary && !prev_is_digit {
                    // Dot after a short non-digit run: an abbreviation or
                    // an acronym initial.
                    out.push('.');
                    out.push(' ');
                } else if keep_in_word
                    && !matches!(prev, None | Some(' '))
                    && PUNCTUATION_KEEP_IN_WORD.contains(&c)
                {
                    out.push(c);
                }
            } else if let Some(word) = punctuation_word(c, self.lang) {
                out.push(' ');
                out.push_str(word);
                out.push(' ');
            } else {
                out.push(c);
            }
            before_prev = prev;
            prev = Some(c);
        }

        let out = out.trim();
        let out = HYPHEN_ALONE.replace_all(out, "");
        let out = HYPHEN_TRAIL.replace_all(&out, " ");
        SPACES.replace_all(out.trim(), " ").into_owned()
    }

    /// Stage 7: numeral classification and spelling.
    fn spell_numbers(&self, text: &str) -> String {
        if !number_speller::has_speller(self.lang) {
            if self.lang != Lang::Unknown {
                warn!(lang = %self.lang, "no numeral speller for language");
            }
            return text.to_string();
        }
        number_speller::spell_numbers(text, self.lang)
    }

    /// Stage 8: apostrophe spacing and contraction prefixes.
    fn normalize_contractions(&self, text: &str) -> String {
        let text = APOSTROPHE_ENGINE.apply(text, self.lang);
        CONTRACTION_ENGINE.apply(&text, self.lang)
    }
}

/// Split a word into alternating letter and digit-run pieces, keeping the
/// delimiters ("P5B4" gives ["P", "5", "B", "4"]).
fn split_digit_runs(word: &str) -> Vec<&str> {
    let mut pieces = Vec::new();
    let mut last = 0;
    for m in DIGIT_RUN.find_iter(word) {
        if m.start() > last {
            pieces.push(&word[last..m.start()]);
        }
        pieces.push(m.as_str());
        last = m.end();
    }
    if last < word.len() {
        pieces.push(&word[last..]);
    }
    pieces
}

#[cfg(test)]
mod tests {
    use super::*;

    fn formula(lang: Lang, expand: bool) -> PreparationFormula {
        PreparationFormula::new(lang).with_expand_numbers(expand)
    }

    #[test]
    fn test_is_noise() {
        let f = formula(Lang::Unknown, false);
        assert_eq!(f.filter_noise_words("!-?- hello how !!!! are you *-+$"),
            "hello how are you");
        for p in ["!!!!", "*-+$", "????", "----"] {
            assert_eq!(f.filter_noise_words(p), "");
        }
    }

    #[test]
    fn test_normalize_codepoints() {
        let f = formula(Lang::Unknown, false);
        assert_eq!(f.normalize_codepoints("a\u{00A0}b\u{2014}c"), "a b-c");
        assert_eq!(f.normalize_codepoints("\u{201C}x\u{201D}"), "'x'");
        assert_eq!(f.normalize_codepoints("c\u{0153}ur"), "coeur");
        // Trailing punctuation after a digit is dropped.
        assert_eq!(f.normalize_codepoints("im Jahr 2015."), "im Jahr 2015");
        // The German-only row stays inert for other languages.
        assert_eq!(f.normalize_codepoints("GRO\u{1E9E}"), "GRO\u{1E9E}");
        let g = formula(Lang::German, false);
        assert_eq!(g.normalize_codepoints("GRO\u{1E9E}"), "GROß");
    }

    #[test]
    fn test_normalize_dates() {
        let f = formula(Lang::Unknown, false);
        for (input, expected) in [
            ("01.01.2015", "01 01 2015"),
            ("01/01/2015", "01 01 2015"),
            ("01.01.15", "01 01 15"),
        ] {
            assert_eq!(DATE_ENGINE.apply(input, f.lang()), expected);
        }
    }

    #[test]
    fn test_expand_abbreviations() {
        for (lang, dict) in ABBREVIATIONS.iter() {
            let f = formula(Lang::from_code(*lang).unwrap(), false);
            for (abbr, expansion) in dict {
                assert_eq!(f.expand_abbreviations(abbr), *expansion);
            }
        }
    }

    #[test]
    fn test_split_mixed_tokens() {
        let f = formula(Lang::Unknown, true);
        for (input, expected) in [
            ("A1", "A. 1"),
            ("P3B", "P. 3 B."),
            ("P5B4", "P. 5 B. 4"),
            ("PPB5", "PPB 5"),
            ("10jährige", "10 jährige"),
            ("2.5", "2.5"),
            ("50'000", "50'000"),
        ] {
            assert_eq!(f.split_mixed_tokens(input), expected, "{input}");
        }

        // Ordinal-shaped tokens are exempt per language.
        assert_eq!(formula(Lang::French, true).split_mixed_tokens("1er"), "1er");
        assert_eq!(formula(Lang::English, true).split_mixed_tokens("1st"), "1st");
        assert_eq!(
            formula(Lang::German, true).split_mixed_tokens("18-jähriger"),
            "18 -jähriger"
        );
    }

    #[test]
    fn test_strip_punctuation_keep_mode() {
        let punctuation: String = "!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~‰".to_string();

        let f = formula(Lang::Unknown, false);
        assert_eq!(f.strip_punctuation(&punctuation, StripPass::Full), "$%&'-/@‰");

        let f = formula(Lang::French, false);
        assert_eq!(
            f.strip_punctuation(&punctuation, StripPass::Full),
            "dollars pourcent et '-/ at pour mille"
        );
    }

    #[test]
    fn test_strip_punctuation_keeps_in_word() {
        let f = formula(Lang::Unknown, false);
        assert_eq!(
            f.strip_punctuation(
                "/ HES-SO und AdG/LA - auch im Winter / Sommer -",
                StripPass::Full
            ),
            "HES-SO und AdG/LA auch im Winter Sommer"
        );
    }

    #[test]
    fn test_strip_punctuation_keeps_abbreviation_dots() {
        let f = formula(Lang::French, true);
        assert_eq!(
            f.strip_punctuation("Constantin, p. l. r., président de", StripPass::Full),
            "Constantin p. l. r. président de"
        );
    }

    #[test]
    fn test_normalize_characters_then_strip() {
        let f = formula(Lang::Unknown, false);
        let t = f.normalize_codepoints("a b c \u{FF1B} , % \u{0153}");
        assert_eq!(f.strip_punctuation(&t, StripPass::Full), "a b c % oe");
    }

    #[test]
    fn test_contraction_prefixes() {
        let f = formula(Lang::English, false);
        assert_eq!(f.prepare_text("President' s"), "president's");
        assert_eq!(f.prepare_text("President' s of"), "president's of");
    }

    #[test]
    fn test_prepare_text_french() {
        let f = formula(Lang::French, true);
        for (input, expected) in [
            ("A dix heures", "à dix heures"),
            ("1. Election", "premièrement election"),
            ("R1", "r. un"),
            ("A1", "a. un"),
            ("P3B", "p. trois b."),
            ("P5B4", "p. cinq b. quatre"),
            ("PPB5", "p. p. b. cinq"),
            ("rte", "route"),
            (
                "Constantin, p. l. r., président de",
                "constantin p. l. r. président de",
            ),
            ("à plus tard", "à plus tard"),
            ("maîtres", "maîtres"),
            ("maïs", "maïs"),
            ("emmaüs", "emmaüs"),
            ("1er", "premier"),
            ("20ème", "vingtième"),
            ("18-age", "dix huit age"),
        ] {
            assert_eq!(f.prepare_text(input), expected, "{input}");
        }

        // Keep mode protects hyphenated compounds.
        let f = formula(Lang::French, false);
        assert_eq!(f.prepare_text("18-age"), "18-age");
        assert_eq!(
            f.prepare_text("/ HES-SO und AdG/LA - auch im Winter / Sommer -"),
            "hes-so und adg/la auch im winter sommer"
        );
    }

    #[test]
    fn test_prepare_text_german() {
        let f = formula(Lang::German, true);
        for (input, expected) in [
            ("emmaüs", "emmaüs"),
            ("môchten", "môchten"),
            ("mädchen", "mädchen"),
            ("18-jähriger", "achtzehn jähriger"),
            ("am 2. Dezember", "am zweiten dezember"),
        ] {
            assert_eq!(f.prepare_text(input), expected, "{input}");
        }

        let f = formula(Lang::German, false);
        assert_eq!(f.prepare_text("18-jähriger"), "18-jähriger");
    }

    #[test]
    fn test_prepare_text_english() {
        let f = formula(Lang::English, true);
        assert_eq!(f.prepare_text("object 5"), "object five");
        assert_eq!(f.prepare_text("1st"), "first");
        assert_eq!(f.prepare_text("2.5"), "two point five");

        let f = formula(Lang::English, false);
        assert_eq!(f.prepare_text("18-year-old"), "18-year-old");
    }
}
