//! German numeral spelling: agglutinative compound builder plus
//! context-dependent ordinal inflection.

use crate::roman::roman_to_int;
use crate::skeleton::{LanguageRules, SpellError};
use once_cell::sync::Lazy;
use regex::Regex;
use rule_engine::{ContextRule, TokenPattern};
use tracing::debug;

static CARDINAL: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]+$").unwrap());
static ORDINAL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([0-9]+er|[0-9]+\.|[IVXLCDM]{2,}\.)$").unwrap());
static DECIMAL: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9,.]+[0-9,.]*$").unwrap());
static ROMAN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[IVXLCDM]{2,}$").unwrap());
static ORDINAL_MARKER: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\.|er)").unwrap());

const ORDINAL_PATTERN: &str = r"([0-9]+er|[0-9]+\.|[IVXLCDM]{2,}\.)";

/// Contexts requiring the "-n" ending ("am zweiten Dezember").
static ENDING_N: Lazy<ContextRule> = Lazy::new(|| {
    ContextRule::Leaf(
        TokenPattern::new(
            ORDINAL_PATTERN,
            Some(
                "(an|am|im|de[nmrs]|vo[nm]|ein[nmrs]|jede[nmrs]|solche[nmrs]|jene[nmrs]|welche[nmrs])",
            ),
            None,
        )
        .expect("ending-n context rule is well formed"),
    )
});

/// Contexts keeping the bare "-e" ending ("das zweite").
static ENDING_E: Lazy<ContextRule> = Lazy::new(|| {
    ContextRule::Leaf(
        TokenPattern::new(
            ORDINAL_PATTERN,
            Some("(der|die|das|jede|solche|jene|welche)"),
            None,
        )
        .expect("ending-e context rule is well formed"),
    )
});

const UNITS: [&str; 20] = [
    "null", "ein", "zwei", "drei", "vier", "fünf", "sechs", "sieben", "acht", "neun", "zehn",
    "elf", "zwölf", "dreizehn", "vierzehn", "fünfzehn", "sechzehn", "siebzehn", "achtzehn",
    "neunzehn",
];

const DECADES: [&str; 10] = [
    "", "", "zwanzig", "dreissig", "vierzig", "fünfzig", "sechzig", "siebzig", "achtzig",
    "neunzig",
];

/// 1-999 in German primitives. Units and decades come out reversed
/// ("neun und sechzig"); "ein" collapses to a bare "hundert".
fn hundred_decade(mut n: u64, und_in_units: bool) -> String {
    let mut words = String::new();

    if n >= 100 {
        let h = (n / 100) as usize;
        n %= 100;
        if h == 1 {
            words.push_str("hundert ");
        } else {
            words.push_str(UNITS[h]);
            words.push_str(" hundert ");
        }
    }

    if n <= 19 {
        if n > 0 {
            if und_in_units {
                words.push_str(" und ");
                words.push_str(UNITS[n as usize]);
            } else if n == 1 {
                // Bare unit takes the cardinal suffix: "eins", "hundert eins".
                words.push(' ');
                words.push_str(UNITS[1]);
                words.push('s');
            } else {
                words.push(' ');
                words.push_str(UNITS[n as usize]);
            }
        }
    } else {
        let d = (n / 10) as usize;
        let u = (n % 10) as usize;
        if u != 0 {
            words.push_str(UNITS[u]);
            words.push_str(" und ");
            words.push_str(DECADES[d]);
        } else {
            words.push(' ');
            words.push_str(DECADES[d]);
        }
    }

    words.trim().to_string()
}

/// Ordinal rewriting of the trailing word: erste/dritte/achte irregular,
/// "-te" for units and teens, "-ste" otherwise.
fn apply_ordinal_endings(words: &str) -> String {
    let parts: Vec<&str> = words.split_whitespace().collect();
    let Some((last, head)) = parts.split_last() else {
        return words.to_string();
    };
    let head = head.join(" ");

    let is_unit = UNITS[1..].contains(last) || *last == "eins";
    let rewritten = if is_unit {
        match *last {
            "ein" | "eins" => format!("{head} erste"),
            "drei" => format!("{head} dritte"),
            "acht" => format!("{head} achte"),
            _ => format!("{}te", words.trim()),
        }
    } else {
        format!("{}ste", words.trim())
    };

    rewritten.trim().to_string()
}

/// Spell `n` in German primitives.
///
/// Decomposition is lossless over million/thousand/remainder groups for
/// 0 <= n < 10^9; `und_in_units` spells 1-19 as "und <unit>" with the
/// leading "und" stripped from the final result.
pub fn number_to_words(n: u64, und_in_units: bool, ordinal: bool) -> String {
    debug_assert!(n < 1_000_000_000);
    if n == 0 {
        return "null".to_string();
    }

    let mut words = String::new();

    let millions = n / 1_000_000;
    if millions > 0 {
        let mut group = hundred_decade(millions, und_in_units);
        if group == "eins" {
            group = "ein".to_string();
        }
        let one = group == "ein";
        words.push_str(&group);
        words.push_str(" million");
        if !one {
            words.push_str("en ");
        }
    }

    let thousands = (n % 1_000_000) / 1000;
    if thousands > 0 {
        let group = hundred_decade(thousands, und_in_units);
        if group != "eins" {
            words.push(' ');
            words.push_str(&group);
        }
        words.push_str(" tausend ");
    }

    let rest = n % 1000;
    if rest > 0 {
        words.push(' ');
        words.push_str(&hundred_decade(rest, und_in_units));
    }

    if ordinal {
        words = apply_ordinal_endings(&words);
    }

    let mut words = words.split_whitespace().collect::<Vec<_>>().join(" ");
    if und_in_units {
        words = words.trim_start_matches("und ").to_string();
    }
    words
}

/// Ordinal ending inferred from the surrounding tokens; empty when no
/// context rule matches.
fn ordinal_ending(tokens: &[&str], index: usize) -> &'static str {
    let mut ending = "";
    if ENDING_N.applies_at(tokens, index) && ENDING_N.matches(tokens, index) {
        ending = "n";
    }
    if ENDING_E.applies_at(tokens, index) && ENDING_E.matches(tokens, index) {
        ending = "e";
    }
    if ending.is_empty() {
        debug!(token = tokens[index], "no ordinal context matched, using uninflected form");
    }
    ending
}

pub struct GermanRules;

impl LanguageRules for GermanRules {
    fn label(&self) -> &'static str {
        "german"
    }

    fn thousands_separator(&self) -> char {
        '\''
    }

    fn normalize(&self, word: &str) -> String {
        let mut w: String = word
            .chars()
            .filter(|c| *c != self.thousands_separator())
            .collect();
        // A single trailing dot is the ordinal marker; only a doubled dot
        // or a comma is sentence punctuation.
        if w.ends_with("..") || w.ends_with(',') {
            w.pop();
        }
        w
    }

    fn is_cardinal(&self, word: &str) -> bool {
        CARDINAL.is_match(word)
    }

    fn is_ordinal(&self, word: &str) -> bool {
        ORDINAL.is_match(word)
    }

    fn is_decimal(&self, word: &str) -> bool {
        DECIMAL.is_match(word)
    }

    fn is_roman(&self, word: &str) -> bool {
        ROMAN.is_match(word)
    }

    fn cardinal_to_word(&self, number: &str) -> Result<String, SpellError> {
        let n: u64 = number
            .parse()
            .map_err(|_| SpellError::new(format!("'{number}' is not a cardinal")))?;
        if n >= 1_000_000_000 {
            return Err(SpellError::new(format!("{n} exceeds the compound range")));
        }
        Ok(number_to_words(n, false, false))
    }

    fn ordinal_to_word(&self, tokens: &[&str], index: usize) -> Result<String, SpellError> {
        let word = self.normalize(tokens[index]);

        // Context rules see the normalized token.
        let mut context: Vec<&str> = tokens.to_vec();
        context[index] = &word;
        let mut ending = ordinal_ending(&context, index);

        let bare = ORDINAL_MARKER.replace_all(&word, "").into_owned();
        let spelled = if CARDINAL.is_match(&bare) {
            let n: u64 = bare
                .parse()
                .map_err(|_| SpellError::new(format!("'{bare}' overflows")))?;
            if n >= 1_000_000_000 {
                return Err(SpellError::new(format!("{n} exceeds the compound range")));
            }
            number_to_words(n, false, true)
        } else if ROMAN.is_match(&bare) {
            let n = roman_to_int(&bare)?;
            number_to_words(n, false, true)
        } else {
            return Ok(word);
        };

        // The ordinal form already ends in "e".
        if ending == "e" {
            ending = "";
        }
        Ok(format!("{spelled}{ending}"))
    }

    fn decimal_to_word(&self, number: &str) -> Result<String, SpellError> {
        let spoken = number.replace(',', " komma ").replace('.', " punkt ");
        let mut parts = Vec::new();
        for fragment in spoken.split_whitespace() {
            if CARDINAL.is_match(fragment) {
                parts.push(self.cardinal_to_word(fragment)?);
            } else {
                parts.push(fragment.to_string());
            }
        }
        Ok(parts.join(" "))
    }

    fn roman_to_word(&self, number: &str) -> Result<String, SpellError> {
        let n = roman_to_int(number)?;
        self.cardinal_to_word(&n.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::skeleton::convert_text;

    #[test]
    fn test_cardinal_number_into_letters() {
        for (digits, words) in [
            (1, "eins"),
            (12, "zwölf"),
            (15, "fünfzehn"),
            (51, "ein und fünfzig"),
            (69, "neun und sechzig"),
            (76, "sechs und siebzig"),
            (100, "hundert"),
            (101, "hundert eins"),
            (134, "hundert vier und dreissig"),
            (318, "drei hundert achtzehn"),
            (1000, "tausend"),
            (1004, "tausend vier"),
            (1504, "tausend fünf hundert vier"),
            (2000, "zwei tausend"),
            (
                589_217,
                "fünf hundert neun und achtzig tausend zwei hundert siebzehn",
            ),
            (1_000_000, "ein million"),
            (100_000_000, "hundert millionen"),
        ] {
            assert_eq!(number_to_words(digits, false, false), words, "{digits}");
        }
    }

    #[test]
    fn test_ordinal_number_into_letters() {
        for (digits, words) in [
            (1, "erste"),
            (3, "dritte"),
            (8, "achte"),
            (12, "zwölfte"),
            (15, "fünfzehnte"),
            (51, "ein und fünfzigste"),
            (69, "neun und sechzigste"),
            (76, "sechs und siebzigste"),
            (100, "hundertste"),
            (101, "hundert erste"),
            (134, "hundert vier und dreissigste"),
            (318, "drei hundert achtzehnte"),
            (1000, "tausendste"),
            (1004, "tausend vierte"),
            (1504, "tausend fünf hundert vierte"),
            (2000, "zwei tausendste"),
            (
                589_217,
                "fünf hundert neun und achtzig tausend zwei hundert siebzehnte",
            ),
        ] {
            assert_eq!(number_to_words(digits, false, true), words, "{digits}");
        }
    }

    #[test]
    fn test_decomposition_reconstructs() {
        // million/thousand/remainder groups must sum back to n.
        for n in [0u64, 7, 999, 1000, 999_999, 1_000_000, 589_217_431, 999_999_999] {
            let millions = n / 1_000_000;
            let thousands = (n % 1_000_000) / 1000;
            let rest = n % 1000;
            assert_eq!(millions * 1_000_000 + thousands * 1000 + rest, n);
        }
    }

    #[test]
    fn test_decimal_number_into_letters() {
        for (digits, words) in [
            ("1,4", "eins komma vier"),
            ("134,2", "hundert vier und dreissig komma zwei"),
            (
                "589217,346",
                "fünf hundert neun und achtzig tausend zwei hundert siebzehn komma drei hundert sechs und vierzig",
            ),
            ("2,5", "zwei komma fünf"),
            ("2.5,3", "zwei punkt fünf komma drei"),
        ] {
            assert_eq!(GermanRules.decimal_to_word(digits).unwrap(), words);
        }
    }

    #[test]
    fn test_classification() {
        assert!(GermanRules.is_cardinal("123"));
        assert!(!GermanRules.is_cardinal("123."));
        for (token, expected) in [
            ("1.", true),
            ("3.", true),
            ("10.", true),
            ("I.", false),
            ("XII.", true),
            ("017688088605", false),
        ] {
            assert_eq!(GermanRules.is_ordinal(token), expected, "{token}");
        }
        assert!(GermanRules.is_decimal("2,5,3"));
        assert!(!GermanRules.is_decimal("2-5"));
        assert!(GermanRules.is_roman("XII"));
        assert!(!GermanRules.is_roman("V"));
    }

    #[test]
    fn test_normalize_number() {
        assert_eq!(GermanRules.normalize("50'000"), "50000");
        assert_eq!(GermanRules.normalize("550'000'000"), "550000000");
        // The single trailing dot is an ordinal marker and survives.
        assert_eq!(GermanRules.normalize("2."), "2.");
        assert_eq!(GermanRules.normalize("2.."), "2.");
        assert_eq!(GermanRules.normalize("2,"), "2");
    }

    #[test]
    fn test_ordinal2word_with_context() {
        for (text, expected) in [
            ("der 1.", "der erste"),
            ("der 2.", "der zweite"),
            ("der XXV.", "der fünf und zwanzigste"),
            ("der XX.", "der zwanzigste"),
        ] {
            assert_eq!(convert_text(&GermanRules, text), expected, "{text}");
        }
    }

    #[test]
    fn test_apply() {
        for (text, expected) in [
            ("10", "zehn"),
            ("25", "fünf und zwanzig"),
            ("XX", "zwanzig"),
            ("II", "zwei"),
            ("1ab", "1ab"),
            ("ab", "ab"),
            (
                "die 25 März 2015 2.5 die XX.",
                "die fünf und zwanzig März zwei tausend fünfzehn zwei punkt fünf die zwanzigste",
            ),
            (
                "am 21. dezember 2011",
                "am ein und zwanzigsten dezember zwei tausend elf",
            ),
            ("das 21.", "das ein und zwanzigste"),
            ("2,", "zwei"),
            ("das 2.,", "das zweite"),
            ("das 2..", "das zweite"),
            ("am 2. Dezember", "am zweiten Dezember"),
        ] {
            assert_eq!(convert_text(&GermanRules, text), expected, "{text}");
        }
    }
}
