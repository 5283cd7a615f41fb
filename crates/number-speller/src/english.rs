//! English numeral spelling.

use crate::roman::roman_to_int;
use crate::skeleton::{LanguageRules, SpellError};
use once_cell::sync::Lazy;
use regex::Regex;

static CARDINAL: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]+$").unwrap());
static ORDINAL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([0-9]+st|[0-9]+nd|[0-9]+rd|[0-9]+th|[IVXLCDM]+[stndrh]{2,})$").unwrap()
});
static DECIMAL: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9.]+[0-9.]*$").unwrap());
static ROMAN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[IVXLCDM]{2,}$").unwrap());
static TRANSITION: Lazy<Regex> = Lazy::new(|| Regex::new(r"^([1-9]|10)\.$").unwrap());
static ORDINAL_SUFFIX: Lazy<Regex> = Lazy::new(|| Regex::new(r"(st|nd|rd|th)$").unwrap());

const TRANSITIONS: [(&str, &str); 10] = [
    ("1.", "firstly"),
    ("2.", "secondly"),
    ("3.", "thirdly"),
    ("4.", "fourthly"),
    ("5.", "fifthly"),
    ("6.", "sixthly"),
    ("7.", "seventhly"),
    ("8.", "eighthly"),
    ("9.", "ninthly"),
    ("10.", "tenthly"),
];

const ONES: [&str; 20] = [
    "zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten",
    "eleven", "twelve", "thirteen", "fourteen", "fifteen", "sixteen", "seventeen", "eighteen",
    "nineteen",
];

const TENS: [&str; 10] = [
    "", "", "twenty", "thirty", "forty", "fifty", "sixty", "seventy", "eighty", "ninety",
];

fn under_hundred(n: u64) -> String {
    if n < 20 {
        return ONES[n as usize].to_string();
    }
    let tens = TENS[(n / 10) as usize];
    match n % 10 {
        0 => tens.to_string(),
        u => format!("{tens}-{}", ONES[u as usize]),
    }
}

/// 1-999, with the British "and" between hundreds and the rest.
fn under_thousand(n: u64) -> String {
    let hundreds = n / 100;
    let rest = n % 100;
    let mut parts = Vec::new();
    if hundreds > 0 {
        parts.push(format!("{} hundred", ONES[hundreds as usize]));
    }
    if rest > 0 {
        if hundreds > 0 {
            parts.push("and".to_string());
        }
        parts.push(under_hundred(rest));
    }
    parts.join(" ")
}

/// Raw English cardinal spelling (hyphenated tens compounds).
pub fn cardinal_words(n: u64) -> String {
    if n == 0 {
        return "zero".to_string();
    }

    let mut parts = Vec::new();
    for (value, name) in [
        (1_000_000_000, "billion"),
        (1_000_000, "million"),
        (1_000, "thousand"),
    ] {
        let group = (n / value) % 1000;
        if group > 0 {
            parts.push(under_thousand(group));
            parts.push(name.to_string());
        }
    }
    let rest = n % 1000;
    if rest > 0 {
        // "two thousand and fifteen": a bare sub-hundred remainder after a
        // scale word takes "and".
        if !parts.is_empty() && rest < 100 {
            parts.push("and".to_string());
        }
        parts.push(under_thousand(rest));
    }
    parts.join(" ")
}

/// Rewrite the trailing word of a cardinal spelling into its ordinal form.
fn ordinal_of_cardinal(words: &str) -> String {
    let mut space_parts: Vec<&str> = words.split(' ').collect();
    let last_word = space_parts.pop().unwrap_or("");
    let mut hyphen_parts: Vec<&str> = last_word.split('-').collect();
    let last = hyphen_parts.pop().unwrap_or("");

    let ordinal = match last {
        "one" => "first".to_string(),
        "two" => "second".to_string(),
        "three" => "third".to_string(),
        "five" => "fifth".to_string(),
        "eight" => "eighth".to_string(),
        "nine" => "ninth".to_string(),
        "twelve" => "twelfth".to_string(),
        s if s.ends_with('y') => format!("{}ieth", &s[..s.len() - 1]),
        s => format!("{s}th"),
    };

    hyphen_parts.push(&ordinal);
    let rebuilt = hyphen_parts.join("-");
    space_parts.push(&rebuilt);
    space_parts.join(" ")
}

pub struct EnglishRules;

impl LanguageRules for EnglishRules {
    fn label(&self) -> &'static str {
        "english"
    }

    fn thousands_separator(&self) -> char {
        ','
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

    fn transition(&self, word: &str) -> Option<String> {
        if !TRANSITION.is_match(word) || word.contains(self.thousands_separator()) {
            return None;
        }
        TRANSITIONS
            .iter()
            .find(|(digit, _)| *digit == word)
            .map(|(_, adverb)| (*adverb).to_string())
    }

    fn cardinal_to_word(&self, number: &str) -> Result<String, SpellError> {
        let n: u64 = number
            .parse()
            .map_err(|_| SpellError::new(format!("'{number}' is not a cardinal")))?;
        Ok(cardinal_words(n).replace('-', " "))
    }

    fn ordinal_to_word(&self, tokens: &[&str], index: usize) -> Result<String, SpellError> {
        let word = self.normalize(tokens[index]);
        if word == "1st" {
            return Ok("first".to_string());
        }

        let bare = ORDINAL_SUFFIX.replace(&word, "").into_owned();
        if CARDINAL.is_match(&bare) {
            let n: u64 = bare
                .parse()
                .map_err(|_| SpellError::new(format!("'{bare}' overflows")))?;
            Ok(ordinal_of_cardinal(&cardinal_words(n)))
        } else if bare.chars().all(|c| "IVXLCDM".contains(c)) && !bare.is_empty() {
            let n = roman_to_int(&bare)?;
            Ok(ordinal_of_cardinal(&cardinal_words(n)))
        } else {
            Ok(word)
        }
    }

    fn decimal_to_word(&self, number: &str) -> Result<String, SpellError> {
        let spoken = number.replace('.', " point ");
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
    fn test_cardinal2word() {
        for (digits, words) in [
            ("0", "zero"),
            ("10", "ten"),
            ("25", "twenty five"),
            ("101", "one hundred and one"),
            ("2015", "two thousand and fifteen"),
            ("2345", "two thousand three hundred and forty five"),
            ("1000000", "one million"),
        ] {
            assert_eq!(EnglishRules.cardinal_to_word(digits).unwrap(), words);
        }
    }

    #[test]
    fn test_ordinal2word() {
        for (token, words) in [
            ("1st", "first"),
            ("2nd", "second"),
            ("3rd", "third"),
            ("4th", "fourth"),
            ("5th", "fifth"),
            ("9th", "ninth"),
            ("12th", "twelfth"),
            ("20th", "twentieth"),
            ("21st", "twenty-first"),
            ("XXth", "twentieth"),
        ] {
            assert_eq!(
                EnglishRules.ordinal_to_word(&[token], 0).unwrap(),
                words,
                "{token}"
            );
        }
    }

    #[test]
    fn test_transition2word() {
        assert_eq!(EnglishRules.transition("1.").unwrap(), "firstly");
        assert_eq!(EnglishRules.transition("10.").unwrap(), "tenthly");
        assert!(EnglishRules.transition("25.").is_none());
    }

    #[test]
    fn test_decimal2word() {
        assert_eq!(
            EnglishRules.decimal_to_word("2.5").unwrap(),
            "two point five"
        );
    }

    #[test]
    fn test_classification() {
        assert!(EnglishRules.is_cardinal("42"));
        for token in ["1st", "2nd", "3rd", "4th", "XXth"] {
            assert!(EnglishRules.is_ordinal(token), "{token}");
        }
        assert!(EnglishRules.is_decimal("2.5"));
        assert!(!EnglishRules.is_decimal("2,5"));
        assert!(EnglishRules.is_roman("XII"));
    }

    #[test]
    fn test_apply() {
        for (text, expected) in [
            ("object 5", "object five"),
            ("1st", "first"),
            ("1,000", "one thousand"),
            (
                "the 25 march 2015 2.5 XXth",
                "the twenty five march two thousand and fifteen two point five twentieth",
            ),
        ] {
            assert_eq!(convert_text(&EnglishRules, text), expected, "{text}");
        }
    }
}
