//! French numeral spelling.

use crate::roman::roman_to_int;
use crate::skeleton::{LanguageRules, SpellError};
use once_cell::sync::Lazy;
use regex::Regex;

static CARDINAL: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]+$").unwrap());
static ORDINAL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(1er|1re|1ère|[0-9]+e|[0-9]+ème|Ier|Ire|Ière|[IVXLCDM]+ème|[IVXLCDM]{2,}e)$")
        .unwrap()
});
static DECIMAL: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9,.]+[0-9,.]*$").unwrap());
static ROMAN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[IVXLCDM]{2,}$").unwrap());
static TRANSITION: Lazy<Regex> = Lazy::new(|| Regex::new(r"^([1-9]|10)\.$").unwrap());
static ORDINAL_SUFFIX: Lazy<Regex> = Lazy::new(|| Regex::new(r"(ère|ème|er|re|e)$").unwrap());

/// List-position adverbs for 1. through 10.
const TRANSITIONS: [(&str, &str); 10] = [
    ("1.", "premièrement"),
    ("2.", "deuxièmement"),
    ("3.", "troisièmement"),
    ("4.", "quatrièmement"),
    ("5.", "cinquièmement"),
    ("6.", "sixièmement"),
    ("7.", "septièmement"),
    ("8.", "huitièmement"),
    ("9.", "neuvièmement"),
    ("10.", "dixièmement"),
];

const UNITS: [&str; 17] = [
    "zéro", "un", "deux", "trois", "quatre", "cinq", "six", "sept", "huit", "neuf", "dix",
    "onze", "douze", "treize", "quatorze", "quinze", "seize",
];

const TENS: [&str; 7] = ["", "", "vingt", "trente", "quarante", "cinquante", "soixante"];

fn unit_word(n: u64) -> String {
    match n {
        0..=16 => UNITS[n as usize].to_string(),
        17 => "dix-sept".to_string(),
        18 => "dix-huit".to_string(),
        19 => "dix-neuf".to_string(),
        _ => unreachable!("unit_word called with {n}"),
    }
}

/// 1-99, hyphenated compounds, `final_position` controls the plural of
/// quatre-vingts.
fn under_hundred(n: u64, final_position: bool) -> String {
    match n {
        1..=19 => unit_word(n),
        20..=69 => {
            let tens = TENS[(n / 10) as usize];
            match n % 10 {
                0 => tens.to_string(),
                1 => format!("{tens} et un"),
                u => format!("{tens}-{}", unit_word(u)),
            }
        }
        70 => "soixante-dix".to_string(),
        71 => "soixante et onze".to_string(),
        72..=79 => format!("soixante-{}", unit_word(n - 60)),
        80 => {
            if final_position {
                "quatre-vingts".to_string()
            } else {
                "quatre-vingt".to_string()
            }
        }
        81..=99 => format!("quatre-vingt-{}", under_hundred(n - 80, false)),
        _ => unreachable!("under_hundred called with {n}"),
    }
}

/// 1-999. `final_position` controls the plural of cents/vingts.
fn under_thousand(n: u64, final_position: bool) -> String {
    let hundreds = n / 100;
    let rest = n % 100;
    let mut parts = Vec::new();

    if hundreds > 0 {
        if hundreds == 1 {
            parts.push("cent".to_string());
        } else if rest == 0 && final_position {
            parts.push(format!("{} cents", unit_word(hundreds)));
        } else {
            parts.push(format!("{} cent", unit_word(hundreds)));
        }
    }
    if rest > 0 {
        parts.push(under_hundred(rest, final_position));
    }
    parts.join(" ")
}

/// Raw French cardinal spelling (hyphens inside tens compounds).
pub fn cardinal_words(n: u64) -> String {
    if n == 0 {
        return "zéro".to_string();
    }

    let mut parts = Vec::new();
    let milliards = n / 1_000_000_000;
    if milliards > 0 {
        parts.push(under_thousand(milliards, false));
        parts.push(if milliards > 1 { "milliards" } else { "milliard" }.to_string());
    }
    let millions = (n % 1_000_000_000) / 1_000_000;
    if millions > 0 {
        parts.push(under_thousand(millions, false));
        parts.push(if millions > 1 { "millions" } else { "million" }.to_string());
    }
    let thousands = (n % 1_000_000) / 1000;
    if thousands > 0 {
        if thousands > 1 {
            parts.push(under_thousand(thousands, false));
        }
        parts.push("mille".to_string());
    }
    let rest = n % 1000;
    if rest > 0 {
        parts.push(under_thousand(rest, true));
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
        "un" => "unième".to_string(),
        "cinq" => "cinquième".to_string(),
        "neuf" => "neuvième".to_string(),
        "vingts" => "vingtième".to_string(),
        "cent" | "cents" => "centième".to_string(),
        "mille" => "millième".to_string(),
        "million" | "millions" => "millionième".to_string(),
        "milliard" | "milliards" => "milliardième".to_string(),
        s if s.ends_with('e') => format!("{}ième", &s[..s.len() - 1]),
        s => format!("{s}ième"),
    };

    hyphen_parts.push(&ordinal);
    let rebuilt = hyphen_parts.join("-");
    space_parts.push(&rebuilt);
    space_parts.join(" ")
}

pub struct FrenchRules;

impl LanguageRules for FrenchRules {
    fn label(&self) -> &'static str {
        "french"
    }

    fn thousands_separator(&self) -> char {
        '\''
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
        // One word per token: tens compounds lose their hyphens.
        Ok(cardinal_words(n).replace('-', " "))
    }

    fn ordinal_to_word(&self, tokens: &[&str], index: usize) -> Result<String, SpellError> {
        let word = self.normalize(tokens[index]);
        match word.as_str() {
            "1er" | "Ier" => return Ok("premier".to_string()),
            "1ère" | "1re" | "Ière" | "Ire" => return Ok("première".to_string()),
            _ => {}
        }

        let bare = ORDINAL_SUFFIX.replace(&word, "").into_owned();
        if CARDINAL.is_match(&bare) {
            let n: u64 = bare
                .parse()
                .map_err(|_| SpellError::new(format!("'{bare}' overflows")))?;
            Ok(ordinal_of_cardinal(&cardinal_words(n)))
        } else if ROMAN.is_match(&bare) {
            let n = roman_to_int(&bare)?;
            Ok(ordinal_of_cardinal(&cardinal_words(n)))
        } else {
            Ok(word)
        }
    }

    fn decimal_to_word(&self, number: &str) -> Result<String, SpellError> {
        // Each separator maps to its own spoken word, each fragment is
        // spelled on its own, in encounter order.
        let spoken = number.replace(',', " virgule ").replace('.', " point ");
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
            ("10", "dix"),
            ("25", "vingt cinq"),
            ("71", "soixante et onze"),
            ("99", "quatre vingt dix neuf"),
            ("1416000", "un million quatre cent seize mille"),
        ] {
            assert_eq!(FrenchRules.cardinal_to_word(digits).unwrap(), words);
        }
    }

    #[test]
    fn test_ordinal2word() {
        for (token, words) in [
            ("1er", "premier"),
            ("1ère", "première"),
            ("2ème", "deuxième"),
            ("80ème", "quatre-vingtième"),
            ("400ème", "quatre centième"),
            ("380ème", "trois cent quatre-vingtième"),
            ("4000000ème", "quatre millionième"),
            ("XXVème", "vingt-cinquième"),
            ("XXème", "vingtième"),
            ("XXIIIe", "vingt-troisième"),
        ] {
            assert_eq!(
                FrenchRules.ordinal_to_word(&[token], 0).unwrap(),
                words,
                "{token}"
            );
        }
    }

    #[test]
    fn test_transition2word() {
        assert_eq!(FrenchRules.transition("1.").unwrap(), "premièrement");
        assert_eq!(FrenchRules.transition("10.").unwrap(), "dixièmement");
        assert!(FrenchRules.transition("11.").is_none());
    }

    #[test]
    fn test_decimal2word() {
        assert_eq!(
            FrenchRules.decimal_to_word("2,5").unwrap(),
            "deux virgule cinq"
        );
        assert_eq!(
            FrenchRules.decimal_to_word("2.5,3").unwrap(),
            "deux point cinq virgule trois"
        );
    }

    #[test]
    fn test_roman2word() {
        assert_eq!(FrenchRules.roman_to_word("XXIII").unwrap(), "vingt trois");
        assert_eq!(FrenchRules.roman_to_word("XX").unwrap(), "vingt");
    }

    #[test]
    fn test_classification() {
        assert!(FrenchRules.is_cardinal("123"));
        assert!(!FrenchRules.is_cardinal("123."));
        for token in ["1er", "1re", "1ère", "2e", "2ème", "Ier", "XIIème"] {
            assert!(FrenchRules.is_ordinal(token), "{token}");
        }
        assert!(FrenchRules.is_decimal("2,5,3"));
        assert!(!FrenchRules.is_decimal("2-5"));
        assert!(FrenchRules.is_roman("XII"));
        assert!(!FrenchRules.is_roman("V"));
        assert!(!FrenchRules.is_roman("La"));
    }

    #[test]
    fn test_apply() {
        for (text, expected) in [
            ("1ab", "1ab"),
            ("ab", "ab"),
            (
                "le 25 mars 2015 2.5 XXème",
                "le vingt cinq mars deux mille quinze deux point cinq vingtième",
            ),
            ("le 25.", "le vingt cinq"),
            ("le 25.5.", "le vingt cinq point cinq"),
            ("14 alinéa 1, some text", "quatorze alinéa un some text"),
            ("l'article 12,", "l'article douze"),
            ("dans le XXIIIe siècle", "dans le vingt-troisième siècle"),
            ("Ce matin", "Ce matin"),
            ("1'416'000", "un million quatre cent seize mille"),
            ("Le matin", "Le matin"),
            ("1. Election", "premièrement Election"),
        ] {
            assert_eq!(convert_text(&FrenchRules, text), expected, "{text}");
        }
    }
}
