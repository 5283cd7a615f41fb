//! Declarative tables driving the preparation pipeline.

use once_cell::sync::Lazy;
use prep_core::Lang;
use rule_engine::{ContextType, PatternRule};
use std::collections::HashMap;

/// Exotic code points mapped to canonical equivalents.
/// Rows: (code point, replacement, language id; 0 = every language).
pub const CODEPOINT_MAP: &[(char, &str, u8)] = &[
    // Spaces
    ('\u{00A0}', " ", 0),
    ('\u{FEFF}', " ", 0),
    ('\u{200B}', " ", 0),
    ('\u{200C}', " ", 0),
    ('\u{200D}', " ", 0),
    ('\u{2000}', " ", 0),
    ('\u{2001}', " ", 0),
    ('\u{2002}', " ", 0),
    ('\u{2003}', " ", 0),
    ('\u{2004}', " ", 0),
    ('\u{2005}', " ", 0),
    ('\u{2006}', " ", 0),
    ('\u{2007}', " ", 0),
    ('\u{2008}', " ", 0),
    ('\u{2009}', " ", 0),
    ('\u{200A}', " ", 0),
    ('\u{200E}', " ", 0),
    ('\u{200F}', " ", 0),
    ('\u{205F}', " ", 0),
    ('\u{3000}', " ", 0),
    // Commas
    ('\u{060C}', ",", 0),
    ('\u{066B}', ",", 0),
    ('\u{066C}', ",", 0),
    ('\u{3001}', ",", 0),
    ('\u{FE50}', ",", 0),
    ('\u{FF0C}', ",", 0),
    // Full stops
    ('\u{06D4}', ".", 0),
    ('\u{2024}', ".", 0),
    ('\u{FE52}', ".", 0),
    ('\u{FF0E}', ".", 0),
    ('\u{3002}', ".", 0),
    // Colons and semicolons
    ('\u{FE55}', ":", 0),
    ('\u{FF1A}', ":", 0),
    ('\u{0387}', ";", 0),
    ('\u{061B}', ";", 0),
    ('\u{FE54}', ";", 0),
    ('\u{FF1B}', ";", 0),
    // Hyphens
    ('\u{2010}', "-", 0),
    ('\u{2011}', "-", 0),
    ('\u{2012}', "-", 0),
    ('\u{2013}', "-", 0),
    ('\u{2014}', "-", 0),
    ('\u{2015}', "-", 0),
    ('\u{FF0D}', "-", 0),
    // Quotation marks
    ('\u{2018}', "'", 0),
    ('\u{2019}', "'", 0),
    ('\u{201A}', "'", 0),
    ('\u{201B}', "'", 0),
    ('\u{201C}', "'", 0),
    ('\u{201D}', "'", 0),
    ('\u{201E}', "'", 0),
    ('\u{2032}', "'", 0),
    ('\u{2033}', "'", 0),
    ('\u{2034}', "'", 0),
    ('\u{2035}', "'", 0),
    ('\u{2036}', "'", 0),
    ('\u{2037}', "'", 0),
    ('\u{2039}', "'", 0),
    ('\u{203A}', "'", 0),
    ('\u{00AB}', "'", 0),
    ('\u{00BB}', "'", 0),
    ('\u{00B4}', "'", 0),
    ('\u{FF07}', "'", 0),
    // Question and exclamation marks
    ('\u{037E}', "?", 0),
    ('\u{00BF}', "?", 0),
    ('\u{061F}', "?", 0),
    ('\u{203D}', "?", 0),
    ('\u{FE56}', "?", 0),
    ('\u{FF1F}', "?", 0),
    ('\u{FF01}', "!", 0),
    // Commercial at
    ('\u{FE6B}', "@", 0),
    ('\u{FF20}', "@", 0),
    // Bullets, leaders, ellipsis
    ('\u{2022}', " ", 0),
    ('\u{2023}', " ", 0),
    ('\u{2025}', " ", 0),
    ('\u{2026}', " ", 0),
    ('\u{2027}', " ", 0),
    ('\u{2028}', "", 0),
    ('\u{2029}', "", 0),
    // Ligatures
    ('\u{0153}', "oe", 0),
    ('\u{0152}', "Oe", 0),
    ('\u{00E6}', "ae", 0),
    ('\u{00C6}', "Ae", 0),
    // Capital sharp s folds to the lowercase form.
    ('\u{1E9E}', "ß", 2),
    // Vulgar fractions
    ('\u{00BC}', "1/4", 0),
    ('\u{00BD}', "1/2", 0),
    ('\u{00BE}', "3/4", 0),
    ('\u{2153}', "1/3", 0),
    ('\u{2154}', "2/3", 0),
    ('\u{215B}', "1/8", 0),
    ('\u{215C}', "3/8", 0),
    ('\u{215D}', "5/8", 0),
    ('\u{215E}', "7/8", 0),
];

/// Punctuation removed by the first strip pass. Dot and comma are absent:
/// the numeral stage still needs them.
pub const PUNCTUATION_EXCLUDE: &[char] = &[
    '!', '"', '#', '\'', '(', ')', '*', '+', '-', '/', ':', ';', '<', '=', '>', '?', '[',
    '\\', ']', '^', '_', '`', '{', '|', '}', '~',
];

/// Removed only by the second, strict strip pass.
pub const DOT_COMMA_EXCLUDE: &[char] = &['.', ','];

/// Kept mid-word when mixed tokens are not expanded, protecting hyphenated
/// compounds and elisions.
pub const PUNCTUATION_KEEP_IN_WORD: &[char] = &['-', '\'', '/'];

/// Symbols spoken as words. Columns: French, German, English, Italian.
pub const PUNCTUATION_WORD_MAP: &[(char, [&str; 4])] = &[
    ('%', ["pourcent", "Prozent", "percent", "per cento"]),
    ('&', ["et", "und", "and", "e"]),
    ('@', ["at", "at", "at", "at"]),
    ('$', ["dollars", "Dollar", "dollars", "dollari"]),
    ('‰', ["pour mille", "Promille", "per mille", "per mille"]),
];

/// Spoken word for `symbol` in `lang`, if any.
pub fn punctuation_word(symbol: char, lang: Lang) -> Option<&'static str> {
    let column = match lang {
        Lang::French => 0,
        Lang::German => 1,
        Lang::English => 2,
        Lang::Italian => 3,
        Lang::Unknown => return None,
    };
    PUNCTUATION_WORD_MAP
        .iter()
        .find(|(c, _)| *c == symbol)
        .map(|(_, words)| words[column])
}

/// A word of four or more punctuation characters is noise.
pub const NOISE_PATTERN: &str =
    r#"(!|"|#|\$|%|&|'|\(|\)|\*|\+|,|-|\.|/|:|;|<|=|>|\?|@|\[|\\|\]|\^|_|`|\{|\}|~|\|){4,}"#;

/// Date shapes normalized to space-separated groups.
pub static DATE_RULES: Lazy<Vec<PatternRule>> = Lazy::new(|| {
    vec![PatternRule::template(
        r"([0-9]{1,2})[./]([0-9]{1,2})[./]([0-9]{2,4})",
        "${1} ${2} ${3}",
        ContextType::Anywhere,
        0,
    )]
});

/// Apostrophe spacing for elision languages: the prefix stays its own token.
pub static APOSTROPHE_RULES: Lazy<Vec<PatternRule>> = Lazy::new(|| {
    vec![PatternRule::template(
        "'[ ]*",
        "' ",
        ContextType::Anywhere,
        1,
    )]
});

/// Contraction prefix separation and rejoining.
pub static CONTRACTION_RULES: Lazy<Vec<PatternRule>> = Lazy::new(|| {
    vec![
        // French: a dangling elision prefix takes its apostrophe back.
        PatternRule::template(
            "( |^)(c|d|j|l|m|n|s|t|qu) ",
            "${1}${2}' ",
            ContextType::Anywhere,
            1,
        ),
        // French: inverted subject pronouns detach from the verb.
        PatternRule::template(
            "(-t-)(on|il|elle|ils|elles)",
            " ${1}${2}",
            ContextType::Anywhere,
            1,
        ),
        // English: possessive/contraction s rejoins its word.
        PatternRule::template("' s( |$)", "'s${1}", ContextType::Anywhere, 3),
    ]
});

/// Uppercase runs split into dotted lowercase letters.
pub static ACRONYM_RULES: Lazy<Vec<PatternRule>> = Lazy::new(|| {
    vec![PatternRule::spell_letters(
        "([A-Z]{2,5}s?)",
        ContextType::QuoteBoundary,
        0,
    )]
});

/// Ordinal-shaped tokens exempt from the mixed letter+digit split.
pub fn ordinal_shape(lang: Lang) -> Option<&'static str> {
    match lang {
        Lang::French => Some(r"^[0-9]+(er|re|ère|e|ème)$"),
        Lang::English => Some(r"^[0-9]+(st|nd|rd|th)$"),
        _ => None,
    }
}

/// Exact-token abbreviation expansions per language.
pub static ABBREVIATIONS: Lazy<HashMap<u8, HashMap<&'static str, &'static str>>> =
    Lazy::new(|| {
        let mut all = HashMap::new();

        let french: HashMap<&str, &str> = [
            ("A", "à"),
            ("rte", "route"),
            ("av", "avenue"),
            ("bd", "boulevard"),
            ("ch", "chemin"),
            ("pl", "place"),
            ("M.", "monsieur"),
            ("Mme", "madame"),
            ("Dr", "docteur"),
            ("St", "saint"),
            ("Ste", "sainte"),
        ]
        .into_iter()
        .collect();
        all.insert(Lang::French.code(), french);

        let german: HashMap<&str, &str> = [
            ("z.B.", "zum Beispiel"),
            ("bzw.", "beziehungsweise"),
            ("usw.", "und so weiter"),
            ("ca.", "zirka"),
            ("Dr.", "Doktor"),
            ("Str.", "Strasse"),
            ("Nr.", "Nummer"),
        ]
        .into_iter()
        .collect();
        all.insert(Lang::German.code(), german);

        let english: HashMap<&str, &str> = [
            ("Dr.", "doctor"),
            ("Mr.", "mister"),
            ("Mrs.", "misses"),
            ("St.", "street"),
            ("etc.", "et cetera"),
            ("vs.", "versus"),
            ("No.", "number"),
        ]
        .into_iter()
        .collect();
        all.insert(Lang::English.code(), english);

        all
    });
