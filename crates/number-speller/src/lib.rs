//! # number-speller
//!
//! Numeral classification and spelling for corpus preparation.
//!
//! One shared classification skeleton (cardinal, ordinal, decimal, Roman,
//! transition adverb) drives an independently implemented speller per
//! language. French and English compose from word tables; German builds
//! agglutinative compounds and infers ordinal inflection endings from
//! surrounding tokens.
//!
//! # Example
//!
//! ```
//! use number_speller::spell_numbers;
//! use prep_core::Lang;
//!
//! assert_eq!(spell_numbers("object 5", Lang::English), "object five");
//! assert_eq!(spell_numbers("1er", Lang::French), "premier");
//! ```

mod english;
mod french;
mod german;
mod roman;
mod skeleton;

pub use german::number_to_words as german_number_to_words;
pub use roman::{int_to_roman, roman_to_int};
pub use skeleton::{LanguageRules, SpellError};

use prep_core::Lang;

/// Spell out every numeral token of `text` for `lang`.
///
/// Languages without a speller (unknown, Italian) return the text
/// unchanged; the caller decides whether that warrants a warning.
pub fn spell_numbers(text: &str, lang: Lang) -> String {
    match lang {
        Lang::French => skeleton::convert_text(&french::FrenchRules, text),
        Lang::German => skeleton::convert_text(&german::GermanRules, text),
        Lang::English => skeleton::convert_text(&english::EnglishRules, text),
        Lang::Unknown | Lang::Italian => text.to_string(),
    }
}

/// True when a speller exists for `lang`.
pub fn has_speller(lang: Lang) -> bool {
    matches!(lang, Lang::French | Lang::German | Lang::English)
}
