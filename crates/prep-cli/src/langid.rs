//! Language identification backed by the whatlang classifier.
//!
//! The classifier is a black box: only its label selects which rule set
//! and speller a sentence gets.

use prep_core::{Lang, LanguageIdentifier};
use whatlang::detect;

/// `whatlang`-based implementation of the language-ID oracle.
#[derive(Debug, Default)]
pub struct WhatlangIdentifier;

impl LanguageIdentifier for WhatlangIdentifier {
    fn classify(&self, text: &str) -> (Lang, f64) {
        match detect(text) {
            Some(info) => {
                let lang = match info.lang() {
                    whatlang::Lang::Fra => Lang::French,
                    whatlang::Lang::Deu => Lang::German,
                    whatlang::Lang::Eng => Lang::English,
                    whatlang::Lang::Ita => Lang::Italian,
                    _ => Lang::Unknown,
                };
                (lang, info.confidence())
            }
            None => (Lang::Unknown, 0.0),
        }
    }
}
