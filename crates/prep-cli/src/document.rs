//! Document-level orchestration: segmentation, classification, user rules,
//! validation, preparation and filtering.

use lm_formula::PreparationFormula;
use once_cell::sync::Lazy;
use prep_core::{
    FilterConfig, Lang, LanguageIdentifier, NormalizedSentence, PrepResult, PrepareOptions,
    SentenceOutcome, SentenceSegmenter,
};
use punctuation::PunctuationModel;
use regex::Regex;
use rule_engine::{SentenceValidator, SubstitutionEngine};
use std::collections::HashMap;
use std::path::Path;
use tracing::{debug, info};

static DIGIT_GROUPS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[0-9]+").unwrap());

/// One sentence with its detected language.
#[derive(Debug, Clone)]
pub struct SentenceCluster {
    pub text: String,
    pub lang: Lang,
}

/// A segmented input document.
#[derive(Debug, Default)]
pub struct TextDocument {
    clusters: Vec<SentenceCluster>,
}

impl TextDocument {
    /// Load and segment a file.
    pub fn from_file(path: &Path, segmenter: &dyn SentenceSegmenter) -> PrepResult<TextDocument> {
        let content = std::fs::read_to_string(path)?;
        info!(path = %path.display(), bytes = content.len(), "loaded document");
        Ok(Self::from_text(&content, segmenter))
    }

    /// Segment raw text into sentence clusters.
    pub fn from_text(text: &str, segmenter: &dyn SentenceSegmenter) -> TextDocument {
        let clusters = segmenter
            .segment(text)
            .into_iter()
            .map(|s| SentenceCluster {
                text: remove_control_characters(&s),
                lang: Lang::Unknown,
            })
            .collect();
        TextDocument { clusters }
    }

    /// Force every sentence to `lang`.
    pub fn set_language(&mut self, lang: Lang) {
        for cluster in &mut self.clusters {
            cluster.lang = lang;
        }
    }

    /// Classify each sentence with the oracle.
    pub fn classify(&mut self, oracle: &dyn LanguageIdentifier) {
        for cluster in &mut self.clusters {
            let (lang, confidence) = oracle.classify(&cluster.text);
            debug!(lang = %lang, confidence, text = %cluster.text, "classified sentence");
            cluster.lang = lang;
        }
    }

    /// Run every sentence through substitution, validation, punctuation
    /// handling, LM preparation and filtering. Per-sentence rejection is a
    /// normal outcome and never aborts the batch.
    pub fn prepare(
        &self,
        options: &PrepareOptions,
        user_rules: &SubstitutionEngine,
        validator: &SentenceValidator,
        filter: &FilterConfig,
    ) -> Vec<SentenceOutcome> {
        let punctuation = PunctuationModel::default();

        self.clusters
            .iter()
            .map(|cluster| {
                self.prepare_sentence(cluster, options, user_rules, validator, filter, &punctuation)
            })
            .collect()
    }

    fn prepare_sentence(
        &self,
        cluster: &SentenceCluster,
        options: &PrepareOptions,
        user_rules: &SubstitutionEngine,
        validator: &SentenceValidator,
        filter: &FilterConfig,
        punctuation: &PunctuationModel,
    ) -> SentenceOutcome {
        let lang = cluster.lang;
        let mut text = cluster.text.clone();

        if user_rules.has_rules() {
            text = user_rules.apply(&text, lang);
        }

        // Validation runs as its own pass over substituted text.
        if let Some(pattern) = validator.rejection(&text, lang) {
            return SentenceOutcome::Rejected {
                reason: format!("matched validation rule '{pattern}'"),
            };
        }

        if options.verbalize_punctuation {
            text = punctuation.to_spoken(&text);
        }
        if options.strip_verbalized {
            text = punctuation.strip(&text);
        }

        if options.lm_mode {
            let formula = PreparationFormula::new(lang)
                .with_expand_numbers(options.expand_numbers_in_words);
            text = formula.prepare_text(&text);
        }

        if options.filter_sentences {
            if let Some(reason) = filter_reason(&text, filter) {
                return SentenceOutcome::Rejected { reason };
            }
        }

        SentenceOutcome::Accepted(NormalizedSentence::new(text, lang))
    }
}

/// First bound the sentence violates, if any.
fn filter_reason(text: &str, filter: &FilterConfig) -> Option<String> {
    let chars = text.chars().count();
    if chars < filter.min_sentence_chars || chars > filter.max_sentence_chars {
        return Some(format!("length {chars} outside bounds"));
    }

    let words: Vec<&str> = text.split_whitespace().collect();
    if words.len() < filter.min_words || words.len() > filter.max_words {
        return Some(format!("word count {} outside bounds", words.len()));
    }
    if let Some(long) = words.iter().find(|w| w.len() > filter.max_word_length) {
        return Some(format!("word '{long}' too long"));
    }

    let digit_groups = DIGIT_GROUPS.find_iter(text).count();
    if digit_groups > filter.max_digit_groups {
        return Some(format!("{digit_groups} digit groups"));
    }

    // Web addresses never make good corpus sentences.
    for marker in ["http", "www.", "html"] {
        if text.contains(marker) {
            return Some(format!("web address marker '{marker}'"));
        }
    }

    None
}

/// Control characters are replaced by spaces.
fn remove_control_characters(text: &str) -> String {
    text.chars()
        .map(|c| if c.is_control() { ' ' } else { c })
        .collect()
}

/// Group accepted sentences by language.
pub fn cleaned_per_language(outcomes: Vec<SentenceOutcome>) -> HashMap<Lang, Vec<String>> {
    let mut by_lang: HashMap<Lang, Vec<String>> = HashMap::new();
    for outcome in outcomes {
        if let Some(sentence) = outcome.accepted() {
            by_lang
                .entry(sentence.lang())
                .or_default()
                .push(sentence.text().to_string());
        }
    }
    by_lang
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::segment::RegexSegmenter;
    use rule_engine::parse_rule_table;

    fn prepare(
        text: &str,
        lang: Lang,
        options: &PrepareOptions,
        table: &str,
    ) -> Vec<SentenceOutcome> {
        let mut doc = TextDocument::from_text(text, &RegexSegmenter);
        doc.set_language(lang);
        let parsed = parse_rule_table(table).unwrap();
        let engine = parsed.substitution_engine().unwrap();
        let validator = parse_rule_table(table).unwrap().validator();
        doc.prepare(options, &engine, &validator, &FilterConfig::default())
    }

    #[test]
    fn test_lm_preparation_flow() {
        let options = PrepareOptions {
            lm_mode: true,
            expand_numbers_in_words: true,
            ..Default::default()
        };
        let outcomes = prepare("Le 1er mai. Il fait beau.", Lang::French, &options, "");
        assert_eq!(outcomes.len(), 2);
        assert_eq!(
            outcomes[0].clone().accepted().unwrap().text(),
            "le premier mai"
        );
    }

    #[test]
    fn test_validation_rejects_before_preparation() {
        let table = "www\t\t-1\t0\tweb addresses\n";
        let options = PrepareOptions {
            lm_mode: true,
            ..Default::default()
        };
        let outcomes = prepare("Voir www.exemple.fr pour le détail.", Lang::French, &options, table);
        assert!(matches!(outcomes[0], SentenceOutcome::Rejected { .. }));
    }

    #[test]
    fn test_user_rules_rewrite_then_validate() {
        let table = "([0-9])h([0-9])\t${1} heures ${2}\t1\t1\thours\n";
        let options = PrepareOptions::default();
        let outcomes = prepare("Rendez-vous à 10h15 demain matin.", Lang::French, &options, table);
        let sentence = outcomes[0].clone().accepted().unwrap();
        assert!(sentence.text().contains("10 heures 15"));
    }

    #[test]
    fn test_filtering_bounds() {
        let filter = FilterConfig {
            min_words: 3,
            ..Default::default()
        };
        assert!(filter_reason("trop court", &filter).is_some());
        assert!(filter_reason("celle-ci est assez longue", &filter).is_none());
        assert!(filter_reason("voir http://exemple.fr ici", &filter).is_some());

        let strict = FilterConfig {
            max_digit_groups: 2,
            ..Default::default()
        };
        assert!(filter_reason("les groupes 1 2 3 débordent", &strict).is_some());
    }

    #[test]
    fn test_control_characters_become_spaces() {
        assert_eq!(remove_control_characters("a\u{0007}b"), "a b");
    }

    #[test]
    fn test_grouping_per_language() {
        let outcomes = vec![
            SentenceOutcome::Accepted(NormalizedSentence::new("bonjour", Lang::French)),
            SentenceOutcome::Accepted(NormalizedSentence::new("hallo", Lang::German)),
            SentenceOutcome::Rejected {
                reason: "too short".into(),
            },
        ];
        let by_lang = cleaned_per_language(outcomes);
        assert_eq!(by_lang[&Lang::French], vec!["bonjour".to_string()]);
        assert_eq!(by_lang[&Lang::German], vec!["hallo".to_string()]);
    }
}
