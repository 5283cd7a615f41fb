//! # punctuation
//!
//! Declarative punctuation model: verbalize symbols into words, reverse
//! words back into symbols, or remove verbalized punctuation entirely.
//!
//! Each rule selects one of seven replacement shapes; the three operations
//! run an ordered rule list and re-join the result on single spaces. The
//! default model carries the French spoken forms.

use prep_core::{PrepError, PrepResult};
use regex::{Captures, Regex};
use std::collections::HashMap;

/// How a rule's spoken form is placed around the match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplacementKind {
    /// Replacement surrounded by spaces.
    Simple,
    /// Replacement glued to both neighbours.
    SimpleNoSpace,
    /// Space on the left only.
    SimpleNoSpaceRight,
    /// Space on the right only.
    SimpleNoSpaceLeft,
    /// Marker placed before the captured following word.
    Prefix,
    /// Marker placed after the captured preceding word.
    Postfix,
    /// Open/close marker pair around the captured, trimmed inner word.
    Middle,
}

/// The spoken side of a rule: plain text, or an open/close pair for
/// [`ReplacementKind::Middle`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpokenForm {
    Text(String),
    Pair(String, String),
}

impl SpokenForm {
    fn text(s: &str) -> SpokenForm {
        SpokenForm::Text(s.to_string())
    }
}

/// One punctuation rule.
#[derive(Debug)]
pub struct PunctRule {
    regex: Regex,
    kind: ReplacementKind,
    spoken: SpokenForm,
    /// Display label used by presence counting.
    label: String,
}

impl PunctRule {
    /// Build a rule. A `Middle` rule requires a `Pair` spoken form, every
    /// other kind requires `Text`.
    pub fn new(pattern: &str, kind: ReplacementKind, spoken: SpokenForm) -> PrepResult<PunctRule> {
        match (&kind, &spoken) {
            (ReplacementKind::Middle, SpokenForm::Pair(..)) => {}
            (ReplacementKind::Middle, SpokenForm::Text(_)) => {
                return Err(PrepError::config(format!(
                    "middle rule '{pattern}' needs an open/close pair"
                )))
            }
            (_, SpokenForm::Pair(..)) => {
                return Err(PrepError::config(format!(
                    "rule '{pattern}' cannot take an open/close pair"
                )))
            }
            _ => {}
        }
        let regex = Regex::new(pattern)
            .map_err(|e| PrepError::config(format!("punctuation pattern '{pattern}': {e}")))?;
        let label = match &spoken {
            SpokenForm::Text(t) => t.trim().to_string(),
            SpokenForm::Pair(open, close) => format!("{open}{close}"),
        };
        Ok(PunctRule {
            regex,
            kind,
            spoken,
            label,
        })
    }

    fn replace_all(&self, text: &str) -> String {
        let kind = self.kind;
        let spoken = &self.spoken;
        self.regex
            .replace_all(text, |caps: &Captures<'_>| {
                let inner = caps.get(1).map(|m| m.as_str()).unwrap_or("");
                match (kind, spoken) {
                    (ReplacementKind::Simple, SpokenForm::Text(t)) => format!(" {t} "),
                    (ReplacementKind::SimpleNoSpace, SpokenForm::Text(t)) => t.clone(),
                    (ReplacementKind::SimpleNoSpaceRight, SpokenForm::Text(t)) => {
                        format!(" {t}")
                    }
                    (ReplacementKind::SimpleNoSpaceLeft, SpokenForm::Text(t)) => {
                        format!("{t} ")
                    }
                    (ReplacementKind::Prefix, SpokenForm::Text(t)) => {
                        format!(" {t} {inner} ")
                    }
                    (ReplacementKind::Postfix, SpokenForm::Text(t)) => {
                        format!(" {inner} {t} ")
                    }
                    (ReplacementKind::Middle, SpokenForm::Pair(open, close)) => {
                        format!(" {open}{}{close} ", inner.trim())
                    }
                    // Construction guarantees the pairing.
                    _ => unreachable!("kind/spoken mismatch"),
                }
            })
            .into_owned()
    }
}

/// A punctuation model: ordered verbalize, reverse and remove rule lists.
#[derive(Debug)]
pub struct PunctuationModel {
    verbalize: Vec<PunctRule>,
    reverse: Vec<PunctRule>,
    remove: Vec<PunctRule>,
}

impl Default for PunctuationModel {
    fn default() -> Self {
        Self::french().expect("default French model is well formed")
    }
}

impl PunctuationModel {
    /// Build a model from explicit rule lists.
    pub fn new(
        verbalize: Vec<PunctRule>,
        reverse: Vec<PunctRule>,
        remove: Vec<PunctRule>,
    ) -> PunctuationModel {
        PunctuationModel {
            verbalize,
            reverse,
            remove,
        }
    }

    /// The default French model.
    pub fn french() -> PrepResult<PunctuationModel> {
        use ReplacementKind::*;

        let verbalize = vec![
            PunctRule::new(r"\.", Simple, SpokenForm::text("point"))?,
            PunctRule::new(r",", Simple, SpokenForm::text("virgule"))?,
            PunctRule::new(r";", Simple, SpokenForm::text("point virgule"))?,
            PunctRule::new(r":", Simple, SpokenForm::text("deux points"))?,
            PunctRule::new(r"\r?\n", Simple, SpokenForm::text("à la ligne"))?,
            PunctRule::new(r"\((\S+)\)", Prefix, SpokenForm::text("entre parenthèses"))?,
            PunctRule::new("\"(\\S+)\"", Prefix, SpokenForm::text("entre guillemets"))?,
            PunctRule::new(r"\?", Simple, SpokenForm::text("point d'interrogation"))?,
            PunctRule::new(r"!", Simple, SpokenForm::text("point d'exclamation"))?,
            PunctRule::new(r"\((\S+)\s", Prefix, SpokenForm::text("ouvrez la parenthèse"))?,
            PunctRule::new("\"(\\S+)\\s", Prefix, SpokenForm::text("ouvrez les guillemets"))?,
            PunctRule::new(r"\s(\S+)\)", Postfix, SpokenForm::text("fermez la parenthèse"))?,
            PunctRule::new("\\s(\\S+)\"", Postfix, SpokenForm::text("fermez les guillemets"))?,
            PunctRule::new(r"(?:\s|^)-(?:\s|)", Simple, SpokenForm::text("tiret"))?,
        ];

        let reverse = vec![
            PunctRule::new(r"(?:\s|^)point\svirgule(?:\s|)", Simple, SpokenForm::text(";"))?,
            PunctRule::new(r"(?:\s|^)deux\spoints(?:\s|)", Simple, SpokenForm::text(":"))?,
            PunctRule::new(r"(?:\s|^)double\spoints(?:\s|)", Simple, SpokenForm::text(":"))?,
            PunctRule::new(
                r"(?:\s|^)retour\sà\sla\sligne(?:\s|)",
                Simple,
                SpokenForm::text("\n"),
            )?,
            PunctRule::new(r"(?:\s|^)à\sla\sligne(?:\s|)", Simple, SpokenForm::text("\n"))?,
            PunctRule::new(
                r"(?:\s|^)entre\sparenthèses\s(\S+)(?:\s|)",
                Middle,
                SpokenForm::Pair("(".into(), ")".into()),
            )?,
            PunctRule::new(
                r"(?:\s|^)entre\sguillemets\s(\S+)(?:\s|)",
                Middle,
                SpokenForm::Pair("\"".into(), "\"".into()),
            )?,
            PunctRule::new(
                r"(?:\s|^)point\sd'interrogation(?:\s|)",
                Simple,
                SpokenForm::text("?"),
            )?,
            PunctRule::new(
                r"(?:\s|^)point\sd'exclamation(?:\s|)",
                Simple,
                SpokenForm::text("!"),
            )?,
            PunctRule::new(
                r"(?:\s|^)ouvrez\sla\sparenthèse(?:\s|)",
                SimpleNoSpaceRight,
                SpokenForm::text("("),
            )?,
            PunctRule::new(
                r"(?:\s|^)ouvrez\sles\sguillemets(?:\s|)",
                SimpleNoSpaceRight,
                SpokenForm::text("\""),
            )?,
            PunctRule::new(
                r"(?:\s|^)fermez\sla\sparenthèse(?:\s|)",
                SimpleNoSpaceLeft,
                SpokenForm::text(")"),
            )?,
            PunctRule::new(
                r"(?:\s|^)fermez\sles\sguillemets(?:\s|)",
                SimpleNoSpaceLeft,
                SpokenForm::text("\""),
            )?,
            PunctRule::new(r"(?:\s|^)point(?:\s|)", Simple, SpokenForm::text("."))?,
            PunctRule::new(r"(?:\s|^)virgule(?:\s|)", Simple, SpokenForm::text(","))?,
            PunctRule::new(r"(?:\s|^)tiret(?:\s|)", Simple, SpokenForm::text("-"))?,
        ];

        let remove = vec![
            PunctRule::new(r"(?:\s|^)point\svirgule(?:\s|)", Simple, SpokenForm::text(" "))?,
            PunctRule::new(r"(?:\s|^)deux\spoints(?:\s|)", Simple, SpokenForm::text(" "))?,
            PunctRule::new(r"(?:\s|^)double\spoints(?:\s|)", Simple, SpokenForm::text(" "))?,
            PunctRule::new(
                r"(?:\s|^)retour\sà\sla\sligne(?:\s|)",
                Simple,
                SpokenForm::text(" "),
            )?,
            PunctRule::new(r"(?:\s|^)à\sla\sligne(?:\s|)", Simple, SpokenForm::text(" "))?,
            PunctRule::new(
                r"(?:\s|^)entre\sparenthèses\s(\S+)(?:\s|)",
                Middle,
                SpokenForm::Pair(" ".into(), " ".into()),
            )?,
            PunctRule::new(
                r"(?:\s|^)entre\sguillemets\s(\S+)(?:\s|)",
                Middle,
                SpokenForm::Pair(" ".into(), " ".into()),
            )?,
            PunctRule::new(
                r"(?:\s|^)point\sd'interrogation(?:\s|)",
                Simple,
                SpokenForm::text(" "),
            )?,
            PunctRule::new(
                r"(?:\s|^)point\sd'exclamation(?:\s|)",
                Simple,
                SpokenForm::text(" "),
            )?,
            PunctRule::new(
                r"(?:\s|^)ouvrez\sla\sparenthèse(?:\s|)",
                SimpleNoSpaceRight,
                SpokenForm::text(" "),
            )?,
            PunctRule::new(
                r"(?:\s|^)ouvrez\sles\sguillemets(?:\s|)",
                SimpleNoSpaceRight,
                SpokenForm::text(" "),
            )?,
            PunctRule::new(
                r"(?:\s|^)fermez\sla\sparenthèse(?:\s|)",
                SimpleNoSpaceLeft,
                SpokenForm::text(" "),
            )?,
            PunctRule::new(
                r"(?:\s|^)fermez\sles\sguillemets(?:\s|)",
                SimpleNoSpaceLeft,
                SpokenForm::text(" "),
            )?,
            PunctRule::new(r"(?:\s|^)point(?:\s|)", Simple, SpokenForm::text(" "))?,
            PunctRule::new(r"(?:\s|^)virgule(?:\s|)", Simple, SpokenForm::text(" "))?,
            PunctRule::new(r"(?:\s|^)tiret(?:\s|)", Simple, SpokenForm::text(" "))?,
        ];

        Ok(PunctuationModel::new(verbalize, reverse, remove))
    }

    fn run(rules: &[PunctRule], text: &str) -> String {
        let mut text = text.to_string();
        for rule in rules {
            text = rule.replace_all(&text);
        }
        text.split_whitespace().collect::<Vec<_>>().join(" ")
    }

    /// Replace punctuation symbols with their spoken words.
    pub fn to_spoken(&self, text: &str) -> String {
        Self::run(&self.verbalize, text)
    }

    /// Replace spoken punctuation words with their symbols.
    pub fn to_symbols(&self, text: &str) -> String {
        Self::run(&self.reverse, text)
    }

    /// Remove spoken punctuation words, collapsing whitespace.
    pub fn strip(&self, text: &str) -> String {
        Self::run(&self.remove, text)
    }

    /// Count how many verbalization rules fire in `text`, keyed by spoken
    /// form.
    pub fn count_presence(&self, text: &str) -> HashMap<String, usize> {
        let mut counts = HashMap::new();
        for rule in &self.verbalize {
            let n = rule.regex.find_iter(text).count();
            if n > 0 {
                *counts.entry(rule.label.clone()).or_insert(0) += n;
            }
        }
        counts
    }
}
