//! Rule-table file loading.
//!
//! Tables are tab-separated rows: match pattern, substitution, context type
//! (1-6, or -1 for validation-only rows), language id (0 = any), comment.
//! An optional header row is skipped. Validation rows flag matching
//! sentences for rejection instead of rewriting them.

use crate::engine::SubstitutionEngine;
use crate::rule::{ContextType, PatternRule, Substitution};
use prep_core::{Lang, PrepError, PrepResult};
use regex::Regex;
use std::path::Path;
use tracing::info;

/// A validation-only row: matching sentences are rejected.
#[derive(Debug)]
pub struct ValidationRule {
    regex: Regex,
    pattern: String,
    lang: u8,
}

/// The parsed contents of a rule-table file.
#[derive(Debug, Default)]
pub struct RuleTable {
    /// Substitution rows, in file order.
    pub substitutions: Vec<PatternRule>,
    /// Validation rows, in file order.
    pub validations: Vec<ValidationRule>,
}

impl RuleTable {
    /// Compile the substitution rows into an engine.
    pub fn substitution_engine(&self) -> PrepResult<SubstitutionEngine> {
        SubstitutionEngine::compile(&self.substitutions)
    }

    /// Build the validator for the validation rows.
    pub fn validator(self) -> SentenceValidator {
        SentenceValidator {
            rules: self.validations,
        }
    }
}

/// Load a rule table from `path`.
pub fn load_rule_file(path: &Path) -> PrepResult<RuleTable> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| PrepError::rule_load(path, e.to_string()))?;
    let table = parse_rule_table(&content)
        .map_err(|e| PrepError::rule_load(path, e.to_string()))?;
    info!(
        path = %path.display(),
        substitutions = table.substitutions.len(),
        validations = table.validations.len(),
        "loaded rule table"
    );
    Ok(table)
}

/// Parse rule-table text. Exposed for tests and in-memory tables.
pub fn parse_rule_table(content: &str) -> PrepResult<RuleTable> {
    let mut table = RuleTable::default();

    for (line_no, line) in content.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let fields: Vec<&str> = line.split('\t').collect();
        if fields.len() < 4 {
            // A header row is allowed once, in first position.
            if line_no == 0 {
                continue;
            }
            return Err(PrepError::config(format!(
                "row {}: expected at least 4 tab-separated fields, got {}",
                line_no + 1,
                fields.len()
            )));
        }

        let Ok(type_code) = fields[2].trim().parse::<i8>() else {
            if line_no == 0 {
                continue;
            }
            return Err(PrepError::config(format!(
                "row {}: context type '{}' is not a number",
                line_no + 1,
                fields[2]
            )));
        };
        let context = ContextType::from_code(type_code)?;

        let lang_code: u8 = fields[3].trim().parse().map_err(|_| {
            PrepError::config(format!(
                "row {}: language id '{}' is not a number",
                line_no + 1,
                fields[3]
            ))
        })?;
        if Lang::from_code(lang_code).is_none() {
            return Err(PrepError::UnknownLanguage(fields[3].trim().to_string()));
        }

        let comment = fields.get(4).unwrap_or(&"").to_string();

        if context == ContextType::Validation {
            let regex = Regex::new(fields[0]).map_err(|e| {
                PrepError::config(format!(
                    "row {}: validation pattern does not parse: {e}",
                    line_no + 1
                ))
            })?;
            table.validations.push(ValidationRule {
                regex,
                pattern: fields[0].to_string(),
                lang: lang_code,
            });
        } else {
            table.substitutions.push(PatternRule {
                pattern: fields[0].to_string(),
                substitution: Substitution::parse(fields[1]),
                context,
                lang: lang_code,
                comment,
            });
        }
    }

    Ok(table)
}

/// Runs validation rules as a separate pass over already-substituted text.
#[derive(Debug, Default)]
pub struct SentenceValidator {
    rules: Vec<ValidationRule>,
}

impl SentenceValidator {
    /// True when no validation rules are loaded.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Return the pattern of the first rule rejecting `text`, if any.
    /// Rules tagged with language 0 apply to every sentence.
    pub fn rejection(&self, text: &str, lang: Lang) -> Option<&str> {
        self.rules
            .iter()
            .filter(|r| r.lang == 0 || r.lang == lang.code())
            .find(|r| r.regex.is_match(text))
            .map(|r| r.pattern.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TABLE: &str = "pattern\tsubstitution\ttype\tlanguage\tcomment\n\
        ([0-9])h([0-9])\t${1} heures ${2}\t1\t1\thours\n\
        www\\.\t\t-1\t0\tno web addresses\n\
        ([A-Z]{2,5}s?)\t@spell-letters\t6\t0\tacronyms\n";

    #[test]
    fn test_parse_rule_table_splits_rows() {
        let table = parse_rule_table(TABLE).unwrap();
        assert_eq!(table.substitutions.len(), 2);
        assert_eq!(table.validations.len(), 1);
        assert_eq!(table.substitutions[0].lang, 1);
        assert_eq!(
            table.substitutions[1].substitution,
            Substitution::SpellLetters
        );
    }

    #[test]
    fn test_engine_from_table() {
        let table = parse_rule_table(TABLE).unwrap();
        let engine = table.substitution_engine().unwrap();
        assert_eq!(engine.apply("10h15", Lang::French), "10 heures 15");
        // French-only rule skipped for German.
        assert_eq!(engine.apply("10h15", Lang::German), "10h15");
    }

    #[test]
    fn test_validator_rejects_on_match() {
        let table = parse_rule_table(TABLE).unwrap();
        let validator = table.validator();
        assert!(validator
            .rejection("see www.example.com", Lang::French)
            .is_some());
        assert!(validator.rejection("rien à signaler", Lang::French).is_none());
    }

    #[test]
    fn test_malformed_rows_fail_loading() {
        assert!(parse_rule_table("a\tb\t9\t0\tbad type\n").is_err());
        assert!(parse_rule_table("p\ts\t1\t0\tok\nonly\ttwo\n").is_err());
        assert!(parse_rule_table("a\tb\t1\t7\tbad lang\n").is_err());
    }

    #[test]
    fn test_all_context_types_expand_well_formed() {
        // Property: every non-validation context type yields a compilable
        // matcher with in-range back-references.
        for code in 1..=6 {
            let row = format!("(x)([0-9])\t${{1}}-${{2}}\t{code}\t0\tprobe\n");
            let table = parse_rule_table(&row).unwrap();
            let engine = table.substitution_engine().unwrap();
            // Applying on a minimal matching string must not panic.
            let _ = engine.apply("a x1 b", Lang::Unknown);
        }
    }
}
