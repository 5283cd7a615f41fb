//! The substitution engine: an ordered, language-filtered rule list
//! compiled once and applied to text blobs.

use crate::expand::{collapse_spaces, double_spaces, expand_rule, ExpandedSubstitution};
use crate::rule::PatternRule;
use prep_core::{Lang, PrepError, PrepResult};
use regex::{Captures, Regex};
use tracing::debug;

/// A rule compiled against its context template.
#[derive(Debug)]
struct CompiledRule {
    regex: Regex,
    substitution: ExpandedSubstitution,
    lang: u8,
}

/// Applies an ordered list of [`PatternRule`]s to text.
///
/// Rules are expanded and compiled eagerly; any malformed pattern or
/// substitution fails construction. Application never mutates its input.
#[derive(Debug, Default)]
pub struct SubstitutionEngine {
    rules: Vec<CompiledRule>,
}

impl SubstitutionEngine {
    /// Compile `rules` in order.
    pub fn compile(rules: &[PatternRule]) -> PrepResult<SubstitutionEngine> {
        let mut compiled = Vec::with_capacity(rules.len());
        for rule in rules {
            let (pattern, substitution) = expand_rule(rule)?;
            let regex = Regex::new(&pattern).map_err(|e| {
                PrepError::config(format!("expanded pattern '{pattern}' does not parse: {e}"))
            })?;
            compiled.push(CompiledRule {
                regex,
                substitution,
                lang: rule.lang,
            });
        }
        Ok(SubstitutionEngine { rules: compiled })
    }

    /// True when the engine holds at least one rule.
    pub fn has_rules(&self) -> bool {
        !self.rules.is_empty()
    }

    /// Apply every rule whose language id is 0 or matches `lang`, in table
    /// order, and return the rewritten text.
    pub fn apply(&self, text: &str, lang: Lang) -> String {
        if self.rules.is_empty() {
            return text.to_string();
        }

        // Internal spaces are doubled so one rule consuming a boundary
        // space still leaves one for the next match.
        let mut text = double_spaces(text);

        for rule in &self.rules {
            if rule.lang != 0 && rule.lang != lang.code() {
                continue;
            }
            let rewritten = match &rule.substitution {
                ExpandedSubstitution::Template(template) => rule
                    .regex
                    .replace_all(&text, template.as_str())
                    .into_owned(),
                ExpandedSubstitution::SpellLetters {
                    left_group,
                    letters_group,
                } => rule
                    .regex
                    .replace_all(&text, |caps: &Captures<'_>| {
                        spell_letters(caps, *left_group, *letters_group)
                    })
                    .into_owned(),
            };
            if rewritten != text {
                debug!(pattern = %rule.regex, "rule rewrote text");
            }
            text = rewritten;
        }

        collapse_spaces(&text)
    }
}

/// Dotted lowercase spell-out of the captured run: "ADGs" becomes
/// "a. d. g. s.". The left boundary capture is preserved; the right one is
/// intentionally dropped.
fn spell_letters(caps: &Captures<'_>, left_group: Option<usize>, letters_group: usize) -> String {
    let left = left_group
        .and_then(|g| caps.get(g))
        .map(|m| m.as_str())
        .unwrap_or("");
    let letters = caps
        .get(letters_group)
        .map(|m| m.as_str())
        .unwrap_or("");

    let mut out = String::with_capacity(left.len() + letters.len() * 3);
    out.push_str(left);
    for c in letters.chars().filter(|c| c.is_alphabetic()) {
        for lc in c.to_lowercase() {
            out.push(lc);
        }
        out.push_str(". ");
    }
    out.trim_end().to_string()
}
