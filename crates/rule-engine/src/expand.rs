//! Context expansion: turning an abstract rule into a concrete
//! matcher/substitution pair.
//!
//! Boundary groups prepended to a pattern shift the indices of every base
//! capture group, so `${n}` references in a template substitution are
//! renumbered before the boundary references are added.

use crate::rule::{ContextType, PatternRule, Substitution};
use once_cell::sync::Lazy;
use prep_core::{PrepError, PrepResult};
use regex::Regex;

/// Boundary pair for a context type: (before, after), either may be absent.
fn boundary_pair(context: ContextType) -> (Option<&'static str>, Option<&'static str>) {
    match context {
        ContextType::Anywhere | ContextType::Validation => (None, None),
        ContextType::WordBoundary => (Some("( |^)"), Some("( |$)")),
        ContextType::PunctuationBoundary => {
            (Some("([.,;:()”?!-])"), Some("([.,;:()”?!-])"))
        }
        ContextType::AlnumRunBefore => (Some("([0-9] +|[a-z] +|[A-Z] +)"), Some("( |$)")),
        ContextType::DigitRunBefore => (Some("([0-9] +)"), Some("( |$)")),
        ContextType::QuoteBoundary => (Some("([ \"']|^)"), Some("([ \"',.?!;:]|$)")),
    }
}

/// A fully expanded substitution, ready to drive a replacement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpandedSubstitution {
    /// Literal replacement template, boundary references included.
    Template(String),
    /// Per-letter spell-out of the base capture group.
    SpellLetters {
        /// Index of the left boundary group to re-emit, if any.
        left_group: Option<usize>,
        /// Index of the captured letter run.
        letters_group: usize,
    },
}

static SPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"[ ]+").unwrap());
static GROUP_SPACE_FIX: Lazy<Regex> = Lazy::new(|| Regex::new(r"([(|])  ([|)])").unwrap());
static BACKREF: Lazy<Regex> = Lazy::new(|| Regex::new(r"\$\{([0-9]+)\}").unwrap());

/// Double internal space runs. Patterns and texts get the same treatment so
/// boundary matching stays deterministic across successive rule
/// applications; single spaces inside alternation groups such as `( |^)`
/// are restored.
pub fn double_spaces(s: &str) -> String {
    let doubled = SPACE_RUN.replace_all(s, "  ");
    GROUP_SPACE_FIX.replace_all(&doubled, "${1} ${2}").into_owned()
}

/// Collapse space runs back to single spaces.
pub fn collapse_spaces(s: &str) -> String {
    SPACE_RUN.replace_all(s, " ").into_owned()
}

/// Count capture groups in `pattern`, skipping escaped parentheses,
/// non-capturing groups and parentheses inside character classes.
pub fn count_capture_groups(pattern: &str) -> usize {
    let chars: Vec<char> = pattern.chars().collect();
    let mut count = 0;
    let mut in_class = false;
    let mut i = 0;
    while i < chars.len() {
        match chars[i] {
            '\\' => i += 1,
            '[' if !in_class => in_class = true,
            ']' if in_class => in_class = false,
            '(' if !in_class => {
                if chars.get(i + 1) != Some(&'?') {
                    count += 1;
                }
            }
            _ => {}
        }
        i += 1;
    }
    count
}

/// Largest `${n}` reference in a template, or 0 when there is none.
fn max_backref(template: &str) -> usize {
    BACKREF
        .captures_iter(template)
        .filter_map(|c| c[1].parse::<usize>().ok())
        .max()
        .unwrap_or(0)
}

/// Shift every `${n}` reference in `template` by `by`.
fn shift_backrefs(template: &str, by: usize) -> String {
    BACKREF
        .replace_all(template, |caps: &regex::Captures<'_>| {
            let n: usize = caps[1].parse().unwrap_or(0);
            format!("${{{}}}", n + by)
        })
        .into_owned()
}

/// Escape `$` characters that are not part of a `${n}` reference, so the
/// regex crate treats them literally during replacement.
fn escape_stray_dollars(template: &str) -> String {
    let mut out = String::with_capacity(template.len());
    let mut chars = template.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '$' && chars.peek() != Some(&'{') {
            out.push_str("$$");
        } else {
            out.push(c);
        }
    }
    out
}

/// Expand `rule` into a concrete (pattern, substitution) pair.
///
/// Fails when the base pattern does not parse, or when the template
/// references a capture group the pattern does not define.
pub fn expand_rule(rule: &PatternRule) -> PrepResult<(String, ExpandedSubstitution)> {
    let base = double_spaces(&rule.pattern);
    // Validate the base pattern on its own before wrapping it.
    Regex::new(&base).map_err(|e| {
        PrepError::config(format!("pattern '{}' does not parse: {e}", rule.pattern))
    })?;
    let base_groups = count_capture_groups(&base);

    if let Substitution::Template(t) = &rule.substitution {
        let max_ref = max_backref(t);
        if max_ref > base_groups {
            return Err(PrepError::config(format!(
                "substitution '{t}' references group {max_ref}, pattern '{}' has {base_groups}",
                rule.pattern
            )));
        }
    }

    let (before, after) = boundary_pair(rule.context);
    let mut pattern = base;
    let left_shift = usize::from(before.is_some());

    if let Some(b) = before {
        pattern = format!("{b}{pattern}");
    }
    if let Some(a) = after {
        pattern = format!("{pattern}{a}");
    }

    let substitution = match &rule.substitution {
        Substitution::Template(t) => {
            let mut template = escape_stray_dollars(t);
            if before.is_some() {
                template = format!("${{1}}{}", shift_backrefs(&template, 1));
            }
            if after.is_some() {
                template.push_str(&format!("${{{}}}", base_groups + left_shift + 1));
            }
            ExpandedSubstitution::Template(template)
        }
        Substitution::SpellLetters => {
            if base_groups == 0 {
                return Err(PrepError::config(format!(
                    "spell-letters rule '{}' needs one capture group",
                    rule.pattern
                )));
            }
            ExpandedSubstitution::SpellLetters {
                left_group: before.map(|_| 1),
                letters_group: 1 + left_shift,
            }
        }
    };

    Ok((pattern, substitution))
}
