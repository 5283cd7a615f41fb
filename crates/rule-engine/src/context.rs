//! Boolean context rules over token sequences.
//!
//! A [`TokenPattern`] matches a center token against a required pattern plus
//! optional left/right context patterns at configurable offsets; patterns
//! combine into a binary AND/OR tree. Used to pick ordinal inflection
//! endings from surrounding tokens.

use prep_core::{PrepError, PrepResult};
use regex::Regex;

/// The token at `index`, or the empty string when out of bounds so that
/// sentence start/end contexts stay matchable.
fn token_at<'a>(tokens: &[&'a str], index: isize) -> &'a str {
    if index < 0 || index as usize >= tokens.len() {
        return "";
    }
    tokens[index as usize]
}

/// Anchor a pattern at the start of the token, like a prefix match.
fn compile_anchored(pattern: &str) -> PrepResult<Regex> {
    Regex::new(&format!("^(?:{pattern})"))
        .map_err(|e| PrepError::config(format!("context pattern '{pattern}' does not parse: {e}")))
}

/// Leaf of a context rule: a center token with surrounding context.
#[derive(Debug)]
pub struct TokenPattern {
    center_source: String,
    center: Regex,
    prev: Option<Regex>,
    next: Option<Regex>,
    prev_offset: isize,
    next_offset: isize,
    negate: bool,
}

impl TokenPattern {
    /// Build a leaf. At least one of `prev`/`next` must be given; offsets
    /// default to the immediate neighbours.
    pub fn new(
        center: &str,
        prev: Option<&str>,
        next: Option<&str>,
    ) -> PrepResult<TokenPattern> {
        Self::with_offsets(center, prev, next, -1, 1, false)
    }

    /// Build a leaf with explicit offsets and negation.
    pub fn with_offsets(
        center: &str,
        prev: Option<&str>,
        next: Option<&str>,
        prev_offset: isize,
        next_offset: isize,
        negate: bool,
    ) -> PrepResult<TokenPattern> {
        if prev.is_none() && next.is_none() {
            return Err(PrepError::config(
                "token pattern needs at least one context",
            ));
        }
        Ok(TokenPattern {
            center_source: center.to_string(),
            center: compile_anchored(center)?,
            prev: prev.map(compile_anchored).transpose()?,
            next: next.map(compile_anchored).transpose()?,
            prev_offset,
            next_offset,
            negate,
        })
    }

    fn center_matches(&self, tokens: &[&str], index: usize) -> bool {
        self.center.is_match(token_at(tokens, index as isize))
    }

    fn matches(&self, tokens: &[&str], index: usize) -> bool {
        if !self.center_matches(tokens, index) {
            return false;
        }

        let mut prev_ok = true;
        if let Some(prev) = &self.prev {
            let word = token_at(tokens, index as isize + self.prev_offset);
            prev_ok = prev.is_match(word);
            if self.negate {
                prev_ok = !prev_ok;
            }
        }

        let mut next_ok = true;
        if let Some(next) = &self.next {
            let word = token_at(tokens, index as isize + self.next_offset);
            next_ok = next.is_match(word);
            if self.negate {
                next_ok = !next_ok;
            }
        }

        prev_ok && next_ok
    }
}

/// A context rule: leaves combined with AND/OR into a binary tree.
#[derive(Debug)]
pub enum ContextRule {
    /// A single token pattern.
    Leaf(TokenPattern),
    /// Both children must match.
    And(Box<ContextRule>, Box<ContextRule>),
    /// Either child must match.
    Or(Box<ContextRule>, Box<ContextRule>),
}

impl ContextRule {
    /// Cheap pre-check: does the token at `index` match the rule's center
    /// pattern? The center is taken from the leftmost leaf.
    pub fn applies_at(&self, tokens: &[&str], index: usize) -> bool {
        self.first_leaf().center_matches(tokens, index)
    }

    /// Full recursive evaluation.
    pub fn matches(&self, tokens: &[&str], index: usize) -> bool {
        match self {
            ContextRule::Leaf(p) => p.matches(tokens, index),
            ContextRule::And(a, b) => a.matches(tokens, index) && b.matches(tokens, index),
            ContextRule::Or(a, b) => a.matches(tokens, index) || b.matches(tokens, index),
        }
    }

    /// Check the structural invariant: every leaf shares the same center
    /// pattern. A composite whose children disagree on which token is the
    /// center is a configuration error.
    pub fn validate(&self) -> PrepResult<()> {
        let center = &self.first_leaf().center_source;
        self.for_each_leaf(&mut |leaf| {
            if &leaf.center_source != center {
                return Err(PrepError::config(format!(
                    "context rule centers disagree: '{}' vs '{}'",
                    center, leaf.center_source
                )));
            }
            Ok(())
        })
    }

    fn first_leaf(&self) -> &TokenPattern {
        match self {
            ContextRule::Leaf(p) => p,
            ContextRule::And(a, _) | ContextRule::Or(a, _) => a.first_leaf(),
        }
    }

    fn for_each_leaf(
        &self,
        f: &mut impl FnMut(&TokenPattern) -> PrepResult<()>,
    ) -> PrepResult<()> {
        match self {
            ContextRule::Leaf(p) => f(p),
            ContextRule::And(a, b) | ContextRule::Or(a, b) => {
                a.for_each_leaf(f)?;
                b.for_each_leaf(f)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaf(center: &str, prev: Option<&str>, next: Option<&str>) -> ContextRule {
        ContextRule::Leaf(TokenPattern::new(center, prev, next).unwrap())
    }

    #[test]
    fn test_leaf_requires_context() {
        assert!(TokenPattern::new("[0-9]+", None, None).is_err());
    }

    #[test]
    fn test_prev_context_match() {
        let rule = leaf("[0-9]+\\.", Some("(am|im)"), None);
        let tokens = ["am", "2.", "Dezember"];
        assert!(rule.applies_at(&tokens, 1));
        assert!(rule.matches(&tokens, 1));

        let tokens = ["das", "2.", "Dezember"];
        assert!(!rule.matches(&tokens, 1));
    }

    #[test]
    fn test_out_of_bounds_context_is_empty() {
        let rule = leaf("[0-9]+\\.", Some("(am|im)"), None);
        let tokens = ["2."];
        // Previous word is sentence start, matched against "".
        assert!(!rule.matches(&tokens, 0));
    }

    #[test]
    fn test_negated_context() {
        let rule = ContextRule::Leaf(
            TokenPattern::with_offsets("[0-9]+\\.", Some("am"), None, -1, 1, true).unwrap(),
        );
        assert!(rule.matches(&["das", "2."], 1));
        assert!(!rule.matches(&["am", "2."], 1));
    }

    #[test]
    fn test_and_or_combination() {
        let a = leaf("[0-9]+\\.", Some("am"), None);
        let b = leaf("[0-9]+\\.", None, Some("Dezember"));
        let and = ContextRule::And(Box::new(a), Box::new(b));
        assert!(and.matches(&["am", "2.", "Dezember"], 1));
        assert!(!and.matches(&["am", "2.", "Januar"], 1));

        let a = leaf("[0-9]+\\.", Some("am"), None);
        let b = leaf("[0-9]+\\.", None, Some("Dezember"));
        let or = ContextRule::Or(Box::new(a), Box::new(b));
        assert!(or.matches(&["am", "2.", "Januar"], 1));
    }

    #[test]
    fn test_validate_center_agreement() {
        let ok = ContextRule::And(
            Box::new(leaf("[0-9]+", Some("a"), None)),
            Box::new(leaf("[0-9]+", None, Some("b"))),
        );
        assert!(ok.validate().is_ok());

        let bad = ContextRule::And(
            Box::new(leaf("[0-9]+", Some("a"), None)),
            Box::new(leaf("[a-z]+", None, Some("b"))),
        );
        assert!(bad.validate().is_err());
    }
}
