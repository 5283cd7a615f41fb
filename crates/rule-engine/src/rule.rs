//! Rule data model.

use prep_core::{PrepError, PrepResult};

/// One of the six positional-boundary templates wrapping a base pattern,
/// plus the validation sentinel used by rule files.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContextType {
    /// Type 1: match anywhere, no boundary added.
    Anywhere,
    /// Type 2: generic word boundary (space/start before, space/end after).
    WordBoundary,
    /// Type 3: punctuation boundary on both sides.
    PunctuationBoundary,
    /// Type 4: alphanumeric run before, generic boundary after.
    AlnumRunBefore,
    /// Type 5: digit run before, generic boundary after.
    DigitRunBefore,
    /// Type 6: quote/space boundary before, quote/punctuation/space after.
    QuoteBoundary,
    /// Type -1: the row flags matching sentences for rejection instead of
    /// rewriting them.
    Validation,
}

impl ContextType {
    /// Parse the numeric code used in rule files.
    pub fn from_code(code: i8) -> PrepResult<ContextType> {
        match code {
            1 => Ok(ContextType::Anywhere),
            2 => Ok(ContextType::WordBoundary),
            3 => Ok(ContextType::PunctuationBoundary),
            4 => Ok(ContextType::AlnumRunBefore),
            5 => Ok(ContextType::DigitRunBefore),
            6 => Ok(ContextType::QuoteBoundary),
            -1 => Ok(ContextType::Validation),
            _ => Err(PrepError::config(format!("unknown context type {code}"))),
        }
    }

    /// Numeric code for display and serialization.
    pub fn code(self) -> i8 {
        match self {
            ContextType::Anywhere => 1,
            ContextType::WordBoundary => 2,
            ContextType::PunctuationBoundary => 3,
            ContextType::AlnumRunBefore => 4,
            ContextType::DigitRunBefore => 5,
            ContextType::QuoteBoundary => 6,
            ContextType::Validation => -1,
        }
    }
}

/// What to insert for a rule match.
///
/// A closed set of strategies: rule rows never carry executable code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Substitution {
    /// Literal template with `${n}` back-references into the base pattern.
    Template(String),
    /// Spell the captured run letter by letter as dotted lowercase
    /// ("ADG" becomes "a. d. g."). The left boundary capture is kept, the
    /// right one is dropped.
    SpellLetters,
}

impl Substitution {
    /// Parse the substitution field of a rule row. The spell-out strategy
    /// is selected by the tag `@spell-letters`; anything else is a literal
    /// template.
    pub fn parse(field: &str) -> Substitution {
        if field == "@spell-letters" {
            Substitution::SpellLetters
        } else {
            Substitution::Template(field.to_string())
        }
    }
}

/// An abstract substitution rule, prior to context expansion.
#[derive(Debug, Clone)]
pub struct PatternRule {
    /// Base match pattern (target regex dialect).
    pub pattern: String,
    /// Substitution strategy.
    pub substitution: Substitution,
    /// Boundary template to wrap the pattern in.
    pub context: ContextType,
    /// Language id this rule applies to (0 = every language).
    pub lang: u8,
    /// Free-text comment, ignored at runtime.
    pub comment: String,
}

impl PatternRule {
    /// Create a rule with a literal template substitution.
    pub fn template(
        pattern: &str,
        substitution: &str,
        context: ContextType,
        lang: u8,
    ) -> PatternRule {
        PatternRule {
            pattern: pattern.to_string(),
            substitution: Substitution::Template(substitution.to_string()),
            context,
            lang,
            comment: String::new(),
        }
    }

    /// Create a rule with the letter spell-out substitution.
    pub fn spell_letters(pattern: &str, context: ContextType, lang: u8) -> PatternRule {
        PatternRule {
            pattern: pattern.to_string(),
            substitution: Substitution::SpellLetters,
            context,
            lang,
            comment: String::new(),
        }
    }
}
