//! # rule-engine
//!
//! Context-aware pattern substitution driven by declarative rule tables.
//!
//! A [`PatternRule`] pairs a regular expression with a substitution and one
//! of six positional-boundary context templates. The [`SubstitutionEngine`]
//! expands each rule into a concrete matcher/substitution pair (renumbering
//! back-references for the added boundary groups) and applies the resulting
//! list in table order, filtered by language.
//!
//! The crate also hosts the boolean context-rule tree used to disambiguate
//! ordinal inflections from surrounding tokens, and the loader for
//! tab-separated rule-table files (including sentence-validation rows).

pub mod context;
pub mod engine;
pub mod expand;
pub mod loader;
pub mod rule;

pub use context::{ContextRule, TokenPattern};
pub use engine::SubstitutionEngine;
pub use loader::{load_rule_file, parse_rule_table, RuleTable, SentenceValidator, ValidationRule};
pub use rule::{ContextType, PatternRule, Substitution};
