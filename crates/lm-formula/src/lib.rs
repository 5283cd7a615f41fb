//! # lm-formula
//!
//! Language-model text preparation for speech corpora: the ordered,
//! language-parameterized pipeline every sentence passes through before
//! being accepted into a corpus.
//!
//! # Example
//!
//! ```
//! use lm_formula::PreparationFormula;
//! use prep_core::Lang;
//!
//! let formula = PreparationFormula::new(Lang::French).with_expand_numbers(true);
//! assert_eq!(formula.prepare_text("1er"), "premier");
//! ```

pub mod constants;
mod pipeline;

pub use pipeline::PreparationFormula;
