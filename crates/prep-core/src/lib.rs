//! # prep-core
//!
//! Core types, traits, and error definitions for the corpus preparation
//! engine.
//!
//! This crate provides the foundational abstractions used across all other
//! crates in the workspace, including:
//!
//! - Common data types (`Lang`, `NormalizedSentence`, `SentenceOutcome`)
//! - Trait definitions for external collaborators (sentence segmentation,
//!   language identification)
//! - Unified error handling via `PrepError`
//! - Configuration structures

pub mod config;
pub mod error;
pub mod traits;
pub mod types;

pub use config::{FilterConfig, PrepareOptions};
pub use error::{PrepError, PrepResult};
pub use traits::{LanguageIdentifier, SentenceSegmenter};
pub use types::{Lang, NormalizedSentence, SentenceOutcome};
