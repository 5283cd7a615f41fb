//! Trait definitions for external collaborators.
//!
//! Sentence-boundary detection and statistical language identification are
//! not part of the preparation core; the pipeline consumes them through
//! these seams.

use crate::types::Lang;

/// Sentence segmentation service.
///
/// Implementations split raw text into sentence strings. Boundary accuracy
/// is the segmenter's responsibility; segmenting already-segmented text
/// must be a no-op.
pub trait SentenceSegmenter: Send + Sync {
    /// Split `text` into sentences, in document order.
    fn segment(&self, text: &str) -> Vec<String>;
}

/// Language identification oracle.
///
/// Treated as a black box: only the returned label is used to select the
/// rule set and numeral speller for a sentence.
pub trait LanguageIdentifier: Send + Sync {
    /// Classify `text`, returning the detected language and a confidence
    /// in `[0, 1]`. Unsupported languages map to `Lang::Unknown`.
    fn classify(&self, text: &str) -> (Lang, f64);
}
