//! Sentiment scoring and aggregation.
//!
//! The scoring seam is the [`SentimentOracle`] trait: anything that can map
//! a text to a compound score in [-1, 1]. The bundled [`LexiconAnalyzer`]
//! is the default oracle; tests substitute stubs at the same seam.

pub mod aggregate;
pub mod analyzer;
pub mod lexicon;
pub mod oracle;

pub use aggregate::SentimentAggregator;
pub use analyzer::LexiconAnalyzer;
pub use lexicon::Lexicon;
pub use oracle::SentimentOracle;

use std::sync::OnceLock;

static SHARED_ANALYZER: OnceLock<LexiconAnalyzer> = OnceLock::new();

/// Process-wide analyzer instance.
///
/// Building the lexicon is a one-time cost; every pipeline run shares the
/// same immutable instance, and repeated calls are idempotent.
pub fn shared_analyzer() -> &'static LexiconAnalyzer {
    SHARED_ANALYZER.get_or_init(LexiconAnalyzer::new)
}
