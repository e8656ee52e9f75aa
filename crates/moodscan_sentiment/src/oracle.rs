//! The scoring seam.

/// Maps a text to a compound sentiment score.
///
/// Contract: the returned score is in [-1, 1], deterministic for a given
/// text, cheap to invoke repeatedly, and defined for the empty string
/// (which scores 0.0). Oracles own their own normalization; callers pass
/// text exactly as received.
pub trait SentimentOracle {
    fn score(&self, text: &str) -> f64;
}

impl<T: SentimentOracle + ?Sized> SentimentOracle for &T {
    fn score(&self, text: &str) -> f64 {
        (**self).score(text)
    }
}
