//! Core pipeline types.

use crate::defaults::{NEGATIVE_THRESHOLD, POSITIVE_THRESHOLD};
use crate::error::SourceError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Sentiment bucket derived from a compound score.
///
/// Thresholds are a fixed design constant, not configuration:
/// `score < -0.05` is Negative, `-0.05 <= score <= 0.05` is Neutral,
/// `score > 0.05` is Positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentBucket {
    Negative,
    Neutral,
    Positive,
}

impl SentimentBucket {
    /// Map a compound score in [-1, 1] to its bucket.
    pub fn for_score(score: f64) -> Self {
        if score < NEGATIVE_THRESHOLD {
            SentimentBucket::Negative
        } else if score > POSITIVE_THRESHOLD {
            SentimentBucket::Positive
        } else {
            SentimentBucket::Neutral
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SentimentBucket::Negative => "negative",
            SentimentBucket::Neutral => "neutral",
            SentimentBucket::Positive => "positive",
        }
    }

    /// All buckets in canonical (ascending) order.
    pub fn all() -> [SentimentBucket; 3] {
        [
            SentimentBucket::Negative,
            SentimentBucket::Neutral,
            SentimentBucket::Positive,
        ]
    }
}

impl fmt::Display for SentimentBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SentimentBucket {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "negative" | "neg" => Ok(SentimentBucket::Negative),
            "neutral" | "neu" => Ok(SentimentBucket::Neutral),
            "positive" | "pos" => Ok(SentimentBucket::Positive),
            _ => Err(format!(
                "Invalid sentiment bucket: '{}'. Expected: negative, neutral, or positive",
                s
            )),
        }
    }
}

/// One public comment flowing through the pipeline.
///
/// Created by a comment source, enriched in place by the aggregator,
/// discarded when the run completes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommentRecord {
    /// Comment body. May be empty after trimming; still scored.
    pub text: String,
    /// Like count reported by the source; 0 when unavailable.
    pub like_count: u64,
    /// Compound sentiment score in [-1, 1]; `None` until scored.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sentiment: Option<f64>,
    /// Bucket for the score; set if and only if `sentiment` is set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bucket: Option<SentimentBucket>,
}

impl CommentRecord {
    pub fn new(text: impl Into<String>, like_count: u64) -> Self {
        Self {
            text: text.into(),
            like_count,
            sentiment: None,
            bucket: None,
        }
    }

    pub fn is_scored(&self) -> bool {
        self.sentiment.is_some()
    }

    /// Record a compound score, deriving the bucket in the same step so the
    /// score/bucket invariant cannot be violated from outside.
    pub fn apply_score(&mut self, score: f64) {
        self.sentiment = Some(score);
        self.bucket = Some(SentimentBucket::for_score(score));
    }
}

/// Percentage distribution over the buckets that actually occurred.
///
/// Buckets with zero count are omitted entirely (not present with 0.00),
/// so the display layer renders them as "no data" rather than "0%".
/// Percentages are rounded to two decimals and sum to 100.00 within
/// rounding tolerance.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SentimentDistribution {
    shares: BTreeMap<SentimentBucket, f64>,
}

impl SentimentDistribution {
    /// Build a distribution from per-bucket counts over `total` scored
    /// records. Zero-count buckets are dropped.
    pub fn from_bucket_counts(counts: &BTreeMap<SentimentBucket, usize>, total: usize) -> Self {
        let mut shares = BTreeMap::new();
        if total == 0 {
            return Self { shares };
        }
        for (bucket, count) in counts {
            if *count == 0 {
                continue;
            }
            let pct = *count as f64 / total as f64 * 100.0;
            shares.insert(*bucket, round_two_decimals(pct));
        }
        Self { shares }
    }

    /// Percentage for a bucket, if that bucket occurred at all.
    pub fn share(&self, bucket: SentimentBucket) -> Option<f64> {
        self.shares.get(&bucket).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.shares.is_empty()
    }

    pub fn len(&self) -> usize {
        self.shares.len()
    }

    /// Buckets present, in canonical order, with their percentages.
    pub fn iter(&self) -> impl Iterator<Item = (SentimentBucket, f64)> + '_ {
        self.shares.iter().map(|(b, p)| (*b, *p))
    }
}

fn round_two_decimals(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Terminal result of the retrying fetch stage.
///
/// Empty-but-successful retrieval is folded into `Exhausted` with
/// `last_error: None`: the upstream does not let us distinguish a video
/// with zero comments from a silently blocked scrape, so the caller owns
/// the messaging for that case.
#[derive(Debug)]
pub enum FetchOutcome {
    /// One or more comments, in discovery order.
    Fetched(Vec<CommentRecord>),
    /// All attempts consumed without usable comments.
    Exhausted { last_error: Option<SourceError> },
}

impl FetchOutcome {
    pub fn is_fetched(&self) -> bool {
        matches!(self, FetchOutcome::Fetched(_))
    }
}
