//! Sentiment aggregation over fetched comments.

use crate::oracle::SentimentOracle;
use moodscan_protocol::{AggregateError, CommentRecord, SentimentDistribution};
use std::collections::BTreeMap;
use tracing::debug;

/// Scores each record through the oracle and produces the bucket
/// distribution. Enrichment happens in place; the distribution covers only
/// records that were scored (which is all of them - empty text scores 0.0
/// under the oracle contract).
///
/// Deterministic: the same input sequence and oracle yield byte-identical
/// output. Never retries; the caller invokes it exactly once per
/// successful fetch.
pub struct SentimentAggregator<O> {
    oracle: O,
}

impl<O: SentimentOracle> SentimentAggregator<O> {
    pub fn new(oracle: O) -> Self {
        Self { oracle }
    }

    pub fn aggregate(
        &self,
        records: &mut [CommentRecord],
    ) -> Result<SentimentDistribution, AggregateError> {
        if records.is_empty() {
            return Err(AggregateError::EmptyInput);
        }

        let mut counts: BTreeMap<_, usize> = BTreeMap::new();
        for record in records.iter_mut() {
            let score = self.oracle.score(&record.text);
            record.apply_score(score);
            // apply_score always sets the bucket
            if let Some(bucket) = record.bucket {
                *counts.entry(bucket).or_insert(0) += 1;
            }
        }

        let distribution = SentimentDistribution::from_bucket_counts(&counts, records.len());
        debug!(
            total = records.len(),
            buckets = distribution.len(),
            "aggregated sentiment distribution"
        );
        Ok(distribution)
    }
}
