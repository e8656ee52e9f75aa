//! Pipeline sequencing: fetch, then aggregate.

use moodscan_protocol::{AggregateError, CommentRecord, FetchOutcome, SentimentDistribution};
use moodscan_sentiment::{SentimentAggregator, SentimentOracle};
use moodscan_source::{CommentSource, RetryingFetcher};
use tracing::info;

/// Presentation-agnostic result of one pipeline run.
#[derive(Debug)]
pub enum RunOutcome {
    Report {
        /// Number of scored comments.
        total: usize,
        distribution: SentimentDistribution,
        /// Enriched records, in discovery order.
        records: Vec<CommentRecord>,
    },
    /// Terminal failure, already phrased for the user. Raw source errors
    /// never cross this boundary.
    Failed { message: String },
}

impl RunOutcome {
    pub fn is_report(&self) -> bool {
        matches!(self, RunOutcome::Report { .. })
    }
}

/// Sequences the retrying fetcher and the aggregator. Owns no business
/// logic of its own and never panics on upstream failure.
pub struct PipelineController<O> {
    fetcher: RetryingFetcher,
    aggregator: SentimentAggregator<O>,
}

impl<O: SentimentOracle> PipelineController<O> {
    pub fn new(fetcher: RetryingFetcher, oracle: O) -> Self {
        Self {
            fetcher,
            aggregator: SentimentAggregator::new(oracle),
        }
    }

    pub fn run(&self, source: &dyn CommentSource, url: &str, limit: usize) -> RunOutcome {
        let mut records = match self.fetcher.fetch(source, url, limit) {
            FetchOutcome::Fetched(records) => records,
            FetchOutcome::Exhausted { last_error: Some(err) } => {
                return RunOutcome::Failed {
                    message: format!("Failed to fetch comments: {}", err),
                };
            }
            FetchOutcome::Exhausted { last_error: None } => {
                return RunOutcome::Failed {
                    message: "No comments found: the video may have none, or the scrape was blocked"
                        .to_string(),
                };
            }
        };

        match self.aggregator.aggregate(&mut records) {
            Ok(distribution) => {
                info!(url, total = records.len(), "pipeline run complete");
                RunOutcome::Report {
                    total: records.len(),
                    distribution,
                    records,
                }
            }
            // Unreachable with a non-empty Fetched, but the boundary still
            // maps it to a clean outcome rather than panicking.
            Err(AggregateError::EmptyInput) => RunOutcome::Failed {
                message: "No comments available to analyze".to_string(),
            },
        }
    }
}
