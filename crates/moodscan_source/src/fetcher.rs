//! Bounded retry around a comment source.

use crate::source::CommentSource;
use moodscan_protocol::defaults::DEFAULT_MAX_ATTEMPTS;
use moodscan_protocol::{FetchOutcome, SourceError};
use tracing::{info, warn};

/// Runs a [`CommentSource`] up to `max_attempts` times, sequentially.
///
/// An attempt fails if the source errors or returns zero comments: an
/// empty result is ambiguous (a genuinely comment-free video looks the
/// same as a transient bot-detection block), so it stays retryable inside
/// the budget. Attempts never run in parallel - hammering the upstream
/// concurrently is what gets a scrape rate limited in the first place.
#[derive(Debug, Clone)]
pub struct RetryingFetcher {
    max_attempts: usize,
}

impl RetryingFetcher {
    /// `max_attempts` is clamped to at least 1.
    pub fn new(max_attempts: usize) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
        }
    }

    pub fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    /// Whether another attempt follows this one.
    fn will_retry(&self, attempt: usize) -> bool {
        attempt < self.max_attempts
    }

    /// Fetch with retries. Never panics and never returns a bare
    /// [`SourceError`]: per-attempt failures surface as warnings, and only
    /// the terminal outcome escapes.
    pub fn fetch(&self, source: &dyn CommentSource, url: &str, limit: usize) -> FetchOutcome {
        let mut last_error: Option<SourceError> = None;

        for attempt in 1..=self.max_attempts {
            match source.fetch(url, limit) {
                Ok(comments) if !comments.is_empty() => {
                    info!(url, attempt, count = comments.len(), "fetched comments");
                    return FetchOutcome::Fetched(comments);
                }
                Ok(_) => {
                    if self.will_retry(attempt) {
                        warn!(
                            url,
                            attempt,
                            max_attempts = self.max_attempts,
                            "attempt returned no comments, retrying"
                        );
                    } else {
                        warn!(url, attempt, "no comments after final attempt");
                    }
                }
                Err(err) => {
                    if self.will_retry(attempt) {
                        warn!(
                            url,
                            attempt,
                            max_attempts = self.max_attempts,
                            error = %err,
                            "attempt failed, retrying"
                        );
                    } else {
                        warn!(url, attempt, error = %err, "final attempt failed");
                    }
                    last_error = Some(err);
                }
            }
        }

        FetchOutcome::Exhausted { last_error }
    }
}

impl Default for RetryingFetcher {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_ATTEMPTS)
    }
}
