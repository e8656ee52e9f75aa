//! Error taxonomy for the fetch and aggregation stages.

use thiserror::Error;

/// Irrecoverable problems raised by a comment source for one attempt.
///
/// The retrying fetcher catches these per attempt; they never escape it
/// except inside the terminal [`FetchOutcome::Exhausted`] variant.
///
/// [`FetchOutcome::Exhausted`]: crate::types::FetchOutcome::Exhausted
#[derive(Error, Debug)]
pub enum SourceError {
    /// The expected artifact file or page element never appeared.
    #[error("expected artifact or element not found")]
    NotFound,

    /// An interactive wait exceeded its bound.
    #[error("timed out after {waited:?} waiting for content")]
    Timeout { waited: std::time::Duration },

    /// The external extraction process exited non-zero.
    #[error("extraction tool failed: {detail}")]
    ExternalToolFailed { detail: String },

    /// Any other failure during extraction (malformed page, driver crash).
    #[error("extraction failed unexpectedly: {detail}")]
    Unexpected { detail: String },
}

impl SourceError {
    pub fn unexpected(detail: impl Into<String>) -> Self {
        SourceError::Unexpected {
            detail: detail.into(),
        }
    }

    pub fn tool_failed(detail: impl Into<String>) -> Self {
        SourceError::ExternalToolFailed {
            detail: detail.into(),
        }
    }
}

/// Errors raised by the sentiment aggregator.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum AggregateError {
    /// Aggregation was invoked with zero records. The caller distinguishes
    /// this from "fetch produced zero" at a higher level; the aggregator
    /// itself does not retry.
    #[error("cannot aggregate sentiment over zero comments")]
    EmptyInput,
}
