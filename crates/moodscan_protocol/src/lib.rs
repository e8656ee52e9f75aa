//! Shared data model for the Moodscan pipeline.
//!
//! Everything that flows between the fetch stage and the aggregation stage
//! lives here: the comment record, the sentiment buckets and their fixed
//! thresholds, the percentage distribution, the fetch outcome, and the
//! error taxonomy. These are the CANONICAL definitions - use them everywhere.

pub mod defaults;
pub mod error;
pub mod export;
pub mod types;

pub use error::{AggregateError, SourceError};
pub use export::{to_export_json, RawComment};
pub use types::{CommentRecord, FetchOutcome, SentimentBucket, SentimentDistribution};
