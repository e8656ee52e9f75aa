//! The comment source seam.

use moodscan_protocol::{CommentRecord, SourceError};

/// Produces an ordered sequence of comments for a video URL.
///
/// `fetch` returns comments in the order they were discovered, truncated to
/// `limit`. Zero comments is a valid success; irrecoverable problems raise
/// [`SourceError`]. Implementations do not retry - that is the fetcher's
/// job - and must release any held resources before returning, on every
/// path.
pub trait CommentSource {
    fn fetch(&self, url: &str, limit: usize) -> Result<Vec<CommentRecord>, SourceError>;
}
