//! Canonical default values shared across the pipeline.

use std::time::Duration;

/// Retry budget for a fetch (attempts, not retries-after-first).
pub const DEFAULT_MAX_ATTEMPTS: usize = 3;

/// Upper bound on comments collected per run.
pub const DEFAULT_COMMENT_LIMIT: usize = 500;

/// Scores strictly below this are Negative.
pub const NEGATIVE_THRESHOLD: f64 = -0.05;

/// Scores strictly above this are Positive.
pub const POSITIVE_THRESHOLD: f64 = 0.05;

/// Name of the external metadata extraction binary.
pub const EXTRACTOR_BINARY: &str = "yt-dlp";

/// Output template handed to the extractor; the tool derives the actual
/// artifact name from it.
pub const EXTRACTOR_OUTPUT_TEMPLATE: &str = "video_info.json";

/// Suffix of the metadata artifact the extractor writes.
pub const ARTIFACT_SUFFIX: &str = ".info.json";

/// How long one extractor invocation may run before it is killed.
pub const EXTRACTOR_TIMEOUT: Duration = Duration::from_secs(120);

/// How long the scrolling source waits for the first comment element.
pub const FIRST_COMMENT_TIMEOUT: Duration = Duration::from_secs(50);

/// Settle interval between scroll cycles.
pub const SCROLL_SETTLE_INTERVAL: Duration = Duration::from_millis(2000);
