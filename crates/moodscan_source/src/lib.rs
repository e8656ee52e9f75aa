//! Comment acquisition for the Moodscan pipeline.
//!
//! Two alternate strategies over one capability:
//!
//! - [`YtDlpSource`] runs the external metadata extractor once per attempt
//!   and parses the artifact file it writes.
//! - [`ScrollingSource`] drives a browser session through a [`BrowserDriver`]
//!   implementation, scrolling until the page stops growing.
//!
//! Both produce comments in discovery order. The [`RetryingFetcher`] wraps
//! either behind a bounded retry budget; nothing downstream depends on
//! which variant is active.

pub mod browser;
pub mod fetcher;
pub mod source;
pub mod ytdlp;

pub use browser::{BrowserDriver, ScrollingSource};
pub use fetcher::RetryingFetcher;
pub use source::CommentSource;
pub use ytdlp::{YtDlpConfig, YtDlpSource};
