//! Variant B: incremental extraction through a scrolling browser session.
//!
//! The driver boundary is the [`BrowserDriver`] trait; the scroll loop and
//! resource discipline live here. A fresh driver is acquired per attempt
//! and `quit()` is guaranteed on every exit path, including mid-loop
//! errors, via a drop guard.

use crate::source::CommentSource;
use moodscan_protocol::defaults::{FIRST_COMMENT_TIMEOUT, SCROLL_SETTLE_INTERVAL};
use moodscan_protocol::{CommentRecord, SourceError};
use std::collections::HashSet;
use std::time::Duration;
use tracing::debug;

/// Default CSS selector for top-level comment text elements.
pub const DEFAULT_COMMENT_SELECTOR: &str = "[data-e2e='comment-level-1']";

/// Minimal browser-automation contract consumed by the scroll loop.
///
/// `find_elements` returns the visible text of each matching element, in
/// document order. `wait_for` blocks until the selector matches or the
/// timeout elapses, reporting which happened.
pub trait BrowserDriver {
    fn navigate(&mut self, url: &str) -> Result<(), SourceError>;
    fn wait_for(&mut self, selector: &str, timeout: Duration) -> Result<bool, SourceError>;
    fn find_elements(&mut self, selector: &str) -> Result<Vec<String>, SourceError>;
    fn scroll_to_bottom(&mut self) -> Result<(), SourceError>;
    fn scroll_height(&mut self) -> Result<u64, SourceError>;
    fn quit(&mut self);
}

/// Owns a driver for the duration of one attempt; quits it on drop.
struct DriverGuard<D: BrowserDriver> {
    driver: Option<D>,
}

impl<D: BrowserDriver> DriverGuard<D> {
    fn new(driver: D) -> Self {
        Self {
            driver: Some(driver),
        }
    }

    fn get(&mut self) -> &mut D {
        // Only taken in drop
        self.driver.as_mut().expect("driver already released")
    }
}

impl<D: BrowserDriver> Drop for DriverGuard<D> {
    fn drop(&mut self) {
        if let Some(mut driver) = self.driver.take() {
            driver.quit();
        }
    }
}

/// Comment source that scrolls a browser session until the page stops
/// growing or the limit is reached.
///
/// The factory yields a fresh driver per fetch; a session is never shared
/// across attempts. `like_count` is always 0 here - the observed comment
/// element does not expose it.
pub struct ScrollingSource<D, F>
where
    D: BrowserDriver,
    F: Fn() -> Result<D, SourceError>,
{
    factory: F,
    comment_selector: String,
    first_comment_timeout: Duration,
    settle_interval: Duration,
}

impl<D, F> ScrollingSource<D, F>
where
    D: BrowserDriver,
    F: Fn() -> Result<D, SourceError>,
{
    pub fn new(factory: F) -> Self {
        Self {
            factory,
            comment_selector: DEFAULT_COMMENT_SELECTOR.to_string(),
            first_comment_timeout: FIRST_COMMENT_TIMEOUT,
            settle_interval: SCROLL_SETTLE_INTERVAL,
        }
    }

    pub fn with_comment_selector(mut self, selector: impl Into<String>) -> Self {
        self.comment_selector = selector.into();
        self
    }

    pub fn with_first_comment_timeout(mut self, timeout: Duration) -> Self {
        self.first_comment_timeout = timeout;
        self
    }

    pub fn with_settle_interval(mut self, interval: Duration) -> Self {
        self.settle_interval = interval;
        self
    }

    fn collect(&self, driver: &mut D, url: &str, limit: usize) -> Result<Vec<CommentRecord>, SourceError> {
        driver.navigate(url)?;

        if !driver.wait_for(&self.comment_selector, self.first_comment_timeout)? {
            return Err(SourceError::Timeout {
                waited: self.first_comment_timeout,
            });
        }

        let mut seen: HashSet<String> = HashSet::new();
        let mut comments: Vec<CommentRecord> = Vec::new();

        loop {
            for text in driver.find_elements(&self.comment_selector)? {
                // Dedup by text, keeping first-appearance order
                if seen.insert(text.clone()) {
                    comments.push(CommentRecord::new(text, 0));
                    if comments.len() >= limit {
                        debug!(url, count = comments.len(), "comment limit reached");
                        return Ok(comments);
                    }
                }
            }

            let before = driver.scroll_height()?;
            driver.scroll_to_bottom()?;
            std::thread::sleep(self.settle_interval);
            let after = driver.scroll_height()?;
            if after == before {
                // Page stopped growing: no more content
                break;
            }
        }

        debug!(url, count = comments.len(), "page height settled");
        Ok(comments)
    }
}

impl<D, F> CommentSource for ScrollingSource<D, F>
where
    D: BrowserDriver,
    F: Fn() -> Result<D, SourceError>,
{
    fn fetch(&self, url: &str, limit: usize) -> Result<Vec<CommentRecord>, SourceError> {
        let mut guard = DriverGuard::new((self.factory)()?);
        self.collect(guard.get(), url, limit)
        // guard drops here, quitting the driver on success and error alike
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::{Arc, Mutex};

    /// Scripted driver: each scroll cycle reveals the next batch of
    /// comments and the next page height.
    struct FakeDriver {
        batches: Vec<Vec<String>>,
        heights: Vec<u64>,
        cycle: usize,
        first_comment_appears: bool,
        fail_find: bool,
        quit_called: Arc<AtomicBool>,
    }

    impl FakeDriver {
        fn new(batches: Vec<Vec<&str>>, heights: Vec<u64>, quit_called: Arc<AtomicBool>) -> Self {
            Self {
                batches: batches
                    .into_iter()
                    .map(|b| b.into_iter().map(String::from).collect())
                    .collect(),
                heights,
                cycle: 0,
                first_comment_appears: true,
                fail_find: false,
                quit_called,
            }
        }
    }

    impl BrowserDriver for FakeDriver {
        fn navigate(&mut self, _url: &str) -> Result<(), SourceError> {
            Ok(())
        }

        fn wait_for(&mut self, _selector: &str, _timeout: Duration) -> Result<bool, SourceError> {
            Ok(self.first_comment_appears)
        }

        fn find_elements(&mut self, _selector: &str) -> Result<Vec<String>, SourceError> {
            if self.fail_find {
                return Err(SourceError::unexpected("driver crashed"));
            }
            // Cumulative view: everything revealed so far is still visible
            let upto = (self.cycle + 1).min(self.batches.len());
            Ok(self.batches[..upto].concat())
        }

        fn scroll_to_bottom(&mut self) -> Result<(), SourceError> {
            self.cycle += 1;
            Ok(())
        }

        fn scroll_height(&mut self) -> Result<u64, SourceError> {
            let idx = self.cycle.min(self.heights.len() - 1);
            Ok(self.heights[idx])
        }

        fn quit(&mut self) {
            self.quit_called.store(true, Ordering::SeqCst);
        }
    }

    fn source_for(
        driver: FakeDriver,
    ) -> ScrollingSource<FakeDriver, impl Fn() -> Result<FakeDriver, SourceError>> {
        let driver = Mutex::new(Some(driver));
        ScrollingSource::new(move || Ok(driver.lock().unwrap().take().expect("one fetch per test")))
            .with_settle_interval(Duration::from_millis(1))
            .with_first_comment_timeout(Duration::from_millis(50))
    }

    #[test]
    fn test_stops_when_height_settles() {
        let quit = Arc::new(AtomicBool::new(false));
        // Heights: 100 (pre-scroll), 200, then 200 again -> stop
        let driver = FakeDriver::new(
            vec![vec!["first"], vec!["second"]],
            vec![100, 200, 200],
            quit.clone(),
        );
        let source = source_for(driver);

        let comments = source.fetch("https://example.test/v/1", 100).unwrap();
        let texts: Vec<_> = comments.iter().map(|c| c.text.as_str()).collect();
        assert_eq!(texts, vec!["first", "second"]);
        assert!(quit.load(Ordering::SeqCst), "driver must be quit");
    }

    #[test]
    fn test_limit_stops_before_height_settles() {
        let quit = Arc::new(AtomicBool::new(false));
        let driver = FakeDriver::new(
            vec![vec!["a", "b", "c"], vec!["d"]],
            vec![100, 200, 300, 400],
            quit.clone(),
        );
        let source = source_for(driver);

        let comments = source.fetch("https://example.test/v/1", 2).unwrap();
        assert_eq!(comments.len(), 2);
        assert!(quit.load(Ordering::SeqCst));
    }

    #[test]
    fn test_dedup_preserves_first_appearance_order() {
        let quit = Arc::new(AtomicBool::new(false));
        let driver = FakeDriver::new(
            vec![vec!["a", "b"], vec!["b", "c", "a"]],
            vec![100, 200, 200],
            quit.clone(),
        );
        let source = source_for(driver);

        let comments = source.fetch("https://example.test/v/1", 100).unwrap();
        let texts: Vec<_> = comments.iter().map(|c| c.text.as_str()).collect();
        assert_eq!(texts, vec!["a", "b", "c"]);
        assert!(comments.iter().all(|c| c.like_count == 0));
    }

    #[test]
    fn test_timeout_when_first_comment_never_appears() {
        let quit = Arc::new(AtomicBool::new(false));
        let mut driver = FakeDriver::new(vec![], vec![100], quit.clone());
        driver.first_comment_appears = false;
        let source = source_for(driver);

        let err = source.fetch("https://example.test/v/1", 100).unwrap_err();
        assert!(matches!(err, SourceError::Timeout { .. }));
        assert!(quit.load(Ordering::SeqCst), "driver must be quit on timeout");
    }

    #[test]
    fn test_driver_quit_on_mid_loop_error() {
        let quit = Arc::new(AtomicBool::new(false));
        let mut driver = FakeDriver::new(vec![vec!["a"]], vec![100, 200], quit.clone());
        driver.fail_find = true;
        let source = source_for(driver);

        let err = source.fetch("https://example.test/v/1", 100).unwrap_err();
        assert!(matches!(err, SourceError::Unexpected { .. }));
        assert!(quit.load(Ordering::SeqCst), "driver must be quit on error");
    }

    #[test]
    fn test_empty_page_is_empty_success() {
        let quit = Arc::new(AtomicBool::new(false));
        let driver = FakeDriver::new(vec![vec![]], vec![100, 100], quit.clone());
        let source = source_for(driver);

        let comments = source.fetch("https://example.test/v/1", 100).unwrap();
        assert!(comments.is_empty());
        assert!(quit.load(Ordering::SeqCst));
    }
}
