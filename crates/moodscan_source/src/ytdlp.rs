//! Variant A: batch metadata extraction via an external tool.
//!
//! Invokes `yt-dlp --skip-download --write-comments` against the URL with a
//! dedicated temp directory, waits for it with a bounded timeout, then
//! parses the `*.info.json` artifact it leaves behind. The temp directory
//! is removed when the attempt returns, success or not.

use crate::source::CommentSource;
use moodscan_protocol::defaults::{
    ARTIFACT_SUFFIX, EXTRACTOR_BINARY, EXTRACTOR_OUTPUT_TEMPLATE, EXTRACTOR_TIMEOUT,
};
use moodscan_protocol::{CommentRecord, SourceError};
use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus, Stdio};
use std::time::{Duration, Instant};
use tempfile::TempDir;
use tracing::{debug, warn};

/// Poll interval while waiting for the extractor process.
const WAIT_POLL_INTERVAL: Duration = Duration::from_millis(10);

/// Extractor invocation settings.
#[derive(Debug, Clone)]
pub struct YtDlpConfig {
    /// Path to the extractor binary.
    pub binary: PathBuf,
    /// How long one invocation may run before it is killed.
    pub timeout: Duration,
}

impl Default for YtDlpConfig {
    fn default() -> Self {
        let binary =
            which::which(EXTRACTOR_BINARY).unwrap_or_else(|_| PathBuf::from(EXTRACTOR_BINARY));
        Self {
            binary,
            timeout: EXTRACTOR_TIMEOUT,
        }
    }
}

/// Comment source backed by the external metadata extractor.
pub struct YtDlpSource {
    config: YtDlpConfig,
}

impl YtDlpSource {
    pub fn new() -> Self {
        Self {
            config: YtDlpConfig::default(),
        }
    }

    pub fn with_config(config: YtDlpConfig) -> Self {
        Self { config }
    }

    fn run_extractor(&self, url: &str, output_template: &Path) -> Result<ProcessOutput, SourceError> {
        let mut child = Command::new(&self.config.binary)
            .arg("--skip-download")
            .arg("--write-comments")
            .arg("--no-warnings")
            .arg("--output")
            .arg(output_template)
            .arg(url)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| {
                SourceError::tool_failed(format!(
                    "failed to spawn {}: {}",
                    self.config.binary.display(),
                    e
                ))
            })?;

        let stdout = child
            .stdout
            .take()
            .ok_or_else(|| SourceError::unexpected("missing extractor stdout pipe"))?;
        let stderr = child
            .stderr
            .take()
            .ok_or_else(|| SourceError::unexpected("missing extractor stderr pipe"))?;

        // Drain both pipes while the child runs. The tool can emit more
        // progress output than the OS pipe buffer holds; left undrained it
        // would block on a full pipe and never exit.
        let stdout_reader = drain_pipe(stdout);
        let stderr_reader = drain_pipe(stderr);

        let start = Instant::now();
        loop {
            match child
                .try_wait()
                .map_err(|e| SourceError::unexpected(e.to_string()))?
            {
                Some(status) => {
                    let _ = stdout_reader.join();
                    let stderr_buf = stderr_reader.join().unwrap_or_default();
                    return Ok(ProcessOutput {
                        status,
                        stderr: String::from_utf8_lossy(&stderr_buf).into_owned(),
                    });
                }
                None => {
                    if start.elapsed() >= self.config.timeout {
                        let _ = child.kill();
                        let _ = child.wait();
                        // Pipes are closed by the wait; the readers finish
                        let _ = stdout_reader.join();
                        let _ = stderr_reader.join();
                        return Err(SourceError::tool_failed(format!(
                            "extractor did not finish within {:?}",
                            self.config.timeout
                        )));
                    }
                    std::thread::sleep(WAIT_POLL_INTERVAL);
                }
            }
        }
    }
}

impl Default for YtDlpSource {
    fn default() -> Self {
        Self::new()
    }
}

impl CommentSource for YtDlpSource {
    fn fetch(&self, url: &str, limit: usize) -> Result<Vec<CommentRecord>, SourceError> {
        let workdir = TempDir::new().map_err(|e| SourceError::unexpected(e.to_string()))?;
        let output_template = workdir.path().join(EXTRACTOR_OUTPUT_TEMPLATE);

        debug!(url, binary = %self.config.binary.display(), "running metadata extractor");
        let output = self.run_extractor(url, &output_template)?;
        if !output.status.success() {
            warn!(url, code = ?output.status.code(), "extractor exited non-zero");
            return Err(SourceError::tool_failed(output.stderr));
        }

        let artifact = find_artifact(workdir.path())?.ok_or(SourceError::NotFound)?;
        let raw = std::fs::read_to_string(&artifact)
            .map_err(|e| SourceError::unexpected(format!("failed to read artifact: {}", e)))?;

        let comments = parse_comments(&raw, limit)?;
        debug!(url, count = comments.len(), "parsed comments from artifact");
        Ok(comments)
    }
}

struct ProcessOutput {
    status: ExitStatus,
    stderr: String,
}

/// Read a child pipe to completion on its own thread.
fn drain_pipe<R: Read + Send + 'static>(mut pipe: R) -> std::thread::JoinHandle<Vec<u8>> {
    std::thread::spawn(move || {
        let mut buf = Vec::new();
        let _ = pipe.read_to_end(&mut buf);
        buf
    })
}

/// Locate the single `*.info.json` artifact the extractor wrote.
fn find_artifact(dir: &Path) -> Result<Option<PathBuf>, SourceError> {
    let entries = std::fs::read_dir(dir).map_err(|e| SourceError::unexpected(e.to_string()))?;
    for entry in entries {
        let entry = entry.map_err(|e| SourceError::unexpected(e.to_string()))?;
        let name = entry.file_name();
        if name.to_string_lossy().ends_with(ARTIFACT_SUFFIX) {
            return Ok(Some(entry.path()));
        }
    }
    Ok(None)
}

/// Map the artifact's `comments` array to records.
///
/// A missing or malformed comment list is an empty success, not a failure:
/// the upstream omits the key for videos with comments disabled. The like
/// count arrives as `digg_count` (legacy field name) or `like_count`.
fn parse_comments(raw: &str, limit: usize) -> Result<Vec<CommentRecord>, SourceError> {
    let value: serde_json::Value = serde_json::from_str(raw)
        .map_err(|e| SourceError::unexpected(format!("artifact is not valid JSON: {}", e)))?;

    let Some(entries) = value.get("comments").and_then(|c| c.as_array()) else {
        return Ok(Vec::new());
    };

    let comments = entries
        .iter()
        .take(limit)
        .map(|entry| {
            let text = entry
                .get("text")
                .and_then(|t| t.as_str())
                .unwrap_or_default();
            let likes = entry
                .get("digg_count")
                .or_else(|| entry.get("like_count"))
                .and_then(|n| n.as_u64())
                .unwrap_or(0);
            CommentRecord::new(text, likes)
        })
        .collect();
    Ok(comments)
}
