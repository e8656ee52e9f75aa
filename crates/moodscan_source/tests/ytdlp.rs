//! End-to-end tests for the external-extractor source, using shell scripts
//! standing in for the real binary.

#![cfg(unix)]

use moodscan_protocol::SourceError;
use moodscan_source::{CommentSource, YtDlpConfig, YtDlpSource};
use std::os::unix::fs::PermissionsExt;
use std::path::PathBuf;
use std::time::Duration;
use tempfile::TempDir;

/// Write an executable script that plays the extractor role.
fn fake_extractor(dir: &TempDir, body: &str) -> PathBuf {
    let path = dir.path().join("fake-yt-dlp");
    let script = format!("#!/bin/sh\n{}\n", body);
    std::fs::write(&path, script).unwrap();
    let mut perms = std::fs::metadata(&path).unwrap().permissions();
    perms.set_mode(0o755);
    std::fs::set_permissions(&path, perms).unwrap();
    path
}

fn source_with(binary: PathBuf, timeout: Duration) -> YtDlpSource {
    YtDlpSource::with_config(YtDlpConfig { binary, timeout })
}

/// Script fragment that recovers the `--output` template argument.
const PARSE_OUTPUT_ARG: &str = r#"
template=""
while [ $# -gt 0 ]; do
  if [ "$1" = "--output" ]; then
    shift
    template="$1"
  fi
  shift
done
dir=$(dirname "$template")
"#;

#[test]
fn test_fetch_parses_artifact_from_fake_extractor() {
    let scripts = TempDir::new().unwrap();
    let body = format!(
        r#"{PARSE_OUTPUT_ARG}
cat > "$dir/video_info.info.json" <<'EOF'
{{"id": "v1", "comments": [
  {{"text": "love this", "digg_count": 4}},
  {{"text": "mid", "digg_count": 0}},
  {{"text": "terrible audio", "like_count": 2}}
]}}
EOF
"#
    );
    let binary = fake_extractor(&scripts, &body);
    let source = source_with(binary, Duration::from_secs(10));

    let comments = source.fetch("https://example.test/v/1", 100).unwrap();
    assert_eq!(comments.len(), 3);
    assert_eq!(comments[0].text, "love this");
    assert_eq!(comments[0].like_count, 4);
    assert_eq!(comments[2].like_count, 2);
}

#[test]
fn test_limit_is_applied_to_artifact() {
    let scripts = TempDir::new().unwrap();
    let body = format!(
        r#"{PARSE_OUTPUT_ARG}
printf '{{"comments": [{{"text": "a"}}, {{"text": "b"}}, {{"text": "c"}}]}}' > "$dir/v.info.json"
"#
    );
    let binary = fake_extractor(&scripts, &body);
    let source = source_with(binary, Duration::from_secs(10));

    let comments = source.fetch("https://example.test/v/1", 2).unwrap();
    assert_eq!(comments.len(), 2);
}

#[test]
fn test_nonzero_exit_surfaces_stderr() {
    let scripts = TempDir::new().unwrap();
    let binary = fake_extractor(&scripts, "echo 'HTTP Error 403: blocked' >&2\nexit 1");
    let source = source_with(binary, Duration::from_secs(10));

    let err = source.fetch("https://example.test/v/1", 100).unwrap_err();
    match err {
        SourceError::ExternalToolFailed { detail } => {
            assert!(detail.contains("403"), "detail was: {}", detail)
        }
        other => panic!("expected ExternalToolFailed, got {:?}", other),
    }
}

#[test]
fn test_missing_artifact_is_not_found() {
    let scripts = TempDir::new().unwrap();
    // Exits cleanly without writing anything
    let binary = fake_extractor(&scripts, "exit 0");
    let source = source_with(binary, Duration::from_secs(10));

    let err = source.fetch("https://example.test/v/1", 100).unwrap_err();
    assert!(matches!(err, SourceError::NotFound));
}

#[test]
fn test_chatty_extractor_does_not_stall_the_fetch() {
    let scripts = TempDir::new().unwrap();
    // ~2 MB of progress chatter, far past the OS pipe buffer, before the
    // artifact lands and the tool exits cleanly
    let body = format!(
        r#"{PARSE_OUTPUT_ARG}
i=0
while [ $i -lt 20000 ]; do
  echo "[download] Downloading comment page $i ........................................................"
  i=$((i+1))
done
printf '{{"comments": [{{"text": "love this", "digg_count": 4}}]}}' > "$dir/v.info.json"
"#
    );
    let binary = fake_extractor(&scripts, &body);
    let source = source_with(binary, Duration::from_secs(5));

    let comments = source.fetch("https://example.test/v/1", 100).unwrap();
    assert_eq!(comments.len(), 1);
    assert_eq!(comments[0].text, "love this");
}

#[test]
fn test_large_stderr_is_captured_on_failure() {
    let scripts = TempDir::new().unwrap();
    let body = r#"
i=0
while [ $i -lt 20000 ]; do
  echo "WARNING: page $i looked odd ............................................................" >&2
  i=$((i+1))
done
echo 'HTTP Error 429: too many requests' >&2
exit 1
"#;
    let binary = fake_extractor(&scripts, body);
    let source = source_with(binary, Duration::from_secs(5));

    let err = source.fetch("https://example.test/v/1", 100).unwrap_err();
    match err {
        SourceError::ExternalToolFailed { detail } => {
            assert!(detail.contains("429"), "final stderr line missing");
        }
        other => panic!("expected ExternalToolFailed, got {:?}", other),
    }
}

#[test]
fn test_slow_extractor_is_killed() {
    let scripts = TempDir::new().unwrap();
    let binary = fake_extractor(&scripts, "sleep 30");
    let source = source_with(binary, Duration::from_millis(200));

    let start = std::time::Instant::now();
    let err = source.fetch("https://example.test/v/1", 100).unwrap_err();
    assert!(matches!(err, SourceError::ExternalToolFailed { .. }));
    assert!(start.elapsed() < Duration::from_secs(10), "kill was not prompt");
}

#[test]
fn test_disabled_comments_key_is_empty_success() {
    let scripts = TempDir::new().unwrap();
    let body = format!(
        r#"{PARSE_OUTPUT_ARG}
printf '{{"id": "v1"}}' > "$dir/v.info.json"
"#
    );
    let binary = fake_extractor(&scripts, &body);
    let source = source_with(binary, Duration::from_secs(10));

    let comments = source.fetch("https://example.test/v/1", 100).unwrap();
    assert!(comments.is_empty());
}
