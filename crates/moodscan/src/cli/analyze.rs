//! The analyze command: full pipeline run against one video URL.

use crate::cli::output;
use crate::pipeline::{PipelineController, RunOutcome};
use anyhow::Context;
use moodscan_protocol::defaults::{DEFAULT_COMMENT_LIMIT, DEFAULT_MAX_ATTEMPTS};
use moodscan_protocol::export::to_export_json;
use moodscan_protocol::{CommentRecord, SentimentBucket};
use moodscan_sentiment::shared_analyzer;
use moodscan_source::{RetryingFetcher, YtDlpConfig, YtDlpSource};
use std::path::PathBuf;

#[derive(Debug, clap::Args)]
pub struct AnalyzeArgs {
    /// Video URL to analyze
    pub url: String,

    /// Maximum number of comments to retrieve
    #[arg(short = 'n', long, default_value_t = DEFAULT_COMMENT_LIMIT)]
    pub limit: usize,

    /// Fetch attempts before giving up
    #[arg(long, default_value_t = DEFAULT_MAX_ATTEMPTS)]
    pub attempts: usize,

    /// Path to the yt-dlp binary (default: resolved from PATH)
    #[arg(long)]
    pub ytdlp_bin: Option<PathBuf>,

    /// Write the raw comment export (JSON array of {text, likes}) here
    #[arg(long)]
    pub export: Option<PathBuf>,

    /// Restrict the export to comments in one bucket (negative, neutral,
    /// positive)
    #[arg(long, requires = "export")]
    pub bucket: Option<SentimentBucket>,

    /// Output the full result as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: AnalyzeArgs) -> anyhow::Result<()> {
    let mut config = YtDlpConfig::default();
    if let Some(binary) = args.ytdlp_bin.clone() {
        config.binary = binary;
    }
    let source = YtDlpSource::with_config(config);

    let controller =
        PipelineController::new(RetryingFetcher::new(args.attempts), shared_analyzer());

    match controller.run(&source, &args.url, args.limit) {
        RunOutcome::Report {
            total,
            distribution,
            records,
        } => {
            if let Some(path) = &args.export {
                let artifact = export_artifact(&records, args.bucket)?;
                std::fs::write(path, artifact)
                    .with_context(|| format!("Failed to write export to {}", path.display()))?;
            }

            if args.json {
                let counts = output::bucket_counts(&records);
                let counts_by_name: std::collections::BTreeMap<&str, usize> =
                    counts.iter().map(|(b, c)| (b.as_str(), *c)).collect();
                let report = serde_json::json!({
                    "url": args.url,
                    "total": total,
                    "counts": counts_by_name,
                    "distribution": distribution,
                });
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!("Analyzed {} comments from {}", total, args.url);
                let counts = output::bucket_counts(&records);
                println!("{}", output::distribution_table(&distribution, &counts));
                if let Some(path) = &args.export {
                    println!("Raw comments written to {}", path.display());
                }
            }
            Ok(())
        }
        RunOutcome::Failed { message } => anyhow::bail!(message),
    }
}

/// Serialize the raw export, optionally restricted to one bucket.
fn export_artifact(
    records: &[CommentRecord],
    bucket: Option<SentimentBucket>,
) -> anyhow::Result<String> {
    let artifact = match bucket {
        Some(bucket) => {
            let selected: Vec<CommentRecord> = records
                .iter()
                .filter(|r| r.bucket == Some(bucket))
                .cloned()
                .collect();
            to_export_json(&selected)?
        }
        None => to_export_json(records)?,
    };
    Ok(artifact)
}
