//! The score command: run the bundled analyzer over one text.
//!
//! Diagnostic surface for the oracle; no fetching involved.

use moodscan_protocol::SentimentBucket;
use moodscan_sentiment::{shared_analyzer, SentimentOracle};

#[derive(Debug, clap::Args)]
pub struct ScoreArgs {
    /// Text to score
    pub text: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: ScoreArgs) -> anyhow::Result<()> {
    let score = shared_analyzer().score(&args.text);
    let bucket = SentimentBucket::for_score(score);

    if args.json {
        let result = serde_json::json!({
            "text": args.text,
            "score": score,
            "bucket": bucket.as_str(),
        });
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!("score:  {:+.4}", score);
        println!("bucket: {}", bucket);
    }

    Ok(())
}
