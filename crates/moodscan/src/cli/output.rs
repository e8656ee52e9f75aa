//! Output formatting for CLI commands
//!
//! Human-readable tables for the distribution report, with a color per
//! bucket. JSON output bypasses this module entirely.

use comfy_table::{presets::UTF8_FULL_CONDENSED, Cell, Color, ContentArrangement, Table};
use moodscan_protocol::{SentimentBucket, SentimentDistribution};
use std::collections::BTreeMap;

/// Color for a sentiment bucket label
pub fn color_for_bucket(bucket: SentimentBucket) -> Color {
    match bucket {
        SentimentBucket::Negative => Color::Red,
        SentimentBucket::Neutral => Color::Grey,
        SentimentBucket::Positive => Color::Green,
    }
}

/// Render the distribution table. Buckets that never occurred are left
/// out, matching the distribution itself.
pub fn distribution_table(
    distribution: &SentimentDistribution,
    counts: &BTreeMap<SentimentBucket, usize>,
) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .set_content_arrangement(ContentArrangement::Dynamic);

    let headers: Vec<Cell> = ["Sentiment", "Comments", "Share"]
        .iter()
        .map(|h| Cell::new(h).fg(Color::Cyan))
        .collect();
    table.set_header(headers);

    for (bucket, share) in distribution.iter() {
        let count = counts.get(&bucket).copied().unwrap_or(0);
        table.add_row(vec![
            Cell::new(bucket.as_str()).fg(color_for_bucket(bucket)),
            Cell::new(count.to_string()),
            Cell::new(format!("{:.2}%", share)),
        ]);
    }

    table
}

/// Per-bucket counts recovered from scored records.
pub fn bucket_counts(
    records: &[moodscan_protocol::CommentRecord],
) -> BTreeMap<SentimentBucket, usize> {
    let mut counts = BTreeMap::new();
    for record in records {
        if let Some(bucket) = record.bucket {
            *counts.entry(bucket).or_insert(0) += 1;
        }
    }
    counts
}
