//! Raw-export representation of fetched comments.
//!
//! The surrounding application offers the unscored comment list as a
//! downloadable artifact; the pipeline exposes that intermediate
//! representation here, before any enrichment happens. Writing it to disk
//! is the caller's job.

use crate::types::CommentRecord;
use serde::Serialize;

/// One entry of the export artifact: `{"text": ..., "likes": ...}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RawComment {
    pub text: String,
    pub likes: u64,
}

impl From<&CommentRecord> for RawComment {
    fn from(record: &CommentRecord) -> Self {
        Self {
            text: record.text.clone(),
            likes: record.like_count,
        }
    }
}

/// Serialize records as the UTF-8 JSON array export artifact.
pub fn to_export_json(records: &[CommentRecord]) -> serde_json::Result<String> {
    let raw: Vec<RawComment> = records.iter().map(RawComment::from).collect();
    serde_json::to_string_pretty(&raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_shape() {
        let mut scored = CommentRecord::new("love it", 12);
        scored.apply_score(0.9);
        let records = vec![scored, CommentRecord::new("", 0)];

        let json = to_export_json(&records).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        let array = value.as_array().unwrap();
        assert_eq!(array.len(), 2);
        assert_eq!(array[0]["text"], "love it");
        assert_eq!(array[0]["likes"], 12);
        // Enrichment never leaks into the raw artifact
        assert!(array[0].get("sentiment").is_none());
        assert_eq!(array[1]["text"], "");
    }
}
