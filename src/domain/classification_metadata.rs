use chrono::{DateTime, Utc};
use serde::Serialize;

use super::classification::ClassificationResult;

/// Where the classified text came from.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "source", rename_all = "snake_case", rename_all_fields = "camelCase")]
pub enum RequestMetadata {
    Document {
        original_name: String,
        size_bytes: u64,
        content_type: String,
        extracted_length: usize,
    },
    Text {
        text_length: usize,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassificationMetadata {
    #[serde(flatten)]
    pub request: RequestMetadata,
    pub truncated: bool,
    pub processed_at: DateTime<Utc>,
    pub processing_time_ms: u64,
}

/// A classification together with the request it answers.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassifiedDocument {
    #[serde(flatten)]
    pub classification: ClassificationResult,
    pub metadata: ClassificationMetadata,
}
