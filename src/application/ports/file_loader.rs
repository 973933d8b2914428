use async_trait::async_trait;

use crate::domain::{Document, ExtractedText};

#[async_trait]
pub trait FileLoader: Send + Sync {
    async fn extract_text(
        &self,
        data: &[u8],
        document: &Document,
    ) -> Result<ExtractedText, FileLoaderError>;
}

#[derive(Debug, thiserror::Error)]
pub enum FileLoaderError {
    #[error("unsupported format: {0}")]
    UnsupportedFormat(String),
    #[error("source unavailable: {0}")]
    SourceUnavailable(String),
    #[error("no text content found in {0}")]
    EmptyContent(String),
    #[error("extraction failed: {0}")]
    ExtractionFailed(String),
}
