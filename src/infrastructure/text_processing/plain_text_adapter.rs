use async_trait::async_trait;

use crate::application::ports::{FileLoader, FileLoaderError};
use crate::domain::{ContentType, Document, ExtractedText};

pub struct PlainTextAdapter;

#[async_trait]
impl FileLoader for PlainTextAdapter {
    async fn extract_text(
        &self,
        data: &[u8],
        document: &Document,
    ) -> Result<ExtractedText, FileLoaderError> {
        if document.content_type != ContentType::Text {
            return Err(FileLoaderError::UnsupportedFormat(
                document.content_type.as_mime().to_string(),
            ));
        }

        let text = String::from_utf8(data.to_vec())
            .map_err(|e| FileLoaderError::ExtractionFailed(e.to_string()))?;
        let text = text.strip_prefix('\u{feff}').unwrap_or(&text).trim();

        ExtractedText::new(text)
            .ok_or_else(|| FileLoaderError::EmptyContent(document.filename.clone()))
    }
}
