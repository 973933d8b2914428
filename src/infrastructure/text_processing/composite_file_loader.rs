use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;

use crate::application::ports::{FileLoader, FileLoaderError};
use crate::domain::{ContentType, Document, ExtractedText};

use super::pdf_adapter::PdfAdapter;
use super::plain_text_adapter::PlainTextAdapter;

/// Dispatches extraction to the adapter registered for the document's content type.
pub struct CompositeFileLoader {
    adapters: HashMap<ContentType, Arc<dyn FileLoader>>,
}

impl CompositeFileLoader {
    pub fn new(adapters: Vec<(ContentType, Arc<dyn FileLoader>)>) -> Self {
        Self {
            adapters: adapters.into_iter().collect(),
        }
    }

    /// PDF and plain text, the two formats the service accepts.
    pub fn with_default_adapters() -> Self {
        let pdf: Arc<dyn FileLoader> = Arc::new(PdfAdapter::new());
        let text: Arc<dyn FileLoader> = Arc::new(PlainTextAdapter);
        Self::new(vec![(ContentType::Pdf, pdf), (ContentType::Text, text)])
    }
}

#[async_trait]
impl FileLoader for CompositeFileLoader {
    async fn extract_text(
        &self,
        data: &[u8],
        document: &Document,
    ) -> Result<ExtractedText, FileLoaderError> {
        let adapter = self.adapters.get(&document.content_type).ok_or_else(|| {
            FileLoaderError::UnsupportedFormat(document.content_type.as_mime().to_string())
        })?;

        adapter.extract_text(data, document).await
    }
}
