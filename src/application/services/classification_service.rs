use std::sync::Arc;
use std::time::Instant;

use chrono::Utc;

use crate::application::ports::{FileLoader, FileLoaderError, LlmClient, StagingStore};
use crate::domain::{
    ClassificationMetadata, ClassifiedDocument, ContentType, Document, ExtractedText,
    RequestMetadata, StoragePath,
};

use super::classification_error::ClassificationError;
use super::classifier_gateway::ClassifierGateway;
use super::result_sanitizer::sanitize;
use super::routing_advisor::RoutingAdvisor;

pub const TRUNCATION_MARKER: &str = "\n\n[Content truncated due to length]";

/// Input limits enforced before any extraction or model call.
#[derive(Debug, Clone)]
pub struct ClassificationPolicy {
    pub max_file_size_bytes: u64,
    pub allowed_content_types: Vec<String>,
    pub max_text_chars: usize,
}

impl Default for ClassificationPolicy {
    fn default() -> Self {
        Self {
            max_file_size_bytes: 10 * 1024 * 1024,
            allowed_content_types: vec![
                ContentType::Pdf.as_mime().to_string(),
                ContentType::Text.as_mime().to_string(),
            ],
            max_text_chars: 50_000,
        }
    }
}

impl ClassificationPolicy {
    fn allows(&self, mime: &str) -> bool {
        let essence = mime.split(';').next().unwrap_or_default().trim();
        self.allowed_content_types
            .iter()
            .any(|allowed| allowed.eq_ignore_ascii_case(essence))
    }
}

/// A file already written to the staging store by the upload layer.
#[derive(Debug, Clone)]
pub struct DocumentUpload {
    pub path: StoragePath,
    pub filename: String,
    pub content_type: String,
    pub size_bytes: u64,
}

pub struct ClassificationService<F: ?Sized, L: ?Sized>
where
    F: FileLoader,
    L: LlmClient,
{
    file_loader: Arc<F>,
    staging_store: Arc<dyn StagingStore>,
    gateway: ClassifierGateway<L>,
    routing_advisor: RoutingAdvisor,
    policy: ClassificationPolicy,
}

impl<F: ?Sized, L: ?Sized> ClassificationService<F, L>
where
    F: FileLoader,
    L: LlmClient,
{
    pub fn new(
        file_loader: Arc<F>,
        staging_store: Arc<dyn StagingStore>,
        gateway: ClassifierGateway<L>,
        routing_advisor: RoutingAdvisor,
        policy: ClassificationPolicy,
    ) -> Self {
        Self {
            file_loader,
            staging_store,
            gateway,
            routing_advisor,
            policy,
        }
    }

    pub fn policy(&self) -> &ClassificationPolicy {
        &self.policy
    }

    pub fn routing_advisor(&self) -> &RoutingAdvisor {
        &self.routing_advisor
    }

    /// Classifies a staged upload. The staged object is deleted whatever the outcome.
    #[tracing::instrument(
        skip(self, upload),
        fields(
            filename = %upload.filename,
            content_type = %upload.content_type,
            size_bytes = upload.size_bytes,
        )
    )]
    pub async fn process_document(
        &self,
        upload: DocumentUpload,
    ) -> Result<ClassifiedDocument, ClassificationError> {
        let started = Instant::now();
        let result = self.classify_upload(&upload, started).await;

        if let Err(e) = self.staging_store.delete(&upload.path).await {
            tracing::warn!(path = %upload.path, error = %e, "Failed to remove staged upload");
        }

        result
    }

    #[tracing::instrument(skip(self, raw_text), fields(text_length = raw_text.len()))]
    pub async fn classify_text(
        &self,
        raw_text: &str,
    ) -> Result<ClassifiedDocument, ClassificationError> {
        let started = Instant::now();
        let text = ExtractedText::new(raw_text).ok_or_else(|| {
            ClassificationError::InvalidInput("text must not be empty".to_string())
        })?;

        let request = RequestMetadata::Text {
            text_length: text.original_length(),
        };

        self.classify_extracted(text, request, started).await
    }

    async fn classify_upload(
        &self,
        upload: &DocumentUpload,
        started: Instant,
    ) -> Result<ClassifiedDocument, ClassificationError> {
        if upload.size_bytes == 0 {
            return Err(ClassificationError::InvalidInput(
                "uploaded file is empty".to_string(),
            ));
        }

        if upload.size_bytes > self.policy.max_file_size_bytes {
            return Err(ClassificationError::InvalidInput(format!(
                "file size {} bytes exceeds the maximum of {} bytes",
                upload.size_bytes, self.policy.max_file_size_bytes
            )));
        }

        if !self.policy.allows(&upload.content_type) {
            return Err(ClassificationError::InvalidInput(format!(
                "content type {} is not allowed",
                upload.content_type
            )));
        }

        let content_type = ContentType::from_mime(&upload.content_type).ok_or_else(|| {
            FileLoaderError::UnsupportedFormat(upload.content_type.clone())
        })?;

        let data = self.staging_store.fetch(&upload.path).await.map_err(|e| {
            tracing::error!(path = %upload.path, error = %e, "Failed to read staged upload");
            FileLoaderError::SourceUnavailable(upload.filename.clone())
        })?;

        let document = Document::new(upload.filename.clone(), content_type, upload.size_bytes);
        let text = self.file_loader.extract_text(&data, &document).await?;

        tracing::debug!(
            document_id = %document.id,
            extracted_length = text.original_length(),
            "Text extracted"
        );

        let request = RequestMetadata::Document {
            original_name: upload.filename.clone(),
            size_bytes: upload.size_bytes,
            content_type: content_type.as_mime().to_string(),
            extracted_length: text.original_length(),
        };

        self.classify_extracted(text, request, started).await
    }

    async fn classify_extracted(
        &self,
        text: ExtractedText,
        request: RequestMetadata,
        started: Instant,
    ) -> Result<ClassifiedDocument, ClassificationError> {
        let text = text.truncate(self.policy.max_text_chars, TRUNCATION_MARKER);
        if text.is_truncated() {
            tracing::info!(
                original_length = text.original_length(),
                max_text_chars = self.policy.max_text_chars,
                "Text truncated before classification"
            );
        }

        let outcome = self.gateway.classify(&text).await?;
        let classification = self.routing_advisor.advise(sanitize(outcome));

        tracing::info!(
            document_type = %classification.document_type(),
            department = %classification.department(),
            confidence = classification.confidence(),
            routing_confidence = classification.routing_confidence(),
            "Document classified"
        );

        let metadata = ClassificationMetadata {
            request,
            truncated: text.is_truncated(),
            processed_at: Utc::now(),
            processing_time_ms: started.elapsed().as_millis() as u64,
        };

        Ok(ClassifiedDocument {
            classification,
            metadata,
        })
    }
}
