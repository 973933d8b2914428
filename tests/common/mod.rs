#![allow(dead_code)]

use std::sync::Arc;

use bytes::Bytes;
use futures::stream;
use tempfile::TempDir;

use docroute::application::ports::StagingStore;
use docroute::application::services::{
    ClassificationPolicy, ClassificationService, ClassifierGateway, DocumentUpload, RoutingAdvisor,
};
use docroute::domain::{DocumentId, StoragePath};
use docroute::infrastructure::llm::MockLlmClient;
use docroute::infrastructure::storage::LocalStagingStore;
use docroute::infrastructure::text_processing::CompositeFileLoader;

pub const INVOICE_REPLY: &str = r#"{
  "documentType": "invoice",
  "confidence": 0.92,
  "department": "finance",
  "routingConfidence": 0.9,
  "extractedData": {"invoiceNumber": "123", "amount": "$500"},
  "reasoning": "The text carries an invoice number and an amount due.",
  "suggestedActions": ["Forward to accounts payable"]
}"#;

pub struct Harness {
    pub service: Arc<ClassificationService<CompositeFileLoader, MockLlmClient>>,
    pub llm: Arc<MockLlmClient>,
    pub store: Arc<LocalStagingStore>,
    _dir: TempDir,
}

impl Harness {
    pub fn new(llm: MockLlmClient) -> Self {
        Self::with_policy(llm, ClassificationPolicy::default())
    }

    pub fn with_policy(llm: MockLlmClient, policy: ClassificationPolicy) -> Self {
        let dir = TempDir::new().unwrap();
        let store = Arc::new(LocalStagingStore::new(dir.path().to_path_buf()).unwrap());
        let llm = Arc::new(llm);
        let staging: Arc<dyn StagingStore> = store.clone();

        let service = Arc::new(ClassificationService::new(
            Arc::new(CompositeFileLoader::with_default_adapters()),
            staging,
            ClassifierGateway::new(Arc::clone(&llm), 4),
            RoutingAdvisor::default(),
            policy,
        ));

        Self {
            service,
            llm,
            store,
            _dir: dir,
        }
    }

    pub async fn stage(&self, filename: &str, content_type: &str, data: &[u8]) -> DocumentUpload {
        let path = StoragePath::new(&DocumentId::new(), filename);
        let byte_stream = Box::pin(stream::iter(vec![Ok(Bytes::copy_from_slice(data))]));
        let size_bytes = self.store.store(&path, byte_stream).await.unwrap();

        DocumentUpload {
            path,
            filename: filename.to_string(),
            content_type: content_type.to_string(),
            size_bytes,
        }
    }

    pub async fn is_staged(&self, upload: &DocumentUpload) -> bool {
        self.store.fetch(&upload.path).await.is_ok()
    }
}
