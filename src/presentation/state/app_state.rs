use std::sync::Arc;

use crate::application::ports::{FileLoader, LlmClient, StagingStore};
use crate::application::services::ClassificationService;

pub struct AppState<F: ?Sized, L: ?Sized>
where
    F: FileLoader,
    L: LlmClient,
{
    pub classification_service: Arc<ClassificationService<F, L>>,
    pub staging_store: Arc<dyn StagingStore>,
}

impl<F: ?Sized, L: ?Sized> Clone for AppState<F, L>
where
    F: FileLoader,
    L: LlmClient,
{
    fn clone(&self) -> Self {
        Self {
            classification_service: Arc::clone(&self.classification_service),
            staging_store: Arc::clone(&self.staging_store),
        }
    }
}
