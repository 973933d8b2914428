use axum::Json;
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::application::ports::{FileLoader, LlmClient};
use crate::application::services::{DocumentUpload, ErrorKind};
use crate::domain::{ClassifiedDocument, DocumentId, StoragePath};
use crate::presentation::state::AppState;

use super::error_response::error_response;

pub const DOCUMENT_FIELD: &str = "document";

#[derive(Serialize)]
pub struct ClassificationResponse {
    pub success: bool,
    pub data: ClassifiedDocument,
}

#[tracing::instrument(skip(state, multipart))]
pub async fn classify_document_handler<F, L>(
    State(state): State<AppState<F, L>>,
    mut multipart: Multipart,
) -> Response
where
    F: FileLoader + ?Sized + 'static,
    L: LlmClient + ?Sized + 'static,
{
    let (filename, content_type, data) = loop {
        let field = match multipart.next_field().await {
            Ok(Some(f)) => f,
            Ok(None) => {
                tracing::warn!("Classification request with no file");
                return error_response(
                    StatusCode::BAD_REQUEST,
                    ErrorKind::InvalidInput,
                    "No file uploaded",
                );
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to read multipart");
                return error_response(
                    e.status(),
                    ErrorKind::InvalidInput,
                    format!("Failed to read multipart: {}", e.body_text()),
                );
            }
        };

        if field.name() != Some(DOCUMENT_FIELD) && field.file_name().is_none() {
            continue;
        }

        let filename = field.file_name().unwrap_or("unknown").to_string();
        let content_type = field
            .content_type()
            .unwrap_or("application/octet-stream")
            .to_string();

        tracing::debug!(filename = %filename, content_type = %content_type, "Processing file upload");

        match field.bytes().await {
            Ok(d) => break (filename, content_type, d),
            Err(e) => {
                tracing::error!(error = %e, "Failed to read file bytes");
                return error_response(
                    e.status(),
                    ErrorKind::InvalidInput,
                    format!("Failed to read file: {}", e.body_text()),
                );
            }
        }
    };

    if data.is_empty() {
        return error_response(
            StatusCode::BAD_REQUEST,
            ErrorKind::InvalidInput,
            "Uploaded file is empty",
        );
    }

    let path = StoragePath::new(&DocumentId::new(), &filename);
    let byte_stream = Box::pin(futures::stream::once(async move {
        Ok::<_, std::io::Error>(data)
    }));

    let size_bytes = match state.staging_store.store(&path, byte_stream).await {
        Ok(size) => size,
        Err(e) => {
            tracing::error!(error = %e, path = %path, "Failed to stage upload");
            return error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorKind::InternalFailure,
                "Failed to store upload",
            );
        }
    };

    let upload = DocumentUpload {
        path,
        filename,
        content_type,
        size_bytes,
    };

    match state.classification_service.process_document(upload).await {
        Ok(data) => (
            StatusCode::OK,
            Json(ClassificationResponse {
                success: true,
                data,
            }),
        )
            .into_response(),
        Err(e) => e.into_response(),
    }
}
