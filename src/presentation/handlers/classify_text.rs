use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use crate::application::ports::{FileLoader, LlmClient};
use crate::application::services::ErrorKind;
use crate::presentation::state::AppState;

use super::classify_document::ClassificationResponse;
use super::error_response::error_response;

#[derive(Debug, Deserialize)]
pub struct ClassifyTextRequest {
    #[serde(default)]
    pub text: String,
}

#[tracing::instrument(skip(state, payload))]
pub async fn classify_text_handler<F, L>(
    State(state): State<AppState<F, L>>,
    payload: Result<Json<ClassifyTextRequest>, JsonRejection>,
) -> Response
where
    F: FileLoader + ?Sized + 'static,
    L: LlmClient + ?Sized + 'static,
{
    let Json(request) = match payload {
        Ok(p) => p,
        Err(rejection) => {
            tracing::warn!(error = %rejection, "Rejected classify text body");
            return error_response(
                rejection.status(),
                ErrorKind::InvalidInput,
                rejection.body_text(),
            );
        }
    };

    match state.classification_service.classify_text(&request.text).await {
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
