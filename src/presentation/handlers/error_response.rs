use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::application::services::{ClassificationError, ErrorKind};

#[derive(Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: ErrorBody,
}

#[derive(Serialize)]
pub struct ErrorBody {
    pub kind: &'static str,
    pub message: String,
}

pub fn error_response(status: StatusCode, kind: ErrorKind, message: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorResponse {
            success: false,
            error: ErrorBody {
                kind: kind.as_str(),
                message: message.into(),
            },
        }),
    )
        .into_response()
}

pub fn status_for(kind: ErrorKind) -> StatusCode {
    match kind {
        ErrorKind::InvalidInput | ErrorKind::SourceUnavailable => StatusCode::BAD_REQUEST,
        ErrorKind::UnsupportedFormat => StatusCode::UNSUPPORTED_MEDIA_TYPE,
        ErrorKind::EmptyContent | ErrorKind::ExtractionFailure => StatusCode::UNPROCESSABLE_ENTITY,
        ErrorKind::ClassificationUnavailable => StatusCode::SERVICE_UNAVAILABLE,
        ErrorKind::InternalFailure => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl IntoResponse for ClassificationError {
    fn into_response(self) -> Response {
        let kind = self.kind();
        let status = status_for(kind);

        let message = match &self {
            ClassificationError::Internal(detail) => {
                tracing::error!(detail = %detail, "Internal classification failure");
                "internal error".to_string()
            }
            other => other.to_string(),
        };

        if status.is_server_error() {
            tracing::error!(kind = kind.as_str(), error = %message, "Classification request failed");
        } else {
            tracing::warn!(kind = kind.as_str(), error = %message, "Classification request rejected");
        }

        error_response(status, kind, message)
    }
}
