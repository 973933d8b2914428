use axum::Json;
use axum::extract::State;
use serde::Serialize;

use crate::application::ports::{FileLoader, LlmClient};
use crate::domain::{Department, DocumentType};
use crate::presentation::state::AppState;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoriesResponse {
    pub document_types: Vec<&'static str>,
    pub departments: Vec<DepartmentEntry>,
    pub confidence_thresholds: Thresholds,
    pub max_file_size_bytes: u64,
    pub allowed_content_types: Vec<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentEntry {
    pub id: &'static str,
    pub display_name: &'static str,
}

#[derive(Serialize)]
pub struct Thresholds {
    pub high: f64,
    pub medium: f64,
}

/// Lists the labels the classifier can return and the limits uploads must respect.
pub async fn categories_handler<F, L>(State(state): State<AppState<F, L>>) -> Json<CategoriesResponse>
where
    F: FileLoader + ?Sized + 'static,
    L: LlmClient + ?Sized + 'static,
{
    let service = &state.classification_service;
    let advisor = service.routing_advisor();
    let policy = service.policy();

    Json(CategoriesResponse {
        document_types: DocumentType::ALL.iter().map(DocumentType::as_str).collect(),
        departments: Department::ALL
            .iter()
            .map(|d| DepartmentEntry {
                id: d.as_str(),
                display_name: d.display_name(),
            })
            .collect(),
        confidence_thresholds: Thresholds {
            high: advisor.high_threshold(),
            medium: advisor.medium_threshold(),
        },
        max_file_size_bytes: policy.max_file_size_bytes,
        allowed_content_types: policy.allowed_content_types.clone(),
    })
}
