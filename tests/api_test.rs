mod common;

use std::sync::Arc;

use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;

use docroute::application::ports::StagingStore;
use docroute::infrastructure::llm::MockLlmClient;
use docroute::presentation::{AppState, create_router};

use common::{Harness, INVOICE_REPLY};

const BOUNDARY: &str = "docroute-test-boundary";

fn create_test_app(harness: &Harness) -> axum::Router {
    let staging_store: Arc<dyn StagingStore> = harness.store.clone();
    let state = AppState {
        classification_service: Arc::clone(&harness.service),
        staging_store,
    };

    create_router(state)
}

fn multipart_body(field: &str, filename: &str, content_type: &str, data: &[u8]) -> Body {
    let mut body = Vec::new();
    body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
    body.extend_from_slice(
        format!("Content-Disposition: form-data; name=\"{field}\"; filename=\"{filename}\"\r\n")
            .as_bytes(),
    );
    body.extend_from_slice(format!("Content-Type: {content_type}\r\n\r\n").as_bytes());
    body.extend_from_slice(data);
    body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());
    Body::from(body)
}

fn document_request(body: Body) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/v1/classify/document")
        .header(
            "content-type",
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(body)
        .unwrap()
}

fn text_request(body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/v1/classify/text")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn json_body(response: axum::response::Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn given_running_server_when_health_check_then_returns_ok() {
    let harness = Harness::new(MockLlmClient::new(INVOICE_REPLY));
    let app = create_test_app(&harness);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn given_invoice_text_when_classifying_text_then_returns_routed_result() {
    let harness = Harness::new(MockLlmClient::new(INVOICE_REPLY));
    let app = create_test_app(&harness);

    let response = app
        .oneshot(text_request(r#"{"text": "Invoice #123 Amount due: $500"}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["documentType"], "invoice");
    assert_eq!(body["data"]["department"], "finance");
    assert_eq!(body["data"]["confidenceLevel"], "high");
    assert_eq!(
        body["data"]["routingRecommendation"],
        "Recommended for automatic routing to Finance Department"
    );
    assert_eq!(body["data"]["metadata"]["source"], "text");
    assert_eq!(body["data"]["metadata"]["textLength"], 29);
}

#[tokio::test]
async fn given_blank_text_when_classifying_text_then_returns_bad_request() {
    let harness = Harness::new(MockLlmClient::new(INVOICE_REPLY));
    let app = create_test_app(&harness);

    let response = app.oneshot(text_request(r#"{"text": "   "}"#)).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = json_body(response).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["error"]["kind"], "invalid_input");
    assert_eq!(harness.llm.call_count(), 0);
}

#[tokio::test]
async fn given_malformed_json_when_classifying_text_then_returns_bad_request() {
    let harness = Harness::new(MockLlmClient::new(INVOICE_REPLY));
    let app = create_test_app(&harness);

    let response = app.oneshot(text_request("{not json")).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = json_body(response).await;
    assert_eq!(body["error"]["kind"], "invalid_input");
}

#[tokio::test]
async fn given_unreachable_llm_when_classifying_text_then_returns_service_unavailable() {
    let harness = Harness::new(MockLlmClient::failing());
    let app = create_test_app(&harness);

    let response = app
        .oneshot(text_request(r#"{"text": "Quarterly report"}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    let body = json_body(response).await;
    assert_eq!(body["error"]["kind"], "classification_unavailable");
}

#[tokio::test]
async fn given_text_upload_when_classifying_document_then_returns_document_metadata() {
    let harness = Harness::new(MockLlmClient::new(INVOICE_REPLY));
    let app = create_test_app(&harness);

    let body = multipart_body(
        "document",
        "invoice.txt",
        "text/plain",
        b"Invoice #123 Amount due: $500",
    );
    let response = app.oneshot(document_request(body)).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["data"]["documentType"], "invoice");
    assert_eq!(body["data"]["metadata"]["source"], "document");
    assert_eq!(body["data"]["metadata"]["originalName"], "invoice.txt");
    assert_eq!(body["data"]["metadata"]["contentType"], "text/plain");
    assert_eq!(body["data"]["metadata"]["sizeBytes"], 29);
    assert_eq!(body["data"]["metadata"]["truncated"], false);
}

#[tokio::test]
async fn given_disallowed_upload_type_when_classifying_document_then_returns_bad_request() {
    let harness = Harness::new(MockLlmClient::new(INVOICE_REPLY));
    let app = create_test_app(&harness);

    let body = multipart_body("document", "scan.png", "image/png", b"\x89PNG");
    let response = app.oneshot(document_request(body)).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(harness.llm.call_count(), 0);
}

#[tokio::test]
async fn given_empty_upload_when_classifying_document_then_returns_bad_request() {
    let harness = Harness::new(MockLlmClient::new(INVOICE_REPLY));
    let app = create_test_app(&harness);

    let body = multipart_body("document", "empty.txt", "text/plain", b"");
    let response = app.oneshot(document_request(body)).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn given_corrupt_pdf_when_classifying_document_then_returns_unprocessable() {
    let harness = Harness::new(MockLlmClient::new(INVOICE_REPLY));
    let app = create_test_app(&harness);

    let body = multipart_body("document", "broken.pdf", "application/pdf", b"not a pdf");
    let response = app.oneshot(document_request(body)).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = json_body(response).await;
    assert_eq!(body["error"]["kind"], "extraction_failure");
}

#[tokio::test]
async fn given_categories_request_when_listing_then_returns_labels_and_limits() {
    let harness = Harness::new(MockLlmClient::new(INVOICE_REPLY));
    let app = create_test_app(&harness);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/v1/classify/categories")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["documentTypes"].as_array().unwrap().len(), 7);
    assert_eq!(body["departments"].as_array().unwrap().len(), 5);
    assert_eq!(body["departments"][0]["id"], "finance");
    assert_eq!(body["departments"][0]["displayName"], "Finance Department");
    assert_eq!(body["confidenceThresholds"]["high"], 0.8);
    assert_eq!(body["confidenceThresholds"]["medium"], 0.6);
}

#[tokio::test]
async fn given_request_without_id_when_any_endpoint_then_response_contains_request_id() {
    let harness = Harness::new(MockLlmClient::new(INVOICE_REPLY));
    let app = create_test_app(&harness);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert!(response.headers().contains_key("x-request-id"));
}

#[tokio::test]
async fn given_request_with_id_when_any_endpoint_then_response_echoes_it() {
    let harness = Harness::new(MockLlmClient::new(INVOICE_REPLY));
    let app = create_test_app(&harness);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .header("x-request-id", "trace-42")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.headers()["x-request-id"], "trace-42");
}
