use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use serde_json::json;

use docroute::application::ports::{LlmClient, LlmClientError};
use docroute::application::services::{
    ClassificationError, ClassifierGateway, ErrorKind, parse_reply,
};
use docroute::domain::{ClassificationCandidate, ClassificationOutcome, ExtractedText, FallbackReason};
use docroute::infrastructure::llm::MockLlmClient;

fn text(value: &str) -> ExtractedText {
    ExtractedText::new(value).unwrap()
}

#[test]
fn given_reply_without_json_when_parsing_then_falls_back() {
    let outcome = parse_reply("I am unable to determine the document type.");

    assert_eq!(
        outcome,
        ClassificationOutcome::Fallback(FallbackReason::NoJsonObject)
    );
    assert_eq!(outcome.into_candidate(), ClassificationCandidate::fallback());
}

#[test]
fn given_malformed_json_when_parsing_then_falls_back() {
    let outcomes = [
        parse_reply("{documentType: invoice}"),
        parse_reply("{\"documentType\": \"invoice\",}"),
        parse_reply("{\"documentType\": \"invoice\""),
    ];

    for outcome in outcomes {
        assert!(outcome.is_fallback());
        assert_eq!(outcome.into_candidate(), ClassificationCandidate::fallback());
    }
}

#[test]
fn given_json_surrounded_by_prose_when_parsing_then_extracts_candidate() {
    let reply = r#"Here is my answer:
{"documentType": "receipt", "confidence": 0.7, "department": "finance"}
Let me know if you need more."#;

    let ClassificationOutcome::Candidate(candidate) = parse_reply(reply) else {
        panic!("expected a candidate");
    };

    assert_eq!(candidate.document_type, Some(json!("receipt")));
    assert_eq!(candidate.confidence, Some(json!(0.7)));
    assert_eq!(candidate.routing_confidence, None);
}

#[test]
fn given_loosely_typed_fields_when_parsing_then_candidate_is_kept_for_sanitizing() {
    let outcome = parse_reply(r#"{"confidence": "high", "suggestedActions": "call"}"#);

    assert!(matches!(outcome, ClassificationOutcome::Candidate(_)));
}

#[tokio::test]
async fn given_valid_reply_when_classifying_then_returns_candidate_and_sends_text() {
    let llm = Arc::new(MockLlmClient::new(r#"{"documentType": "proposal"}"#));
    let gateway = ClassifierGateway::new(Arc::clone(&llm), 2);

    let outcome = gateway
        .classify(&text("Project proposal for Q3"))
        .await
        .unwrap();

    assert!(matches!(outcome, ClassificationOutcome::Candidate(_)));
    assert_eq!(llm.call_count(), 1);
    assert!(llm.last_prompt().unwrap().contains("Project proposal for Q3"));
}

#[tokio::test]
async fn given_failing_client_when_classifying_then_classification_unavailable() {
    let gateway = ClassifierGateway::new(Arc::new(MockLlmClient::failing()), 2);

    let error = gateway.classify(&text("anything")).await.unwrap_err();

    assert!(matches!(
        error,
        ClassificationError::ClassificationUnavailable(LlmClientError::ApiRequestFailed(_))
    ));
    assert_eq!(error.kind(), ErrorKind::ClassificationUnavailable);
}

struct SlowLlmClient {
    in_flight: AtomicUsize,
    max_in_flight: AtomicUsize,
}

#[async_trait::async_trait]
impl LlmClient for SlowLlmClient {
    async fn complete(&self, _prompt: &str) -> Result<String, LlmClientError> {
        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(now, Ordering::SeqCst);
        tokio::time::sleep(Duration::from_millis(20)).await;
        self.in_flight.fetch_sub(1, Ordering::SeqCst);
        Ok("{}".to_string())
    }
}

#[tokio::test]
async fn given_concurrency_limit_when_classifying_in_parallel_then_calls_are_bounded() {
    let llm = Arc::new(SlowLlmClient {
        in_flight: AtomicUsize::new(0),
        max_in_flight: AtomicUsize::new(0),
    });
    let gateway = Arc::new(ClassifierGateway::new(Arc::clone(&llm), 2));

    let tasks: Vec<_> = (0..6)
        .map(|i| {
            let gateway = Arc::clone(&gateway);
            tokio::spawn(async move {
                let document = text(&format!("doc {i}"));
                gateway.classify(&document).await
            })
        })
        .collect();

    for task in tasks {
        assert!(task.await.unwrap().is_ok());
    }

    assert_eq!(llm.max_in_flight.load(Ordering::SeqCst), 2);
}
