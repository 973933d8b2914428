use std::sync::Arc;

use tokio::sync::Semaphore;

use crate::application::ports::LlmClient;
use crate::domain::{
    ClassificationCandidate, ClassificationOutcome, Department, DocumentType, ExtractedText,
    FallbackReason,
};

use super::classification_error::ClassificationError;

/// Sends document text to the model and turns its reply into a [`ClassificationOutcome`].
///
/// A reply without a decodable JSON object is not an error: it becomes
/// [`ClassificationOutcome::Fallback`]. Only a failed model call is reported as
/// [`ClassificationError::ClassificationUnavailable`].
pub struct ClassifierGateway<L: ?Sized>
where
    L: LlmClient,
{
    llm_client: Arc<L>,
    permits: Arc<Semaphore>,
}

impl<L: ?Sized> ClassifierGateway<L>
where
    L: LlmClient,
{
    pub fn new(llm_client: Arc<L>, max_concurrent_requests: usize) -> Self {
        Self {
            llm_client,
            permits: Arc::new(Semaphore::new(max_concurrent_requests.max(1))),
        }
    }

    #[tracing::instrument(skip(self, text), fields(text_length = text.as_str().len()))]
    pub async fn classify(
        &self,
        text: &ExtractedText,
    ) -> Result<ClassificationOutcome, ClassificationError> {
        let prompt = build_prompt(text.as_str());

        let reply = {
            let _permit = self.permits.acquire().await.map_err(|_| {
                ClassificationError::Internal("classification capacity closed".to_string())
            })?;

            self.llm_client.complete(&prompt).await.map_err(|e| {
                tracing::error!(error = %e, "Classification request failed");
                ClassificationError::ClassificationUnavailable(e)
            })?
        };

        let outcome = parse_reply(&reply);
        if let ClassificationOutcome::Fallback(reason) = &outcome {
            tracing::warn!(
                ?reason,
                reply_length = reply.len(),
                "Model reply was not a JSON classification, using fallback"
            );
        }

        Ok(outcome)
    }
}

pub fn build_prompt(text: &str) -> String {
    let document_types = DocumentType::ALL
        .iter()
        .map(DocumentType::as_str)
        .collect::<Vec<_>>()
        .join(", ");
    let departments = Department::ALL
        .iter()
        .map(Department::as_str)
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        r#"You are a document classification assistant for a business document routing system.
Analyze the document below, decide what kind of document it is and which department should handle it.

Document types: {document_types}
Departments: {departments}

Respond with a single JSON object and nothing else, using exactly this schema:
{{
  "documentType": "<one of the document types>",
  "confidence": <number between 0 and 1>,
  "department": "<one of the departments>",
  "routingConfidence": <number between 0 and 1>,
  "extractedData": {{ "<field name>": "<value>" }},
  "reasoning": "<one or two sentences explaining the decision>",
  "suggestedActions": ["<next step>"]
}}

Put key facts such as amounts, dates, parties and reference numbers in extractedData when present.

Document content:
{text}"#
    )
}

/// Interprets a raw model reply. Never fails.
pub fn parse_reply(reply: &str) -> ClassificationOutcome {
    let Some(json) = find_json_object(reply) else {
        return ClassificationOutcome::Fallback(FallbackReason::NoJsonObject);
    };

    match serde_json::from_str::<ClassificationCandidate>(json) {
        Ok(candidate) => ClassificationOutcome::Candidate(candidate),
        Err(e) => ClassificationOutcome::Fallback(FallbackReason::InvalidJson(e.to_string())),
    }
}

/// Returns the first balanced `{ ... }` span in `reply`, skipping braces inside
/// JSON string literals.
pub fn find_json_object(reply: &str) -> Option<&str> {
    let start = reply.find('{')?;
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (offset, ch) in reply[start..].char_indices() {
        if in_string {
            if escaped {
                escaped = false;
            } else if ch == '\\' {
                escaped = true;
            } else if ch == '"' {
                in_string = false;
            }
            continue;
        }

        match ch {
            '"' => in_string = true,
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(&reply[start..start + offset + 1]);
                }
            }
            _ => {}
        }
    }

    None
}
