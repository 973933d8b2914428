use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};

use super::confidence_level::ConfidenceLevel;
use super::department::Department;
use super::document_type::DocumentType;

/// Classification exactly as the model reported it. Nothing here is trusted.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassificationCandidate {
    #[serde(default)]
    pub document_type: Option<Value>,
    #[serde(default)]
    pub confidence: Option<Value>,
    #[serde(default)]
    pub department: Option<Value>,
    #[serde(default)]
    pub routing_confidence: Option<Value>,
    #[serde(default)]
    pub extracted_data: Option<Value>,
    #[serde(default)]
    pub reasoning: Option<Value>,
    #[serde(default)]
    pub suggested_actions: Option<Value>,
}

impl ClassificationCandidate {
    /// The reviewable record substituted for a reply that could not be parsed.
    pub fn fallback() -> Self {
        Self {
            document_type: Some(json!("other")),
            confidence: Some(json!(0.3)),
            department: Some(json!("general")),
            routing_confidence: Some(json!(0.3)),
            extracted_data: Some(json!({
                "note": "AI could not classify this document properly"
            })),
            reasoning: Some(json!(
                "Classification failed due to non-JSON response from AI model"
            )),
            suggested_actions: Some(json!([
                "Manual review required",
                "Check document format and content"
            ])),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FallbackReason {
    NoJsonObject,
    InvalidJson(String),
}

/// What the gateway got back from the model: a parsed candidate, or the
/// reason it had to fall back.
#[derive(Debug, Clone, PartialEq)]
pub enum ClassificationOutcome {
    Candidate(ClassificationCandidate),
    Fallback(FallbackReason),
}

impl ClassificationOutcome {
    pub fn is_fallback(&self) -> bool {
        matches!(self, Self::Fallback(_))
    }

    pub fn into_candidate(self) -> ClassificationCandidate {
        match self {
            Self::Candidate(candidate) => candidate,
            Self::Fallback(_) => ClassificationCandidate::fallback(),
        }
    }
}

/// Candidate after enum coercion, clamping and defaulting.
#[derive(Debug, Clone, PartialEq)]
pub struct SanitizedClassification {
    pub document_type: DocumentType,
    pub confidence: f64,
    pub department: Department,
    pub routing_confidence: f64,
    pub extracted_data: Map<String, Value>,
    pub reasoning: String,
    pub suggested_actions: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassificationResult {
    document_type: DocumentType,
    confidence: f64,
    confidence_level: ConfidenceLevel,
    department: Department,
    routing_confidence: f64,
    routing_recommendation: String,
    extracted_data: Map<String, Value>,
    reasoning: String,
    suggested_actions: Vec<String>,
}

impl ClassificationResult {
    pub fn new(
        sanitized: SanitizedClassification,
        confidence_level: ConfidenceLevel,
        routing_recommendation: String,
    ) -> Self {
        Self {
            document_type: sanitized.document_type,
            confidence: sanitized.confidence,
            confidence_level,
            department: sanitized.department,
            routing_confidence: sanitized.routing_confidence,
            routing_recommendation,
            extracted_data: sanitized.extracted_data,
            reasoning: sanitized.reasoning,
            suggested_actions: sanitized.suggested_actions,
        }
    }

    pub fn document_type(&self) -> DocumentType {
        self.document_type
    }

    pub fn confidence(&self) -> f64 {
        self.confidence
    }

    pub fn confidence_level(&self) -> ConfidenceLevel {
        self.confidence_level
    }

    pub fn department(&self) -> Department {
        self.department
    }

    pub fn routing_confidence(&self) -> f64 {
        self.routing_confidence
    }

    pub fn routing_recommendation(&self) -> &str {
        &self.routing_recommendation
    }

    pub fn extracted_data(&self) -> &Map<String, Value> {
        &self.extracted_data
    }

    pub fn reasoning(&self) -> &str {
        &self.reasoning
    }

    pub fn suggested_actions(&self) -> &[String] {
        &self.suggested_actions
    }
}
