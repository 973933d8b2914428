use serde_json::{Map, Value};

use crate::domain::{
    ClassificationOutcome, Department, DocumentType, SanitizedClassification,
};

const DEFAULT_CONFIDENCE: f64 = 0.5;
const DEFAULT_REASONING: &str = "Classification completed";

/// Enforces the output schema on an untrusted candidate. Total: every field has a default.
pub fn sanitize(outcome: ClassificationOutcome) -> SanitizedClassification {
    let candidate = outcome.into_candidate();

    SanitizedClassification {
        document_type: candidate
            .document_type
            .as_ref()
            .and_then(Value::as_str)
            .and_then(DocumentType::from_label)
            .unwrap_or(DocumentType::Other),
        confidence: coerce_confidence(candidate.confidence.as_ref()),
        department: candidate
            .department
            .as_ref()
            .and_then(Value::as_str)
            .and_then(Department::from_label)
            .unwrap_or(Department::General),
        routing_confidence: coerce_confidence(candidate.routing_confidence.as_ref()),
        extracted_data: match candidate.extracted_data {
            Some(Value::Object(map)) => map,
            _ => Map::new(),
        },
        reasoning: match candidate.reasoning {
            Some(Value::String(text)) if !text.trim().is_empty() => text,
            _ => DEFAULT_REASONING.to_string(),
        },
        suggested_actions: string_list(candidate.suggested_actions),
    }
}

fn coerce_confidence(value: Option<&Value>) -> f64 {
    let parsed = match value {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        _ => None,
    };

    match parsed {
        Some(c) if (0.0..=1.0).contains(&c) => c,
        _ => DEFAULT_CONFIDENCE,
    }
}

fn string_list(value: Option<Value>) -> Vec<String> {
    let Some(Value::Array(items)) = value else {
        return Vec::new();
    };

    items
        .into_iter()
        .map(|item| match item {
            Value::String(s) => Some(s),
            _ => None,
        })
        .collect::<Option<Vec<_>>>()
        .unwrap_or_default()
}
