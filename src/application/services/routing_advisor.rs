use crate::domain::{ClassificationResult, ConfidenceLevel, Department, SanitizedClassification};

pub const DEFAULT_HIGH_CONFIDENCE: f64 = 0.8;
pub const DEFAULT_MEDIUM_CONFIDENCE: f64 = 0.6;

/// Derives the confidence label and the routing message from sanitized scores.
#[derive(Debug, Clone, Copy)]
pub struct RoutingAdvisor {
    high_threshold: f64,
    medium_threshold: f64,
}

impl Default for RoutingAdvisor {
    fn default() -> Self {
        Self::new(DEFAULT_HIGH_CONFIDENCE, DEFAULT_MEDIUM_CONFIDENCE)
    }
}

impl RoutingAdvisor {
    pub fn new(high_threshold: f64, medium_threshold: f64) -> Self {
        Self {
            high_threshold,
            medium_threshold,
        }
    }

    pub fn high_threshold(&self) -> f64 {
        self.high_threshold
    }

    pub fn medium_threshold(&self) -> f64 {
        self.medium_threshold
    }

    pub fn confidence_level(&self, confidence: f64) -> ConfidenceLevel {
        if confidence >= self.high_threshold {
            ConfidenceLevel::High
        } else if confidence >= self.medium_threshold {
            ConfidenceLevel::Medium
        } else {
            ConfidenceLevel::Low
        }
    }

    /// Unknown department labels are routed to general administration.
    pub fn routing_recommendation(&self, department: &str, routing_confidence: f64) -> String {
        let name = Department::from_label(department)
            .unwrap_or(Department::General)
            .display_name();

        match self.confidence_level(routing_confidence) {
            ConfidenceLevel::High => format!("Recommended for automatic routing to {name}"),
            ConfidenceLevel::Medium => {
                format!("Suggested routing to {name} (manual review recommended)")
            }
            ConfidenceLevel::Low => {
                format!("Manual review required - suggested department: {name}")
            }
        }
    }

    pub fn advise(&self, sanitized: SanitizedClassification) -> ClassificationResult {
        let confidence_level = self.confidence_level(sanitized.confidence);
        let recommendation = self
            .routing_recommendation(sanitized.department.as_str(), sanitized.routing_confidence);
        ClassificationResult::new(sanitized, confidence_level, recommendation)
    }
}
