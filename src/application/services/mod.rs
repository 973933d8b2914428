mod classification_error;
mod classification_service;
mod classifier_gateway;
mod result_sanitizer;
mod routing_advisor;

pub use classification_error::{ClassificationError, ErrorKind};
pub use classification_service::{
    ClassificationPolicy, ClassificationService, DocumentUpload, TRUNCATION_MARKER,
};
pub use classifier_gateway::{ClassifierGateway, build_prompt, find_json_object, parse_reply};
pub use result_sanitizer::sanitize;
pub use routing_advisor::{DEFAULT_HIGH_CONFIDENCE, DEFAULT_MEDIUM_CONFIDENCE, RoutingAdvisor};
