mod classification;
mod classification_metadata;
mod confidence_level;
mod department;
mod document;
mod document_id;
mod document_type;
mod extracted_text;
mod storage_path;

pub use classification::{
    ClassificationCandidate, ClassificationOutcome, ClassificationResult, FallbackReason,
    SanitizedClassification,
};
pub use classification_metadata::{ClassificationMetadata, ClassifiedDocument, RequestMetadata};
pub use confidence_level::ConfidenceLevel;
pub use department::Department;
pub use document::{ContentType, Document};
pub use document_id::DocumentId;
pub use document_type::DocumentType;
pub use extracted_text::ExtractedText;
pub use storage_path::StoragePath;
