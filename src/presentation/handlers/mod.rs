mod categories;
mod classify_document;
mod classify_text;
mod error_response;
mod health;

pub use categories::categories_handler;
pub use classify_document::{ClassificationResponse, DOCUMENT_FIELD, classify_document_handler};
pub use classify_text::{ClassifyTextRequest, classify_text_handler};
pub use error_response::{ErrorResponse, error_response, status_for};
pub use health::health_handler;
