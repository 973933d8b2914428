use crate::application::ports::{FileLoaderError, LlmClientError};

#[derive(Debug, thiserror::Error)]
pub enum ClassificationError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("extraction: {0}")]
    Extraction(#[from] FileLoaderError),
    #[error("classification service is unavailable")]
    ClassificationUnavailable(#[source] LlmClientError),
    #[error("internal error: {0}")]
    Internal(String),
}

/// Coarse failure category for callers that need to pick a response status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidInput,
    UnsupportedFormat,
    SourceUnavailable,
    EmptyContent,
    ExtractionFailure,
    ClassificationUnavailable,
    InternalFailure,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidInput => "invalid_input",
            Self::UnsupportedFormat => "unsupported_format",
            Self::SourceUnavailable => "source_unavailable",
            Self::EmptyContent => "empty_content",
            Self::ExtractionFailure => "extraction_failure",
            Self::ClassificationUnavailable => "classification_unavailable",
            Self::InternalFailure => "internal_failure",
        }
    }
}

impl ClassificationError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidInput(_) => ErrorKind::InvalidInput,
            Self::Extraction(FileLoaderError::UnsupportedFormat(_)) => ErrorKind::UnsupportedFormat,
            Self::Extraction(FileLoaderError::SourceUnavailable(_)) => ErrorKind::SourceUnavailable,
            Self::Extraction(FileLoaderError::EmptyContent(_)) => ErrorKind::EmptyContent,
            Self::Extraction(FileLoaderError::ExtractionFailed(_)) => ErrorKind::ExtractionFailure,
            Self::ClassificationUnavailable(_) => ErrorKind::ClassificationUnavailable,
            Self::Internal(_) => ErrorKind::InternalFailure,
        }
    }
}
