use std::fmt;

use super::document_id::DocumentId;

/// Location of a staged upload inside the staging store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoragePath(String);

impl StoragePath {
    /// Builds `<document id>/<file name>`. Path separators in the client supplied
    /// name are replaced so the object always lands directly under its id.
    pub fn new(document_id: &DocumentId, filename: &str) -> Self {
        let safe_name: String = filename
            .chars()
            .map(|c| if matches!(c, '/' | '\\') { '_' } else { c })
            .collect();
        let safe_name = match safe_name.trim() {
            "" | "." | ".." => "upload".to_string(),
            name => name.to_string(),
        };
        Self(format!("{}/{}", document_id.as_uuid(), safe_name))
    }

    pub fn from_raw(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StoragePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
