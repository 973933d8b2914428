/// Text recovered from a document or supplied directly by a caller.
///
/// Never blank: construction fails when the input is empty after trimming.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedText {
    text: String,
    original_length: usize,
    truncated: bool,
}

impl ExtractedText {
    pub fn new(text: impl Into<String>) -> Option<Self> {
        let text = text.into();
        if text.trim().is_empty() {
            return None;
        }
        let original_length = text.chars().count();
        Some(Self {
            text,
            original_length,
            truncated: false,
        })
    }

    /// Cuts the text to `max_chars` characters and appends `marker` when it is longer.
    /// Text at or under the limit is returned unchanged.
    pub fn truncate(self, max_chars: usize, marker: &str) -> Self {
        match self.text.char_indices().nth(max_chars) {
            Some((byte_index, _)) => {
                let mut text = String::with_capacity(byte_index + marker.len());
                text.push_str(&self.text[..byte_index]);
                text.push_str(marker);
                Self {
                    text,
                    original_length: self.original_length,
                    truncated: true,
                }
            }
            None => self,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Length in characters of the text before any truncation.
    pub fn original_length(&self) -> usize {
        self.original_length
    }

    pub fn is_truncated(&self) -> bool {
        self.truncated
    }
}

impl AsRef<str> for ExtractedText {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

impl PartialEq<&str> for ExtractedText {
    fn eq(&self, other: &&str) -> bool {
        self.text == *other
    }
}
