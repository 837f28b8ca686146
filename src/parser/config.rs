use serde::{Deserialize, Serialize};

/// Comment prefix used when none is configured
pub const DEFAULT_COMMENT_MARKER: &str = "#";

/// Settings for the sparse label line format
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    /// Lines starting with this prefix are skipped; empty disables comments
    pub comment_marker: String,
    /// Token position always read as a label, counting from 0
    pub label_index: Option<usize>,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            comment_marker: DEFAULT_COMMENT_MARKER.to_string(),
            label_index: None,
        }
    }
}

impl ParserConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the comment prefix
    pub fn with_comment_marker(mut self, marker: impl Into<String>) -> Self {
        self.comment_marker = marker.into();
        self
    }

    /// Force the token at `index` to be a label
    pub fn with_label_index(mut self, index: usize) -> Self {
        self.label_index = Some(index);
        self
    }

    /// Load settings from a JSON document
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}
