use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

use super::comment::Comment;

/// A single weight reading. The value is kept as entered; unrecognised fields
/// are kept in `extra`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightMeasurement {
    #[serde(rename = "vrijeme")]
    pub time: String,
    #[serde(rename = "težina")]
    pub weight: String,
    #[serde(rename = "komentar", default, skip_serializing_if = "Comment::is_absent")]
    pub comment: Comment,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl WeightMeasurement {
    pub fn new(time: impl Into<String>, weight: impl Into<String>) -> Self {
        Self {
            time: time.into(),
            weight: weight.into(),
            comment: Comment::Null,
            extra: Map::new(),
        }
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Comment::Text(comment.into());
        self
    }
}

impl fmt::Display for WeightMeasurement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}  {}", self.time, self.weight)?;
        if let Some(comment) = self.comment.as_deref() {
            write!(f, "  {}", comment)?;
        }
        Ok(())
    }
}
