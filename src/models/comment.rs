use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Free-text `komentar` as it appears on disk.
///
/// Records written by different app versions either omit the field or store
/// `null` when there is no comment. Both spellings are kept so a record is
/// written back exactly as it was read.
///
/// Fields of this type need `#[serde(default, skip_serializing_if = "Comment::is_absent")]`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Comment {
    /// Field not present
    #[default]
    Absent,
    /// Field present as `null`
    Null,
    Text(String),
}

impl Comment {
    pub fn as_deref(&self) -> Option<&str> {
        match self {
            Comment::Text(text) => Some(text.as_str()),
            Comment::Absent | Comment::Null => None,
        }
    }

    /// True when there is no comment text, whichever way that is stored.
    pub fn is_empty(&self) -> bool {
        self.as_deref().is_none()
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, Comment::Absent)
    }
}

impl From<String> for Comment {
    fn from(text: String) -> Self {
        Comment::Text(text)
    }
}

impl From<Option<String>> for Comment {
    fn from(text: Option<String>) -> Self {
        text.map_or(Comment::Null, Comment::Text)
    }
}

impl fmt::Display for Comment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_deref().unwrap_or_default())
    }
}

impl Serialize for Comment {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Comment::Text(text) => serializer.serialize_str(text),
            Comment::Absent | Comment::Null => serializer.serialize_none(),
        }
    }
}

impl<'de> Deserialize<'de> for Comment {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Option::<String>::deserialize(deserializer).map(Comment::from)
    }
}
