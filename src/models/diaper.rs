use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;

use super::comment::Comment;

/// Wire name of the field that marks a log entry as a diaper change.
pub const DIAPER_TAG_FIELD: &str = "dogadjaj";

/// Classification of a diaper change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DiaperKind {
    #[serde(rename = "popiškena")]
    Wet,
    #[serde(rename = "pokakana")]
    Soiled,
    #[serde(rename = "both")]
    Both,
}

impl fmt::Display for DiaperKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiaperKind::Wet => write!(f, "Wet"),
            DiaperKind::Soiled => write!(f, "Poopy"),
            DiaperKind::Both => write!(f, "Both"),
        }
    }
}

impl FromStr for DiaperKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "wet" => Ok(DiaperKind::Wet),
            "poopy" | "soiled" => Ok(DiaperKind::Soiled),
            "both" => Ok(DiaperKind::Both),
            _ => Err(format!(
                "Invalid diaper type '{}'. Valid options: wet, poopy, both",
                s
            )),
        }
    }
}

/// Fixed discriminant value carried by every diaper entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DiaperTag {
    #[default]
    #[serde(rename = "pelena")]
    Diaper,
}

/// One diaper change. Instantaneous: `start` and `end` are equal when recorded.
/// Unrecognised fields are kept in `extra`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiaperEvent {
    #[serde(rename = "dogadjaj")]
    pub tag: DiaperTag,
    #[serde(rename = "vrsta")]
    pub kind: DiaperKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<String>,
    #[serde(rename = "komentar", default, skip_serializing_if = "Comment::is_absent")]
    pub comment: Comment,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl DiaperEvent {
    pub fn new(kind: DiaperKind, time: impl Into<String>) -> Self {
        let time = time.into();
        Self {
            tag: DiaperTag::Diaper,
            kind,
            start: Some(time.clone()),
            end: Some(time),
            comment: Comment::Absent,
            extra: Map::new(),
        }
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Comment::Text(comment.into());
        self
    }

    /// Message shown after the change was saved.
    pub fn recorded_message(&self) -> &'static str {
        match self.kind {
            DiaperKind::Wet => "Wet diaper recorded",
            DiaperKind::Soiled => "Poopy diaper recorded",
            DiaperKind::Both => "Both wet and poopy diaper recorded",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diaper_kind_display() {
        assert_eq!(format!("{}", DiaperKind::Wet), "Wet");
        assert_eq!(format!("{}", DiaperKind::Soiled), "Poopy");
        assert_eq!(format!("{}", DiaperKind::Both), "Both");
    }

    #[test]
    fn test_diaper_kind_from_str() {
        assert_eq!(DiaperKind::from_str("wet").unwrap(), DiaperKind::Wet);
        assert_eq!(DiaperKind::from_str("Poopy").unwrap(), DiaperKind::Soiled);
        assert_eq!(DiaperKind::from_str("BOTH").unwrap(), DiaperKind::Both);
        assert!(DiaperKind::from_str("dry").is_err());
    }

    #[test]
    fn test_new_sets_start_and_end_equal() {
        let event = DiaperEvent::new(DiaperKind::Both, "09:15");
        assert_eq!(event.start.as_deref(), Some("09:15"));
        assert_eq!(event.start, event.end);
        assert!(event.comment.is_absent());
    }

    #[test]
    fn test_wire_format() {
        let event = DiaperEvent::new(DiaperKind::Wet, "14:25");
        let value = serde_json::to_value(&event).unwrap();

        assert_eq!(value["dogadjaj"], "pelena");
        assert_eq!(value["vrsta"], "popiškena");
        assert_eq!(value["start"], "14:25");
        assert!(value.get("komentar").is_none());
    }

    #[test]
    fn test_rejects_unknown_tag_value() {
        let json = r#"{"dogadjaj": "kupanje", "vrsta": "both"}"#;
        assert!(serde_json::from_str::<DiaperEvent>(json).is_err());
    }

    #[test]
    fn test_null_comment_and_unknown_fields_written_back() {
        let record = serde_json::json!({
            "dogadjaj": "pelena",
            "vrsta": "both",
            "start": "14:25",
            "end": "14:25",
            "komentar": null,
            "boja": "zelena"
        });
        let event: DiaperEvent = serde_json::from_value(record.clone()).unwrap();

        assert_eq!(event.comment, Comment::Null);
        assert_eq!(event.extra["boja"], "zelena");
        assert_eq!(serde_json::to_value(&event).unwrap(), record);
    }
}
