use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

use super::comment::Comment;
use super::side::Side;

/// One breastfeeding episode.
///
/// Sessions are only stored once ended, so `end` is normally set. Older records
/// may carry several sides (`strane`) or a free-text note instead of a side.
/// Fields this model does not know are kept in `extra` and written back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedingSession {
    pub start: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<String>,
    #[serde(rename = "strana", default, skip_serializing_if = "Option::is_none")]
    pub side: Option<Side>,
    #[serde(rename = "strane", default, skip_serializing_if = "Option::is_none")]
    pub sides: Option<Vec<Side>>,
    #[serde(rename = "komentar", default, skip_serializing_if = "Comment::is_absent")]
    pub comment: Comment,
    #[serde(rename = "napomena", default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl FeedingSession {
    pub fn new(start: impl Into<String>, end: impl Into<String>, side: Side) -> Self {
        Self {
            start: start.into(),
            end: Some(end.into()),
            side: Some(side),
            sides: None,
            comment: Comment::Null,
            note: None,
            extra: Map::new(),
        }
    }

    /// Session fed from several sides. A single side is stored as `strana`.
    pub fn with_sides(
        start: impl Into<String>,
        end: impl Into<String>,
        sides: Vec<Side>,
    ) -> Self {
        let mut session = Self::new(start, end, Side::Left);
        match sides.as_slice() {
            [single] => session.side = Some(*single),
            _ => {
                session.side = None;
                session.sides = Some(sides);
            }
        }
        session
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Comment::Text(comment.into());
        self
    }

    /// Side text for display and export: "Left", "Left, Right", the legacy
    /// note, or "-".
    pub fn side_label(&self) -> String {
        if let Some(side) = self.side {
            return side.to_string();
        }
        if let Some(sides) = self.sides.as_ref().filter(|s| !s.is_empty()) {
            let names: Vec<String> = sides.iter().map(Side::to_string).collect();
            return names.join(", ");
        }
        match &self.note {
            Some(note) if !note.is_empty() => note.clone(),
            _ => "-".to_string(),
        }
    }
}

impl fmt::Display for FeedingSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}-{}  Feeding ({})",
            self.start,
            self.end.as_deref().unwrap_or("?"),
            self.side_label()
        )?;
        if let Some(comment) = self.comment.as_deref() {
            write!(f, "  {}", comment)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feeding_session_new() {
        let session = FeedingSession::new("14:00", "14:20", Side::Left);

        assert_eq!(session.start, "14:00");
        assert_eq!(session.end.as_deref(), Some("14:20"));
        assert_eq!(session.side, Some(Side::Left));
        assert!(session.sides.is_none());
        assert!(session.comment.is_empty());
    }

    #[test]
    fn test_with_sides_single_collapses_to_side() {
        let session = FeedingSession::with_sides("10:00", "10:30", vec![Side::Right]);
        assert_eq!(session.side, Some(Side::Right));
        assert!(session.sides.is_none());
    }

    #[test]
    fn test_side_label() {
        let single = FeedingSession::new("10:00", "10:30", Side::Right);
        assert_eq!(single.side_label(), "Right");

        let multi =
            FeedingSession::with_sides("10:00", "10:30", vec![Side::Left, Side::Right]);
        assert_eq!(multi.side_label(), "Left, Right");

        let mut legacy = FeedingSession::new("10:00", "10:30", Side::Left);
        legacy.side = None;
        legacy.note = Some("bočica".to_string());
        assert_eq!(legacy.side_label(), "bočica");

        legacy.note = None;
        assert_eq!(legacy.side_label(), "-");
    }

    #[test]
    fn test_wire_format_keeps_null_comment() {
        let session = FeedingSession::new("14:00", "14:20", Side::Left);
        let value = serde_json::to_value(&session).unwrap();

        assert_eq!(value["strana"], "L");
        assert!(value["komentar"].is_null());
        assert!(value.get("strane").is_none());
        assert!(value.get("napomena").is_none());
    }

    #[test]
    fn test_parses_legacy_multi_side_record() {
        let json = r#"{"start": "08:00", "end": "08:40", "strane": ["L", "D"]}"#;
        let session: FeedingSession = serde_json::from_str(json).unwrap();

        assert_eq!(session.sides, Some(vec![Side::Left, Side::Right]));
        assert!(session.side.is_none());
        assert_eq!(session.comment, Comment::Absent);
    }

    #[test]
    fn test_display() {
        let session = FeedingSession::new("14:00", "14:20", Side::Left).with_comment("sleepy");
        let output = format!("{}", session);
        assert!(output.contains("14:00-14:20"));
        assert!(output.contains("Left"));
        assert!(output.contains("sleepy"));
    }

    fn round_trip(value: serde_json::Value) -> serde_json::Value {
        let session: FeedingSession = serde_json::from_value(value).unwrap();
        serde_json::to_value(&session).unwrap()
    }

    #[test]
    fn test_missing_comment_stays_missing() {
        let record = serde_json::json!({"start": "14:00", "end": "14:20", "strana": "L"});
        assert_eq!(round_trip(record.clone()), record);
    }

    #[test]
    fn test_legacy_note_record_unchanged() {
        let record = serde_json::json!({
            "start": "06:10",
            "end": "06:30",
            "napomena": "bočica",
            "komentar": null
        });
        assert_eq!(round_trip(record.clone()), record);
    }

    #[test]
    fn test_unknown_fields_are_kept() {
        let record = serde_json::json!({
            "start": "14:00",
            "end": "14:20",
            "strana": "D",
            "komentar": "calm",
            "trajanje": 20
        });
        let session: FeedingSession = serde_json::from_value(record.clone()).unwrap();

        assert_eq!(session.extra["trajanje"], 20);
        assert_eq!(serde_json::to_value(&session).unwrap(), record);
    }
}
