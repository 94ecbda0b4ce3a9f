use serde::{de, Deserialize, Deserializer, Serialize};
use std::fmt;

use super::diaper::{DiaperEvent, DIAPER_TAG_FIELD};
use super::feeding::FeedingSession;

/// An entry of a day's feeding log.
///
/// On disk both variants are plain objects; a diaper change is recognised
/// solely by the presence of the `dogadjaj` field.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum LogEntry {
    Feeding(FeedingSession),
    Diaper(DiaperEvent),
}

impl LogEntry {
    /// Time the entry happened, if recorded.
    pub fn start(&self) -> Option<&str> {
        match self {
            LogEntry::Feeding(session) => Some(session.start.as_str()),
            LogEntry::Diaper(event) => event.start.as_deref(),
        }
    }

    pub fn comment(&self) -> Option<&str> {
        match self {
            LogEntry::Feeding(session) => session.comment.as_deref(),
            LogEntry::Diaper(event) => event.comment.as_deref(),
        }
    }

    pub fn is_diaper(&self) -> bool {
        matches!(self, LogEntry::Diaper(_))
    }
}

impl From<FeedingSession> for LogEntry {
    fn from(session: FeedingSession) -> Self {
        LogEntry::Feeding(session)
    }
}

impl From<DiaperEvent> for LogEntry {
    fn from(event: DiaperEvent) -> Self {
        LogEntry::Diaper(event)
    }
}

impl<'de> Deserialize<'de> for LogEntry {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = serde_json::Value::deserialize(deserializer)?;
        if !value.is_object() {
            return Err(de::Error::custom("log entry must be an object"));
        }

        if value.get(DIAPER_TAG_FIELD).is_some() {
            serde_json::from_value(value)
                .map(LogEntry::Diaper)
                .map_err(de::Error::custom)
        } else {
            serde_json::from_value(value)
                .map(LogEntry::Feeding)
                .map_err(de::Error::custom)
        }
    }
}

impl fmt::Display for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogEntry::Feeding(session) => write!(f, "{}", session),
            LogEntry::Diaper(event) => {
                write!(
                    f,
                    "{}        {} diaper",
                    event.start.as_deref().unwrap_or("--:--"),
                    event.kind
                )?;
                if let Some(comment) = event.comment.as_deref() {
                    write!(f, "  {}", comment)?;
                }
                Ok(())
            }
        }
    }
}
