//! Tabular export of the feeding log.
//!
//! Weight measurements are not part of the table.

use serde::Serialize;
use std::io::Write;

use crate::models::{LogEntry, TrackingData};

/// One exported row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EventRow {
    #[serde(rename = "Date")]
    pub date: String,
    #[serde(rename = "Time")]
    pub time: String,
    #[serde(rename = "Event Type")]
    pub event_type: &'static str,
    #[serde(rename = "Details")]
    pub details: String,
    #[serde(rename = "Comment")]
    pub comment: String,
}

impl EventRow {
    fn from_entry(date: String, entry: &LogEntry) -> Self {
        match entry {
            LogEntry::Diaper(event) => Self {
                date,
                time: event.start.clone().unwrap_or_else(|| "-".to_string()),
                event_type: "Diaper",
                details: event.kind.to_string(),
                comment: event.comment.to_string(),
            },
            LogEntry::Feeding(session) => Self {
                date,
                time: session.start.clone(),
                event_type: "Feeding",
                details: session.side_label(),
                comment: session.comment.to_string(),
            },
        }
    }
}

/// Flattens every day's feeding log, days in chronological order.
pub fn event_rows(data: &TrackingData) -> Vec<EventRow> {
    data.iter()
        .flat_map(|(day, day_data)| {
            day_data
                .feeding_log
                .iter()
                .map(move |entry| EventRow::from_entry(day.to_string(), entry))
        })
        .collect()
}

/// Writes the rows as CSV with a header line.
pub fn write_csv<W: Write>(rows: &[EventRow], writer: W) -> Result<(), csv::Error> {
    let mut wtr = csv::Writer::from_writer(writer);
    if rows.is_empty() {
        wtr.write_record(["Date", "Time", "Event Type", "Details", "Comment"])?;
    }
    for row in rows {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}
