//! Validation of restore payloads.
//!
//! A payload is checked structurally first: an object of date -> object, each
//! with `dojenje` and `vaga` arrays. Entries are then decoded into the typed
//! model so a stored dataset is always readable.

use serde::de::DeserializeOwned;
use serde_json::Value;

use super::ValidationError;
use crate::models::{DayData, DayKey, LogEntry, TrackingData, WeightMeasurement};

const FEEDING_FIELD: &str = "dojenje";
const WEIGHT_FIELD: &str = "vaga";

/// Validates a backup payload and converts it into tracking data.
pub fn validate_backup(payload: Value) -> Result<TrackingData, ValidationError> {
    let Value::Object(days) = payload else {
        return Err(ValidationError::NotAnObject);
    };

    let mut data = TrackingData::new();

    for (date, day) in days {
        let Value::Object(mut day) = day else {
            return Err(ValidationError::DayNotObject(date));
        };

        let feeding = take_log(&mut day, &date, FEEDING_FIELD)?;
        let weight = take_log(&mut day, &date, WEIGHT_FIELD)?;

        let key: DayKey = date
            .parse()
            .map_err(|_| ValidationError::InvalidDate(date.clone()))?;

        let day_data = DayData {
            feeding_log: decode_entries::<LogEntry>(feeding, &date, FEEDING_FIELD)?,
            weight_log: decode_entries::<WeightMeasurement>(weight, &date, WEIGHT_FIELD)?,
        };

        data.insert(key, day_data);
    }

    Ok(data)
}

fn take_log(
    day: &mut serde_json::Map<String, Value>,
    date: &str,
    field: &'static str,
) -> Result<Vec<Value>, ValidationError> {
    match day.remove(field) {
        Some(Value::Array(entries)) => Ok(entries),
        _ => Err(ValidationError::MissingLog {
            date: date.to_string(),
            field,
        }),
    }
}

fn decode_entries<T: DeserializeOwned>(
    entries: Vec<Value>,
    date: &str,
    field: &'static str,
) -> Result<Vec<T>, ValidationError> {
    entries
        .into_iter()
        .enumerate()
        .map(|(index, entry)| {
            serde_json::from_value(entry).map_err(|e| ValidationError::MalformedEntry {
                date: date.to_string(),
                field,
                index,
                reason: e.to_string(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DiaperKind, Side};
    use serde_json::json;

    #[test]
    fn test_valid_payload() {
        let payload = json!({
            "5.3.2024": {
                "dojenje": [
                    {"start": "14:00", "end": "14:20", "strana": "L", "komentar": null},
                    {"dogadjaj": "pelena", "vrsta": "popiškena", "start": "14:25", "end": "14:25"}
                ],
                "vaga": [{"vrijeme": "15:00", "težina": "4.2", "komentar": null}]
            },
            "6.3.2024": {"dojenje": [], "vaga": []}
        });

        let data = validate_backup(payload).unwrap();
        assert_eq!(data.len(), 2);

        let day = data.get(&"5.3.2024".parse().unwrap()).unwrap();
        match &day.feeding_log[0] {
            LogEntry::Feeding(session) => assert_eq!(session.side, Some(Side::Left)),
            other => panic!("unexpected entry {:?}", other),
        }
        match &day.feeding_log[1] {
            LogEntry::Diaper(event) => assert_eq!(event.kind, DiaperKind::Wet),
            other => panic!("unexpected entry {:?}", other),
        }
        assert_eq!(day.weight_log[0].weight, "4.2");
    }

    #[test]
    fn test_empty_object_is_valid() {
        assert!(validate_backup(json!({})).unwrap().is_empty());
    }

    #[test]
    fn test_rejects_non_object() {
        assert_eq!(
            validate_backup(json!([1, 2])).unwrap_err(),
            ValidationError::NotAnObject
        );
        assert_eq!(
            validate_backup(json!("text")).unwrap_err(),
            ValidationError::NotAnObject
        );
    }

    #[test]
    fn test_rejects_day_that_is_not_an_object() {
        let err = validate_backup(json!({"5.3.2024": [1]})).unwrap_err();
        assert_eq!(err, ValidationError::DayNotObject("5.3.2024".to_string()));
    }

    #[test]
    fn test_rejects_missing_or_non_array_logs() {
        let err = validate_backup(json!({"5.3.2024": {"vaga": []}})).unwrap_err();
        assert_eq!(
            err,
            ValidationError::MissingLog {
                date: "5.3.2024".to_string(),
                field: "dojenje"
            }
        );

        let err = validate_backup(json!({"5.3.2024": {"dojenje": [], "vaga": {}}})).unwrap_err();
        assert_eq!(
            err,
            ValidationError::MissingLog {
                date: "5.3.2024".to_string(),
                field: "vaga"
            }
        );
    }

    #[test]
    fn test_rejects_bad_date_key() {
        let err = validate_backup(json!({"2024-03-05": {"dojenje": [], "vaga": []}})).unwrap_err();
        assert_eq!(err, ValidationError::InvalidDate("2024-03-05".to_string()));
    }

    #[test]
    fn test_reports_malformed_entry_position() {
        let payload = json!({
            "5.3.2024": {
                "dojenje": [
                    {"start": "14:00", "end": "14:20", "strana": "L"},
                    {"dogadjaj": "pelena", "vrsta": "unknown"}
                ],
                "vaga": []
            }
        });

        match validate_backup(payload).unwrap_err() {
            ValidationError::MalformedEntry {
                date, field, index, ..
            } => {
                assert_eq!(date, "5.3.2024");
                assert_eq!(field, "dojenje");
                assert_eq!(index, 1);
            }
            other => panic!("unexpected error {:?}", other),
        }
    }

    #[test]
    fn test_rejects_unknown_side_spelling() {
        let payload = json!({
            "5.3.2024": {
                "dojenje": [{"start": "14:00", "end": "14:20", "strana": "left"}],
                "vaga": []
            }
        });

        assert!(matches!(
            validate_backup(payload),
            Err(ValidationError::MalformedEntry { index: 0, field: "dojenje", .. })
        ));
    }
}
