use chrono::{Datelike, Local, NaiveDate};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Calendar day used to key the tracking data.
///
/// Written as `D.M.YYYY` without zero-padding, e.g. `5.3.2024`. Ordering is
/// chronological.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DayKey(NaiveDate);

impl DayKey {
    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    pub fn today() -> Self {
        Self(Local::now().date_naive())
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }
}

impl From<NaiveDate> for DayKey {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl fmt::Display for DayKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.0.day(), self.0.month(), self.0.year())
    }
}

impl FromStr for DayKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || format!("Invalid date '{}'. Use D.M.YYYY.", s);

        let parts: Vec<&str> = s.split('.').collect();
        let [day, month, year] = parts.as_slice() else {
            return Err(invalid());
        };

        // Only the canonical spelling is accepted so keys round-trip exactly
        let number = |part: &str| -> Option<u32> {
            if part.is_empty()
                || part.starts_with('0')
                || !part.chars().all(|c| c.is_ascii_digit())
            {
                return None;
            }
            part.parse().ok()
        };

        let (Some(day), Some(month), Some(year)) = (number(*day), number(*month), number(*year))
        else {
            return Err(invalid());
        };
        if year.to_string().len() != 4 {
            return Err(invalid());
        }

        NaiveDate::from_ymd_opt(year as i32, month, day)
            .map(Self)
            .ok_or_else(invalid)
    }
}

impl Serialize for DayKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for DayKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_display_has_no_padding() {
        assert_eq!(DayKey::new(date(2024, 3, 5)).to_string(), "5.3.2024");
        assert_eq!(DayKey::new(date(2023, 12, 31)).to_string(), "31.12.2023");
    }

    #[test]
    fn test_parse() {
        let key: DayKey = "5.3.2024".parse().unwrap();
        assert_eq!(key.date(), date(2024, 3, 5));
    }

    #[test]
    fn test_parse_rejects_non_canonical() {
        assert!("05.3.2024".parse::<DayKey>().is_err());
        assert!("5.03.2024".parse::<DayKey>().is_err());
        assert!("2024-03-05".parse::<DayKey>().is_err());
        assert!("5.3.24".parse::<DayKey>().is_err());
        assert!("5.3.2024.".parse::<DayKey>().is_err());
        assert!("+5.3.2024".parse::<DayKey>().is_err());
    }

    #[test]
    fn test_parse_rejects_impossible_dates() {
        assert!("30.2.2024".parse::<DayKey>().is_err());
        assert!("1.13.2024".parse::<DayKey>().is_err());
        assert!("29.2.2024".parse::<DayKey>().is_ok());
    }

    #[test]
    fn test_orders_chronologically() {
        let earlier: DayKey = "30.1.2024".parse().unwrap();
        let later: DayKey = "5.3.2024".parse().unwrap();
        assert!(earlier < later);
    }

    #[test]
    fn test_serializes_as_string() {
        let key: DayKey = "5.3.2024".parse().unwrap();
        assert_eq!(serde_json::to_string(&key).unwrap(), "\"5.3.2024\"");

        let parsed: DayKey = serde_json::from_str("\"5.3.2024\"").unwrap();
        assert_eq!(parsed, key);
    }
}
