use serde::{Deserialize, Serialize};
use std::collections::btree_map::{self, BTreeMap};

use super::day::DayData;
use super::day_key::DayKey;

/// All recorded data, keyed by day.
///
/// This is the whole persisted state. Days only exist once something was
/// recorded for them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TrackingData {
    days: BTreeMap<DayKey, DayData>,
}

impl TrackingData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Number of days with data.
    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn get(&self, day: &DayKey) -> Option<&DayData> {
        self.days.get(day)
    }

    /// Returns the day's data, creating empty logs on first use.
    pub fn day_mut(&mut self, day: DayKey) -> &mut DayData {
        self.days.entry(day).or_default()
    }

    pub fn insert(&mut self, day: DayKey, data: DayData) -> Option<DayData> {
        self.days.insert(day, data)
    }

    /// Days in chronological order.
    pub fn iter(&self) -> btree_map::Iter<'_, DayKey, DayData> {
        self.days.iter()
    }

    pub fn event_count(&self) -> usize {
        self.days.values().map(DayData::event_count).sum()
    }
}

impl FromIterator<(DayKey, DayData)> for TrackingData {
    fn from_iter<I: IntoIterator<Item = (DayKey, DayData)>>(iter: I) -> Self {
        Self {
            days: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a TrackingData {
    type Item = (&'a DayKey, &'a DayData);
    type IntoIter = btree_map::Iter<'a, DayKey, DayData>;

    fn into_iter(self) -> Self::IntoIter {
        self.days.iter()
    }
}
