use serde::{Serialize, Serializer};
use std::collections::BTreeMap;

use crate::models::calendar::CalendarDayKey;

/// Which extreme a daily aggregation keeps
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Extreme {
    Min,
    Max,
}

impl Extreme {
    /// Keep the more extreme of two values
    pub fn pick(&self, current: f64, candidate: f64) -> f64 {
        match self {
            Extreme::Min => current.min(candidate),
            Extreme::Max => current.max(candidate),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Extreme::Min => "min",
            Extreme::Max => "max",
        }
    }
}

/// One value per calendar day, present only where data contributed
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DailySeries {
    values: BTreeMap<CalendarDayKey, f64>,
}

impl DailySeries {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &CalendarDayKey) -> Option<f64> {
        self.values.get(key).copied()
    }

    pub fn contains(&self, key: &CalendarDayKey) -> bool {
        self.values.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Entries in chronological order
    pub fn iter(&self) -> impl Iterator<Item = (&CalendarDayKey, &f64)> {
        self.values.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &CalendarDayKey> {
        self.values.keys()
    }
}

impl FromIterator<(CalendarDayKey, f64)> for DailySeries {
    fn from_iter<I: IntoIterator<Item = (CalendarDayKey, f64)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

impl Serialize for DailySeries {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.values.iter().map(|(k, v)| (k.to_string(), v)))
    }
}

/// Daily minimum and maximum computed over the same reading set
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DailyExtremes {
    pub min: DailySeries,
    pub max: DailySeries,
}

/// Days on which the comparison year broke the baseline envelope
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RecordFlags {
    pub new_high: DailySeries,
    pub new_low: DailySeries,
}

/// Four sequences aligned to the canonical 365-day ordering.
///
/// Index `i` refers to `days[i]` in every sequence; `None` marks a day with
/// no value.
#[derive(Debug, Clone, PartialEq)]
pub struct PreparedSeries {
    pub days: Vec<CalendarDayKey>,
    pub baseline_min: Vec<Option<f64>>,
    pub baseline_max: Vec<Option<f64>>,
    pub new_high: Vec<Option<f64>>,
    pub new_low: Vec<Option<f64>>,
}

impl PreparedSeries {
    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Positions and values of the present entries in a sequence
    pub fn present_points(values: &[Option<f64>]) -> Vec<(usize, f64)> {
        values
            .iter()
            .enumerate()
            .filter_map(|(idx, value)| value.map(|v| (idx, v)))
            .collect()
    }
}
