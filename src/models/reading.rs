use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::calendar::{is_leap_day, CalendarDayKey};

/// One row from the station record, as the source provides it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawReading {
    pub station_id: Option<String>,
    pub station_date: String,
    /// Tenths of a degree Celsius
    pub raw_value: i32,
}

impl RawReading {
    pub fn new(station_date: impl Into<String>, raw_value: i32) -> Self {
        Self {
            station_id: None,
            station_date: station_date.into(),
            raw_value,
        }
    }

    pub fn with_station_id(mut self, station_id: impl Into<String>) -> Self {
        self.station_id = Some(station_id.into());
        self
    }
}

/// A reading with a parsed date and a temperature in °C.
///
/// Built only by the normalizer, which never emits February 29.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedReading {
    pub date: NaiveDate,
    pub temperature_c: f64,
}

impl NormalizedReading {
    pub fn new(date: NaiveDate, temperature_c: f64) -> Self {
        Self {
            date,
            temperature_c,
        }
    }

    pub fn calendar_day(&self) -> Option<CalendarDayKey> {
        CalendarDayKey::from_date(self.date)
    }

    pub fn is_leap_day(&self) -> bool {
        is_leap_day(self.date)
    }
}
