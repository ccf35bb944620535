use chrono::NaiveDate;
use tracing::{debug, info};

use crate::error::{RecordsError, Result};
use crate::models::{NormalizedReading, RawReading};
use crate::utils::constants::{DATE_FORMATS, TENTHS_PER_DEGREE};

/// Turns raw rows into dated °C readings and drops leap days
pub struct Normalizer;

impl Normalizer {
    pub fn new() -> Self {
        Self
    }

    /// Normalize every reading, keeping source order.
    ///
    /// Fails on the first unparsable date; February 29 rows are dropped.
    pub fn normalize(&self, readings: &[RawReading]) -> Result<Vec<NormalizedReading>> {
        let mut normalized = Vec::with_capacity(readings.len());
        let mut leap_days = 0usize;

        for (idx, reading) in readings.iter().enumerate() {
            let date = parse_station_date(&reading.station_date)
                .ok_or_else(|| {
                    RecordsError::malformed(
                        idx + 1,
                        format!("Invalid date: '{}'", reading.station_date),
                    )
                })?;

            let candidate = NormalizedReading::new(date, tenths_to_celsius(reading.raw_value));
            if candidate.is_leap_day() {
                leap_days += 1;
                continue;
            }

            normalized.push(candidate);
        }

        if leap_days > 0 {
            debug!("Dropped {} leap-day readings", leap_days);
        }
        info!(
            "Normalized {} of {} readings",
            normalized.len(),
            readings.len()
        );

        Ok(normalized)
    }
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new()
    }
}

/// Scale tenths of a degree to °C. Dividing keeps 310 at exactly 31.0.
pub fn tenths_to_celsius(raw_value: i32) -> f64 {
    f64::from(raw_value) / TENTHS_PER_DEGREE
}

/// Parse a station date in any of the accepted spellings.
///
/// A `YYYY-MM-DD` date followed by a time (`T` or space separated) keeps
/// only its date part.
pub fn parse_station_date(text: &str) -> Option<NaiveDate> {
    let text = text.trim();

    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(text, format) {
            return Some(date);
        }
    }

    let date_part = text.split(['T', ' ']).next()?;
    if date_part.len() == text.len() {
        return None;
    }
    NaiveDate::parse_from_str(date_part, DATE_FORMATS[0]).ok()
}
