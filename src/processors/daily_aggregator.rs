use std::collections::BTreeMap;
use tracing::debug;

use crate::models::{CalendarDayKey, DailyExtremes, DailySeries, Extreme, NormalizedReading};

/// Reduces a reading set to one value per calendar day
pub struct DailyAggregator;

impl DailyAggregator {
    pub fn new() -> Self {
        Self
    }

    /// Single pass: key → running extreme. Days without readings stay absent.
    pub fn aggregate(&self, readings: &[NormalizedReading], extreme: Extreme) -> DailySeries {
        let mut accumulator: BTreeMap<CalendarDayKey, f64> = BTreeMap::new();

        for reading in readings {
            // Leap days never reach here after normalization
            let Some(key) = reading.calendar_day() else {
                continue;
            };

            accumulator
                .entry(key)
                .and_modify(|current| *current = extreme.pick(*current, reading.temperature_c))
                .or_insert(reading.temperature_c);
        }

        debug!(
            "Aggregated {} readings into {} daily {} values",
            readings.len(),
            accumulator.len(),
            extreme.as_str()
        );

        accumulator.into_iter().collect()
    }

    /// Both extremes of the same reading set
    pub fn extremes(&self, readings: &[NormalizedReading]) -> DailyExtremes {
        DailyExtremes {
            min: self.aggregate(readings, Extreme::Min),
            max: self.aggregate(readings, Extreme::Max),
        }
    }
}

impl Default for DailyAggregator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn reading(y: i32, m: u32, d: u32, t: f64) -> NormalizedReading {
        NormalizedReading::new(NaiveDate::from_ymd_opt(y, m, d).unwrap(), t)
    }

    fn key(m: u32, d: u32) -> CalendarDayKey {
        CalendarDayKey::new(m, d).unwrap()
    }

    #[test]
    fn test_groups_across_years() {
        let readings = vec![
            reading(2005, 7, 4, 30.0),
            reading(2006, 7, 4, 31.0),
            reading(2006, 7, 4, 18.5),
            reading(2007, 1, 1, -10.0),
        ];
        let aggregator = DailyAggregator::new();

        let max = aggregator.aggregate(&readings, Extreme::Max);
        let min = aggregator.aggregate(&readings, Extreme::Min);

        assert_eq!(max.get(&key(7, 4)), Some(31.0));
        assert_eq!(min.get(&key(7, 4)), Some(18.5));
        assert_eq!(max.get(&key(1, 1)), Some(-10.0));
        assert_eq!(min.get(&key(1, 1)), Some(-10.0));
        assert_eq!(max.len(), 2);
    }

    #[test]
    fn test_days_without_readings_are_absent() {
        let readings = vec![reading(2005, 3, 1, 5.0)];
        let extremes = DailyAggregator::new().extremes(&readings);

        assert_eq!(extremes.min.get(&key(3, 2)), None);
        assert_eq!(extremes.max.get(&key(3, 2)), None);
        assert_eq!(extremes.max.len(), 1);
    }

    #[test]
    fn test_empty_input_gives_empty_series() {
        let extremes = DailyAggregator::new().extremes(&[]);
        assert!(extremes.min.is_empty());
        assert!(extremes.max.is_empty());
    }

    #[test]
    fn test_min_never_exceeds_max() {
        let readings: Vec<NormalizedReading> = (2005..=2014)
            .flat_map(|year| {
                let offset = f64::from(year - 2005);
                vec![
                    reading(year, 2, 10, -5.0 + offset),
                    reading(year, 2, 10, 3.0 - offset),
                    reading(year, 8, 20, 25.0 + offset * 0.5),
                ]
            })
            .collect();

        let extremes = DailyAggregator::new().extremes(&readings);
        for (key, min) in extremes.min.iter() {
            let max = extremes.max.get(key).unwrap();
            assert!(*min <= max, "{key}: {min} > {max}");
        }
    }
}
