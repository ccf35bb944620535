use tracing::{debug, info};

use crate::models::{DailyExtremes, DailySeries, RecordFlags};

/// Compares one year's daily extremes with the baseline envelope
pub struct RecordDetector;

impl RecordDetector {
    pub fn new() -> Self {
        Self
    }

    /// Flag every baseline day the comparison year strictly beat.
    ///
    /// Ties never count. A day missing from the comparison series yields no
    /// flag, and only days present in the baseline can be flagged.
    pub fn detect(&self, comparison: &DailyExtremes, baseline: &DailyExtremes) -> RecordFlags {
        let new_high = Self::beyond(&comparison.max, &baseline.max, |cmp, base| cmp > base);
        let new_low = Self::beyond(&comparison.min, &baseline.min, |cmp, base| cmp < base);

        info!(
            "Found {} record highs and {} record lows",
            new_high.len(),
            new_low.len()
        );

        RecordFlags { new_high, new_low }
    }

    fn beyond<F>(comparison: &DailySeries, baseline: &DailySeries, beats: F) -> DailySeries
    where
        F: Fn(f64, f64) -> bool,
    {
        baseline
            .iter()
            .filter_map(|(key, &base)| {
                let cmp = comparison.get(key)?;
                if beats(cmp, base) {
                    debug!("{}: {:.1}°C beats {:.1}°C", key, cmp, base);
                    Some((*key, cmp))
                } else {
                    None
                }
            })
            .collect()
    }
}

impl Default for RecordDetector {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CalendarDayKey;

    fn key(m: u32, d: u32) -> CalendarDayKey {
        CalendarDayKey::new(m, d).unwrap()
    }

    fn series(entries: &[((u32, u32), f64)]) -> DailySeries {
        entries
            .iter()
            .map(|&((m, d), v)| (key(m, d), v))
            .collect()
    }

    fn extremes(min: &[((u32, u32), f64)], max: &[((u32, u32), f64)]) -> DailyExtremes {
        DailyExtremes {
            min: series(min),
            max: series(max),
        }
    }

    #[test]
    fn test_strict_high_and_low() {
        let baseline = extremes(&[((7, 4), 15.0), ((1, 1), -20.0)], &[((7, 4), 31.0), ((1, 1), 5.0)]);
        let comparison = extremes(&[((7, 4), 14.9), ((1, 1), -20.0)], &[((7, 4), 32.0), ((1, 1), 5.0)]);

        let flags = RecordDetector::new().detect(&comparison, &baseline);

        assert_eq!(flags.new_high.get(&key(7, 4)), Some(32.0));
        assert_eq!(flags.new_low.get(&key(7, 4)), Some(14.9));
        // Ties on Jan 1 in both directions
        assert_eq!(flags.new_high.get(&key(1, 1)), None);
        assert_eq!(flags.new_low.get(&key(1, 1)), None);
    }

    #[test]
    fn test_tie_with_baseline_max_is_not_a_record() {
        let baseline = extremes(&[((7, 4), 30.0)], &[((7, 4), 31.0)]);
        let comparison = extremes(&[((7, 4), 31.0)], &[((7, 4), 31.0)]);

        let flags = RecordDetector::new().detect(&comparison, &baseline);
        assert!(flags.new_high.is_empty());
        assert!(flags.new_low.is_empty());
    }

    #[test]
    fn test_missing_comparison_day_gives_no_flag() {
        let baseline = extremes(&[((3, 1), 0.0), ((3, 2), 0.0)], &[((3, 1), 10.0), ((3, 2), 10.0)]);
        let comparison = extremes(&[((3, 1), -1.0)], &[((3, 1), 11.0)]);

        let flags = RecordDetector::new().detect(&comparison, &baseline);
        assert_eq!(flags.new_high.len(), 1);
        assert_eq!(flags.new_low.len(), 1);
        assert_eq!(flags.new_high.get(&key(3, 2)), None);
    }

    #[test]
    fn test_flags_limited_to_baseline_days() {
        let baseline = extremes(&[((3, 1), 0.0)], &[((3, 1), 10.0)]);
        let comparison = extremes(&[((3, 1), 1.0), ((9, 9), -50.0)], &[((3, 1), 9.0), ((9, 9), 50.0)]);

        let flags = RecordDetector::new().detect(&comparison, &baseline);
        assert!(flags.new_high.is_empty());
        assert!(flags.new_low.is_empty());
    }

    #[test]
    fn test_zero_degree_record_is_present() {
        let baseline = extremes(&[((12, 1), 0.5), ((12, 2), -3.0)], &[((12, 1), 6.0), ((12, 2), -0.5)]);
        let comparison = extremes(&[((12, 1), 0.0), ((12, 2), -1.0)], &[((12, 1), 4.0), ((12, 2), 0.0)]);

        let flags = RecordDetector::new().detect(&comparison, &baseline);
        assert_eq!(flags.new_low.get(&key(12, 1)), Some(0.0));
        assert_eq!(flags.new_high.get(&key(12, 2)), Some(0.0));
        assert_eq!(flags.new_high.get(&key(12, 1)), None);
    }
}
