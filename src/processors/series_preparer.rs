use tracing::warn;

use crate::models::{canonical_calendar_days, DailySeries, PreparedSeries, RecordFlags};

/// Reindexes daily series onto the canonical 365-day ordering
pub struct SeriesPreparer;

impl SeriesPreparer {
    pub fn new() -> Self {
        Self
    }

    pub fn prepare(
        &self,
        baseline_min: &DailySeries,
        baseline_max: &DailySeries,
        records: &RecordFlags,
    ) -> PreparedSeries {
        let days = canonical_calendar_days();

        let missing = days.iter().filter(|d| !baseline_max.contains(d)).count();
        if missing > 0 {
            warn!("{} calendar days have no baseline readings", missing);
        }

        let reindex = |series: &DailySeries| -> Vec<Option<f64>> {
            days.iter().map(|day| series.get(day)).collect()
        };

        PreparedSeries {
            baseline_min: reindex(baseline_min),
            baseline_max: reindex(baseline_max),
            new_high: reindex(&records.new_high),
            new_low: reindex(&records.new_low),
            days,
        }
    }
}

impl Default for SeriesPreparer {
    fn default() -> Self {
        Self::new()
    }
}
