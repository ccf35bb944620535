use chrono::Datelike;
use serde::Serialize;
use std::ops::RangeInclusive;
use tracing::info;

use crate::error::{RecordsError, Result};
use crate::models::NormalizedReading;

/// The baseline year range and the single comparison year.
///
/// Construction enforces that the baseline range is non-empty and does not
/// contain the comparison year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct YearWindows {
    baseline_start: i32,
    baseline_end: i32,
    comparison_year: i32,
}

impl YearWindows {
    pub fn new(baseline_start: i32, baseline_end: i32, comparison_year: i32) -> Result<Self> {
        if baseline_start > baseline_end {
            return Err(RecordsError::InvalidWindow(format!(
                "baseline range {}-{} is empty",
                baseline_start, baseline_end
            )));
        }

        if (baseline_start..=baseline_end).contains(&comparison_year) {
            return Err(RecordsError::InvalidWindow(format!(
                "comparison year {} overlaps baseline range {}-{}",
                comparison_year, baseline_start, baseline_end
            )));
        }

        Ok(Self {
            baseline_start,
            baseline_end,
            comparison_year,
        })
    }

    pub fn baseline_years(&self) -> RangeInclusive<i32> {
        self.baseline_start..=self.baseline_end
    }

    pub fn comparison_year(&self) -> i32 {
        self.comparison_year
    }

    pub fn baseline_label(&self) -> String {
        format!("{}-{}", self.baseline_start, self.baseline_end)
    }
}

/// Readings partitioned by window
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WindowedReadings {
    pub baseline: Vec<NormalizedReading>,
    pub comparison: Vec<NormalizedReading>,
}

pub struct WindowSplitter {
    windows: YearWindows,
}

impl WindowSplitter {
    pub fn new(windows: YearWindows) -> Self {
        Self { windows }
    }

    /// Partition readings by year without enforcing that either side is
    /// populated. Readings outside both windows are dropped.
    pub fn partition(&self, readings: &[NormalizedReading]) -> WindowedReadings {
        let baseline_years = self.windows.baseline_years();
        let mut split = WindowedReadings::default();

        for reading in readings {
            let year = reading.date.year();
            if baseline_years.contains(&year) {
                split.baseline.push(reading.clone());
            } else if year == self.windows.comparison_year() {
                split.comparison.push(reading.clone());
            }
        }

        split
    }

    /// Partition readings and require both windows to be non-empty
    pub fn split(&self, readings: &[NormalizedReading]) -> Result<WindowedReadings> {
        let split = self.partition(readings);

        info!(
            "Baseline {} has {} readings, comparison year {} has {}",
            self.windows.baseline_label(),
            split.baseline.len(),
            self.windows.comparison_year(),
            split.comparison.len()
        );

        if split.baseline.is_empty() {
            return Err(RecordsError::EmptyResult(format!(
                "no readings in baseline window {}",
                self.windows.baseline_label()
            )));
        }
        if split.comparison.is_empty() {
            return Err(RecordsError::EmptyResult(format!(
                "no readings in comparison year {}",
                self.windows.comparison_year()
            )));
        }

        Ok(split)
    }
}
