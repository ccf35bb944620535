use serde::Serialize;

use crate::models::{CalendarDayKey, DailySeries};
use crate::processors::PipelineOutput;

/// A calendar day on which the comparison year set a record
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecordDay {
    pub day: CalendarDayKey,
    pub temperature_c: f64,
    /// The baseline extreme that was beaten
    pub previous_c: f64,
}

impl RecordDay {
    pub fn margin(&self) -> f64 {
        (self.temperature_c - self.previous_c).abs()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecordSummary {
    pub location: String,
    pub comparison_year: i32,
    pub baseline_years: String,
    pub record_highs: Vec<RecordDay>,
    pub record_lows: Vec<RecordDay>,
    pub hottest_record: Option<RecordDay>,
    pub coldest_record: Option<RecordDay>,
    pub baseline_lowest_c: Option<f64>,
    pub baseline_highest_c: Option<f64>,
    pub days_without_baseline: usize,
}

pub struct RecordAnalyzer;

impl RecordAnalyzer {
    pub fn new() -> Self {
        Self
    }

    pub fn analyze(&self, output: &PipelineOutput, location: &str) -> RecordSummary {
        let record_highs = Self::record_days(&output.records.new_high, &output.baseline.max);
        let record_lows = Self::record_days(&output.records.new_low, &output.baseline.min);

        let hottest_record = record_highs
            .iter()
            .max_by(|a, b| a.temperature_c.total_cmp(&b.temperature_c))
            .cloned();
        let coldest_record = record_lows
            .iter()
            .min_by(|a, b| a.temperature_c.total_cmp(&b.temperature_c))
            .cloned();

        let baseline_lowest_c = output
            .baseline
            .min
            .iter()
            .map(|(_, v)| *v)
            .min_by(f64::total_cmp);
        let baseline_highest_c = output
            .baseline
            .max
            .iter()
            .map(|(_, v)| *v)
            .max_by(f64::total_cmp);

        let days_without_baseline = output
            .prepared
            .baseline_max
            .iter()
            .filter(|v| v.is_none())
            .count();

        RecordSummary {
            location: location.to_string(),
            comparison_year: output.windows.comparison_year(),
            baseline_years: output.windows.baseline_label(),
            record_highs,
            record_lows,
            hottest_record,
            coldest_record,
            baseline_lowest_c,
            baseline_highest_c,
            days_without_baseline,
        }
    }

    fn record_days(records: &DailySeries, baseline: &DailySeries) -> Vec<RecordDay> {
        records
            .iter()
            .filter_map(|(day, &temperature_c)| {
                baseline.get(day).map(|previous_c| RecordDay {
                    day: *day,
                    temperature_c,
                    previous_c,
                })
            })
            .collect()
    }
}

impl Default for RecordAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

fn describe(record: Option<&RecordDay>) -> String {
    match record {
        Some(r) => format!(
            "{:.1}°C on {} (previous {:.1}°C)",
            r.temperature_c, r.day, r.previous_c
        ),
        None => "None".to_string(),
    }
}

impl RecordSummary {
    pub fn summary(&self) -> String {
        let envelope = match (self.baseline_lowest_c, self.baseline_highest_c) {
            (Some(low), Some(high)) => format!("{:.1}°C to {:.1}°C", low, high),
            _ => "No baseline measurements".to_string(),
        };

        format!(
            "Location: {}\n\
            Comparison: {} against {}\n\
            Record highs: {} days\n\
            Record lows: {} days\n\
            Hottest record: {}\n\
            Coldest record: {}\n\
            Baseline envelope: {}\n\
            Days without baseline data: {}",
            self.location,
            self.comparison_year,
            self.baseline_years,
            self.record_highs.len(),
            self.record_lows.len(),
            describe(self.hottest_record.as_ref()),
            describe(self.coldest_record.as_ref()),
            envelope,
            self.days_without_baseline
        )
    }

    /// Summary followed by one line per record day
    pub fn detailed_summary(&self) -> String {
        let mut text = self.summary();

        for (title, days) in [
            ("Record highs", &self.record_highs),
            ("Record lows", &self.record_lows),
        ] {
            if days.is_empty() {
                continue;
            }
            text.push_str(&format!("\n\n{}:", title));
            for record in days {
                text.push_str(&format!(
                    "\n  {}: {:.1}°C (previous {:.1}°C, by {:.1}°C)",
                    record.day,
                    record.temperature_c,
                    record.previous_c,
                    record.margin()
                ));
            }
        }

        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RawReading;
    use crate::processors::{RecordPipeline, YearWindows};

    fn run(raw: &[RawReading]) -> PipelineOutput {
        RecordPipeline::new(YearWindows::new(2005, 2014, 2015).unwrap())
            .run(raw, None)
            .unwrap()
    }

    #[test]
    fn test_summary_picks_extreme_records() {
        let raw = vec![
            RawReading::new("2005-07-04", 300),
            RawReading::new("2006-07-05", 280),
            RawReading::new("2006-01-10", -150),
            RawReading::new("2015-07-04", 320),
            RawReading::new("2015-07-05", 350),
            RawReading::new("2015-01-10", -200),
        ];

        let summary = RecordAnalyzer::new().analyze(&run(&raw), "Test Station");

        assert_eq!(summary.record_highs.len(), 2);
        assert_eq!(summary.record_lows.len(), 1);
        let hottest = summary.hottest_record.as_ref().unwrap();
        assert_eq!(hottest.day, CalendarDayKey::new(7, 5).unwrap());
        assert_eq!(hottest.temperature_c, 35.0);
        assert_eq!(hottest.previous_c, 28.0);

        let coldest = summary.coldest_record.as_ref().unwrap();
        assert_eq!(coldest.temperature_c, -20.0);
        assert_eq!(summary.baseline_lowest_c, Some(-15.0));
        assert_eq!(summary.baseline_highest_c, Some(30.0));
        assert_eq!(summary.days_without_baseline, 362);
        assert_eq!(summary.baseline_years, "2005-2014");
    }

    #[test]
    fn test_summary_without_records() {
        let raw = vec![
            RawReading::new("2005-07-04", 300),
            RawReading::new("2015-07-04", 300),
        ];

        let summary = RecordAnalyzer::new().analyze(&run(&raw), "Test Station");
        assert!(summary.hottest_record.is_none());
        assert!(summary.coldest_record.is_none());
        assert!(summary.summary().contains("Hottest record: None"));
        assert!(!summary.detailed_summary().contains("Record highs:\n"));
    }
}
