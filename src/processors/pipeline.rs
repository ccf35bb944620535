use serde::Serialize;
use tracing::info;

use crate::config::PipelineConfig;
use crate::error::Result;
use crate::models::{DailyExtremes, NormalizedReading, PreparedSeries, RawReading, RecordFlags};
use crate::processors::{
    DailyAggregator, Normalizer, RecordDetector, SeriesPreparer, WindowSplitter, WindowedReadings,
    YearWindows,
};
use crate::utils::progress::ProgressReporter;

/// Row counts gathered while the pipeline runs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RunStats {
    pub raw_readings: usize,
    pub normalized_readings: usize,
    pub leap_days_dropped: usize,
    pub baseline_readings: usize,
    pub comparison_readings: usize,
}

impl RunStats {
    fn new(raw: &[RawReading], normalized: &[NormalizedReading], split: &WindowedReadings) -> Self {
        Self {
            raw_readings: raw.len(),
            normalized_readings: normalized.len(),
            leap_days_dropped: raw.len() - normalized.len(),
            baseline_readings: split.baseline.len(),
            comparison_readings: split.comparison.len(),
        }
    }

    pub fn summary(&self) -> String {
        format!(
            "Readings: {} raw, {} after normalization ({} leap days dropped)\n\
            Baseline window: {} readings\n\
            Comparison year: {} readings",
            self.raw_readings,
            self.normalized_readings,
            self.leap_days_dropped,
            self.baseline_readings,
            self.comparison_readings
        )
    }
}

/// Everything one run derives, from aggregates to chart-ready series
#[derive(Debug, Clone)]
pub struct PipelineOutput {
    pub windows: YearWindows,
    pub stats: RunStats,
    pub baseline: DailyExtremes,
    pub comparison: DailyExtremes,
    pub records: RecordFlags,
    pub prepared: PreparedSeries,
}

/// Raw rows → normalize → split → aggregate → detect → prepare
pub struct RecordPipeline {
    windows: YearWindows,
    normalizer: Normalizer,
    aggregator: DailyAggregator,
    detector: RecordDetector,
    preparer: SeriesPreparer,
}

impl RecordPipeline {
    pub fn new(windows: YearWindows) -> Self {
        Self {
            windows,
            normalizer: Normalizer::new(),
            aggregator: DailyAggregator::new(),
            detector: RecordDetector::new(),
            preparer: SeriesPreparer::new(),
        }
    }

    pub fn from_config(config: &PipelineConfig) -> Result<Self> {
        config.check()?;
        Ok(Self::new(config.windows()?))
    }

    pub fn windows(&self) -> YearWindows {
        self.windows
    }

    /// Normalize and split only, for validating an input file
    pub fn inspect(
        &self,
        raw: &[RawReading],
        progress: Option<&ProgressReporter>,
    ) -> Result<RunStats> {
        let (normalized, split) = self.normalize_and_split(raw, progress)?;
        Ok(RunStats::new(raw, &normalized, &split))
    }

    /// Run every stage; any failure aborts with no partial output
    pub fn run(
        &self,
        raw: &[RawReading],
        progress: Option<&ProgressReporter>,
    ) -> Result<PipelineOutput> {
        let (normalized, split) = self.normalize_and_split(raw, progress)?;
        let stats = RunStats::new(raw, &normalized, &split);

        report(progress, "Aggregating daily extremes...");
        let baseline = self.aggregator.extremes(&split.baseline);
        let comparison = self.aggregator.extremes(&split.comparison);

        report(progress, "Detecting record days...");
        let records = self.detector.detect(&comparison, &baseline);

        report(progress, "Preparing series...");
        let prepared = self.preparer.prepare(&baseline.min, &baseline.max, &records);

        info!(
            "Pipeline complete: {} baseline days, {} record highs, {} record lows",
            baseline.max.len(),
            records.new_high.len(),
            records.new_low.len()
        );

        Ok(PipelineOutput {
            windows: self.windows,
            stats,
            baseline,
            comparison,
            records,
            prepared,
        })
    }

    fn normalize_and_split(
        &self,
        raw: &[RawReading],
        progress: Option<&ProgressReporter>,
    ) -> Result<(Vec<NormalizedReading>, WindowedReadings)> {
        report(progress, "Normalizing readings...");
        let normalized = self.normalizer.normalize(raw)?;

        report(progress, "Splitting year windows...");
        let split = WindowSplitter::new(self.windows).split(&normalized)?;

        Ok((normalized, split))
    }
}

fn report(progress: Option<&ProgressReporter>, message: &str) {
    if let Some(progress) = progress {
        progress.stage(message);
    }
}
