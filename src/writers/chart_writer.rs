use plotters::coord::Shift;
use plotters::drawing::DrawingAreaErrorKind;
use plotters::prelude::*;
use std::path::Path;
use tracing::info;

use crate::error::{RecordsError, Result};
use crate::models::{month_start_indices, PreparedSeries};
use crate::processors::YearWindows;
use crate::utils::constants::{
    CHART_HEIGHT, CHART_WIDTH, DAYS_IN_CYCLE, MONTH_ABBREVIATIONS, Y_AXIS_MAX_C, Y_AXIS_MIN_C,
};

const HIGH_COLOR: RGBColor = RED;
const LOW_COLOR: RGBColor = BLUE;
const MARKER_SIZE: i32 = 4;

/// Text shown on the chart
#[derive(Debug, Clone, PartialEq)]
pub struct ChartLabels {
    pub title: String,
    pub record_high: String,
    pub record_low: String,
    pub baseline_range: String,
}

impl ChartLabels {
    pub fn new(windows: &YearWindows, location: &str) -> Self {
        let year = windows.comparison_year();
        Self {
            title: format!("Record-Breaking Temperatures in {} ({})", year, location),
            record_high: format!("{} Record-Breaking High", year),
            record_low: format!("{} Record-Breaking Low", year),
            baseline_range: format!("Extreme Temperatures in {}", windows.baseline_label()),
        }
    }
}

/// Renders prepared series as an SVG chart
pub struct ChartWriter {
    width: u32,
    height: u32,
}

impl ChartWriter {
    pub fn new() -> Self {
        Self {
            width: CHART_WIDTH,
            height: CHART_HEIGHT,
        }
    }

    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Draw the chart to an SVG file, creating parent directories
    pub fn write_chart(&self, series: &PreparedSeries, labels: &ChartLabels, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let root = SVGBackend::new(path, (self.width, self.height)).into_drawing_area();
        draw_record_chart(root, series, labels).map_err(|e| RecordsError::Chart(e.to_string()))?;

        info!("Wrote chart to {}", path.display());
        Ok(())
    }

    /// Draw the chart into an SVG document held in memory
    pub fn render_svg(&self, series: &PreparedSeries, labels: &ChartLabels) -> Result<String> {
        let mut svg = String::new();
        {
            let root = SVGBackend::with_string(&mut svg, (self.width, self.height)).into_drawing_area();
            draw_record_chart(root, series, labels)
                .map_err(|e| RecordsError::Chart(e.to_string()))?;
        }
        Ok(svg)
    }
}

impl Default for ChartWriter {
    fn default() -> Self {
        Self::new()
    }
}

fn draw_record_chart<DB>(
    root: DrawingArea<DB, Shift>,
    series: &PreparedSeries,
    labels: &ChartLabels,
) -> std::result::Result<(), DrawingAreaErrorKind<DB::ErrorType>>
where
    DB: DrawingBackend,
{
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(&labels.title, ("sans-serif", 26))
        .margin(25)
        .set_label_area_size(LabelAreaPosition::Left, 70)
        .set_label_area_size(LabelAreaPosition::Bottom, 40)
        .build_cartesian_2d(0f64..DAYS_IN_CYCLE as f64, Y_AXIS_MIN_C..Y_AXIS_MAX_C)?;

    chart
        .configure_mesh()
        .light_line_style(&TRANSPARENT)
        .bold_line_style(&TRANSPARENT)
        // One key point per day; only month starts get a label
        .x_labels(DAYS_IN_CYCLE + 1)
        .set_tick_mark_size(LabelAreaPosition::Bottom, 0)
        .x_label_formatter(&|v| month_label(*v))
        .y_label_formatter(&|v| format!("{:.0}", v))
        .y_desc("Temperature (°C)")
        .label_style(("sans-serif", 18))
        .axis_desc_style(("sans-serif", 20))
        .draw()?;

    // Shaded envelope, one polygon per run of days with both extremes
    let band = envelope_runs(&series.baseline_min, &series.baseline_max);
    chart.draw_series(
        band.into_iter()
            .map(|points| Polygon::new(points, LOW_COLOR.mix(0.25).filled())),
    )?;

    for values in [&series.baseline_max, &series.baseline_min] {
        for run in contiguous_runs(values) {
            chart.draw_series(LineSeries::new(run, &BLACK.mix(0.5)))?;
        }
    }

    chart
        .draw_series(
            PreparedSeries::present_points(&series.new_high)
                .into_iter()
                .map(|(idx, v)| Circle::new((idx as f64, v), MARKER_SIZE, HIGH_COLOR.filled())),
        )?
        .label(labels.record_high.as_str())
        .legend(|(x, y)| Circle::new((x + 10, y), MARKER_SIZE, HIGH_COLOR.filled()));

    chart
        .draw_series(
            PreparedSeries::present_points(&series.new_low)
                .into_iter()
                .map(|(idx, v)| Circle::new((idx as f64, v), MARKER_SIZE, LOW_COLOR.filled())),
        )?
        .label(labels.record_low.as_str())
        .legend(|(x, y)| Circle::new((x + 10, y), MARKER_SIZE, LOW_COLOR.filled()));

    // Legend-only entry so the envelope is listed after the record markers
    chart
        .draw_series(std::iter::empty::<Polygon<(f64, f64)>>())?
        .label(labels.baseline_range.as_str())
        .legend(|(x, y)| {
            Rectangle::new([(x, y - 6), (x + 20, y + 6)], LOW_COLOR.mix(0.25).filled())
        });

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&TRANSPARENT)
        .label_font(("sans-serif", 18))
        .position(SeriesLabelPosition::LowerRight)
        .draw()?;

    root.present()?;
    Ok(())
}

/// Month abbreviation for a tick placed on a month's first day
fn month_label(position: f64) -> String {
    if position < 0.0 || (position - position.round()).abs() > 1e-6 {
        return String::new();
    }
    let idx = position.round() as usize;
    month_start_indices()
        .iter()
        .position(|&start| start == idx)
        .map(|month| MONTH_ABBREVIATIONS[month].to_string())
        .unwrap_or_default()
}

/// Split a sequence into runs of consecutive present values
fn contiguous_runs(values: &[Option<f64>]) -> Vec<Vec<(f64, f64)>> {
    let mut runs = Vec::new();
    let mut current = Vec::new();

    for (idx, value) in values.iter().enumerate() {
        match value {
            Some(v) => current.push((idx as f64, *v)),
            None if !current.is_empty() => runs.push(std::mem::take(&mut current)),
            None => {}
        }
    }
    if !current.is_empty() {
        runs.push(current);
    }

    runs
}

/// Closed outlines of the band between min and max, split at gaps
fn envelope_runs(min: &[Option<f64>], max: &[Option<f64>]) -> Vec<Vec<(f64, f64)>> {
    let paired: Vec<Option<(f64, f64)>> = min
        .iter()
        .zip(max)
        .map(|(lo, hi)| lo.zip(*hi))
        .collect();

    let mut outlines = Vec::new();
    let mut start = 0usize;
    while start < paired.len() {
        if paired[start].is_none() {
            start += 1;
            continue;
        }
        let mut end = start;
        while end < paired.len() && paired[end].is_some() {
            end += 1;
        }

        let run: Vec<(f64, (f64, f64))> = (start..end)
            .filter_map(|idx| paired[idx].map(|pair| (idx as f64, pair)))
            .collect();
        let upper = run.iter().map(|(x, (_, hi))| (*x, *hi));
        let lower = run.iter().rev().map(|(x, (lo, _))| (*x, *lo));
        outlines.push(upper.chain(lower).collect());

        start = end;
    }

    outlines
}
