use csv::Writer;
use serde::Serialize;
use std::io::Write;
use std::path::Path;
use tracing::info;

use crate::error::Result;
use crate::models::PreparedSeries;

/// One CSV row per canonical calendar day; absent values are empty cells
#[derive(Debug, Serialize)]
struct SeriesRow {
    day_of_year: usize,
    month: u32,
    day: u32,
    baseline_min_c: Option<f64>,
    baseline_max_c: Option<f64>,
    new_high_c: Option<f64>,
    new_low_c: Option<f64>,
}

pub struct SeriesWriter;

impl SeriesWriter {
    pub fn new() -> Self {
        Self
    }

    pub fn write_series(&self, series: &PreparedSeries, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let writer = Writer::from_path(path)?;
        self.write_to(series, writer)?;

        info!("Wrote {} series rows to {}", series.len(), path.display());
        Ok(())
    }

    pub fn write_to<W: Write>(&self, series: &PreparedSeries, mut writer: Writer<W>) -> Result<()> {
        for (idx, day) in series.days.iter().enumerate() {
            writer.serialize(SeriesRow {
                day_of_year: idx,
                month: day.month,
                day: day.day,
                baseline_min_c: series.baseline_min[idx],
                baseline_max_c: series.baseline_max[idx],
                new_high_c: series.new_high[idx],
                new_low_c: series.new_low[idx],
            })?;
        }
        writer.flush()?;
        Ok(())
    }
}

impl Default for SeriesWriter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::canonical_calendar_days;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_write_series_rows() -> Result<()> {
        let days = canonical_calendar_days();
        let n = days.len();
        let mut baseline_min = vec![None; n];
        let mut baseline_max = vec![None; n];
        let mut new_high = vec![None; n];
        baseline_min[0] = Some(-5.5);
        baseline_max[0] = Some(3.0);
        new_high[0] = Some(3.5);

        let series = PreparedSeries {
            days,
            baseline_min,
            baseline_max,
            new_high,
            new_low: vec![None; n],
        };

        let mut buffer = Vec::new();
        SeriesWriter::new().write_to(&series, Writer::from_writer(&mut buffer))?;
        let text = String::from_utf8(buffer).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 366);
        assert_eq!(
            lines[0],
            "day_of_year,month,day,baseline_min_c,baseline_max_c,new_high_c,new_low_c"
        );
        assert_eq!(lines[1], "0,1,1,-5.5,3.0,3.5,");
        assert_eq!(lines[365], "364,12,31,,,,");
        Ok(())
    }
}
