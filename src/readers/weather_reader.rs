use csv::{ReaderBuilder, StringRecord};
use serde::Deserialize;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info};

use crate::error::{RecordsError, Result};
use crate::models::RawReading;
use crate::utils::constants::{COLUMN_DATE, COLUMN_VALUE};

/// Columns the reader consumes; anything else in the file is ignored
#[derive(Debug, Deserialize)]
struct WeatherRow {
    #[serde(rename = "ID", default)]
    id: Option<String>,
    #[serde(rename = "Date")]
    date: String,
    #[serde(rename = "Data_Value")]
    data_value: String,
}

/// Reads a station record CSV with a header row into raw readings
pub struct WeatherReader {
    delimiter: u8,
}

impl WeatherReader {
    pub fn new() -> Self {
        Self { delimiter: b',' }
    }

    pub fn with_delimiter(delimiter: u8) -> Self {
        Self { delimiter }
    }

    /// Read every row of the file at `path`
    pub fn read_readings(&self, path: &Path) -> Result<Vec<RawReading>> {
        info!("Reading station record from {}", path.display());
        let file = File::open(path)?;
        self.read_from(file)
    }

    /// Read every row from any byte source
    pub fn read_from<R: Read>(&self, source: R) -> Result<Vec<RawReading>> {
        let mut reader = ReaderBuilder::new()
            .delimiter(self.delimiter)
            .trim(csv::Trim::All)
            .from_reader(source);

        let headers = reader
            .headers()
            .map_err(|e| RecordsError::malformed(0, e.to_string()))?
            .clone();
        Self::check_headers(&headers)?;

        let mut readings = Vec::new();
        for record_result in reader.records() {
            let row = readings.len() + 1;
            // Ragged rows and undecodable bytes are input faults, not I/O
            let record = record_result.map_err(|e| RecordsError::malformed(row, e.to_string()))?;
            readings.push(Self::parse_record(&record, &headers, row)?);
        }

        debug!("Read {} raw readings", readings.len());
        Ok(readings)
    }

    fn check_headers(headers: &StringRecord) -> Result<()> {
        for required in [COLUMN_DATE, COLUMN_VALUE] {
            if !headers.iter().any(|h| h == required) {
                // Row 0 is the header
                return Err(RecordsError::malformed(
                    0,
                    format!("Missing required column '{}'", required),
                ));
            }
        }
        Ok(())
    }

    /// Parse one data row; the date stays textual until normalization.
    /// `row` counts data rows from 1, header excluded.
    fn parse_record(record: &StringRecord, headers: &StringRecord, row: usize) -> Result<RawReading> {
        let parsed: WeatherRow = record
            .deserialize(Some(headers))
            .map_err(|e| RecordsError::malformed(row, e.to_string()))?;

        let raw_value = parsed.data_value.parse::<i32>().map_err(|_| {
            RecordsError::malformed(
                row,
                format!("Invalid {}: '{}'", COLUMN_VALUE, parsed.data_value),
            )
        })?;

        Ok(RawReading {
            station_id: parsed.id.filter(|id| !id.is_empty()),
            station_date: parsed.date,
            raw_value,
        })
    }
}

impl Default for WeatherReader {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_read_weather_file() -> Result<()> {
        let mut temp_file = NamedTempFile::new()?;
        writeln!(temp_file, "ID,Date,Element,Data_Value")?;
        writeln!(temp_file, "USW00094889,2014-11-12,TMAX,22")?;
        writeln!(temp_file, "USC00208972,2009-04-29,TMIN,56")?;
        writeln!(temp_file, "USC00200032,2008-05-26,TMAX,278")?;

        let reader = WeatherReader::new();
        let readings = reader.read_readings(temp_file.path())?;

        assert_eq!(readings.len(), 3);
        assert_eq!(readings[0].station_id.as_deref(), Some("USW00094889"));
        assert_eq!(readings[0].station_date, "2014-11-12");
        assert_eq!(readings[0].raw_value, 22);
        assert_eq!(readings[2].raw_value, 278);
        Ok(())
    }

    #[test]
    fn test_station_column_is_optional() -> Result<()> {
        let data = "Date,Data_Value\n2015-01-01,-56\n";
        let readings = WeatherReader::new().read_from(data.as_bytes())?;

        assert_eq!(readings, vec![RawReading::new("2015-01-01", -56)]);
        Ok(())
    }

    #[test]
    fn test_non_numeric_value_is_malformed() {
        let data = "Date,Data_Value\n2015-01-01,12\n2015-01-02,warm\n";
        let err = WeatherReader::new().read_from(data.as_bytes()).unwrap_err();

        match err {
            RecordsError::MalformedInput { row, message } => {
                assert_eq!(row, 2);
                assert!(message.contains("warm"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_short_row_is_malformed() {
        let data = "Date,Data_Value\n2015-01-01,12\n2015-01-02\n";
        let err = WeatherReader::new().read_from(data.as_bytes()).unwrap_err();

        assert_eq!(err.kind(), "MalformedInputError");
        assert!(matches!(err, RecordsError::MalformedInput { row: 2, .. }));
    }

    #[test]
    fn test_invalid_utf8_is_malformed() {
        let data: &[u8] = b"Date,Data_Value\n2015-01-01,12\n2015-01-02,\xff\xfe\n";
        let err = WeatherReader::new().read_from(data).unwrap_err();

        assert_eq!(err.kind(), "MalformedInputError");
        assert!(matches!(err, RecordsError::MalformedInput { row: 2, .. }));
    }

    #[test]
    fn test_missing_column_is_malformed() {
        let data = "Date,Value\n2015-01-01,12\n";
        let err = WeatherReader::new().read_from(data.as_bytes()).unwrap_err();
        assert_eq!(err.kind(), "MalformedInputError");
    }

    #[test]
    fn test_semicolon_delimiter() -> Result<()> {
        let data = "Date;Data_Value\n2015-03-01;5\n";
        let readings = WeatherReader::with_delimiter(b';').read_from(data.as_bytes())?;
        assert_eq!(readings[0].raw_value, 5);
        Ok(())
    }
}
