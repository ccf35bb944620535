use thiserror::Error;

pub type Result<T> = std::result::Result<T, RecordsError>;

#[derive(Error, Debug)]
pub enum RecordsError {
    #[error("Malformed input at row {row}: {message}")]
    MalformedInput { row: usize, message: String },

    #[error("Invalid year window: {0}")]
    InvalidWindow(String),

    #[error("Empty result: {0}")]
    EmptyResult(String),

    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("Chart rendering error: {0}")]
    Chart(String),
}

impl RecordsError {
    /// Short name of the error kind, used when reporting a failed run
    pub fn kind(&self) -> &'static str {
        match self {
            RecordsError::MalformedInput { .. } => "MalformedInputError",
            RecordsError::InvalidWindow(_) => "InvalidWindowError",
            RecordsError::EmptyResult(_) => "EmptyResultError",
            RecordsError::Io(_) => "IoError",
            RecordsError::Csv(_) => "CsvError",
            RecordsError::Json(_) => "JsonError",
            RecordsError::Config(_) => "ConfigError",
            RecordsError::Validation(_) => "ValidationError",
            RecordsError::Chart(_) => "ChartError",
        }
    }

    pub fn malformed(row: usize, message: impl Into<String>) -> Self {
        RecordsError::MalformedInput {
            row,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kinds() {
        assert_eq!(RecordsError::malformed(3, "bad").kind(), "MalformedInputError");
        assert_eq!(
            RecordsError::InvalidWindow("overlap".to_string()).kind(),
            "InvalidWindowError"
        );
        assert_eq!(
            RecordsError::EmptyResult("baseline".to_string()).kind(),
            "EmptyResultError"
        );
    }

    #[test]
    fn test_malformed_message_names_row() {
        let err = RecordsError::malformed(42, "Invalid date: 'yesterday'");
        assert_eq!(
            err.to_string(),
            "Malformed input at row 42: Invalid date: 'yesterday'"
        );
    }
}
