//! Error types for the NBA season-stats updater

use thiserror::Error;

pub type Result<T> = std::result::Result<T, NbaError>;

#[derive(Error, Debug)]
pub enum NbaError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid season identifier: {token}")]
    InvalidSeason { token: String },

    #[error("Failed to parse player ID: {0}")]
    InvalidPlayerId(#[from] std::num::ParseIntError),

    #[error("Result set {index} ({name}) missing from stats response")]
    MissingResultSet { index: usize, name: &'static str },

    #[error("Column {column} missing from result set {result_set}")]
    MissingColumn { column: String, result_set: String },

    #[error("Stats API returned no data")]
    NoData,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_season_message() {
        let err = NbaError::InvalidSeason {
            token: "24-25".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid season identifier: 24-25");
    }

    #[test]
    fn test_missing_result_set_message() {
        let err = NbaError::MissingResultSet {
            index: 1,
            name: "ByYearPlayerDashboard",
        };
        assert_eq!(
            err.to_string(),
            "Result set 1 (ByYearPlayerDashboard) missing from stats response"
        );
    }

    #[test]
    fn test_missing_column_message() {
        let err = NbaError::MissingColumn {
            column: "GROUP_VALUE".to_string(),
            result_set: "ByYearPlayerDashboard".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Column GROUP_VALUE missing from result set ByYearPlayerDashboard"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: NbaError = io.into();
        assert!(matches!(err, NbaError::Io(_)));
        assert!(err.to_string().contains("gone"));
    }
}
