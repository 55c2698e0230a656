//! エラー型定義

use thiserror::Error;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Missing column: {0}")]
    MissingColumn(String),

    #[error("Invalid number in column '{column}' at row {row}: {value}")]
    InvalidNumber {
        column: String,
        row: usize,
        value: String,
    },

    #[error("Malformed skills field at row {row}: {value}")]
    MalformedSkills { row: usize, value: String },

    #[error("Excel error: {0}")]
    Excel(String),
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_io() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let error = Error::Io(io_error);
        let display = format!("{}", error);
        assert!(display.contains("IO error"));
        assert!(display.contains("file not found"));
    }

    #[test]
    fn test_error_display_missing_column() {
        let error = Error::MissingColumn("AverageWage".to_string());
        assert_eq!(format!("{}", error), "Missing column: AverageWage");
    }

    #[test]
    fn test_error_display_invalid_number() {
        let error = Error::InvalidNumber {
            column: "EntryLevelWage".to_string(),
            row: 4,
            value: "abc".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("EntryLevelWage"));
        assert!(display.contains("row 4"));
        assert!(display.contains("abc"));
    }

    #[test]
    fn test_error_from_io() {
        let io_error = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "access denied");
        let error: Error = io_error.into();
        assert!(matches!(error, Error::Io(_)));
    }

    #[test]
    fn test_error_debug() {
        let error = Error::MalformedSkills { row: 2, value: "['SQL".to_string() };
        let debug = format!("{:?}", error);
        assert!(debug.contains("MalformedSkills"));
        assert!(debug.contains("['SQL"));
    }
}
