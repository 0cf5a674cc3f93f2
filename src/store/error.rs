use polars::error::PolarsError;
use std::path::PathBuf;
use thiserror::Error;

/// Failures while loading the rental dataset. All of them are fatal: no
/// partial record store is ever produced.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Rental data source '{0}' does not exist or is not a file")]
    SourceMissing(PathBuf),

    #[error("Failed to read rental CSV data from '{path}'")]
    CsvRead {
        path: PathBuf,
        #[source]
        source: PolarsError,
    },

    #[error("Missing required column '{column}' in rental data")]
    MissingColumn {
        column: &'static str,
        #[source]
        source: PolarsError,
    },

    #[error("Column '{column}' could not be read as {expected}")]
    ColumnType {
        column: &'static str,
        expected: &'static str,
        #[source]
        source: PolarsError,
    },

    #[error("Empty value in column '{column}' at row {row}")]
    MissingValue { column: &'static str, row: usize },

    #[error("Invalid date '{value}' at row {row}")]
    InvalidDate {
        row: usize,
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("Unknown season code {code} at row {row}, expected 1 to 4")]
    UnknownSeason { row: usize, code: i64 },

    #[error("Negative value {value} in count column '{column}' at row {row}")]
    NegativeCount {
        column: &'static str,
        row: usize,
        value: i64,
    },

    #[error("Failed to build the rental frame")]
    FrameBuild(#[source] PolarsError),
}
