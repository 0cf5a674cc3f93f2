use crate::store::error::LoadError;
use chrono::NaiveDate;
use polars::error::PolarsError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RentstatError {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error("Cannot compute the mean of '{column}' over zero records")]
    EmptyInput { column: &'static str },

    #[error("Rolling window must cover at least one row, got {0}")]
    InvalidWindow(usize),

    #[error("Invalid date range: start {start} is after end {end}")]
    InvalidRange { start: NaiveDate, end: NaiveDate },

    #[error("Failed to resolve a date from the given input")]
    DateParsingError,

    #[error("Failed evaluating rental frame: {0}")]
    PolarsError(#[from] PolarsError),

    #[error("Required column '{0}' not found in frame")]
    ColumnNotFound(String, #[source] PolarsError),

    #[error("Unexpected frame content: {0}")]
    UnexpectedData(String),
}
