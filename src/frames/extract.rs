//! Helpers to pull typed, null-free vectors out of collected frames.

use crate::error::RentstatError;
use chrono::{Duration, NaiveDate};
use polars::prelude::*;

fn get_column<'a>(df: &'a DataFrame, col: &str) -> Result<&'a Column, RentstatError> {
    df.column(col)
        .map_err(|e| RentstatError::ColumnNotFound(col.to_string(), e))
}

fn unexpected_null(col: &str, row: usize) -> RentstatError {
    RentstatError::UnexpectedData(format!("null in column '{}' at row {}", col, row))
}

pub(crate) fn column_u64(df: &DataFrame, col: &str) -> Result<Vec<u64>, RentstatError> {
    let cast = get_column(df, col)?.cast(&DataType::UInt64)?;
    cast.u64()?
        .into_iter()
        .enumerate()
        .map(|(row, value)| value.ok_or_else(|| unexpected_null(col, row)))
        .collect()
}

pub(crate) fn column_i64(df: &DataFrame, col: &str) -> Result<Vec<i64>, RentstatError> {
    let cast = get_column(df, col)?.cast(&DataType::Int64)?;
    cast.i64()?
        .into_iter()
        .enumerate()
        .map(|(row, value)| value.ok_or_else(|| unexpected_null(col, row)))
        .collect()
}

pub(crate) fn column_f64(df: &DataFrame, col: &str) -> Result<Vec<f64>, RentstatError> {
    let cast = get_column(df, col)?.cast(&DataType::Float64)?;
    cast.f64()?
        .into_iter()
        .enumerate()
        .map(|(row, value)| value.ok_or_else(|| unexpected_null(col, row)))
        .collect()
}

/// Reads a `Date` column; Polars stores dates as days since the Unix epoch.
pub(crate) fn column_dates(df: &DataFrame, col: &str) -> Result<Vec<NaiveDate>, RentstatError> {
    let epoch = NaiveDate::from_ymd_opt(1970, 1, 1)
        .ok_or_else(|| RentstatError::UnexpectedData("epoch date out of range".to_string()))?;
    let days = get_column(df, col)?.cast(&DataType::Int32)?;
    days.i32()?
        .into_iter()
        .enumerate()
        .map(|(row, value)| {
            value
                .map(|d| epoch + Duration::days(d as i64))
                .ok_or_else(|| unexpected_null(col, row))
        })
        .collect()
}

/// First value of a single-row float column, `None` when it is null or missing.
pub(crate) fn scalar_f64(df: &DataFrame, col: &str) -> Result<Option<f64>, RentstatError> {
    let cast = get_column(df, col)?.cast(&DataType::Float64)?;
    Ok(cast.f64()?.get(0))
}

/// First value of a single-row count column, `None` when it is null or missing.
pub(crate) fn scalar_u64(df: &DataFrame, col: &str) -> Result<Option<u64>, RentstatError> {
    let cast = get_column(df, col)?.cast(&DataType::UInt64)?;
    Ok(cast.u64()?.get(0))
}
