//! Scalar reductions over rental frames.
//!
//! Every reduction evaluates its input frame afresh; nothing is cached between
//! calls and no input is modified.

use crate::error::RentstatError;
use crate::frames::extract::{column_i64, column_u64, scalar_f64, scalar_u64};
use crate::frames::rental_frame::RentalLazyFrame;
use crate::frames::RentFrame;
use crate::metrics::fields::{CountField, MeasureField};
use crate::store::columns::{COL_SEASON, COL_TOTAL};
use crate::types::season::Season;
use polars::prelude::{col, DataType, SortMultipleOptions};
use std::collections::BTreeMap;

/// Sums a count field over `rows`, which may be filtered records or the daily
/// aggregate. An empty frame sums to 0.
pub fn total(rows: &impl RentFrame, field: CountField) -> Result<u64, RentstatError> {
    let column = field.column();
    let df = rows
        .lazy()
        .select([col(column).sum().cast(DataType::UInt64)])
        .collect()?;
    Ok(scalar_u64(&df, column)?.unwrap_or(0))
}

/// Arithmetic mean of a measure over the filtered records.
///
/// # Errors
///
/// [`RentstatError::EmptyInput`] when `records` holds no rows. Callers should
/// show a "no data" placeholder rather than a number.
pub fn mean(records: &RentalLazyFrame, field: MeasureField) -> Result<f64, RentstatError> {
    let column = field.column();
    let df = records
        .frame
        .clone()
        .select([col(column).mean()])
        .collect()?;
    scalar_f64(&df, column)?
        .filter(|value| !value.is_nan())
        .ok_or(RentstatError::EmptyInput { column })
}

/// Sums `total_count` per season over the filtered records.
///
/// Only seasons with at least one record appear; iteration order is
/// Spring, Summer, Fall, Winter.
pub fn season_totals(records: &RentalLazyFrame) -> Result<BTreeMap<Season, u64>, RentstatError> {
    let df = records
        .frame
        .clone()
        .group_by([col(COL_SEASON)])
        .agg([col(COL_TOTAL).sum()])
        .sort([COL_SEASON], SortMultipleOptions::default())
        .collect()?;

    let codes = column_i64(&df, COL_SEASON)?;
    let totals = column_u64(&df, COL_TOTAL)?;

    codes
        .into_iter()
        .zip(totals)
        .map(|(code, total)| {
            Season::from_code(code)
                .map(|season| (season, total))
                .ok_or_else(|| RentstatError::UnexpectedData(format!("season code {}", code)))
        })
        .collect()
}
