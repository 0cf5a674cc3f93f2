//! Contains the `DailyRentsLazyFrame` structure, the lazily evaluated daily aggregate.

use crate::error::RentstatError;
use crate::frames::extract::{column_dates, column_u64};
use crate::frames::RentFrame;
use crate::store::columns::{COL_CASUAL, COL_DATE, COL_REGISTERED, COL_TOTAL};
use crate::types::daily_rents::{DailyRentRow, DailyRents};
use polars::prelude::{DataFrame, LazyFrame};

/// A wrapper around a Polars `LazyFrame` with one row per calendar day.
///
/// Columns are the date and the three summed counts, under the same names the
/// record store uses. Instances come from [`crate::aggregate_daily`].
#[derive(Clone)]
pub struct DailyRentsLazyFrame {
    pub frame: LazyFrame,
}

impl DailyRentsLazyFrame {
    pub fn new(frame: LazyFrame) -> Self {
        Self { frame }
    }

    pub fn collect(&self) -> Result<DataFrame, RentstatError> {
        Ok(self.frame.clone().collect()?)
    }

    /// Evaluates the aggregate into rows, leaving `rolling_mean` unset.
    pub fn collect_rows(&self) -> Result<DailyRents, RentstatError> {
        let df = self.collect()?;

        let dates = column_dates(&df, COL_DATE)?;
        let totals = column_u64(&df, COL_TOTAL)?;
        let casuals = column_u64(&df, COL_CASUAL)?;
        let registereds = column_u64(&df, COL_REGISTERED)?;

        let rows = (0..df.height())
            .map(|i| DailyRentRow {
                date: dates[i],
                total_count: totals[i],
                casual_count: casuals[i],
                registered_count: registereds[i],
                rolling_mean: None,
            })
            .collect();
        Ok(DailyRents::new(rows))
    }
}

impl RentFrame for DailyRentsLazyFrame {
    fn lazy(&self) -> LazyFrame {
        self.frame.clone()
    }
}
