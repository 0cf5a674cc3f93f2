//! Contains the `RentalLazyFrame` structure, the lazily filtered view of the record store.

use crate::error::RentstatError;
use crate::frames::extract::{column_dates, column_f64, column_i64, column_u64};
use crate::frames::RentFrame;
use crate::store::columns::*;
use crate::types::date_range::DateRange;
use crate::types::rental_record::RentalRecord;
use crate::types::season::Season;
use crate::types::traits::any_date::AnyDate;
use crate::types::traits::date_period::DatePeriod;
use polars::prelude::{col, lit, DataFrame, Expr, LazyFrame};

/// A wrapper around a Polars `LazyFrame` holding rental records.
///
/// Obtained from [`crate::RecordStore::frame`] or [`crate::RecordStore::filter`].
/// Every method returns a *new* frame; the receiver and the store behind it are
/// left untouched. Filtering keeps the store's date order.
///
/// # Errors
///
/// Operations that evaluate the frame (`collect`, `collect_records`) can return
/// [`RentstatError::PolarsError`]. Methods resolving date-like arguments return
/// [`RentstatError::DateParsingError`] when an argument does not name a date.
#[derive(Clone)]
pub struct RentalLazyFrame {
    /// The underlying Polars LazyFrame containing the rental records.
    pub frame: LazyFrame,
}

impl RentalLazyFrame {
    pub fn new(frame: LazyFrame) -> Self {
        Self { frame }
    }

    /// Filters the records with an arbitrary Polars predicate.
    ///
    /// ```no_run
    /// # use rentstat::RecordStore;
    /// use polars::prelude::{col, lit};
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let store = RecordStore::from_csv("all_data.csv")?;
    /// let busy_days = store.frame().filter(col("cnt").gt(lit(5000u64)));
    /// println!("{} busy days", busy_days.collect_records()?.len());
    /// # Ok(())
    /// # }
    /// ```
    pub fn filter(&self, predicate: Expr) -> RentalLazyFrame {
        RentalLazyFrame::new(self.frame.clone().filter(predicate))
    }

    /// Keeps records dated within `range`, both ends inclusive.
    pub fn for_range(&self, range: &DateRange) -> RentalLazyFrame {
        self.filter(
            col(COL_DATE)
                .gt_eq(lit(range.start()))
                .and(col(COL_DATE).lt_eq(lit(range.end()))),
        )
    }

    /// Keeps records between two date-like bounds, inclusive.
    ///
    /// `start` resolves to the first day it names and `end` to the last, so
    /// `get_range(Year(2011), Month::new(3, 2012))` spans 2011-01-01 to 2012-03-31.
    ///
    /// # Errors
    ///
    /// [`RentstatError::DateParsingError`] if either bound does not resolve,
    /// [`RentstatError::InvalidRange`] if the start falls after the end.
    pub fn get_range(
        &self,
        start: impl AnyDate,
        end: impl AnyDate,
    ) -> Result<RentalLazyFrame, RentstatError> {
        let range = DateRange::resolve(start, end)?;
        Ok(self.for_range(&range))
    }

    /// Keeps the records of a single day.
    pub fn get_at(&self, date: impl AnyDate) -> Result<RentalLazyFrame, RentstatError> {
        let day = date
            .get_date_range()
            .ok_or(RentstatError::DateParsingError)?
            .start;
        Ok(self.filter(col(COL_DATE).eq(lit(day))))
    }

    /// Keeps the records of a whole period such as a `Year` or `Month`.
    pub fn get_for_period(&self, period: impl DatePeriod) -> Result<RentalLazyFrame, RentstatError> {
        let period = period
            .get_date_period()
            .ok_or(RentstatError::DateParsingError)?;
        self.get_range(period.start, period.end)
    }

    pub fn collect(&self) -> Result<DataFrame, RentstatError> {
        Ok(self.frame.clone().collect()?)
    }

    /// Evaluates the frame into typed records, in frame order.
    pub fn collect_records(&self) -> Result<Vec<RentalRecord>, RentstatError> {
        let df = self.collect()?;

        let dates = column_dates(&df, COL_DATE)?;
        let totals = column_u64(&df, COL_TOTAL)?;
        let casuals = column_u64(&df, COL_CASUAL)?;
        let registereds = column_u64(&df, COL_REGISTERED)?;
        let seasons = column_i64(&df, COL_SEASON)?;
        let temps = column_f64(&df, COL_TEMP)?;
        let atemps = column_f64(&df, COL_ATEMP)?;
        let hums = column_f64(&df, COL_HUM)?;
        let windspeeds = column_f64(&df, COL_WINDSPEED)?;

        (0..df.height())
            .map(|i| {
                let season = Season::from_code(seasons[i]).ok_or_else(|| {
                    RentstatError::UnexpectedData(format!("season code {} at row {}", seasons[i], i))
                })?;
                Ok(RentalRecord {
                    date: dates[i],
                    total_count: totals[i],
                    casual_count: casuals[i],
                    registered_count: registereds[i],
                    season,
                    temperature: temps[i],
                    feeling_temperature: atemps[i],
                    humidity: hums[i],
                    windspeed: windspeeds[i],
                })
            })
            .collect()
    }
}

impl RentFrame for RentalLazyFrame {
    fn lazy(&self) -> LazyFrame {
        self.frame.clone()
    }
}
