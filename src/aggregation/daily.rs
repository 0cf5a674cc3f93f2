use crate::frames::daily_frame::DailyRentsLazyFrame;
use crate::frames::rental_frame::RentalLazyFrame;
use crate::store::columns::{COL_CASUAL, COL_DATE, COL_REGISTERED, COL_TOTAL};
use log::debug;
use polars::prelude::{col, SortMultipleOptions};

/// Buckets records by calendar day and sums the three ride counts per day.
///
/// Emits one row for every day that has at least one record, sorted ascending
/// by date. Days without records produce no row; nothing is zero-filled or
/// interpolated. Record dates carry no time of day, so grouping on the date
/// column is the day bucketing. An empty input yields an empty aggregate.
///
/// ```no_run
/// use rentstat::{aggregate_daily, RecordStore};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let store = RecordStore::from_csv("all_data.csv")?;
/// let daily = aggregate_daily(&store.frame()).collect_rows()?;
/// for row in daily.rows().iter().take(3) {
///     println!("{}: {} rides", row.date, row.total_count);
/// }
/// # Ok(())
/// # }
/// ```
pub fn aggregate_daily(records: &RentalLazyFrame) -> DailyRentsLazyFrame {
    debug!("Aggregating rental records by day");
    let frame = records
        .frame
        .clone()
        .group_by([col(COL_DATE)])
        .agg([
            col(COL_TOTAL).sum(),
            col(COL_CASUAL).sum(),
            col(COL_REGISTERED).sum(),
        ])
        .sort([COL_DATE], SortMultipleOptions::default());
    DailyRentsLazyFrame::new(frame)
}
