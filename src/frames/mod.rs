use polars::prelude::LazyFrame;

pub mod daily_frame;
pub(crate) mod extract;
pub mod rental_frame;

/// A frame carrying the three ride-count columns, summable by the metric reducer.
///
/// Implemented by both the filtered record view and the daily aggregate, so
/// totals can be taken before or after aggregation.
pub trait RentFrame {
    fn lazy(&self) -> LazyFrame;
}
