use crate::error::RentstatError;
use crate::trend::rolling::{rolling_mean, RollingWindow};
use chrono::NaiveDate;
use serde::Serialize;

/// Ride counts summed over one calendar day.
///
/// `rolling_mean` stays `None` until a trend has been attached with
/// [`DailyRents::with_rolling_mean`], and for the first `window - 1` rows after that.
#[derive(Debug, PartialEq, Clone, Serialize)]
pub struct DailyRentRow {
    pub date: NaiveDate,
    pub total_count: u64,
    pub casual_count: u64,
    pub registered_count: u64,
    pub rolling_mean: Option<f64>,
}

/// Date-ordered daily aggregate, one row per day present in the input.
#[derive(Debug, PartialEq, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct DailyRents {
    rows: Vec<DailyRentRow>,
}

impl DailyRents {
    pub(crate) fn new(rows: Vec<DailyRentRow>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[DailyRentRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The `total_count` series in date order, as fed to the trend smoother.
    pub fn total_counts(&self) -> Vec<u64> {
        self.rows.iter().map(|row| row.total_count).collect()
    }

    /// Returns a copy of these rows with `rolling_mean` filled for `window`.
    ///
    /// The window spans rows, not calendar days: a day missing from the input
    /// does not take a slot.
    pub fn with_rolling_mean(&self, window: RollingWindow) -> Result<DailyRents, RentstatError> {
        let means = rolling_mean(&self.total_counts(), window.days())?;
        let rows = self
            .rows
            .iter()
            .zip(means)
            .map(|(row, rolling_mean)| DailyRentRow {
                rolling_mean,
                ..row.clone()
            })
            .collect();
        Ok(DailyRents { rows })
    }
}
