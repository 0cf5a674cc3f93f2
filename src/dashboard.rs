//! This module provides the main entry point for computing dashboard figures.
//! A [`Dashboard`] borrows an immutable [`RecordStore`] and turns a date range
//! into a [`DashboardSnapshot`] holding every derived aggregate.

use crate::aggregation::daily::aggregate_daily;
use crate::error::RentstatError;
use crate::frames::daily_frame::DailyRentsLazyFrame;
use crate::metrics::fields::{CountField, MeasureField, ValueFormat};
use crate::metrics::reducer::{mean, season_totals, total};
use crate::store::record_store::RecordStore;
use crate::trend::rolling::RollingWindow;
use crate::types::daily_rents::DailyRents;
use crate::types::date_range::DateRange;
use crate::types::season::Season;
use crate::types::traits::any_date::AnyDate;
use bon::bon;
use log::{debug, error, warn};
use serde::Serialize;
use std::collections::BTreeMap;

/// Ride totals over the selected range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RentTotals {
    pub total: u64,
    pub casual: u64,
    pub registered: u64,
}

impl RentTotals {
    pub fn get(&self, field: CountField) -> u64 {
        match field {
            CountField::Total => self.total,
            CountField::Casual => self.casual,
            CountField::Registered => self.registered,
        }
    }
}

/// One averaged environmental factor. `value` is `None` when the range holds
/// no records or the computation failed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EnvironmentReading {
    pub field: MeasureField,
    pub label: &'static str,
    pub value: Option<f64>,
    pub format: ValueFormat,
}

/// Everything the dashboard displays for one date range.
///
/// Each section is computed independently. A section that failed is `None`
/// (and logged) while the others are still filled in.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardSnapshot {
    pub range: DateRange,
    pub rolling_window: usize,
    pub totals: Option<RentTotals>,
    pub daily: Option<DailyRents>,
    pub season_totals: Option<BTreeMap<Season, u64>>,
    pub environment: Vec<EnvironmentReading>,
}

/// Computes dashboard snapshots over a borrowed record store.
///
/// # Examples
///
/// ```no_run
/// use rentstat::{Dashboard, DateRange, RecordStore};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let store = RecordStore::from_csv("all_data.csv")?;
/// let dashboard = Dashboard::builder().store(&store).rolling_window(14).build()?;
///
/// let range = DateRange::resolve("2012-01-01", "2012-06-30")?;
/// let snapshot = dashboard.snapshot(range);
/// if let Some(totals) = snapshot.totals {
///     println!("{} rides in {}", totals.total, range);
/// }
/// # Ok(())
/// # }
/// ```
pub struct Dashboard<'a> {
    store: &'a RecordStore,
    window: RollingWindow,
}

#[bon]
impl<'a> Dashboard<'a> {
    /// Creates a dashboard over `store`.
    ///
    /// # Arguments
    ///
    /// * `.store(&RecordStore)`: **Required.** The loaded records.
    /// * `.rolling_window(usize)`: Optional. Trend window in rows. Defaults to `30`.
    ///
    /// # Errors
    ///
    /// [`RentstatError::InvalidWindow`] for a zero window. This is a configuration
    /// mistake and is reported before any snapshot is computed.
    #[builder]
    pub fn new(store: &'a RecordStore, rolling_window: Option<usize>) -> Result<Self, RentstatError> {
        let window = match rolling_window {
            Some(days) => RollingWindow::new(days)?,
            None => RollingWindow::default(),
        };
        Ok(Self { store, window })
    }

    pub fn store(&self) -> &RecordStore {
        self.store
    }

    pub fn rolling_window(&self) -> RollingWindow {
        self.window
    }

    /// The store's full date span, the default selection. `None` for an empty store.
    pub fn full_range(&self) -> Option<DateRange> {
        self.store.bounds()
    }

    /// Recomputes every dashboard figure for `range`.
    pub fn snapshot(&self, range: DateRange) -> DashboardSnapshot {
        debug!("Computing dashboard snapshot for {}", range);
        let filtered = self.store.filter(&range);
        let daily_frame = aggregate_daily(&filtered);

        let totals = local("totals", daily_totals(&daily_frame));
        let daily = local(
            "daily rents",
            daily_frame
                .collect_rows()
                .and_then(|daily| daily.with_rolling_mean(self.window)),
        );
        let season_totals = local("season totals", season_totals(&filtered));
        let environment = MeasureField::ALL
            .into_iter()
            .map(|field| EnvironmentReading {
                field,
                label: field.label(),
                value: local(field.label(), mean(&filtered, field)),
                format: field.format(),
            })
            .collect();

        DashboardSnapshot {
            range,
            rolling_window: self.window.days(),
            totals,
            daily,
            season_totals,
            environment,
        }
    }
}

fn daily_totals(daily: &DailyRentsLazyFrame) -> Result<RentTotals, RentstatError> {
    Ok(RentTotals {
        total: total(daily, CountField::Total)?,
        casual: total(daily, CountField::Casual)?,
        registered: total(daily, CountField::Registered)?,
    })
}

/// Keeps a section failure from reaching the other sections.
fn local<T>(section: &str, result: Result<T, RentstatError>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(RentstatError::EmptyInput { column }) => {
            warn!("No records for {} ('{}'), showing placeholder", section, column);
            None
        }
        Err(e) => {
            error!("Failed computing {}: {}", section, e);
            None
        }
    }
}

/// The currently selected date range of an interactive dashboard.
///
/// A rejected selection leaves the previous range in place, so the dashboard
/// always has a valid range to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeSelection {
    current: DateRange,
}

impl RangeSelection {
    pub fn new(initial: DateRange) -> Self {
        Self { current: initial }
    }

    pub fn current(&self) -> DateRange {
        self.current
    }

    /// Adopts `start..=end` as the new range.
    ///
    /// # Errors
    ///
    /// [`RentstatError::InvalidRange`] if `start` is after `end`, or
    /// [`RentstatError::DateParsingError`] if either bound does not resolve. In
    /// both cases the current range is kept.
    pub fn select(&mut self, start: impl AnyDate, end: impl AnyDate) -> Result<DateRange, RentstatError> {
        match DateRange::resolve(start, end) {
            Ok(range) => {
                self.current = range;
                Ok(range)
            }
            Err(e) => {
                warn!("Rejected range selection, keeping {}: {}", self.current, e);
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::rental_record::RentalRecord;
    use chrono::{Duration, NaiveDate};

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    /// Ten consecutive days starting 2011-01-01 with totals 10, 20, .., 100.
    fn test_store() -> RecordStore {
        let records = (0..10u64)
            .map(|i| RentalRecord {
                date: ymd(2011, 1, 1) + Duration::days(i as i64),
                total_count: (i + 1) * 10,
                casual_count: i + 1,
                registered_count: (i + 1) * 9,
                season: if i < 5 { Season::Winter } else { Season::Spring },
                temperature: 5.0,
                feeling_temperature: 3.0,
                humidity: 0.75,
                windspeed: 0.2,
            })
            .collect();
        RecordStore::from_records(records).unwrap()
    }

    #[test]
    fn test_builder_defaults_to_thirty_day_window() -> Result<(), RentstatError> {
        let store = test_store();
        let dashboard = Dashboard::builder().store(&store).build()?;
        assert_eq!(dashboard.rolling_window().days(), 30);
        Ok(())
    }

    #[test]
    fn test_builder_rejects_zero_window() {
        let store = test_store();
        let result = Dashboard::builder().store(&store).rolling_window(0).build();
        assert!(matches!(result, Err(RentstatError::InvalidWindow(0))));
    }

    #[test]
    fn test_full_range_snapshot() -> Result<(), RentstatError> {
        let store = test_store();
        let dashboard = Dashboard::builder().store(&store).rolling_window(3).build()?;
        let range = dashboard.full_range().unwrap();
        let snapshot = dashboard.snapshot(range);

        assert_eq!(
            snapshot.totals,
            Some(RentTotals {
                total: 550,
                casual: 55,
                registered: 495,
            })
        );

        let daily = snapshot.daily.unwrap();
        assert_eq!(daily.len(), 10);
        assert_eq!(daily.rows()[1].rolling_mean, None);
        assert_eq!(daily.rows()[2].rolling_mean, Some(20.0));
        assert_eq!(daily.rows()[9].rolling_mean, Some(90.0));

        let seasons = snapshot.season_totals.unwrap();
        assert_eq!(seasons.get(&Season::Winter), Some(&150));
        assert_eq!(seasons.get(&Season::Spring), Some(&400));
        assert_eq!(seasons.get(&Season::Summer), None);

        let humidity = snapshot
            .environment
            .iter()
            .find(|reading| reading.field == MeasureField::Humidity)
            .unwrap();
        assert_eq!(humidity.value, Some(0.75));
        assert_eq!(humidity.format, ValueFormat::Percentage);
        Ok(())
    }

    #[test]
    fn test_empty_range_keeps_other_sections() -> Result<(), RentstatError> {
        let store = test_store();
        let dashboard = Dashboard::builder().store(&store).build()?;
        let snapshot = dashboard.snapshot(DateRange::new(ymd(2015, 1, 1), ymd(2015, 2, 1))?);

        assert_eq!(snapshot.totals.map(|t| t.total), Some(0));
        assert!(snapshot.daily.unwrap().is_empty());
        assert!(snapshot.season_totals.unwrap().is_empty());
        assert_eq!(snapshot.environment.len(), 4);
        assert!(snapshot.environment.iter().all(|r| r.value.is_none()));
        Ok(())
    }

    #[test]
    fn test_snapshots_are_independent() -> Result<(), RentstatError> {
        let store = test_store();
        let dashboard = Dashboard::builder().store(&store).rolling_window(2).build()?;
        let narrow = DateRange::new(ymd(2011, 1, 3), ymd(2011, 1, 4))?;
        let first = dashboard.snapshot(narrow);
        let _wide = dashboard.snapshot(dashboard.full_range().unwrap());
        let again = dashboard.snapshot(narrow);

        assert_eq!(first, again);
        assert_eq!(first.totals.map(|t| t.total), Some(70));
        Ok(())
    }

    #[test]
    fn test_range_selection_keeps_prior_on_error() {
        let initial = DateRange::new(ymd(2011, 1, 1), ymd(2011, 1, 10)).unwrap();
        let mut selection = RangeSelection::new(initial);

        assert!(matches!(
            selection.select("2011-01-09", "2011-01-02"),
            Err(RentstatError::InvalidRange { .. })
        ));
        assert_eq!(selection.current(), initial);

        assert!(selection.select("garbage", "2011-01-02").is_err());
        assert_eq!(selection.current(), initial);

        let adopted = selection.select("2011-01-02", "2011-01-05").unwrap();
        assert_eq!(selection.current(), adopted);
        assert_eq!(adopted.start(), ymd(2011, 1, 2));
    }
}
