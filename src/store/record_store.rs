//! The immutable, in-memory record store every dashboard computation starts from.

use crate::frames::rental_frame::RentalLazyFrame;
use crate::store::error::LoadError;
use crate::store::loader::{read_csv_bytes, read_csv_file, records_from_csv_frame, records_to_frame};
use crate::types::date_range::DateRange;
use crate::types::rental_record::RentalRecord;
use log::{debug, info};
use polars::prelude::{DataFrame, IntoLazy};
use std::path::Path;

/// Holds every rental record for the lifetime of the dashboard.
///
/// Records are kept sorted by date (stable, so same-day records keep their
/// source order). The store is never mutated after construction; filters and
/// aggregations produce new frames, so a single store can be shared by
/// reference between any number of computations.
///
/// # Examples
///
/// ```no_run
/// use rentstat::RecordStore;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let store = RecordStore::from_csv("all_data.csv")?;
/// if let Some(bounds) = store.bounds() {
///     println!("{} records covering {}", store.len(), bounds);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct RecordStore {
    records: Vec<RentalRecord>,
    frame: DataFrame,
    bounds: Option<DateRange>,
}

impl RecordStore {
    /// Loads the store from a CSV file with the bike-sharing dataset headers (`dteday`, `cnt`, ...).
    ///
    /// # Errors
    ///
    /// Returns a [`LoadError`] if the file is missing, cannot be parsed, lacks a
    /// required column, or contains an empty cell, bad date, unknown season
    /// code or negative count.
    pub fn from_csv(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        info!("Loading rental records from {:?}", path);
        let raw = read_csv_file(path)?;
        Self::from_records(records_from_csv_frame(&raw)?)
    }

    /// Loads the store from CSV content already in memory.
    pub fn from_csv_bytes(bytes: Vec<u8>) -> Result<Self, LoadError> {
        let raw = read_csv_bytes(bytes)?;
        Self::from_records(records_from_csv_frame(&raw)?)
    }

    /// Builds a store from already-typed records, sorting them by date.
    pub fn from_records(mut records: Vec<RentalRecord>) -> Result<Self, LoadError> {
        records.sort_by_key(|record| record.date);
        let frame = records_to_frame(&records)?;
        let bounds = match (records.first(), records.last()) {
            (Some(first), Some(last)) => DateRange::new(first.date, last.date).ok(),
            _ => None,
        };
        match bounds {
            Some(range) => info!("Loaded {} rental records covering {}", records.len(), range),
            None => info!("Loaded an empty rental record set"),
        }
        Ok(Self {
            records,
            frame,
            bounds,
        })
    }

    pub fn records(&self) -> &[RentalRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The earliest and latest record dates, or `None` for an empty store.
    pub fn bounds(&self) -> Option<DateRange> {
        self.bounds
    }

    /// A lazy view over every record.
    pub fn frame(&self) -> RentalLazyFrame {
        RentalLazyFrame::new(self.frame.clone().lazy())
    }

    /// Narrows the store to `range`, inclusive on both ends.
    ///
    /// Ranges reaching past the store bounds are fine and select the overlap,
    /// which may be empty.
    pub fn filter(&self, range: &DateRange) -> RentalLazyFrame {
        debug!("Filtering {} records to {}", self.records.len(), range);
        self.frame().for_range(range)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::season::Season;
    use chrono::NaiveDate;

    fn record(day: u32, total: u64) -> RentalRecord {
        RentalRecord {
            date: NaiveDate::from_ymd_opt(2011, 3, day).unwrap(),
            total_count: total,
            casual_count: total / 4,
            registered_count: total - total / 4,
            season: Season::Spring,
            temperature: 0.3,
            feeling_temperature: 0.28,
            humidity: 0.5,
            windspeed: 0.2,
        }
    }

    #[test]
    fn test_from_records_sorts_by_date_stably() -> Result<(), LoadError> {
        let store = RecordStore::from_records(vec![
            record(3, 30),
            record(1, 10),
            record(3, 31),
            record(2, 20),
        ])?;
        let totals: Vec<u64> = store.records().iter().map(|r| r.total_count).collect();
        assert_eq!(totals, vec![10, 20, 30, 31]);
        Ok(())
    }

    #[test]
    fn test_bounds() -> Result<(), LoadError> {
        let store = RecordStore::from_records(vec![record(5, 1), record(2, 1), record(9, 1)])?;
        let bounds = store.bounds().unwrap();
        assert_eq!(bounds.start(), NaiveDate::from_ymd_opt(2011, 3, 2).unwrap());
        assert_eq!(bounds.end(), NaiveDate::from_ymd_opt(2011, 3, 9).unwrap());
        Ok(())
    }

    #[test]
    fn test_empty_store() -> Result<(), LoadError> {
        let store = RecordStore::from_records(Vec::new())?;
        assert!(store.is_empty());
        assert!(store.bounds().is_none());
        Ok(())
    }

    #[test]
    fn test_from_csv_bytes() -> Result<(), LoadError> {
        let csv = "dteday,season,cnt,casual,registered,temp,atemp,hum,windspeed\n\
                   2011-01-02,1,801,131,670,0.36,0.35,0.69,0.24\n\
                   2011-01-01,1,985,331,654,0.34,0.36,0.80,0.16\n";
        let store = RecordStore::from_csv_bytes(csv.as_bytes().to_vec())?;
        assert_eq!(store.len(), 2);
        assert_eq!(store.records()[0].total_count, 985);
        Ok(())
    }
}
