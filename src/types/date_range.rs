use crate::error::RentstatError;
use crate::types::traits::any_date::AnyDate;
use chrono::NaiveDate;
use serde::Serialize;
use std::fmt;

/// An inclusive span of calendar days with `start <= end`.
///
/// The bounds are not checked against any record store: a range outside the
/// loaded data is valid and simply selects nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    /// Creates a range, rejecting `start > end` with [`RentstatError::InvalidRange`].
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, RentstatError> {
        if start > end {
            return Err(RentstatError::InvalidRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// Resolves date-like endpoints: the start takes the first day of `start`,
    /// the end takes the last day of `end`.
    ///
    /// ```
    /// use rentstat::{DateRange, Month, Year};
    ///
    /// let range = DateRange::resolve(Month::new(3, 2011), Year(2011)).unwrap();
    /// assert_eq!(range.start().to_string(), "2011-03-01");
    /// assert_eq!(range.end().to_string(), "2011-12-31");
    /// ```
    pub fn resolve(start: impl AnyDate, end: impl AnyDate) -> Result<Self, RentstatError> {
        let start = start
            .get_date_range()
            .ok_or(RentstatError::DateParsingError)?
            .start;
        let end = end
            .get_date_range()
            .ok_or(RentstatError::DateParsingError)?
            .end;
        Self::new(start, end)
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} to {}", self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::traits::types::Year;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_single_day_range_is_valid() {
        let range = DateRange::new(ymd(2011, 5, 1), ymd(2011, 5, 1)).unwrap();
        assert_eq!(range.start(), range.end());
        assert_eq!(range.to_string(), "2011-05-01 to 2011-05-01");
    }

    #[test]
    fn test_reversed_range_is_rejected() {
        let err = DateRange::new(ymd(2011, 5, 2), ymd(2011, 5, 1)).unwrap_err();
        assert!(matches!(err, RentstatError::InvalidRange { .. }));
    }

    #[test]
    fn test_resolve_from_strings_and_years() {
        let range = DateRange::resolve("2011-02-03", Year(2012)).unwrap();
        assert_eq!(range.start(), ymd(2011, 2, 3));
        assert_eq!(range.end(), ymd(2012, 12, 31));

        let err = DateRange::resolve("yesterday", Year(2012)).unwrap_err();
        assert!(matches!(err, RentstatError::DateParsingError));
    }
}
