use crate::types::traits::types::{Month, StartEndDate, Year};
use crate::types::traits::utils::{last_day_of_month, parse_calendar_day};
use chrono::NaiveDate;

/// Anything that resolves to an inclusive span of calendar days.
///
/// Used for range endpoints: a range start takes the first day of the span,
/// a range end takes the last one. A single day resolves to itself.
pub trait AnyDate {
    fn get_date_range(self) -> Option<StartEndDate>;
}

impl AnyDate for NaiveDate {
    fn get_date_range(self) -> Option<StartEndDate> {
        Some(StartEndDate {
            start: self,
            end: self,
        })
    }
}

/// Accepts `YYYY-MM-DD` (a trailing time is ignored), `YYYY-MM` or `YYYY`.
impl AnyDate for &str {
    fn get_date_range(self) -> Option<StartEndDate> {
        if let Ok(day) = parse_calendar_day(self) {
            return day.get_date_range();
        }
        let trimmed = self.trim();
        match trimmed.split_once('-') {
            Some((year, month)) => Month(year.parse().ok()?, month.parse().ok()?).get_date_range(),
            None => Year(trimmed.parse().ok()?).get_date_range(),
        }
    }
}

impl AnyDate for String {
    fn get_date_range(self) -> Option<StartEndDate> {
        self.as_str().get_date_range()
    }
}

impl AnyDate for Year {
    fn get_date_range(self) -> Option<StartEndDate> {
        Some(StartEndDate {
            start: NaiveDate::from_ymd_opt(self.0, 1, 1)?,
            end: NaiveDate::from_ymd_opt(self.0, 12, 31)?,
        })
    }
}

impl AnyDate for Month {
    fn get_date_range(self) -> Option<StartEndDate> {
        Some(StartEndDate {
            start: NaiveDate::from_ymd_opt(self.year(), self.month(), 1)?,
            end: last_day_of_month(self.year(), self.month())?,
        })
    }
}
