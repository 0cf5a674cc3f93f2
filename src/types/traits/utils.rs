use chrono::{Months, NaiveDate, NaiveTime};

/// Last calendar day of `month` in `year`, or `None` for an invalid month.
pub(crate) fn last_day_of_month(year: i32, month: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, 1)?
        .checked_add_months(Months::new(1))?
        .pred_opt()
}

/// Parses a `YYYY-MM-DD` date. A trailing `HH:MM:SS` time (after a space or
/// `T`, optionally with fractional seconds) must be valid and is then dropped.
pub(crate) fn parse_calendar_day(value: &str) -> Result<NaiveDate, chrono::ParseError> {
    let trimmed = value.trim();
    match trimmed.split_once(|c: char| c == ' ' || c == 'T') {
        Some((day, time)) => {
            NaiveTime::parse_from_str(time.trim(), "%H:%M:%S%.f")?;
            NaiveDate::parse_from_str(day, "%Y-%m-%d")
        }
        None => NaiveDate::parse_from_str(trimmed, "%Y-%m-%d"),
    }
}
