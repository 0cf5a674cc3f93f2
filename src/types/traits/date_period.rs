use crate::types::traits::any_date::AnyDate;
use crate::types::traits::types::{Month, StartEndDate, Year};

/// A self-contained calendar period, such as a whole year or a single month.
pub trait DatePeriod: AnyDate + Sized {
    fn get_date_period(self) -> Option<StartEndDate> {
        self.get_date_range()
    }
}

impl DatePeriod for Year {}

impl DatePeriod for Month {}
