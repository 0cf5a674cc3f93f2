use crate::types::season::Season;
use chrono::NaiveDate;
use serde::Serialize;

/// One row of the source dataset: ride counts and weather readings for a day.
///
/// `total_count` is expected to equal `casual_count + registered_count`; this is
/// not checked. Humidity is a fraction in `[0, 1]`.
#[derive(Debug, PartialEq, Clone, Serialize)]
pub struct RentalRecord {
    pub date: NaiveDate,              // dteday
    pub total_count: u64,             // cnt
    pub casual_count: u64,            // casual
    pub registered_count: u64,        // registered
    pub season: Season,               // season (1-4)
    pub temperature: f64,             // temp
    pub feeling_temperature: f64,     // atemp
    pub humidity: f64,                // hum
    pub windspeed: f64,               // windspeed
}
