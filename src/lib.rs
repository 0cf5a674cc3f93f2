mod aggregation;
mod dashboard;
mod error;
mod frames;
mod metrics;
mod report;
mod store;
mod trend;
mod types;

pub use error::RentstatError;
pub use store::error::LoadError;
pub use store::record_store::RecordStore;

pub use dashboard::*;
pub use report::render_text;

pub use aggregation::daily::aggregate_daily;
pub use frames::daily_frame::DailyRentsLazyFrame;
pub use frames::rental_frame::RentalLazyFrame;
pub use frames::RentFrame;

pub use metrics::fields::{CountField, MeasureField, ValueFormat};
pub use metrics::reducer::{mean, season_totals, total};

pub use trend::rolling::{rolling_mean, RollingWindow, DEFAULT_ROLLING_WINDOW};

pub use types::daily_rents::{DailyRentRow, DailyRents};
pub use types::date_range::DateRange;
pub use types::rental_record::RentalRecord;
pub use types::season::Season;

pub use types::traits::any_date::AnyDate;
pub use types::traits::date_period::DatePeriod;
pub use types::traits::types::{Month, StartEndDate, Year};
