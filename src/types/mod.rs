pub mod daily_rents;
pub mod date_range;
pub mod rental_record;
pub mod season;
pub mod traits;
