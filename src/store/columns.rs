//! Column names shared by the record store frame and every frame derived from it.
//!
//! The names follow the source CSV headers, so a loaded frame needs no renaming.

pub(crate) const COL_DATE: &str = "dteday";
pub(crate) const COL_TOTAL: &str = "cnt";
pub(crate) const COL_CASUAL: &str = "casual";
pub(crate) const COL_REGISTERED: &str = "registered";
pub(crate) const COL_SEASON: &str = "season"; // 1 = Spring .. 4 = Winter
pub(crate) const COL_TEMP: &str = "temp";
pub(crate) const COL_ATEMP: &str = "atemp"; // Feeling temperature
pub(crate) const COL_HUM: &str = "hum"; // Fraction, 0..=1
pub(crate) const COL_WINDSPEED: &str = "windspeed";
