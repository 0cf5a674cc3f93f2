use crate::store::columns::*;
use serde::Serialize;

/// Ride-count fields that can be summed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum CountField {
    Total,
    Casual,
    Registered,
}

impl CountField {
    pub const ALL: [CountField; 3] = [CountField::Total, CountField::Casual, CountField::Registered];

    pub(crate) fn column(self) -> &'static str {
        match self {
            CountField::Total => COL_TOTAL,
            CountField::Casual => COL_CASUAL,
            CountField::Registered => COL_REGISTERED,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CountField::Total => "Total Rents",
            CountField::Casual => "Total Rents by Casual Users",
            CountField::Registered => "Total Rents by Registered Users",
        }
    }
}

/// How a consumer is expected to present a measure. The reducer never applies it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ValueFormat {
    /// Degrees Celsius.
    Celsius,
    /// A fraction in `[0, 1]` shown as a percentage.
    Percentage,
    /// A bare decimal number.
    Plain,
}

/// Environmental readings that can be averaged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum MeasureField {
    Temperature,
    FeelingTemperature,
    Humidity,
    Windspeed,
}

impl MeasureField {
    pub const ALL: [MeasureField; 4] = [
        MeasureField::Temperature,
        MeasureField::FeelingTemperature,
        MeasureField::Humidity,
        MeasureField::Windspeed,
    ];

    pub(crate) fn column(self) -> &'static str {
        match self {
            MeasureField::Temperature => COL_TEMP,
            MeasureField::FeelingTemperature => COL_ATEMP,
            MeasureField::Humidity => COL_HUM,
            MeasureField::Windspeed => COL_WINDSPEED,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MeasureField::Temperature => "Average Temperature",
            MeasureField::FeelingTemperature => "Average Feeling Temperature",
            MeasureField::Humidity => "Average Humidity",
            MeasureField::Windspeed => "Average Windspeed",
        }
    }

    pub fn format(self) -> ValueFormat {
        match self {
            MeasureField::Temperature | MeasureField::FeelingTemperature => ValueFormat::Celsius,
            MeasureField::Humidity => ValueFormat::Percentage,
            MeasureField::Windspeed => ValueFormat::Plain,
        }
    }
}
