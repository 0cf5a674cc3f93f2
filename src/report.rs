//! Plain-text rendering of a [`DashboardSnapshot`], used by the command-line front end.

use crate::dashboard::DashboardSnapshot;
use crate::metrics::fields::{CountField, ValueFormat};
use std::fmt::Write;

const NO_DATA: &str = "no data";

impl ValueFormat {
    /// Formats `value` for display: two decimals, humidity-style fractions as
    /// percentages.
    ///
    /// ```
    /// use rentstat::ValueFormat;
    ///
    /// assert_eq!(ValueFormat::Celsius.render(21.456), "21.46 °C");
    /// assert_eq!(ValueFormat::Percentage.render(0.62751), "62.75%");
    /// assert_eq!(ValueFormat::Plain.render(0.19), "0.19");
    /// ```
    pub fn render(self, value: f64) -> String {
        match self {
            ValueFormat::Celsius => format!("{:.2} °C", value),
            ValueFormat::Percentage => format!("{:.2}%", value * 100.0),
            ValueFormat::Plain => format!("{:.2}", value),
        }
    }
}

/// Renders the snapshot as a sectioned text report. With `include_daily`, every
/// daily row is listed along with its rolling mean.
pub fn render_text(snapshot: &DashboardSnapshot, include_daily: bool) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = write_report(&mut out, snapshot, include_daily);
    out
}

fn write_report(out: &mut String, snapshot: &DashboardSnapshot, include_daily: bool) -> std::fmt::Result {
    writeln!(out, "Bike rentals, {}", snapshot.range)?;
    writeln!(out)?;

    writeln!(out, "Daily Rents")?;
    for field in CountField::ALL {
        match &snapshot.totals {
            Some(totals) => writeln!(out, "  {:<34}{}", field.label(), totals.get(field))?,
            None => writeln!(out, "  {:<34}{}", field.label(), NO_DATA)?,
        }
    }
    writeln!(out)?;

    writeln!(out, "Total Rentals by Season")?;
    match &snapshot.season_totals {
        Some(seasons) if !seasons.is_empty() => {
            for (season, count) in seasons {
                writeln!(out, "  {:<34}{}", season.label(), count)?;
            }
        }
        _ => writeln!(out, "  {}", NO_DATA)?,
    }
    writeln!(out)?;

    writeln!(out, "Weather")?;
    for reading in &snapshot.environment {
        let value = reading
            .value
            .map_or_else(|| NO_DATA.to_string(), |v| reading.format.render(v));
        writeln!(out, "  {:<34}{}", reading.label, value)?;
    }
    writeln!(out)?;

    writeln!(
        out,
        "Seasonal Trend ({}-day rolling mean)",
        snapshot.rolling_window
    )?;
    match &snapshot.daily {
        Some(daily) if !daily.is_empty() => {
            let latest_trend = daily.rows().iter().rev().find_map(|row| row.rolling_mean);
            writeln!(out, "  {:<34}{}", "Days with rentals", daily.len())?;
            match latest_trend {
                Some(mean) => writeln!(out, "  {:<34}{:.2}", "Latest rolling mean", mean)?,
                None => writeln!(out, "  {:<34}{}", "Latest rolling mean", "not enough days")?,
            }
            if include_daily {
                writeln!(out)?;
                writeln!(out, "  {:<12}{:>8}{:>8}{:>12}{:>14}", "date", "total", "casual", "registered", "rolling mean")?;
                for row in daily.rows() {
                    let trend = row.rolling_mean.map_or_else(String::new, |m| format!("{:.2}", m));
                    writeln!(
                        out,
                        "  {:<12}{:>8}{:>8}{:>12}{:>14}",
                        row.date.to_string(),
                        row.total_count,
                        row.casual_count,
                        row.registered_count,
                        trend
                    )?;
                }
            }
        }
        _ => writeln!(out, "  {}", NO_DATA)?,
    }
    Ok(())
}
