//! Command-line front end: loads the rental CSV and prints the dashboard figures
//! for a date range, either as a text report or as JSON.

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use log::info;
use rentstat::{render_text, Dashboard, DateRange, RecordStore, DEFAULT_ROLLING_WINDOW};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "rentstat")]
#[command(about = "Bike rental dashboard figures for a date range", long_about = None)]
struct Cli {
    /// CSV file with the rental records
    #[arg(short, long, default_value = "all_data.csv")]
    data: PathBuf,

    /// First day of the range (YYYY-MM-DD, YYYY-MM or YYYY). Defaults to the earliest record
    #[arg(short, long)]
    start: Option<String>,

    /// Last day of the range (YYYY-MM-DD, YYYY-MM or YYYY). Defaults to the latest record
    #[arg(short, long)]
    end: Option<String>,

    /// Rolling mean window, in days with rentals
    #[arg(short, long, default_value_t = DEFAULT_ROLLING_WINDOW)]
    window: usize,

    /// Print the snapshot as JSON instead of a text report
    #[arg(long, default_value_t = false)]
    json: bool,

    /// List every daily row in the text report
    #[arg(long, default_value_t = false)]
    daily: bool,
}

fn main() -> Result<()> {
    // Set RUST_LOG=info (or debug) to see pipeline messages
    env_logger::init();

    let cli = Cli::parse();

    let store = RecordStore::from_csv(&cli.data)
        .with_context(|| format!("Failed to load rental data from {}", cli.data.display()))?;
    let dashboard = Dashboard::builder()
        .store(&store)
        .rolling_window(cli.window)
        .build()?;

    let bounds = dashboard.full_range();
    let range = match (cli.start, cli.end, bounds) {
        (Some(start), Some(end), _) => DateRange::resolve(start, end)?,
        (Some(start), None, Some(bounds)) => DateRange::resolve(start, bounds.end())?,
        (None, Some(end), Some(bounds)) => DateRange::resolve(bounds.start(), end)?,
        (None, None, Some(bounds)) => bounds,
        (_, _, None) => {
            return Err(anyhow!(
                "{} holds no records; pass both --start and --end",
                cli.data.display()
            ))
        }
    };
    info!("Selected range {}", range);

    let snapshot = dashboard.snapshot(range);
    if cli.json {
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
    } else {
        print!("{}", render_text(&snapshot, cli.daily));
    }

    Ok(())
}
