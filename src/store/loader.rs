use crate::store::columns::*;
use crate::store::error::LoadError;
use crate::types::rental_record::RentalRecord;
use crate::types::season::Season;
use crate::types::traits::utils::parse_calendar_day;
use polars::prelude::*;
use std::io::Cursor;
use std::path::Path;

/// Reads a rental CSV file with a header row into an untyped DataFrame.
pub(crate) fn read_csv_file(path: &Path) -> Result<DataFrame, LoadError> {
    if !path.is_file() {
        return Err(LoadError::SourceMissing(path.to_path_buf()));
    }

    CsvReadOptions::default()
        .with_has_header(true)
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .map_err(|e| LoadError::CsvRead {
            path: path.to_path_buf(),
            source: e,
        })?
        .finish()
        .map_err(|e| LoadError::CsvRead {
            path: path.to_path_buf(),
            source: e,
        })
}

/// Reads in-memory CSV bytes with a header row into an untyped DataFrame.
pub(crate) fn read_csv_bytes(bytes: Vec<u8>) -> Result<DataFrame, LoadError> {
    CsvReadOptions::default()
        .with_has_header(true)
        .into_reader_with_file_handle(Cursor::new(bytes))
        .finish()
        .map_err(|e| LoadError::CsvRead {
            path: "<memory>".into(),
            source: e,
        })
}

fn get_column<'a>(df: &'a DataFrame, column: &'static str) -> Result<&'a Column, LoadError> {
    df.column(column)
        .map_err(|e| LoadError::MissingColumn { column, source: e })
}

fn cast_column(
    df: &DataFrame,
    column: &'static str,
    dtype: &DataType,
    expected: &'static str,
) -> Result<Column, LoadError> {
    get_column(df, column)?
        .strict_cast(dtype)
        .map_err(type_error(column, expected))
}

/// Rejects a float column holding any value with a fractional part, which an
/// integer cast would otherwise truncate.
fn ensure_integral(df: &DataFrame, column: &'static str) -> Result<(), LoadError> {
    let raw = get_column(df, column)?;
    if !raw.dtype().is_float() {
        return Ok(());
    }
    let floats = raw
        .cast(&DataType::Float64)
        .map_err(type_error(column, "integer"))?;
    let fractional = floats
        .f64()
        .map_err(type_error(column, "integer"))?
        .into_iter()
        .enumerate()
        .find_map(|(row, value)| value.filter(|v| v.fract() != 0.0).map(|v| (row, v)));

    match fractional {
        Some((row, value)) => Err(LoadError::ColumnType {
            column,
            expected: "integer",
            source: PolarsError::ComputeError(
                format!("non-integral value {value} at row {row}").into(),
            ),
        }),
        None => Ok(()),
    }
}

fn type_error(column: &'static str, expected: &'static str) -> impl Fn(PolarsError) -> LoadError {
    move |e| LoadError::ColumnType {
        column,
        expected,
        source: e,
    }
}

fn read_dates(df: &DataFrame) -> Result<Vec<chrono::NaiveDate>, LoadError> {
    let strings = cast_column(df, COL_DATE, &DataType::String, "text")?;
    let chunked = strings.str().map_err(type_error(COL_DATE, "text"))?;
    chunked
        .into_iter()
        .enumerate()
        .map(|(row, value)| {
            let value = value.ok_or(LoadError::MissingValue {
                column: COL_DATE,
                row,
            })?;
            parse_calendar_day(value).map_err(|e| LoadError::InvalidDate {
                row,
                value: value.to_string(),
                source: e,
            })
        })
        .collect()
}

fn read_integers(df: &DataFrame, column: &'static str) -> Result<Vec<i64>, LoadError> {
    ensure_integral(df, column)?;
    let cast = cast_column(df, column, &DataType::Int64, "integer")?;
    let chunked = cast.i64().map_err(type_error(column, "integer"))?;
    chunked
        .into_iter()
        .enumerate()
        .map(|(row, value)| value.ok_or(LoadError::MissingValue { column, row }))
        .collect()
}

fn read_counts(df: &DataFrame, column: &'static str) -> Result<Vec<u64>, LoadError> {
    read_integers(df, column)?
        .into_iter()
        .enumerate()
        .map(|(row, value)| {
            u64::try_from(value).map_err(|_| LoadError::NegativeCount { column, row, value })
        })
        .collect()
}

fn read_seasons(df: &DataFrame) -> Result<Vec<Season>, LoadError> {
    read_integers(df, COL_SEASON)?
        .into_iter()
        .enumerate()
        .map(|(row, code)| Season::from_code(code).ok_or(LoadError::UnknownSeason { row, code }))
        .collect()
}

fn read_floats(df: &DataFrame, column: &'static str) -> Result<Vec<f64>, LoadError> {
    let cast = cast_column(df, column, &DataType::Float64, "float")?;
    let chunked = cast.f64().map_err(type_error(column, "float"))?;
    chunked
        .into_iter()
        .enumerate()
        .map(|(row, value)| value.ok_or(LoadError::MissingValue { column, row }))
        .collect()
}

/// Converts a raw CSV frame into typed records, in source row order.
///
/// Every required column must be present and every cell filled; extra columns
/// are ignored.
pub(crate) fn records_from_csv_frame(df: &DataFrame) -> Result<Vec<RentalRecord>, LoadError> {
    let dates = read_dates(df)?;
    let totals = read_counts(df, COL_TOTAL)?;
    let casuals = read_counts(df, COL_CASUAL)?;
    let registereds = read_counts(df, COL_REGISTERED)?;
    let seasons = read_seasons(df)?;
    let temps = read_floats(df, COL_TEMP)?;
    let atemps = read_floats(df, COL_ATEMP)?;
    let hums = read_floats(df, COL_HUM)?;
    let windspeeds = read_floats(df, COL_WINDSPEED)?;

    Ok((0..df.height())
        .map(|i| RentalRecord {
            date: dates[i],
            total_count: totals[i],
            casual_count: casuals[i],
            registered_count: registereds[i],
            season: seasons[i],
            temperature: temps[i],
            feeling_temperature: atemps[i],
            humidity: hums[i],
            windspeed: windspeeds[i],
        })
        .collect())
}

/// Builds the typed store frame from records.
pub(crate) fn records_to_frame(records: &[RentalRecord]) -> Result<DataFrame, LoadError> {
    let dates: Vec<chrono::NaiveDate> = records.iter().map(|r| r.date).collect();
    let totals: Vec<u64> = records.iter().map(|r| r.total_count).collect();
    let casuals: Vec<u64> = records.iter().map(|r| r.casual_count).collect();
    let registereds: Vec<u64> = records.iter().map(|r| r.registered_count).collect();
    let seasons: Vec<i64> = records.iter().map(|r| r.season.code()).collect();
    let temps: Vec<f64> = records.iter().map(|r| r.temperature).collect();
    let atemps: Vec<f64> = records.iter().map(|r| r.feeling_temperature).collect();
    let hums: Vec<f64> = records.iter().map(|r| r.humidity).collect();
    let windspeeds: Vec<f64> = records.iter().map(|r| r.windspeed).collect();

    df!(
        COL_DATE => dates,
        COL_TOTAL => totals,
        COL_CASUAL => casuals,
        COL_REGISTERED => registereds,
        COL_SEASON => seasons,
        COL_TEMP => temps,
        COL_ATEMP => atemps,
        COL_HUM => hums,
        COL_WINDSPEED => windspeeds,
    )
    .map_err(LoadError::FrameBuild)
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "instant,dteday,season,cnt,casual,registered,temp,atemp,hum,windspeed\n";

    fn load(rows: &str) -> Result<Vec<RentalRecord>, LoadError> {
        let csv = format!("{HEADER}{rows}");
        let df = read_csv_bytes(csv.into_bytes())?;
        records_from_csv_frame(&df)
    }

    #[test]
    fn test_parses_typed_records() -> Result<(), LoadError> {
        let records = load(
            "1,2011-01-01,1,985,331,654,0.344167,0.363625,0.805833,0.160446\n\
             2,2011-01-02 00:00:00,4,801,131,670,0.363478,0.353739,0.696087,0.248539\n",
        )?;

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].date.to_string(), "2011-01-01");
        assert_eq!(records[0].total_count, 985);
        assert_eq!(records[0].season, Season::Spring);
        assert_eq!(records[1].date.to_string(), "2011-01-02");
        assert_eq!(records[1].season, Season::Winter);
        assert!((records[1].humidity - 0.696087).abs() < 1e-12);
        Ok(())
    }

    #[test]
    fn test_integer_weather_columns_are_widened() -> Result<(), LoadError> {
        let records = load("1,2011-01-01,2,10,4,6,20,18,1,3\n")?;
        assert_eq!(records[0].temperature, 20.0);
        assert_eq!(records[0].windspeed, 3.0);
        Ok(())
    }

    #[test]
    fn test_rejects_unknown_season() {
        let err = load("1,2011-01-01,7,10,4,6,0.2,0.2,0.5,0.1\n").unwrap_err();
        assert!(matches!(err, LoadError::UnknownSeason { row: 0, code: 7 }));
    }

    #[test]
    fn test_rejects_negative_counts() {
        let err = load("1,2011-01-01,1,10,-4,6,0.2,0.2,0.5,0.1\n").unwrap_err();
        assert!(matches!(
            err,
            LoadError::NegativeCount {
                column: COL_CASUAL,
                value: -4,
                ..
            }
        ));
    }

    #[test]
    fn test_rejects_fractional_counts() {
        let err = load("1,2011-01-01,1,10.7,4.9,6,0.2,0.2,0.5,0.1\n").unwrap_err();
        assert!(matches!(
            err,
            LoadError::ColumnType {
                column: COL_TOTAL,
                expected: "integer",
                ..
            }
        ));
    }

    #[test]
    fn test_whole_float_counts_are_accepted() -> Result<(), LoadError> {
        let records = load("1,2011-01-01,1.0,10.0,4,6,0.2,0.2,0.5,0.1\n")?;
        assert_eq!(records[0].total_count, 10);
        assert_eq!(records[0].season, Season::Spring);
        Ok(())
    }

    #[test]
    fn test_rejects_text_in_count_column() {
        let err = load("1,2011-01-01,1,lots,4,6,0.2,0.2,0.5,0.1\n").unwrap_err();
        assert!(matches!(
            err,
            LoadError::ColumnType {
                column: COL_TOTAL,
                ..
            }
        ));
    }

    #[test]
    fn test_rejects_text_in_weather_column() {
        let err = load("1,2011-01-01,1,10,4,6,0.2,0.2,humid,0.1\n").unwrap_err();
        assert!(matches!(
            err,
            LoadError::ColumnType {
                column: COL_HUM,
                expected: "float",
                ..
            }
        ));
    }

    #[test]
    fn test_rejects_empty_cells() {
        let err = load(
            "1,2011-01-01,1,10,4,6,0.2,0.2,0.5,0.1\n\
             2,2011-01-02,1,,4,6,0.2,0.2,0.5,0.1\n",
        )
        .unwrap_err();
        assert!(matches!(
            err,
            LoadError::MissingValue {
                column: COL_TOTAL,
                row: 1
            }
        ));
    }

    #[test]
    fn test_rejects_bad_dates() {
        let err = load("1,01/02/2011,1,10,4,6,0.2,0.2,0.5,0.1\n").unwrap_err();
        assert!(matches!(err, LoadError::InvalidDate { row: 0, .. }));
    }

    #[test]
    fn test_rejects_missing_column() {
        let csv = "dteday,season,cnt,casual,registered,temp,atemp,hum\n\
                   2011-01-01,1,10,4,6,0.2,0.2,0.5\n";
        let df = read_csv_bytes(csv.as_bytes().to_vec()).unwrap();
        let err = records_from_csv_frame(&df).unwrap_err();
        assert!(matches!(
            err,
            LoadError::MissingColumn {
                column: COL_WINDSPEED,
                ..
            }
        ));
    }

    #[test]
    fn test_missing_file() {
        let err = read_csv_file(Path::new("/definitely/not/here.csv")).unwrap_err();
        assert!(matches!(err, LoadError::SourceMissing(_)));
    }

    #[test]
    fn test_records_to_frame_shape() -> Result<(), LoadError> {
        let records = load("1,2011-01-01,1,985,331,654,0.34,0.36,0.80,0.16\n")?;
        let df = records_to_frame(&records)?;
        assert_eq!(df.shape(), (1, 9));
        assert_eq!(df.column(COL_DATE).unwrap().dtype(), &DataType::Date);
        Ok(())
    }
}
