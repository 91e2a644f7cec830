//! Reading daily records out of polars frames.
//!
//! Expected columns: `date` (Date, or `YYYY-MM-DD` strings), `tmax`, `tmin`,
//! `prcp`, `snow`. Numeric columns are cast to `Float64`; nulls become missing
//! values for gap repair to handle.

use crate::frames::error::FrameError;
use crate::types::daily::{DailyField, DailyRecord};
use chrono::NaiveDate;
use log::info;
use polars::prelude::*;
use std::path::Path;

// Days from 0001-01-01 (CE day 1) to 1970-01-01.
const UNIX_EPOCH_DAYS_FROM_CE: i32 = 719_163;

/// Converts a frame with the daily schema into records, one per row.
///
/// # Errors
///
/// * [`FrameError::ColumnNotFound`] if one of the five columns is absent.
/// * [`FrameError::InvalidDate`] for null or unparseable dates.
/// * [`FrameError::DataFrameProcessing`] if a numeric column cannot be cast.
pub fn daily_records_from_frame(df: &DataFrame) -> Result<Vec<DailyRecord>, FrameError> {
    let dates = date_column(df)?;
    let tmax = float_column(df, DailyField::Tmax.column_name())?;
    let tmin = float_column(df, DailyField::Tmin.column_name())?;
    let prcp = float_column(df, DailyField::Precipitation.column_name())?;
    let snow = float_column(df, DailyField::Snowfall.column_name())?;

    dates
        .into_iter()
        .enumerate()
        .map(|(row, date)| {
            Ok(DailyRecord::new(date?, tmax[row], tmin[row], prcp[row], snow[row]))
        })
        .collect()
}

/// Reads a headered CSV file with the daily schema.
pub fn read_daily_csv(path: &Path) -> Result<Vec<DailyRecord>, FrameError> {
    let df = CsvReadOptions::default()
        .with_has_header(true)
        .map_parse_options(|options| options.with_try_parse_dates(true))
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .map_err(|e| FrameError::CsvRead(path.to_path_buf(), e))?
        .finish()
        .map_err(|e| FrameError::CsvRead(path.to_path_buf(), e))?;

    info!("Read {} daily rows from {:?}", df.height(), path);
    daily_records_from_frame(&df)
}

fn get_column<'a>(df: &'a DataFrame, name: &str) -> Result<&'a Column, FrameError> {
    df.column(name)
        .map_err(|e| FrameError::ColumnNotFound(name.to_string(), e))
}

fn float_column(df: &DataFrame, name: &str) -> Result<Vec<Option<f64>>, FrameError> {
    let column = get_column(df, name)?.cast(&DataType::Float64)?;
    Ok(column.f64()?.into_iter().collect())
}

fn date_column(df: &DataFrame) -> Result<Vec<Result<NaiveDate, FrameError>>, FrameError> {
    let column = get_column(df, "date")?;
    match column.dtype() {
        DataType::Date => Ok(column
            .date()?
            .into_iter()
            .enumerate()
            .map(|(row, days)| {
                days.and_then(|d| NaiveDate::from_num_days_from_ce_opt(UNIX_EPOCH_DAYS_FROM_CE + d))
                    .ok_or(FrameError::InvalidDate { row, value: None })
            })
            .collect()),
        DataType::String => Ok(column
            .str()?
            .into_iter()
            .enumerate()
            .map(|(row, text)| {
                text.and_then(|s| NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok())
                    .ok_or_else(|| FrameError::InvalidDate {
                        row,
                        value: text.map(str::to_string),
                    })
            })
            .collect()),
        other => Err(FrameError::UnsupportedDateType(other.clone())),
    }
}
