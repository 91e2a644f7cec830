//! Frame views of the summary, extremes and trend tables.

use crate::report::table::{TrendStatus, TrendTable};
use crate::types::summary::{ExtremeSummary, YearlySummary};
use polars::prelude::*;

/// Converts an annual or winter table into a `DataFrame`.
///
/// # Arguments
///
/// * `rows` - Output of [`crate::annual_summaries`] or [`crate::winter_summaries`].
///
/// # Returns
///
/// A frame with columns `year`, `tmax_avg`, `tmin_avg`, `precip_total`,
/// `snow_total` and `day_count`, one row per input row.
pub fn yearly_summaries_to_frame(rows: &[YearlySummary]) -> PolarsResult<DataFrame> {
    df!(
        "year" => rows.iter().map(|r| r.year).collect::<Vec<i32>>(),
        "tmax_avg" => rows.iter().map(|r| r.tmax_avg).collect::<Vec<f64>>(),
        "tmin_avg" => rows.iter().map(|r| r.tmin_avg).collect::<Vec<f64>>(),
        "precip_total" => rows.iter().map(|r| r.precip_total).collect::<Vec<f64>>(),
        "snow_total" => rows.iter().map(|r| r.snow_total).collect::<Vec<f64>>(),
        "day_count" => rows.iter().map(|r| r.day_count as u32).collect::<Vec<u32>>(),
    )
}

/// Converts the per-year extremes into a `DataFrame` with columns `year`,
/// `freezing_days`, `hottest_day` and `flood_days`.
pub fn extremes_to_frame(rows: &[ExtremeSummary]) -> PolarsResult<DataFrame> {
    df!(
        "year" => rows.iter().map(|r| r.year).collect::<Vec<i32>>(),
        "freezing_days" => rows.iter().map(|r| r.freezing_days).collect::<Vec<u32>>(),
        "hottest_day" => rows.iter().map(|r| r.hottest_day).collect::<Vec<f64>>(),
        "flood_days" => rows.iter().map(|r| r.flood_days).collect::<Vec<u32>>(),
    )
}

/// Flattens a [`TrendTable`] into a `DataFrame`, one row per entry.
///
/// # Returns
///
/// Columns `variable`, `method`, `status`, `slope_or_tau`, `p_value`,
/// `significant` and `points`. Skipped rows have null statistics and a status
/// of `insufficient_data`, `degenerate` or `invalid`.
pub fn trend_table_to_frame(table: &TrendTable) -> PolarsResult<DataFrame> {
    let status = table
        .iter()
        .map(|e| match e.status {
            TrendStatus::Computed(_) => "computed",
            TrendStatus::InsufficientData { .. } => "insufficient_data",
            TrendStatus::Degenerate { .. } => "degenerate",
            TrendStatus::Invalid { .. } => "invalid",
        })
        .collect::<Vec<&str>>();

    df!(
        "variable" => table.iter().map(|e| e.variable.as_str()).collect::<Vec<&str>>(),
        "method" => table.iter().map(|e| e.method.name()).collect::<Vec<&str>>(),
        "status" => status,
        "slope_or_tau" => table.iter().map(|e| e.result().map(|r| r.slope_or_tau)).collect::<Vec<Option<f64>>>(),
        "p_value" => table.iter().map(|e| e.result().map(|r| r.p_value)).collect::<Vec<Option<f64>>>(),
        "significant" => table.iter().map(|e| e.result().map(|r| r.significant)).collect::<Vec<Option<bool>>>(),
        "points" => table.iter().map(|e| e.result().map(|r| r.points as u32)).collect::<Vec<Option<u32>>>(),
    )
}
