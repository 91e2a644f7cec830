//! Per-year output tables produced by the aggregation and extreme-event stages.

use serde::{Deserialize, Serialize};

/// Means and totals for one year key.
///
/// `year` is the calendar year in annual tables and the season-year in winter
/// tables. `day_count` is the number of daily records folded into the row, which
/// is how callers spot partial years or boundary winters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct YearlySummary {
    pub year: i32,
    pub tmax_avg: f64,     // mean of daily tmax (°F)
    pub tmin_avg: f64,     // mean of daily tmin (°F)
    pub precip_total: f64, // sum of daily precipitation (in)
    pub snow_total: f64,   // sum of daily snowfall (in)
    pub day_count: usize,
}

/// Threshold-derived metrics for one calendar year.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExtremeSummary {
    pub year: i32,
    pub freezing_days: u32,
    pub hottest_day: f64,
    pub flood_days: u32,
}

/// One `(year, value)` observation fed to the trend estimators.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct YearPoint {
    pub year: i32,
    pub value: f64,
}

impl YearPoint {
    pub fn new(year: i32, value: f64) -> Self {
        Self { year, value }
    }
}

impl From<(i32, f64)> for YearPoint {
    fn from((year, value): (i32, f64)) -> Self {
        Self { year, value }
    }
}
