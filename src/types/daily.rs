//! Daily observation records, before and after gap repair.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One day of station observations as delivered by the ingestion layer.
///
/// Any numeric field may be `None` when the station did not report it.
/// Temperatures are in °F, precipitation and snowfall in inches.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DailyRecord {
    pub date: NaiveDate,              // date
    pub tmax: Option<f64>,            // tmax (°F)
    pub tmin: Option<f64>,            // tmin (°F)
    pub precipitation: Option<f64>,   // prcp (in)
    pub snowfall: Option<f64>,        // snow (in)
}

impl DailyRecord {
    pub fn new(
        date: NaiveDate,
        tmax: Option<f64>,
        tmin: Option<f64>,
        precipitation: Option<f64>,
        snowfall: Option<f64>,
    ) -> Self {
        Self {
            date,
            tmax,
            tmin,
            precipitation,
            snowfall,
        }
    }

    /// Builds a record with every field present.
    pub fn complete(date: NaiveDate, tmax: f64, tmin: f64, precipitation: f64, snowfall: f64) -> Self {
        Self::new(date, Some(tmax), Some(tmin), Some(precipitation), Some(snowfall))
    }

    pub fn get(&self, field: DailyField) -> Option<f64> {
        match field {
            DailyField::Tmax => self.tmax,
            DailyField::Tmin => self.tmin,
            DailyField::Precipitation => self.precipitation,
            DailyField::Snowfall => self.snowfall,
        }
    }

    pub(crate) fn set(&mut self, field: DailyField, value: Option<f64>) {
        match field {
            DailyField::Tmax => self.tmax = value,
            DailyField::Tmin => self.tmin = value,
            DailyField::Precipitation => self.precipitation = value,
            DailyField::Snowfall => self.snowfall = value,
        }
    }

    /// Returns the record without `Option`s, or `None` if any field is still missing.
    pub fn to_clean(&self) -> Option<CleanDay> {
        Some(CleanDay {
            date: self.date,
            tmax: self.tmax?,
            tmin: self.tmin?,
            precipitation: self.precipitation?,
            snowfall: self.snowfall?,
        })
    }
}

/// A daily record with no missing values. Only produced by gap repair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CleanDay {
    pub date: NaiveDate,
    pub tmax: f64,
    pub tmin: f64,
    pub precipitation: f64,
    pub snowfall: f64,
}

impl From<CleanDay> for DailyRecord {
    fn from(day: CleanDay) -> Self {
        DailyRecord::complete(day.date, day.tmax, day.tmin, day.precipitation, day.snowfall)
    }
}

/// The numeric columns of a daily record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DailyField {
    Tmax,
    Tmin,
    Precipitation,
    Snowfall,
}

impl DailyField {
    pub const ALL: [DailyField; 4] = [
        DailyField::Tmax,
        DailyField::Tmin,
        DailyField::Precipitation,
        DailyField::Snowfall,
    ];

    /// Column name used by the tabular adapters.
    pub fn column_name(&self) -> &'static str {
        match self {
            DailyField::Tmax => "tmax",
            DailyField::Tmin => "tmin",
            DailyField::Precipitation => "prcp",
            DailyField::Snowfall => "snow",
        }
    }
}

impl std::fmt::Display for DailyField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.column_name())
    }
}
