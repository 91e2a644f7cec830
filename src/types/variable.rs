//! Named columns of the summary tables that trends can be computed over.

use crate::types::summary::{ExtremeSummary, YearPoint, YearlySummary};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A column of a [`YearlySummary`] table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SummaryVariable {
    TmaxAvg,
    TminAvg,
    PrecipTotal,
    SnowTotal,
}

impl SummaryVariable {
    pub const ALL: [SummaryVariable; 4] = [
        SummaryVariable::TmaxAvg,
        SummaryVariable::TminAvg,
        SummaryVariable::PrecipTotal,
        SummaryVariable::SnowTotal,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            SummaryVariable::TmaxAvg => "tmax_avg",
            SummaryVariable::TminAvg => "tmin_avg",
            SummaryVariable::PrecipTotal => "precip_total",
            SummaryVariable::SnowTotal => "snow_total",
        }
    }

    pub fn value(&self, row: &YearlySummary) -> f64 {
        match self {
            SummaryVariable::TmaxAvg => row.tmax_avg,
            SummaryVariable::TminAvg => row.tmin_avg,
            SummaryVariable::PrecipTotal => row.precip_total,
            SummaryVariable::SnowTotal => row.snow_total,
        }
    }

    /// Extracts this column as an ordered `(year, value)` series.
    pub fn points(&self, table: &[YearlySummary]) -> Vec<YearPoint> {
        table
            .iter()
            .map(|row| YearPoint::new(row.year, self.value(row)))
            .collect()
    }
}

impl fmt::Display for SummaryVariable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A column of an [`ExtremeSummary`] table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExtremeVariable {
    FreezingDays,
    HottestDay,
    FloodDays,
}

impl ExtremeVariable {
    pub const ALL: [ExtremeVariable; 3] = [
        ExtremeVariable::FreezingDays,
        ExtremeVariable::HottestDay,
        ExtremeVariable::FloodDays,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ExtremeVariable::FreezingDays => "freezing_days",
            ExtremeVariable::HottestDay => "hottest_day",
            ExtremeVariable::FloodDays => "flood_days",
        }
    }

    pub fn value(&self, row: &ExtremeSummary) -> f64 {
        match self {
            ExtremeVariable::FreezingDays => row.freezing_days as f64,
            ExtremeVariable::HottestDay => row.hottest_day,
            ExtremeVariable::FloodDays => row.flood_days as f64,
        }
    }

    pub fn points(&self, table: &[ExtremeSummary]) -> Vec<YearPoint> {
        table
            .iter()
            .map(|row| YearPoint::new(row.year, self.value(row)))
            .collect()
    }
}

impl fmt::Display for ExtremeVariable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_points_follow_table_order() {
        let table = vec![
            YearlySummary {
                year: 2001,
                tmax_avg: 60.0,
                tmin_avg: 40.0,
                precip_total: 30.0,
                snow_total: 12.0,
                day_count: 365,
            },
            YearlySummary {
                year: 2002,
                tmax_avg: 61.0,
                tmin_avg: 41.0,
                precip_total: 28.0,
                snow_total: 9.5,
                day_count: 365,
            },
        ];
        let points = SummaryVariable::SnowTotal.points(&table);
        assert_eq!(points, vec![YearPoint::new(2001, 12.0), YearPoint::new(2002, 9.5)]);
    }

    #[test]
    fn test_extreme_counts_become_floats() {
        let row = ExtremeSummary {
            year: 1990,
            freezing_days: 14,
            hottest_day: 97.0,
            flood_days: 2,
        };
        assert_eq!(ExtremeVariable::FreezingDays.value(&row), 14.0);
        assert_eq!(ExtremeVariable::FloodDays.value(&row), 2.0);
        assert_eq!(ExtremeVariable::HottestDay.to_string(), "hottest_day");
    }
}
