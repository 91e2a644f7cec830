//! Shapes shared by the trend estimators: method tags, settings and results.

use crate::config::{DEFAULT_SIGNIFICANCE_LEVEL, MIN_TREND_POINTS};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The two trend tests run side by side over each yearly series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrendMethod {
    /// Ordinary least squares slope with a Student's t test on `slope = 0`.
    Ols,
    /// Rank-based Mann-Kendall test for a monotonic trend.
    MannKendall,
}

impl TrendMethod {
    pub const ALL: [TrendMethod; 2] = [TrendMethod::Ols, TrendMethod::MannKendall];

    pub fn name(&self) -> &'static str {
        match self {
            TrendMethod::Ols => "ols",
            TrendMethod::MannKendall => "mann_kendall",
        }
    }
}

impl fmt::Display for TrendMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Significance level and minimum series length used by both estimators.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrendSettings {
    significance_level: f64,
    min_points: usize,
}

impl TrendSettings {
    /// `min_points` below [`MIN_TREND_POINTS`] is raised to it.
    pub fn new(significance_level: f64, min_points: usize) -> Self {
        Self {
            significance_level,
            min_points: min_points.max(MIN_TREND_POINTS),
        }
    }

    pub fn significance_level(&self) -> f64 {
        self.significance_level
    }

    pub fn min_points(&self) -> usize {
        self.min_points
    }

    pub fn is_significant(&self, p_value: f64) -> bool {
        p_value < self.significance_level
    }
}

impl Default for TrendSettings {
    fn default() -> Self {
        Self::new(DEFAULT_SIGNIFICANCE_LEVEL, MIN_TREND_POINTS)
    }
}

/// The outcome of one estimator over one variable.
///
/// `slope_or_tau` holds the OLS slope (units per year) or Kendall's tau,
/// depending on `method`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendResult {
    pub variable: String,
    pub method: TrendMethod,
    pub slope_or_tau: f64,
    pub p_value: f64,
    pub significant: bool,
    pub points: usize,
    pub detail: TrendDetail,
}

/// Method-specific statistics behind a [`TrendResult`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TrendDetail {
    Ols {
        intercept: f64,
        r_squared: f64,
        std_error: f64,
        t_statistic: f64,
        degrees_of_freedom: usize,
    },
    MannKendall {
        s: i64,
        variance_s: f64,
        z_score: f64,
        sens_slope: f64,
    },
}
