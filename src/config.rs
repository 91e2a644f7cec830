//! Tunable parameters of the analysis and the constants behind their defaults.
//!
//! Every stage takes its parameters explicitly; nothing reads module-level
//! state at run time, so tests and calibration runs can swap any of them.

use crate::trend::types::{TrendMethod, TrendSettings};
use bon::Builder;
use serde::{Deserialize, Serialize};

/// A day with `tmax` at or below this value (°F) counts as a freezing day.
pub const FREEZING_TMAX_F: f64 = 32.0;

/// A day with precipitation at or above this value (inches) counts as a flood day.
pub const FLOOD_PRECIP_IN: f64 = 2.0;

/// Trend results with a p-value strictly below this are significant.
pub const DEFAULT_SIGNIFICANCE_LEVEL: f64 = 0.05;

/// Smallest series the trend estimators accept.
pub const MIN_TREND_POINTS: usize = 3;

/// Lower bound of a plausible daily temperature (°F).
pub const MIN_PLAUSIBLE_TEMP_F: f64 = -50.0;

/// Upper bound of a plausible daily temperature (°F).
pub const MAX_PLAUSIBLE_TEMP_F: f64 = 110.0;

/// Threshold predicates of the extreme-event detector.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Builder)]
pub struct ExtremeThresholds {
    #[builder(default = FREEZING_TMAX_F)]
    pub freezing_tmax_f: f64,
    #[builder(default = FLOOD_PRECIP_IN)]
    pub flood_precip_in: f64,
}

impl Default for ExtremeThresholds {
    fn default() -> Self {
        Self::builder().build()
    }
}

/// Temperature band outside of which input values are flagged.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Builder)]
pub struct PlausibleRange {
    #[builder(default = MIN_PLAUSIBLE_TEMP_F)]
    pub min_temp_f: f64,
    #[builder(default = MAX_PLAUSIBLE_TEMP_F)]
    pub max_temp_f: f64,
}

impl Default for PlausibleRange {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl PlausibleRange {
    pub fn contains_temp(&self, value: f64) -> bool {
        (self.min_temp_f..=self.max_temp_f).contains(&value)
    }
}

/// Parameters for a full [`crate::ClimateAnalysis`] run.
///
/// # Examples
///
/// ```
/// use climate_trends::{AnalysisConfig, ExtremeThresholds, TrendMethod};
///
/// // Defaults: alpha = 0.05, both estimators, 32 °F / 2.0 in thresholds
/// let config = AnalysisConfig::default();
/// assert_eq!(config.significance_level, 0.05);
///
/// let strict = AnalysisConfig::builder()
///     .significance_level(0.01)
///     .thresholds(ExtremeThresholds::builder().flood_precip_in(1.5).build())
///     .methods(vec![TrendMethod::MannKendall])
///     .build();
/// assert_eq!(strict.thresholds.freezing_tmax_f, 32.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
pub struct AnalysisConfig {
    #[builder(default = DEFAULT_SIGNIFICANCE_LEVEL)]
    pub significance_level: f64,
    /// Values below [`MIN_TREND_POINTS`] are raised to it.
    #[builder(default = MIN_TREND_POINTS)]
    pub min_trend_points: usize,
    #[builder(default)]
    pub thresholds: ExtremeThresholds,
    #[builder(default)]
    pub plausible_range: PlausibleRange,
    #[builder(default = TrendMethod::ALL.to_vec())]
    pub methods: Vec<TrendMethod>,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl AnalysisConfig {
    pub fn trend_settings(&self) -> TrendSettings {
        TrendSettings::new(self.significance_level, self.min_trend_points)
    }
}
