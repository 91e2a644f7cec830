//! Trend estimators over yearly `(year, value)` series.
//!
//! [`ols_trend`] and [`mann_kendall_trend`] are independent pure functions that
//! share only their input and output shapes. Running both on the same series
//! contrasts a linear fit against a rank-based monotonic test.

pub mod distributions;
pub mod error;
pub mod mann_kendall;
pub mod ols;
pub mod types;

use crate::trend::error::TrendError;
use crate::trend::types::{TrendMethod, TrendResult, TrendSettings};
use crate::types::summary::YearPoint;

/// Runs the estimator selected by `method`.
pub fn estimate(
    method: TrendMethod,
    variable: &str,
    points: &[YearPoint],
    settings: &TrendSettings,
) -> Result<TrendResult, TrendError> {
    match method {
        TrendMethod::Ols => ols::ols_trend(variable, points, settings),
        TrendMethod::MannKendall => mann_kendall::mann_kendall_trend(variable, points, settings),
    }
}

/// Checks the preconditions both estimators share.
pub(crate) fn validate_series(
    points: &[YearPoint],
    settings: &TrendSettings,
) -> Result<(), TrendError> {
    if points.len() < settings.min_points() {
        return Err(TrendError::InsufficientData {
            points: points.len(),
            required: settings.min_points(),
        });
    }
    if let Some(bad) = points.iter().find(|p| !p.value.is_finite()) {
        return Err(TrendError::InvalidSeries {
            reason: format!("non-finite value {} for year {}", bad.value, bad.year),
        });
    }
    if let Some(pair) = points.windows(2).find(|w| w[1].year <= w[0].year) {
        return Err(TrendError::InvalidSeries {
            reason: format!(
                "years must be strictly increasing, found {} after {}",
                pair[1].year, pair[0].year
            ),
        });
    }
    let first = points[0].value;
    if points.iter().all(|p| p.value == first) {
        return Err(TrendError::DegenerateInput {
            points: points.len(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unordered_years_are_invalid() {
        let points = vec![
            YearPoint::new(2001, 1.0),
            YearPoint::new(2000, 2.0),
            YearPoint::new(2002, 3.0),
        ];
        let err = validate_series(&points, &TrendSettings::default()).unwrap_err();
        assert!(matches!(err, TrendError::InvalidSeries { .. }));
    }

    #[test]
    fn test_duplicate_years_are_invalid() {
        let points = vec![
            YearPoint::new(2000, 1.0),
            YearPoint::new(2000, 2.0),
            YearPoint::new(2001, 3.0),
        ];
        assert!(matches!(
            validate_series(&points, &TrendSettings::default()),
            Err(TrendError::InvalidSeries { .. })
        ));
    }

    #[test]
    fn test_nan_is_invalid() {
        let points = vec![
            YearPoint::new(2000, 1.0),
            YearPoint::new(2001, f64::NAN),
            YearPoint::new(2002, 3.0),
        ];
        assert!(matches!(
            validate_series(&points, &TrendSettings::default()),
            Err(TrendError::InvalidSeries { .. })
        ));
    }

    #[test]
    fn test_stricter_minimum() {
        let settings = TrendSettings::new(0.05, 5);
        assert_eq!(settings.significance_level(), 0.05);
        assert_eq!(settings.min_points(), 5);
        let points: Vec<YearPoint> = (0..4).map(|i| YearPoint::new(2000 + i, i as f64)).collect();
        assert_eq!(
            validate_series(&points, &settings),
            Err(TrendError::InsufficientData { points: 4, required: 5 })
        );
    }

    #[test]
    fn test_minimum_never_below_three() {
        let settings = TrendSettings::new(0.1, 1);
        assert_eq!(settings.min_points(), 3);
        assert_eq!(settings.significance_level(), 0.1);
        assert!(settings.is_significant(0.099));
        assert!(!settings.is_significant(0.1));
    }

    #[test]
    fn test_estimate_dispatches_by_method() {
        let points: Vec<YearPoint> = (0..5).map(|i| YearPoint::new(2000 + i, i as f64)).collect();
        let settings = TrendSettings::default();
        for method in TrendMethod::ALL {
            let result = estimate(method, "v", &points, &settings).unwrap();
            assert_eq!(result.method, method);
            assert_eq!(result.variable, "v");
        }
    }
}
