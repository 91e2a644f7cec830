use crate::trend::distributions::student_t_two_sided_p;
use crate::trend::error::TrendError;
use crate::trend::types::{TrendDetail, TrendMethod, TrendResult, TrendSettings};
use crate::trend::validate_series;
use crate::types::summary::YearPoint;

/// Fits `value = a + b * year` by least squares and tests `b = 0`.
///
/// The p-value is two-sided under Student's t with `n - 2` degrees of freedom.
/// A fit with zero residuals reports `p = 0`.
///
/// # Errors
///
/// * [`TrendError::InsufficientData`] for fewer than `settings.min_points()` points.
/// * [`TrendError::DegenerateInput`] when every value is identical.
/// * [`TrendError::InvalidSeries`] for non-finite values or years that are not
///   strictly increasing.
///
/// # Example
///
/// ```
/// use climate_trends::{ols_trend, TrendSettings, YearPoint};
///
/// let points: Vec<YearPoint> = [(2000, 10.0), (2001, 12.0), (2002, 14.0), (2003, 16.0)]
///     .into_iter()
///     .map(YearPoint::from)
///     .collect();
/// let result = ols_trend("tmax_avg", &points, &TrendSettings::default()).unwrap();
/// assert_eq!(result.slope_or_tau, 2.0);
/// assert!(result.significant);
/// ```
pub fn ols_trend(
    variable: &str,
    points: &[YearPoint],
    settings: &TrendSettings,
) -> Result<TrendResult, TrendError> {
    validate_series(points, settings)?;

    let n = points.len() as f64;
    let mean_x = points.iter().map(|p| p.year as f64).sum::<f64>() / n;
    let mean_y = points.iter().map(|p| p.value).sum::<f64>() / n;

    // Centered sums keep large year values from eating precision
    let (sxx, sxy, syy) = points.iter().fold((0.0, 0.0, 0.0), |(sxx, sxy, syy), p| {
        let dx = p.year as f64 - mean_x;
        let dy = p.value - mean_y;
        (sxx + dx * dx, sxy + dx * dy, syy + dy * dy)
    });

    let slope = sxy / sxx;
    let intercept = mean_y - slope * mean_x;

    let ss_res: f64 = points
        .iter()
        .map(|p| {
            let residual = (p.value - mean_y) - slope * (p.year as f64 - mean_x);
            residual * residual
        })
        .sum();

    let degrees_of_freedom = points.len() - 2;
    let std_error = (ss_res / degrees_of_freedom as f64 / sxx).sqrt();
    let t_statistic = if std_error > 0.0 {
        slope / std_error
    } else {
        slope.signum() * f64::INFINITY
    };
    let p_value = student_t_two_sided_p(t_statistic, degrees_of_freedom as f64);
    let r_squared = (1.0 - ss_res / syy).clamp(0.0, 1.0);

    Ok(TrendResult {
        variable: variable.to_string(),
        method: TrendMethod::Ols,
        slope_or_tau: slope,
        p_value,
        significant: settings.is_significant(p_value),
        points: points.len(),
        detail: TrendDetail::Ols {
            intercept,
            r_squared,
            std_error,
            t_statistic,
            degrees_of_freedom,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series(values: &[(i32, f64)]) -> Vec<YearPoint> {
        values.iter().copied().map(YearPoint::from).collect()
    }

    #[test]
    fn test_perfect_line() {
        let points = series(&[(2000, 10.0), (2001, 12.0), (2002, 14.0), (2003, 16.0)]);
        let result = ols_trend("x", &points, &TrendSettings::default()).unwrap();

        assert_eq!(result.method, TrendMethod::Ols);
        assert_eq!(result.slope_or_tau, 2.0);
        assert!(result.p_value < 1e-12);
        assert!(result.significant);
        match result.detail {
            TrendDetail::Ols {
                intercept,
                r_squared,
                degrees_of_freedom,
                ..
            } => {
                assert!((intercept - (10.0 - 2.0 * 2000.0)).abs() < 1e-9);
                assert_eq!(r_squared, 1.0);
                assert_eq!(degrees_of_freedom, 2);
            }
            other => panic!("unexpected detail {other:?}"),
        }
    }

    #[test]
    fn test_noisy_series_matches_reference_fit() {
        // Reference: slope 0.3, t 0.7924 on 3 df, p 0.4860, r^2 0.9 / 5.2
        let points = series(&[(2000, 1.0), (2001, 3.0), (2002, 2.0), (2003, 4.0), (2004, 2.0)]);
        let result = ols_trend("x", &points, &TrendSettings::default()).unwrap();

        assert!((result.slope_or_tau - 0.3).abs() < 1e-12);
        assert!((result.p_value - 0.486_004).abs() < 1e-5, "p = {}", result.p_value);
        assert!(!result.significant);
        if let TrendDetail::Ols { r_squared, .. } = result.detail {
            assert!((r_squared - 0.9 / 5.2).abs() < 1e-12);
        }
    }

    #[test]
    fn test_negative_slope() {
        let points = series(&[(1990, 5.0), (1991, 4.1), (1992, 2.9), (1993, 2.2), (1994, 0.8)]);
        let result = ols_trend("x", &points, &TrendSettings::default()).unwrap();
        assert!(result.slope_or_tau < 0.0);
        assert!(result.significant);
    }

    #[test]
    fn test_two_points_is_insufficient() {
        let points = series(&[(2000, 1.0), (2001, 2.0)]);
        let err = ols_trend("x", &points, &TrendSettings::default()).unwrap_err();
        assert_eq!(err, TrendError::InsufficientData { points: 2, required: 3 });
    }

    #[test]
    fn test_constant_is_degenerate() {
        let points = series(&[(2000, 10.0), (2001, 10.0), (2002, 10.0), (2003, 10.0)]);
        let err = ols_trend("x", &points, &TrendSettings::default()).unwrap_err();
        assert_eq!(err, TrendError::DegenerateInput { points: 4 });
    }

    #[test]
    fn test_gapped_years_use_actual_spacing() {
        let points = series(&[(2000, 0.0), (2002, 4.0), (2010, 20.0)]);
        let result = ols_trend("x", &points, &TrendSettings::default()).unwrap();
        assert!((result.slope_or_tau - 2.0).abs() < 1e-12);
    }
}
