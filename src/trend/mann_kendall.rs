use crate::trend::distributions::normal_two_sided_p;
use crate::trend::error::TrendError;
use crate::trend::types::{TrendDetail, TrendMethod, TrendResult, TrendSettings};
use crate::trend::validate_series;
use crate::types::summary::YearPoint;
use ordered_float::OrderedFloat;
use std::cmp::Ordering;
use std::collections::BTreeMap;

/// Mann-Kendall test for a monotonic trend.
///
/// `S = sum over i < j of sign(v[j] - v[i])`, normalised to Kendall's tau by the
/// number of pairs. The variance of `S` is tie-corrected and the two-sided
/// p-value comes from the continuity-corrected normal approximation.
/// Sen's slope (median pairwise slope per year) is reported alongside.
///
/// # Errors
///
/// Same conditions as [`crate::ols_trend`].
pub fn mann_kendall_trend(
    variable: &str,
    points: &[YearPoint],
    settings: &TrendSettings,
) -> Result<TrendResult, TrendError> {
    validate_series(points, settings)?;

    let n = points.len();
    let s = kendall_s(points);
    let pairs = (n * (n - 1) / 2) as f64;
    let tau = s as f64 / pairs;

    let variance_s = s_variance(points);
    let z_score = match s.cmp(&0) {
        Ordering::Greater => (s - 1) as f64 / variance_s.sqrt(),
        Ordering::Less => (s + 1) as f64 / variance_s.sqrt(),
        Ordering::Equal => 0.0,
    };
    let p_value = normal_two_sided_p(z_score);

    Ok(TrendResult {
        variable: variable.to_string(),
        method: TrendMethod::MannKendall,
        slope_or_tau: tau,
        p_value,
        significant: settings.is_significant(p_value),
        points: n,
        detail: TrendDetail::MannKendall {
            s,
            variance_s,
            z_score,
            sens_slope: sens_slope(points),
        },
    })
}

fn kendall_s(points: &[YearPoint]) -> i64 {
    let mut s = 0i64;
    for (i, earlier) in points.iter().enumerate() {
        for later in &points[i + 1..] {
            s += match OrderedFloat(later.value).cmp(&OrderedFloat(earlier.value)) {
                Ordering::Greater => 1,
                Ordering::Less => -1,
                Ordering::Equal => 0,
            };
        }
    }
    s
}

/// `Var(S) = [n(n-1)(2n+5) - sum_t t(t-1)(2t+5)] / 18` over groups of tied values.
fn s_variance(points: &[YearPoint]) -> f64 {
    let mut groups: BTreeMap<OrderedFloat<f64>, usize> = BTreeMap::new();
    for point in points {
        *groups.entry(OrderedFloat(point.value)).or_insert(0) += 1;
    }
    let term = |t: usize| {
        let t = t as f64;
        t * (t - 1.0) * (2.0 * t + 5.0)
    };
    let ties: f64 = groups.values().filter(|&&t| t > 1).map(|&t| term(t)).sum();
    (term(points.len()) - ties) / 18.0
}

fn sens_slope(points: &[YearPoint]) -> f64 {
    let mut slopes: Vec<OrderedFloat<f64>> = Vec::with_capacity(points.len() * (points.len() - 1) / 2);
    for (i, earlier) in points.iter().enumerate() {
        for later in &points[i + 1..] {
            let dy = later.value - earlier.value;
            let dx = f64::from(later.year) - f64::from(earlier.year);
            slopes.push(OrderedFloat(dy / dx));
        }
    }
    slopes.sort_unstable();
    let mid = slopes.len() / 2;
    if slopes.len() % 2 == 1 {
        slopes[mid].into_inner()
    } else {
        (slopes[mid - 1].into_inner() + slopes[mid].into_inner()) / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series(values: &[(i32, f64)]) -> Vec<YearPoint> {
        values.iter().copied().map(YearPoint::from).collect()
    }

    fn detail(result: &TrendResult) -> (i64, f64, f64, f64) {
        match result.detail {
            TrendDetail::MannKendall {
                s,
                variance_s,
                z_score,
                sens_slope,
            } => (s, variance_s, z_score, sens_slope),
            other => panic!("unexpected detail {other:?}"),
        }
    }

    #[test]
    fn test_perfect_increase_has_tau_one() {
        let points = series(&[(2000, 10.0), (2001, 12.0), (2002, 14.0), (2003, 16.0)]);
        let result = mann_kendall_trend("x", &points, &TrendSettings::default()).unwrap();
        let (s, variance_s, z_score, sens) = detail(&result);

        assert_eq!(result.method, TrendMethod::MannKendall);
        assert_eq!(result.slope_or_tau, 1.0);
        assert_eq!(s, 6);
        assert!((variance_s - 156.0 / 18.0).abs() < 1e-12);
        assert!((z_score - 1.698_416).abs() < 1e-5);
        // n = 4 cannot reach the 5% level under the normal approximation
        assert!((result.p_value - 0.089_429).abs() < 1e-5);
        assert!(!result.significant);
        assert_eq!(sens, 2.0);
    }

    #[test]
    fn test_long_monotonic_series_is_significant() {
        let points: Vec<YearPoint> = (0..30)
            .map(|i| YearPoint::new(1990 + i, 50.0 + 0.1 * i as f64))
            .collect();
        let result = mann_kendall_trend("x", &points, &TrendSettings::default()).unwrap();
        assert_eq!(result.slope_or_tau, 1.0);
        assert!(result.p_value < 1e-8);
        assert!(result.significant);
    }

    #[test]
    fn test_decreasing_series_has_negative_tau() {
        let points = series(&[(2000, 9.0), (2001, 7.0), (2002, 8.0), (2003, 3.0), (2004, 1.0)]);
        let result = mann_kendall_trend("x", &points, &TrendSettings::default()).unwrap();
        let (s, _, z_score, _) = detail(&result);
        assert_eq!(s, -8);
        assert!((result.slope_or_tau + 0.8).abs() < 1e-12);
        assert!(z_score < 0.0);
    }

    #[test]
    fn test_ties_reduce_variance() {
        let points = series(&[(2000, 1.0), (2001, 1.0), (2002, 2.0), (2003, 2.0), (2004, 3.0)]);
        let result = mann_kendall_trend("x", &points, &TrendSettings::default()).unwrap();
        let (s, variance_s, _, _) = detail(&result);
        // 2 tie groups of size 2: each contributes 2*1*9 = 18
        assert_eq!(s, 8);
        assert!((variance_s - (5.0 * 4.0 * 15.0 - 36.0) / 18.0).abs() < 1e-12);
    }

    #[test]
    fn test_no_trend_gives_zero_score() {
        let points = series(&[(2000, 1.0), (2001, 3.0), (2002, 2.0), (2003, 2.5), (2004, 1.5)]);
        let result = mann_kendall_trend("x", &points, &TrendSettings::default()).unwrap();
        let (s, _, z_score, _) = detail(&result);
        assert_eq!(s, 0);
        assert_eq!(z_score, 0.0);
        assert_eq!(result.p_value, 1.0);
    }

    #[test]
    fn test_sens_slope_at_extreme_years() {
        let points = series(&[(i32::MIN, 0.0), (0, 1.0), (i32::MAX, 2.0)]);
        let result = mann_kendall_trend("x", &points, &TrendSettings::default()).unwrap();
        let (s, _, _, sens) = detail(&result);
        assert_eq!(s, 3);
        assert_eq!(sens, 2.0 / 4_294_967_295.0);
    }

    #[test]
    fn test_errors() {
        let settings = TrendSettings::default();
        let short = series(&[(2000, 1.0), (2001, 2.0)]);
        assert_eq!(
            mann_kendall_trend("x", &short, &settings).unwrap_err(),
            TrendError::InsufficientData { points: 2, required: 3 }
        );
        let flat = series(&[(2000, 10.0), (2001, 10.0), (2002, 10.0), (2003, 10.0)]);
        assert_eq!(
            mann_kendall_trend("x", &flat, &settings).unwrap_err(),
            TrendError::DegenerateInput { points: 4 }
        );
    }
}
