//! Runs the estimators over named yearly series and collects a [`TrendTable`].

use crate::report::table::{TrendEntry, TrendStatus, TrendTable};
use crate::trend::estimate;
use crate::trend::types::{TrendMethod, TrendSettings};
use crate::types::summary::{ExtremeSummary, YearPoint, YearlySummary};
use crate::types::variable::{ExtremeVariable, SummaryVariable};
use log::warn;
use serde::Serialize;

/// A named yearly series to test for a trend.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VariableSeries {
    pub name: String,
    pub points: Vec<YearPoint>,
}

impl VariableSeries {
    pub fn new(name: impl Into<String>, points: Vec<YearPoint>) -> Self {
        Self {
            name: name.into(),
            points,
        }
    }
}

/// Every [`SummaryVariable`] of `table`, named `{prefix}.{variable}`.
pub fn summary_series(prefix: &str, table: &[YearlySummary]) -> Vec<VariableSeries> {
    SummaryVariable::ALL
        .iter()
        .map(|v| VariableSeries::new(format!("{prefix}.{v}"), v.points(table)))
        .collect()
}

/// Every [`ExtremeVariable`] of `table`, named `{prefix}.{variable}`.
pub fn extreme_series(prefix: &str, table: &[ExtremeSummary]) -> Vec<VariableSeries> {
    ExtremeVariable::ALL
        .iter()
        .map(|v| VariableSeries::new(format!("{prefix}.{v}"), v.points(table)))
        .collect()
}

/// Runs each of `methods` over each of `variables`.
///
/// Rows are ordered by variable, then by method, as given. An estimator error
/// becomes a non-computed [`TrendStatus`] on its row.
///
/// ```
/// use climate_trends::{assemble_trends, TrendMethod, TrendSettings, VariableSeries, YearPoint};
///
/// let rising = VariableSeries::new(
///     "tmax_avg",
///     (0..10).map(|i| YearPoint::new(2000 + i, 60.0 + 0.5 * i as f64)).collect(),
/// );
/// let short = VariableSeries::new("snow_total", vec![YearPoint::new(2000, 1.0)]);
///
/// let table = assemble_trends(&[rising, short], &TrendMethod::ALL, &TrendSettings::default());
/// assert_eq!(table.len(), 4);
/// assert_eq!(table.significant().count(), 2);
/// assert_eq!(table.skipped().count(), 2);
/// ```
pub fn assemble_trends(
    variables: &[VariableSeries],
    methods: &[TrendMethod],
    settings: &TrendSettings,
) -> TrendTable {
    let mut entries = Vec::with_capacity(variables.len() * methods.len());
    for variable in variables {
        for &method in methods {
            let status =
                TrendStatus::from(estimate(method, &variable.name, &variable.points, settings));
            if let Some(reason) = skip_reason(&status) {
                warn!("Skipped {} trend for {}: {}", method, variable.name, reason);
            }
            entries.push(TrendEntry {
                variable: variable.name.clone(),
                method,
                status,
            });
        }
    }
    TrendTable::new(entries)
}

fn skip_reason(status: &TrendStatus) -> Option<String> {
    match status {
        TrendStatus::Computed(_) => None,
        TrendStatus::InsufficientData { points, required } => {
            Some(format!("insufficient data ({points} of {required} points)"))
        }
        TrendStatus::Degenerate { points } => Some(format!("all {points} values identical")),
        TrendStatus::Invalid { reason } => Some(reason.clone()),
    }
}
