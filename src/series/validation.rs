//! Checks on raw daily records at the ingestion boundary.
//!
//! Duplicate dates are rejected. Implausible values are only flagged: they are
//! a data-quality concern for the caller, not a reason to stop the analysis.

use crate::config::PlausibleRange;
use crate::series::error::ValidationError;
use crate::types::daily::{DailyField, DailyRecord};
use chrono::NaiveDate;
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueKind {
    /// Temperature outside the configured plausible band.
    TemperatureOutOfRange,
    /// Negative precipitation or snowfall.
    NegativeAmount,
    /// Daily maximum below the daily minimum.
    TmaxBelowTmin,
}

impl fmt::Display for IssueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IssueKind::TemperatureOutOfRange => write!(f, "temperature out of range"),
            IssueKind::NegativeAmount => write!(f, "negative amount"),
            IssueKind::TmaxBelowTmin => write!(f, "tmax below tmin"),
        }
    }
}

/// A flagged value. The record is kept as-is.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DataQualityIssue {
    pub date: NaiveDate,
    pub field: DailyField,
    pub value: f64,
    pub kind: IssueKind,
}

/// Records sorted by date plus the issues found in them.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedRecords {
    pub records: Vec<DailyRecord>,
    pub issues: Vec<DataQualityIssue>,
}

/// Sorts `records` by date, rejects duplicate dates and flags implausible values.
///
/// # Errors
///
/// Returns [`ValidationError::DuplicateDate`] for the first repeated date.
pub fn validate_records(
    mut records: Vec<DailyRecord>,
    range: &PlausibleRange,
) -> Result<ValidatedRecords, ValidationError> {
    records.sort_by_key(|r| r.date);
    if let Some(pair) = records.windows(2).find(|w| w[0].date == w[1].date) {
        return Err(ValidationError::DuplicateDate(pair[0].date));
    }

    let issues: Vec<DataQualityIssue> = records
        .iter()
        .flat_map(|record| record_issues(record, range))
        .collect();

    if !issues.is_empty() {
        warn!(
            "Flagged {} implausible values across {} daily records",
            issues.len(),
            records.len()
        );
        for issue in &issues {
            debug!(
                "{} {}={} ({})",
                issue.date, issue.field, issue.value, issue.kind
            );
        }
    }

    Ok(ValidatedRecords { records, issues })
}

fn record_issues(record: &DailyRecord, range: &PlausibleRange) -> Vec<DataQualityIssue> {
    let mut issues = Vec::new();
    let mut flag = |field: DailyField, value: f64, kind: IssueKind| {
        issues.push(DataQualityIssue {
            date: record.date,
            field,
            value,
            kind,
        })
    };

    for field in [DailyField::Tmax, DailyField::Tmin] {
        if let Some(value) = record.get(field) {
            if !range.contains_temp(value) {
                flag(field, value, IssueKind::TemperatureOutOfRange);
            }
        }
    }
    for field in [DailyField::Precipitation, DailyField::Snowfall] {
        if let Some(value) = record.get(field) {
            if value < 0.0 {
                flag(field, value, IssueKind::NegativeAmount);
            }
        }
    }
    if let (Some(tmax), Some(tmin)) = (record.tmax, record.tmin) {
        if tmax < tmin {
            flag(DailyField::Tmax, tmax, IssueKind::TmaxBelowTmin);
        }
    }
    issues
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_sorts_by_date() {
        let records = vec![
            DailyRecord::complete(day(2000, 1, 3), 40.0, 20.0, 0.0, 0.0),
            DailyRecord::complete(day(2000, 1, 1), 41.0, 21.0, 0.0, 0.0),
            DailyRecord::complete(day(2000, 1, 2), 42.0, 22.0, 0.0, 0.0),
        ];
        let validated = validate_records(records, &PlausibleRange::default()).unwrap();
        let dates: Vec<NaiveDate> = validated.records.iter().map(|r| r.date).collect();
        assert_eq!(dates, vec![day(2000, 1, 1), day(2000, 1, 2), day(2000, 1, 3)]);
        assert!(validated.issues.is_empty());
    }

    #[test]
    fn test_duplicate_date_is_rejected() {
        let records = vec![
            DailyRecord::complete(day(2000, 1, 1), 40.0, 20.0, 0.0, 0.0),
            DailyRecord::complete(day(2000, 1, 1), 41.0, 21.0, 0.0, 0.0),
        ];
        assert_eq!(
            validate_records(records, &PlausibleRange::default()),
            Err(ValidationError::DuplicateDate(day(2000, 1, 1)))
        );
    }

    #[test]
    fn test_implausible_values_are_flagged_not_removed() {
        let records = vec![
            DailyRecord::complete(day(2000, 7, 1), 121.0, 70.0, -0.1, 0.0),
            DailyRecord::new(day(2000, 7, 2), Some(50.0), Some(60.0), None, None),
        ];
        let validated = validate_records(records, &PlausibleRange::default()).unwrap();
        assert_eq!(validated.records.len(), 2);

        let kinds: Vec<(DailyField, IssueKind)> =
            validated.issues.iter().map(|i| (i.field, i.kind)).collect();
        assert_eq!(
            kinds,
            vec![
                (DailyField::Tmax, IssueKind::TemperatureOutOfRange),
                (DailyField::Precipitation, IssueKind::NegativeAmount),
                (DailyField::Tmax, IssueKind::TmaxBelowTmin),
            ]
        );
    }
}
