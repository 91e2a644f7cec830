//! Deterministic gap filling for daily records.
//!
//! Rules, applied per field and per record:
//! 1. A missing value whose previous and next records both carry that field is
//!    replaced with the mean of the two.
//! 2. Snowfall still missing after rule 1 becomes `0.0`. This is a plain
//!    simplification (unreported snow counts as none fallen), not an inference
//!    about what actually happened at the station.
//! 3. A record still missing any field is dropped whole.
//!
//! Neighbours are the records dated exactly one day before and after, read from
//! the input before any filling, so a run of consecutive gaps is never filled
//! from an interpolated value. A neighbour across a hole in the calendar counts
//! as missing.

use crate::series::cleaned::CleanedSeries;
use crate::types::daily::{DailyField, DailyRecord};
use chrono::NaiveDate;
use log::{info, warn};
use std::borrow::Cow;
use serde::Serialize;

/// Counters describing what gap repair did.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct RepairReport {
    pub input_records: usize,
    pub interpolated_fields: usize,
    pub snowfall_zero_filled: usize,
    pub dropped_dates: Vec<NaiveDate>,
}

impl RepairReport {
    pub fn dropped(&self) -> usize {
        self.dropped_dates.len()
    }

    pub fn kept(&self) -> usize {
        self.input_records - self.dropped()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RepairOutcome {
    pub series: CleanedSeries,
    pub report: RepairReport,
}

/// Fills gaps in `records` and returns the cleaned series with a report.
///
/// Input is normally already sorted and unique (see [`crate::validate_records`]).
/// Otherwise it is sorted by date here and any repeated date keeps its first
/// record; the others are counted in `dropped_dates`. Never fails; when every
/// record is dropped the series is empty.
pub fn repair_gaps(records: &[DailyRecord]) -> RepairOutcome {
    let mut report = RepairReport {
        input_records: records.len(),
        ..Default::default()
    };
    let records = ordered_unique(records, &mut report);

    let mut days = Vec::with_capacity(records.len());
    for (i, original) in records.iter().enumerate() {
        let previous_day = i
            .checked_sub(1)
            .map(|p| &records[p])
            .filter(|r| Some(r.date) == original.date.pred_opt());
        let next_day = records
            .get(i + 1)
            .filter(|r| Some(r.date) == original.date.succ_opt());

        let mut record = *original;
        for field in DailyField::ALL {
            if record.get(field).is_some() {
                continue;
            }
            let previous = previous_day.and_then(|r| r.get(field));
            let next = next_day.and_then(|r| r.get(field));

            if let (Some(previous), Some(next)) = (previous, next) {
                record.set(field, Some((previous + next) / 2.0));
                report.interpolated_fields += 1;
            } else if field == DailyField::Snowfall {
                record.set(field, Some(0.0));
                report.snowfall_zero_filled += 1;
            }
        }

        match record.to_clean() {
            Some(day) => days.push(day),
            None => report.dropped_dates.push(record.date),
        }
    }

    if report.dropped() > 0 {
        warn!(
            "Gap repair dropped {} of {} daily records",
            report.dropped(),
            report.input_records
        );
    } else {
        info!(
            "Gap repair kept all {} daily records ({} fields interpolated, {} snowfall values set to 0)",
            report.input_records, report.interpolated_fields, report.snowfall_zero_filled
        );
    }

    RepairOutcome {
        series: CleanedSeries::from_ordered(days),
        report,
    }
}

fn ordered_unique<'a>(records: &'a [DailyRecord], report: &mut RepairReport) -> Cow<'a, [DailyRecord]> {
    if records.windows(2).all(|w| w[0].date < w[1].date) {
        return Cow::Borrowed(records);
    }

    let mut sorted = records.to_vec();
    sorted.sort_by_key(|r| r.date);
    let mut unique: Vec<DailyRecord> = Vec::with_capacity(sorted.len());
    for record in sorted {
        match unique.last() {
            Some(kept) if kept.date == record.date => report.dropped_dates.push(record.date),
            _ => unique.push(record),
        }
    }
    warn!(
        "Gap repair received unordered input; sorted it and discarded {} repeated dates",
        report.dropped()
    );
    Cow::Owned(unique)
}
