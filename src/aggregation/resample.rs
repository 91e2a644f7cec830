//! Annual and winter resampling of a cleaned daily series.
//!
//! Both modes fold the series into a `BTreeMap` keyed by year, so output rows
//! come out sorted and exactly one row exists per key that has at least one day.
//! Temperatures reduce by mean, precipitation and snowfall by sum.

use crate::series::cleaned::CleanedSeries;
use crate::types::daily::CleanDay;
use crate::types::summary::YearlySummary;
use crate::types::traits::types::{Winter, Year};
use chrono::NaiveDate;
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Which year key rows are grouped by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResampleMode {
    /// Calendar year of every day.
    Annual,
    /// Season-year of December, January and February days; other months are skipped.
    Winter,
}

impl ResampleMode {
    pub fn name(&self) -> &'static str {
        match self {
            ResampleMode::Annual => "annual",
            ResampleMode::Winter => "winter",
        }
    }

    /// The year key of `date`, or `None` if the mode excludes it.
    pub fn key(&self, date: NaiveDate) -> Option<i32> {
        match self {
            ResampleMode::Annual => Some(Year::of(date).get()),
            ResampleMode::Winter => Winter::containing(date).map(Winter::get),
        }
    }
}

impl fmt::Display for ResampleMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[derive(Debug, Default)]
struct YearAccumulator {
    tmax_sum: f64,
    tmin_sum: f64,
    precip_total: f64,
    snow_total: f64,
    days: usize,
}

impl YearAccumulator {
    fn add(&mut self, day: &CleanDay) {
        self.tmax_sum += day.tmax;
        self.tmin_sum += day.tmin;
        self.precip_total += day.precipitation;
        self.snow_total += day.snowfall;
        self.days += 1;
    }

    fn finish(self, year: i32) -> YearlySummary {
        let n = self.days as f64;
        YearlySummary {
            year,
            tmax_avg: self.tmax_sum / n,
            tmin_avg: self.tmin_sum / n,
            precip_total: self.precip_total,
            snow_total: self.snow_total,
            day_count: self.days,
        }
    }
}

/// Groups `series` by the year key of `mode` and reduces each group.
pub fn summarise(series: &CleanedSeries, mode: ResampleMode) -> Vec<YearlySummary> {
    let mut groups: BTreeMap<i32, YearAccumulator> = BTreeMap::new();
    for day in series {
        if let Some(year) = mode.key(day.date) {
            groups.entry(year).or_default().add(day);
        }
    }
    let summaries: Vec<YearlySummary> = groups
        .into_iter()
        .map(|(year, acc)| acc.finish(year))
        .collect();
    debug!(
        "Resampled {} daily records into {} {} rows",
        series.len(),
        summaries.len(),
        mode
    );
    summaries
}

/// One row per calendar year present in `series`.
pub fn annual_summaries(series: &CleanedSeries) -> Vec<YearlySummary> {
    summarise(series, ResampleMode::Annual)
}

/// One row per season-year with at least one Dec/Jan/Feb day.
///
/// Boundary winters are kept even when partial; check `day_count`.
pub fn winter_summaries(series: &CleanedSeries) -> Vec<YearlySummary> {
    summarise(series, ResampleMode::Winter)
}
