//! Per-year extreme-event metrics from fixed threshold predicates.

use crate::config::ExtremeThresholds;
use crate::series::cleaned::CleanedSeries;
use crate::types::daily::CleanDay;
use crate::types::summary::ExtremeSummary;
use chrono::Datelike;
use log::debug;
use std::collections::BTreeMap;

struct ExtremeAccumulator {
    freezing_days: u32,
    hottest_day: f64,
    flood_days: u32,
}

impl Default for ExtremeAccumulator {
    fn default() -> Self {
        Self {
            freezing_days: 0,
            hottest_day: f64::NEG_INFINITY,
            flood_days: 0,
        }
    }
}

impl ExtremeAccumulator {
    fn add(&mut self, day: &CleanDay, thresholds: &ExtremeThresholds) {
        if day.tmax <= thresholds.freezing_tmax_f {
            self.freezing_days += 1;
        }
        if day.precipitation >= thresholds.flood_precip_in {
            self.flood_days += 1;
        }
        self.hottest_day = self.hottest_day.max(day.tmax);
    }
}

/// Freezing-day count, hottest `tmax` and flood-day count per calendar year,
/// computed in a single pass.
///
/// ```
/// use chrono::NaiveDate;
/// use climate_trends::{extreme_summaries, repair_gaps, DailyRecord, ExtremeThresholds};
///
/// let records: Vec<DailyRecord> = [30.0, 33.0, 32.0, 40.0]
///     .into_iter()
///     .enumerate()
///     .map(|(i, tmax)| {
///         let date = NaiveDate::from_ymd_opt(2010, 1, 1 + i as u32).unwrap();
///         DailyRecord::complete(date, tmax, 20.0, 0.0, 0.0)
///     })
///     .collect();
/// let series = repair_gaps(&records).series;
/// let extremes = extreme_summaries(&series, &ExtremeThresholds::default());
/// assert_eq!(extremes[0].freezing_days, 2);
/// assert_eq!(extremes[0].hottest_day, 40.0);
/// ```
pub fn extreme_summaries(
    series: &CleanedSeries,
    thresholds: &ExtremeThresholds,
) -> Vec<ExtremeSummary> {
    let mut groups: BTreeMap<i32, ExtremeAccumulator> = BTreeMap::new();
    for day in series {
        groups.entry(day.date.year()).or_default().add(day, thresholds);
    }
    let summaries: Vec<ExtremeSummary> = groups
        .into_iter()
        .map(|(year, acc)| ExtremeSummary {
            year,
            freezing_days: acc.freezing_days,
            hottest_day: acc.hottest_day,
            flood_days: acc.flood_days,
        })
        .collect();
    debug!("Derived extreme metrics for {} years", summaries.len());
    summaries
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::series::gap_repair::repair_gaps;
    use crate::types::daily::DailyRecord;
    use chrono::NaiveDate;

    fn series_from(rows: &[(i32, u32, u32, f64, f64)]) -> CleanedSeries {
        let records: Vec<DailyRecord> = rows
            .iter()
            .map(|&(y, m, d, tmax, prcp)| {
                DailyRecord::complete(NaiveDate::from_ymd_opt(y, m, d).unwrap(), tmax, tmax - 15.0, prcp, 0.0)
            })
            .collect();
        repair_gaps(&records).series
    }

    #[test]
    fn test_freezing_threshold_is_inclusive() {
        let series = series_from(&[
            (2005, 1, 1, 30.0, 0.0),
            (2005, 1, 2, 33.0, 0.0),
            (2005, 1, 3, 32.0, 0.0),
            (2005, 1, 4, 40.0, 0.0),
        ]);
        let extremes = extreme_summaries(&series, &ExtremeThresholds::default());
        assert_eq!(
            extremes,
            vec![ExtremeSummary {
                year: 2005,
                freezing_days: 2,
                hottest_day: 40.0,
                flood_days: 0,
            }]
        );
    }

    #[test]
    fn test_flood_threshold_is_inclusive() {
        let series = series_from(&[
            (2006, 5, 1, 70.0, 1.99),
            (2006, 5, 2, 71.0, 2.0),
            (2006, 5, 3, 72.0, 3.4),
            (2007, 5, 1, 75.0, 0.2),
        ]);
        let extremes = extreme_summaries(&series, &ExtremeThresholds::default());
        assert_eq!(extremes.len(), 2);
        assert_eq!(extremes[0].flood_days, 2);
        assert_eq!(extremes[1].flood_days, 0);
        assert_eq!(extremes[1].hottest_day, 75.0);
    }

    #[test]
    fn test_custom_thresholds() {
        let series = series_from(&[(2008, 7, 1, 30.0, 1.0), (2008, 7, 2, 20.0, 1.6)]);
        let thresholds = ExtremeThresholds::builder()
            .freezing_tmax_f(25.0)
            .flood_precip_in(1.5)
            .build();
        let extremes = extreme_summaries(&series, &thresholds);
        assert_eq!(extremes[0].freezing_days, 1);
        assert_eq!(extremes[0].flood_days, 1);
    }

    #[test]
    fn test_grouped_by_calendar_year_not_season() {
        let series = series_from(&[(2009, 12, 31, 10.0, 0.0), (2010, 1, 1, 12.0, 0.0)]);
        let extremes = extreme_summaries(&series, &ExtremeThresholds::default());
        let years: Vec<i32> = extremes.iter().map(|e| e.year).collect();
        assert_eq!(years, vec![2009, 2010]);
    }
}
