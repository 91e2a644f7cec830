use crate::types::daily::CleanDay;
use crate::types::traits::period::date_period::DatePeriod;
use chrono::NaiveDate;
use serde::Serialize;

/// A date-ordered daily series with no missing values.
///
/// Only [`crate::repair_gaps`] builds one, so every instance upholds the
/// ordering and completeness invariants. Downstream stages borrow it read-only.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct CleanedSeries {
    days: Vec<CleanDay>,
}

impl CleanedSeries {
    /// `days` must already be strictly ordered by date.
    pub(crate) fn from_ordered(days: Vec<CleanDay>) -> Self {
        debug_assert!(days.windows(2).all(|w| w[0].date < w[1].date));
        Self { days }
    }

    pub fn days(&self) -> &[CleanDay] {
        &self.days
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CleanDay> {
        self.days.iter()
    }

    pub fn first_date(&self) -> Option<NaiveDate> {
        self.days.first().map(|d| d.date)
    }

    pub fn last_date(&self) -> Option<NaiveDate> {
        self.days.last().map(|d| d.date)
    }

    /// Days falling inside `period` (inclusive), e.g. a [`crate::Year`] or a
    /// [`crate::Winter`]. Returns `None` if the period cannot be resolved.
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use climate_trends::{repair_gaps, DailyRecord, Winter};
    ///
    /// let records: Vec<DailyRecord> = [(1999, 11, 30), (1999, 12, 1), (2000, 2, 29), (2000, 3, 1)]
    ///     .into_iter()
    ///     .map(|(y, m, d)| {
    ///         let date = NaiveDate::from_ymd_opt(y, m, d).unwrap();
    ///         DailyRecord::complete(date, 40.0, 25.0, 0.0, 0.0)
    ///     })
    ///     .collect();
    /// let series = repair_gaps(&records).series;
    /// assert_eq!(series.for_period(Winter(2000)).unwrap().len(), 2);
    /// ```
    pub fn for_period(&self, period: impl DatePeriod) -> Option<&[CleanDay]> {
        let bounds = period.get_date_period()?;
        let start = self.days.partition_point(|d| d.date < bounds.start);
        let end = self.days.partition_point(|d| d.date <= bounds.end);
        Some(&self.days[start..end.max(start)])
    }
}

impl<'a> IntoIterator for &'a CleanedSeries {
    type Item = &'a CleanDay;
    type IntoIter = std::slice::Iter<'a, CleanDay>;

    fn into_iter(self) -> Self::IntoIter {
        self.days.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::series::gap_repair::repair_gaps;
    use crate::types::daily::DailyRecord;
    use crate::types::traits::types::Year;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_bounds_and_year_slice() {
        let records: Vec<DailyRecord> = [day(1999, 12, 31), day(2000, 1, 1), day(2000, 12, 31), day(2001, 1, 1)]
            .into_iter()
            .map(|date| DailyRecord::complete(date, 40.0, 25.0, 0.0, 0.0))
            .collect();
        let series = repair_gaps(&records).series;

        assert_eq!(series.first_date(), Some(day(1999, 12, 31)));
        assert_eq!(series.last_date(), Some(day(2001, 1, 1)));
        let year: Vec<NaiveDate> = series
            .for_period(Year(2000))
            .unwrap()
            .iter()
            .map(|d| d.date)
            .collect();
        assert_eq!(year, vec![day(2000, 1, 1), day(2000, 12, 31)]);
        assert_eq!(series.for_period(Year(1990)).map(<[CleanDay]>::len), Some(0));
    }

    #[test]
    fn test_empty_series_has_no_bounds() {
        let series = CleanedSeries::default();
        assert_eq!(series.first_date(), None);
        assert_eq!(series.last_date(), None);
    }
}
