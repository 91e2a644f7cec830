use crate::types::traits::types::{StartEndDate, Winter, Year};
use crate::types::traits::utils::days_in_month;
use chrono::NaiveDate;

/// Anything that resolves to an inclusive range of calendar days.
pub trait DatePeriod {
    fn get_date_period(self) -> Option<StartEndDate>;
}

impl DatePeriod for Year {
    fn get_date_period(self) -> Option<StartEndDate> {
        Some(StartEndDate {
            start: NaiveDate::from_ymd_opt(self.0, 1, 1)?,
            end: NaiveDate::from_ymd_opt(self.0, 12, 31)?,
        })
    }
}

impl DatePeriod for Winter {
    fn get_date_period(self) -> Option<StartEndDate> {
        let year = self.get();
        Some(StartEndDate {
            start: NaiveDate::from_ymd_opt(year.checked_sub(1)?, 12, 1)?,
            end: NaiveDate::from_ymd_opt(year, 2, days_in_month(year, 2)?)?,
        })
    }
}

impl DatePeriod for (NaiveDate, NaiveDate) {
    fn get_date_period(self) -> Option<StartEndDate> {
        if self.0 > self.1 {
            return None;
        }
        Some(StartEndDate {
            start: self.0,
            end: self.1,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_winter_period_spans_december_to_february() {
        let period = Winter(2000).get_date_period().unwrap();
        assert_eq!(period.start, NaiveDate::from_ymd_opt(1999, 12, 1).unwrap());
        // 2000 is a leap year
        assert_eq!(period.end, NaiveDate::from_ymd_opt(2000, 2, 29).unwrap());

        let period = Winter(2001).get_date_period().unwrap();
        assert_eq!(period.end, NaiveDate::from_ymd_opt(2001, 2, 28).unwrap());
    }

    #[test]
    fn test_year_period() {
        let period = Year(1987).get_date_period().unwrap();
        assert!(period.contains(NaiveDate::from_ymd_opt(1987, 6, 30).unwrap()));
        assert!(!period.contains(NaiveDate::from_ymd_opt(1988, 1, 1).unwrap()));
    }

    #[test]
    fn test_reversed_range_is_rejected() {
        let a = NaiveDate::from_ymd_opt(2010, 5, 1).unwrap();
        let b = NaiveDate::from_ymd_opt(2010, 4, 1).unwrap();
        assert!((a, b).get_date_period().is_none());
    }
}
