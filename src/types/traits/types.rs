use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fmt::{Display, Formatter};

/// A calendar year, January 1 through December 31.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
pub struct Year(pub i32);
impl Year {
    pub fn get(self) -> i32 {
        self.0
    }

    pub fn of(date: NaiveDate) -> Self {
        Self(date.year())
    }
}

impl Display for Year {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}", self.0)
    }
}

/// A meteorological winter labelled by its season-year.
///
/// `Winter(2000)` covers December 1999, January 2000 and February 2000.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
pub struct Winter(pub i32);
impl Winter {
    pub fn get(self) -> i32 {
        self.0
    }

    /// Returns the winter a date belongs to, or `None` outside Dec/Jan/Feb.
    ///
    /// December is assigned to the following year so that all three months of
    /// one winter share a label.
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use climate_trends::Winter;
    ///
    /// let dec = NaiveDate::from_ymd_opt(1999, 12, 15).unwrap();
    /// let jan = NaiveDate::from_ymd_opt(2000, 1, 15).unwrap();
    /// let mar = NaiveDate::from_ymd_opt(2000, 3, 1).unwrap();
    /// assert_eq!(Winter::containing(dec), Some(Winter(2000)));
    /// assert_eq!(Winter::containing(jan), Some(Winter(2000)));
    /// assert_eq!(Winter::containing(mar), None);
    /// ```
    pub fn containing(date: NaiveDate) -> Option<Self> {
        match date.month() {
            12 => Some(Self(date.year() + 1)),
            1 | 2 => Some(Self(date.year())),
            _ => None,
        }
    }
}

impl Display for Winter {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:04}", self.0 - 1, self.0)
    }
}

/// Inclusive date bounds of a period.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct StartEndDate {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl StartEndDate {
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}
