use chrono::NaiveDate;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Date {0} appears more than once in the daily record")]
    DuplicateDate(NaiveDate),
}
