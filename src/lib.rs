mod aggregation;
mod analysis;
mod config;
mod error;
mod frames;
mod report;
mod series;
mod trend;
mod types;

pub use analysis::{ClimateAnalysis, ClimateReport};
pub use config::*;
pub use error::ClimateError;

pub use types::daily::{CleanDay, DailyField, DailyRecord};
pub use types::summary::{ExtremeSummary, YearPoint, YearlySummary};
pub use types::variable::{ExtremeVariable, SummaryVariable};

pub use types::traits::period::date_period::DatePeriod;
pub use types::traits::types::{StartEndDate, Winter, Year};

pub use series::cleaned::CleanedSeries;
pub use series::error::ValidationError;
pub use series::gap_repair::{repair_gaps, RepairOutcome, RepairReport};
pub use series::validation::{validate_records, DataQualityIssue, IssueKind, ValidatedRecords};

pub use aggregation::extremes::extreme_summaries;
pub use aggregation::resample::{annual_summaries, summarise, winter_summaries, ResampleMode};

pub use trend::distributions::{normal_two_sided_p, student_t_two_sided_p};
pub use trend::error::TrendError;
pub use trend::estimate;
pub use trend::mann_kendall::mann_kendall_trend;
pub use trend::ols::ols_trend;
pub use trend::types::{TrendDetail, TrendMethod, TrendResult, TrendSettings};

pub use report::assembler::{assemble_trends, extreme_series, summary_series, VariableSeries};
pub use report::table::{TrendEntry, TrendStatus, TrendTable};

pub use frames::daily::{daily_records_from_frame, read_daily_csv};
pub use frames::error::FrameError;
pub use frames::export::{extremes_to_frame, trend_table_to_frame, yearly_summaries_to_frame};
