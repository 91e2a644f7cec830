use crate::aggregation::extremes::extreme_summaries;
use crate::aggregation::resample::{annual_summaries, winter_summaries};
use crate::config::AnalysisConfig;
use crate::error::ClimateError;
use crate::frames::daily::read_daily_csv;
use crate::report::assembler::{assemble_trends, extreme_series, summary_series};
use crate::report::table::TrendTable;
use crate::series::gap_repair::{repair_gaps, RepairReport};
use crate::series::validation::{validate_records, DataQualityIssue};
use crate::types::daily::DailyRecord;
use crate::types::summary::{ExtremeSummary, YearlySummary};
use log::info;
use serde::Serialize;
use std::path::Path;

/// Everything one pipeline run produced.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClimateReport {
    pub config: AnalysisConfig,
    pub quality_issues: Vec<DataQualityIssue>,
    pub repair: RepairReport,
    pub annual: Vec<YearlySummary>,
    pub winter: Vec<YearlySummary>,
    pub extremes: Vec<ExtremeSummary>,
    pub trends: TrendTable,
}

impl ClimateReport {
    pub fn to_json(&self) -> Result<String, ClimateError> {
        serde_json::to_string_pretty(self).map_err(ClimateError::Serialization)
    }
}

/// Validate, repair, aggregate and test one station's daily record.
pub struct ClimateAnalysis;

impl ClimateAnalysis {
    /// Runs the full pipeline over `records`.
    ///
    /// Records are validated and sorted, gaps are repaired, the cleaned series
    /// is resampled into annual and winter tables plus per-year extremes, and
    /// every configured trend method runs over every variable of those tables.
    ///
    /// # Arguments
    ///
    /// * `records` - Daily records of one station, in any order.
    /// * `config` - Thresholds, plausible range, significance level and the
    ///              trend methods to run. See [`AnalysisConfig`].
    ///
    /// # Returns
    ///
    /// A [`ClimateReport`] holding the quality issues, the repair report, the
    /// three yearly tables and the trend table. Trend rows are named after
    /// their table: `annual.*`, `winter.*` and `extremes.*`. Variables that
    /// cannot be tested show up as skipped rows rather than errors.
    ///
    /// # Errors
    ///
    /// Returns [`ClimateError::Validation`] if two records share a date.
    pub fn run(
        records: Vec<DailyRecord>,
        config: &AnalysisConfig,
    ) -> Result<ClimateReport, ClimateError> {
        let validated = validate_records(records, &config.plausible_range)?;
        let repaired = repair_gaps(&validated.records);
        let series = repaired.series;

        let annual = annual_summaries(&series);
        let winter = winter_summaries(&series);
        let extremes = extreme_summaries(&series, &config.thresholds);
        info!(
            "Aggregated {} days into {} years, {} winters",
            series.len(),
            annual.len(),
            winter.len()
        );

        let mut variables = summary_series("annual", &annual);
        variables.extend(summary_series("winter", &winter));
        variables.extend(extreme_series("extremes", &extremes));
        let trends = assemble_trends(&variables, &config.methods, &config.trend_settings());
        info!(
            "Computed {} trend rows, {} significant at {}",
            trends.len(),
            trends.significant().count(),
            config.significance_level
        );

        Ok(ClimateReport {
            config: config.clone(),
            quality_issues: validated.issues,
            repair: repaired.report,
            annual,
            winter,
            extremes,
            trends,
        })
    }

    /// [`ClimateAnalysis::run`] over a CSV file readable by [`read_daily_csv`].
    ///
    /// # Arguments
    ///
    /// * `path` - A headered CSV with `date`, `tmax`, `tmin`, `prcp` and `snow` columns.
    /// * `config` - See [`ClimateAnalysis::run`].
    ///
    /// # Errors
    ///
    /// Returns [`ClimateError::Frame`] if the file cannot be read or lacks a
    /// column, and [`ClimateError::Validation`] for repeated dates.
    pub fn run_csv(path: &Path, config: &AnalysisConfig) -> Result<ClimateReport, ClimateError> {
        let records = read_daily_csv(path)?;
        Self::run(records, config)
    }
}
