use crate::trend::error::TrendError;
use crate::trend::types::{TrendMethod, TrendResult};
use serde::Serialize;

/// What happened when one estimator ran over one variable.
///
/// Estimator errors are kept as data so a defect in one variable still leaves
/// a visible row and never hides the others.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum TrendStatus {
    Computed(TrendResult),
    InsufficientData { points: usize, required: usize },
    /// Zero variance: the trend is undefined, which is not the same as "no trend".
    Degenerate { points: usize },
    Invalid { reason: String },
}

impl From<Result<TrendResult, TrendError>> for TrendStatus {
    fn from(outcome: Result<TrendResult, TrendError>) -> Self {
        match outcome {
            Ok(result) => TrendStatus::Computed(result),
            Err(TrendError::InsufficientData { points, required }) => {
                TrendStatus::InsufficientData { points, required }
            }
            Err(TrendError::DegenerateInput { points }) => TrendStatus::Degenerate { points },
            Err(TrendError::InvalidSeries { reason }) => TrendStatus::Invalid { reason },
        }
    }
}

/// One row of a [`TrendTable`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendEntry {
    pub variable: String,
    pub method: TrendMethod,
    pub status: TrendStatus,
}

impl TrendEntry {
    pub fn result(&self) -> Option<&TrendResult> {
        match &self.status {
            TrendStatus::Computed(result) => Some(result),
            _ => None,
        }
    }

    pub fn is_significant(&self) -> bool {
        self.result().is_some_and(|r| r.significant)
    }

    pub fn is_skipped(&self) -> bool {
        self.result().is_none()
    }
}

/// One row per (variable, method), in the order they were requested.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(transparent)]
pub struct TrendTable {
    entries: Vec<TrendEntry>,
}

impl TrendTable {
    pub(crate) fn new(entries: Vec<TrendEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[TrendEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TrendEntry> {
        self.entries.iter()
    }

    pub fn get(&self, variable: &str, method: TrendMethod) -> Option<&TrendEntry> {
        self.entries
            .iter()
            .find(|e| e.variable == variable && e.method == method)
    }

    pub fn significant(&self) -> impl Iterator<Item = &TrendResult> {
        self.entries
            .iter()
            .filter_map(TrendEntry::result)
            .filter(|r| r.significant)
    }

    pub fn skipped(&self) -> impl Iterator<Item = &TrendEntry> {
        self.entries.iter().filter(|e| e.is_skipped())
    }
}

impl<'a> IntoIterator for &'a TrendTable {
    type Item = &'a TrendEntry;
    type IntoIter = std::slice::Iter<'a, TrendEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
