use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error, Serialize, Deserialize)]
pub enum TrendError {
    #[error("Insufficient data: {points} yearly points supplied, at least {required} required")]
    InsufficientData { points: usize, required: usize },

    // Zero variance: slope and tau are undefined, not zero.
    #[error("Degenerate input: all {points} values are identical")]
    DegenerateInput { points: usize },

    #[error("Invalid series: {reason}")]
    InvalidSeries { reason: String },
}
