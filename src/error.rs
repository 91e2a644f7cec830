use crate::frames::error::FrameError;
use crate::series::error::ValidationError;
use crate::trend::error::TrendError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClimateError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Frame(#[from] FrameError),

    #[error(transparent)]
    Trend(#[from] TrendError),

    #[error("Failed to serialize report")]
    Serialization(#[source] serde_json::Error),
}
