pub mod extremes;
pub mod resample;
