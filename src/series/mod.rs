pub mod cleaned;
pub mod error;
pub mod gap_repair;
pub mod validation;
