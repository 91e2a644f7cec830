pub mod daily;
pub mod error;
pub mod export;
