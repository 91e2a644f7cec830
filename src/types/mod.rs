pub mod daily;
pub mod summary;
pub mod traits;
pub mod variable;
