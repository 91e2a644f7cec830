pub mod assembler;
pub mod table;
