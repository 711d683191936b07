//----------------------------------------
// search mod
//----------------------------------------
pub mod error;
pub mod find_sample_size;
pub mod types;
