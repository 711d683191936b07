//----------------------------------------
// sweep mod
//----------------------------------------
pub mod error;
mod expand;
pub mod sample_size;
pub mod types;
mod validate;
