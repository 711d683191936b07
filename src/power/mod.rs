//----------------------------------------
// power mod
//----------------------------------------
pub(crate) mod distributions;
pub mod error;
pub mod noncentral_t;
pub mod power_fcn;
mod quadrature;
