//----------------------------------------
// computation mod
//----------------------------------------
pub mod types;

pub use crate::power::noncentral_t::noncentral_t_cdf;
pub use crate::power::power_fcn::{power, power_one_sided, power_two_sided};
pub use crate::search::find_sample_size::find_sample_size;
pub use crate::sweep::sample_size::{sample_size, sample_size_with};
