//----------------------------------------
// compute mod types
//----------------------------------------
pub use crate::power::power_fcn::MIN_SAMPLE_SIZE;
pub use crate::search::types::{DEFAULT_N_MAX, SearchSettings, SearchStrategy};
pub use crate::swept_parameter::SweptParameter;
pub use crate::sweep::types::{ParamValue, SWEEP_POINTS, SampleSizeResult, TestParameters};
