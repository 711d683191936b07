//----------------------------------------
// Root lib
//----------------------------------------
//! Sample sizes for two-independent-sample t-tests. Power is computed from
//! the noncentral t distribution and inverted by searching over the
//! per-group sample size; significance level, power or effect size may be
//! given as a range to get a batch of recommendations at once.
//!
//! ```no_run
//! use ttest_size::compute::{sample_size, types::TestParameters};
//!
//! let params = TestParameters::new(0.05, [0.7, 0.9], 1.0, 0.5, false);
//! let sizes = sample_size(&params).expect("failed to compute sample sizes");
//! assert_eq!(sizes.len(), 20);
//! ```

/// This module houses the public API for computing power and sample sizes
pub mod compute;
/// This module contains error types
pub mod error;
mod power;
mod search;
mod sweep;
mod swept_parameter;
mod util;

pub use compute::types::*;
pub use compute::{power, sample_size, sample_size_with};
pub use error::SizingErr;
