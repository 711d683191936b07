use tracing::{trace, warn};

use crate::error::SizingErr;
use crate::power::power_fcn::{MIN_SAMPLE_SIZE, power};
use crate::search::error::SearchExhaustedErr;
use crate::search::types::{SearchSettings, SearchStrategy};
use crate::sweep::error::ParameterErr;
use crate::util::root_find::root_find_discrete;

/// Smallest per-group sample size n in [2, settings.n_max] whose power is
/// strictly greater than `target_power`.
///
/// Power is non-decreasing in n, so the linear scan and the bisection give
/// the same answer; the scan is kept for cross-checking.
pub fn find_sample_size(
    alpha: f64,
    target_power: f64,
    k: f64,
    effect_size: f64,
    one_sided: bool,
    settings: &SearchSettings,
) -> Result<usize, SizingErr> {
    if settings.n_max < MIN_SAMPLE_SIZE {
        return Err(ParameterErr::NMaxTooSmall(settings.n_max).into());
    }

    let exceeds_target = |n: usize| -> Result<bool, SizingErr> {
        let p = power(alpha, n, k, effect_size, one_sided)?;
        trace!(n, power = p, target_power, "evaluated power");
        Ok(p > target_power)
    };

    let found = match settings.strategy {
        SearchStrategy::Linear => {
            let mut found = None;
            for n in MIN_SAMPLE_SIZE..=settings.n_max {
                if exceeds_target(n)? {
                    found = Some(n);
                    break;
                }
            }
            found
        }
        SearchStrategy::Bisection => {
            root_find_discrete(exceeds_target, MIN_SAMPLE_SIZE, settings.n_max)?
        }
    };

    match found {
        Some(n) => Ok(n),
        None => {
            warn!(
                n_max = settings.n_max,
                alpha, target_power, k, effect_size, "no sample size reaches target power"
            );
            Err(SearchExhaustedErr::NoFeasibleSize {
                n_max: settings.n_max,
                target_power,
            }
            .into())
        }
    }
}
