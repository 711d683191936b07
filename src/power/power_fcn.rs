use crate::error::SizingErr;
use crate::power::distributions::t_quantile;
use crate::power::error::PowerDomainErr;
use crate::power::noncentral_t::noncentral_t_cdf;

pub const MIN_SAMPLE_SIZE: usize = 2;

// (noncentrality, degrees of freedom) for n subjects in the treatment group
// and k * n in the control group
fn nct_parameters(
    alpha: f64,
    n: usize,
    k: f64,
    effect_size: f64,
) -> Result<(f64, f64), SizingErr> {
    if alpha <= 0.0 || alpha >= 1.0 || alpha.is_nan() {
        return Err(PowerDomainErr::AlphaOutOfBounds(alpha).into());
    }
    if n < MIN_SAMPLE_SIZE {
        return Err(PowerDomainErr::SampleSizeTooSmall(n).into());
    }
    if k <= 0.0 || k.is_nan() {
        return Err(PowerDomainErr::NonPositiveAllocation(k).into());
    }
    if !k.is_finite() {
        return Err(PowerDomainErr::NonFinite {
            name: "k",
            value: k,
        }
        .into());
    }
    if !effect_size.is_finite() {
        return Err(PowerDomainErr::NonFinite {
            name: "effect size",
            value: effect_size,
        }
        .into());
    }

    let n_f = n as f64;
    let df = (1.0 + k) * n_f - 2.0;
    if df <= 0.0 {
        return Err(PowerDomainErr::NonPositiveDf(df).into());
    }
    let delta = effect_size * (n_f * k / (k + 1.0)).sqrt();
    Ok((delta, df))
}

/// Power of a two-tailed two-sample t-test
pub fn power_two_sided(alpha: f64, n: usize, k: f64, effect_size: f64) -> Result<f64, SizingErr> {
    let (delta, df) = nct_parameters(alpha, n, k, effect_size)?;
    let c = t_quantile(1.0 - alpha / 2.0, df)?;
    let p = 1.0 - noncentral_t_cdf(c, df, delta)? + noncentral_t_cdf(-c, df, delta)?;
    Ok(p.clamp(0.0, 1.0))
}

/// Power of a one-tailed two-sample t-test, alternative in the direction of
/// a positive effect
pub fn power_one_sided(alpha: f64, n: usize, k: f64, effect_size: f64) -> Result<f64, SizingErr> {
    let (delta, df) = nct_parameters(alpha, n, k, effect_size)?;
    let c = t_quantile(1.0 - alpha, df)?;
    let p = 1.0 - noncentral_t_cdf(c, df, delta)?;
    Ok(p.clamp(0.0, 1.0))
}

/// Power of a two-sample t-test with `n` subjects in one group and `k * n`
/// in the other, for a standardized effect size (difference in means over
/// the common standard deviation).
pub fn power(
    alpha: f64,
    n: usize,
    k: f64,
    effect_size: f64,
    one_sided: bool,
) -> Result<f64, SizingErr> {
    if one_sided {
        power_one_sided(alpha, n, k, effect_size)
    } else {
        power_two_sided(alpha, n, k, effect_size)
    }
}
