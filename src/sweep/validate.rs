use crate::error::SizingErr;
use crate::swept_parameter::SweptParameter;
use crate::sweep::error::ParameterErr;
use crate::sweep::types::{ParamValue, ResolvedParameters, TestParameters};

// Checks shared by alpha, power and effect size. `excluded` is the value a
// range may not contain; `bounds_err` is set for inputs restricted to (0, 1).
fn check_value(
    value: ParamValue,
    name: &'static str,
    excluded: f64,
    excluded_err: ParameterErr,
    bounds_err: Option<fn(f64) -> ParameterErr>,
) -> Result<(f64, Option<(f64, f64)>), SizingErr> {
    let (lo, hi) = match value {
        ParamValue::Scalar(x) => (x, x),
        ParamValue::Range(lo, hi) => (lo, hi),
    };
    for x in [lo, hi] {
        if !x.is_finite() {
            return Err(ParameterErr::NonFinite { name, value: x }.into());
        }
    }
    if lo.min(hi) <= excluded && lo.max(hi) >= excluded {
        return Err(excluded_err.into());
    }
    if lo > hi {
        return Err(ParameterErr::DescendingRange { name, lo, hi }.into());
    }
    if let Some(bounds_err) = bounds_err {
        for x in [lo, hi] {
            if x <= 0.0 || x >= 1.0 {
                return Err(bounds_err(x).into());
            }
        }
    }

    match value {
        ParamValue::Scalar(x) => Ok((x, None)),
        ParamValue::Range(lo, hi) => Ok((lo, Some((lo, hi)))),
    }
}

/// Fails fast on anything that would make the search meaningless, and
/// resolves the scalar/range inputs into numbers plus at most one range.
pub(crate) fn validate_parameters(
    params: &TestParameters,
) -> Result<ResolvedParameters, SizingErr> {
    //----------------------------------------
    // Only one range allowed
    let n_ranges = [params.alpha, params.power, params.effect_size]
        .iter()
        .filter(|v| v.is_range())
        .count();
    if n_ranges > 1 {
        return Err(ParameterErr::MultipleRanges.into());
    }

    //----------------------------------------
    // Degenerate values
    let (alpha, maybe_alpha_range) = check_value(
        params.alpha,
        "alpha",
        0.0,
        ParameterErr::AlphaZero,
        Some(ParameterErr::AlphaOutOfBounds),
    )?;
    let (power, maybe_power_range) = check_value(
        params.power,
        "power",
        1.0,
        ParameterErr::PowerOne,
        Some(ParameterErr::PowerOutOfBounds),
    )?;
    let (effect_size, maybe_effect_range) = check_value(
        params.effect_size,
        "effect_size",
        0.0,
        ParameterErr::EffectSizeZero,
        None,
    )?;
    if params.k.is_nan() || params.k <= 0.0 {
        return Err(ParameterErr::NonPositiveK(params.k).into());
    }
    if !params.k.is_finite() {
        return Err(ParameterErr::NonFinite {
            name: "k",
            value: params.k,
        }
        .into());
    }

    let maybe_sweep = match (maybe_alpha_range, maybe_power_range, maybe_effect_range) {
        (Some((lo, hi)), None, None) => Some((SweptParameter::Alpha, lo, hi)),
        (None, Some((lo, hi)), None) => Some((SweptParameter::Power, lo, hi)),
        (None, None, Some((lo, hi))) => Some((SweptParameter::EffectSize, lo, hi)),
        (None, None, None) => None,
        // More than one range was rejected above
        _ => return Err(ParameterErr::MultipleRanges.into()),
    };

    Ok(ResolvedParameters {
        alpha,
        power,
        k: params.k,
        effect_size,
        one_sided: params.one_sided,
        maybe_sweep,
    })
}
