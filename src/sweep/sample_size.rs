#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tracing::debug;

use crate::error::SizingErr;
use crate::power::power_fcn::MIN_SAMPLE_SIZE;
use crate::search::find_sample_size::find_sample_size;
use crate::search::types::SearchSettings;
use crate::swept_parameter::SweptParameter;
use crate::sweep::error::ParameterErr;
use crate::sweep::expand::linspace;
use crate::sweep::types::{ResolvedParameters, SWEEP_POINTS, SampleSizeResult, TestParameters};
use crate::sweep::validate::validate_parameters;

/// Minimum per-group sample size for a two-sample t-test, using the default
/// search settings (n up to 4999, bisection).
///
/// Returns a single size when every input is a scalar, or 20 sizes, one per
/// evenly spaced value of whichever input was given as a range. When k != 1
/// the result is split into (control, treatment) with control = ceil(k * n).
pub fn sample_size(params: &TestParameters) -> Result<SampleSizeResult, SizingErr> {
    sample_size_with(params, &SearchSettings::default())
}

pub fn sample_size_with(
    params: &TestParameters,
    settings: &SearchSettings,
) -> Result<SampleSizeResult, SizingErr> {
    //----------------------------------------
    // Validate before any search
    //----------------------------------------
    let resolved = validate_parameters(params)?;
    if settings.n_max < MIN_SAMPLE_SIZE {
        return Err(ParameterErr::NMaxTooSmall(settings.n_max).into());
    }

    //----------------------------------------
    // Search, one point per swept value
    //----------------------------------------
    let maybe_raw_sizes = match resolved.maybe_sweep {
        None => None,
        Some((parameter, lo, hi)) => {
            let values = linspace(lo, hi, SWEEP_POINTS);
            debug!(%parameter, lo, hi, points = values.len(), "starting sample size sweep");
            Some(search_sweep(&resolved, parameter, &values, settings)?)
        }
    };

    //----------------------------------------
    // Round + shape
    //----------------------------------------
    match maybe_raw_sizes {
        None => {
            let raw = find_sample_size(
                resolved.alpha,
                resolved.power,
                resolved.k,
                resolved.effect_size,
                resolved.one_sided,
                settings,
            )?;
            debug!(n = raw, k = resolved.k, "computed sample size");
            Ok(shape_single(raw, resolved.k))
        }
        Some(raw_sizes) => Ok(shape_sweep(raw_sizes, resolved.k)),
    }
}

fn search_point(
    resolved: &ResolvedParameters,
    parameter: SweptParameter,
    value: f64,
    settings: &SearchSettings,
) -> Result<usize, SizingErr> {
    let (alpha, power, effect_size) = resolved.at(parameter, value);
    let n = find_sample_size(
        alpha,
        power,
        resolved.k,
        effect_size,
        resolved.one_sided,
        settings,
    )
    .map_err(|e| match e {
        SizingErr::SearchExhausted(exhausted) => exhausted.at(parameter, value).into(),
        other => other,
    })?;
    debug!(%parameter, value, n, "computed sweep point");
    Ok(n)
}

// Any failing point aborts the whole sweep; sizes keep the order of `values`
fn search_sweep(
    resolved: &ResolvedParameters,
    parameter: SweptParameter,
    values: &[f64],
    settings: &SearchSettings,
) -> Result<Vec<usize>, SizingErr> {
    #[cfg(feature = "parallel")]
    let raw_sizes = values
        .par_iter()
        .map(|&value| search_point(resolved, parameter, value, settings))
        .collect::<Result<Vec<usize>, SizingErr>>();

    #[cfg(not(feature = "parallel"))]
    let raw_sizes = values
        .iter()
        .map(|&value| search_point(resolved, parameter, value, settings))
        .collect::<Result<Vec<usize>, SizingErr>>();

    raw_sizes
}

fn control_size(raw: usize, k: f64) -> usize {
    (k * raw as f64).ceil() as usize
}

fn shape_single(raw: usize, k: f64) -> SampleSizeResult {
    if k == 1.0 {
        SampleSizeResult::Single(raw)
    } else {
        SampleSizeResult::Pair {
            control: control_size(raw, k),
            treatment: raw,
        }
    }
}

fn shape_sweep(raw_sizes: Vec<usize>, k: f64) -> SampleSizeResult {
    if k == 1.0 {
        SampleSizeResult::Sweep(raw_sizes)
    } else {
        let control = raw_sizes.iter().map(|&raw| control_size(raw, k)).collect();
        SampleSizeResult::PairSweep {
            control,
            treatment: raw_sizes,
        }
    }
}
