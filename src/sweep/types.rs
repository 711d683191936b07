//----------------------------------------
// sweep mod types
//----------------------------------------
use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use crate::swept_parameter::SweptParameter;

/// Number of evenly spaced values a range is expanded into
pub const SWEEP_POINTS: usize = 20;

/// A single value or an inclusive range [lo, hi] to sweep over
#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    Scalar(f64),
    Range(f64, f64),
}

impl ParamValue {
    pub fn is_range(&self) -> bool {
        matches!(self, ParamValue::Range(..))
    }
}

impl From<f64> for ParamValue {
    fn from(x: f64) -> Self {
        ParamValue::Scalar(x)
    }
}

impl From<[f64; 2]> for ParamValue {
    fn from([lo, hi]: [f64; 2]) -> Self {
        ParamValue::Range(lo, hi)
    }
}

impl From<(f64, f64)> for ParamValue {
    fn from((lo, hi): (f64, f64)) -> Self {
        ParamValue::Range(lo, hi)
    }
}

impl From<RangeInclusive<f64>> for ParamValue {
    fn from(r: RangeInclusive<f64>) -> Self {
        let (lo, hi) = r.into_inner();
        ParamValue::Range(lo, hi)
    }
}

/// Inputs to a sample size calculation. At most one of `alpha`, `power`
/// and `effect_size` may be a range.
#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct TestParameters {
    /// Significance level
    pub alpha: ParamValue,
    /// Target power
    pub power: ParamValue,
    /// Ratio of control to treatment group sizes
    pub k: f64,
    /// Difference in means divided by the common standard deviation
    pub effect_size: ParamValue,
    pub one_sided: bool,
}

impl Default for TestParameters {
    fn default() -> Self {
        Self {
            alpha: ParamValue::Scalar(0.05),
            power: ParamValue::Scalar(0.8),
            k: 1.0,
            effect_size: ParamValue::Scalar(1.0),
            one_sided: false,
        }
    }
}

impl TestParameters {
    pub fn new(
        alpha: impl Into<ParamValue>,
        power: impl Into<ParamValue>,
        k: f64,
        effect_size: impl Into<ParamValue>,
        one_sided: bool,
    ) -> Self {
        Self {
            alpha: alpha.into(),
            power: power.into(),
            k,
            effect_size: effect_size.into(),
            one_sided,
        }
    }
}

/// Parameters after validation: every input is a number, plus at most one
/// range to expand
#[derive(Debug, PartialEq, Clone, Copy)]
pub(crate) struct ResolvedParameters {
    pub alpha: f64,
    pub power: f64,
    pub k: f64,
    pub effect_size: f64,
    pub one_sided: bool,
    pub maybe_sweep: Option<(SweptParameter, f64, f64)>,
}

impl ResolvedParameters {
    /// (alpha, power, effect_size) with the swept parameter set to `value`
    pub fn at(&self, parameter: SweptParameter, value: f64) -> (f64, f64, f64) {
        match parameter {
            SweptParameter::Alpha => (value, self.power, self.effect_size),
            SweptParameter::Power => (self.alpha, value, self.effect_size),
            SweptParameter::EffectSize => (self.alpha, self.power, value),
        }
    }
}

/// Per-group sample sizes. Pairs are (control, treatment) and only occur
/// when k != 1.
#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SampleSizeResult {
    Single(usize),
    Pair { control: usize, treatment: usize },
    Sweep(Vec<usize>),
    PairSweep {
        control: Vec<usize>,
        treatment: Vec<usize>,
    },
}

impl SampleSizeResult {
    /// Treatment group size(s); equal to the control sizes when k = 1
    pub fn treatment(&self) -> &[usize] {
        match self {
            SampleSizeResult::Single(n) => std::slice::from_ref(n),
            SampleSizeResult::Pair { treatment, .. } => std::slice::from_ref(treatment),
            SampleSizeResult::Sweep(ns) => ns,
            SampleSizeResult::PairSweep { treatment, .. } => treatment,
        }
    }

    pub fn control(&self) -> &[usize] {
        match self {
            SampleSizeResult::Single(n) => std::slice::from_ref(n),
            SampleSizeResult::Pair { control, .. } => std::slice::from_ref(control),
            SampleSizeResult::Sweep(ns) => ns,
            SampleSizeResult::PairSweep { control, .. } => control,
        }
    }

    /// Number of design points
    pub fn len(&self) -> usize {
        self.treatment().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn param_value_conversions() {
        assert_eq!(ParamValue::from(0.05), ParamValue::Scalar(0.05));
        assert_eq!(ParamValue::from([0.01, 0.05]), ParamValue::Range(0.01, 0.05));
        assert_eq!(ParamValue::from((0.7, 0.9)), ParamValue::Range(0.7, 0.9));
        assert_eq!(ParamValue::from(0.2..=0.8), ParamValue::Range(0.2, 0.8));
    }

    #[test]
    fn defaults() {
        let params = TestParameters::default();
        assert_eq!(params.alpha, ParamValue::Scalar(0.05));
        assert_eq!(params.power, ParamValue::Scalar(0.8));
        assert_eq!(params.k, 1.0);
        assert_eq!(params.effect_size, ParamValue::Scalar(1.0));
        assert!(!params.one_sided);
    }

    #[test]
    fn parameters_from_json() {
        let params: TestParameters =
            serde_json::from_str(r#"{"alpha": [0.01, 0.05], "k": 2.0, "one_sided": true}"#)
                .expect("failed to parse parameters");
        assert_eq!(params.alpha, ParamValue::Range(0.01, 0.05));
        assert_eq!(params.power, ParamValue::Scalar(0.8));
        assert_eq!(params.k, 2.0);
        assert!(params.one_sided);
    }

    #[test]
    fn result_accessors() {
        let single = SampleSizeResult::Single(17);
        assert_eq!(single.treatment(), &[17]);
        assert_eq!(single.control(), &[17]);
        assert_eq!(single.len(), 1);

        let pair = SampleSizeResult::PairSweep {
            control: vec![20, 18],
            treatment: vec![10, 9],
        };
        assert_eq!(pair.control(), &[20, 18]);
        assert_eq!(pair.treatment(), &[10, 9]);
        assert_eq!(pair.len(), 2);
    }
}
