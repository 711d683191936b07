//----------------------------------------
// sweep errors
//----------------------------------------
use crate::error::SizingErr;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParameterErr {
    #[error("only one of alpha/power/effect_size may be a range")]
    MultipleRanges,
    #[error("alpha cannot be zero")]
    AlphaZero,
    #[error("power cannot be one")]
    PowerOne,
    #[error("effect_size cannot be zero")]
    EffectSizeZero,
    #[error("k must be positive; got {0}")]
    NonPositiveK(f64),
    #[error("alpha should be in (0, 1); got {0}")]
    AlphaOutOfBounds(f64),
    #[error("power should be in (0, 1); got {0}")]
    PowerOutOfBounds(f64),
    #[error("{name} should be finite; got {value}")]
    NonFinite { name: &'static str, value: f64 },
    #[error("range for {name} should be ascending; got [{lo}, {hi}]")]
    DescendingRange {
        name: &'static str,
        lo: f64,
        hi: f64,
    },
    #[error("n_max should be at least 2; got {0}")]
    NMaxTooSmall(usize),
}

impl From<ParameterErr> for SizingErr {
    fn from(e: ParameterErr) -> SizingErr {
        SizingErr::InvalidParameter(e)
    }
}
