//----------------------------------------
// power errors
//----------------------------------------
use crate::error::SizingErr;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PowerDomainErr {
    #[error("sample size per group should be at least 2; got {0}")]
    SampleSizeTooSmall(usize),
    #[error("allocation ratio k should be positive; got {0}")]
    NonPositiveAllocation(f64),
    #[error("degrees of freedom should be positive; got {0}")]
    NonPositiveDf(f64),
    #[error("alpha should be in (0, 1); got {0}")]
    AlphaOutOfBounds(f64),
    #[error("arguments to quantile function should be in (0, 1); got {0}")]
    QuantileOutOfBounds(f64),
    #[error("{name} should be finite; got {value}")]
    NonFinite { name: &'static str, value: f64 },
}

impl From<PowerDomainErr> for SizingErr {
    fn from(e: PowerDomainErr) -> SizingErr {
        SizingErr::Domain(e)
    }
}
