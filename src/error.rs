//----------------------------------------
// Crate error type
//----------------------------------------
pub use crate::power::error::PowerDomainErr;
pub use crate::search::error::SearchExhaustedErr;
pub use crate::sweep::error::ParameterErr;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SizingErr {
    #[error("invalid parameter: {0}")]
    InvalidParameter(ParameterErr),
    #[error("while evaluating power function: {0}")]
    Domain(PowerDomainErr),
    #[error("sample size search exhausted: {0}")]
    SearchExhausted(SearchExhaustedErr),
}

impl SizingErr {
    pub fn is_invalid_parameter(&self) -> bool {
        matches!(self, SizingErr::InvalidParameter(_))
    }

    pub fn is_search_exhausted(&self) -> bool {
        matches!(self, SizingErr::SearchExhausted(_))
    }
}
