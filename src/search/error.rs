//----------------------------------------
// search errors
//----------------------------------------
use crate::error::SizingErr;
use crate::swept_parameter::SweptParameter;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SearchExhaustedErr {
    #[error("no sample size up to {n_max} reaches target power {target_power}")]
    NoFeasibleSize { n_max: usize, target_power: f64 },
    #[error("at {parameter} = {value}, no sample size up to {n_max} reaches target power {target_power}")]
    AtSweepPoint {
        parameter: SweptParameter,
        value: f64,
        n_max: usize,
        target_power: f64,
    },
}

impl SearchExhaustedErr {
    pub fn n_max(&self) -> usize {
        match self {
            SearchExhaustedErr::NoFeasibleSize { n_max, .. }
            | SearchExhaustedErr::AtSweepPoint { n_max, .. } => *n_max,
        }
    }

    /// Attaches the swept value that was being searched when the bound ran out
    pub fn at(self, parameter: SweptParameter, value: f64) -> SearchExhaustedErr {
        match self {
            SearchExhaustedErr::NoFeasibleSize {
                n_max,
                target_power,
            }
            | SearchExhaustedErr::AtSweepPoint {
                n_max,
                target_power,
                ..
            } => SearchExhaustedErr::AtSweepPoint {
                parameter,
                value,
                n_max,
                target_power,
            },
        }
    }
}

impl From<SearchExhaustedErr> for SizingErr {
    fn from(e: SearchExhaustedErr) -> SizingErr {
        SizingErr::SearchExhausted(e)
    }
}
