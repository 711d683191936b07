use std::fmt;

use serde::{Deserialize, Serialize};

/// The input supplied as a range in a sweep
#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SweptParameter {
    Alpha,
    Power,
    EffectSize,
}

impl fmt::Display for SweptParameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SweptParameter::Alpha => write!(f, "alpha"),
            SweptParameter::Power => write!(f, "power"),
            SweptParameter::EffectSize => write!(f, "effect_size"),
        }
    }
}
