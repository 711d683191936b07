//----------------------------------------
// search mod types
//----------------------------------------
use serde::{Deserialize, Serialize};

/// Largest sample size the search considers unless overridden
pub const DEFAULT_N_MAX: usize = 4_999;

#[derive(Default, Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchStrategy {
    /// Evaluate n = 2, 3, ... until the target is passed
    Linear,
    /// Halve [2, n_max] using monotonicity of power in n
    #[default]
    Bisection,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchSettings {
    pub n_max: usize,
    pub strategy: SearchStrategy,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            n_max: DEFAULT_N_MAX,
            strategy: SearchStrategy::default(),
        }
    }
}

impl SearchSettings {
    pub fn with_n_max(mut self, n_max: usize) -> Self {
        self.n_max = n_max;
        self
    }

    pub fn with_strategy(mut self, strategy: SearchStrategy) -> Self {
        self.strategy = strategy;
        self
    }
}
