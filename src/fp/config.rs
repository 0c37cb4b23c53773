use serde::{Deserialize, Serialize};

use super::error::{FpError, Result};

pub const DEFAULT_MIN_SUPPORT: f64 = 0.01;
pub const DEFAULT_MIN_CONFIDENCE: f64 = 0.5;

/// How the recursive miner walks sibling branches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExecutionMode {
    #[default]
    Sequential,
    /// Fan sibling branches out over the rayon pool. Output order is unchanged.
    Parallel,
}

/// Mining thresholds and execution settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MiningConfig {
    /// Fraction of transactions an itemset must appear in, in (0, 1].
    pub min_support: f64,
    /// Minimum rule confidence, in [0, 1].
    pub min_confidence: f64,
    /// Longest itemset to emit. `None` mines without a cap.
    pub max_len: Option<usize>,
    pub execution: ExecutionMode,
}

impl Default for MiningConfig {
    fn default() -> Self {
        Self {
            min_support: DEFAULT_MIN_SUPPORT,
            min_confidence: DEFAULT_MIN_CONFIDENCE,
            max_len: None,
            execution: ExecutionMode::Sequential,
        }
    }
}

impl MiningConfig {
    pub fn new(min_support: f64, min_confidence: f64) -> Self {
        Self {
            min_support,
            min_confidence,
            ..Self::default()
        }
    }

    pub fn with_max_len(mut self, max_len: usize) -> Self {
        self.max_len = Some(max_len);
        self
    }

    pub fn with_execution(mut self, execution: ExecutionMode) -> Self {
        self.execution = execution;
        self
    }

    pub fn validate(&self) -> Result<()> {
        // NaN fails both comparisons
        if !(self.min_support > 0.0 && self.min_support <= 1.0) {
            return Err(FpError::InvalidConfiguration {
                name: "min_support",
                value: self.min_support.to_string(),
                expected: "a fraction in (0, 1]",
            });
        }
        if !(self.min_confidence >= 0.0 && self.min_confidence <= 1.0) {
            return Err(FpError::InvalidConfiguration {
                name: "min_confidence",
                value: self.min_confidence.to_string(),
                expected: "a fraction in [0, 1]",
            });
        }
        if self.max_len == Some(0) {
            return Err(FpError::InvalidConfiguration {
                name: "max_len",
                value: "0".to_string(),
                expected: "at least 1",
            });
        }
        Ok(())
    }
}
