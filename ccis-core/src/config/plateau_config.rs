use serde::{Deserialize, Serialize};

use super::defaults;

/// Plateau detection configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PlateauConfig {
    /// Included records required before plateau detection runs.
    /// Default: 10.
    pub min_evidence: usize,
    /// Variance below this reads as flat performance. Default: 0.01.
    pub variance_threshold: f64,
    /// Improvement rate below this reads as no growth. Default: 0.01.
    pub improvement_threshold: f64,
    /// Risk at or above this opens a plateau. Default: 0.7.
    pub risk_threshold: f64,
}

impl Default for PlateauConfig {
    fn default() -> Self {
        Self {
            min_evidence: defaults::DEFAULT_PLATEAU_MIN_EVIDENCE,
            variance_threshold: defaults::DEFAULT_PLATEAU_VARIANCE_THRESHOLD,
            improvement_threshold: defaults::DEFAULT_PLATEAU_IMPROVEMENT_THRESHOLD,
            risk_threshold: defaults::DEFAULT_PLATEAU_RISK_THRESHOLD,
        }
    }
}
