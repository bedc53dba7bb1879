use serde::{Deserialize, Serialize};

use super::defaults;

/// Gaming detection configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GamingConfig {
    /// Risk at or above this excludes evidence and flags for review.
    /// Default: 0.7.
    pub high_risk_threshold: f64,
    /// Completion times under this are implausibly fast for a human.
    /// Default: 2000.
    pub rapid_response_floor_ms: u64,
    /// Standard deviations from the learner's own mean before a
    /// completion time counts as an outlier. Default: 3.0.
    pub outlier_sigma: f64,
    /// Answer changes at or above this flag churn. Default: 6.
    pub answer_churn_threshold: u32,
    /// Coefficient of variation under this flags uniform timing.
    /// Default: 0.08.
    pub uniform_timing_cv: f64,
    /// Records required before the statistical detectors run.
    /// Default: 5.
    pub min_batch: usize,
}

impl Default for GamingConfig {
    fn default() -> Self {
        Self {
            high_risk_threshold: defaults::DEFAULT_HIGH_RISK_THRESHOLD,
            rapid_response_floor_ms: defaults::DEFAULT_RAPID_RESPONSE_FLOOR_MS,
            outlier_sigma: defaults::DEFAULT_OUTLIER_SIGMA,
            answer_churn_threshold: defaults::DEFAULT_ANSWER_CHURN_THRESHOLD,
            uniform_timing_cv: defaults::DEFAULT_UNIFORM_TIMING_CV,
            min_batch: defaults::DEFAULT_GAMING_MIN_BATCH,
        }
    }
}
