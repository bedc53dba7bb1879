use serde::{Deserialize, Serialize};

use super::defaults;
use crate::constants::WEIGHT_SUM_TOLERANCE;
use crate::errors::SignalError;

/// Behavioral scoring configuration.
///
/// The seven weights must sum to 1.0 within
/// [`crate::constants::WEIGHT_SUM_TOLERANCE`]; [`ScoringConfig::validate`]
/// enforces this at load time so the scorer never has to.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    /// Weight of hint request frequency. Default: 0.35.
    pub hint_request_frequency_weight: f64,
    /// Weight of error recovery speed. Default: 0.25.
    pub error_recovery_speed_weight: f64,
    /// Weight of transfer success rate. Default: 0.20.
    pub transfer_success_rate_weight: f64,
    /// Weight of metacognitive accuracy. Default: 0.10.
    pub metacognitive_accuracy_weight: f64,
    /// Weight of task completion efficiency. Default: 0.05.
    pub task_completion_efficiency_weight: f64,
    /// Weight of help seeking quality. Default: 0.03.
    pub help_seeking_quality_weight: f64,
    /// Weight of self assessment alignment. Default: 0.02.
    pub self_assessment_alignment_weight: f64,
}

impl ScoringConfig {
    /// Weights in the canonical signal order.
    pub fn weights(&self) -> [f64; 7] {
        [
            self.hint_request_frequency_weight,
            self.error_recovery_speed_weight,
            self.transfer_success_rate_weight,
            self.metacognitive_accuracy_weight,
            self.task_completion_efficiency_weight,
            self.help_seeking_quality_weight,
            self.self_assessment_alignment_weight,
        ]
    }

    pub fn validate(&self) -> Result<(), SignalError> {
        let sum: f64 = self.weights().iter().sum();
        if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(SignalError::WeightSumMismatch {
                sum,
                tolerance: WEIGHT_SUM_TOLERANCE,
            });
        }
        Ok(())
    }
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            hint_request_frequency_weight: defaults::DEFAULT_WEIGHT_HINT_REQUEST_FREQUENCY,
            error_recovery_speed_weight: defaults::DEFAULT_WEIGHT_ERROR_RECOVERY_SPEED,
            transfer_success_rate_weight: defaults::DEFAULT_WEIGHT_TRANSFER_SUCCESS_RATE,
            metacognitive_accuracy_weight: defaults::DEFAULT_WEIGHT_METACOGNITIVE_ACCURACY,
            task_completion_efficiency_weight:
                defaults::DEFAULT_WEIGHT_TASK_COMPLETION_EFFICIENCY,
            help_seeking_quality_weight: defaults::DEFAULT_WEIGHT_HELP_SEEKING_QUALITY,
            self_assessment_alignment_weight: defaults::DEFAULT_WEIGHT_SELF_ASSESSMENT_ALIGNMENT,
        }
    }
}
