//! Raw telemetry normalization.

use serde::{Deserialize, Serialize};

use ccis_core::assessment::BehavioralSignalSet;
use ccis_core::errors::SignalError;

/// Counters and timings collected by the host during one task
/// interaction, before any normalization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawInteractionMetrics {
    /// Hints the learner actually used.
    pub hints_requested: u32,
    /// Hints the task offered. Zero means hints were unavailable.
    pub max_available_hints: u32,
    /// Errors made during the task.
    pub error_count: u32,
    /// Mean time to recover after an error, when any occurred.
    pub recovery_time_ms: Option<u64>,
    /// Recovery time considered normal for this task.
    pub expected_recovery_ms: u64,
    /// Attempts at applying the skill in a new context.
    pub transfer_attempts: u32,
    pub transfer_successes: u32,
    /// Learner's predicted score before starting, on [0, 1].
    pub predicted_score: f64,
    /// Graded score after finishing, on [0, 1].
    pub actual_score: f64,
    /// Time budget for the task.
    pub expected_time_ms: u64,
    pub actual_time_ms: u64,
    /// Help requests made, and how many were specific rather than
    /// generic ("how do I X" vs "help").
    pub help_requests: u32,
    pub specific_help_requests: u32,
    /// Learner's own rating of the finished work, on [0, 1].
    pub self_rating: f64,
}

/// Neutral value for signals the interaction could not inform, e.g.
/// hint behavior on a task that offered no hints.
const UNINFORMATIVE: f64 = 0.5;

/// Converts raw interaction telemetry into the behavioral signal set.
///
/// Every output component lands on [0, 1]. Counters that had no chance
/// to fire (no hints offered, no transfer attempts, no help needed)
/// normalize to the neutral midpoint rather than rewarding or punishing
/// the learner for task design.
#[derive(Debug, Clone, Copy, Default)]
pub struct SignalNormalizer;

impl SignalNormalizer {
    pub fn new() -> Self {
        Self
    }

    pub fn normalize(
        &self,
        raw: &RawInteractionMetrics,
    ) -> Result<BehavioralSignalSet, SignalError> {
        for (name, value) in [
            ("predicted_score", raw.predicted_score),
            ("actual_score", raw.actual_score),
            ("self_rating", raw.self_rating),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(SignalError::InvalidSignal { name, value });
            }
        }
        if raw.transfer_successes > raw.transfer_attempts {
            return Err(SignalError::InvalidSignal {
                name: "transfer_successes",
                value: raw.transfer_successes as f64,
            });
        }
        if raw.specific_help_requests > raw.help_requests {
            return Err(SignalError::InvalidSignal {
                name: "specific_help_requests",
                value: raw.specific_help_requests as f64,
            });
        }

        let hint_request_frequency = if raw.max_available_hints == 0 {
            UNINFORMATIVE
        } else {
            let used = raw.hints_requested.min(raw.max_available_hints);
            1.0 - used as f64 / raw.max_available_hints as f64
        };

        let error_recovery_speed = if raw.error_count == 0 {
            1.0
        } else {
            match raw.recovery_time_ms {
                // Recovering faster than expected caps at 1.
                Some(actual) => {
                    (raw.expected_recovery_ms as f64 / actual.max(1) as f64).min(1.0)
                }
                // Errors made, never recovered.
                None => 0.0,
            }
        };

        let transfer_success_rate = if raw.transfer_attempts == 0 {
            UNINFORMATIVE
        } else {
            raw.transfer_successes as f64 / raw.transfer_attempts as f64
        };

        let metacognitive_accuracy = 1.0 - (raw.predicted_score - raw.actual_score).abs();

        let task_completion_efficiency =
            (raw.expected_time_ms as f64 / raw.actual_time_ms.max(1) as f64).min(1.0);

        let help_seeking_quality = if raw.help_requests == 0 {
            UNINFORMATIVE
        } else {
            raw.specific_help_requests as f64 / raw.help_requests as f64
        };

        let self_assessment_alignment = 1.0 - (raw.self_rating - raw.actual_score).abs();

        let signals = BehavioralSignalSet {
            hint_request_frequency,
            error_recovery_speed,
            transfer_success_rate,
            metacognitive_accuracy,
            task_completion_efficiency,
            help_seeking_quality,
            self_assessment_alignment,
        };
        signals.validate()?;
        Ok(signals)
    }
}
