//! Behavioral signal set.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::errors::SignalError;

/// The seven behavioral signals observed during task interactions, each
/// normalized so that higher is better independence behavior.
///
/// Fields are public for construction ergonomics; anything that crosses
/// a trust boundary (submissions, deserialized payloads) must pass
/// [`BehavioralSignalSet::validate`] before use. Every component lives
/// on [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct BehavioralSignalSet {
    /// How rarely the learner asks for hints (1.0 = never).
    pub hint_request_frequency: f64,
    /// How quickly the learner recovers from errors.
    pub error_recovery_speed: f64,
    /// Success rate when applying a skill in a new context.
    pub transfer_success_rate: f64,
    /// Agreement between predicted and actual performance.
    pub metacognitive_accuracy: f64,
    /// Output quality relative to time spent.
    pub task_completion_efficiency: f64,
    /// Specificity and timing quality of help requests.
    pub help_seeking_quality: f64,
    /// Agreement between self-rating and measured outcome.
    pub self_assessment_alignment: f64,
}

impl BehavioralSignalSet {
    /// A set with every component at the same value. Fails when the
    /// value is out of range.
    pub fn uniform(value: f64) -> Result<Self, SignalError> {
        let set = Self {
            hint_request_frequency: value,
            error_recovery_speed: value,
            transfer_success_rate: value,
            metacognitive_accuracy: value,
            task_completion_efficiency: value,
            help_seeking_quality: value,
            self_assessment_alignment: value,
        };
        set.validate()?;
        Ok(set)
    }

    /// Check every component against [0, 1]. The error names the first
    /// offending signal.
    pub fn validate(&self) -> Result<(), SignalError> {
        for (name, value) in self.components() {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(SignalError::InvalidSignal { name, value });
            }
        }
        Ok(())
    }

    /// Components in canonical order, paired with their names.
    pub fn components(&self) -> [(&'static str, f64); 7] {
        [
            ("hint_request_frequency", self.hint_request_frequency),
            ("error_recovery_speed", self.error_recovery_speed),
            ("transfer_success_rate", self.transfer_success_rate),
            ("metacognitive_accuracy", self.metacognitive_accuracy),
            ("task_completion_efficiency", self.task_completion_efficiency),
            ("help_seeking_quality", self.help_seeking_quality),
            ("self_assessment_alignment", self.self_assessment_alignment),
        ]
    }

    /// Component values in canonical order.
    pub fn as_array(&self) -> [f64; 7] {
        self.components().map(|(_, value)| value)
    }

    /// Unweighted mean of the components.
    pub fn mean(&self) -> f64 {
        let values = self.as_array();
        values.iter().sum::<f64>() / values.len() as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uniform_builds_valid_sets() {
        let set = BehavioralSignalSet::uniform(0.6).unwrap();
        assert!(set.as_array().iter().all(|&v| v == 0.6));
        assert!((set.mean() - 0.6).abs() < 1e-12);
    }

    #[test]
    fn uniform_rejects_out_of_range() {
        assert!(BehavioralSignalSet::uniform(1.2).is_err());
        assert!(BehavioralSignalSet::uniform(-0.1).is_err());
    }

    #[test]
    fn validate_names_the_offending_signal() {
        let mut set = BehavioralSignalSet::uniform(0.5).unwrap();
        set.transfer_success_rate = 1.5;
        let err = set.validate().unwrap_err();
        match err {
            SignalError::InvalidSignal { name, value } => {
                assert_eq!(name, "transfer_success_rate");
                assert_eq!(value, 1.5);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn validate_rejects_nan() {
        let mut set = BehavioralSignalSet::uniform(0.5).unwrap();
        set.help_seeking_quality = f64::NAN;
        assert!(set.validate().is_err());
    }

    #[test]
    fn components_keep_canonical_order() {
        let set = BehavioralSignalSet::uniform(0.3).unwrap();
        let names: Vec<&str> = set.components().iter().map(|(n, _)| *n).collect();
        assert_eq!(names[0], "hint_request_frequency");
        assert_eq!(names[6], "self_assessment_alignment");
        assert_eq!(names.len(), crate::constants::SIGNAL_COUNT);
    }
}
