//! Progression business-rule errors.

use thiserror::Error;

/// A well-formed request that the progression rules forbid.
///
/// Distinct from [`crate::errors::SignalError`]: the input parses fine,
/// the state just does not allow the operation yet (or ever).
#[derive(Debug, Error)]
pub enum ProgressionError {
    #[error("advancement criteria not met at level {level}: {failed}")]
    CriteriaNotMet { level: u8, failed: String },

    #[error("assessment {assessment_id} is mastered; evidence no longer moves the level")]
    EvidenceOnMastered { assessment_id: String },

    #[error("target level {target} must be above current level {current}")]
    TargetNotAboveCurrent { current: u8, target: u8 },

    #[error("assessment {assessment_id} has no open plateau period to intervene on")]
    NoOpenPlateau { assessment_id: String },

    #[error("assessment already exists for person {person_id}, competency {competency_id}")]
    AssessmentExists {
        person_id: String,
        competency_id: String,
    },

    #[error("no assessment found for person {person_id}, competency {competency_id}")]
    AssessmentNotFound {
        person_id: String,
        competency_id: String,
    },
}
