//! Input-validation errors.

use thiserror::Error;

/// Rejection of malformed input at the engine boundary.
///
/// These map to the host's 400-class responses: the caller must fix the
/// payload, retrying unchanged input will fail identically.
#[derive(Debug, Error)]
pub enum SignalError {
    #[error("signal `{name}` out of range: {value} (expected [0, 1])")]
    InvalidSignal { name: &'static str, value: f64 },

    #[error("score out of range: {value} (expected [0, 1])")]
    ScoreOutOfRange { value: f64 },

    #[error("percentage out of range: {value} (expected [0, 100])")]
    PercentageOutOfRange { value: f64 },

    #[error("percentage {percentage} falls outside the band owned by level {level}")]
    PercentageOutsideBand { level: u8, percentage: f64 },

    #[error("scaffolding level {level} exceeds maximum {max}")]
    ScaffoldingOutOfRange { level: u8, max: u8 },

    #[error("signal weights sum to {sum:.4}, expected 1.0 +/- {tolerance}")]
    WeightSumMismatch { sum: f64, tolerance: f64 },

    #[error("unknown person: {person_id}")]
    UnknownPerson { person_id: String },

    #[error("unknown competency: {competency_id}")]
    UnknownCompetency { competency_id: String },
}
