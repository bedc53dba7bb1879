//! Error taxonomy for the CCIS engine.
//!
//! Two families raise: validation errors (malformed input) and rule
//! violations (well-formed input the current state forbids). Everything
//! diagnostic rides along as data instead: quality warnings live on
//! [`crate::models::LedgerStatistics`], gaming flags on
//! [`crate::models::GamingRiskResult`]. A third family covers host
//! persistence failures surfaced through the store trait.

pub mod certification_error;
pub mod progression_error;
pub mod signal_error;

pub use certification_error::CertificationError;
pub use progression_error::ProgressionError;
pub use signal_error::SignalError;

use thiserror::Error;

/// Workspace-wide result alias.
pub type CcisResult<T> = Result<T, CcisError>;

/// Coarse classification used by hosts to pick a response class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorClass {
    /// The payload itself is wrong; retrying unchanged fails.
    InvalidInput,
    /// The state forbids the operation; more evidence may change that.
    RuleViolation,
    /// Host-side persistence failed; retrying may succeed.
    Infrastructure,
}

/// Top-level error for the whole workspace.
#[derive(Debug, Error)]
pub enum CcisError {
    #[error(transparent)]
    Signal(#[from] SignalError),

    #[error(transparent)]
    Progression(#[from] ProgressionError),

    #[error(transparent)]
    Certification(#[from] CertificationError),

    #[error("store error: {0}")]
    Store(String),

    #[error("configuration error: {0}")]
    Config(String),
}

impl CcisError {
    pub fn class(&self) -> ErrorClass {
        match self {
            Self::Signal(_) => ErrorClass::InvalidInput,
            Self::Progression(_) | Self::Certification(_) => ErrorClass::RuleViolation,
            Self::Store(_) | Self::Config(_) => ErrorClass::Infrastructure,
        }
    }
}
