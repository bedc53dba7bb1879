//! Certification business-rule errors.

use thiserror::Error;

/// Refusal to build a certification package.
#[derive(Debug, Error)]
pub enum CertificationError {
    #[error("not certification ready: {reason}")]
    NotReady { reason: String },

    #[error("assessment {assessment_id} is flagged for human review; certification is blocked")]
    BlockedByReview { assessment_id: String },
}
