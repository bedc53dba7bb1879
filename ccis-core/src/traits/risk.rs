use crate::assessment::TaskEvidence;
use crate::errors::CcisResult;
use crate::models::GamingRiskResult;

/// Evaluates a batch of evidence for gaming patterns.
///
/// Risk outcomes are data, not errors: implementations return a result
/// even when nothing is suspicious, and fall back to
/// [`GamingRiskResult::unknown`] when they cannot evaluate (batch too
/// small, assessor offline). Only infrastructure failures surface as
/// `Err`.
pub trait IRiskAssessor: Send + Sync {
    fn evaluate(&self, evidence: &[TaskEvidence]) -> CcisResult<GamingRiskResult>;
}
