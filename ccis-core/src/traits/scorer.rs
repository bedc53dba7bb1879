use crate::assessment::{BehavioralSignalSet, Score};
use crate::errors::CcisResult;

/// Turns a behavioral signal set into a single evidence score.
///
/// The workspace ships a deterministic weighted-sum implementation;
/// hosts may substitute a model-backed scorer. Implementations must be
/// pure: the same signals always produce the same score.
pub trait IScorer: Send + Sync {
    fn score(&self, signals: &BehavioralSignalSet) -> CcisResult<Score>;
}
