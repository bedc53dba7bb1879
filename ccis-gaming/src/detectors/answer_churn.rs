//! Answer churn: excessive answer switching before submission.

use ccis_core::assessment::TaskEvidence;
use ccis_core::config::GamingConfig;
use ccis_core::models::{GamingPattern, PatternFlag};

/// Flag records whose answer-change count reaches the churn threshold.
///
/// Absolute detector. A learner cycling through answers is usually
/// probing the grader rather than reasoning; severity is the share of
/// the batch at or above the threshold.
pub fn detect(evidence: &[TaskEvidence], config: &GamingConfig) -> Option<PatternFlag> {
    if evidence.is_empty() {
        return None;
    }

    let churned = evidence
        .iter()
        .filter(|e| e.answer_changes >= config.answer_churn_threshold)
        .count();
    if churned == 0 {
        return None;
    }

    let worst = evidence
        .iter()
        .map(|e| e.answer_changes)
        .max()
        .unwrap_or(config.answer_churn_threshold);
    let severity = churned as f64 / evidence.len() as f64;
    Some(PatternFlag::new(
        GamingPattern::AnswerChurn,
        severity,
        format!(
            "{churned} of {} records with {}+ answer changes (worst {worst})",
            evidence.len(),
            config.answer_churn_threshold
        ),
    ))
}
