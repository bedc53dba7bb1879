//! Advancement criteria evaluation against the rule table.

use chrono::Utc;

use ccis_core::assessment::CompetencyAssessment;
use ccis_core::config::AdvancementConfig;
use ccis_core::models::{AdvancementCheck, AdvancementCriterion, AdvancementCriterionCheck};

/// Measure an assessment against the rule for its current level.
///
/// All criteria read the derived statistics, so they cover included
/// evidence only; excluded records can hold an advancement back but
/// never push one through. Returns `None` at the top of the scale,
/// where no rule exists.
pub fn evaluate(
    assessment: &CompetencyAssessment,
    config: &AdvancementConfig,
) -> Option<AdvancementCheck> {
    let rule = config.rule_for(assessment.current_level)?;
    let to_level = assessment.current_level.next()?;
    let stats = &assessment.statistics;

    let criteria = vec![
        row(
            AdvancementCriterion::EvidenceCount,
            rule.min_evidence_count as f64,
            stats.included_count as f64,
        ),
        row(
            AdvancementCriterion::AveragePerformance,
            rule.min_average_performance,
            stats.weighted_average_performance,
        ),
        row(
            AdvancementCriterion::AverageConfidence,
            rule.min_average_confidence,
            stats.average_confidence,
        ),
        row(
            AdvancementCriterion::ConsistencyWindow,
            f64::from(rule.min_window_days),
            stats.evidence_span_days(),
        ),
        row(
            AdvancementCriterion::SignalStrength,
            rule.min_signal_strength,
            stats.average_signal_strength,
        ),
    ];

    Some(AdvancementCheck {
        from_level: assessment.current_level,
        to_level,
        criteria,
        checked_at: Utc::now(),
    })
}

/// Whether every criterion for the current level holds.
pub fn satisfied(assessment: &CompetencyAssessment, config: &AdvancementConfig) -> bool {
    evaluate(assessment, config).is_some_and(|check| check.satisfied())
}

fn row(criterion: AdvancementCriterion, required: f64, actual: f64) -> AdvancementCriterionCheck {
    AdvancementCriterionCheck {
        criterion,
        required,
        actual,
        passed: actual >= required,
    }
}
