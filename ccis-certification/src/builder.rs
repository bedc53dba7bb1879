//! Certification evidence package assembly.

use chrono::{DateTime, Utc};
use tracing::info;

use ccis_core::assessment::{CompetencyAssessment, TaskEvidence};
use ccis_core::errors::CertificationError;
use ccis_core::models::{CertificationPackage, EvidenceHighlight};

use crate::readiness::CertificationChecker;

/// Build the immutable evidence package for a ready assessment.
///
/// The review gate is checked before the numeric criteria: an
/// assessment under human review gets `BlockedByReview` even when every
/// number passes. Any other failure surfaces as `NotReady` naming the
/// first unmet criterion in gate order.
pub fn build_package(
    checker: &CertificationChecker,
    assessment: &CompetencyAssessment,
    now: DateTime<Utc>,
) -> Result<CertificationPackage, CertificationError> {
    if assessment.requires_human_review {
        return Err(CertificationError::BlockedByReview {
            assessment_id: assessment.id.clone(),
        });
    }

    let readiness = checker.readiness_check(assessment, now);
    if let Some(reason) = readiness.failure_reason() {
        return Err(CertificationError::NotReady { reason });
    }

    let config = checker.config();
    let stats = &assessment.statistics;
    let (_, window_mean) = checker.sustained_window(assessment, now);

    let mut included: Vec<&TaskEvidence> = assessment.included_evidence().collect();
    // Stable sort: equal performances keep ledger order.
    included.sort_by(|a, b| b.performance.value().total_cmp(&a.performance.value()));
    let top_evidence: Vec<EvidenceHighlight> = included
        .iter()
        .take(config.top_evidence_count)
        .map(|e| EvidenceHighlight {
            evidence_id: e.id.clone(),
            performance: e.performance.value(),
            confidence: e.confidence.value(),
            signal_strength: e.signals.mean(),
            recorded_at: e.recorded_at,
        })
        .collect();

    let period_days = stats.evidence_span_days();
    let justification = format!(
        "Certified at {} in competency '{}': {} included evidence records over {:.0} days, \
         weighted average performance {:.2} with average confidence {:.2}; the last {} days \
         sustained {:.2} mean performance across the qualifying records.",
        assessment.current_level,
        assessment.competency_id.0,
        stats.included_count,
        period_days,
        stats.weighted_average_performance,
        stats.average_confidence,
        config.sustained_window_days,
        window_mean,
    );

    info!(
        assessment = %assessment.id,
        level = %assessment.current_level,
        evidence = stats.included_count,
        "certification package generated"
    );

    Ok(CertificationPackage {
        assessment_id: assessment.id.clone(),
        person_id: assessment.person_id.0.clone(),
        competency_id: assessment.competency_id.0.clone(),
        level: assessment.current_level,
        generated_at: now,
        assessment_period_days: period_days,
        evidence_count: stats.included_count,
        average_performance: stats.weighted_average_performance,
        average_confidence: stats.average_confidence,
        recent_window_performance: window_mean,
        top_evidence,
        justification,
    })
}
