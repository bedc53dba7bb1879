//! The certification readiness gate.

use chrono::{DateTime, Duration, Utc};

use ccis_core::assessment::CompetencyAssessment;
use ccis_core::config::CertificationConfig;
use ccis_core::models::{CertificationCriterion, CertificationCriterionCheck, ReadinessCheck};

/// Measures assessments against the certification criteria.
///
/// Every criterion is an at-least comparison over included evidence.
/// The sustained-performance criteria are the only ones that depend on
/// the clock, which is why `now` is a parameter: the progression engine
/// and the package builder must agree on what "recent" means within one
/// operation.
#[derive(Debug, Clone, Default)]
pub struct CertificationChecker {
    config: CertificationConfig,
}

impl CertificationChecker {
    pub fn new(config: CertificationConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CertificationConfig {
        &self.config
    }

    /// Evaluate every criterion and report per-criterion detail.
    pub fn readiness_check(
        &self,
        assessment: &CompetencyAssessment,
        now: DateTime<Utc>,
    ) -> ReadinessCheck {
        let stats = &assessment.statistics;
        let (window_count, window_mean) = self.sustained_window(assessment, now);

        let criteria = vec![
            row(
                CertificationCriterion::MinimumLevel,
                self.config.min_level as f64,
                assessment.current_level.ordinal() as f64,
            ),
            row(
                CertificationCriterion::EvidenceVolume,
                self.config.min_evidence_count as f64,
                stats.included_count as f64,
            ),
            row(
                CertificationCriterion::AveragePerformance,
                self.config.min_average_performance,
                stats.weighted_average_performance,
            ),
            row(
                CertificationCriterion::AverageConfidence,
                self.config.min_average_confidence,
                stats.average_confidence,
            ),
            row(
                CertificationCriterion::RecentWindowVolume,
                self.config.sustained_min_records as f64,
                window_count as f64,
            ),
            row(
                CertificationCriterion::RecentWindowPerformance,
                self.config.sustained_min_performance,
                window_mean,
            ),
        ];

        ReadinessCheck {
            criteria,
            blocked_by_review: assessment.requires_human_review,
            checked_at: now,
        }
    }

    pub fn is_ready(&self, assessment: &CompetencyAssessment, now: DateTime<Utc>) -> bool {
        self.readiness_check(assessment, now).is_ready()
    }

    /// Included records inside the sustained window and their mean
    /// performance. An empty window reads (0, 0.0).
    pub(crate) fn sustained_window(
        &self,
        assessment: &CompetencyAssessment,
        now: DateTime<Utc>,
    ) -> (usize, f64) {
        let cutoff = now - Duration::days(i64::from(self.config.sustained_window_days));
        let recent: Vec<f64> = assessment
            .included_evidence()
            .filter(|e| e.recorded_at >= cutoff)
            .map(|e| e.performance.value())
            .collect();
        if recent.is_empty() {
            return (0, 0.0);
        }
        let mean = recent.iter().sum::<f64>() / recent.len() as f64;
        (recent.len(), mean)
    }
}

fn row(criterion: CertificationCriterion, required: f64, actual: f64) -> CertificationCriterionCheck {
    CertificationCriterionCheck {
        criterion,
        required,
        actual,
        passed: actual >= required,
    }
}
