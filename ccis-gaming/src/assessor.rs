//! Batch risk aggregation over the pattern detectors.

use chrono::Utc;
use tracing::{debug, instrument, warn};

use ccis_core::assessment::TaskEvidence;
use ccis_core::config::GamingConfig;
use ccis_core::errors::CcisResult;
use ccis_core::models::{GamingPattern, GamingRiskResult};
use ccis_core::traits::IRiskAssessor;

use crate::detectors;

/// Risk contributed by each pattern at full severity. Calibrated so a
/// batch that is nothing but rapid guessing clears the default 0.7
/// high-risk threshold on its own, while churn or uniform timing alone
/// stay below it and need a second pattern to trigger exclusion.
const RAPID_GUESSING_WEIGHT: f64 = 0.75;
const UNIFORM_TIMING_WEIGHT: f64 = 0.60;
const ANSWER_CHURN_WEIGHT: f64 = 0.50;
const RESPONSE_TIME_OUTLIER_WEIGHT: f64 = 0.30;

fn pattern_weight(pattern: GamingPattern) -> f64 {
    match pattern {
        GamingPattern::RapidGuessing => RAPID_GUESSING_WEIGHT,
        GamingPattern::UniformTiming => UNIFORM_TIMING_WEIGHT,
        GamingPattern::AnswerChurn => ANSWER_CHURN_WEIGHT,
        GamingPattern::ResponseTimeOutlier => RESPONSE_TIME_OUTLIER_WEIGHT,
    }
}

/// Deterministic gaming-risk evaluator over evidence batches.
///
/// Runs every detector, sums `weight x severity` per hit, and caps the
/// total at 1.0. Detection confidence grows with batch size and
/// saturates at twice `min_batch`; an empty batch yields
/// [`GamingRiskResult::unknown`].
#[derive(Debug, Clone, Default)]
pub struct GamingRiskAssessor {
    config: GamingConfig,
}

impl GamingRiskAssessor {
    pub fn new(config: GamingConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GamingConfig {
        &self.config
    }

    /// Evaluate one batch. Infallible; `evaluate` wraps this for the
    /// trait seam.
    #[instrument(skip(self, evidence), fields(batch = evidence.len()))]
    pub fn assess(&self, evidence: &[TaskEvidence]) -> GamingRiskResult {
        let evidence_ids: Vec<String> = evidence.iter().map(|e| e.id.clone()).collect();
        if evidence.is_empty() {
            return GamingRiskResult::unknown(evidence_ids);
        }

        let flagged = detectors::detect_all(evidence, &self.config);
        let risk_score = flagged
            .iter()
            .map(|f| pattern_weight(f.pattern) * f.severity)
            .sum::<f64>()
            .min(1.0);
        let detection_confidence =
            (evidence.len() as f64 / (2 * self.config.min_batch) as f64).min(1.0);

        let result = GamingRiskResult {
            risk_score,
            flagged,
            detection_confidence,
            evidence_ids,
            evaluated_at: Utc::now(),
        };

        if result.risk_score >= self.config.high_risk_threshold {
            warn!(
                risk = result.risk_score,
                patterns = result.flagged.len(),
                confidence = result.detection_confidence,
                "evidence batch carries high gaming risk"
            );
        } else {
            debug!(risk = result.risk_score, "gaming risk evaluated");
        }
        result
    }
}

impl IRiskAssessor for GamingRiskAssessor {
    fn evaluate(&self, evidence: &[TaskEvidence]) -> CcisResult<GamingRiskResult> {
        Ok(self.assess(evidence))
    }
}
