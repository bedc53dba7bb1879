//! Plateau risk scoring.

use ccis_core::config::PlateauConfig;

/// Variance at or above this counts as fully dynamic performance when
/// grading sub-threshold risk.
const VARIANCE_CEILING: f64 = 0.05;
/// Improvement rate at or above this counts as healthy growth.
const IMPROVEMENT_CEILING: f64 = 0.05;
/// Cap for sub-threshold risk; keeps graded scores strictly below any
/// sane plateau threshold.
const SUB_THRESHOLD_CAP: f64 = 0.65;

/// Plateau risk on [0, 1] from window variance and improvement rate.
///
/// Piecewise by the plateau condition (both variance and improvement
/// below their thresholds):
///
/// * condition holds: risk starts at the plateau threshold and climbs
///   toward 1.0 as variance and improvement sink further, so a
///   detected plateau is always at or above the threshold;
/// * condition fails: a graded score capped at 0.65 expressing how
///   close the ledger is to plateauing, never enough to trigger.
///
/// Below `min_evidence` included records the risk is 0: too little
/// data to call anything a plateau.
pub fn plateau_risk(
    included_count: usize,
    window_variance: f64,
    improvement_rate: f64,
    config: &PlateauConfig,
) -> f64 {
    if included_count < config.min_evidence {
        return 0.0;
    }

    let in_plateau = window_variance < config.variance_threshold
        && improvement_rate < config.improvement_threshold;

    if in_plateau {
        let variance_depth = (1.0 - window_variance / config.variance_threshold).clamp(0.0, 1.0);
        let improvement_depth =
            (1.0 - improvement_rate / config.improvement_threshold).clamp(0.0, 1.0);
        let depth = 0.5 * variance_depth + 0.5 * improvement_depth;
        (config.risk_threshold + (1.0 - config.risk_threshold) * depth).min(1.0)
    } else {
        let flatness = (1.0 - window_variance / VARIANCE_CEILING).clamp(0.0, 1.0);
        let sluggishness = (1.0 - improvement_rate / IMPROVEMENT_CEILING).clamp(0.0, 1.0);
        (SUB_THRESHOLD_CAP * (0.5 * flatness + 0.5 * sluggishness)).min(SUB_THRESHOLD_CAP)
    }
}
