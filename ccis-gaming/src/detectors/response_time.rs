//! Completion-time detectors: rapid guessing and distribution outliers.

use ccis_core::assessment::TaskEvidence;
use ccis_core::config::GamingConfig;
use ccis_core::models::{GamingPattern, PatternFlag};

use super::{completion_times_ms, mean, std_dev};

/// Flag records completed faster than a human plausibly could.
///
/// Absolute detector: the floor (`rapid_response_floor_ms`) does not
/// depend on the batch, so even a single sub-floor record is evidence.
/// Severity is the share of the batch below the floor.
pub fn detect_rapid_guessing(
    evidence: &[TaskEvidence],
    config: &GamingConfig,
) -> Option<PatternFlag> {
    if evidence.is_empty() {
        return None;
    }

    let rapid = evidence
        .iter()
        .filter(|e| e.completion_time_ms < config.rapid_response_floor_ms)
        .count();
    if rapid == 0 {
        return None;
    }

    let severity = rapid as f64 / evidence.len() as f64;
    Some(PatternFlag::new(
        GamingPattern::RapidGuessing,
        severity,
        format!(
            "{rapid} of {} records completed under {}ms",
            evidence.len(),
            config.rapid_response_floor_ms
        ),
    ))
}

/// Flag completion times far outside the learner's own distribution.
///
/// Statistical detector: needs `min_batch` records, and measures each
/// time against the batch mean in units of the batch's population
/// standard deviation. An extreme point inflates the deviation it is
/// measured against, so lone outliers only become visible once the
/// batch is comfortably past the minimum. Severity is the outlier
/// share, which keeps this the weakest signal; a stray long completion
/// is usually a distracted human, not a cheat.
pub fn detect_outliers(evidence: &[TaskEvidence], config: &GamingConfig) -> Option<PatternFlag> {
    if evidence.len() < config.min_batch {
        return None;
    }

    let times = completion_times_ms(evidence);
    let mean = mean(&times);
    let std = std_dev(&times, mean);
    if std == 0.0 {
        // Identical times are the uniform-timing detector's territory.
        return None;
    }

    let outliers = times
        .iter()
        .filter(|t| ((**t - mean) / std).abs() > config.outlier_sigma)
        .count();
    if outliers == 0 {
        return None;
    }

    let severity = outliers as f64 / times.len() as f64;
    Some(PatternFlag::new(
        GamingPattern::ResponseTimeOutlier,
        severity,
        format!(
            "{outliers} of {} completion times beyond {:.1} sigma of the batch mean",
            times.len(),
            config.outlier_sigma
        ),
    ))
}
