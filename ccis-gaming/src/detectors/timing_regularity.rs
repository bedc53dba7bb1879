//! Uniform timing: completion times too regular to be organic.

use ccis_core::assessment::TaskEvidence;
use ccis_core::config::GamingConfig;
use ccis_core::models::{GamingPattern, PatternFlag};

use super::{completion_times_ms, mean, std_dev};

/// Flag batches whose completion times barely vary.
///
/// Statistical detector: human task times are noisy, so a coefficient
/// of variation under `uniform_timing_cv` across a full batch reads as
/// scripted submission. Severity grades from 0 at the threshold to 1
/// for perfectly identical times.
pub fn detect(evidence: &[TaskEvidence], config: &GamingConfig) -> Option<PatternFlag> {
    if evidence.len() < config.min_batch {
        return None;
    }

    let times = completion_times_ms(evidence);
    let mean = mean(&times);
    if mean <= 0.0 {
        return None;
    }

    let cv = std_dev(&times, mean) / mean;
    if cv >= config.uniform_timing_cv {
        return None;
    }

    let severity = 1.0 - cv / config.uniform_timing_cv;
    Some(PatternFlag::new(
        GamingPattern::UniformTiming,
        severity,
        format!(
            "coefficient of variation {cv:.4} across {} completion times",
            times.len()
        ),
    ))
}
