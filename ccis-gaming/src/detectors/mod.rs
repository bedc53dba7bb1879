//! Gaming pattern detector registry.
//!
//! One module per pattern. Absolute detectors (rapid guessing, answer
//! churn) compare each record against a fixed threshold and run at any
//! batch size; statistical detectors (response-time outliers, uniform
//! timing) measure the batch against itself and need at least
//! `GamingConfig::min_batch` records to say anything.

pub mod answer_churn;
pub mod response_time;
pub mod timing_regularity;

use ccis_core::assessment::TaskEvidence;
use ccis_core::config::GamingConfig;
use ccis_core::models::PatternFlag;

/// Run every detector against a batch and collect all hits.
///
/// Detectors are independent; a batch can trip several at once (a bot
/// is typically both rapid and uniform). Order matches aggregation
/// weight, strongest signal first.
pub fn detect_all(evidence: &[TaskEvidence], config: &GamingConfig) -> Vec<PatternFlag> {
    let mut flags = Vec::new();

    if let Some(flag) = response_time::detect_rapid_guessing(evidence, config) {
        flags.push(flag);
    }
    if let Some(flag) = timing_regularity::detect(evidence, config) {
        flags.push(flag);
    }
    if let Some(flag) = answer_churn::detect(evidence, config) {
        flags.push(flag);
    }
    if let Some(flag) = response_time::detect_outliers(evidence, config) {
        flags.push(flag);
    }

    flags
}

/// Completion times as `f64` milliseconds, batch order preserved.
pub(crate) fn completion_times_ms(evidence: &[TaskEvidence]) -> Vec<f64> {
    evidence
        .iter()
        .map(|e| e.completion_time_ms as f64)
        .collect()
}

pub(crate) fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Population standard deviation around a precomputed mean.
pub(crate) fn std_dev(values: &[f64], mean: f64) -> f64 {
    if values.len() < 2 {
        return 0.0;
    }
    let variance =
        values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / values.len() as f64;
    variance.sqrt()
}
