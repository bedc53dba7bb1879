use serde::{Deserialize, Serialize};

use super::defaults;

/// Certification readiness configuration.
///
/// All criteria are evaluated over included evidence only; a single
/// excluded record can therefore move an assessment out of readiness.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CertificationConfig {
    /// Minimum level ordinal eligible for certification. Default: 3.
    pub min_level: u8,
    /// Minimum included evidence records. Default: 20.
    pub min_evidence_count: usize,
    /// Minimum weighted average performance. Default: 0.90.
    pub min_average_performance: f64,
    /// Minimum average learner confidence. Default: 0.90.
    pub min_average_confidence: f64,
    /// Length of the sustained-performance window in days. Default: 21.
    pub sustained_window_days: u32,
    /// Records required inside the window. Default: 5.
    pub sustained_min_records: usize,
    /// Minimum average performance inside the window. Default: 0.85.
    pub sustained_min_performance: f64,
    /// Records highlighted in the evidence package. Default: 10.
    pub top_evidence_count: usize,
}

impl Default for CertificationConfig {
    fn default() -> Self {
        Self {
            min_level: defaults::DEFAULT_CERT_MIN_LEVEL,
            min_evidence_count: defaults::DEFAULT_CERT_MIN_EVIDENCE,
            min_average_performance: defaults::DEFAULT_CERT_MIN_PERFORMANCE,
            min_average_confidence: defaults::DEFAULT_CERT_MIN_CONFIDENCE,
            sustained_window_days: defaults::DEFAULT_CERT_WINDOW_DAYS,
            sustained_min_records: defaults::DEFAULT_CERT_WINDOW_MIN_RECORDS,
            sustained_min_performance: defaults::DEFAULT_CERT_WINDOW_MIN_PERFORMANCE,
            top_evidence_count: defaults::DEFAULT_CERT_TOP_EVIDENCE,
        }
    }
}
