use serde::{Deserialize, Serialize};

use super::defaults;

/// Evidence ledger configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LedgerConfig {
    /// Exponential decay rate for insertion-order weights. Default: 0.1.
    pub insertion_decay_rate: f64,
    /// Number of recent records in the variance window. Default: 10.
    pub variance_window: usize,
    /// Number of recent records in the trend regression. Default: 5.
    pub trend_window: usize,
    /// Slope above which the trend reads improving. Default: 0.05.
    pub improving_slope: f64,
    /// Slope below which the trend reads declining. Default: -0.05.
    pub declining_slope: f64,
    /// Absolute slope below which the trend reads stagnant. Default: 0.01.
    pub stagnant_band: f64,
    /// Included-record count below which a sparse-evidence warning is
    /// attached. Default: 3.
    pub sparse_evidence_floor: usize,
    /// Excluded share above which an exclusion warning is attached.
    /// Default: 0.25.
    pub max_exclusion_share: f64,
    /// Days without new evidence before a staleness warning. Default: 30.
    pub stale_after_days: u32,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            insertion_decay_rate: defaults::DEFAULT_INSERTION_DECAY_RATE,
            variance_window: defaults::DEFAULT_VARIANCE_WINDOW,
            trend_window: defaults::DEFAULT_TREND_WINDOW,
            improving_slope: defaults::DEFAULT_IMPROVING_SLOPE,
            declining_slope: defaults::DEFAULT_DECLINING_SLOPE,
            stagnant_band: defaults::DEFAULT_STAGNANT_BAND,
            sparse_evidence_floor: defaults::DEFAULT_SPARSE_EVIDENCE_FLOOR,
            max_exclusion_share: defaults::DEFAULT_MAX_EXCLUSION_SHARE,
            stale_after_days: defaults::DEFAULT_STALE_AFTER_DAYS,
        }
    }
}
