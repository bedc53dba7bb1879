//! Derived statistics over an evidence ledger.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use crate::models::DataQualityWarning;

/// Direction of the recent performance trend.
///
/// Classified from the least-squares slope over the most recent
/// included records. `Stagnant` is the narrow dead zone around zero;
/// `Stable` covers small but non-negligible movement and doubles as the
/// answer when there are too few points to regress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum TrendDirection {
    Improving,
    Declining,
    Stagnant,
    Stable,
}

impl Default for TrendDirection {
    fn default() -> Self {
        Self::Stable
    }
}

impl fmt::Display for TrendDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Improving => "improving",
            Self::Declining => "declining",
            Self::Stagnant => "stagnant",
            Self::Stable => "stable",
        };
        f.write_str(name)
    }
}

/// Statistics recomputed from scratch after every ledger change.
///
/// All aggregates cover only records that still count toward stats;
/// excluded records contribute to `excluded_count` and nothing else.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct LedgerStatistics {
    /// Performance average under insertion-order weights.
    pub weighted_average_performance: f64,
    /// Unweighted mean of learner confidence.
    pub average_confidence: f64,
    /// Population variance of performance over the recent window.
    pub performance_variance: f64,
    /// Least-squares slope of recent performance per record index.
    pub trend_slope: f64,
    pub trend: TrendDirection,
    /// Slope over the wider variance window; drives plateau risk.
    pub improvement_rate: f64,
    /// Mean of per-record signal means.
    pub average_signal_strength: f64,
    /// Plateau risk on [0, 1].
    pub plateau_risk: f64,
    pub included_count: usize,
    pub excluded_count: usize,
    /// Share of the ledger that still counts toward stats.
    pub completeness: f64,
    pub warnings: Vec<DataQualityWarning>,
    #[ts(optional)]
    pub first_recorded_at: Option<DateTime<Utc>>,
    #[ts(optional)]
    pub last_recorded_at: Option<DateTime<Utc>>,
}

impl LedgerStatistics {
    /// Days between the oldest and newest included records. Zero when
    /// fewer than two records exist.
    pub fn evidence_span_days(&self) -> f64 {
        match (self.first_recorded_at, self.last_recorded_at) {
            (Some(first), Some(last)) => (last - first).num_seconds() as f64 / 86_400.0,
            _ => 0.0,
        }
    }
}

impl Default for LedgerStatistics {
    fn default() -> Self {
        Self {
            weighted_average_performance: 0.0,
            average_confidence: 0.0,
            performance_variance: 0.0,
            trend_slope: 0.0,
            trend: TrendDirection::default(),
            improvement_rate: 0.0,
            average_signal_strength: 0.0,
            plateau_risk: 0.0,
            included_count: 0,
            excluded_count: 0,
            completeness: 0.0,
            warnings: Vec::new(),
            first_recorded_at: None,
            last_recorded_at: None,
        }
    }
}
