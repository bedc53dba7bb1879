//! Ledger statistics recomputation.

use chrono::{DateTime, Utc};

use ccis_core::assessment::TaskEvidence;
use ccis_core::config::{LedgerConfig, PlateauConfig};
use ccis_core::models::{DataQualityKind, DataQualityWarning, LedgerStatistics, TrendDirection};

use crate::{plateau_risk, trend, weights};

/// Computes [`LedgerStatistics`] from an evidence slice.
///
/// Records excluded by the gaming feedback loop contribute only to the
/// exclusion count and completeness; every aggregate, window, and risk
/// figure is computed over included records alone. An empty ledger
/// yields the default statistics.
#[derive(Debug, Clone)]
pub struct LedgerCalculator {
    config: LedgerConfig,
    plateau: PlateauConfig,
}

impl LedgerCalculator {
    pub fn new(config: LedgerConfig, plateau: PlateauConfig) -> Self {
        Self { config, plateau }
    }

    pub fn config(&self) -> &LedgerConfig {
        &self.config
    }

    /// Weight for the next record appended to a ledger of `ledger_len`
    /// records. Positions are permanent; exclusions do not reassign
    /// them.
    pub fn next_weight(&self, ledger_len: usize) -> f64 {
        weights::next_weight(self.config.insertion_decay_rate, ledger_len)
    }

    /// Recompute all statistics from scratch.
    pub fn recompute(&self, evidence: &[TaskEvidence], now: DateTime<Utc>) -> LedgerStatistics {
        let total = evidence.len();
        if total == 0 {
            return LedgerStatistics::default();
        }

        let included: Vec<&TaskEvidence> =
            evidence.iter().filter(|e| e.counts_toward_stats()).collect();
        let included_count = included.len();
        let excluded_count = total - included_count;
        let completeness = included_count as f64 / total as f64;

        let (weighted_average_performance, average_confidence, average_signal_strength) =
            if included.is_empty() {
                (0.0, 0.0, 0.0)
            } else {
                let weight_sum: f64 = included.iter().map(|e| e.weight).sum();
                let weighted_performance: f64 = included
                    .iter()
                    .map(|e| e.weight * e.performance.value())
                    .sum();
                let weighted_average = if weight_sum > 0.0 {
                    weighted_performance / weight_sum
                } else {
                    0.0
                };
                let count = included_count as f64;
                let confidence =
                    included.iter().map(|e| e.confidence.value()).sum::<f64>() / count;
                let signal_strength =
                    included.iter().map(|e| e.signals.mean()).sum::<f64>() / count;
                (weighted_average, confidence, signal_strength)
            };

        let performances: Vec<f64> =
            included.iter().map(|e| e.performance.value()).collect();

        let variance_window = tail(&performances, self.config.variance_window);
        let performance_variance = population_variance(variance_window);

        let trend_values = tail(&performances, self.config.trend_window);
        let (trend_slope, trend) = if trend_values.len() < 2 {
            (0.0, TrendDirection::Stable)
        } else {
            let slope = trend::slope(trend_values);
            (slope, trend::classify(slope, &self.config))
        };

        // Improvement is measured over the wider variance window so a
        // plateau cannot hide behind five recent lucky records.
        let improvement_rate = if variance_window.len() < 2 {
            0.0
        } else {
            trend::slope(variance_window)
        };

        let plateau_risk = plateau_risk::plateau_risk(
            included_count,
            performance_variance,
            improvement_rate,
            &self.plateau,
        );

        let first_recorded_at = included.iter().map(|e| e.recorded_at).min();
        let last_recorded_at = included.iter().map(|e| e.recorded_at).max();

        let warnings = self.quality_warnings(
            included_count,
            excluded_count,
            total,
            last_recorded_at,
            now,
        );

        LedgerStatistics {
            weighted_average_performance,
            average_confidence,
            performance_variance,
            trend_slope,
            trend,
            improvement_rate,
            average_signal_strength,
            plateau_risk,
            included_count,
            excluded_count,
            completeness,
            warnings,
            first_recorded_at,
            last_recorded_at,
        }
    }

    fn quality_warnings(
        &self,
        included_count: usize,
        excluded_count: usize,
        total: usize,
        last_recorded_at: Option<DateTime<Utc>>,
        now: DateTime<Utc>,
    ) -> Vec<DataQualityWarning> {
        let mut warnings = Vec::new();

        if included_count < self.config.sparse_evidence_floor {
            warnings.push(DataQualityWarning::new(
                DataQualityKind::SparseEvidence,
                format!(
                    "only {included_count} included records, statistics unreliable below {}",
                    self.config.sparse_evidence_floor
                ),
            ));
        }

        let exclusion_share = excluded_count as f64 / total as f64;
        if excluded_count > 0 && exclusion_share > self.config.max_exclusion_share {
            warnings.push(DataQualityWarning::new(
                DataQualityKind::HighExclusionShare,
                format!("{excluded_count} of {total} records excluded by gaming flags"),
            ));
        }

        if let Some(last) = last_recorded_at {
            let idle_days = (now - last).num_days();
            if idle_days >= i64::from(self.config.stale_after_days) {
                warnings.push(DataQualityWarning::new(
                    DataQualityKind::StaleEvidence,
                    format!("newest included record is {idle_days} days old"),
                ));
            }
        }

        warnings
    }
}

impl Default for LedgerCalculator {
    fn default() -> Self {
        Self::new(LedgerConfig::default(), PlateauConfig::default())
    }
}

/// Last `window` values of a slice.
fn tail(values: &[f64], window: usize) -> &[f64] {
    let start = values.len().saturating_sub(window);
    &values[start..]
}

/// Population variance. Zero for empty input.
fn population_variance(values: &[f64]) -> f64 {
    let n = values.len();
    if n == 0 {
        return 0.0;
    }
    let mean = values.iter().sum::<f64>() / n as f64;
    values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n as f64
}
