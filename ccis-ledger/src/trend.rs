//! Performance trend regression.

use ccis_core::config::LedgerConfig;
use ccis_core::models::TrendDirection;

/// Least-squares slope of `values` against their indices (performance
/// change per record). Zero when fewer than two values exist.
pub fn slope(values: &[f64]) -> f64 {
    let n = values.len();
    if n < 2 {
        return 0.0;
    }
    let n_f = n as f64;
    let mean_x = (n_f - 1.0) / 2.0;
    let mean_y = values.iter().sum::<f64>() / n_f;

    let mut covariance = 0.0;
    let mut x_variance = 0.0;
    for (i, y) in values.iter().enumerate() {
        let dx = i as f64 - mean_x;
        covariance += dx * (y - mean_y);
        x_variance += dx * dx;
    }
    // x_variance is positive for n >= 2.
    covariance / x_variance
}

/// Classify a slope computed over at least two records.
///
/// Checked in order: improving, declining, stagnant, stable. The
/// stagnant dead zone is narrower than the improving/declining gates,
/// so small-but-real movement reads stable rather than stagnant.
pub fn classify(slope: f64, config: &LedgerConfig) -> TrendDirection {
    if slope > config.improving_slope {
        TrendDirection::Improving
    } else if slope < config.declining_slope {
        TrendDirection::Declining
    } else if slope.abs() < config.stagnant_band {
        TrendDirection::Stagnant
    } else {
        TrendDirection::Stable
    }
}
