//! Discrete level classification.

use ccis_core::assessment::{CcisLevel, LevelPlacement};
use ccis_core::errors::SignalError;

/// Maps progress percentages onto the CCIS scale.
///
/// Stateless; the bands are fixed properties of [`CcisLevel`]. The
/// classifier exists so callers go through one seam (and one set of
/// range checks) instead of hand-rolling comparisons.
#[derive(Debug, Clone, Copy, Default)]
pub struct LevelClassifier;

impl LevelClassifier {
    pub fn new() -> Self {
        Self
    }

    /// Classify a raw percentage. Fails outside [0, 100].
    pub fn classify(&self, percentage: f64) -> Result<LevelPlacement, SignalError> {
        LevelPlacement::from_percentage(percentage)
    }

    /// Position within a level's band, given the fraction of the band
    /// covered. Total: garbage fractions clamp to the band floor.
    pub fn band_position(&self, level: CcisLevel, fraction: f64) -> LevelPlacement {
        LevelPlacement::at_band_fraction(level, fraction)
    }
}
