//! Weighted behavioral scoring.

use ccis_core::assessment::{BehavioralSignalSet, Score};
use ccis_core::config::ScoringConfig;
use ccis_core::errors::CcisResult;
use ccis_core::traits::IScorer;

/// The deterministic evidence scorer.
///
/// Computes the dot product of the signal set with the configured
/// weights. With weights summing to 1.0 and every signal on [0, 1],
/// the result lands on [0, 1] without clamping doing any real work;
/// the saturating constructor only absorbs float dust at the edges.
#[derive(Debug, Clone)]
pub struct BehavioralScorer {
    config: ScoringConfig,
}

impl BehavioralScorer {
    /// Build a scorer, rejecting configs whose weights do not sum to 1.
    pub fn new(config: ScoringConfig) -> CcisResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }
}

impl Default for BehavioralScorer {
    fn default() -> Self {
        // The compiled default weights always validate.
        Self {
            config: ScoringConfig::default(),
        }
    }
}

impl IScorer for BehavioralScorer {
    fn score(&self, signals: &BehavioralSignalSet) -> CcisResult<Score> {
        signals.validate()?;
        let weighted: f64 = self
            .config
            .weights()
            .iter()
            .zip(signals.as_array())
            .map(|(weight, value)| weight * value)
            .sum();
        Ok(Score::saturating(weighted))
    }
}
