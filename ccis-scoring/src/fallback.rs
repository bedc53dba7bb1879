//! Primary/fallback scorer composition.

use std::sync::Arc;

use tracing::warn;

use ccis_core::assessment::{BehavioralSignalSet, Score};
use ccis_core::config::ScoringConfig;
use ccis_core::errors::CcisResult;
use ccis_core::traits::IScorer;

use crate::scorer::BehavioralScorer;

/// Scorer that prefers a host-supplied implementation and falls back
/// to the deterministic weighted sum when it fails.
///
/// Hosts plug in model-backed scorers here. A primary failure is
/// logged and absorbed; evidence ingestion never stalls on an external
/// scorer being down.
pub struct FallbackScorer {
    primary: Option<Arc<dyn IScorer>>,
    baseline: BehavioralScorer,
}

impl FallbackScorer {
    /// Deterministic-only stack.
    pub fn deterministic(config: ScoringConfig) -> CcisResult<Self> {
        Ok(Self {
            primary: None,
            baseline: BehavioralScorer::new(config)?,
        })
    }

    /// Use `scorer` first, keeping the deterministic one as fallback.
    pub fn with_primary(mut self, scorer: Arc<dyn IScorer>) -> Self {
        self.primary = Some(scorer);
        self
    }

    pub fn has_primary(&self) -> bool {
        self.primary.is_some()
    }
}

impl Default for FallbackScorer {
    fn default() -> Self {
        Self {
            primary: None,
            baseline: BehavioralScorer::default(),
        }
    }
}

impl IScorer for FallbackScorer {
    fn score(&self, signals: &BehavioralSignalSet) -> CcisResult<Score> {
        if let Some(primary) = &self.primary {
            match primary.score(signals) {
                Ok(score) => return Ok(score),
                Err(err) => {
                    warn!(error = %err, "primary scorer failed, using deterministic fallback");
                }
            }
        }
        self.baseline.score(signals)
    }
}
