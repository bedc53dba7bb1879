use serde::{Deserialize, Serialize};

use super::defaults;
use crate::assessment::CcisLevel;

/// Criteria for advancing out of one level.
///
/// Every criterion must hold simultaneously; there is no partial
/// credit and no skipping levels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdvancementRule {
    /// Level this rule advances out of.
    pub from_level: CcisLevel,
    /// Minimum included evidence records.
    pub min_evidence_count: usize,
    /// Minimum weighted average performance.
    pub min_average_performance: f64,
    /// Minimum average learner confidence.
    pub min_average_confidence: f64,
    /// Minimum days between oldest and newest included records.
    pub min_window_days: u32,
    /// Minimum average signal strength.
    pub min_signal_strength: f64,
}

/// The advancement rule table.
///
/// The top level has no rule: mastery is reached by advancing into it,
/// not out of it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AdvancementConfig {
    pub rules: Vec<AdvancementRule>,
}

impl AdvancementConfig {
    /// Rule governing advancement out of `level`, if one exists.
    pub fn rule_for(&self, level: CcisLevel) -> Option<&AdvancementRule> {
        self.rules.iter().find(|r| r.from_level == level)
    }
}

impl Default for AdvancementConfig {
    fn default() -> Self {
        Self {
            rules: vec![
                AdvancementRule {
                    from_level: CcisLevel::Dependent,
                    min_evidence_count: defaults::DEFAULT_L1_MIN_EVIDENCE,
                    min_average_performance: defaults::DEFAULT_L1_MIN_PERFORMANCE,
                    min_average_confidence: defaults::DEFAULT_L1_MIN_CONFIDENCE,
                    min_window_days: defaults::DEFAULT_L1_MIN_WINDOW_DAYS,
                    min_signal_strength: defaults::DEFAULT_L1_MIN_SIGNAL_STRENGTH,
                },
                AdvancementRule {
                    from_level: CcisLevel::Guided,
                    min_evidence_count: defaults::DEFAULT_L2_MIN_EVIDENCE,
                    min_average_performance: defaults::DEFAULT_L2_MIN_PERFORMANCE,
                    min_average_confidence: defaults::DEFAULT_L2_MIN_CONFIDENCE,
                    min_window_days: defaults::DEFAULT_L2_MIN_WINDOW_DAYS,
                    min_signal_strength: defaults::DEFAULT_L2_MIN_SIGNAL_STRENGTH,
                },
                AdvancementRule {
                    from_level: CcisLevel::SelfDirected,
                    min_evidence_count: defaults::DEFAULT_L3_MIN_EVIDENCE,
                    min_average_performance: defaults::DEFAULT_L3_MIN_PERFORMANCE,
                    min_average_confidence: defaults::DEFAULT_L3_MIN_CONFIDENCE,
                    min_window_days: defaults::DEFAULT_L3_MIN_WINDOW_DAYS,
                    min_signal_strength: defaults::DEFAULT_L3_MIN_SIGNAL_STRENGTH,
                },
            ],
        }
    }
}
